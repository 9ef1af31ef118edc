use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

pub const DEFAULT_KEY: &str = "default";

lazy_static! {
    static ref SENIORITY: Regex = Regex::new(r"(?i)^\s*(junior|senior|lead|staff|principal)\s+").expect("valid regex");
}

const BUILTIN: &[(&str, &[&str])] = &[
    ("Mobile Developer", &[
        "Build a simple ToDo app (Android or iOS) with CRUD + local storage",
        "Build a weather app with REST API integration (public API)",
        "Deploy one app on Play Store / TestFlight (basic release workflow)",
    ]),
    ("Backend Developer", &[
        "Build REST API for a Bookstore using Spring Boot",
        "Implement JWT auth + CRUD endpoints",
        "Containerize with Docker",
    ]),
    ("Data Scientist", &[
        "End-to-end Titanic-like classification project",
        "Exploratory Data Analysis + visual storytelling",
        "Small web demo (Streamlit) showing predictions",
    ]),
    ("Data Analyst", &[
        "Clean a messy public dataset and document every step",
        "Build an interactive sales dashboard in Tableau or Power BI",
        "Write five business questions and answer them with SQL",
    ]),
    ("Frontend Developer", &[
        "Build a responsive portfolio site from a Figma mock",
        "Create a React app that consumes a public REST API",
        "Audit and fix accessibility issues on an existing page",
    ]),
    ("DevOps Engineer", &[
        "Write a CI/CD pipeline that tests and deploys a small web app",
        "Provision the app's infrastructure with Terraform",
        "Add monitoring and alerting with Prometheus + Grafana",
    ]),
    ("Machine Learning Engineer", &[
        "Train a model and serve it behind a FastAPI endpoint",
        "Package the service with Docker and deploy to Kubernetes",
        "Track experiments and model versions with MLflow",
    ]),
    (DEFAULT_KEY, &[
        "Build a small portfolio project showcasing the missing skills",
        "Convert the project into a short video/demo",
        "Add code to GitHub and write a README",
    ]),
];

/// Role name -> mini-project ideas, with a reserved `"default"` entry.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    keys: Vec<String>,
    entries: HashMap<String, Vec<String>>,
}

impl Default for ProjectCatalog {
    fn default() -> Self { Self::builtin() }
}

impl ProjectCatalog {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect())))
    }

    /// Builds a catalog from ordered entries. A missing or empty `"default"` entry is
    /// filled from the built-in one so lookups always have somewhere to land.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut keys = Vec::new();
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, values) in entries {
            if map.insert(key.clone(), values).is_none() {
                keys.push(key);
            }
        }
        if map.get(DEFAULT_KEY).map_or(true, |v| v.is_empty()) {
            let fallback = BUILTIN
                .iter()
                .find(|(k, _)| *k == DEFAULT_KEY)
                .map(|(_, v)| v.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default();
            if map.insert(DEFAULT_KEY.to_string(), fallback).is_none() {
                keys.push(DEFAULT_KEY.to_string());
            }
        }
        Self { keys, entries: map }
    }

    /// Mini-projects for `role_name`. First hit wins:
    /// exact name, name without a seniority prefix, text before `" - "`, text before `","`,
    /// case-insensitive containment against a key in either direction, then `"default"`.
    pub fn lookup(&self, role_name: &str) -> &[String] {
        let stripped = SENIORITY.replace(role_name, "");
        let candidates = [
            role_name,
            &*stripped,
            role_name.split(" - ").next().unwrap_or(role_name),
            role_name.split(',').next().unwrap_or(role_name),
        ];
        for key in candidates {
            if let Some(hit) = self.hit(key) {
                return hit;
            }
        }

        let lowered = role_name.trim().to_lowercase();
        if !lowered.is_empty() {
            let found = self.keys.iter().filter(|k| k.as_str() != DEFAULT_KEY).find(|k| {
                let k = k.to_lowercase();
                lowered.contains(&k) || k.contains(&lowered)
            });
            if let Some(hit) = found.and_then(|k| self.hit(k)) {
                return hit;
            }
        }
        self.entries.get(DEFAULT_KEY).map(Vec::as_slice).unwrap_or(&[])
    }

    fn hit(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).filter(|v| !v.is_empty()).map(Vec::as_slice)
    }
}
