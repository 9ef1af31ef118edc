//! Role catalog: the record type, the built-in dataset, and JSON/JSONL loading.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub name: String,
    /// Comma-separated skill phrases, e.g. "python, machine learning, sql".
    #[serde(alias = "skills")]
    pub skill_text: String,
    pub avg_salary: u64,
}

impl RoleRecord {
    pub fn new(name: impl Into<String>, skill_text: impl Into<String>, avg_salary: u64) -> Self {
        Self { name: name.into(), skill_text: skill_text.into(), avg_salary }
    }

    /// Lowercased, trimmed skill phrases in profile order. Duplicates are kept.
    pub fn skill_tokens(&self) -> Vec<String> {
        self.skill_text
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

const BASE_ROLES: &[(&str, &str, u64)] = &[
    ("Data Scientist", "python, machine learning, statistics, pandas, numpy, sklearn, data visualization, SQL, deep learning, communication", 1_200_000),
    ("Machine Learning Engineer", "python, tensorflow, pytorch, machine learning, algorithms, system design, docker, kubernetes, mlops", 1_400_000),
    ("Data Analyst", "excel, sql, tableau, power bi, pandas, data cleaning, visualization, statistics", 700_000),
    ("Business Analyst", "excel, sql, communication, stakeholder management, requirement gathering, powerpoint, tableau", 850_000),
    ("Backend Developer", "java, springboot, sql, rest api, microservices, jdbc, docker, git", 900_000),
    ("Frontend Developer", "html, css, javascript, react, responsive design, webpack, ui/ux basics", 800_000),
    ("Full Stack Developer", "javascript, react, nodejs, express, sql, mongodb, rest api, docker", 1_100_000),
    ("DevOps Engineer", "linux, docker, kubernetes, ci/cd, aws, terraform, monitoring, scripting", 1_300_000),
    ("AI Researcher", "python, deep learning, pytorch, tensorflow, research, math, numpy, publications", 1_600_000),
    ("NLP Engineer", "python, nlp, transformers, huggingface, tokenization, pytorch, text preprocessing", 1_400_000),
    ("Computer Vision Engineer", "python, opencv, deep learning, convolutional networks, pytorch, tensorflow", 1_450_000),
    ("Product Manager", "product management, communication, stakeholder management, analytics, roadmap, prioritization", 1_500_000),
    ("QA Engineer", "testing, selenium, automation, pytest, test plans, bug reporting", 700_000),
    ("Cloud Engineer", "aws, azure, gcp, cloud architecture, terraform, docker, kubernetes", 1_400_000),
    ("Mobile Developer", "android, kotlin, java, ios, swift, mobile ui, rest api", 1_000_000),
    ("Cybersecurity Analyst", "networking, security, linux, incident response, penetration testing, wireshark", 1_300_000),
    ("Business Intelligence Engineer", "sql, tableau, power bi, data modeling, etl, redshift, bigquery", 1_200_000),
    ("Data Engineer", "python, spark, sql, etl, airflow, data pipelines, aws", 1_350_000),
    ("SRE (Site Reliability Engineer)", "linux, monitoring, terraform, kubernetes, python, incident management", 1_450_000),
    ("Automation Engineer", "selenium, python, test automation, ci/cd, jenkins, pytest", 900_000),
    ("Technical Writer", "technical writing, communication, documentation, markdown, product knowledge", 700_000),
    ("Sales Engineer", "communication, product knowledge, sales, demos, crm, negotiation", 850_000),
    ("HR Analytics", "excel, sql, python, analytics, communication, dashboards", 800_000),
    ("Cloud Architect", "architectural design, aws, azure, gcp, security, cost optimization", 2_000_000),
    ("Robotics Engineer", "c++, robotics, control systems, sensors, python, ros", 1_300_000),
    ("Game Developer", "unity, unreal engine, c++, c#, game physics, 3d modeling, opengl, gameplay programming", 1_100_000),
    ("Blockchain Developer", "solidity, ethereum, smart contracts, web3, truffle, hardhat, javascript, cryptography", 1_600_000),
    ("AR/VR Developer", "unity, unreal engine, ar, vr, xr, c#, spatial computing, 3d design, openxr", 1_400_000),
    ("Embedded Systems Engineer", "c, c++, rtos, microcontrollers, firmware, hardware, iot, serial protocols, embedded linux", 1_200_000),
    ("Data Science Manager", "python, machine learning, leadership, team management, stakeholder communication, strategy, data strategy", 2_200_000),
    ("Technical Program Manager", "project management, agile, scrum, communication, risk management, roadmap, stakeholder management, jira", 1_800_000),
    ("Security Engineer", "penetration testing, security, vulnerability assessment, siem, python, linux, cloud security, compliance", 1_600_000),
    ("UI/UX Designer", "figma, sketch, user research, wireframing, prototyping, usability testing, design systems, css", 900_000),
    ("Flutter Developer", "flutter, dart, mobile development, android, ios, rest api, firebase, ui design", 1_000_000),
    ("Django Developer", "python, django, rest api, postgresql, orm, html, css, docker", 900_000),
    ("MLOps Engineer", "mlops, python, docker, kubernetes, mlflow, kubeflow, ci/cd, model deployment, monitoring", 1_500_000),
];

/// Built-in dataset: every base role, then a Junior and a Senior variant per base role.
pub fn default_roles() -> Vec<RoleRecord> {
    let mut roles: Vec<RoleRecord> = BASE_ROLES
        .iter()
        .map(|(name, skills, salary)| RoleRecord::new(*name, *skills, *salary))
        .collect();
    for (name, skills, salary) in BASE_ROLES {
        roles.push(RoleRecord::new(
            format!("Junior {name}"),
            format!("{skills}, basics, eagerness to learn"),
            salary * 55 / 100,
        ));
        roles.push(RoleRecord::new(
            format!("Senior {name}"),
            format!("{skills}, leadership, architecture, mentoring"),
            salary * 160 / 100,
        ));
    }
    roles
}

/// Load roles from a `.json` file, a `.jsonl` file, or a directory containing either.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<RoleRecord>> {
    let path = path.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        bail!("catalog path {} does not exist", path.display());
    }

    let mut roles = Vec::new();
    for file in files {
        if extension(&file) == Some("jsonl") {
            load_jsonl(&file, &mut roles)?;
        } else {
            load_json(&file, &mut roles)?;
        }
    }
    dedupe_check(&roles)?;
    tracing::info!(path = %path.display(), num_roles = roles.len(), "loaded role catalog");
    Ok(roles)
}

fn extension(p: &Path) -> Option<&str> {
    p.extension().and_then(|s| s.to_str())
}

fn load_jsonl(file: &Path, roles: &mut Vec<RoleRecord>) -> Result<()> {
    let reader = BufReader::new(File::open(file).with_context(|| format!("opening {}", file.display()))?);
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let role: RoleRecord = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid role record", file.display(), lineno + 1))?;
        push_role(role, roles);
    }
    Ok(())
}

fn load_json(file: &Path, roles: &mut Vec<RoleRecord>) -> Result<()> {
    let reader = BufReader::new(File::open(file).with_context(|| format!("opening {}", file.display()))?);
    let json: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                push_role(serde_json::from_value(v)?, roles);
            }
        }
        serde_json::Value::Object(_) => push_role(serde_json::from_value(json)?, roles),
        _ => tracing::warn!(file = %file.display(), "catalog file holds neither an object nor an array"),
    }
    Ok(())
}

fn push_role(role: RoleRecord, roles: &mut Vec<RoleRecord>) {
    if role.name.trim().is_empty() {
        tracing::warn!(skills = %role.skill_text, "skipping role with blank name");
        return;
    }
    roles.push(role);
}

fn dedupe_check(roles: &[RoleRecord]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for r in roles {
        if !seen.insert(r.name.as_str()) {
            bail!("duplicate role name in catalog: {}", r.name);
        }
    }
    Ok(())
}

/// Write roles as JSON lines, one record per line.
pub fn write_jsonl<P: AsRef<Path>>(path: P, roles: &[RoleRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?);
    for role in roles {
        serde_json::to_writer(&mut out, role)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
