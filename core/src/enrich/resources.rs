use std::collections::{HashMap, HashSet};

/// Cap on the combined resource list for one role.
pub const MAX_RESOURCES: usize = 6;
/// Cap on entries taken from a single catalog hit.
pub const PER_SKILL_LIMIT: usize = 4;

const BUILTIN: &[(&str, &[&str])] = &[
    ("python", &["Complete Python Bootcamp (Udemy) by Jose Portilla", "Python for Data Science (Coursera)"]),
    ("machine learning", &["Machine Learning by Andrew Ng (Coursera)", "Hands-On ML with Scikit-Learn, Keras & TF (book)"]),
    ("deep learning", &["Deep Learning Specialization (Coursera)", "fast.ai Practical Deep Learning"]),
    ("nlp", &["Hugging Face Course", "Natural Language Processing Specialization (Coursera)"]),
    ("sql", &["Mode Analytics SQL Tutorial", "SQL for Data Science (Coursera)"]),
    ("react", &["React - The Complete Guide (Udemy)", "Official React docs (interactive tutorial)"]),
    ("docker", &["Docker for Developers (Udemy)", "Play with Docker labs"]),
    ("kubernetes", &["Kubernetes Basics (official)", "CKA practice resources"]),
    ("aws", &["AWS Cloud Practitioner / Solutions Architect fundamentals"]),
    ("data visualization", &["Data Visualization with Tableau (Coursera)", "Storytelling with Data (book)"]),
    ("statistics", &["Intro to Statistics (Khan Academy)", "Statistics for Data Science (Coursera)"]),
    ("pandas", &["Data Analysis with Pandas (Kaggle)", "Pandas official tutorial"]),
    ("tensorflow", &["TensorFlow in Practice Specialization (Coursera)"]),
    ("pytorch", &["Deep Learning with PyTorch (Udemy)"]),
    ("git", &["Git & GitHub Crash Course (Udemy)"]),
    ("excel", &["Excel for Data Analysis (Coursera)"]),
    ("communication", &["Improving Communication Skills (Coursera)"]),
    ("android", &["Android Development for Beginners (Udemy)", "Android Developer Official Docs"]),
    ("kotlin", &["Kotlin for Android Developers (Udemy)", "Kotlinlang.org tutorials"]),
    ("ios", &["iOS App Development with Swift (Udemy)", "Apple Developer Tutorials"]),
    ("swift", &["Swift Programming: The Big Nerd Ranch Guide", "Apple Swift Playgrounds"]),
    ("mobile ui", &["Material Design Guidelines", "Mobile UI/UX courses on Coursera"]),
    ("rest api", &["REST API design (Udemy)", "Build APIs with Flask / FastAPI (tutorials)"]),
    ("leadership", &["Leadership courses on Coursera", "Managerial Skills resources"]),
    ("architecture", &["System Design Primer (GitHub)", "Designing Data-Intensive Applications (book)"]),
    ("javascript", &["JavaScript.info (modern tutorial)", "Eloquent JavaScript (book)"]),
    ("linux", &["Linux Command Line Basics (Udacity)", "The Linux Command Line (book)"]),
    ("terraform", &["HashiCorp Learn: Terraform tutorials"]),
    ("tableau", &["Tableau Public training videos"]),
    ("spark", &["Spark: The Definitive Guide (book)", "Databricks Academy free courses"]),
];

/// Skill keyword -> curated resources, iterated in definition order.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    keys: Vec<String>,
    entries: HashMap<String, Vec<String>>,
}

impl Default for ResourceCatalog {
    fn default() -> Self { Self::builtin() }
}

impl ResourceCatalog {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect())))
    }

    /// Keys are lowercased. A repeated key replaces the earlier value but keeps its position.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut keys = Vec::new();
        let mut map = HashMap::new();
        for (key, values) in entries {
            let key = key.trim().to_lowercase();
            if map.insert(key.clone(), values).is_none() {
                keys.push(key);
            }
        }
        Self { keys, entries: map }
    }

    /// Exact key first, then the first key (definition order) that contains or is contained by `skill`.
    pub fn lookup(&self, skill: &str) -> Option<&[String]> {
        let key = skill.trim().to_lowercase();
        if let Some(hit) = self.entries.get(&key) {
            return Some(hit.as_slice());
        }
        self.keys
            .iter()
            .find(|k| key.contains(k.as_str()) || k.contains(key.as_str()))
            .map(|k| self.entries[k].as_slice())
    }

    /// Resources for a list of missing skills: deduplicated, at most [`MAX_RESOURCES`].
    pub fn resources_for(&self, missing: &[String]) -> Vec<String> {
        let mut collected: Vec<String> = Vec::new();
        for skill in missing {
            match self.lookup(skill) {
                Some(hit) => collected.extend(hit.iter().take(PER_SKILL_LIMIT).cloned()),
                None => collected.push(format!("Search a practical course for '{skill}' on Coursera/Udemy")),
            }
        }
        let mut seen: HashSet<String> = HashSet::new();
        collected.retain(|r| seen.insert(r.clone()));
        collected.truncate(MAX_RESOURCES);
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(v: &[&str]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn exact_hit() {
        let cat = ResourceCatalog::builtin();
        assert_eq!(cat.resources_for(&owned(&["pandas"])), owned(&["Data Analysis with Pandas (Kaggle)", "Pandas official tutorial"]));
    }

    #[test]
    fn containment_uses_definition_order() {
        let cat = ResourceCatalog::from_entries(vec![
            ("learning".to_string(), owned(&["first"])),
            ("machine learning".to_string(), owned(&["second"])),
        ]);
        // "deep learning" contains "learning", which is defined first
        assert_eq!(cat.resources_for(&owned(&["deep learning"])), owned(&["first"]));
    }

    #[test]
    fn unknown_skill_gets_placeholder() {
        let cat = ResourceCatalog::builtin();
        let out = cat.resources_for(&owned(&["origami"]));
        assert_eq!(out, owned(&["Search a practical course for 'origami' on Coursera/Udemy"]));
    }

    #[test]
    fn capped_and_deduplicated() {
        let cat = ResourceCatalog::builtin();
        let missing = owned(&["python", "python", "sql", "pandas", "statistics", "excel"]);
        let out = cat.resources_for(&missing);
        assert_eq!(out.len(), MAX_RESOURCES);
        let unique: HashSet<&String> = out.iter().collect();
        assert_eq!(unique.len(), out.len());
        assert_eq!(out[0], "Complete Python Bootcamp (Udemy) by Jose Portilla");
    }

    #[test]
    fn per_skill_limit_applies() {
        let many = owned(&["a", "b", "c", "d", "e"]);
        let cat = ResourceCatalog::from_entries(vec![("rust".to_string(), many)]);
        assert_eq!(cat.resources_for(&owned(&["rust"])), owned(&["a", "b", "c", "d"]));
    }

    #[test]
    fn empty_missing_list_yields_nothing() {
        assert!(ResourceCatalog::builtin().resources_for(&[]).is_empty());
    }
}
