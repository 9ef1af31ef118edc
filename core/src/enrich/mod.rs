//! Turns a role's skill gaps into resources, a four-week plan and project ideas.
//! Every lookup has a fallback, so enrichment cannot fail.

pub mod plan;
pub mod projects;
pub mod resources;

pub use plan::{action_plan, GENERIC_PLAN, PLAN_WEEKS};
pub use projects::ProjectCatalog;
pub use resources::{ResourceCatalog, MAX_RESOURCES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub resources: Vec<String>,
    pub action_plan: Vec<String>,
    pub mini_projects: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Enricher {
    resources: ResourceCatalog,
    projects: ProjectCatalog,
}

impl Enricher {
    pub fn new(resources: ResourceCatalog, projects: ProjectCatalog) -> Self {
        Self { resources, projects }
    }

    pub fn enrich(&self, role_name: &str, missing: &[String]) -> Enrichment {
        Enrichment {
            resources: self.resources.resources_for(missing),
            action_plan: action_plan(missing),
            mini_projects: self.projects.lookup(role_name).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_everything_still_yields_a_plan() {
        let e = Enricher::default();
        let out = e.enrich("Underwater Basket Weaver", &["reed sourcing".to_string()]);
        assert_eq!(out.resources, vec!["Search a practical course for 'reed sourcing' on Coursera/Udemy".to_string()]);
        assert_eq!(out.action_plan.len(), PLAN_WEEKS);
        assert!(!out.mini_projects.is_empty());
    }
}
