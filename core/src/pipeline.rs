use crate::calibrate::{ScoreCalibrator, Tier};
use crate::catalog::RoleRecord;
use crate::enrich::{Enricher, ProjectCatalog, ResourceCatalog};
use crate::error::{RecommendError, Result};
use crate::gap::{analyze, parse_user_skills};
use crate::index::TextIndex;
use crate::matcher::rank;
use crate::settings::Settings;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const NO_STRONG_MATCH_SUGGESTION: &str = "None of your skills strongly matched a role in our catalog. \
Try adding more specific, widely used keywords such as programming languages, tools or frameworks \
(e.g. python, sql, react, docker, excel).";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub role: String,
    /// Calibrated percentage, one decimal.
    pub match_score: f64,
    pub avg_salary: u64,
    pub strengths: Vec<String>,
    pub missing_skills: Vec<String>,
    pub resources: Vec<String>,
    pub action_plan: Vec<String>,
    pub mini_projects: Vec<String>,
    pub headline: String,
    pub confidence_tier: Tier,
    pub low_confidence: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RoleRecommendation>,
    pub total_results: usize,
    pub input_skills: String,
    pub no_strong_match: bool,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub dataset_rows: usize,
    pub vocab_size: usize,
}

/// Everything a query needs, built once and read-only afterwards.
#[derive(Debug)]
pub struct Engine {
    roles: Vec<RoleRecord>,
    index: TextIndex,
    calibrator: ScoreCalibrator,
    enricher: Enricher,
    settings: Settings,
}

impl Engine {
    /// Build with the built-in resource and project catalogs.
    pub fn build(roles: Vec<RoleRecord>, settings: Settings) -> Result<Self> {
        Self::with_catalogs(roles, ResourceCatalog::builtin(), ProjectCatalog::builtin(), settings)
    }

    pub fn with_catalogs(roles: Vec<RoleRecord>, resources: ResourceCatalog, projects: ProjectCatalog, settings: Settings) -> Result<Self> {
        settings.validate()?;
        let index = TextIndex::build(&roles, &settings)?;
        Ok(Self {
            roles,
            index,
            calibrator: ScoreCalibrator::new(settings.low_confidence_threshold),
            enricher: Enricher::new(resources, projects),
            settings,
        })
    }

    pub fn index(&self) -> &TextIndex { &self.index }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn stats(&self) -> EngineStats {
        EngineStats { dataset_rows: self.roles.len(), vocab_size: self.index.vocab_size() }
    }

    pub fn validate_request(&self, skills_text: &str, top_n: usize) -> Result<()> {
        validate(&self.settings, skills_text, top_n)
    }

    /// Rank, calibrate and enrich the best `top_n` roles for a free-text skills list.
    pub fn recommend(&self, skills_text: &str, top_n: usize) -> Result<RecommendationResponse> {
        self.validate_request(skills_text, top_n)?;
        let input = skills_text.trim();

        let query = self.index.vectorize(input);
        let matches = rank(&self.index, &self.roles, &query, top_n).map_err(|e| {
            tracing::error!(error = %e, skills = input, top_n, "ranking failed");
            e
        })?;

        let user_tokens = parse_user_skills(input);
        let recommendations: Vec<RoleRecommendation> = matches
            .iter()
            .map(|m| {
                let calibrated = self.calibrator.calibrate(m.raw_score);
                let gap = analyze(&user_tokens, &m.role.skill_tokens());
                let enrichment = self.enricher.enrich(&m.role.name, &gap.missing);
                RoleRecommendation {
                    role: m.role.name.clone(),
                    match_score: calibrated.percentage,
                    avg_salary: m.role.avg_salary,
                    strengths: gap.strengths,
                    missing_skills: gap.missing,
                    resources: enrichment.resources,
                    action_plan: enrichment.action_plan,
                    mini_projects: enrichment.mini_projects,
                    headline: calibrated.tier.headline().to_string(),
                    confidence_tier: calibrated.tier,
                    low_confidence: calibrated.low_confidence,
                }
            })
            .collect();

        // Only decided once every result has been calibrated
        let no_strong_match = recommendations.iter().all(|r| r.low_confidence);
        tracing::debug!(top_n, results = recommendations.len(), no_strong_match, "recommendation computed");

        Ok(RecommendationResponse {
            total_results: recommendations.len(),
            recommendations,
            input_skills: input.to_string(),
            no_strong_match,
            suggestion: no_strong_match.then(|| NO_STRONG_MATCH_SUGGESTION.to_string()),
        })
    }
}

fn validate(settings: &Settings, skills_text: &str, top_n: usize) -> Result<()> {
    let trimmed = skills_text.trim();
    if trimmed.is_empty() {
        return Err(RecommendError::Validation("skills must not be blank".into()));
    }
    if trimmed.chars().count() > settings.max_skills_len {
        return Err(RecommendError::Validation(format!(
            "skills must be at most {} characters",
            settings.max_skills_len
        )));
    }
    if top_n < 1 || top_n > settings.max_top_n {
        return Err(RecommendError::Validation(format!(
            "top_n must be between 1 and {}, got {top_n}",
            settings.max_top_n
        )));
    }
    Ok(())
}

/// Shared handle to the current engine.
///
/// Starts empty; queries fail with [`RecommendError::NotReady`] until an engine is
/// installed. A rebuilt engine replaces the old one in a single swap, and in-flight
/// queries keep the `Arc` they started with.
#[derive(Debug, Default)]
pub struct Recommender {
    current: RwLock<Option<Arc<Engine>>>,
    settings: Settings,
}

impl Recommender {
    pub fn new(settings: Settings) -> Self {
        Self { current: RwLock::new(None), settings }
    }

    pub fn with_engine(engine: Engine) -> Self {
        let settings = engine.settings().clone();
        Self { current: RwLock::new(Some(Arc::new(engine))), settings }
    }

    /// Swap in a new engine, returning the previous one.
    pub fn install(&self, engine: Engine) -> Option<Arc<Engine>> {
        let stats = engine.stats();
        let previous = self.current.write().replace(Arc::new(engine));
        tracing::info!(dataset_rows = stats.dataset_rows, vocab_size = stats.vocab_size, replaced = previous.is_some(), "engine installed");
        previous
    }

    pub fn is_ready(&self) -> bool { self.current.read().is_some() }

    pub fn engine(&self) -> Result<Arc<Engine>> {
        self.current.read().clone().ok_or(RecommendError::NotReady)
    }

    pub fn stats(&self) -> Result<EngineStats> {
        Ok(self.engine()?.stats())
    }

    /// Input is validated before readiness, so malformed requests are rejected even during startup.
    pub fn get_recommendations(&self, skills_text: &str, top_n: usize) -> Result<RecommendationResponse> {
        validate(&self.settings, skills_text, top_n)?;
        self.engine()?.recommend(skills_text, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_engine() -> Engine {
        let roles = vec![
            RoleRecord::new("Data Scientist", "python, sql, pandas, machine learning", 1_200_000),
            RoleRecord::new("Frontend Developer", "html, css, javascript, react", 800_000),
        ];
        Engine::build(roles, Settings::default()).unwrap()
    }

    #[test]
    fn not_ready_until_installed() {
        let rec = Recommender::new(Settings::default());
        assert!(!rec.is_ready());
        assert_eq!(rec.get_recommendations("python", 1).unwrap_err(), RecommendError::NotReady);
        assert!(rec.install(small_engine()).is_none());
        assert!(rec.is_ready());
        assert!(rec.get_recommendations("python", 1).is_ok());
    }

    #[test]
    fn validation_precedes_readiness() {
        let rec = Recommender::new(Settings::default());
        assert!(matches!(rec.get_recommendations("  ", 1), Err(RecommendError::Validation(_))));
    }

    #[test]
    fn top_n_bounds() {
        let e = small_engine();
        assert!(matches!(e.recommend("python", 0), Err(RecommendError::Validation(_))));
        assert!(matches!(e.recommend("python", 11), Err(RecommendError::Validation(_))));
        assert_eq!(e.recommend("python", 10).unwrap().total_results, 2);
    }

    #[test]
    fn overlong_input_is_rejected() {
        let e = small_engine();
        let long = "a".repeat(2001);
        assert!(matches!(e.recommend(&long, 1), Err(RecommendError::Validation(_))));
    }

    #[test]
    fn install_swaps_engine() {
        let rec = Recommender::with_engine(small_engine());
        let before = rec.engine().unwrap();
        let roles = vec![RoleRecord::new("Chef", "cooking, knife skills", 1)];
        let old = rec.install(Engine::build(roles, Settings::default()).unwrap()).unwrap();
        assert!(Arc::ptr_eq(&before, &old));
        assert_eq!(rec.stats().unwrap().dataset_rows, 1);
        // the old handle keeps working
        assert_eq!(before.recommend("python", 1).unwrap().recommendations[0].role, "Data Scientist");
    }

    #[test]
    fn echo_is_trimmed() {
        let out = small_engine().recommend("  python, sql  ", 1).unwrap();
        assert_eq!(out.input_skills, "python, sql");
    }

    #[test]
    fn bad_settings_fail_build() {
        let roles = vec![RoleRecord::new("A", "b", 1)];
        let err = Engine::build(roles, Settings::default().with_low_confidence_threshold(0.0)).unwrap_err();
        assert!(matches!(err, RecommendError::Validation(_)));
    }
}
