//! Skill-to-role matching: a TF-IDF index over role skill profiles, cosine ranking,
//! score calibration, skill-gap analysis and learning-plan enrichment.

pub mod calibrate;
pub mod catalog;
pub mod enrich;
pub mod error;
pub mod gap;
pub mod index;
pub mod keywords;
pub mod matcher;
pub mod pipeline;
pub mod settings;
pub mod tokenizer;

pub use calibrate::{Calibrated, ScoreCalibrator, Tier};
pub use catalog::RoleRecord;
pub use error::{RecommendError, Result};
pub use index::{DocId, SparseVector, TermId, TextIndex};
pub use matcher::MatchResult;
pub use pipeline::{Engine, EngineStats, RecommendationResponse, Recommender, RoleRecommendation};
pub use settings::Settings;
