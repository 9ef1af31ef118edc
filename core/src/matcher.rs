use crate::catalog::RoleRecord;
use crate::error::{RecommendError, Result};
use crate::index::{SparseVector, TextIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub role: &'a RoleRecord,
    /// Cosine similarity clamped to [0, 1].
    pub raw_score: f32,
    /// 1-based position in the ranking.
    pub rank: usize,
}

/// Score every role against `query` and keep the best `top_n`.
///
/// Ties keep catalog order. `roles` must be the slice the index was built from.
pub fn rank<'a>(index: &TextIndex, roles: &'a [RoleRecord], query: &SparseVector, top_n: usize) -> Result<Vec<MatchResult<'a>>> {
    if top_n == 0 {
        return Err(RecommendError::Validation("top_n must be at least 1".into()));
    }
    if roles.len() != index.num_docs() {
        return Err(RecommendError::Internal(format!(
            "catalog has {} roles but index has {} documents",
            roles.len(),
            index.num_docs()
        )));
    }

    let mut scored: Vec<(usize, f32)> = Vec::with_capacity(roles.len());
    for (doc, vector) in index.doc_vectors().iter().enumerate() {
        let sim = query.dot(vector);
        if !sim.is_finite() {
            return Err(RecommendError::Internal(format!("non-finite similarity for role {}", roles[doc].name)));
        }
        scored.push((doc, sim.clamp(0.0, 1.0)));
    }
    // sort_by is stable, equal scores stay in catalog order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    Ok(scored
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, (doc, raw_score))| MatchResult { role: &roles[doc], raw_score, rank: i + 1 })
        .collect())
}
