use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GapResult {
    pub strengths: Vec<String>,
    pub missing: Vec<String>,
}

/// Split a raw skills string on `,`, `;` and `/`, lowercased and trimmed, empties dropped.
pub fn parse_user_skills(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split([',', ';', '/'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Partition role tokens into strengths and gaps.
///
/// A role token is a strength when some user token contains it or is contained by it,
/// so "java" covers "javascript" and the other way round. This is a plain pairwise
/// scan; catalogs are small. Both lists keep role order and drop repeats.
pub fn analyze(user_tokens: &[String], role_tokens: &[String]) -> GapResult {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = GapResult::default();
    for rs in role_tokens {
        if !seen.insert(rs.as_str()) { continue; }
        let matched = user_tokens
            .iter()
            .any(|us| rs.contains(us.as_str()) || us.contains(rs.as_str()));
        if matched {
            out.strengths.push(rs.clone());
        } else {
            out.missing.push(rs.clone());
        }
    }
    out
}
