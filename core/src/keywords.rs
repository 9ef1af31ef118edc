use std::collections::HashMap;

pub const DEFAULT_RESUME_KEYWORDS: usize = 20;

/// Pull a skills string out of free-form resume text.
///
/// Words longer than two characters are counted and the `limit` most frequent are
/// returned comma-separated; ties keep first-occurrence order.
pub fn from_resume(text: &str, limit: usize) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, word) in cleaned.split_whitespace().filter(|w| w.chars().count() > 2).enumerate() {
        counts.entry(word).or_insert((0, pos)).0 += 1;
    }
    let mut ranked: Vec<(&str, usize, usize)> = counts.into_iter().map(|(w, (c, first))| (w, c, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.into_iter().take(limit).map(|(w, _, _)| w).collect::<Vec<_>>().join(", ")
}
