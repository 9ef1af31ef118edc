use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9, ]").expect("valid regex");
    static ref WORD: Regex = Regex::new(r"[a-z0-9]{2,}").expect("valid regex");
    /// English function words only. Much shorter than the usual sklearn list, so domain
    /// words such as "system" or "computer" stay in the vocabulary.
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Normalize a role's skill profile: lowercase, anything outside `[a-z0-9, ]` becomes a space.
/// Commas are kept; they only act as separators during tokenization.
pub fn normalize_profile(text: &str) -> String {
    NON_ALNUM.replace_all(&text.to_lowercase(), " ").into_owned()
}

/// Normalize a user query the same way, after trimming and turning commas into spaces.
pub fn normalize_query(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALNUM.replace_all(&lowered.trim().replace(',', " "), " ").into_owned()
}

/// Split normalized text into words of two or more characters, dropping stop words.
pub fn tokenize(normalized: &str) -> Vec<String> {
    WORD.find_iter(normalized)
        .map(|m| m.as_str())
        .filter(|w| !is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Expand words into n-grams of length `1..=ngram_max`: all unigrams first, then bigrams, and so on.
pub fn ngrams(words: &[String], ngram_max: usize) -> Vec<String> {
    let mut out = words.to_vec();
    for n in 2..=ngram_max.max(1) {
        if words.len() < n { break; }
        for window in words.windows(n) {
            out.push(window.join(" "));
        }
    }
    out
}

/// Terms of already-normalized text, as fed to the index.
pub fn terms(normalized: &str, ngram_max: usize) -> Vec<String> {
    ngrams(&tokenize(normalized), ngram_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_keeps_commas_and_strips_symbols() {
        assert_eq!(normalize_profile("C++, CI/CD, UI/UX"), "c  , ci cd, ui ux");
    }

    #[test]
    fn query_normalization_is_insensitive_to_spacing_and_case() {
        let a = tokenize(&normalize_query("Python, SQL"));
        let b = tokenize(&normalize_query("python , sql"));
        assert_eq!(a, b);
        assert_eq!(a, vec!["python".to_string(), "sql".to_string()]);
    }

    #[test]
    fn single_letters_and_stopwords_are_dropped() {
        let t = tokenize(&normalize_query("c, r and the rust"));
        assert_eq!(t, vec!["rust".to_string()]);
    }

    #[test]
    fn bigrams_follow_unigrams() {
        let t = terms("machine learning, sql", 2);
        assert_eq!(t, vec!["machine", "learning", "sql", "machine learning", "learning sql"]);
    }

    #[test]
    fn unigram_only() {
        let t = terms("machine learning", 1);
        assert_eq!(t, vec!["machine", "learning"]);
    }
}
