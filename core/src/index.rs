use crate::catalog::RoleRecord;
use crate::error::{RecommendError, Result};
use crate::settings::Settings;
use crate::tokenizer::{normalize_profile, normalize_query, terms};
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub type TermId = u32;
pub type DocId = u32;

/// L2-normalized sparse vector, entries sorted by term id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(TermId, f32)>,
}

impl SparseVector {
    pub fn entries(&self) -> &[(TermId, f32)] { &self.entries }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    /// Merge-join dot product. Both sides are unit length, so this is the cosine.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut acc = 0.0f32;
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, wa) = self.entries[i];
            let (tb, wb) = other.entries[j];
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    acc += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        acc
    }
}

/// TF-IDF index over role skill profiles (unigrams and bigrams).
///
/// Fitted once from the catalog and never updated afterwards; queries are projected
/// into the fitted vocabulary and unseen terms are ignored.
#[derive(Debug, Clone)]
pub struct TextIndex {
    dictionary: HashMap<String, TermId>,
    df: Vec<u32>,
    idf: Vec<f32>,
    docs: Vec<SparseVector>,
    ngram_max: usize,
    sublinear_tf: bool,
}

impl TextIndex {
    pub fn build(roles: &[RoleRecord], settings: &Settings) -> Result<Self> {
        if roles.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }
        let ngram_max = settings.ngram_max;

        // Raw term counts per document
        let per_doc: Vec<BTreeMap<String, u32>> = roles
            .iter()
            .map(|r| count_terms(terms(&normalize_profile(&r.skill_text), ngram_max)))
            .collect();

        // Term ids follow lexicographic order so the layout is independent of catalog order
        let vocab: BTreeSet<&str> = per_doc.iter().flat_map(|c| c.keys().map(String::as_str)).collect();
        let dictionary: HashMap<String, TermId> = vocab
            .iter()
            .enumerate()
            .map(|(id, term)| (term.to_string(), id as TermId))
            .collect();

        let mut df = vec![0u32; dictionary.len()];
        for counts in &per_doc {
            for term in counts.keys() {
                df[dictionary[term] as usize] += 1;
            }
        }
        let n = roles.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let mut index = TextIndex { dictionary, df, idf, docs: Vec::with_capacity(roles.len()), ngram_max, sublinear_tf: settings.sublinear_tf };
        let docs: Vec<SparseVector> = per_doc
            .into_iter()
            .map(|counts| {
                let by_id = counts.into_iter().map(|(t, c)| (index.dictionary[&t], c)).collect();
                index.weigh(by_id)
            })
            .collect();
        index.docs = docs;

        tracing::info!(num_roles = roles.len(), vocab_size = index.vocab_size(), "text index ready");
        Ok(index)
    }

    /// Project free-text skills into the index space. Never fails; garbage yields a zero vector.
    pub fn vectorize(&self, query: &str) -> SparseVector {
        let mut counts: BTreeMap<TermId, u32> = BTreeMap::new();
        for term in terms(&normalize_query(query), self.ngram_max) {
            if let Some(&tid) = self.dictionary.get(&term) {
                *counts.entry(tid).or_insert(0) += 1;
            }
        }
        self.weigh(counts)
    }

    fn weigh(&self, counts: BTreeMap<TermId, u32>) -> SparseVector {
        let mut entries: Vec<(TermId, f32)> = counts
            .into_iter()
            .map(|(tid, raw)| {
                let tf = if self.sublinear_tf { 1.0 + (raw as f32).ln() } else { raw as f32 };
                (tid, tf * self.idf[tid as usize])
            })
            .collect();
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        if norm == 0.0 {
            return SparseVector::default();
        }
        for (_, w) in entries.iter_mut() { *w /= norm; }
        SparseVector { entries }
    }

    pub fn doc_vector(&self, doc: DocId) -> Option<&SparseVector> { self.docs.get(doc as usize) }

    pub fn doc_vectors(&self) -> &[SparseVector] { &self.docs }

    pub fn num_docs(&self) -> usize { self.docs.len() }

    pub fn vocab_size(&self) -> usize { self.dictionary.len() }

    pub fn term_id(&self, term: &str) -> Option<TermId> { self.dictionary.get(term).copied() }

    pub fn document_frequency(&self, term: &str) -> u32 {
        self.term_id(term).map(|t| self.df[t as usize]).unwrap_or(0)
    }
}

fn count_terms(terms: Vec<String>) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for t in terms {
        *counts.entry(t).or_insert(0) += 1;
    }
    counts
}
