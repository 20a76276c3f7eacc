use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Document structure
/// A frequency map from term to occurrence count, derived from one unit of
/// text, plus an optional opaque key for caller-side lookup.
///
/// The map keeps term insertion order, which later gives `list_terms` its
/// deterministic tie-break. A term absent from the map has implicit
/// frequency 0; every stored count is at least 1 on the counting paths.
/// Once appended to a corpus a document is never mutated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document<K = String> {
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<String, u32>,
    key: Option<K>,
}

impl<K> Document<K> {
    pub(crate) fn new(key: Option<K>) -> Self {
        Self {
            term_counts: IndexMap::new(),
            key,
        }
    }

    /// Wrap a pre-aggregated frequency map unchanged. No stopword filtering
    /// or case folding is applied on this path; the caller owns the counts.
    pub fn from_counts(term_counts: IndexMap<String, u32>, key: Option<K>) -> Self {
        Self { term_counts, key }
    }

    pub(crate) fn add_term(&mut self, term: &str) {
        if let Some(count) = self.term_counts.get_mut(term) {
            *count += 1;
        } else {
            self.term_counts.insert(term.to_owned(), 1);
        }
    }

    /// Occurrence count of `term`, 0 when absent.
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    #[inline]
    pub fn has_term(&self, term: &str) -> bool {
        self.term_count(term) > 0
    }

    /// Distinct terms with their counts, in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_counts.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Number of distinct terms.
    pub fn distinct_terms(&self) -> usize {
        self.term_counts.len()
    }

    /// Sum of all counts.
    pub fn total_terms(&self) -> u64 {
        self.term_counts.values().map(|count| u64::from(*count)).sum()
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }
}
