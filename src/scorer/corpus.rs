use indexmap::IndexMap;
use tracing::debug;

use crate::scorer::document::Document;
use crate::scorer::error::ScorerError;
use crate::tokenize::{AggressiveTokenizer, StopwordFilter, Stopwords, Tokenizer};

/// Corpus structure
/// The ordered, append-only collection of all documents known to the engine.
/// Documents are addressed by positional index; once appended they are never
/// mutated or removed, so the length only grows.
///
/// The corpus owns its tokenizer and stopword policy. Two corpora built with
/// different policies hold independent state and cannot interfere.
///
/// Appends take `&mut self` while every query borrows `&self`, so a query
/// always sees a consistent snapshot; a torn read across an append cannot
/// compile.
///
/// # Examples
/// ```
/// use tfidf_scorer::{tfidf, Corpus};
///
/// let mut corpus: Corpus = Corpus::new();
/// corpus.add_document("rust systems programming", None);
/// corpus.add_document("python scripting", None);
/// corpus.add_document("garbage collection in python", None);
///
/// let score = tfidf(&["rust"], 0, &corpus).unwrap();
/// assert!(score > 0.0); // "rust" is distinctive for document 0
/// ```
#[derive(Debug, Clone)]
pub struct Corpus<K = String, T = AggressiveTokenizer, S = Stopwords> {
    documents: Vec<Document<K>>,
    tokenizer: T,
    stopwords: S,
}

impl<K> Corpus<K> {
    /// Empty corpus with the aggressive tokenizer and the English stopword
    /// list.
    pub fn new() -> Self {
        Self::with_policy(AggressiveTokenizer, Stopwords::english())
    }
}

impl<K> Default for Corpus<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T, S> Corpus<K, T, S>
where
    T: Tokenizer,
    S: StopwordFilter,
{
    /// Empty corpus with an explicit tokenizer and stopword policy.
    pub fn with_policy(tokenizer: T, stopwords: S) -> Self {
        Self {
            documents: Vec::new(),
            tokenizer,
            stopwords,
        }
    }

    /// Tokenize `text`, lowercase each token, drop stopwords and append the
    /// resulting frequency map as a new document.
    pub fn add_document(&mut self, text: &str, key: Option<K>) {
        let mut doc = Document::new(key);
        for token in self.tokenizer.tokenize(text) {
            let term = token.to_lowercase();
            if self.stopwords.is_stopword(&term) {
                continue;
            }
            doc.add_term(&term);
        }
        self.push(doc);
    }

    /// Append a document built from an already tokenized term sequence.
    /// Terms are counted as given: no case folding and no stopword
    /// filtering on this path.
    pub fn add_terms<W>(&mut self, terms: &[W], key: Option<K>)
    where
        W: AsRef<str>,
    {
        let mut doc = Document::new(key);
        for term in terms {
            doc.add_term(term.as_ref());
        }
        self.push(doc);
    }

    /// Append a pre-aggregated frequency map verbatim.
    pub fn add_counts(&mut self, counts: IndexMap<String, u32>, key: Option<K>) {
        self.push(Document::from_counts(counts, key));
    }

    fn push(&mut self, doc: Document<K>) {
        debug!(
            index = self.documents.len(),
            distinct_terms = doc.distinct_terms(),
            total_terms = doc.total_terms(),
            "document appended"
        );
        self.documents.push(doc);
    }
}

impl<K, T, S> Corpus<K, T, S> {
    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The document at `index`, bounds checked.
    pub fn document(&self, index: usize) -> Result<&Document<K>, ScorerError> {
        self.documents.get(index).ok_or(ScorerError::InvalidIndex {
            index,
            len: self.documents.len(),
        })
    }

    /// All documents in insertion order.
    pub fn documents(&self) -> &[Document<K>] {
        &self.documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenized_path_folds_case_and_filters_stopwords() {
        let mut corpus: Corpus = Corpus::new();
        corpus.add_document("The Quick fox and the quick dog", None);
        let doc = corpus.document(0).unwrap();
        // "the" and "and" are English stopwords
        assert_eq!(doc.term_count("the"), 0);
        assert_eq!(doc.term_count("and"), 0);
        assert_eq!(doc.term_count("quick"), 2);
        assert_eq!(doc.term_count("fox"), 1);
    }

    #[test]
    fn term_sequence_path_skips_filtering() {
        let mut corpus: Corpus = Corpus::new();
        corpus.add_terms(&["the", "Fox", "fox"], None);
        let doc = corpus.document(0).unwrap();
        assert_eq!(doc.term_count("the"), 1);
        // no case folding either: "Fox" and "fox" stay distinct
        assert_eq!(doc.term_count("Fox"), 1);
        assert_eq!(doc.term_count("fox"), 1);
    }

    #[test]
    fn counts_path_is_verbatim() {
        let mut counts = IndexMap::new();
        counts.insert("of".to_owned(), 9);
        let mut corpus: Corpus<u32> = Corpus::new();
        corpus.add_counts(counts, Some(7));
        let doc = corpus.document(0).unwrap();
        assert_eq!(doc.term_count("of"), 9);
        assert_eq!(doc.key(), Some(&7));
    }

    #[test]
    fn custom_policy_is_per_corpus() {
        let mut plain: Corpus<String, _, _> =
            Corpus::with_policy(AggressiveTokenizer, Stopwords::none());
        let mut filtered: Corpus<String, _, _> =
            Corpus::with_policy(AggressiveTokenizer, Stopwords::from_words(["rust"]));
        plain.add_document("rust rust rust", None);
        filtered.add_document("rust rust rust", None);
        assert_eq!(plain.document(0).unwrap().term_count("rust"), 3);
        assert_eq!(filtered.document(0).unwrap().term_count("rust"), 0);
    }

    #[test]
    fn closure_tokenizer_and_predicate() {
        let split = |text: &str| {
            text.split(',').map(str::to_owned).collect::<Vec<_>>()
        };
        let no_digits = |term: &str| term.chars().all(|c| c.is_ascii_digit());
        let mut corpus: Corpus<String, _, _> = Corpus::with_policy(split, no_digits);
        corpus.add_document("a,b,42,a", None);
        let doc = corpus.document(0).unwrap();
        assert_eq!(doc.term_count("a"), 2);
        assert_eq!(doc.term_count("42"), 0);
    }

    #[test]
    fn append_only_growth() {
        let mut corpus: Corpus = Corpus::new();
        assert!(corpus.is_empty());
        for i in 0..4 {
            corpus.add_document("some words here", None);
            assert_eq!(corpus.len(), i + 1);
        }
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut corpus: Corpus = Corpus::new();
        corpus.add_document("one", None);
        assert!(corpus.document(0).is_ok());
        assert_eq!(
            corpus.document(3).err(),
            Some(ScorerError::InvalidIndex { index: 3, len: 1 })
        );
    }
}
