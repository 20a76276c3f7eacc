use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::scorer::corpus::Corpus;
use crate::scorer::document::Document;
use crate::scorer::error::ScorerError;

/// One scored term out of `list_terms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermScore {
    pub term: String,
    pub score: f64,
}

/// Term frequency: the raw count of `term` in `doc`, 0 when absent.
#[inline]
pub fn tf<K>(term: &str, doc: &Document<K>) -> u32 {
    doc.term_count(term)
}

/// Inverse document frequency of `term` across the corpus.
///
/// `docs_with_term` starts at 1 (the smoothing constant lives in the
/// denominator), so the result is `ln(len / (1 + documents containing
/// term))`. Division by zero cannot happen; on an empty corpus the value is
/// `ln(0/1)`, negative infinity, which is defined rather than an error.
pub fn idf<K, T, S>(term: &str, corpus: &Corpus<K, T, S>) -> f64 {
    let mut docs_with_term = 1u64;
    for doc in corpus.documents() {
        if doc.has_term(term) {
            docs_with_term += 1;
        }
    }
    (corpus.len() as f64 / docs_with_term as f64).ln()
}

fn score_document<K, T, S, W>(terms: &[W], doc: &Document<K>, corpus: &Corpus<K, T, S>) -> f64
where
    W: AsRef<str>,
{
    terms
        .iter()
        .map(|term| {
            let term = term.as_ref();
            f64::from(tf(term, doc)) * idf(term, corpus)
        })
        .sum()
}

/// Combined tf-idf of a term sequence against the document at `index`.
///
/// Each occurrence in `terms` contributes `tf * idf` independently, so a
/// repeated input term is counted twice. Fails with
/// [`ScorerError::InvalidIndex`] when `index` is out of range.
pub fn tfidf<K, T, S, W>(
    terms: &[W],
    index: usize,
    corpus: &Corpus<K, T, S>,
) -> Result<f64, ScorerError>
where
    W: AsRef<str>,
{
    let doc = corpus.document(index)?;
    Ok(score_document(terms, doc, corpus))
}

/// Every distinct term of the document at `index` with its individual
/// tf-idf score, sorted descending by score.
///
/// The sort is stable, so equal scores keep the document's term insertion
/// order. That is the documented tie-break; for a given corpus the output
/// is fully deterministic.
pub fn list_terms<K, T, S>(
    index: usize,
    corpus: &Corpus<K, T, S>,
) -> Result<Vec<TermScore>, ScorerError> {
    let doc = corpus.document(index)?;
    let mut scores: Vec<TermScore> = doc
        .terms()
        .map(|(term, count)| TermScore {
            term: term.to_owned(),
            score: f64::from(count) * idf(term, corpus),
        })
        .collect();
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(scores)
}

/// Tf-idf of `terms` against every document, in index order.
pub fn tfidfs<K, T, S, W>(terms: &[W], corpus: &Corpus<K, T, S>) -> Vec<f64>
where
    W: AsRef<str>,
{
    tfidfs_with(terms, corpus, |_, _, _| {})
}

/// Like [`tfidfs`], invoking `on_each` once per document with
/// `(index, score, key)` before the vector is returned. The callback runs
/// synchronously in document order.
pub fn tfidfs_with<K, T, S, W, F>(terms: &[W], corpus: &Corpus<K, T, S>, mut on_each: F) -> Vec<f64>
where
    W: AsRef<str>,
    F: FnMut(usize, f64, Option<&K>),
{
    let mut scores = Vec::with_capacity(corpus.len());
    for (index, doc) in corpus.documents().iter().enumerate() {
        let score = score_document(terms, doc, corpus);
        on_each(index, score, doc.key());
        scores.push(score);
    }
    trace!(documents = scores.len(), terms = terms.len(), "batch scored corpus");
    scores
}

/// Parallel [`tfidfs`]. Scores documents on the rayon pool; the output
/// order still matches document order. No callback variant, ordered
/// side effects and work stealing do not mix.
pub fn par_tfidfs<K, T, S, W>(terms: &[W], corpus: &Corpus<K, T, S>) -> Vec<f64>
where
    K: Sync,
    T: Sync,
    S: Sync,
    W: AsRef<str> + Sync,
{
    corpus
        .documents()
        .par_iter()
        .map(|doc| score_document(terms, doc, corpus))
        .collect()
}
