/// This crate provides TF-IDF scoring over a growing document corpus and a
/// character-bigram string similarity measure.
pub mod distance;
pub mod scorer;
pub mod tokenize;

/// Corpus for TF-IDF scoring
/// The ordered, append-only collection of documents the engine scores
/// against. It owns the tokenizer and the stopword policy used to build
/// documents from raw text, so corpora with different policies stay fully
/// independent.
///
/// `Corpus<K, T, S>` has the following generic parameters:
/// - `K`: Document key type (e.g., String, usize)
/// - `T`: Tokenizer type (default `AggressiveTokenizer`)
/// - `S`: Stopword policy type (default `Stopwords`)
///
/// Documents can be appended from raw text (tokenized, case folded,
/// stopword filtered), from a pre-tokenized term sequence, or from a
/// pre-aggregated frequency map (kept verbatim). Positional access is
/// bounds checked and fails with `ScorerError::InvalidIndex`.
pub use scorer::corpus::Corpus;

/// Document structure
/// A frequency map of terms derived from one unit of text, with an optional
/// opaque key for caller-side lookup. The map keeps term insertion order,
/// which makes ranked term listings deterministic on score ties.
pub use scorer::document::Document;

/// Error type for corpus and scoring operations.
pub use scorer::error::ScorerError;

/// TF-IDF engine
/// Pure functions over a `Corpus` snapshot, nothing is cached:
/// - `tf`: raw count of a term within one document
/// - `idf`: log-scaled rarity of a term across the corpus, with the
///   document count Laplace-smoothed in the denominator
/// - `tfidf`: combined score of a term sequence against one document
/// - `list_terms`: every term of a document ranked by individual score
/// - `tfidfs` / `tfidfs_with`: scores across the whole corpus in document
///   order, optionally reporting each result through a callback
/// - `par_tfidfs`: the same batch scoring on the rayon pool
pub use scorer::tfidf::{idf, list_terms, par_tfidfs, tf, tfidf, tfidfs, tfidfs_with, TermScore};

/// Tokenizer capability and the provided implementations
/// `Tokenizer` is the seam between raw text and the engine; the bundled
/// `AggressiveTokenizer` splits on runs of non-word characters. Stopword
/// policies work the same way through `StopwordFilter`, with `Stopwords`
/// offering the English list from the `stop-words` crate, an empty policy
/// and custom word lists. Plain closures satisfy both traits.
pub use tokenize::{AggressiveTokenizer, StopwordFilter, Stopwords, Tokenizer};

/// Bigram string similarity
/// `distance::dice::compare` scores two strings in `[0, 1]` by overlapping
/// character pairs, word by word. Degenerate comparisons (no bigrams on
/// either side) return 0.0.
pub use distance::dice;
