use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Tokenizer capability.
/// Splits raw text into an ordered sequence of tokens.
///
/// The engine only depends on this trait, so any splitting strategy can be
/// plugged in, including a plain closure `Fn(&str) -> Vec<String>`.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Aggressive tokenizer.
/// Breaks a string into tokens on any run of non-word characters
/// (anything that is not alphanumeric or `_`), trims each token and
/// drops empty ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveTokenizer;

impl Tokenizer for AggressiveTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Stopword predicate capability.
/// Queried once per candidate term while a document is built from raw text.
pub trait StopwordFilter {
    fn is_stopword(&self, term: &str) -> bool;
}

impl<F> StopwordFilter for F
where
    F: Fn(&str) -> bool,
{
    fn is_stopword(&self, term: &str) -> bool {
        self(term)
    }
}

/// Stopword set.
/// An explicit, per-corpus stopword policy. Corpora built with different
/// policies hold their own set, nothing is shared through globals.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Empty policy, nothing is filtered.
    pub fn none() -> Self {
        Self::default()
    }

    /// The English stopword list from the `stop-words` crate.
    pub fn english() -> Self {
        Self {
            words: get(LANGUAGE::English).into_iter().collect(),
        }
    }

    /// Build a policy from any iterator of words.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of words in the policy.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the policy filters nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordFilter for Stopwords {
    fn is_stopword(&self, term: &str) -> bool {
        self.words.contains(term)
    }
}
