pub mod corpus;
pub mod document;
pub mod error;
pub mod tfidf;
