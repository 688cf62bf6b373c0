//! Keyword pipeline: normalization, stopword filtering and top-N selection.

pub mod extractor;
pub mod stopwords;
pub mod tokenizer;

pub use extractor::{extract_keywords, extract_title_keywords, KeywordSet, DEFAULT_TOP_N};
