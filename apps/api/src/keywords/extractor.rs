use std::collections::HashMap;

use serde::Serialize;

use super::tokenizer::normalize;

pub const DEFAULT_TOP_N: usize = 20;

/// A keyword and how often it occurred in its source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub keyword: String,
    pub frequency: u32,
}

/// The top-N keywords of a text, most frequent first.
/// Equal counts keep the order in which the tokens first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<Keyword>);

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|k| k.keyword.as_str())
    }
}

impl FromIterator<Keyword> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = Keyword>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Normalizes `text` and keeps the `top_n` most frequent tokens.
pub fn extract_keywords(text: &str, top_n: usize) -> KeywordSet {
    let tokens = normalize(text);

    // token -> (count, index of first occurrence)
    let mut counts: HashMap<&str, (u32, usize)> = HashMap::new();
    for (idx, token) in tokens.iter().enumerate() {
        counts.entry(token.as_str()).or_insert((0, idx)).0 += 1;
    }

    let mut ranked: Vec<(&str, u32, usize)> = counts
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(top_n);

    tracing::debug!(
        tokens = tokens.len(),
        keywords = ranked.len(),
        top_n,
        "extracted keywords"
    );

    ranked
        .into_iter()
        .map(|(token, count, _)| Keyword {
            keyword: token.to_string(),
            frequency: count,
        })
        .collect()
}

/// Keywords of a short job title or one-line description. Same procedure as
/// `extract_keywords`; kept as its own entry point for call-site clarity.
pub fn extract_title_keywords(title: &str, top_n: usize) -> KeywordSet {
    extract_keywords(title, top_n)
}
