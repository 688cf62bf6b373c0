//! Match Scorer — overlap between résumé keywords and job keywords.
//!
//! `KeywordOverlapScorer` is the only backend today. `AppState` carries an
//! `Arc<dyn MatchScorer>` so handlers do not depend on the concrete scorer.

use std::collections::HashSet;

use serde::Serialize;

use crate::keywords::KeywordSet;

/// Outcome of comparing two keyword sets. Both lists follow job keyword rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Percentage in `[0, 100]`.
    pub score: f64,
    pub common_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

pub trait MatchScorer: Send + Sync {
    fn score(&self, resume: &KeywordSet, job: &KeywordSet) -> MatchResult;

    /// Backend label, reported back to clients.
    fn name(&self) -> &'static str;
}

/// Plain set-overlap scoring.
pub struct KeywordOverlapScorer;

impl MatchScorer for KeywordOverlapScorer {
    fn score(&self, resume: &KeywordSet, job: &KeywordSet) -> MatchResult {
        score(resume, job)
    }

    fn name(&self) -> &'static str {
        "keyword_overlap"
    }
}

/// `score = |resume ∩ job| / max(|job|, 1) * 100`; `missing = job − resume`.
pub fn score(resume: &KeywordSet, job: &KeywordSet) -> MatchResult {
    let resume_terms: HashSet<&str> = resume.terms().collect();

    let mut seen = HashSet::new();
    let mut common_keywords = Vec::new();
    let mut missing_keywords = Vec::new();

    for term in job.terms() {
        if !seen.insert(term) {
            continue;
        }
        if resume_terms.contains(term) {
            common_keywords.push(term.to_string());
        } else {
            missing_keywords.push(term.to_string());
        }
    }

    let job_size = seen.len().max(1);
    let score = common_keywords.len() as f64 / job_size as f64 * 100.0;

    MatchResult {
        score,
        common_keywords,
        missing_keywords,
    }
}

/// User-facing advice derived from the missing keywords.
pub fn build_recommendation(result: &MatchResult) -> String {
    if result.missing_keywords.is_empty() {
        "Great match! Your resume covers all key job requirements.".to_string()
    } else {
        format!(
            "Consider adding these keywords to your resume: {}",
            result.missing_keywords.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::extractor::Keyword;
    use crate::keywords::{extract_keywords, extract_title_keywords, DEFAULT_TOP_N};

    fn set(terms: &[&str]) -> KeywordSet {
        terms
            .iter()
            .map(|t| Keyword {
                keyword: t.to_string(),
                frequency: 1,
            })
            .collect()
    }

    #[test]
    fn test_partial_overlap() {
        let result = score(&set(&["java", "html"]), &set(&["java", "spring", "sql"]));
        assert_eq!(result.common_keywords, vec!["java"]);
        assert_eq!(result.missing_keywords, vec!["spring", "sql"]);
        assert!((result.score - 100.0 / 3.0).abs() < 1e-9, "{}", result.score);
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let result = score(&set(&["rust", "go"]), &set(&[]));
        assert_eq!(result.score, 0.0);
        assert!(result.common_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());

        assert_eq!(score(&set(&[]), &set(&[])).score, 0.0);
    }

    #[test]
    fn test_full_overlap_scores_hundred() {
        let resume = extract_keywords(
            "Experienced Python developer with Django and REST APIs",
            DEFAULT_TOP_N,
        );
        let job = extract_title_keywords("Python Developer", DEFAULT_TOP_N);
        let result = score(&resume, &job);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.common_keywords, vec!["python", "developer"]);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_resume_scores_zero_and_misses_everything() {
        let result = score(&set(&[]), &set(&["kafka", "scala"]));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing_keywords, vec!["kafka", "scala"]);
    }

    #[test]
    fn test_common_and_missing_partition_job_keywords() {
        let cases: &[(&[&str], &[&str])] = &[
            (&["a", "b", "c"], &["b", "c", "d", "e"]),
            (&[], &["x"]),
            (&["x", "y"], &["x", "y"]),
            (&["p"], &["q", "r", "s", "p"]),
        ];
        for (resume, job) in cases {
            let result = score(&set(resume), &set(job));
            let common: HashSet<&str> =
                result.common_keywords.iter().map(String::as_str).collect();
            let missing: HashSet<&str> =
                result.missing_keywords.iter().map(String::as_str).collect();
            let job: HashSet<&str> = job.iter().copied().collect();

            assert!(common.is_disjoint(&missing));
            assert_eq!(&common | &missing, job);
            assert!(common.iter().all(|t| resume.contains(t)));
            assert!((0.0..=100.0).contains(&result.score));
        }
    }

    #[test]
    fn test_duplicate_job_terms_count_once() {
        let result = score(&set(&["rust"]), &set(&["rust", "rust", "go"]));
        assert_eq!(result.common_keywords, vec!["rust"]);
        assert_eq!(result.missing_keywords, vec!["go"]);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_trait_object_delegates() {
        let scorer: Box<dyn MatchScorer> = Box::new(KeywordOverlapScorer);
        let result = scorer.score(&set(&["sql"]), &set(&["sql", "dbt"]));
        assert_eq!(result.score, 50.0);
        assert_eq!(scorer.name(), "keyword_overlap");
    }

    #[test]
    fn test_recommendation_lists_missing() {
        let result = score(&set(&["java"]), &set(&["java", "spring", "sql"]));
        assert_eq!(
            build_recommendation(&result),
            "Consider adding these keywords to your resume: spring, sql"
        );
    }

    #[test]
    fn test_recommendation_great_match() {
        let result = score(&set(&["java"]), &set(&["java"]));
        assert!(build_recommendation(&result).starts_with("Great match!"));
    }
}
