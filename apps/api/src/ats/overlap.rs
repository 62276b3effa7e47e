//! Keyword overlap between a CV and a job description.

use std::collections::HashMap;

use serde::Serialize;

use super::text::{count_occurrences, unique, TextAnalyzer};

/// Both ranked keyword lists are truncated to this many entries.
pub const KEYWORD_LIST_CAP: usize = 18;

const MIN_KEYWORD_LEN: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct OverlapResult {
    /// Fraction of JD keywords also present in the CV, in [0, 1].
    pub coverage: f64,
    pub jd_keyword_count: usize,
    /// JD keywords found in the CV, by descending JD occurrence weight.
    pub common_weighted: Vec<String>,
    /// JD keywords absent from the CV, by descending JD occurrence weight.
    pub missing_weighted: Vec<String>,
    pub cv_unique_count: usize,
}

/// Compares JD keywords against CV tokens.
///
/// Each document's token universe is its unigrams concatenated with its own
/// bigrams — n-grams never span documents. JD candidate keywords are unique
/// JD tokens of length ≥ 3 that are not stop words; this is where unigrams
/// get the filter that `tokenize` deliberately skips.
pub fn overlap(analyzer: &TextAnalyzer, cv_text: &str, jd_text: &str) -> OverlapResult {
    let cv_unigrams = analyzer.tokenize(cv_text);
    let jd_unigrams = analyzer.tokenize(jd_text);

    let mut cv_tokens = cv_unigrams.clone();
    cv_tokens.extend(analyzer.ngrams(&cv_unigrams, 2));
    let mut jd_tokens = jd_unigrams.clone();
    jd_tokens.extend(analyzer.ngrams(&jd_unigrams, 2));

    let cv_counts = count_occurrences(&cv_tokens);
    let jd_counts = count_occurrences(&jd_tokens);

    let cv_unique_count = unique(&cv_tokens).len();

    let jd_keywords: Vec<&str> = unique(&jd_tokens)
        .into_iter()
        .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|w| !analyzer.is_stop_word(w))
        .collect();

    let mut common = Vec::new();
    let mut missing = Vec::new();
    for kw in &jd_keywords {
        if cv_counts.contains_key(kw) {
            common.push(*kw);
        } else {
            missing.push(*kw);
        }
    }

    let coverage = if jd_keywords.is_empty() {
        0.0
    } else {
        common.len() as f64 / jd_keywords.len() as f64
    };

    OverlapResult {
        coverage,
        jd_keyword_count: jd_keywords.len(),
        common_weighted: top_by_weight(&common, &jd_counts),
        missing_weighted: top_by_weight(&missing, &jd_counts),
        cv_unique_count,
    }
}

/// Ranks tokens by JD occurrence weight, descending. The sort is stable so
/// ties keep their original encounter order. Truncated to the list cap.
fn top_by_weight(tokens: &[&str], weights: &HashMap<&str, usize>) -> Vec<String> {
    let mut ranked: Vec<(&str, usize)> = tokens
        .iter()
        .map(|t| (*t, weights.get(t).copied().unwrap_or(1)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(KEYWORD_LIST_CAP)
        .map(|(t, _)| t.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> TextAnalyzer {
        TextAnalyzer::new()
    }

    #[test]
    fn test_react_typescript_scenario() {
        let a = analyzer();
        let result = overlap(&a, "I know React", "React and TypeScript experience required");

        // Qualifying JD keywords (post length/stopword filter) include both
        // technologies; only one is covered by the CV.
        assert!(result.missing_weighted.contains(&"typescript".to_string()));
        assert!(result.common_weighted.contains(&"react".to_string()));
        assert!(!result.common_weighted.contains(&"typescript".to_string()));
        assert!(result.coverage > 0.0 && result.coverage < 1.0);
    }

    #[test]
    fn test_empty_jd_yields_zero_coverage() {
        let a = analyzer();
        let result = overlap(&a, "React developer with experience", "");
        assert_eq!(result.coverage, 0.0);
        assert_eq!(result.jd_keyword_count, 0);
        assert!(result.common_weighted.is_empty());
        assert!(result.missing_weighted.is_empty());
    }

    #[test]
    fn test_all_stopword_jd_yields_zero_coverage() {
        let a = analyzer();
        let result = overlap(&a, "React developer", "the a an of in");
        assert_eq!(result.coverage, 0.0);
        assert_eq!(result.jd_keyword_count, 0);
    }

    #[test]
    fn test_full_coverage() {
        let a = analyzer();
        let result = overlap(&a, "react redux testing", "react redux testing");
        assert_eq!(result.coverage, 1.0);
        assert!(result.missing_weighted.is_empty());
    }

    #[test]
    fn test_bigrams_participate_in_keyword_universe() {
        let a = analyzer();
        let result = overlap(
            &a,
            "worked with distributed systems daily",
            "distributed systems expertise",
        );
        assert!(result
            .common_weighted
            .contains(&"distributed_systems".to_string()));
    }

    #[test]
    fn test_missing_sorted_by_jd_weight_desc() {
        let a = analyzer();
        // "kubernetes" appears twice in the JD, "terraform" once.
        let result = overlap(&a, "react", "kubernetes terraform kubernetes");
        let kube = result
            .missing_weighted
            .iter()
            .position(|k| k == "kubernetes")
            .unwrap();
        let terra = result
            .missing_weighted
            .iter()
            .position(|k| k == "terraform")
            .unwrap();
        assert!(kube < terra);
    }

    #[test]
    fn test_lists_capped_at_18() {
        let a = analyzer();
        let jd: String = (0..40).map(|i| format!("keyword{i} ")).collect();
        let result = overlap(&a, "", &jd);
        assert!(result.missing_weighted.len() <= KEYWORD_LIST_CAP);
        assert!(result.jd_keyword_count > KEYWORD_LIST_CAP);
    }

    #[test]
    fn test_tie_order_is_stable() {
        let a = analyzer();
        let result = overlap(&a, "", "zeta alpha beta");
        // All weights are 1; encounter order must survive the sort.
        let singles: Vec<&String> = result
            .missing_weighted
            .iter()
            .filter(|k| ["zeta", "alpha", "beta"].contains(&k.as_str()))
            .collect();
        assert_eq!(singles, vec!["zeta", "alpha", "beta"]);
    }
}
