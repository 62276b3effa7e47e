//! Text normalization and tokenization for the ATS pipeline.
//!
//! Unigrams keep short tokens and stop words; bigram construction drops any
//! window containing them. This asymmetry is intentional — it suppresses
//! noisy multi-word stop-word combinations while short acronyms ("go", "qa")
//! survive as standalone unigrams. Downstream keyword extraction applies its
//! own unigram filter.

use std::collections::{HashMap, HashSet};

use regex::Regex;

/// Turkish and English function words excluded from bigrams and JD keywords.
const STOP_WORDS: &[&str] = &[
    "ve", "ile", "için", "da", "de", "bir", "the", "a", "an", "to", "of", "in", "on", "for", "is",
    "are", "as", "at", "by", "or", "you", "your", "we", "our", "this", "that", "it", "with",
];

/// Ordered canonical rewrites applied before lowercasing. Order matters:
/// "tailwind css" must collapse before the bare "tailwind" rule runs.
const CANONICAL_PATTERNS: &[(&str, &str)] = &[
    (r"(?i)\bci\s*/\s*cd\b", "ci/cd"),
    (r"(?i)\bcicd\b", "ci/cd"),
    (r"(?i)\bnext\s*\.?\s*js\b", "next.js"),
    (r"(?i)\bnode\s*\.?\s*js\b", "node.js"),
    (r"(?i)\btailwind\s*css\b", "tailwindcss"),
    (r"(?i)\btailwind\b", "tailwindcss"),
    (r"(?i)\bpower\s*bi\b", "powerbi"),
    (r"(?i)\bpostgre\s*sql\b", "postgresql"),
    (r"(?i)\bjava\s*script\b", "javascript"),
    (r"(?i)\btype\s*script\b", "typescript"),
    (r"(?i)\breact\s*js\b", "react"),
];

const MIN_NGRAM_PART_LEN: usize = 3;

/// Tokenizer with the canonical-replacement table and stop-word set compiled
/// once at startup. Methods are pure; the struct holds no mutable state.
pub struct TextAnalyzer {
    stop_words: HashSet<&'static str>,
    canonical: Vec<(Regex, &'static str)>,
}

impl TextAnalyzer {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            canonical: CANONICAL_PATTERNS
                .iter()
                .map(|(pattern, replacement)| {
                    (
                        Regex::new(pattern).expect("hardcoded canonical pattern is valid"),
                        *replacement,
                    )
                })
                .collect(),
        }
    }

    /// Applies the canonical-phrase rewrites to raw text, preserving case
    /// elsewhere. CRLF line endings are normalized first.
    pub fn canonicalize_raw(&self, text: &str) -> String {
        let mut t = text.replace("\r\n", "\n");
        for (re, replacement) in &self.canonical {
            t = re.replace_all(&t, *replacement).into_owned();
        }
        t
    }

    /// Lowercases, strips characters outside the allow-list (ASCII letters
    /// and digits, Turkish letters, `+ # - . /`, whitespace) and collapses
    /// whitespace runs to single spaces.
    pub fn normalize(&self, text: &str) -> String {
        // Dotted capital İ must map straight to `i`; Unicode lowercasing
        // yields `i` plus a combining dot that the allow-list would split
        // into a stray space.
        let lowered = self.canonicalize_raw(text).replace('İ', "i").to_lowercase();
        let cleaned: String = lowered
            .chars()
            .map(|c| if is_allowed(c) { c } else { ' ' })
            .collect();
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Splits normalized text into unigrams. Empty input yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let t = self.normalize(text);
        if t.is_empty() {
            return Vec::new();
        }
        t.split(' ').map(str::to_owned).collect()
    }

    /// Builds underscore-joined n-grams over a sliding window. A window is
    /// dropped entirely if any constituent is shorter than 3 characters or
    /// is a stop word.
    pub fn ngrams(&self, tokens: &[String], n: usize) -> Vec<String> {
        if n == 0 || tokens.len() < n {
            return Vec::new();
        }
        tokens
            .windows(n)
            .filter(|window| {
                !window
                    .iter()
                    .any(|part| part.chars().count() < MIN_NGRAM_PART_LEN || self.is_stop_word(part))
            })
            .map(|window| window.join("_"))
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || matches!(c, 'ı' | 'ğ' | 'ü' | 'ş' | 'ö' | 'ç')
        || matches!(c, '+' | '#' | '-' | '.' | '/')
        || c.is_whitespace()
}

/// Token → occurrence count within one document.
pub fn count_occurrences<'a>(tokens: &'a [String]) -> HashMap<&'a str, usize> {
    let mut map = HashMap::new();
    for token in tokens {
        *map.entry(token.as_str()).or_insert(0) += 1;
    }
    map
}

/// Deduplicates tokens preserving first-encounter order.
pub fn unique<'a>(tokens: &'a [String]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .map(String::as_str)
        .filter(|t| seen.insert(*t))
        .collect()
}

/// Renders a token for humans: bigram underscores become spaces.
pub fn display_keyword(token: &str) -> String {
    token.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> TextAnalyzer {
        TextAnalyzer::new()
    }

    #[test]
    fn test_normalize_is_case_and_spacing_independent() {
        let a = analyzer();
        assert_eq!(a.normalize("JavaScript"), "javascript");
        assert_eq!(a.normalize("java script"), "javascript");
        assert_eq!(a.normalize("JAVA SCRIPT"), "javascript");
    }

    #[test]
    fn test_canonical_rewrites() {
        let a = analyzer();
        assert_eq!(a.normalize("next . js"), "next.js");
        assert_eq!(a.normalize("Node.JS"), "node.js");
        assert_eq!(a.normalize("cicd"), "ci/cd");
        assert_eq!(a.normalize("CI / CD"), "ci/cd");
        assert_eq!(a.normalize("Tailwind CSS"), "tailwindcss");
        assert_eq!(a.normalize("tailwind"), "tailwindcss");
        assert_eq!(a.normalize("Postgre SQL"), "postgresql");
        assert_eq!(a.normalize("React JS"), "react");
    }

    #[test]
    fn test_specific_rewrite_wins_over_generic() {
        // "tailwind css" must not become "tailwindcss css"
        let a = analyzer();
        assert_eq!(a.normalize("uses tailwind css daily"), "uses tailwindcss daily");
    }

    #[test]
    fn test_normalize_strips_disallowed_chars_and_collapses_whitespace() {
        let a = analyzer();
        assert_eq!(a.normalize("c++, c# & .NET!"), "c++ c# .net");
        assert_eq!(a.normalize("  a \t b \n c  "), "a b c");
    }

    #[test]
    fn test_normalize_keeps_turkish_letters() {
        let a = analyzer();
        assert_eq!(a.normalize("yazılım geliştirici"), "yazılım geliştirici");
    }

    #[test]
    fn test_normalize_dotted_capital_i() {
        let a = analyzer();
        assert_eq!(a.normalize("İstanbul"), "istanbul");
        assert_eq!(a.normalize("EĞİTİM"), "eğitim");
    }

    #[test]
    fn test_tokenize_empty_input() {
        let a = analyzer();
        assert!(a.tokenize("").is_empty());
        assert!(a.tokenize("   !?!  ").is_empty());
    }

    #[test]
    fn test_ngrams_joins_with_underscore() {
        let a = analyzer();
        let tokens = a.tokenize("react typescript testing");
        assert_eq!(
            a.ngrams(&tokens, 2),
            vec!["react_typescript", "typescript_testing"]
        );
    }

    #[test]
    fn test_ngrams_drops_windows_with_short_or_stop_tokens() {
        let a = analyzer();
        // "ve" is a stop word, "go" is shorter than 3 chars: every window
        // touching them is dropped.
        let tokens = a.tokenize("react ve redux go backend");
        assert!(a.ngrams(&tokens, 2).is_empty());

        let tokens = a.tokenize("react redux backend");
        assert_eq!(a.ngrams(&tokens, 2), vec!["react_redux", "redux_backend"]);
    }

    #[test]
    fn test_ngrams_window_larger_than_input() {
        let a = analyzer();
        let tokens = a.tokenize("react");
        assert!(a.ngrams(&tokens, 2).is_empty());
    }

    #[test]
    fn test_unigrams_keep_stop_words_and_short_tokens() {
        // The asymmetry: tokenize never filters, only ngrams does.
        let a = analyzer();
        let tokens = a.tokenize("the go qa");
        assert_eq!(tokens, vec!["the", "go", "qa"]);
    }

    #[test]
    fn test_count_occurrences() {
        let tokens: Vec<String> = ["react", "redux", "react"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let counts = count_occurrences(&tokens);
        assert_eq!(counts.get("react"), Some(&2));
        assert_eq!(counts.get("redux"), Some(&1));
    }

    #[test]
    fn test_unique_preserves_first_encounter_order() {
        let tokens: Vec<String> = ["b", "a", "b", "c", "a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(unique(&tokens), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_display_keyword() {
        assert_eq!(display_keyword("unit_testing"), "unit testing");
        assert_eq!(display_keyword("react"), "react");
    }
}
