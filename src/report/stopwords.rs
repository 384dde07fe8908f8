//! Stopword filtering for the title word cloud.
//!
//! The stopword set is an explicitly constructed value with no global state:
//! build it once with [`Stopwords::english`] and pass it to the aggregation
//! step.

use std::collections::HashSet;

/// A set of words to drop when tokenizing titles.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<&'static str>,
}

impl Stopwords {
    /// The common English function words.
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().copied().collect(),
        }
    }

    /// An empty set, for callers that want every token.
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Tokenizes free text into lowercase content words.
    ///
    /// Tokens are whitespace-separated runs with non-alphanumeric edges
    /// trimmed; empty tokens and stopwords are dropped.
    pub fn content_words(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|token| {
                token
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|token| !token.is_empty() && !self.is_stopword(token))
            .collect()
    }
}

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "get", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drops_stopwords_and_punctuation() {
        let stopwords = Stopwords::english();
        assert_eq!(
            stopwords.content_words("How to Learn Rust (in 2024!)"),
            vec!["learn", "rust", "2024"]
        );
    }

    #[test]
    fn lowercases_before_matching() {
        let stopwords = Stopwords::english();
        assert_eq!(stopwords.content_words("The THE the"), Vec::<String>::new());
    }

    #[test]
    fn empty_set_keeps_everything() {
        let stopwords = Stopwords::none();
        assert_eq!(
            stopwords.content_words("the quick fox"),
            vec!["the", "quick", "fox"]
        );
    }
}
