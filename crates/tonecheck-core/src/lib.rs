//! Tonecheck Core - heuristic sentiment classification for short comments.
//!
//! Classifies free text as positive, neutral or negative with a confidence
//! score, using only fixed emoji sets and an English word lexicon. No model,
//! no network, no I/O.
//!
//! # Usage
//!
//! ```
//! use tonecheck_core::{classify, Sentiment};
//!
//! let result = classify("😊 great").unwrap();
//! assert_eq!(result.sentiment, Sentiment::Positive);
//!
//! assert!(classify("   ").is_none());
//! assert!(classify("!!! ???").is_none());
//! ```

pub mod classifier;
pub mod config;
pub mod error;

use once_cell::sync::Lazy;

pub use classifier::{
    Analysis, ClassificationResult, Decision, EmojiTally, LexicalSignal, Sentiment,
    SentimentClassifier,
};
pub use config::ClassifierConfig;
pub use error::{ClassifyError, ConfigError};

static DEFAULT_CLASSIFIER: Lazy<SentimentClassifier> =
    Lazy::new(SentimentClassifier::with_defaults);

/// Classifies `text` with the default configuration.
///
/// Returns `None` for empty or whitespace-only text, and for text with no
/// emoji that normalizes to zero words.
pub fn classify(text: &str) -> Option<ClassificationResult> {
    DEFAULT_CLASSIFIER.classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_function_matches_default_classifier() {
        let text = "not bad at all 👍";
        assert_eq!(
            classify(text),
            SentimentClassifier::with_defaults().classify(text)
        );
    }

    #[test]
    fn negation_examples() {
        assert_eq!(classify("not good").unwrap().sentiment, Sentiment::Negative);
        assert_eq!(classify("not bad").unwrap().sentiment, Sentiment::Positive);
    }

    #[test]
    fn mixed_review_reads_as_written() {
        let result = classify("The app is really slow and crashes, terrible 😡").unwrap();
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert!(result.confidence > 0.9);
    }
}
