//! Signal combination.
//!
//! Merges the emoji tally and the lexical signal into one label:
//! 1. Whitespace-only text yields no result
//! 2. With emoji present, emoji confidence outweighs lexical confidence 3:1
//!    and the emoji lean wins unless positive and negative counts tie
//! 3. Without emoji, the lexical result stands on its own

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ClassificationResult, EmojiTally, LexicalSignal};
use crate::config::ClassifierConfig;
use crate::error::{ClassifyError, Result};

/// Upper bound for the blended emoji/lexical confidence.
pub const COMBINED_CONFIDENCE_CAP: f32 = 0.98;

/// Upper bound once the agreement bonus is applied.
pub const AGREEMENT_CONFIDENCE_CAP: f32 = 0.99;

/// The branch of the decision procedure that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Emoji and words lean the same polar way; bonus applied.
    Agreement,
    /// Emoji lean decided despite the words.
    EmojiLean,
    /// Positive and negative emoji tied, so the words decided.
    LexicalFallback,
    /// No emoji; words only.
    LexicalOnly,
}

/// Full breakdown of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Emoji counts.
    pub tally: EmojiTally,
    /// Word-based signal.
    pub lexical: LexicalSignal,
    /// Branch that produced the result.
    pub decision: Decision,
    /// Final label and confidence.
    pub result: ClassificationResult,
}

/// Emoji and lexicon based sentiment classifier.
///
/// Holds only its configuration; the word and emoji sets are process-wide
/// read-only data, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier {
    config: ClassifierConfig,
}

impl SentimentClassifier {
    /// Creates a classifier with the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Creates a classifier with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ClassifierConfig::default())
    }

    /// Classifies `text`, returning `None` when it carries no usable signal.
    pub fn classify(&self, text: &str) -> Option<ClassificationResult> {
        self.try_classify(text).ok()
    }

    /// Classifies `text`, reporting why no result was produced.
    pub fn try_classify(&self, text: &str) -> Result<ClassificationResult> {
        self.analyze(text).map(|analysis| analysis.result)
    }

    /// Classifies `text` and returns the intermediate signals alongside the result.
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        if !self.config.enabled {
            return Err(ClassifyError::Disabled);
        }
        if text.trim().is_empty() {
            return Err(ClassifyError::EmptyInput);
        }

        let tally = EmojiTally::from_text(text);
        let lexical = LexicalSignal::with_config(text, &self.config);

        let (decision, result) = if tally.has_signal() {
            self.combine(&tally, &lexical)
        } else if lexical.has_signal() {
            (Decision::LexicalOnly, lexical.result())
        } else {
            debug!("No emoji or word tokens in {} chars", text.len());
            return Err(ClassifyError::NoSignal);
        };

        debug!(
            "Classified as {} ({:.3}) via {:?}: emoji {:?}, lexical score {:.2} over {} tokens",
            result.sentiment,
            result.confidence,
            decision,
            tally,
            lexical.score,
            lexical.token_count
        );

        Ok(Analysis {
            tally,
            lexical,
            decision,
            result,
        })
    }

    fn combine(
        &self,
        tally: &EmojiTally,
        lexical: &LexicalSignal,
    ) -> (Decision, ClassificationResult) {
        let dominant = tally.dominant();
        let emoji_weight = self.config.emoji_weight;
        let emoji_part = tally.base_confidence() * emoji_weight;
        let lexical_part = lexical.confidence * (1.0 - emoji_weight);
        let combined = (emoji_part + lexical_part).min(COMBINED_CONFIDENCE_CAP);

        if lexical.label.is_polar() && lexical.label == dominant {
            let bonus = self.config.agreement_bonus;
            let boosted = (combined + bonus).min(AGREEMENT_CONFIDENCE_CAP);
            (
                Decision::Agreement,
                ClassificationResult::new(dominant, boosted),
            )
        } else if tally.polar_gap() >= 1 {
            (
                Decision::EmojiLean,
                ClassificationResult::new(dominant, combined),
            )
        } else {
            (Decision::LexicalFallback, lexical.result())
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Updates the configuration.
    pub fn set_config(&mut self, config: ClassifierConfig) {
        self.config = config;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const POSITIVE_SAMPLE: &[&str] = &[
        "good",
        "great",
        "excellent",
        "amazing",
        "awesome",
        "love",
        "happy",
        "nice",
        "perfect",
        "helpful",
    ];

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_whitespace_is_absent(text in "[ \t\r\n]{0,20}") {
            prop_assert!(SentimentClassifier::with_defaults().classify(&text).is_none());
        }

        #[test]
        fn prop_symbols_only_is_absent(text in "[!?.,;:*#()\\-]{1,30}") {
            prop_assert!(SentimentClassifier::with_defaults().classify(&text).is_none());
        }

        #[test]
        fn prop_confidence_bounded(text in "\\PC{0,60}") {
            if let Some(result) = SentimentClassifier::with_defaults().classify(&text) {
                prop_assert!((0.0..=AGREEMENT_CONFIDENCE_CAP).contains(&result.confidence));
            }
        }

        #[test]
        fn prop_emoji_confidence_bounded(
            emoji in prop::sample::select(vec!["😊", "😢", "🤔", "👍", "💔"]),
            count in 1usize..15,
            words in "[a-z ]{0,40}",
        ) {
            let text = format!("{} {}", emoji.repeat(count), words);
            let result = SentimentClassifier::with_defaults().classify(&text);
            prop_assert!(result.is_some());
            let confidence = result.map(|r| r.confidence).unwrap_or_default();
            prop_assert!((0.0..=AGREEMENT_CONFIDENCE_CAP).contains(&confidence));
        }

        #[test]
        fn prop_lexical_confidence_bounded(text in "[a-z' ]{1,60}") {
            if let Some(result) = SentimentClassifier::with_defaults().classify(&text) {
                prop_assert!((0.6..=0.95).contains(&result.confidence));
            }
        }

        #[test]
        fn prop_positive_words_are_monotonic(
            words in prop::sample::subsequence(POSITIVE_SAMPLE, 1..POSITIVE_SAMPLE.len()),
        ) {
            let mut previous = 0.0f32;
            for k in 1..=words.len() {
                let score = LexicalSignal::from_text(&words[..k].join(" ")).score;
                prop_assert!(score >= previous);
                previous = score;
            }
        }

        #[test]
        fn prop_classification_is_idempotent(text in "\\PC{0,60}") {
            let c = SentimentClassifier::with_defaults();
            let first = c.classify(&text);
            let second = c.classify(&text);
            prop_assert_eq!(first.map(|r| r.sentiment), second.map(|r| r.sentiment));
            prop_assert_eq!(
                first.map(|r| r.confidence.to_bits()),
                second.map(|r| r.confidence.to_bits())
            );
        }
    }
}
