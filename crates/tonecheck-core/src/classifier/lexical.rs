//! Lexical signal scoring.
//!
//! Text is lower-cased, every character outside `[a-z0-9'_]` becomes a
//! space, and the remaining words are scored left to right against the
//! fixed lexicon. A scoring word looks back exactly one token: an
//! intensifier there scales its weight, a negation there flips its sign.
//! In "not very good" the word before "good" is "very", so the result is
//! an amplified positive and "not" has no effect.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::lexicon::{base_weight, is_intensifier, is_negation};
use super::{ClassificationResult, Sentiment};
use crate::config::ClassifierConfig;

/// Lexical confidence once any tokens exist.
pub const LEXICAL_CONFIDENCE_FLOOR: f32 = 0.6;

/// Headroom above the floor reached by a fully saturated score.
pub const LEXICAL_CONFIDENCE_SPAN: f32 = 0.35;

/// Upper bound for lexical confidence.
pub const LEXICAL_CONFIDENCE_CAP: f32 = 0.95;

static NON_TOKEN_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9'_]+").expect("Invalid token regex"));

/// Lower-cases `text` and replaces every non-token character with a space.
pub fn normalize(text: &str) -> String {
    NON_TOKEN_CHARS
        .replace_all(&text.to_lowercase(), " ")
        .into_owned()
}

/// Splits `text` into normalized tokens, preserving order.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Word-based sentiment signal for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LexicalSignal {
    /// Signed sum of adjusted token weights.
    pub score: f32,
    /// Number of tokens after normalization.
    pub token_count: usize,
    /// Label derived from the score.
    pub label: Sentiment,
    /// Confidence derived from score magnitude and token count.
    pub confidence: f32,
}

impl LexicalSignal {
    /// Scores `text` with the default configuration.
    pub fn from_text(text: &str) -> Self {
        Self::with_config(text, &ClassifierConfig::default())
    }

    /// Scores `text` using the intensifier boost and label threshold from `config`.
    pub fn with_config(text: &str, config: &ClassifierConfig) -> Self {
        let tokens = tokenize(text);
        let score = score_tokens(&tokens, config.intensifier_boost);
        let token_count = tokens.len();

        Self {
            score,
            token_count,
            label: label_for(score, config.label_threshold),
            confidence: confidence_for(score, token_count),
        }
    }

    /// Returns true if normalization produced at least one token.
    pub fn has_signal(&self) -> bool {
        self.token_count > 0
    }

    /// The lexical label and confidence as a standalone result.
    pub fn result(&self) -> ClassificationResult {
        ClassificationResult::new(self.label, self.confidence)
    }
}

// Summed in f64 so long inputs keep every unit step.
fn score_tokens(tokens: &[String], intensifier_boost: f32) -> f32 {
    let mut score = 0.0f64;

    for (i, token) in tokens.iter().enumerate() {
        let Some(mut weight) = base_weight(token) else {
            continue;
        };

        if let Some(prev) = i.checked_sub(1).map(|j| tokens[j].as_str()) {
            if is_intensifier(prev) {
                weight *= intensifier_boost;
            }
            if is_negation(prev) {
                weight = -weight;
            }
        }

        trace!(token = token.as_str(), weight, "scored token");
        score += f64::from(weight);
    }

    score as f32
}

fn label_for(score: f32, threshold: f32) -> Sentiment {
    if score > threshold {
        Sentiment::Positive
    } else if score < -threshold {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

// Longer comments need proportionally more signal: the score is normalized
// by sqrt(token_count) before it lifts confidence off the floor.
fn confidence_for(score: f32, token_count: usize) -> f32 {
    let scale = (token_count as f32).sqrt().max(1.0);
    let strength = (score.abs() / scale).min(1.0);
    let confidence = LEXICAL_CONFIDENCE_FLOOR + strength * LEXICAL_CONFIDENCE_SPAN;
    confidence.min(LEXICAL_CONFIDENCE_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn tokenize_strips_punctuation_and_emoji() {
        assert_eq!(
            tokenize("Great job!!! 😊 Can't-wait_for MORE"),
            vec!["great", "job", "can't", "wait_for", "more"]
        );
    }

    #[test]
    fn tokenize_drops_non_ascii_letters() {
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn tokenize_empty_for_punctuation_only() {
        assert!(tokenize("!!! ??? ---").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn positive_word_scores_positive() {
        let signal = LexicalSignal::from_text("good");
        assert!(close(signal.score, 1.0));
        assert_eq!(signal.label, Sentiment::Positive);
        assert!(close(signal.confidence, 0.95));
    }

    #[test]
    fn negation_flips_positive_word() {
        let signal = LexicalSignal::from_text("not good");
        assert!(close(signal.score, -1.0));
        assert_eq!(signal.label, Sentiment::Negative);
    }

    #[test]
    fn negation_flips_negative_word() {
        let signal = LexicalSignal::from_text("not bad");
        assert!(close(signal.score, 1.0));
        assert_eq!(signal.label, Sentiment::Positive);
    }

    #[test]
    fn intensifier_amplifies_without_changing_sign() {
        let plain = LexicalSignal::from_text("good");
        let boosted = LexicalSignal::from_text("very good");
        assert!(boosted.score > plain.score);
        assert!(close(boosted.score, 1.6));

        let boosted_negative = LexicalSignal::from_text("really terrible");
        assert!(close(boosted_negative.score, -1.6));
    }

    #[test]
    fn long_input_sums_every_boosted_word() {
        let text = "very good ".repeat(1000);
        let signal = LexicalSignal::from_text(&text);
        assert_eq!(signal.token_count, 2000);
        assert_eq!(signal.score, 1600.0);
        assert_eq!(signal.label, Sentiment::Positive);
    }

    #[test]
    fn negation_two_tokens_back_is_ignored() {
        let signal = LexicalSignal::from_text("not very good");
        assert!(close(signal.score, 1.6));
        assert_eq!(signal.label, Sentiment::Positive);
    }

    #[test]
    fn modifiers_only_affect_the_next_token() {
        // "very" boosts "good" only; "bad" sits after "good".
        let signal = LexicalSignal::from_text("very good bad");
        assert!(close(signal.score, 0.6));
        assert_eq!(signal.label, Sentiment::Positive);
    }

    #[test]
    fn mixed_words_can_cancel_out() {
        let signal = LexicalSignal::from_text("good but bad");
        assert!(close(signal.score, 0.0));
        assert_eq!(signal.label, Sentiment::Neutral);
        assert!(close(signal.confidence, 0.6));
    }

    #[test]
    fn confidence_scales_with_token_count() {
        // score 1 over 4 tokens: 0.6 + (1 / 2) * 0.35
        let signal = LexicalSignal::from_text("the food was good");
        assert_eq!(signal.token_count, 4);
        assert!(close(signal.confidence, 0.775));
    }

    #[test]
    fn unknown_words_are_neutral_at_floor() {
        let signal = LexicalSignal::from_text("the table is brown");
        assert!(close(signal.score, 0.0));
        assert_eq!(signal.label, Sentiment::Neutral);
        assert!(close(signal.confidence, LEXICAL_CONFIDENCE_FLOOR));
    }

    #[test]
    fn empty_text_has_no_signal() {
        let signal = LexicalSignal::from_text("🎉🎉");
        assert!(!signal.has_signal());
        assert_eq!(signal.label, Sentiment::Neutral);
        assert!(close(signal.confidence, LEXICAL_CONFIDENCE_FLOOR));
    }

    #[test]
    fn custom_boost_and_threshold() {
        let config = ClassifierConfig {
            intensifier_boost: 2.0,
            label_threshold: 1.5,
            ..Default::default()
        };
        let signal = LexicalSignal::with_config("very good", &config);
        assert!(close(signal.score, 2.0));
        assert_eq!(signal.label, Sentiment::Positive);

        let signal = LexicalSignal::with_config("good", &config);
        assert_eq!(signal.label, Sentiment::Neutral);
    }
}
