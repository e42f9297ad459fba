//! Sentiment labels and classification results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentiment categories a comment can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Happy, approving or celebratory tone.
    Positive,
    /// No clear lean either way.
    Neutral,
    /// Sad, angry or disapproving tone.
    Negative,
}

impl Sentiment {
    /// Returns all sentiment labels.
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }

    /// Returns a human-readable name for this label.
    pub fn name(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Returns the lowercase identifier used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Returns true for positive and negative labels.
    pub fn is_polar(&self) -> bool {
        !matches!(self, Sentiment::Neutral)
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying a comment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The assigned label.
    pub sentiment: Sentiment,
    /// Confidence score (0.0 to 1.0).
    pub confidence: f32,
}

impl ClassificationResult {
    /// Creates a new result, clamping confidence into `[0, 1]`.
    pub fn new(sentiment: Sentiment, confidence: f32) -> Self {
        Self {
            sentiment,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Confidence expressed as a percentage (0.0 to 100.0).
    pub fn percent(&self) -> f32 {
        self.confidence * 100.0
    }
}
