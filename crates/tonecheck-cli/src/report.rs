//! JSON output.

use serde::Serialize;
use tonecheck_core::{Analysis, ClassifyError, Sentiment};

use crate::presentation::{error_message, format_percent};

/// One JSON line per classified comment.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// The comment as given.
    pub text: &'a str,
    /// Assigned label, absent when the comment was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// Raw confidence in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// Confidence formatted for display, e.g. `"87.5%"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<String>,
    /// User-facing message explaining why no label was produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    /// Intermediate signals, only with `--explain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl<'a> JsonReport<'a> {
    /// Builds a report for one outcome.
    pub fn new(text: &'a str, outcome: &Result<Analysis, ClassifyError>, explain: bool) -> Self {
        match outcome {
            Ok(analysis) => Self {
                text,
                sentiment: Some(analysis.result.sentiment),
                confidence: Some(analysis.result.confidence),
                percent: Some(format_percent(&analysis.result)),
                error: None,
                analysis: explain.then_some(*analysis),
            },
            Err(error) => Self {
                text,
                sentiment: None,
                confidence: None,
                percent: None,
                error: Some(error_message(error)),
                analysis: None,
            },
        }
    }
}
