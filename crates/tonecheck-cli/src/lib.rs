//! Tonecheck - command-line front end for the sentiment classifier.
//!
//! This crate owns everything the classifier leaves to its caller:
//!
//! - Rejecting empty comments before classification
//! - Label icons and colors (positive green, neutral yellow, negative red)
//! - Confidence as a one-decimal percentage
//! - User-facing messages when no result is produced

pub mod presentation;
pub mod report;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use tonecheck_core::{Analysis, ClassifierConfig, ClassifyError, SentimentClassifier};

use crate::presentation::{render, RenderOptions};
use crate::report::JsonReport;

/// Output format and rendering switches for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Emit one JSON object per line instead of terminal text.
    pub json: bool,
    /// Rendering switches for terminal text.
    pub render: RenderOptions,
}

/// Loads the classifier configuration, falling back to defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ClassifierConfig> {
    match path {
        Some(path) => ClassifierConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ClassifierConfig::default()),
    }
}

/// Classifies one comment, rejecting blank input without calling the classifier.
pub fn evaluate(classifier: &SentimentClassifier, text: &str) -> Result<Analysis, ClassifyError> {
    if text.trim().is_empty() {
        return Err(ClassifyError::EmptyInput);
    }
    classifier.analyze(text)
}

/// Classifies each input and writes one entry per input to `out`.
///
/// Returns the number of inputs that produced no result.
pub fn write_outcomes<W: Write>(
    classifier: &SentimentClassifier,
    inputs: &[String],
    options: OutputOptions,
    out: &mut W,
) -> io::Result<usize> {
    let mut rejected = 0;

    for text in inputs {
        let outcome = evaluate(classifier, text);
        if let Err(error) = &outcome {
            tracing::info!("No result for input: {}", error);
            rejected += 1;
        }

        if options.json {
            let report = JsonReport::new(text, &outcome, options.render.explain);
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", render(&outcome, options.render))?;
        }
    }

    Ok(rejected)
}
