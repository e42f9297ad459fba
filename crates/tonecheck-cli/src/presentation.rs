//! Human-readable rendering of classification outcomes.

use crossterm::style::{Color, Stylize};
use tonecheck_core::{Analysis, ClassificationResult, ClassifyError, Decision, Sentiment};

/// Shown when the comment is empty or whitespace-only.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a comment to analyze.";

/// Shown when neither emoji nor words were found.
pub const NO_SIGNAL_MESSAGE: &str =
    "Could not detect sentiment. Try a longer comment or add some emoji.";

/// Shown when classification is switched off in the configuration.
pub const DISABLED_MESSAGE: &str = "Sentiment analysis is disabled in the configuration.";

/// Returns the icon displayed next to a label.
pub fn icon(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "😊",
        Sentiment::Neutral => "😐",
        Sentiment::Negative => "😞",
    }
}

/// Returns the terminal color for a label.
pub fn color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Neutral => Color::Yellow,
        Sentiment::Negative => Color::Red,
    }
}

/// Formats a result's confidence as a percentage with one decimal place.
pub fn format_percent(result: &ClassificationResult) -> String {
    format!("{:.1}%", result.percent())
}

/// Returns the user-facing message for a rejected comment.
pub fn error_message(error: &ClassifyError) -> &'static str {
    match error {
        ClassifyError::EmptyInput => EMPTY_INPUT_MESSAGE,
        ClassifyError::NoSignal => NO_SIGNAL_MESSAGE,
        ClassifyError::Disabled => DISABLED_MESSAGE,
    }
}

fn decision_label(decision: Decision) -> &'static str {
    match decision {
        Decision::Agreement => "emoji and words agree",
        Decision::EmojiLean => "emoji lean",
        Decision::LexicalFallback => "emoji tied, words decide",
        Decision::LexicalOnly => "words only",
    }
}

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit ANSI colors.
    pub color: bool,
    /// Append the emoji tally, lexical score and decision branch.
    pub explain: bool,
}

/// Renders one outcome as terminal text (no trailing newline).
pub fn render(outcome: &Result<Analysis, ClassifyError>, options: RenderOptions) -> String {
    let analysis = match outcome {
        Ok(analysis) => analysis,
        Err(error) => {
            let message = error_message(error);
            return if options.color {
                message.with(Color::Red).to_string()
            } else {
                message.to_string()
            };
        }
    };

    let sentiment = analysis.result.sentiment;
    let headline = format!(
        "{} {}  {}",
        icon(sentiment),
        sentiment.name(),
        format_percent(&analysis.result)
    );
    let mut out = if options.color {
        headline.with(color(sentiment)).bold().to_string()
    } else {
        headline
    };

    if options.explain {
        let tally = &analysis.tally;
        let lexical = &analysis.lexical;
        out.push_str(&format!(
            "\n  emoji:    {} positive, {} negative, {} neutral",
            tally.positive, tally.negative, tally.neutral
        ));
        out.push_str(&format!(
            "\n  words:    score {:+.2} over {} tokens ({}, {})",
            lexical.score,
            lexical.token_count,
            lexical.label,
            format_percent(&lexical.result())
        ));
        out.push_str(&format!(
            "\n  decision: {}",
            decision_label(analysis.decision)
        ));
    }

    out
}
