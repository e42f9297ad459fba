//! Emoji signal extraction.
//!
//! Scans text code point by code point and tallies emoji from three fixed,
//! disjoint sets. Multi-code-point sequences such as `❤️` (heart plus
//! variation selector) or `🤷‍♀️` (shrug plus ZWJ sequence) are counted once
//! through their base code point; selectors, joiners and skin-tone modifiers
//! belong to no set.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Sentiment;

const POSITIVE_EMOJI: &str = "😀😃😄😁😆😂🤣😊🙂😉😋😍🥰😘😎🤩🥳😇☺❤💖💕💗💯⭐🌟✨👍👏🙌🎉🎊";

const NEGATIVE_EMOJI: &str = "😢😭😞😔😟😠😡🤬💔👎😤😩😫😖😣☹🙁😒😓😥😰😨😱🤢🤮";

const NEUTRAL_EMOJI: &str = "😐😑😶🤔🤷🫤😕";

static POSITIVE_SET: Lazy<HashSet<char>> = Lazy::new(|| POSITIVE_EMOJI.chars().collect());
static NEGATIVE_SET: Lazy<HashSet<char>> = Lazy::new(|| NEGATIVE_EMOJI.chars().collect());
static NEUTRAL_SET: Lazy<HashSet<char>> = Lazy::new(|| NEUTRAL_EMOJI.chars().collect());

/// Returns the sentiment set a code point belongs to, if any.
pub fn emoji_polarity(c: char) -> Option<Sentiment> {
    if POSITIVE_SET.contains(&c) {
        Some(Sentiment::Positive)
    } else if NEGATIVE_SET.contains(&c) {
        Some(Sentiment::Negative)
    } else if NEUTRAL_SET.contains(&c) {
        Some(Sentiment::Neutral)
    } else {
        None
    }
}

/// Per-category emoji counts for one piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiTally {
    /// Happy or celebratory emoji.
    pub positive: usize,
    /// Sad or angry emoji.
    pub negative: usize,
    /// Ambivalent emoji.
    pub neutral: usize,
}

impl EmojiTally {
    /// Tallies the emoji in `text`.
    pub fn from_text(text: &str) -> Self {
        let mut tally = Self::default();
        for c in text.chars() {
            match emoji_polarity(c) {
                Some(Sentiment::Positive) => tally.positive += 1,
                Some(Sentiment::Negative) => tally.negative += 1,
                Some(Sentiment::Neutral) => tally.neutral += 1,
                None => {}
            }
        }
        tally
    }

    /// Total number of recognized emoji.
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Returns true if any emoji was recognized.
    pub fn has_signal(&self) -> bool {
        self.total() > 0
    }

    /// The category with a strictly highest count; ties resolve to neutral.
    pub fn dominant(&self) -> Sentiment {
        if self.positive > self.negative && self.positive > self.neutral {
            Sentiment::Positive
        } else if self.negative > self.positive && self.negative > self.neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Absolute difference between positive and negative counts.
    pub fn polar_gap(&self) -> usize {
        self.positive.abs_diff(self.negative)
    }

    /// Confidence contributed by emoji volume: `0.75 + min(0.2, total / 10)`.
    pub fn base_confidence(&self) -> f32 {
        0.75 + (self.total() as f32 / 10.0).min(0.2)
    }
}
