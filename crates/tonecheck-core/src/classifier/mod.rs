//! Sentiment classification for short comments.
//!
//! Two leaf stages feed a combiner: emoji tallying and lexicon-based word
//! scoring. Neither stage keeps state between calls.

mod combiner;
mod emoji;
mod lexical;
mod lexicon;
mod sentiment;

pub use combiner::{
    Analysis, Decision, SentimentClassifier, AGREEMENT_CONFIDENCE_CAP, COMBINED_CONFIDENCE_CAP,
};
pub use emoji::{emoji_polarity, EmojiTally};
pub use lexical::{
    normalize, tokenize, LexicalSignal, LEXICAL_CONFIDENCE_CAP, LEXICAL_CONFIDENCE_FLOOR,
    LEXICAL_CONFIDENCE_SPAN,
};
pub use lexicon::{base_weight, is_intensifier, is_negation};
pub use sentiment::{ClassificationResult, Sentiment};
