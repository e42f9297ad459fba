//! Fixed English word lists used by the lexical scorer.
//!
//! All four sets are disjoint. Tokens keep apostrophes, so contractions such
//! as `don't` appear here verbatim; apostrophe-less spellings are listed too
//! because typographic apostrophes are stripped during normalization.

use std::collections::HashSet;

use once_cell::sync::Lazy;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "awesome",
    "fantastic",
    "wonderful",
    "brilliant",
    "superb",
    "outstanding",
    "perfect",
    "best",
    "better",
    "love",
    "loved",
    "loving",
    "lovely",
    "like",
    "liked",
    "enjoy",
    "enjoyed",
    "happy",
    "glad",
    "pleased",
    "delighted",
    "nice",
    "cool",
    "fun",
    "beautiful",
    "helpful",
    "useful",
    "recommend",
    "recommended",
    "impressive",
    "impressed",
    "fast",
    "easy",
    "smooth",
    "thanks",
    "thank",
    "satisfied",
    "win",
    "works",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "worse",
    "poor",
    "hate",
    "hated",
    "dislike",
    "sad",
    "angry",
    "annoyed",
    "annoying",
    "disappointed",
    "disappointing",
    "frustrated",
    "frustrating",
    "boring",
    "broken",
    "buggy",
    "useless",
    "ugly",
    "slow",
    "wrong",
    "fail",
    "failed",
    "fails",
    "sucks",
    "waste",
    "mediocre",
    "confusing",
    "difficult",
    "problem",
    "issue",
    "crash",
    "crashes",
    "unhappy",
    "upset",
    "lame",
    "meh",
];

const NEGATIONS: &[&str] = &[
    "not",
    "no",
    "never",
    "none",
    "nobody",
    "nothing",
    "neither",
    "nor",
    "cannot",
    "can't",
    "cant",
    "don't",
    "dont",
    "doesn't",
    "doesnt",
    "didn't",
    "didnt",
    "isn't",
    "isnt",
    "wasn't",
    "wasnt",
    "aren't",
    "arent",
    "weren't",
    "werent",
    "won't",
    "wont",
    "wouldn't",
    "wouldnt",
    "shouldn't",
    "shouldnt",
    "couldn't",
    "couldnt",
    "hardly",
    "barely",
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "so",
    "super",
    "totally",
    "absolutely",
    "incredibly",
    "truly",
    "highly",
    "quite",
    "too",
    "completely",
    "utterly",
    "especially",
];

static POSITIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| POSITIVE_WORDS.iter().copied().collect());
static NEGATIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATIVE_WORDS.iter().copied().collect());
static NEGATION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATIONS.iter().copied().collect());
static INTENSIFIER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

/// Base weight of a token: `+1` positive, `-1` negative, `None` otherwise.
pub fn base_weight(token: &str) -> Option<f32> {
    if POSITIVE_SET.contains(token) {
        Some(1.0)
    } else if NEGATIVE_SET.contains(token) {
        Some(-1.0)
    } else {
        None
    }
}

/// Returns true if the token flips the polarity of the next token.
pub fn is_negation(token: &str) -> bool {
    NEGATION_SET.contains(token)
}

/// Returns true if the token amplifies the next token.
pub fn is_intensifier(token: &str) -> bool {
    INTENSIFIER_SET.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_sets_are_disjoint() {
        let sets: [(&str, &[&str]); 4] = [
            ("positive", POSITIVE_WORDS),
            ("negative", NEGATIVE_WORDS),
            ("negation", NEGATIONS),
            ("intensifier", INTENSIFIERS),
        ];
        for (i, (a_name, a)) in sets.iter().enumerate() {
            for (b_name, b) in sets.iter().skip(i + 1) {
                for word in a.iter() {
                    assert!(!b.contains(word), "{word} is in {a_name} and {b_name}");
                }
            }
        }
    }

    fn is_token_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\'' || c == '_'
    }

    #[test]
    fn entries_are_normalized_tokens() {
        let all = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .chain(NEGATIONS)
            .chain(INTENSIFIERS);
        for word in all {
            assert!(
                word.chars().all(is_token_char),
                "{word} would never survive normalization"
            );
        }
    }

    #[test]
    fn base_weights() {
        assert_eq!(base_weight("good"), Some(1.0));
        assert_eq!(base_weight("terrible"), Some(-1.0));
        assert_eq!(base_weight("table"), None);
        assert_eq!(base_weight("not"), None);
    }

    #[test]
    fn modifiers() {
        assert!(is_negation("not"));
        assert!(is_negation("don't"));
        assert!(!is_negation("very"));
        assert!(is_intensifier("extremely"));
        assert!(!is_intensifier("never"));
    }
}
