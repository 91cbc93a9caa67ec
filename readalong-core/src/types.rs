//! Core types for readalong-core

use serde::{Deserialize, Serialize};

/// One transcript entry: a word plus its speech-onset timestamp.
///
/// Wire format is one JSON object per transcript line with integer
/// millisecond `time` and string `value` fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedWord {
    /// Speech-onset time in milliseconds
    #[serde(rename = "time")]
    pub time_ms: u64,
    /// Transcript word text
    pub value: String,
}

impl TimedWord {
    pub fn new(value: impl Into<String>, time_ms: u64) -> Self {
        Self {
            time_ms,
            value: value.into(),
        }
    }
}

/// Location of a token in the rendered document.
///
/// Ordered lexicographically on `(page, line, word)`, all zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub page: usize,
    pub line: usize,
    pub word: usize,
}

impl Position {
    pub fn new(page: usize, line: usize, word: usize) -> Self {
        Self { page, line, word }
    }
}

/// A [`TimedWord`] bound to a specific token position after matching.
///
/// `display_value` is the surface text as it appears on the page, which may
/// differ from the transcript spelling that matched it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedWord {
    /// Speech-onset time in milliseconds, from the matched [`TimedWord`]
    #[serde(rename = "time")]
    pub time_ms: u64,
    /// Token text as rendered on the page
    #[serde(rename = "value")]
    pub display_value: String,
    /// Location of the matched token
    #[serde(flatten)]
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_orders_lexicographically() {
        let a = Position::new(0, 5, 9);
        let b = Position::new(1, 0, 0);
        let c = Position::new(1, 0, 1);

        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn timed_word_round_trips_wire_names() {
        let word: TimedWord = serde_json::from_str(r#"{"time": 1500, "value": "hello"}"#).unwrap();

        assert_eq!(word.time_ms, 1500);
        assert_eq!(word.value, "hello");

        let json = serde_json::to_string(&word).unwrap();
        assert!(json.contains(r#""time":1500"#));
    }
}
