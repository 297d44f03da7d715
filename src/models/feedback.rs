use std::fmt;

use validator::Validate;

use super::DELIMITER;
use crate::db::Record;
use crate::parsing::parse_int_lenient;

pub const NAME_CAPACITY: usize = 63;
pub const COMMENT_CAPACITY: usize = 255;

const POSITIVE_KEYWORDS: [&str; 3] = ["good", "excellent", "nice"];
const NEGATIVE_KEYWORDS: [&str; 3] = ["bad", "poor", "terrible"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Keyword search over the lower-cased comment. Positive keywords win over
    /// negative ones. Matches are substrings, so "badge" counts as "bad".
    pub fn classify(comment: &str) -> Self {
        let lowered = comment.to_lowercase();
        if POSITIVE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            Sentiment::Positive
        } else if NEGATIVE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn code(self) -> i8 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Negative => -1,
            Sentiment::Neutral => 0,
        }
    }

    /// Sign of the stored code; zero and unparseable codes are neutral.
    pub fn from_code(code: i64) -> Self {
        match code.signum() {
            1 => Sentiment::Positive,
            -1 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Sentiment of a stored feedback line, read from the text after its last
/// delimiter. Lines without a delimiter yield `None`.
pub fn sentiment_of_line(line: &str) -> Option<Sentiment> {
    let (_, code) = line.rsplit_once(DELIMITER)?;
    Some(Sentiment::from_code(parse_int_lenient(code)))
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Feedback {
    #[validate(length(max = 63))]
    pub guest_name: String,
    #[validate(length(max = 255))]
    pub comment: String,
    pub sentiment: Sentiment,
}

impl Feedback {
    /// Classifies the comment once; the stored sentiment is never recomputed.
    pub fn new(guest_name: impl Into<String>, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        let sentiment = Sentiment::classify(&comment);
        Self {
            guest_name: guest_name.into(),
            comment,
            sentiment,
        }
    }
}

impl Record for Feedback {
    const KIND: &'static str = "feedback";

    fn encode(&self) -> String {
        format!(
            "{}{d}{}{d}{}",
            self.guest_name,
            self.comment,
            self.sentiment.code(),
            d = DELIMITER
        )
    }

    /// Full `name|comment|code` shape. The suggestion tally reads only the
    /// code through `sentiment_of_line`, which also counts two-field lines.
    fn decode(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let (guest_name, rest) = line.split_once(DELIMITER)?;
        let (comment, _) = rest.rsplit_once(DELIMITER)?;
        Some(Self {
            guest_name: guest_name.to_string(),
            comment: comment.to_string(),
            sentiment: sentiment_of_line(line)?,
        })
    }
}
