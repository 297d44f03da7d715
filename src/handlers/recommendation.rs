use std::io::{BufRead, Write};

use crate::console::Console;
use crate::db::Store;
use crate::errors::AppError;
use crate::models::feedback::{sentiment_of_line, Sentiment};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentTally {
    /// Counts stored feedback lines. Lines without a delimiter are skipped;
    /// neutral codes count towards neither side.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tally = Self::default();
        for line in lines {
            match sentiment_of_line(line) {
                Some(Sentiment::Positive) => tally.positive += 1,
                Some(Sentiment::Negative) => tally.negative += 1,
                Some(Sentiment::Neutral) => {}
                None => log::debug!("skipping feedback line without delimiter"),
            }
        }
        tally
    }

    pub fn recommendation(&self) -> Recommendation {
        if self.positive > self.negative {
            Recommendation::PromoteDeluxe
        } else if self.negative > self.positive {
            Recommendation::ImproveBudget
        } else {
            Recommendation::FocusStandard
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    PromoteDeluxe,
    ImproveBudget,
    FocusStandard,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::PromoteDeluxe => {
                "Recommend promoting: DELUXE rooms (positive reviews higher)"
            }
            Recommendation::ImproveBudget => {
                "Recommend improving: BUDGET rooms (negative reviews higher)"
            }
            Recommendation::FocusStandard => "Neutral feedback — focus on STANDARD rooms.",
        }
    }
}

/// Tallies the feedback store and prints one recommendation. A missing store
/// prints "No feedback data found." and yields `None`.
pub fn suggest<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
) -> Result<Option<Recommendation>, AppError> {
    let Some(lines) = super::scan_or_report(console, store, "No feedback data found.")? else {
        return Ok(None);
    };

    let tally = SentimentTally::from_lines(lines.iter().map(String::as_str));
    log::info!(
        "feedback tally: {} positive, {} negative",
        tally.positive,
        tally.negative
    );
    let recommendation = tally.recommendation();

    console.println("\n===== AI SUGGESTION =====")?;
    console.println(recommendation.message())?;
    Ok(Some(recommendation))
}
