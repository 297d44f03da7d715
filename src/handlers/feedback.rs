use std::io::{BufRead, Write};

use crate::console::Console;
use crate::db::Store;
use crate::errors::AppError;
use crate::models::feedback::{Feedback, COMMENT_CAPACITY, NAME_CAPACITY};

/// Prompts for guest and comment, classifies the comment and appends it.
pub fn give_feedback<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
) -> Result<Option<Feedback>, AppError> {
    let Some(guest_name) = console.prompt("\nEnter your name: ", NAME_CAPACITY)? else {
        return Ok(None);
    };
    let Some(comment) = console.prompt("Write feedback (good/bad/average): ", COMMENT_CAPACITY)?
    else {
        return Ok(None);
    };

    let feedback = Feedback::new(guest_name, comment);
    log::debug!("feedback classified as {}", feedback.sentiment);

    if !super::append_or_report(console, store, &feedback)? {
        return Ok(None);
    }
    console.println(&format!(
        "\nThanks {} — your feedback is recorded.",
        feedback.guest_name
    ))?;
    Ok(Some(feedback))
}
