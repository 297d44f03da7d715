use std::io::{BufRead, Write};

use crate::config::AppConfig;
use crate::console::Console;
use crate::db::Store;
use crate::errors::AppError;
use crate::handlers;
use crate::parsing::parse_menu_choice;

const MENU_CAPACITY: usize = 31;
const BANNER_RULE: &str = "===========================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BookRoom,
    GiveFeedback,
    Suggestion,
    Report,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match parse_menu_choice(input) {
            1 => MenuChoice::BookRoom,
            2 => MenuChoice::GiveFeedback,
            3 => MenuChoice::Suggestion,
            4 => MenuChoice::Report,
            5 => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// The two stores the front desk works against.
#[derive(Debug, Clone)]
pub struct FrontDesk {
    pub bookings: Store,
    pub feedback: Store,
}

impl FrontDesk {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            bookings: Store::new(config.bookings_path()),
            feedback: Store::new(config.feedback_path()),
        }
    }

    /// Runs one menu selection. Returns `false` when the loop should stop.
    pub fn dispatch<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        choice: MenuChoice,
    ) -> Result<bool, AppError> {
        log::debug!("menu selection: {choice:?}");
        match choice {
            MenuChoice::BookRoom => {
                handlers::bookings::book_room(console, &self.bookings)?;
            }
            MenuChoice::GiveFeedback => {
                handlers::feedback::give_feedback(console, &self.feedback)?;
            }
            MenuChoice::Suggestion => {
                handlers::recommendation::suggest(console, &self.feedback)?;
            }
            MenuChoice::Report => {
                handlers::report::show_report(console, &self.bookings)?;
            }
            MenuChoice::Exit => {
                console.println("\nGoodbye!")?;
                return Ok(false);
            }
            MenuChoice::Invalid => console.println("\nInvalid option. Try again.")?,
        }
        Ok(true)
    }

    /// Menu loop: clear, render, read, dispatch, pause. Ends on option 5 or
    /// when input runs out.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<(), AppError> {
        loop {
            console.clear()?;
            render_menu(console)?;

            let Some(line) = console.read_line()? else {
                log::info!("end of input, leaving menu");
                break;
            };
            let choice = MenuChoice::parse(&line.chars().take(MENU_CAPACITY).collect::<String>());
            if !self.dispatch(console, choice)? {
                break;
            }
            if !console.pause()? {
                log::info!("end of input, leaving menu");
                break;
            }
        }
        Ok(())
    }
}

fn render_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), AppError> {
    console.println(BANNER_RULE)?;
    console.println("        🧠 NEUROSTAY AI HOTEL SYSTEM       ")?;
    console.println(BANNER_RULE)?;
    console.println("1. Book Room")?;
    console.println("2. Give Feedback")?;
    console.println("3. AI Suggestion")?;
    console.println("4. Show Report")?;
    console.println("5. Exit")?;
    console.println(BANNER_RULE)?;
    console.print("Choose an option: ")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::BookRoom);
        assert_eq!(MenuChoice::parse(" 4 "), MenuChoice::Report);
        assert_eq!(MenuChoice::parse("5"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("9"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("book"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
    }
}
