//! NeuroStay front desk: room bookings and guest feedback kept in two
//! append-only text stores, with a revenue report and a sentiment-based
//! room-type suggestion derived from them.

pub mod config;
pub mod console;
pub mod db;
pub mod handlers;
pub mod menu;
pub mod models;
pub mod parsing;

mod errors;

pub use config::AppConfig;
pub use console::Console;
pub use db::{Record, Store};
pub use errors::AppError;
pub use menu::{FrontDesk, MenuChoice};
pub use models::booking::{Booking, RoomCategory};
pub use models::feedback::{Feedback, Sentiment};
