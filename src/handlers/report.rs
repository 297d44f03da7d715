use std::io::{BufRead, Write};

use crate::console::Console;
use crate::db::{Record, Store};
use crate::errors::AppError;
use crate::models::booking::Booking;

const RULE: &str = "-----------------------------------------------";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RevenueReport {
    pub bookings: Vec<Booking>,
    pub total_revenue: f64,
}

impl RevenueReport {
    /// Keeps lines that decode as bookings, in store order.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut report = Self::default();
        for (idx, line) in lines.into_iter().enumerate() {
            match Booking::decode(line) {
                Some(booking) => {
                    report.total_revenue += booking.total_price;
                    report.bookings.push(booking);
                }
                None => log::debug!("skipping malformed booking line {}", idx + 1),
            }
        }
        report
    }

    pub fn total_bookings(&self) -> usize {
        self.bookings.len()
    }

    pub fn row(booking: &Booking) -> String {
        format!(
            "{:<12} {:<10} {:<4} ₹{:.2}",
            booking.guest_name, booking.room_type, booking.nights, booking.total_price
        )
    }
}

/// Prints every well-formed booking followed by count and revenue totals.
/// A missing store prints "No booking data found." and yields `None`.
pub fn show_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
) -> Result<Option<RevenueReport>, AppError> {
    let Some(lines) = super::scan_or_report(console, store, "No booking data found.")? else {
        return Ok(None);
    };

    let report = RevenueReport::from_lines(lines.iter().map(String::as_str));
    let skipped = lines.len() - report.total_bookings();
    if skipped > 0 {
        log::info!("report skipped {skipped} malformed booking line(s)");
    }

    console.println("\nName\t\tRoom\tDays\tPrice")?;
    console.println(RULE)?;
    for booking in &report.bookings {
        console.println(&RevenueReport::row(booking))?;
    }
    console.println(RULE)?;
    console.println(&format!("Total bookings: {}", report.total_bookings()))?;
    console.println(&format!("Total revenue : ₹{:.2}", report.total_revenue))?;
    Ok(Some(report))
}
