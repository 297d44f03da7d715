use std::io::{BufRead, Write};

use crate::console::Console;
use crate::db::Store;
use crate::errors::AppError;
use crate::models::booking::{Booking, NAME_CAPACITY, ROOM_TYPE_CAPACITY};
use crate::parsing::parse_nights_or_default;

const NIGHTS_CAPACITY: usize = 255;

/// Prompts for guest, room type and nights, prices the stay and appends it.
/// End of input mid-way abandons the booking without writing anything.
pub fn book_room<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &Store,
) -> Result<Option<Booking>, AppError> {
    let Some(guest_name) = console.prompt("\nEnter customer full name: ", NAME_CAPACITY)? else {
        return Ok(None);
    };
    let Some(room_type) =
        console.prompt("Room Type (Deluxe / Standard / Budget): ", ROOM_TYPE_CAPACITY)?
    else {
        return Ok(None);
    };
    let Some(nights) = console.prompt("Number of days: ", NIGHTS_CAPACITY)? else {
        return Ok(None);
    };

    let booking = Booking::new(guest_name, room_type, parse_nights_or_default(&nights));
    log::debug!(
        "pricing {} night(s) at the {} rate",
        booking.nights,
        booking.category()
    );

    if !super::append_or_report(console, store, &booking)? {
        return Ok(None);
    }
    console.println(&format!(
        "\nBooking saved for {}. Total = ₹{:.2}",
        booking.guest_name, booking.total_price
    ))?;
    Ok(Some(booking))
}
