use std::fmt;

use validator::Validate;

use super::DELIMITER;
use crate::db::Record;
use crate::parsing::scan_float_prefix;

pub const NAME_CAPACITY: usize = 63;
pub const ROOM_TYPE_CAPACITY: usize = 31;

/// Pricing tier selected from the free-text room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomCategory {
    Deluxe,
    Standard,
    Budget,
}

impl RoomCategory {
    /// Case-insensitive prefix match, Deluxe before Standard; anything else is Budget.
    pub fn from_room_type(room_type: &str) -> Self {
        if has_prefix_ignore_case(room_type, "deluxe") {
            RoomCategory::Deluxe
        } else if has_prefix_ignore_case(room_type, "standard") {
            RoomCategory::Standard
        } else {
            RoomCategory::Budget
        }
    }

    pub fn nightly_rate(self) -> f64 {
        match self {
            RoomCategory::Deluxe => 2000.0,
            RoomCategory::Standard => 1500.0,
            RoomCategory::Budget => 1000.0,
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoomCategory::Deluxe => "Deluxe",
            RoomCategory::Standard => "Standard",
            RoomCategory::Budget => "Budget",
        };
        f.write_str(label)
    }
}

fn has_prefix_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Booking {
    #[validate(length(max = 63))]
    pub guest_name: String,
    #[validate(length(max = 31))]
    pub room_type: String,
    #[validate(range(min = 1))]
    pub nights: u32,
    #[validate(range(min = 0.0))]
    pub total_price: f64,
}

impl Booking {
    /// Prices the stay from the rate table.
    pub fn new(guest_name: impl Into<String>, room_type: impl Into<String>, nights: u32) -> Self {
        let room_type = room_type.into();
        let total_price = RoomCategory::from_room_type(&room_type).nightly_rate() * f64::from(nights);
        Self {
            guest_name: guest_name.into(),
            room_type,
            nights,
            total_price,
        }
    }

    pub fn category(&self) -> RoomCategory {
        RoomCategory::from_room_type(&self.room_type)
    }
}

impl Record for Booking {
    const KIND: &'static str = "booking";

    /// `name|roomType|nights|price`, price with two decimals.
    fn encode(&self) -> String {
        format!(
            "{name}{d}{room}{d}{nights}{d}{price:.2}",
            name = self.guest_name,
            room = self.room_type,
            nights = self.nights,
            price = self.total_price,
            d = DELIMITER,
        )
    }

    /// Name and room type must fit their capacities, nights must be an
    /// integer with nothing after it and price a number. Text after the
    /// price is ignored.
    fn decode(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let mut fields = line.splitn(4, DELIMITER);
        let guest_name = fields.next()?;
        let room_type = fields.next()?;
        let nights = fields.next()?;
        let price = fields.next()?;
        if guest_name.chars().count() > NAME_CAPACITY
            || room_type.chars().count() > ROOM_TYPE_CAPACITY
        {
            return None;
        }
        let nights: u32 = nights.trim_start().parse().ok()?;
        let total_price = scan_float_prefix(price)?;
        Some(Self {
            guest_name: guest_name.to_string(),
            room_type: room_type.to_string(),
            nights,
            total_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_table_uses_case_insensitive_prefix() {
        assert_eq!(RoomCategory::from_room_type("Deluxe"), RoomCategory::Deluxe);
        assert_eq!(RoomCategory::from_room_type("DELUXE suite"), RoomCategory::Deluxe);
        assert_eq!(RoomCategory::from_room_type("standard"), RoomCategory::Standard);
        assert_eq!(RoomCategory::from_room_type("Standardized"), RoomCategory::Standard);
        assert_eq!(RoomCategory::from_room_type("Budget"), RoomCategory::Budget);
        assert_eq!(RoomCategory::from_room_type("Delux"), RoomCategory::Budget);
        assert_eq!(RoomCategory::from_room_type(""), RoomCategory::Budget);
        assert_eq!(RoomCategory::from_room_type("Ünicode"), RoomCategory::Budget);
    }

    #[test]
    fn price_is_rate_times_nights() {
        assert_eq!(Booking::new("A", "deluxe", 3).total_price, 6000.0);
        assert_eq!(Booking::new("A", "Standard", 2).total_price, 3000.0);
        assert_eq!(Booking::new("A", "Suite", 4).total_price, 4000.0);
    }

    #[test]
    fn encodes_pipe_separated_line() {
        let booking = Booking::new("Asha", "Deluxe", 2);
        assert_eq!(booking.encode(), "Asha|Deluxe|2|4000.00");
    }

    #[test]
    fn decodes_what_it_encodes() {
        let booking = Booking::new("Alice", "Deluxe", 3);
        assert_eq!(Booking::decode(&format!("{}\n", booking.encode())), Some(booking));
    }

    #[test]
    fn decode_rejects_malformed_lines() {
        assert_eq!(Booking::decode("Bob|Deluxe|2"), None);
        assert_eq!(Booking::decode("Bob|Deluxe|two|4000.00"), None);
        assert_eq!(Booking::decode("Bob|Deluxe|2|free"), None);
        assert_eq!(Booking::decode("A|Deluxe|2x|4000.00"), None);
        assert_eq!(Booking::decode("A|Deluxe|2 |4000.00"), None);
        assert_eq!(Booking::decode("A|Deluxe|-2|4000.00"), None);
        assert_eq!(Booking::decode(""), None);
        let long_name = "x".repeat(64);
        assert_eq!(Booking::decode(&format!("{long_name}|Deluxe|1|2000.00")), None);
    }

    #[test]
    fn decode_allows_space_before_nights() {
        assert_eq!(Booking::decode("A|Deluxe| 2|4000.00").map(|b| b.nights), Some(2));
    }

    #[test]
    fn decode_keeps_empty_fields() {
        let booking = Booking::decode("|Suite|1|1000.00").unwrap();
        assert_eq!(booking.guest_name, "");
        assert_eq!(booking.room_type, "Suite");
    }

    #[test]
    fn validation_enforces_bounds() {
        assert!(Booking::new("Asha", "Deluxe", 1).validate().is_ok());
        assert!(Booking::new("Asha", "Deluxe", 0).validate().is_err());
        assert!(Booking::new("x".repeat(64), "Deluxe", 1).validate().is_err());
    }
}
