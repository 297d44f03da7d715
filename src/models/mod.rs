pub mod booking;
pub mod feedback;

/// Field separator of both stores. Never escaped inside field values.
pub const DELIMITER: char = '|';
