pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod range;
pub mod table;

pub use formatting::{decimal_hours, hours_readable};
pub use range::DateRange;
