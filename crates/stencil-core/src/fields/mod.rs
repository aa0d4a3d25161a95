//! Field formatters for the individual pieces of a date-time.
//!
//! Every function here is a plain `fn(&jiff::civil::DateTime) -> String`,
//! callable and testable on its own and usable as a template placeholder via
//! [`crate::field`]. None of them validate their input: range invariants
//! belong to [`jiff::civil::DateTime`] itself.
//!
//! # Module Organization
//!
//! - [`date`]: calendar fields (year, month, day, name tables)
//! - [`time`]: clock fields (hour, minute, the seconds family, meridiem)

pub mod date;
pub mod time;
