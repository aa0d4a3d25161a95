//! Core library for the Stencil date-time formatting tool.
//!
//! This crate renders [`jiff::civil::DateTime`] values as text. It is a
//! formatting layer only: it does not parse dates, convert timezones, or do
//! calendar arithmetic. Those belong to jiff; this crate takes the value as
//! given and turns it into a string.
//!
//! # Template Architecture
//!
//! Output formats are built from two small pieces:
//!
//! - **Field formatters** ([`fields`]): plain functions from a date-time to
//!   one formatted field (a padded year, a weekday name, a seconds value at
//!   some precision)
//! - **Templates** ([`template`]): an ordered interleaving of literal text
//!   and field formatters, produced by [`compose`] and itself usable as a
//!   field formatter, so formats nest
//!
//! The one ready-made profile is [`iso8601`], which maps an
//! [`Iso8601Options`] record (punctuation, rounding, delimiter) onto a
//! template built from the same parts.
//!
//! Everything here is pure and immutable after construction: build a
//! template once, share it freely, format as many values as you like.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil;
//! use stencil_core::{compose, field, fields::date, iso8601, Iso8601Options};
//!
//! let value = civil::datetime(2024, 1, 26, 11, 57, 23, 723_615_000);
//!
//! // The ready-made ISO-8601 profile, all defaults
//! let formatter = iso8601(&Iso8601Options::default());
//! assert_eq!(formatter.format(&value), "2024-01-26T11:57:23.723615");
//!
//! // A custom template from the same parts
//! let formatter = compose(
//!     ["", " ", ""],
//!     vec![field(date::month_abbr), field(date::day)],
//! );
//! assert_eq!(formatter.format(&value), "Jan 26");
//! ```

pub mod error;
pub mod fields;
pub mod iso8601;
pub mod template;

// Re-export commonly used types
pub use error::{Result, StencilError};
pub use iso8601::{iso8601, Format, Iso8601Options, Round, TimeDelimiter};
pub use template::{compose, field, FieldFormatter, Formatted, Template};
