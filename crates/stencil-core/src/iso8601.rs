//! The ISO-8601 profile: options and the ready-made formatter they select.
//!
//! [`iso8601`] turns an [`Iso8601Options`] record into a [`Template`] by
//! picking separators and a seconds field, then handing the interleaving to
//! [`compose`]. The three options are independent: every combination of
//! punctuation, rounding, and delimiter is valid and produces a distinct,
//! well-defined shape.
//!
//! The option enums double as the configuration vocabulary. They carry serde
//! derives so an options record can come straight out of a JSON config, and
//! `FromStr` so interface layers (the CLI flag parser, for one) can reuse the
//! same spellings without their own translation tables.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil;
//! use stencil_core::{iso8601, Format, Iso8601Options};
//!
//! let value = civil::datetime(2024, 1, 26, 11, 57, 23, 723_615_000);
//!
//! let extended = iso8601(&Iso8601Options::default());
//! assert_eq!(extended.format(&value), "2024-01-26T11:57:23.723615");
//!
//! let basic = iso8601(&Iso8601Options {
//!     format: Format::Basic,
//!     ..Default::default()
//! });
//! assert_eq!(basic.format(&value), "20240126T115723.723615");
//! ```

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StencilError;
use crate::fields::{date, time};
use crate::template::{compose, field, Template};

/// Punctuation profile for the ISO-8601 output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Format {
    /// No separators within the date or time portion
    Basic,

    /// `-` between date components and `:` between time components
    #[default]
    Extended,
}

impl Format {
    /// Canonical string form, as accepted by `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Basic => "basic",
            Format::Extended => "extended",
        }
    }

    fn date_separator(self) -> &'static str {
        match self {
            Format::Basic => "",
            Format::Extended => "-",
        }
    }

    fn time_separator(self) -> &'static str {
        match self {
            Format::Basic => "",
            Format::Extended => ":",
        }
    }
}

impl FromStr for Format {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Format::Basic),
            "extended" => Ok(Format::Extended),
            _ => Err(StencilError::invalid_option(
                "format",
                s,
                "'basic' or 'extended'",
            )),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rounding granularity for the seconds field.
///
/// Rounding is always toward zero: `seconds` and `ms` drop precision, they
/// never carry into the next second.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Round {
    /// Full available subsecond precision, unrounded
    #[default]
    None,

    /// Whole seconds, no fractional part
    Seconds,

    /// Millisecond precision, exactly three fractional digits
    Ms,
}

impl Round {
    /// Canonical string form, as accepted by `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Round::None => "none",
            Round::Seconds => "seconds",
            Round::Ms => "ms",
        }
    }
}

impl FromStr for Round {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Round::None),
            "seconds" => Ok(Round::Seconds),
            "ms" => Ok(Round::Ms),
            _ => Err(StencilError::invalid_option(
                "round",
                s,
                "'none', 'seconds', or 'ms'",
            )),
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Character separating the date portion from the time portion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum TimeDelimiter {
    /// The standard `T` delimiter
    #[default]
    #[serde(rename = "T")]
    T,

    /// A single space, the common human-facing variant
    #[serde(rename = " ")]
    Space,
}

impl TimeDelimiter {
    /// The literal text spliced between the date and time portions.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeDelimiter::T => "T",
            TimeDelimiter::Space => " ",
        }
    }
}

impl FromStr for TimeDelimiter {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "space" is accepted as a spelling of " " for flag ergonomics.
        match s {
            "T" | "t" => Ok(TimeDelimiter::T),
            " " | "space" => Ok(TimeDelimiter::Space),
            _ => Err(StencilError::invalid_option(
                "time_delimiter",
                s,
                "'T' or ' '",
            )),
        }
    }
}

impl fmt::Display for TimeDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for the ISO-8601 formatter.
///
/// The three options are independent and each defaults on its own, so a
/// config source only needs to mention the fields it changes. The default
/// record selects extended punctuation, full precision, and the `T`
/// delimiter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Iso8601Options {
    /// Punctuation profile (basic or extended)
    #[serde(default)]
    pub format: Format,

    /// Rounding granularity for the seconds field
    #[serde(default)]
    pub round: Round,

    /// Character between the date and time portions
    #[serde(default)]
    pub time_delimiter: TimeDelimiter,
}

/// Builds the ISO-8601 formatter selected by `options`.
///
/// The resulting template is `year month day` then `hour minute seconds`,
/// with the date separator, time separator, and delimiter chosen by the
/// options. Construction never fails; the template is immutable and
/// reusable for any number of values.
///
/// # Examples
///
/// ```rust
/// use jiff::civil;
/// use stencil_core::{iso8601, Iso8601Options, Round, TimeDelimiter};
///
/// let value = civil::datetime(2024, 1, 26, 11, 57, 23, 723_615_000);
///
/// let log_style = iso8601(&Iso8601Options {
///     round: Round::Ms,
///     time_delimiter: TimeDelimiter::Space,
///     ..Default::default()
/// });
/// assert_eq!(log_style.format(&value), "2024-01-26 11:57:23.723");
/// ```
pub fn iso8601(options: &Iso8601Options) -> Template {
    let date_sep = options.format.date_separator();
    let time_sep = options.format.time_separator();
    let delimiter = options.time_delimiter.as_str();

    let seconds = match options.round {
        Round::None => field(time::second_precise),
        Round::Seconds => field(time::second),
        Round::Ms => field(time::second_ms),
    };

    compose(
        ["", date_sep, date_sep, delimiter, time_sep, time_sep, ""],
        vec![
            field(date::year),
            field(date::month),
            field(date::day),
            field(time::hour),
            field(time::minute),
            seconds,
        ],
    )
}
