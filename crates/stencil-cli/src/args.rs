use clap::Parser;
use stencil_core::{Format, Iso8601Options, Round, TimeDelimiter};

/// Main command-line interface for the stencil date-time formatter
///
/// Formats a civil date-time as ISO-8601 text. The punctuation, rounding,
/// and delimiter flags map directly onto the library's formatter options;
/// with no flags the output is the extended profile with full subsecond
/// precision and a `T` delimiter.
#[derive(Parser)]
#[command(version, about, name = "sten")]
pub struct Args {
    /// Civil date-time to format, e.g. 2024-01-26T11:57:23.723615.
    /// Defaults to the current system time
    pub datetime: Option<String>,

    /// Use basic punctuation (no separators within the date or time)
    #[arg(long)]
    pub basic: bool,

    /// Rounding granularity for the seconds field: none, seconds, or ms
    #[arg(long, default_value = "none")]
    pub round: Round,

    /// Separate the date and time with a space instead of 'T'
    #[arg(long)]
    pub space: bool,
}

impl Args {
    /// Maps the parsed flags onto the core options record.
    pub fn options(&self) -> Iso8601Options {
        Iso8601Options {
            format: if self.basic {
                Format::Basic
            } else {
                Format::Extended
            },
            round: self.round,
            time_delimiter: if self.space {
                TimeDelimiter::Space
            } else {
                TimeDelimiter::T
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_map_to_default_options() {
        let args = Args::parse_from(["sten"]);
        assert_eq!(args.options(), Iso8601Options::default());
    }

    #[test]
    fn test_flags_map_onto_options() {
        let args = Args::parse_from(["sten", "--basic", "--round", "ms", "--space"]);
        let options = args.options();
        assert_eq!(options.format, Format::Basic);
        assert_eq!(options.round, Round::Ms);
        assert_eq!(options.time_delimiter, TimeDelimiter::Space);
    }

    #[test]
    fn test_invalid_round_value_is_rejected() {
        assert!(Args::try_parse_from(["sten", "--round", "micros"]).is_err());
    }
}
