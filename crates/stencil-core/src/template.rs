//! Template composition for date-time formatting.
//!
//! A [`Template`] is an ordered interleaving of literal text and field
//! formatter placeholders. Building one is cheap and happens once; the
//! resulting value is immutable and can format any number of date-times
//! afterwards, from any number of threads.
//!
//! # Architecture: Literal/Field Interleaving
//!
//! ```text
//! literals:   "["        "-"        "]"
//! fields:          year       month
//! output:     "[" + 2024 + "-" + 01 + "]"
//! ```
//!
//! A template with `n` placeholders carries `n + 1` literals, so the output
//! always starts and ends with literal text (possibly empty). A template is
//! itself usable as a field formatter via [`From<Template>`], which is what
//! makes nesting work: a "time" template can sit inside a "date-time"
//! template as an ordinary placeholder.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil;
//! use stencil_core::{compose, field, fields::date};
//!
//! let value = civil::datetime(2024, 1, 26, 11, 57, 23, 0);
//!
//! let formatter = compose(
//!     ["", " ", ", ", ""],
//!     vec![
//!         field(date::month_abbr),
//!         field(date::day),
//!         field(date::year),
//!     ],
//! );
//! assert_eq!(formatter.format(&value), "Jan 26, 2024");
//! ```

use std::fmt;

use jiff::civil::DateTime;

/// A single formatted field: any function from a date-time to its text.
///
/// This is the contract every placeholder in a [`Template`] satisfies, from
/// the plain functions in [`crate::fields`] to whole nested templates. A
/// field formatter must be total for every representable
/// [`jiff::civil::DateTime`] and must not observe or mutate anything outside
/// its argument.
pub type FieldFormatter = Box<dyn Fn(&DateTime) -> String + Send + Sync>;

/// Boxes a function or closure into a [`FieldFormatter`] placeholder.
///
/// The functions in [`crate::fields`] are plain `fn` items so they can be
/// called and tested directly; this helper lifts one into the boxed form
/// that [`compose`] stores.
pub fn field<F>(f: F) -> FieldFormatter
where
    F: Fn(&DateTime) -> String + Send + Sync + 'static,
{
    Box::new(f)
}

/// An ordered interleaving of literal text and field formatter placeholders.
///
/// Construct with [`compose`]. Formatting walks the literals in order and
/// evaluates the placeholder between each consecutive pair; nothing is
/// cached, reordered, or trimmed. A placeholder with no corresponding
/// formatter contributes the empty string rather than an error, so a
/// template built with mismatched lengths degrades gracefully.
pub struct Template {
    literals: Vec<String>,
    fields: Vec<FieldFormatter>,
}

/// Composes literal fragments and field formatters into a [`Template`].
///
/// `literals` should be one longer than `fields`: the output is
/// `literals[0] + fields[0](value) + literals[1] + ... + literals[n]`.
/// Extra placeholders (too few formatters) format as empty strings; extra
/// formatters (too few literals) are never invoked.
///
/// # Examples
///
/// ```rust
/// use jiff::civil;
/// use stencil_core::{compose, field, fields::time};
///
/// let value = civil::datetime(2024, 1, 26, 11, 57, 23, 0);
/// let clock = compose(["", ":", ""], vec![field(time::hour), field(time::minute)]);
/// assert_eq!(clock.format(&value), "11:57");
/// ```
pub fn compose<I, S>(literals: I, fields: Vec<FieldFormatter>) -> Template
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Template {
        literals: literals.into_iter().map(Into::into).collect(),
        fields,
    }
}

impl Template {
    /// Renders the template for one date-time value.
    ///
    /// Every field formatter is re-evaluated on each call; the result for
    /// equal inputs is identical every time.
    pub fn format(&self, value: &DateTime) -> String {
        let mut out = String::new();
        let slots = self.literals.len().saturating_sub(1);
        for (i, literal) in self.literals.iter().enumerate() {
            out.push_str(literal);
            if i < slots {
                // A slot with no formatter renders as empty, not as an error.
                if let Some(formatter) = self.fields.get(i) {
                    out.push_str(&formatter(value));
                }
            }
        }
        out
    }

    /// Wraps the template and a value for use with `format!` and friends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil;
    /// use stencil_core::{iso8601, Iso8601Options};
    ///
    /// let value = civil::datetime(2024, 1, 26, 11, 57, 23, 0);
    /// let formatter = iso8601(&Iso8601Options::default());
    /// let line = format!("built at {}", formatter.display(&value));
    /// assert_eq!(line, "built at 2024-01-26T11:57:23");
    /// ```
    pub fn display<'a>(&'a self, value: &'a DateTime) -> Formatted<'a> {
        Formatted {
            template: self,
            value,
        }
    }
}

impl From<Template> for FieldFormatter {
    /// A template is itself a field formatter, so it can be nested as a
    /// placeholder inside another template.
    fn from(template: Template) -> FieldFormatter {
        Box::new(move |value| template.format(value))
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("literals", &self.literals)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// A wrapper around a [`Template`] and a date-time value that provides
/// formatting via the `Display` trait.
pub struct Formatted<'a> {
    template: &'a Template,
    value: &'a DateTime,
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template.format(self.value))
    }
}
