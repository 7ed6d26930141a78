use std::fmt;

/// Label used when a sequence is formatted without one.
pub const DEFAULT_LABEL: &str = "Vector";

/// Number of decimal places used when the formatter does not specify a precision.
pub const DEFAULT_PRECISION: usize = 2;

/// Renders a labelled sequence as `"<label>: [v0, v1, ...]"`.
///
/// Each value is written with the formatter's precision, or
/// [`DEFAULT_PRECISION`] decimal places if none is given.
///
/// # Examples
///
/// ```
/// use mathkit_stats::format::display_sequence;
///
/// let values = [1.0, 2.5];
/// assert_eq!(display_sequence(&values, "Y").to_string(), "Y: [1.00, 2.50]");
/// assert_eq!(format!("{:.1}", display_sequence(&values, "Y")), "Y: [1.0, 2.5]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SequenceDisplay<'a> {
    values: &'a [f64],
    label: &'a str,
}

impl fmt::Display for SequenceDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{}: [", self.label)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value:.precision$}")?;
        }
        f.write_str("]")
    }
}

#[must_use]
pub fn display_sequence<'a>(values: &'a [f64], label: &'a str) -> SequenceDisplay<'a> {
    SequenceDisplay { values, label }
}

/// Formats `values` with two decimal places under `label`.
///
/// `None` uses [`DEFAULT_LABEL`].
///
/// # Examples
///
/// ```
/// # use mathkit_stats::format::format_sequence;
/// assert_eq!(format_sequence(&[], Some("X")), "X: []");
/// assert_eq!(format_sequence(&[1.0, 2.5], Some("Y")), "Y: [1.00, 2.50]");
/// assert_eq!(format_sequence(&[3.0], None), "Vector: [3.00]");
/// ```
#[must_use]
pub fn format_sequence(values: &[f64], label: Option<&str>) -> String {
    display_sequence(values, label.unwrap_or(DEFAULT_LABEL)).to_string()
}
