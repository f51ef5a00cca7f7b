//! Race-time notation to seconds.

use crate::error::TimeError;

/// Tokens longer than this are read as `minutes:seconds`.
const PLAIN_SECONDS_MAX_LEN: usize = 5;

/// Convert a race-time token into total seconds.
///
/// The notation is chosen by length alone: more than five characters means
/// `minutes:seconds`, anything shorter is plain seconds. A five-character
/// colon token such as `"1:2.3"` therefore fails in the plain branch.
///
/// No rounding is applied; see [`round_hundredths`].
///
/// # Example
/// ```
/// use swimnorm::parse_seconds;
///
/// assert_eq!(parse_seconds("1:41.39").unwrap(), 101.39);
/// assert_eq!(parse_seconds("41.39").unwrap(), 41.39);
/// ```
pub fn parse_seconds(text: &str) -> Result<f64, TimeError> {
    if text.chars().count() > PLAIN_SECONDS_MAX_LEN {
        let parts: Vec<&str> = text.split(':').collect();
        let [minutes, seconds] = parts.as_slice() else {
            return Err(TimeError::new(
                text,
                format!("expected minutes:seconds, found {} colon(s)", parts.len() - 1),
            ));
        };
        Ok(decimal(text, minutes)? * 60.0 + decimal(text, seconds)?)
    } else {
        decimal(text, text)
    }
}

/// Round to two decimal places, ties to even.
pub fn round_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round_ties_even() / 100.0
}

fn decimal(token: &str, part: &str) -> Result<f64, TimeError> {
    let part = part.trim();
    if part.is_empty() {
        return Err(TimeError::new(token, "empty number"));
    }
    part.parse::<f64>()
        .map_err(|_| TimeError::new(token, format!("'{}' is not a decimal number", part)))
}
