//! Feet-and-inches length measurements.
//!
//! Order documents write lineal footage as `F' I"` or `F' I-N/D"`
//! (feet, apostrophe, inches, optional hyphen and vulgar fraction, inch
//! mark). Lengths are normalized to a single inches scalar for summing and
//! rendered back as `F' R"` where `R` is the decimal inch remainder.
//!
//! Rendering does not re-fractionalize: `5' 3-1/2"` reads as 63.5 inches
//! and renders as `5' 3.5"`. Parsing accepts plain decimal inches so a
//! rendered value can be read again, but the text itself does not survive
//! the trip.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

const FIELD: &str = "lineal footage";

/// A length held as a single inches value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct LinearMeasurement {
    inches: f64,
}

impl LinearMeasurement {
    /// The zero length.
    pub const ZERO: LinearMeasurement = LinearMeasurement { inches: 0.0 };

    /// Create a measurement from a total number of inches.
    pub fn from_inches(inches: f64) -> Self {
        Self { inches }
    }

    /// Parse feet-and-inches text. Empty text is zero.
    pub fn parse(text: &str) -> Result<Self> {
        to_inches(text).map(Self::from_inches)
    }

    /// Total length in inches.
    pub fn inches(&self) -> f64 {
        self.inches
    }

    /// Whole feet (`floor(inches / 12)`).
    pub fn feet(&self) -> i64 {
        (self.inches / INCHES_PER_FOOT).floor() as i64
    }

    /// Inches left over after whole feet.
    pub fn remainder_inches(&self) -> f64 {
        self.inches.rem_euclid(INCHES_PER_FOOT)
    }

    /// True when both the feet and the remainder are zero.
    pub fn is_zero(&self) -> bool {
        self.feet() == 0 && self.remainder_inches() == 0.0
    }

    /// Display text, or `None` for a zero length.
    pub fn to_display(&self) -> Option<String> {
        if self.is_zero() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for LinearMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps a fractional digit on whole numbers ("6.0")
        write!(f, "{}' {:?}\"", self.feet(), self.remainder_inches())
    }
}

impl FromStr for LinearMeasurement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Add for LinearMeasurement {
    type Output = LinearMeasurement;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_inches(self.inches + rhs.inches)
    }
}

impl Sum for LinearMeasurement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a LinearMeasurement> for LinearMeasurement {
    fn sum<I: Iterator<Item = &'a LinearMeasurement>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Convert feet-and-inches text to a total number of inches.
///
/// Empty text is zero. The text is split on the first apostrophe: the
/// left side is integer feet, the right side (inch marks removed) is whole
/// inches optionally followed by a hyphen and an `N/D` fraction.
///
/// # Example
/// ```
/// use lumbertab::model::to_inches;
///
/// assert_eq!(to_inches("5' 3-1/2\"").unwrap(), 63.5);
/// assert_eq!(to_inches("").unwrap(), 0.0);
/// ```
pub fn to_inches(text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    let (feet_part, rest) = text
        .split_once('\'')
        .ok_or_else(|| Error::coercion(FIELD, text, "missing feet mark (')"))?;

    let feet: i64 = feet_part
        .trim()
        .parse()
        .map_err(|e| Error::coercion(FIELD, text, format!("bad feet value: {}", e)))?;

    let inches_part = rest.replace('"', "");
    let inches_part = inches_part.trim();

    let inches = if let Some((whole, fraction)) = inches_part.split_once('-') {
        let whole: i64 = whole
            .trim()
            .parse()
            .map_err(|e| Error::coercion(FIELD, text, format!("bad inches value: {}", e)))?;
        whole as f64 + parse_fraction(text, fraction.trim())?
    } else if inches_part.is_empty() {
        0.0
    } else {
        parse_plain_inches(text, inches_part)?
    };

    Ok(feet as f64 * INCHES_PER_FOOT + inches)
}

/// Render a total number of inches as `F' R"`.
///
/// # Example
/// ```
/// use lumbertab::model::to_feet_and_inches;
///
/// assert_eq!(to_feet_and_inches(63.5), "5' 3.5\"");
/// assert_eq!(to_feet_and_inches(36.0), "3' 0.0\"");
/// ```
pub fn to_feet_and_inches(total_inches: f64) -> String {
    LinearMeasurement::from_inches(total_inches).to_string()
}

fn parse_plain_inches(text: &str, inches: &str) -> Result<f64> {
    if let Ok(whole) = inches.parse::<i64>() {
        return Ok(whole as f64);
    }
    inches
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::coercion(FIELD, text, format!("bad inches value: {:?}", inches)))
}

fn parse_fraction(text: &str, fraction: &str) -> Result<f64> {
    let (num, den) = fraction
        .split_once('/')
        .ok_or_else(|| Error::coercion(FIELD, text, format!("bad fraction: {:?}", fraction)))?;

    let num: f64 = num
        .trim()
        .parse()
        .map_err(|_| Error::coercion(FIELD, text, format!("bad fraction: {:?}", fraction)))?;
    let den: f64 = den
        .trim()
        .parse()
        .map_err(|_| Error::coercion(FIELD, text, format!("bad fraction: {:?}", fraction)))?;

    if den == 0.0 {
        return Err(Error::coercion(FIELD, text, "fraction has a zero denominator"));
    }

    Ok(num / den)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_inches_with_fraction() {
        assert_eq!(to_inches("5' 3-1/2\"").unwrap(), 63.5);
        assert_eq!(to_inches("0' 0-3/4\"").unwrap(), 0.75);
    }

    #[test]
    fn test_to_inches_whole_inches() {
        assert_eq!(to_inches("15' 6\"").unwrap(), 186.0);
        assert_eq!(to_inches("  8' 0\" ").unwrap(), 96.0);
    }

    #[test]
    fn test_to_inches_feet_only() {
        assert_eq!(to_inches("12'").unwrap(), 144.0);
    }

    #[test]
    fn test_to_inches_empty_is_zero() {
        assert_eq!(to_inches("").unwrap(), 0.0);
        assert_eq!(to_inches("   ").unwrap(), 0.0);
    }

    #[test]
    fn test_to_inches_rejects_malformed() {
        assert!(matches!(to_inches("16 ft"), Err(Error::Coercion { .. })));
        assert!(matches!(to_inches("x' 2\""), Err(Error::Coercion { .. })));
        assert!(matches!(to_inches("1' 2-1/0\""), Err(Error::Coercion { .. })));
        assert!(matches!(to_inches("1' 2-half\""), Err(Error::Coercion { .. })));
    }

    #[test]
    fn test_to_feet_and_inches() {
        assert_eq!(to_feet_and_inches(63.5), "5' 3.5\"");
        assert_eq!(to_feet_and_inches(186.0), "15' 6.0\"");
        assert_eq!(to_feet_and_inches(0.75), "0' 0.75\"");
    }

    #[test]
    fn test_rendered_value_reads_back() {
        // Decimal remainders are accepted on input, fractions are not restored.
        let rendered = to_feet_and_inches(63.5);
        assert_eq!(to_inches(&rendered).unwrap(), 63.5);
        assert_ne!(rendered, "5' 3-1/2\"");
    }

    #[test]
    fn test_zero_has_no_display() {
        assert!(LinearMeasurement::ZERO.is_zero());
        assert_eq!(LinearMeasurement::ZERO.to_display(), None);
        assert_eq!(
            LinearMeasurement::from_inches(12.0).to_display(),
            Some("1' 0.0\"".to_string())
        );
    }

    #[test]
    fn test_sum() {
        let total: LinearMeasurement = ["5' 3-1/2\"", "1' 8-1/2\""]
            .iter()
            .map(|s| s.parse::<LinearMeasurement>().unwrap())
            .sum();
        assert_eq!(total.inches(), 84.0);
        assert_eq!(total.feet(), 7);
        assert_eq!(total.to_string(), "7' 0.0\"");
    }
}
