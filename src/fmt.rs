use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Number of fraction digits shown in formatted output, between 0 and 3.
///
/// Used at formatting time only, never during the underlying arithmetic.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Precision(u8);

impl Precision {
    pub const MAX_DIGITS: u8 = 3;

    pub const fn digits(self) -> usize {
        self.0 as usize
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for Precision {
    type Error = Error;

    fn try_from(digits: u8) -> Result<Self> {
        ensure!(digits <= Self::MAX_DIGITS, "precision must be between 0 and {}", Self::MAX_DIGITS);
        Ok(Self(digits))
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        Self::try_from(raw.trim().parse::<u8>()?)
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// French number formatting: decimal comma, narrow no-break space between thousand
/// groups, at most [`Precision`] fraction digits, and no trailing fractional zeros.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberFormat {
    precision: Precision,
}

impl NumberFormat {
    /// What `fr-FR` locale data actually uses between thousand groups.
    pub const THOUSANDS_SEPARATOR: &'static str = "\u{202F}";

    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn format(&self, value: f64) -> String {
        let digits = self.precision.digits();
        // `Display` rounds ties to even, but `fr-FR` number formatting rounds halves
        // away from zero. Settle the tie before handing over to `Display`.
        let scale = 10_f64.powi(i32::from(u8::from(self.precision)));
        let scaled = value * scale;
        let value = if scaled.is_finite() { scaled.round() / scale } else { value };
        let rounded = format!("{value:.digits$}");
        let (sign, unsigned) = rounded.strip_prefix('-').map_or(("", rounded.as_str()), |rest| ("-", rest));
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let fraction = fraction.trim_end_matches('0');

        // Group the integer digits by three from the right.
        let chunks = integer.chars().rev().chunks(3);
        let grouped: String = chunks
            .into_iter()
            .map(|chunk| chunk.collect::<String>())
            .join(Self::THOUSANDS_SEPARATOR)
            .chars()
            .rev()
            .collect();

        let mut formatted = String::from(sign);
        formatted.push_str(&grouped);
        if !fraction.is_empty() {
            formatted.push(',');
            formatted.push_str(fraction);
        }
        formatted
    }
}

/// Machine-readable form of a formatted string: whitespace stripped, decimal period.
///
/// This is the same normalization the result goes through on its way to a clipboard
/// or a shell pipeline.
pub fn plain(display: &str) -> String {
    display
        .chars()
        .filter(|char| !char.is_whitespace())
        .map(|char| if char == ',' { '.' } else { char })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(digits: u8, value: f64) -> Result<String> {
        Ok(NumberFormat::new(Precision::try_from(digits)?).format(value))
    }

    #[test]
    fn decimal_comma() -> Result {
        assert_eq!(format(2, 20.6)?, "20,6");
        Ok(())
    }

    #[test]
    fn trailing_zeros_are_suppressed() -> Result {
        assert_eq!(format(3, 110.0)?, "110");
        assert_eq!(format(3, 110.100)?, "110,1");
        Ok(())
    }

    #[test]
    fn rounds_to_precision() -> Result {
        assert_eq!(format(2, -100.0 / 3.0)?, "-33,33");
        assert_eq!(format(0, -100.0 / 3.0)?, "-33");
        Ok(())
    }

    /// Halves go away from zero, the `fr-FR` way, not to the even neighbour.
    #[test]
    fn rounds_halves_away_from_zero() -> Result {
        assert_eq!(format(1, 0.25)?, "0,3");
        assert_eq!(format(1, -0.25)?, "-0,3");
        assert_eq!(format(0, 2.5)?, "3");
        assert_eq!(format(0, 3.5)?, "4");
        Ok(())
    }

    #[test]
    fn thousands_grouping() -> Result {
        assert_eq!(format(2, 1_234_567.891)?, "1\u{202f}234\u{202f}567,89");
        assert_eq!(format(0, 1_000.0)?, "1\u{202f}000");
        assert_eq!(format(0, 999.0)?, "999");
        Ok(())
    }

    #[test]
    fn negative_grouping_keeps_the_sign_outside() -> Result {
        assert_eq!(format(0, -1_234_567.0)?, "-1\u{202f}234\u{202f}567");
        Ok(())
    }

    #[test]
    fn precision_is_validated() {
        assert!(Precision::try_from(4).is_err());
        assert!("4".parse::<Precision>().is_err());
        assert_eq!("3".parse::<Precision>().ok(), Precision::try_from(3).ok());
    }

    #[test]
    fn plain_strips_spacing_and_uses_period() {
        assert_eq!(plain("1\u{202f}234,57"), "1234.57");
        assert_eq!(plain("+50%"), "+50%");
    }
}
