use std::str::FromStr;

use crate::engine::error::CalcError;

/// Raw user input: a number written with either `.` or `,` as the decimal separator.
///
/// Capturing never fails; validation happens in [`NumericInput::parse`] so that a bad
/// input surfaces as a calculation error rather than an argument error.
#[derive(Clone, Debug, derive_more::Display, derive_more::From)]
pub struct NumericInput(String);

impl From<&str> for NumericInput {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl FromStr for NumericInput {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self(raw.to_owned()))
    }
}

impl NumericInput {
    /// Normalize the decimal separator and parse into a finite number.
    ///
    /// Every comma is replaced with a period before parsing, so `103,5` and `103.5`
    /// are the same number. Anything that does not parse into a finite `f64` is
    /// rejected: `NaN` and infinities never leave this function.
    pub fn parse(&self) -> Result<f64, CalcError> {
        let normalized = self.0.trim().replace(',', ".");
        match f64::from_str(&normalized) {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CalcError::InvalidNumber),
        }
    }
}
