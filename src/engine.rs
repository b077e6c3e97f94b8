//! The six calculators: one parametrized engine instead of six copies of the same
//! parse → validate → compute → format pipeline.

pub mod error;
pub mod outcome;
pub mod vat;

use crate::{
    engine::{error::CalcError, outcome::Outcome},
    fmt::NumberFormat,
    numeric::NumericInput,
};

/// Which way [`apply_change`] moves the base value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ChangeDirection {
    /// Hausse.
    Increase,

    /// Baisse.
    Decrease,
}

/// What is `percent`% of `total`?
pub fn share_of_total(
    percent: &NumericInput,
    total: &NumericInput,
    format: &NumberFormat,
) -> Result<Outcome, CalcError> {
    let percent = percent.parse()?;
    let total = total.parse()?;
    let value = percent / 100.0 * total;
    Ok(Outcome {
        value,
        display: format.format(value),
        phrase: format!(
            "{}% de {} = {}",
            format.format(percent),
            format.format(total),
            format.format(value),
        ),
    })
}

/// Which share does `value` represent out of `total`?
pub fn ratio_as_percent(
    value: &NumericInput,
    total: &NumericInput,
    format: &NumberFormat,
) -> Result<Outcome, CalcError> {
    let value = value.parse()?;
    let total = total.parse()?;
    if total == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    let ratio = value / total * 100.0;
    Ok(Outcome {
        value: ratio,
        display: format!("{}%", format.format(ratio)),
        phrase: format!(
            "{} sur {} = {}%",
            format.format(value),
            format.format(total),
            format.format(ratio),
        ),
    })
}

/// Apply a percentage increase or decrease to a base value.
pub fn apply_change(
    base: &NumericInput,
    percent: &NumericInput,
    direction: ChangeDirection,
    format: &NumberFormat,
) -> Result<Outcome, CalcError> {
    let base = base.parse()?;
    let percent = percent.parse()?;
    let (sign, multiplier) = match direction {
        ChangeDirection::Increase => ('+', 1.0 + percent / 100.0),
        ChangeDirection::Decrease => ('-', 1.0 - percent / 100.0),
    };
    let value = base * multiplier;
    Ok(Outcome {
        value,
        display: format.format(value),
        phrase: format!(
            "{} {sign} {}% = {}",
            format.format(base),
            format.format(percent),
            format.format(value),
        ),
    })
}

/// Percentage change from `start` to `end`.
///
/// Strictly positive rates get an explicit `+` prefix; zero stays unsigned, and
/// negative rates already carry their `-` from the formatter.
pub fn variation_rate(
    start: &NumericInput,
    end: &NumericInput,
    format: &NumberFormat,
) -> Result<Outcome, CalcError> {
    let start = start.parse()?;
    let end = end.parse()?;
    if start == 0.0 {
        return Err(CalcError::ZeroStart);
    }
    let rate = (end - start) / start * 100.0;
    let prefix = if rate > 0.0 { "+" } else { "" };
    let display = format!("{prefix}{}%", format.format(rate));
    Ok(Outcome {
        value: rate,
        phrase: format!("de {} à {} : {display}", format.format(start), format.format(end)),
        display,
    })
}

/// Recover the total, knowing that `part` is `percent`% of it.
pub fn reverse_total(
    part: &NumericInput,
    percent: &NumericInput,
    format: &NumberFormat,
) -> Result<Outcome, CalcError> {
    let part = part.parse()?;
    let percent = percent.parse()?;
    if percent == 0.0 {
        return Err(CalcError::ZeroPercent);
    }
    let value = part / (percent / 100.0);
    Ok(Outcome {
        value,
        display: format.format(value),
        phrase: format!(
            "{} représente {}% de {}",
            format.format(part),
            format.format(percent),
            format.format(value),
        ),
    })
}
