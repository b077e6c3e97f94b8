//! French VAT arithmetic: HT is the tax-excluded amount, TVA the tax itself,
//! TTC the tax-included amount.

use comfy_table::Color;

use crate::{engine::error::CalcError, fmt::NumberFormat, numeric::NumericInput};

/// Which of the three amounts is the known one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum VatMode {
    /// The tax-excluded amount is known; derive the tax and the tax-included amount.
    HtToTtc,

    /// The tax-included amount is known; derive the tax-excluded amount and the tax.
    TtcToHt,

    /// The tax amount itself is known; derive both other amounts.
    TvaOnly,
}

impl VatMode {
    /// Whether the given line of the breakdown is the user-supplied one.
    pub const fn knows(self, line: VatLine) -> bool {
        matches!(
            (self, line),
            (Self::HtToTtc, VatLine::Ht) | (Self::TtcToHt, VatLine::Ttc) | (Self::TvaOnly, VatLine::Tva)
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VatLine {
    Ht,
    Tva,
    Ttc,
}

impl VatLine {
    pub const ALL: [Self; 3] = [Self::Ht, Self::Tva, Self::Ttc];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ht => "HT",
            Self::Tva => "TVA",
            Self::Ttc => "TTC",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Ht => Color::Cyan,
            Self::Tva => Color::DarkYellow,
            Self::Ttc => Color::Green,
        }
    }
}

/// The full HT / TVA / TTC triple, plus the rendered forms of the derived amount.
#[derive(Clone, Debug)]
pub struct VatBreakdown {
    pub ht: f64,
    pub tva: f64,
    pub ttc: f64,

    /// The primary derived amount, formatted: TTC for [`VatMode::HtToTtc`],
    /// HT otherwise.
    pub display: String,

    /// French one-liner restating the breakdown.
    pub phrase: String,
}

impl VatBreakdown {
    pub const fn line(&self, line: VatLine) -> f64 {
        match line {
            VatLine::Ht => self.ht,
            VatLine::Tva => self.tva,
            VatLine::Ttc => self.ttc,
        }
    }
}

/// Derive the missing VAT amounts from the known one and the rate.
pub fn vat(
    amount: &NumericInput,
    rate: &NumericInput,
    mode: VatMode,
    format: &NumberFormat,
) -> Result<VatBreakdown, CalcError> {
    let amount = amount.parse()?;
    let rate = rate.parse()?;
    let factor = rate / 100.0;

    let (ht, tva, ttc) = match mode {
        VatMode::HtToTtc => {
            let tva = amount * factor;
            (amount, tva, amount + tva)
        }
        VatMode::TtcToHt => {
            // A rate of -100% would zero out the divisor.
            if 1.0 + factor == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            let ht = amount / (1.0 + factor);
            (ht, amount - ht, amount)
        }
        VatMode::TvaOnly => {
            if factor == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            let ht = amount / factor;
            (ht, amount, ht + amount)
        }
    };

    let display = match mode {
        VatMode::HtToTtc => format.format(ttc),
        VatMode::TtcToHt | VatMode::TvaOnly => format.format(ht),
    };
    let phrase = format!(
        "{} HT + {}% de TVA ({}) = {} TTC",
        format.format(ht),
        format.format(rate),
        format.format(tva),
        format.format(ttc),
    );

    Ok(VatBreakdown { ht, tva, ttc, display, phrase })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn format() -> NumberFormat {
        NumberFormat::default()
    }

    #[test]
    fn ht_to_ttc() -> Result<(), CalcError> {
        let breakdown = vat(&"100".into(), &"20".into(), VatMode::HtToTtc, &format())?;
        assert_abs_diff_eq!(breakdown.ht, 100.0);
        assert_abs_diff_eq!(breakdown.tva, 20.0);
        assert_abs_diff_eq!(breakdown.ttc, 120.0);
        assert_eq!(breakdown.display, "120");
        assert_eq!(breakdown.phrase, "100 HT + 20% de TVA (20) = 120 TTC");
        Ok(())
    }

    /// The two conversion modes agree on matching inputs.
    #[test]
    fn ttc_to_ht_round_trips() -> Result<(), CalcError> {
        let breakdown = vat(&"120".into(), &"20".into(), VatMode::TtcToHt, &format())?;
        assert_abs_diff_eq!(breakdown.ht, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(breakdown.tva, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(breakdown.ttc, 120.0);
        assert_eq!(breakdown.display, "100");
        Ok(())
    }

    #[test]
    fn tva_only() -> Result<(), CalcError> {
        let breakdown = vat(&"20".into(), &"20".into(), VatMode::TvaOnly, &format())?;
        assert_abs_diff_eq!(breakdown.ht, 100.0);
        assert_abs_diff_eq!(breakdown.ttc, 120.0);
        Ok(())
    }

    #[test]
    fn tva_only_guards_zero_rate() {
        let result = vat(&"20".into(), &"0".into(), VatMode::TvaOnly, &format());
        assert_eq!(result.map(|breakdown| breakdown.tva), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn ttc_to_ht_guards_minus_hundred_rate() {
        let result = vat(&"120".into(), &"-100".into(), VatMode::TtcToHt, &format());
        assert_eq!(result.map(|breakdown| breakdown.ht), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn comma_rate_is_accepted() -> Result<(), CalcError> {
        let breakdown = vat(&"100".into(), &"5,5".into(), VatMode::HtToTtc, &format())?;
        assert_abs_diff_eq!(breakdown.ttc, 105.5);
        Ok(())
    }

    #[test]
    fn mode_knows_its_own_line() {
        assert!(VatMode::HtToTtc.knows(VatLine::Ht));
        assert!(!VatMode::HtToTtc.knows(VatLine::Ttc));
        assert!(VatMode::TtcToHt.knows(VatLine::Ttc));
        assert!(VatMode::TvaOnly.knows(VatLine::Tva));
    }
}
