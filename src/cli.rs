use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    engine::{ChangeDirection, vat::VatMode},
    fmt::Precision,
    numeric::NumericInput,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Preferences file path.
    #[clap(
        long = "preferences",
        env = "POURCENT_PREFERENCES",
        default_value = ".pourcent.toml"
    )]
    pub preferences_path: PathBuf,

    /// One-shot display precision override (0 to 3 fraction digits); not persisted.
    #[clap(long, env = "POURCENT_PRECISION")]
    pub precision: Option<Precision>,

    /// Print the bare result only: no table, no grouping spaces, decimal period.
    #[clap(long)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Share of a total: what is X% of a value? For example: `share 20 100`.
    Share(ShareArgs),

    /// Ratio as a percentage: which share does X represent out of Y? For example: `ratio 50 200`.
    Ratio(RatioArgs),

    /// Apply a percentage increase or decrease. For example: `change 100 10 --direction decrease`.
    Change(ChangeArgs),

    /// Variation rate between two values. For example: `variation 100 150`.
    Variation(VariationArgs),

    /// Recover the total from a part and its percentage. For example: `reverse 20,6 20`.
    Reverse(ReverseArgs),

    /// VAT breakdown: HT, TVA, and TTC. For example: `vat 100 20 --mode ht-to-ttc`.
    Vat(VatArgs),

    /// Show the persisted display precision, or set it.
    Precision(PrecisionArgs),
}

#[derive(Parser)]
pub struct ShareArgs {
    /// Percentage to take.
    pub percent: NumericInput,

    /// Total to take it from.
    pub total: NumericInput,
}

#[derive(Parser)]
pub struct RatioArgs {
    /// The part.
    pub value: NumericInput,

    /// The whole. Must not be zero.
    pub total: NumericInput,
}

#[derive(Parser)]
pub struct ChangeArgs {
    /// Base value.
    pub base: NumericInput,

    /// Rate of the change, in percent.
    pub percent: NumericInput,

    /// Hausse or baisse.
    #[clap(long, value_enum, default_value = "increase")]
    pub direction: ChangeDirection,
}

#[derive(Parser)]
pub struct VariationArgs {
    /// Start value. Must not be zero.
    pub start: NumericInput,

    /// End value.
    pub end: NumericInput,
}

#[derive(Parser)]
pub struct ReverseArgs {
    /// The known part of the total.
    pub part: NumericInput,

    /// Which percentage of the total the part represents. Must not be zero.
    pub percent: NumericInput,
}

#[derive(Parser)]
pub struct VatArgs {
    /// The known amount: HT, TTC, or the TVA itself, depending on the mode.
    pub amount: NumericInput,

    /// VAT rate, in percent. For example: `20` or `5,5`.
    pub rate: NumericInput,

    #[clap(long, value_enum, default_value = "ht-to-ttc")]
    pub mode: VatMode,
}

#[derive(Parser)]
pub struct PrecisionArgs {
    /// New precision (0 to 3 fraction digits). Omit to show the current one.
    pub digits: Option<Precision>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }
}
