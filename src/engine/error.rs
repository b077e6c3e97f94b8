/// A failed calculation, worded for direct display.
///
/// Never fatal for the engine itself: the caller decides whether to clear or keep
/// whatever it was showing before.
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum CalcError {
    /// At least one input did not parse into a finite number.
    #[display("Nombres invalides")]
    InvalidNumber,

    /// The divisor of the operation is zero.
    #[display("Division par zéro")]
    DivisionByZero,

    /// A variation rate from a zero start value is undefined.
    #[display("Départ nul")]
    ZeroStart,

    /// A total cannot be recovered from a zero percentage.
    #[display("Pourcentage nul")]
    ZeroPercent,
}
