/// A successful calculation: the raw value plus its rendered forms.
///
/// Created fresh on every invocation. Re-rendering at another precision re-runs the
/// calculation with the same inputs, so `display` can never drift away from `value`.
#[derive(Clone, Debug)]
pub struct Outcome {
    /// Unrounded result of the formula.
    pub value: f64,

    /// The result formatted for display, with a `%` or sign prefix where the
    /// calculator calls for one.
    pub display: String,

    /// French one-liner restating the inputs and the result.
    pub phrase: String,
}
