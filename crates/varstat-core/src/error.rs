/// Failure modes shared by every statistic.
///
/// Errors always propagate to the caller as the operation's result; no
/// statistic substitutes a fallback value such as `0.0` on division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The sample contains no elements.
    #[display("sample is empty")]
    EmptyInput,
    /// The sample contains a single element, so the Bessel-corrected sample
    /// variance (and everything derived from it) is undefined.
    #[display("sample variance is undefined for a single-element sample")]
    InsufficientData,
    /// A statistic would divide by zero: the mean is zero (coefficient of
    /// variation) or the standard deviation is zero (z-scores over a
    /// constant sample).
    #[display("division by zero: degenerate sample for this statistic")]
    DivisionByZero,
}
