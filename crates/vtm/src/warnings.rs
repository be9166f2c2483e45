use std::fmt;

/// A stable warning tag emitted by the measurement pipeline.
///
/// The `Display` strings are contractual: downstream artifacts embed them
/// verbatim, so the rendered form of every variant is frozen. Warning lists
/// are append-only and never deduplicated; emission order is preserved for
/// audit traceability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    /// The body-frame ladder exhausted every strategy; height measurements
    /// relative to the pelvis are undefined for this mesh.
    HipFrameFallbackToWorldY,
    /// The whole canonicalization batch failed because the source unit was
    /// not one of mm/cm/m. Carries the offending unit string.
    UnitFailInvalidSourceUnit(String),
    /// `k` input values were non-finite and replaced with NaN.
    UnitFailInvalidValues(usize),
    /// Fewer than 3 distinct points fell in the measurement band.
    CircBandInsufficientPoints,
    /// The banded points were collinear; no closed loop exists.
    CircHullDegenerate,
    /// The hull perimeter came out non-finite or non-positive.
    CircPerimeterNotFinite,
    /// No vertices fell in the height key's band.
    HeightBandEmpty,
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningCode::HipFrameFallbackToWorldY => write!(f, "HIP_FRAME_FALLBACK_TO_WORLD_Y"),
            WarningCode::UnitFailInvalidSourceUnit(unit) => {
                write!(f, "UNIT_FAIL: Invalid source_unit '{}'", unit)
            }
            WarningCode::UnitFailInvalidValues(k) => {
                write!(f, "UNIT_FAIL: {} invalid value(s)", k)
            }
            WarningCode::CircBandInsufficientPoints => write!(f, "CIRC_BAND_INSUFFICIENT_POINTS"),
            WarningCode::CircHullDegenerate => write!(f, "CIRC_HULL_DEGENERATE"),
            WarningCode::CircPerimeterNotFinite => write!(f, "CIRC_PERIMETER_NOT_FINITE"),
            WarningCode::HeightBandEmpty => write!(f, "HEIGHT_BAND_EMPTY"),
        }
    }
}
