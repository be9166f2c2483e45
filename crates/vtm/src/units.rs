use crate::warnings::WarningCode;

/// Quantize a length in meters to the nearest 0.001 m.
///
/// Ties round away from zero (`f64::round` semantics), so the same input
/// always serializes to the same millimeter-stable decimal.
fn quantize_mm(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Converts a batch of raw measurement values to meters.
///
/// `source_unit` is the caller-supplied unit string, one of `"mm"`, `"cm"`
/// or `"m"`. Any other unit fails the whole batch: every output element is
/// NaN and a single `UNIT_FAIL: Invalid source_unit` warning is appended.
///
/// Non-finite input elements are replaced with NaN in place (never scaled,
/// never dropped) and counted in one aggregate `UNIT_FAIL` warning. Finite
/// elements are scaled and quantized to 0.001 m.
///
/// This function never panics; all failure is reported through NaN slots
/// plus the warnings list. Callers must consult the warnings, not rely on
/// NaN detection alone, since an unmeasurable value and an invalid-unit
/// batch both surface as NaN.
pub fn canonicalize_to_m(
    values: &[f64],
    source_unit: &str,
    warnings: &mut Vec<WarningCode>,
) -> Vec<f64> {
    let scale = match source_unit {
        "mm" => 1.0 / 1000.0,
        "cm" => 1.0 / 100.0,
        "m" => 1.0,
        _ => {
            warnings.push(WarningCode::UnitFailInvalidSourceUnit(
                source_unit.to_string(),
            ));
            return vec![f64::NAN; values.len()];
        }
    };

    let invalid = values.iter().filter(|v| !v.is_finite()).count();
    if invalid > 0 {
        warnings.push(WarningCode::UnitFailInvalidValues(invalid));
    }

    values
        .iter()
        .map(|&v| {
            if v.is_finite() {
                quantize_mm(v * scale)
            } else {
                f64::NAN
            }
        })
        .collect()
}

/// Scalar form of [`canonicalize_to_m`]; same unit and NaN policy.
pub fn canonicalize_scalar_to_m(
    value: f64,
    source_unit: &str,
    warnings: &mut Vec<WarningCode>,
) -> f64 {
    canonicalize_to_m(&[value], source_unit, warnings)[0]
}
