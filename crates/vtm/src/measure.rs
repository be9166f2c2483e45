use std::collections::HashSet;

use cgmath::{InnerSpace, Vector2};
use ordered_float::OrderedFloat;
use vtm_mesh::{y_limits, JointSet, Vector3};

use crate::config::{MeasureConfig, Region, RegionBand};
use crate::contour::{convex_hull, ClosedLoop};
use crate::frame::estimate_frame;
use crate::units::canonicalize_scalar_to_m;
use crate::warnings::WarningCode;

pub type OrderedVec2 = Vector2<OrderedFloat<f32>>;

trait Truncate {
    fn truncate_micros(self) -> Self;
}

impl Truncate for f32 {
    // Coordinates are meters; dedupe keys are micrometer-quantized so two
    // floats that differ only in representation noise collapse to one key.
    fn truncate_micros(self) -> Self {
        (self * 1_000_000.0).round() / 1_000_000.0
    }
}

/// Every measurement key the engine understands, in artifact order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKey {
    BustCirc,
    WaistCirc,
    HipCirc,
    BustHeight,
    WaistHeight,
    HipHeight,
}

impl MeasurementKey {
    pub const ALL: [MeasurementKey; 6] = [
        MeasurementKey::BustCirc,
        MeasurementKey::WaistCirc,
        MeasurementKey::HipCirc,
        MeasurementKey::BustHeight,
        MeasurementKey::WaistHeight,
        MeasurementKey::HipHeight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementKey::BustCirc => "BUST_CIRC_M",
            MeasurementKey::WaistCirc => "WAIST_CIRC_M",
            MeasurementKey::HipCirc => "HIP_CIRC_M",
            MeasurementKey::BustHeight => "BUST_HEIGHT_M",
            MeasurementKey::WaistHeight => "WAIST_HEIGHT_M",
            MeasurementKey::HipHeight => "HIP_HEIGHT_M",
        }
    }

    pub fn parse(s: &str) -> Option<MeasurementKey> {
        MeasurementKey::ALL.iter().find(|k| k.as_str() == s).copied()
    }

    pub fn region(&self) -> Region {
        match self {
            MeasurementKey::BustCirc | MeasurementKey::BustHeight => Region::Bust,
            MeasurementKey::WaistCirc | MeasurementKey::WaistHeight => Region::Waist,
            MeasurementKey::HipCirc | MeasurementKey::HipHeight => Region::Hip,
        }
    }

    pub fn is_circumference(&self) -> bool {
        matches!(
            self,
            MeasurementKey::BustCirc | MeasurementKey::WaistCirc | MeasurementKey::HipCirc
        )
    }
}

/// The scalar-or-null outcome of one measurement call.
///
/// `None` means the value could not be computed deterministically from the
/// given input; the warnings then carry at least one reason code. A present
/// value is always finite and already quantized to 0.001 m, so downstream
/// serializers perform no further rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementResult {
    pub value_m: Option<f64>,
    pub warnings: Vec<WarningCode>,
}

/// Per-measurement slice facts for debugging band/hull behavior.
///
/// Field names follow the slice-debug contract of the facts artifacts:
/// `method`, `plane`, `axis_up`, `y_range`, `band_width_m`, `n_points_raw`,
/// `n_points_deduped`, `hull_ok`, `perimeter_m`, `width_m`, `depth_m`,
/// `bbox_xz`.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceDebug {
    pub method: &'static str,
    pub plane: &'static str,
    pub axis_up: &'static str,
    pub y_range: (f32, f32),
    pub band_width_m: f32,
    pub n_points_raw: usize,
    pub n_points_deduped: usize,
    pub hull_ok: bool,
    pub perimeter_m: Option<f64>,
    pub width_m: Option<f64>,
    pub depth_m: Option<f64>,
    pub bbox_xz: Option<[[f32; 2]; 2]>,
}

impl SliceDebug {
    fn new(method: &'static str, y_range: (f32, f32), band_width_m: f32) -> Self {
        Self {
            method,
            plane: "xz",
            axis_up: "y",
            y_range,
            band_width_m,
            n_points_raw: 0,
            n_points_deduped: 0,
            hull_ok: false,
            perimeter_m: None,
            width_m: None,
            depth_m: None,
            bbox_xz: None,
        }
    }
}

/// Vertical band for a region: `center = y_min + frac * range`, slab of
/// `band_width_m` around it. A zero vertical extent is legal here (a flat
/// ring still measures); only the frame estimator guards on extent.
fn band_range(verts: &[Vector3], band: RegionBand) -> (f32, f32) {
    let (y_min, y_max) = y_limits(verts).unwrap_or((0.0, 0.0));
    let center = y_min + band.center_frac * (y_max - y_min);
    let half = band.band_width_m / 2.0;
    (center - half, center + half)
}

/// Computes one measurement over a vertex set.
///
/// Never panics or errors for malformed geometry: every failure mode
/// degrades to `value_m: None` plus a reason code, and both branches are
/// pure deterministic functions of the inputs.
pub fn measure(
    verts: &[Vector3],
    key: MeasurementKey,
    joints: Option<&JointSet>,
    config: &MeasureConfig,
) -> MeasurementResult {
    measure_with_debug(verts, key, joints, config).0
}

/// Like [`measure`], also returning the slice-debug facts for the call.
pub fn measure_with_debug(
    verts: &[Vector3],
    key: MeasurementKey,
    joints: Option<&JointSet>,
    config: &MeasureConfig,
) -> (MeasurementResult, SliceDebug) {
    if key.is_circumference() {
        measure_circumference(verts, key, config)
    } else {
        measure_height(verts, key, joints, config)
    }
}

fn measure_circumference(
    verts: &[Vector3],
    key: MeasurementKey,
    config: &MeasureConfig,
) -> (MeasurementResult, SliceDebug) {
    let band = config.band_for(key.region());
    let (lo, hi) = band_range(verts, band);
    let mut warnings = Vec::new();
    let mut debug = SliceDebug::new("slice_hull", (lo, hi), band.band_width_m);

    let null = |warnings: Vec<WarningCode>, debug: SliceDebug| {
        (
            MeasurementResult {
                value_m: None,
                warnings,
            },
            debug,
        )
    };

    // Project the band onto the XZ plane, deduping on micrometer-quantized
    // keys. Input order is irrelevant from here on: the hull sorts.
    let mut seen: HashSet<OrderedVec2> = HashSet::new();
    let mut deduped: Vec<OrderedVec2> = Vec::new();
    for v in verts {
        if v.y < lo || v.y > hi {
            continue;
        }
        debug.n_points_raw += 1;
        let q = Vector2 {
            x: OrderedFloat(v.x.truncate_micros()),
            y: OrderedFloat(v.z.truncate_micros()),
        };
        if seen.insert(q) {
            deduped.push(q);
        }
    }
    debug.n_points_deduped = deduped.len();

    if deduped.len() < 3 {
        warnings.push(WarningCode::CircBandInsufficientPoints);
        return null(warnings, debug);
    }

    let hull = convex_hull(&deduped);
    if hull.len() < 3 {
        warnings.push(WarningCode::CircHullDegenerate);
        return null(warnings, debug);
    }
    debug.hull_ok = true;

    let tape = ClosedLoop::from_hull(&hull);
    if let Some(((x_lo, x_hi), (z_lo, z_hi))) = tape.limits() {
        debug.width_m = Some((x_hi - x_lo) as f64);
        debug.depth_m = Some((z_hi - z_lo) as f64);
        debug.bbox_xz = Some([[x_lo, z_lo], [x_hi, z_hi]]);
    }

    let perimeter = tape.perimeter_m();
    if !perimeter.is_finite() || perimeter <= 0.0 {
        warnings.push(WarningCode::CircPerimeterNotFinite);
        return null(warnings, debug);
    }
    debug.perimeter_m = Some(perimeter);

    // Mesh coordinates are already metric; canonicalization only quantizes.
    let value = canonicalize_scalar_to_m(perimeter, "m", &mut warnings);
    let value_m = if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        if warnings.is_empty() {
            warnings.push(WarningCode::CircPerimeterNotFinite);
        }
        None
    };
    (
        MeasurementResult { value_m, warnings },
        debug,
    )
}

fn measure_height(
    verts: &[Vector3],
    key: MeasurementKey,
    joints: Option<&JointSet>,
    config: &MeasureConfig,
) -> (MeasurementResult, SliceDebug) {
    let band = config.band_for(key.region());
    let (lo, hi) = band_range(verts, band);
    let mut warnings = Vec::new();
    let mut debug = SliceDebug::new("pelvis_height", (lo, hi), band.band_width_m);

    let null = |warnings: Vec<WarningCode>, debug: SliceDebug| {
        (
            MeasurementResult {
                value_m: None,
                warnings,
            },
            debug,
        )
    };

    // Without a frame the height is undefined. Policy: null plus the
    // propagated fallback warning, never a silent world-relative value.
    let Some(frame) = estimate_frame(verts, joints, &config.frame, &mut warnings) else {
        return null(warnings, debug);
    };
    debug_assert!(float_eq::float_eq!(
        frame.up_axis.magnitude(),
        1.0,
        abs <= 1e-4
    ));

    // Point of interest: centroid of the region band, summed in input order.
    let mut sum = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    let mut count = 0usize;
    for v in verts {
        if v.y >= lo && v.y <= hi {
            sum += *v;
            count += 1;
        }
    }
    debug.n_points_raw = count;
    debug.n_points_deduped = count;
    if count == 0 {
        warnings.push(WarningCode::HeightBandEmpty);
        return null(warnings, debug);
    }

    let poi = sum / count as f32;
    let height = (poi - frame.origin).dot(frame.up_axis) as f64;

    let value = canonicalize_scalar_to_m(height, "m", &mut warnings);
    let value_m = if value.is_finite() { Some(value) } else { None };
    (
        MeasurementResult { value_m, warnings },
        debug,
    )
}
