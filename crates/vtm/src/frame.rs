use vtm_mesh::{world_up, y_limits, JointSet, Vector3};

use crate::config::FrameConfig;
use crate::warnings::WarningCode;

/// A stable body reference frame for pelvis-relative heights.
///
/// Invariant: `up_axis` has unit length and `origin` lies in the same
/// coordinate space as the vertex set it was derived from. Produced fresh
/// per call and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame {
    pub origin: Vector3,
    pub up_axis: Vector3,
}

/// Outcome of a single frame strategy.
enum FrameEstimate {
    Found(BodyFrame),
    Fallback,
}

/// Estimates the body frame from vertices and an optional skeleton.
///
/// Strategies run as an ordered ladder; the first to produce a frame wins:
///
/// 1. Skeleton: a `JointSet` carrying an in-range `"pelvis"` entry gives
///    the origin exactly, up-axis world +Y. Never warns, and never consults
///    the vertex array.
/// 2. Banded centroid: the mean of vertices in the lower-torso band
///    `[y_min + 0.45·range, y_min + 0.55·range]` (fractions from `config`),
///    summed in input order. Falls through on a near-flat mesh or a band
///    with fewer than `min_band_points` vertices.
///
/// If every strategy falls through, `HIP_FRAME_FALLBACK_TO_WORLD_Y` is
/// appended and `None` returned. This function never panics on bad input.
pub fn estimate_frame(
    verts: &[Vector3],
    joints: Option<&JointSet>,
    config: &FrameConfig,
    warnings: &mut Vec<WarningCode>,
) -> Option<BodyFrame> {
    let ladder = [from_pelvis_joint(joints), from_torso_band(verts, config)];
    for estimate in ladder {
        if let FrameEstimate::Found(frame) = estimate {
            return Some(frame);
        }
    }
    warnings.push(WarningCode::HipFrameFallbackToWorldY);
    None
}

fn from_pelvis_joint(joints: Option<&JointSet>) -> FrameEstimate {
    let Some(origin) = joints.and_then(|j| j.position_of("pelvis")) else {
        return FrameEstimate::Fallback;
    };
    FrameEstimate::Found(BodyFrame {
        origin,
        up_axis: world_up(),
    })
}

fn from_torso_band(verts: &[Vector3], config: &FrameConfig) -> FrameEstimate {
    let Some((y_min, y_max)) = y_limits(verts) else {
        return FrameEstimate::Fallback;
    };
    let range = y_max - y_min;
    if range < config.min_extent {
        return FrameEstimate::Fallback;
    }

    let lo = y_min + config.band_lo_frac * range;
    let hi = y_min + config.band_hi_frac * range;

    // Centroid by summation in input order. Reordered input may shift the
    // result by float summation error; that is an accepted limitation.
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
    if count < config.min_band_points {
        return FrameEstimate::Fallback;
    }

    FrameEstimate::Found(BodyFrame {
        origin: sum / count as f32,
        up_axis: world_up(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use float_eq::assert_float_eq;

    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    fn column(n: usize, height: f32) -> Vec<Vector3> {
        (0..n)
            .map(|i| v(0.1, height * i as f32 / (n - 1) as f32, -0.1))
            .collect()
    }

    #[test]
    fn skeleton_takes_precedence_over_vertices() {
        let verts = column(50, 1.8);
        let joints = JointSet::new(
            vec![v(0.0, 0.0, 0.0), v(0.02, 0.93, -0.01)],
            HashMap::from([("pelvis".to_string(), 1)]),
        );
        let mut warnings = Vec::new();
        let frame =
            estimate_frame(&verts, Some(&joints), &FrameConfig::default(), &mut warnings).unwrap();
        assert_eq!(v(0.02, 0.93, -0.01), frame.origin);
        assert_eq!(world_up(), frame.up_axis);
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_pelvis_joint_falls_back_to_band() {
        let verts = column(50, 1.8);
        let joints = JointSet::new(
            vec![v(9.0, 9.0, 9.0)],
            HashMap::from([("head".to_string(), 0)]),
        );
        let mut warnings = Vec::new();
        let frame =
            estimate_frame(&verts, Some(&joints), &FrameConfig::default(), &mut warnings).unwrap();
        // Band centroid, not the unrelated joint.
        assert_ne!(v(9.0, 9.0, 9.0), frame.origin);
        assert_float_eq!(frame.origin.y, 0.9, abs <= 0.05);
        assert!(warnings.is_empty());
    }

    #[test]
    fn band_centroid_on_uniform_column() {
        let verts = column(101, 2.0);
        let mut warnings = Vec::new();
        let frame = estimate_frame(&verts, None, &FrameConfig::default(), &mut warnings).unwrap();
        assert_float_eq!(frame.origin.x, 0.1, abs <= 1e-6);
        assert_float_eq!(frame.origin.y, 1.0, abs <= 0.02);
        assert_float_eq!(frame.origin.z, -0.1, abs <= 1e-6);
        assert_eq!(world_up(), frame.up_axis);
        assert!(warnings.is_empty());
    }

    #[test]
    fn flat_mesh_falls_back() {
        let verts: Vec<Vector3> = (0..10).map(|i| v(i as f32, 0.5, 0.0)).collect();
        let mut warnings = Vec::new();
        let frame = estimate_frame(&verts, None, &FrameConfig::default(), &mut warnings);
        assert!(frame.is_none());
        assert_eq!(vec![WarningCode::HipFrameFallbackToWorldY], warnings);
    }

    #[test]
    fn sparse_band_falls_back() {
        // All vertices cluster near the extremes; the 0.45-0.55 band is empty.
        let mut verts = Vec::new();
        for i in 0..10 {
            verts.push(v(i as f32, 0.0, 0.0));
            verts.push(v(i as f32, 2.0, 0.0));
        }
        let mut warnings = Vec::new();
        let frame = estimate_frame(&verts, None, &FrameConfig::default(), &mut warnings);
        assert!(frame.is_none());
        assert_eq!(vec![WarningCode::HipFrameFallbackToWorldY], warnings);
    }

    #[test]
    fn too_few_vertices_falls_back() {
        let verts = [v(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0)];
        let mut warnings = Vec::new();
        assert!(estimate_frame(&verts, None, &FrameConfig::default(), &mut warnings).is_none());
        assert_eq!(vec![WarningCode::HipFrameFallbackToWorldY], warnings);
    }

    #[test]
    fn skeleton_frame_survives_tiny_vertex_set() {
        // The joint strategy never consults the vertex array, so a mesh too
        // small for the banded centroid still gets its exact pelvis origin.
        let verts = [v(0.1, 0.9, 0.0), v(0.1, 1.0, 0.0)];
        let joints = JointSet::new(
            vec![v(0.05, 0.88, -0.02)],
            HashMap::from([("pelvis".to_string(), 0)]),
        );
        let mut warnings = Vec::new();
        let frame =
            estimate_frame(&verts, Some(&joints), &FrameConfig::default(), &mut warnings).unwrap();
        assert_eq!(v(0.05, 0.88, -0.02), frame.origin);
        assert_eq!(world_up(), frame.up_axis);
        assert!(warnings.is_empty());
    }

    #[test]
    fn estimator_is_deterministic() {
        let verts = column(73, 1.65);
        let mut w1 = Vec::new();
        let mut w2 = Vec::new();
        let f1 = estimate_frame(&verts, None, &FrameConfig::default(), &mut w1);
        let f2 = estimate_frame(&verts, None, &FrameConfig::default(), &mut w2);
        assert_eq!(f1, f2);
        assert_eq!(w1, w2);
    }
}
