pub type Vector3 = cgmath::Vector3<f32>;

// We rely on Vector3 being repr(c) so vertex buffers loaded as raw f32
// triples can be viewed as Vector3 values without copying.
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// The canonical world-up unit vector (+Y).
///
/// Height measurements project onto this axis unless a skeleton frame
/// overrides the origin; the axis itself is always world +Y in v0.
pub fn world_up() -> Vector3 {
    Vector3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    }
}

/// Returns `(y_min, y_max)` over the vertex set, or `None` for an empty set.
///
/// Scans in input order with plain comparisons; NaN coordinates never win
/// a comparison so a poisoned vertex cannot spread into the limits.
pub fn y_limits(verts: &[Vector3]) -> Option<(f32, f32)> {
    let mut iter = verts.iter();
    let first = iter.next()?.y;
    let mut lo = first;
    let mut hi = first;
    for v in iter {
        if v.y < lo {
            lo = v.y;
        }
        if v.y > hi {
            hi = v.y;
        }
    }
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_limits_empty() {
        assert_eq!(None, y_limits(&[]));
    }

    #[test]
    fn y_limits_spread() {
        let verts = [
            Vector3 {
                x: 0.0,
                y: 0.3,
                z: 0.0,
            },
            Vector3 {
                x: 1.0,
                y: -0.2,
                z: 0.5,
            },
            Vector3 {
                x: -1.0,
                y: 1.7,
                z: 0.5,
            },
        ];
        assert_eq!(Some((-0.2, 1.7)), y_limits(&verts));
    }
}
