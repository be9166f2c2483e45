use vtm_mesh::Vector3;

/// Deterministic synthetic vertex sets with known measurements.
///
/// Generators are closed-form so every test sees bit-identical fixtures
/// without binary assets in the tree.

/// A flat ring of `n` points at radius `r` and height `y`.
///
/// The inscribed n-gon perimeter is `2 * n * r * sin(pi / n)`.
pub fn ring(n: usize, r: f32, y: f32) -> Vec<Vector3> {
    (0..n)
        .map(|i| {
            let theta = 2.0 * std::f32::consts::PI * i as f32 / n as f32;
            Vector3 {
                x: r * theta.cos(),
                y,
                z: r * theta.sin(),
            }
        })
        .collect()
}

/// A cylinder shell: `levels` rings of `n` points each, evenly spaced from
/// y=0 to y=`height`. Requires `levels >= 2`.
pub fn cylinder(levels: usize, n: usize, r: f32, height: f32) -> Vec<Vector3> {
    let mut verts = Vec::with_capacity(levels * n);
    for l in 0..levels {
        let y = height * l as f32 / (levels - 1) as f32;
        verts.extend(ring(n, r, y));
    }
    verts
}

/// A torso-like stack: a cylinder whose radius varies by height so bust,
/// waist and hip bands measure visibly different circumferences. The
/// profile bulges at 0.52 (hip) and 0.72 (bust) with a pinch at 0.63
/// (waist).
pub fn torso(levels: usize, n: usize, height: f32) -> Vec<Vector3> {
    let mut verts = Vec::with_capacity(levels * n);
    for l in 0..levels {
        let t = l as f32 / (levels - 1) as f32;
        let hip = 0.16 * (-((t - 0.52) * (t - 0.52)) / 0.02).exp();
        let bust = 0.14 * (-((t - 0.72) * (t - 0.72)) / 0.01).exp();
        let r = 0.08 + hip + bust;
        verts.extend(ring(n, r, height * t));
    }
    verts
}

/// A flat sheet in the XZ plane: every vertex at the same height. The
/// frame estimator must treat this as degenerate.
pub fn flat_sheet(n_per_side: usize, y: f32) -> Vec<Vector3> {
    let mut verts = Vec::with_capacity(n_per_side * n_per_side);
    for i in 0..n_per_side {
        for j in 0..n_per_side {
            verts.push(Vector3 {
                x: i as f32 * 0.01,
                y,
                z: j as f32 * 0.01,
            });
        }
    }
    verts
}

/// Analytic perimeter of the inscribed n-gon produced by [`ring`].
pub fn ring_perimeter(n: usize, r: f64) -> f64 {
    2.0 * n as f64 * r * (std::f64::consts::PI / n as f64).sin()
}
