use cgmath::Vector2;

use crate::OrderedVec2;

/// A closed tape path around one body slice.
///
/// The loop is closed by definition, so the stored points {A, B, C} imply
/// the edges A->B, B->C and the closing edge C->A; the start point is never
/// stored twice.
pub struct ClosedLoop {
    path: Vec<Vector2<f32>>,
}

impl ClosedLoop {
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Builds a loop from convex-hull output, unwrapping the ordered-float
    /// keys back into plain coordinates.
    pub fn from_hull(hull: &[OrderedVec2]) -> Self {
        Self {
            path: hull
                .iter()
                .map(|p| Vector2 { x: p.x.0, y: p.y.0 })
                .collect(),
        }
    }

    pub fn segments(&self) -> Segments {
        let mut iter = self.path.iter();
        let start = iter.next().cloned();
        Segments {
            prev: start,
            start,
            iter,
        }
    }

    /// Sum of segment lengths around the loop, including the implicit
    /// closing edge. Accumulated in f64 in loop order so the result is a
    /// pure function of the stored points.
    pub fn perimeter_m(&self) -> f64 {
        self.segments()
            .map(|((x0, y0), (x1, y1))| {
                let dx = (x1 - x0) as f64;
                let dy = (y1 - y0) as f64;
                (dx * dx + dy * dy).sqrt()
            })
            .sum()
    }

    /// Axis-aligned bounds of the loop as `((x_min, x_max), (y_min, y_max))`.
    pub fn limits(&self) -> Option<((f32, f32), (f32, f32))> {
        let mut iter = self.path.iter();
        let first = iter.next()?;
        let mut x = (first.x, first.x);
        let mut y = (first.y, first.y);
        for p in iter {
            if p.x < x.0 {
                x.0 = p.x;
            }
            if p.x > x.1 {
                x.1 = p.x;
            }
            if p.y < y.0 {
                y.0 = p.y;
            }
            if p.y > y.1 {
                y.1 = p.y;
            }
        }
        Some((x, y))
    }
}

impl Default for ClosedLoop {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Segments<'a> {
    start: Option<Vector2<f32>>,
    prev: Option<Vector2<f32>>,
    iter: std::slice::Iter<'a, Vector2<f32>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = ((f32, f32), (f32, f32));

    fn next(&mut self) -> Option<Self::Item> {
        let prev = self.prev?;
        let next = match self.iter.next() {
            Some(&p) => {
                self.prev = Some(p);
                p
            }
            // Path exhausted: emit the closing edge back to the start.
            None => {
                self.prev = None;
                self.start?
            }
        };
        Some(((prev.x, prev.y), (next.x, next.y)))
    }
}

/// Cross product of (o->a) x (o->b), widened to f64 so the turn test is
/// exact enough for micrometer-quantized inputs.
fn cross(o: &OrderedVec2, a: &OrderedVec2, b: &OrderedVec2) -> f64 {
    let (ox, oy) = (o.x.0 as f64, o.y.0 as f64);
    let (ax, ay) = (a.x.0 as f64, a.y.0 as f64);
    let (bx, by) = (b.x.0 as f64, b.y.0 as f64);
    (ax - ox) * (by - oy) - (ay - oy) * (bx - ox)
}

/// Convex hull by Andrew's monotone chain, counter-clockwise.
///
/// Points are sorted lexicographically under the ordered-float total order,
/// so the hull depends only on the point set, never on input order. The
/// `<= 0` turn test drops collinear candidates; that is the tie-break rule
/// for degenerate edges. Duplicate points must already be removed by the
/// caller.
///
/// Fewer than 3 distinct input points come back unchanged (no loop exists);
/// fully collinear input collapses to a 2-point chain. Callers treat any
/// hull shorter than 3 points as degenerate.
pub fn convex_hull(points: &[OrderedVec2]) -> Vec<OrderedVec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.cmp(&b.x).then(a.y.cmp(&b.y)));

    let mut hull: Vec<OrderedVec2> = Vec::with_capacity(sorted.len() + 1);

    // Lower chain.
    for p in &sorted {
        while hull.len() >= 2 && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(*p);
    }

    // Upper chain. The last sorted point is already in the hull, so walk
    // back from the second-to-last; `lower_len` keeps the chains separate.
    let lower_len = hull.len() + 1;
    for p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(*p);
    }

    // First point closes the loop implicitly.
    hull.pop();
    hull
}
