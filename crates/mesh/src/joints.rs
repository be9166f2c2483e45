use std::collections::HashMap;

use crate::geometry::Vector3;

/// A named skeleton joint set produced by an upstream fitting stage.
///
/// Joint coordinates live in `positions`; `names` maps a joint name (ex:
/// `"pelvis"`) to an index into that array. The two are supplied together
/// because the upstream format stores them as parallel arrays.
pub struct JointSet {
    positions: Vec<Vector3>,
    names: HashMap<String, usize>,
}

impl JointSet {
    pub fn new(positions: Vec<Vector3>, names: HashMap<String, usize>) -> Self {
        Self { positions, names }
    }

    /// Looks up a joint position by name.
    ///
    /// Returns `None` when the name is unknown or its index is out of range
    /// for the positions array. An out-of-range index is treated the same as
    /// a missing joint so callers fall through to their geometric fallback.
    pub fn position_of(&self, name: &str) -> Option<Vector3> {
        let &idx = self.names.get(name)?;
        self.positions.get(idx).copied()
    }
}
