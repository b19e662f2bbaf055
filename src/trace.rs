//! Coordinate trace: the polyline produced by the interpreter.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The interpreter's output: an ordered polyline plus bracket-balance diagnostics.
///
/// `points` always starts with the origin and lists every visited position in
/// traversal order, including positions restored by `]`. Nothing is merged or
/// simplified.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Visited positions, in order.
    pub points: Vec<DVec2>,

    /// Number of `]` encountered with an empty branch stack (ignored).
    pub unmatched_closes: usize,

    /// Number of `[` still on the branch stack when the input ended.
    pub unmatched_opens: usize,
}

impl Trace {
    /// A trace holding only the origin.
    pub fn new() -> Self {
        Self {
            points: vec![DVec2::ZERO],
            ..Default::default()
        }
    }

    pub fn push(&mut self, point: DVec2) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` when every bracket was matched.
    pub fn is_well_formed(&self) -> bool {
        self.unmatched_closes == 0 && self.unmatched_opens == 0
    }

    /// Axis-aligned bounding box `(min, max)` of all points.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}
