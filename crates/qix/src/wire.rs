//! The player's in-progress cut through unclaimed territory.
//!
//! The first point is the perimeter cell the player left from; every later
//! point is an uncaptured cell the player pushed into. Points are unique.

use std::collections::HashSet;

use crate::cell::Point;

#[derive(Debug, Clone, Default)]
pub struct Wire {
    points: Vec<Point>,
    members: HashSet<Point>,
}

impl Wire {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `p` unless it is already on the wire. Returns whether it was added.
    pub fn push(&mut self, p: Point) -> bool {
        if !self.members.insert(p) {
            return false;
        }
        self.points.push(p);
        true
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.members.contains(&p)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Where the wire left the perimeter.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// The first cell pushed into open territory.
    #[must_use]
    pub fn lead(&self) -> Option<Point> {
        self.points.get(1).copied()
    }

    /// Vector from the lead cell back to the origin, i.e. `wire[0] - wire[1]`.
    ///
    /// A non-zero `x` means the wire left the perimeter horizontally.
    #[must_use]
    pub fn exit_direction(&self) -> Option<Point> {
        Some(self.origin()? - self.lead()?)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.members.clear();
    }
}
