//! Territory map: the captured grid, its perimeter, and the active wire.
//!
//! Capturing works by splitting. Once the wire is closed against the
//! perimeter its cells are claimed, then two scratch copies of the grid are
//! flood-filled from either side of the wire's lead cell. The copy that ends
//! up with fewer captured cells is committed, so the smaller region is always
//! the one claimed.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::cell::{Cell, Point};
use crate::config::MAX_SIZE;
use crate::fill::CaptureMask;
use crate::wire::Wire;

/// 8-neighbourhood offsets.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("wire needs at least two points to capture, found {len}")]
    WireTooShort { len: usize },
}

/// Which flood-fill copy was committed, relative to the wire's exit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Result of a successful `capture_field`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CaptureOutcome {
    pub side: Side,
    /// Cells newly claimed, wire included.
    pub claimed: usize,
    pub percentage: u32,
}

/// Square grid of cells. Out-of-bounds coordinates read as captured.
#[derive(Debug, Clone)]
pub struct TerritoryMap {
    size: usize,
    cells: Vec<Cell>,
    /// Row-major, so the first element is stable and well defined.
    perimeter: Vec<Point>,
    on_perimeter: Vec<bool>,
    wire: Wire,
}

impl TerritoryMap {
    /// Builds a `size`×`size` map whose outer ring is already claimed.
    ///
    /// `size` must not exceed [`MAX_SIZE`]; `GameConfig::validate` enforces
    /// this for every map a round builds.
    #[must_use]
    pub fn new(size: usize) -> Self {
        debug_assert!(size <= MAX_SIZE, "grid size {size} above {MAX_SIZE}");
        let mut map = Self {
            size,
            cells: vec![Cell::uncaptured(); size * size],
            perimeter: Vec::new(),
            on_perimeter: vec![false; size * size],
            wire: Wire::new(),
        };
        let last = size.saturating_sub(1);
        for i in 0..size {
            map.cells[i].capture();
            map.cells[last * size + i].capture();
            map.cells[i * size].capture();
            map.cells[i * size + last].capture();
        }
        map.compute_perimeter();
        map
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.size && y >= 0 && (y as usize) < self.size
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.size + x as usize)
    }

    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.index(x, y)
            .map_or_else(Cell::claimed, |i| self.cells[i])
    }

    #[must_use]
    pub fn is_captured(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_captured()
    }

    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_captured()).count()
    }

    /// `floor(100 * captured / size²)`.
    #[must_use]
    pub fn capture_percentage(&self) -> u32 {
        let total = self.size * self.size;
        if total == 0 {
            return 100;
        }
        (self.captured_count() * 100 / total) as u32
    }

    /// Captured cells with at least one uncaptured 8-neighbour.
    #[must_use]
    pub fn perimeter(&self) -> &[Point] {
        &self.perimeter
    }

    #[must_use]
    pub fn is_perimeter(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.on_perimeter[i])
    }

    pub fn compute_perimeter(&mut self) {
        self.perimeter.clear();
        self.on_perimeter.fill(false);
        let n = self.size as i32;
        for y in 0..n {
            for x in 0..n {
                if !self.is_captured(x, y) {
                    continue;
                }
                let borders_open = NEIGHBORS
                    .iter()
                    .any(|&(dx, dy)| !self.is_captured(x + dx, y + dy));
                if borders_open {
                    self.perimeter.push(Point::new(x, y));
                    self.on_perimeter[y as usize * self.size + x as usize] = true;
                }
            }
        }
    }

    #[must_use]
    pub fn wire(&self) -> &Wire {
        &self.wire
    }

    /// Extends the wire. Legality is the caller's job; duplicates are ignored.
    pub fn push(&mut self, x: i32, y: i32) -> bool {
        self.wire.push(Point::new(x, y))
    }

    /// Drops the wire without capturing, returning where it started.
    pub fn abandon_wire(&mut self) -> Option<Point> {
        let origin = self.wire.origin();
        self.wire.clear();
        origin
    }

    /// First uncaptured cell in row-major order.
    #[must_use]
    pub fn first_uncaptured(&self) -> Option<Point> {
        self.cells
            .iter()
            .position(|c| !c.is_captured())
            .map(|i| self.point_at(i))
    }

    /// Closest perimeter cell by Manhattan distance; row-major on ties.
    #[must_use]
    pub fn nearest_perimeter(&self, from: Point) -> Option<Point> {
        self.perimeter
            .iter()
            .copied()
            .min_by_key(|p| p.manhattan(from))
    }

    /// Row-major `0`/`1` bytes, one per cell.
    #[must_use]
    pub fn captured_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| u8::from(c.is_captured())).collect()
    }

    fn point_at(&self, i: usize) -> Point {
        Point::new((i % self.size) as i32, (i / self.size) as i32)
    }

    fn capture_mask(&self) -> CaptureMask {
        CaptureMask::new(
            self.size,
            self.cells.iter().map(|c| c.is_captured()).collect(),
        )
    }

    /// Claims the wire and the smaller of the two regions it separates.
    ///
    /// Fills start beside the wire's lead cell, perpendicular to its exit
    /// direction. Equal counts commit the left copy, so a wire whose two
    /// seeds share one region claims that whole region. On error the grid is
    /// left untouched.
    pub fn capture_field(&mut self) -> Result<CaptureOutcome, CaptureError> {
        let (Some(exit), Some(lead)) = (self.wire.exit_direction(), self.wire.lead()) else {
            return Err(CaptureError::WireTooShort {
                len: self.wire.len(),
            });
        };
        let before = self.captured_count();

        for p in self.wire.points() {
            if let Some(i) = self.index(p.x, p.y) {
                self.cells[i].capture();
            }
        }

        let (left_seed, right_seed) = if exit.x == 0 {
            (Point::new(lead.x + 1, lead.y), Point::new(lead.x - 1, lead.y))
        } else {
            (Point::new(lead.x, lead.y + 1), Point::new(lead.x, lead.y - 1))
        };

        let mut left = self.capture_mask();
        let mut right = left.clone();
        left.flood_fill(left_seed.x, left_seed.y);
        right.flood_fill(right_seed.x, right_seed.y);
        let (left_count, right_count) = (left.count(), right.count());
        debug!(left_count, right_count, %exit, %lead, "sized both sides of wire");

        let side = if left_count <= right_count {
            Side::Left
        } else {
            Side::Right
        };
        let chosen = match side {
            Side::Left => left,
            Side::Right => right,
        };
        for (cell, captured) in self.cells.iter_mut().zip(chosen.into_bits()) {
            if captured {
                cell.capture();
            }
        }

        self.compute_perimeter();
        self.wire.clear();

        let outcome = CaptureOutcome {
            side,
            claimed: self.captured_count() - before,
            percentage: self.capture_percentage(),
        };
        info!(
            side = %outcome.side,
            claimed = outcome.claimed,
            percentage = outcome.percentage,
            "captured region"
        );
        Ok(outcome)
    }
}

impl fmt::Display for TerritoryMap {
    /// `#` captured, `.` open, `+` wire.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size as i32;
        for y in 0..n {
            for x in 0..n {
                if self.wire.contains(Point::new(x, y)) {
                    f.write_str("+")?;
                } else {
                    write!(f, "{}", self.cell(x, y))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
