//! Per-tick control snapshot.

use crate::cell::Point;

pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 1 << 1;
pub const UP: u8 = 1 << 2;
pub const DOWN: u8 = 1 << 3;
pub const PUSH: u8 = 1 << 4;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub fn delta(self) -> Point {
        match self {
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Input {
    pub direction: Option<Direction>,
    pub push: bool,
}

impl Input {
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn moving(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            push: false,
        }
    }

    #[must_use]
    pub fn pushing(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            push: true,
        }
    }

    /// Decodes host key bits. When several directions are held the first of
    /// left, right, up, down wins.
    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        let direction = [
            (LEFT, Direction::Left),
            (RIGHT, Direction::Right),
            (UP, Direction::Up),
            (DOWN, Direction::Down),
        ]
        .into_iter()
        .find(|&(mask, _)| bits & mask != 0)
        .map(|(_, d)| d);
        Self {
            direction,
            push: bits & PUSH != 0,
        }
    }
}
