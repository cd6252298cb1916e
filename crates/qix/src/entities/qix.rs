//! Qix: roams open territory diagonally, bouncing off claimed cells.

use rand::Rng;

use crate::api::EntityApi;
use crate::cell::Point;
use crate::map::TerritoryMap;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Qix {
    pub pos: Point,
    /// Always `(±1, ±1)`.
    pub velocity: Point,
    /// One-in-N chance per move of picking a fresh heading.
    pub turn_chance: u32,
}

impl Qix {
    #[must_use]
    pub fn new<R: Rng + ?Sized>(pos: Point, turn_chance: u32, rng: &mut R) -> Self {
        Self {
            pos,
            velocity: random_diagonal(rng),
            turn_chance: turn_chance.max(1),
        }
    }
}

pub fn random_diagonal<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let mut unit = || if rng.gen_bool(0.5) { 1 } else { -1 };
    let x = unit();
    Point::new(x, unit())
}

pub fn move_qix<R: Rng + ?Sized>(qix: &mut Qix, map: &TerritoryMap, rng: &mut R) {
    // Occasionally pick a fresh heading
    if rng.gen_ratio(1, qix.turn_chance.max(1)) {
        qix.velocity = random_diagonal(rng);
    }
    // A capture may have closed over it
    relocate_if_captured(qix, map);

    // Bounce each axis off claimed cells
    let api = EntityApi::new(map, qix.pos);
    if api.captured(qix.velocity.x, 0) {
        qix.velocity.x = -qix.velocity.x;
    }
    if api.captured(0, qix.velocity.y) {
        qix.velocity.y = -qix.velocity.y;
    }
    qix.pos = qix.pos + qix.velocity;

    // Diagonal corners and one-wide gaps can still put it on a claimed cell.
    relocate_if_captured(qix, map);
}

fn relocate_if_captured(qix: &mut Qix, map: &TerritoryMap) {
    if !map.is_captured(qix.pos.x, qix.pos.y) {
        return;
    }
    if let Some(open) = map.first_uncaptured() {
        qix.pos = open;
    }
}
