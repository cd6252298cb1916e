//! Sparx: patrols the perimeter, turning at corners.

use crate::api::EntityApi;
use crate::cell::Point;
use crate::map::TerritoryMap;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Sparx {
    pub pos: Point,
    /// Single-axis unit step.
    pub velocity: Point,
}

impl Sparx {
    #[must_use]
    pub fn new(pos: Point, clockwise: bool) -> Self {
        let dx = if clockwise { 1 } else { -1 };
        Self {
            pos,
            velocity: Point::new(dx, 0),
        }
    }
}

/// Continue if possible, otherwise turn (up before down when travelling
/// horizontally, left before right when vertically), otherwise reverse.
pub fn move_sparx(sparx: &mut Sparx, map: &TerritoryMap) {
    let Some(&first) = map.perimeter().first() else {
        return;
    };
    if !map.is_perimeter(sparx.pos.x, sparx.pos.y) {
        sparx.pos = first;
    }

    let v = sparx.velocity;
    let (preferred, alternate) = if v.x == 0 {
        (Point::new(-1, 0), Point::new(1, 0))
    } else {
        (Point::new(0, -1), Point::new(0, 1))
    };
    let api = EntityApi::new(map, sparx.pos);
    if let Some(step) = [v, preferred, alternate, -v]
        .into_iter()
        .find(|d| api.on_perimeter(d.x, d.y))
    {
        sparx.velocity = step;
        sparx.pos = sparx.pos + step;
    }
}
