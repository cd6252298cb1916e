//! Mobile entities and their per-tick movement rules.

mod player;
mod qix;
mod sparx;

pub use player::{move_player, settle_on_perimeter, Player, PlayerState};
pub use qix::{move_qix, random_diagonal, Qix};
pub use sparx::{move_sparx, Sparx};

use std::fmt;

use rand::Rng;

use crate::cell::Point;
use crate::map::TerritoryMap;

/// Discriminant values are what the wasm host receives in position triples.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntityKind {
    Player = 0,
    Qix = 1,
    Sparx = 2,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Qix => write!(f, "Qix"),
            Self::Sparx => write!(f, "Sparx"),
        }
    }
}

/// Autonomous entities. They only ever read the map.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Hazard {
    Qix(Qix),
    Sparx(Sparx),
}

impl Hazard {
    #[must_use]
    pub fn position(&self) -> Point {
        match self {
            Self::Qix(q) => q.pos,
            Self::Sparx(s) => s.pos,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Qix(_) => EntityKind::Qix,
            Self::Sparx(_) => EntityKind::Sparx,
        }
    }
}

/// Dispatch to the hazard's movement rule.
pub fn move_hazard<R: Rng + ?Sized>(hazard: &mut Hazard, map: &TerritoryMap, rng: &mut R) {
    match hazard {
        Hazard::Qix(q) => move_qix(q, map, rng),
        Hazard::Sparx(s) => move_sparx(s, map),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Claims full-height columns, smallest side first, to shrink the field.
    fn carve(map: &mut TerritoryMap, cols: &[i32]) {
        let n = map.size() as i32;
        for &col in cols {
            if map.is_captured(col, 1) {
                continue;
            }
            for y in (1..n).rev() {
                map.push(col, y);
            }
            map.capture_field().unwrap();
        }
    }

    #[test]
    fn kind_discriminants() {
        assert_eq!(EntityKind::Player as u8, 0);
        assert_eq!(EntityKind::Qix as u8, 1);
        assert_eq!(EntityKind::Sparx as u8, 2);
        assert_eq!(format!("{}", EntityKind::Sparx), "Sparx");
    }

    #[test]
    fn dispatch_moves_each_kind() {
        let map = TerritoryMap::new(8);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut hazards = [
            Hazard::Qix(Qix::new(Point::new(4, 4), 6, &mut rng)),
            Hazard::Sparx(Sparx::new(Point::new(3, 7), true)),
        ];
        for h in &mut hazards {
            move_hazard(h, &map, &mut rng);
        }
        assert_eq!(hazards[0].kind(), EntityKind::Qix);
        assert_eq!(hazards[0].position().manhattan(Point::new(4, 4)), 2);
        assert_eq!(hazards[1].position(), Point::new(4, 7));
    }

    proptest! {
        #[test]
        fn prop_qix_ends_every_move_on_open_cell(
            seed in any::<u64>(),
            size in 5usize..20,
            cols in proptest::collection::vec(1i32..19, 0..4),
            x in 1i32..19,
            y in 1i32..19,
        ) {
            let mut map = TerritoryMap::new(size);
            let n = size as i32;
            let cols: Vec<i32> = cols.into_iter().filter(|&c| c < n - 1).collect();
            carve(&mut map, &cols);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut qix = Qix::new(Point::new(x.min(n - 2), y.min(n - 2)), 3, &mut rng);
            for _ in 0..200 {
                move_qix(&mut qix, &map, &mut rng);
                if map.first_uncaptured().is_some() {
                    prop_assert!(!map.is_captured(qix.pos.x, qix.pos.y));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_sparx_stays_on_perimeter(
            size in 5usize..20,
            cols in proptest::collection::vec(1i32..19, 0..4),
            start in any::<prop::sample::Index>(),
            clockwise in any::<bool>(),
        ) {
            let mut map = TerritoryMap::new(size);
            let n = size as i32;
            let cols: Vec<i32> = cols.into_iter().filter(|&c| c < n - 1).collect();
            carve(&mut map, &cols);
            prop_assume!(!map.perimeter().is_empty());
            let origin = map.perimeter()[start.index(map.perimeter().len())];
            let mut sparx = Sparx::new(origin, clockwise);
            for _ in 0..200 {
                move_sparx(&mut sparx, &map);
                prop_assert!(map.is_perimeter(sparx.pos.x, sparx.pos.y));
            }
        }
    }
}
