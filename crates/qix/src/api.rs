//! Relative-offset, read-only view of the map for hazard movement rules.

use crate::cell::Point;
use crate::map::TerritoryMap;

/// Offsets are relative to the entity's current position. Out-of-bounds
/// reads are captured and never on the perimeter.
#[derive(Debug, Clone, Copy)]
pub struct EntityApi<'a> {
    pub map: &'a TerritoryMap,
    pub x: i32,
    pub y: i32,
}

impl<'a> EntityApi<'a> {
    #[must_use]
    pub fn new(map: &'a TerritoryMap, at: Point) -> Self {
        Self {
            map,
            x: at.x,
            y: at.y,
        }
    }

    #[must_use]
    pub fn captured(&self, dx: i32, dy: i32) -> bool {
        self.map.is_captured(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn on_perimeter(&self, dx: i32, dy: i32) -> bool {
        self.map.is_perimeter(self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reads_relative_to_position() {
        let map = TerritoryMap::new(5);
        let api = EntityApi::new(&map, Point::new(1, 1));
        assert!(!api.captured(0, 0));
        assert!(api.captured(-1, 0));
        assert!(api.on_perimeter(0, -1));
        assert!(!api.on_perimeter(1, 1));
    }

    proptest! {
        #[test]
        fn prop_api_matches_map(
            x in 0i32..12,
            y in 0i32..12,
            dx in -20i32..20,
            dy in -20i32..20,
        ) {
            let map = TerritoryMap::new(12);
            let api = EntityApi::new(&map, Point::new(x, y));
            prop_assert_eq!(api.captured(dx, dy), map.is_captured(x + dx, y + dy));
            prop_assert_eq!(api.on_perimeter(dx, dy), map.is_perimeter(x + dx, y + dy));
        }
    }
}
