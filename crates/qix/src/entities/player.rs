//! Player cursor: travels the perimeter, or cuts wire while push is held.

use tracing::{debug, error};

use crate::cell::Point;
use crate::input::Input;
use crate::map::{CaptureOutcome, TerritoryMap};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlayerState {
    Idle,
    Pushing,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Player {
    pub pos: Point,
}

impl Player {
    #[must_use]
    pub fn new(pos: Point) -> Self {
        Self { pos }
    }

    #[must_use]
    pub fn state(&self, map: &TerritoryMap) -> PlayerState {
        if map.wire().is_empty() {
            PlayerState::Idle
        } else {
            PlayerState::Pushing
        }
    }
}

/// Applies one tick of input. Illegal moves leave the player where it is.
///
/// Returns the capture outcome when this move closed the wire.
pub fn move_player(
    player: &mut Player,
    map: &mut TerritoryMap,
    input: Input,
) -> Option<CaptureOutcome> {
    let direction = input.direction?;
    let here = player.pos;
    let target = here + direction.delta();

    // Plain travel stays on the border.
    if !input.push {
        if map.is_perimeter(here.x, here.y) && map.is_perimeter(target.x, target.y) {
            player.pos = target;
        }
        return None;
    }

    // Cut into open territory, never across the wire.
    if !map.is_captured(target.x, target.y) && !map.wire().contains(target) {
        if map.wire().is_empty() {
            if !map.is_captured(here.x, here.y) {
                return None;
            }
            map.push(here.x, here.y);
            debug!(origin = %here, "wire started");
        }
        player.pos = target;
        map.push(target.x, target.y);
        return None;
    }

    // Back onto the border closes the wire.
    if !map.is_captured(here.x, here.y) && map.is_perimeter(target.x, target.y) {
        player.pos = target;
        return match map.capture_field() {
            Ok(outcome) => {
                settle_on_perimeter(player, map);
                Some(outcome)
            }
            Err(err) => {
                error!(%err, "wire closed in an impossible state, dropping it");
                map.abandon_wire();
                None
            }
        };
    }

    // Anything else while pushing is blocked, border travel included.
    None
}

/// Moves the player to the nearest perimeter cell if a capture sealed it in.
pub fn settle_on_perimeter(player: &mut Player, map: &TerritoryMap) {
    if map.is_perimeter(player.pos.x, player.pos.y) {
        return;
    }
    if let Some(p) = map.nearest_perimeter(player.pos) {
        debug!(from = %player.pos, to = %p, "player stranded, moved to perimeter");
        player.pos = p;
    }
}
