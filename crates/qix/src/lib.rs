//! Territory-capture arcade engine.
//!
//! The player cuts wire through open territory; closing a wire claims the
//! smaller of the two regions it separates. A Qix roams the open field and
//! Sparx patrol the claimed border.

pub mod api;
pub mod cell;
pub mod config;
pub mod entities;
pub mod fill;
pub mod input;
pub mod map;
pub mod round;
pub mod wire;

use config::GameConfig;
use input::Input;
use round::{Round, Status};
use wasm_bindgen::prelude::*;

/// Browser-facing handle around a [`Round`].
#[wasm_bindgen]
#[derive(Debug)]
pub struct Game {
    round: Round,
}

#[wasm_bindgen]
impl Game {
    /// Default configuration with the given seed.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<Game, JsError> {
        let config = GameConfig {
            seed,
            ..GameConfig::default()
        };
        Ok(Self {
            round: Round::new(config)?,
        })
    }

    /// Builds a game from a JSON [`GameConfig`]; missing fields take defaults.
    pub fn with_config(json: &str) -> Result<Game, JsError> {
        let config = GameConfig::from_json(json)?;
        Ok(Self {
            round: Round::new(config)?,
        })
    }

    /// Advances one frame. Returns a bitmask: 1 capture, 2 life lost,
    /// 4 level won, 8 game over.
    pub fn tick(&mut self, input_bits: u8) -> u8 {
        let report = self.round.tick(Input::from_bits(input_bits));
        u8::from(report.capture.is_some())
            | (u8::from(report.life_lost) << 1)
            | (u8::from(report.level_won) << 2)
            | (u8::from(report.game_over) << 3)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.round.map().size()
    }

    /// Row-major captured flags, one byte per cell.
    #[must_use]
    pub fn captured_cells(&self) -> Vec<u8> {
        self.round.map().captured_bytes()
    }

    /// Flattened `x, y` pairs of the active wire.
    #[must_use]
    pub fn wire_cells(&self) -> Vec<i32> {
        self.round
            .map()
            .wire()
            .points()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }

    /// Flattened `kind, x, y` triples, player first.
    #[must_use]
    pub fn entity_positions(&self) -> Vec<i32> {
        self.round
            .entities()
            .into_iter()
            .flat_map(|(kind, p)| [i32::from(kind as u8), p.x, p.y])
            .collect()
    }

    #[must_use]
    pub fn capture_percentage(&self) -> u32 {
        self.round.map().capture_percentage()
    }

    #[must_use]
    pub fn goal(&self) -> u32 {
        self.round.goal()
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.round.lives()
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.round.level()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.round.score()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.round.status() == Status::GameOver
    }
}
