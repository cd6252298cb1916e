//! Round controller: tick order, collisions, lives and level progression.
//!
//! Per tick the player moves first. Hazards move on every other tick,
//! starting with the first, so the player is effectively twice as fast.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::cell::Point;
use crate::config::{ConfigError, GameConfig};
use crate::entities::{
    move_hazard, move_player, settle_on_perimeter, EntityKind, Hazard, Player, Qix, Sparx,
};
use crate::input::Input;
use crate::map::{CaptureOutcome, TerritoryMap};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Status {
    Playing,
    GameOver,
}

/// What happened during one tick, for the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickReport {
    pub capture: Option<CaptureOutcome>,
    pub life_lost: bool,
    pub level_won: bool,
    pub game_over: bool,
}

#[derive(Debug)]
pub struct Round {
    config: GameConfig,
    rng: ChaCha8Rng,
    map: TerritoryMap,
    player: Player,
    hazards: Vec<Hazard>,
    lives: u32,
    level: u32,
    goal: u32,
    score: u64,
    ticks: u64,
    status: Status,
}

impl Round {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = config.size;
        let mut round = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            map: TerritoryMap::new(size),
            player: Player::new(Point::default()),
            hazards: Vec::new(),
            lives: config.lives,
            level: config.starting_level,
            goal: config.starting_goal,
            score: 0,
            ticks: 0,
            status: Status::Playing,
            config,
        };
        round.set_up_level();
        Ok(round)
    }

    #[must_use]
    pub fn map(&self) -> &TerritoryMap {
        &self.map
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn goal(&self) -> u32 {
        self.goal
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Player first, then hazards in spawn order.
    #[must_use]
    pub fn entities(&self) -> Vec<(EntityKind, Point)> {
        std::iter::once((EntityKind::Player, self.player.pos))
            .chain(self.hazards.iter().map(|h| (h.kind(), h.position())))
            .collect()
    }

    pub fn tick(&mut self, input: Input) -> TickReport {
        let mut report = TickReport::default();
        if self.status == Status::GameOver {
            return report;
        }
        self.ticks += 1;

        report.capture = move_player(&mut self.player, &mut self.map, input);
        if let Some(capture) = report.capture {
            self.score += capture.claimed as u64;
            if capture.percentage >= self.goal {
                self.win_level();
                report.level_won = true;
                return report;
            }
        }
        if self.player_hit() {
            self.lose_life(&mut report);
            return report;
        }

        if self.ticks % 2 == 1 {
            for hazard in &mut self.hazards {
                move_hazard(hazard, &self.map, &mut self.rng);
            }
            if self.player_hit() {
                self.lose_life(&mut report);
            }
        }
        report
    }

    fn player_hit(&self) -> bool {
        self.hazards.iter().any(|h| h.position() == self.player.pos)
    }

    fn set_up_level(&mut self) {
        self.map = TerritoryMap::new(self.config.size);
        let size = self.config.size as i32;
        self.player = Player::new(Point::new(size / 2, size - 1));
        settle_on_perimeter(&mut self.player, &self.map);
        self.spawn_hazards();
        info!(
            level = self.level,
            goal = self.goal,
            lives = self.lives,
            sparx = self.level,
            "level set up"
        );
    }

    /// Qix somewhere open, `level` Sparx on the perimeter away from the player.
    fn spawn_hazards(&mut self) {
        let size = self.config.size as i32;
        let guess = Point::new(
            self.rng.gen_range(1..size - 1),
            self.rng.gen_range(1..size - 1),
        );
        let qix_pos = if self.map.is_captured(guess.x, guess.y) {
            self.map.first_uncaptured().unwrap_or(guess)
        } else {
            guess
        };
        let qix = Qix::new(qix_pos, self.config.qix_turn_chance, &mut self.rng);

        let player = self.player.pos;
        let mut lanes: Vec<Point> = self
            .map
            .perimeter()
            .iter()
            .copied()
            .filter(|&p| p != player)
            .collect();
        if lanes.is_empty() {
            lanes = self.map.perimeter().to_vec();
        }

        self.hazards.clear();
        self.hazards.push(Hazard::Qix(qix));
        for i in 0..self.level {
            let Some(&at) = lanes.choose(&mut self.rng) else {
                break;
            };
            self.hazards.push(Hazard::Sparx(Sparx::new(at, i % 2 == 0)));
        }
    }

    fn win_level(&mut self) {
        info!(
            level = self.level,
            percentage = self.map.capture_percentage(),
            score = self.score,
            "level cleared"
        );
        self.level += 1;
        self.goal = self.config.next_goal(self.goal);
        self.set_up_level();
    }

    fn lose_life(&mut self, report: &mut TickReport) {
        self.lives = self.lives.saturating_sub(1);
        report.life_lost = true;
        if let Some(origin) = self.map.abandon_wire() {
            self.player.pos = origin;
        }
        settle_on_perimeter(&mut self.player, &self.map);
        if self.lives == 0 {
            self.status = Status::GameOver;
            report.game_over = true;
            warn!(level = self.level, score = self.score, "game over");
            return;
        }
        info!(lives = self.lives, at = %self.player.pos, "life lost");
        self.spawn_hazards();
    }
}
