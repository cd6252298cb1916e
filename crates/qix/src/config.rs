//! Game configuration. Every field has a default, so a partial JSON
//! document (or `{}`) is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest grid that still has an interior to cut into.
pub const MIN_SIZE: usize = 5;
/// Largest grid; keeps `size²` and every coordinate well inside `i32`.
pub const MAX_SIZE: usize = 4096;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {size} is below the minimum of {min}")]
    GridTooSmall { size: usize, min: usize },
    #[error("grid size {size} is above the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
    #[error("goal {0}% is outside 1..=100")]
    GoalOutOfRange(u32),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
    pub lives: u32,
    /// Capture percentage needed to clear the first level.
    pub starting_goal: u32,
    pub goal_step: u32,
    /// The goal keeps stepping up only while it is at or below this.
    pub goal_ceiling: u32,
    /// Level `n` spawns `n` Sparx.
    pub starting_level: u32,
    /// One-in-N chance per Qix move of a new random heading.
    pub qix_turn_chance: u32,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 25,
            lives: 3,
            starting_goal: 60,
            goal_step: 5,
            goal_ceiling: 85,
            starting_level: 1,
            qix_turn_chance: 6,
            seed: 0,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.size,
                min: MIN_SIZE,
            });
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        for (field, value) in [
            ("lives", self.lives),
            ("starting_level", self.starting_level),
            ("qix_turn_chance", self.qix_turn_chance),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }
        if !(1..=100).contains(&self.starting_goal) {
            return Err(ConfigError::GoalOutOfRange(self.starting_goal));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Goal for the level after one with goal `current`. Never exceeds 100.
    #[must_use]
    pub fn next_goal(&self, current: u32) -> u32 {
        if current <= self.goal_ceiling {
            (current + self.goal_step).min(100)
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.size, 25);
        assert_eq!(config.lives, 3);
        assert_eq!(config.starting_goal, 60);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "size": 40, "seed": 9 }"#).unwrap();
        assert_eq!(config.size, 40);
        assert_eq!(config.seed, 9);
        assert_eq!(config.lives, 3);
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "size": 4 }"#),
            Err(ConfigError::GridTooSmall { size: 4, .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "size": 5000 }"#),
            Err(ConfigError::GridTooLarge { size: 5000, .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "lives": 0 }"#),
            Err(ConfigError::Zero { field: "lives" })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "starting_goal": 101 }"#),
            Err(ConfigError::GoalOutOfRange(101))
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = GameConfig::from_json(r#"{ "qix_turn_chance": 0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "qix_turn_chance must be at least 1");
    }

    #[test]
    fn goal_steps_until_ceiling() {
        let config = GameConfig::default();
        assert_eq!(config.next_goal(60), 65);
        assert_eq!(config.next_goal(85), 90);
        assert_eq!(config.next_goal(90), 90);
    }

    proptest! {
        #[test]
        fn prop_small_grids_are_rejected(size in 0usize..MIN_SIZE, lives in 1u32..10) {
            let config = GameConfig { size, lives, ..GameConfig::default() };
            let rejected = matches!(config.validate(), Err(ConfigError::GridTooSmall { .. }));
            prop_assert!(rejected);
        }

        #[test]
        fn prop_huge_grids_are_rejected(size in (MAX_SIZE + 1)..usize::MAX) {
            let config = GameConfig { size, ..GameConfig::default() };
            let rejected = matches!(config.validate(), Err(ConfigError::GridTooLarge { .. }));
            prop_assert!(rejected);
        }

        #[test]
        fn prop_sizes_in_range_are_accepted(size in MIN_SIZE..=MAX_SIZE) {
            let config = GameConfig { size, ..GameConfig::default() };
            prop_assert!(config.validate().is_ok());
        }

        #[test]
        fn prop_next_goal_never_exceeds_100(current in 0u32..=100, step in 0u32..50) {
            let config = GameConfig { goal_step: step, goal_ceiling: 100, ..GameConfig::default() };
            prop_assert!(config.next_goal(current) <= 100);
            prop_assert!(config.next_goal(current) >= current);
        }
    }
}
