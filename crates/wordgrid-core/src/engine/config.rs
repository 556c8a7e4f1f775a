pub use crate::core::models::direction::DirectionSet;
use thiserror::Error;

pub const DEFAULT_ATTEMPT_BUDGET: usize = 100;
pub const DEFAULT_MAX_GROWTH_STEPS: usize = 64;
/// Largest side length any run may reach; applies when `max_size` is unset.
pub const MAX_GRID_SIZE: usize = 1024;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Smallest acceptable side length; `0` lets the engine decide.
    pub min_size: usize,
    /// Random candidates tried per word in one placement pass.
    pub attempt_budget: usize,
    /// How many times the grid may grow before generation gives up.
    pub max_growth_steps: usize,
    /// Upper bound on the side length; `None` falls back to [`MAX_GRID_SIZE`].
    pub max_size: Option<usize>,
    pub directions: DirectionSet,
    /// Seed for the run's generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_size: 0,
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            max_growth_steps: DEFAULT_MAX_GROWTH_STEPS,
            max_size: None,
            directions: DirectionSet::Forward,
            seed: None,
        }
    }
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    min_size: Option<usize>,
    attempt_budget: Option<usize>,
    max_growth_steps: Option<usize>,
    max_size: Option<usize>,
    directions: Option<DirectionSet>,
    seed: Option<u64>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_size(mut self, size: usize) -> Self {
        self.min_size = Some(size);
        self
    }
    pub fn attempt_budget(mut self, attempts: usize) -> Self {
        self.attempt_budget = Some(attempts);
        self
    }
    pub fn max_growth_steps(mut self, steps: usize) -> Self {
        self.max_growth_steps = Some(steps);
        self
    }
    pub fn max_size(mut self, size: Option<usize>) -> Self {
        self.max_size = size;
        self
    }
    pub fn directions(mut self, set: DirectionSet) -> Self {
        self.directions = Some(set);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let defaults = GenerationConfig::default();
        let config = GenerationConfig {
            min_size: self.min_size.unwrap_or(defaults.min_size),
            attempt_budget: self.attempt_budget.unwrap_or(defaults.attempt_budget),
            max_growth_steps: self.max_growth_steps.unwrap_or(defaults.max_growth_steps),
            max_size: self.max_size,
            directions: self.directions.unwrap_or(defaults.directions),
            seed: self.seed,
        };

        if config.attempt_budget == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "attempt_budget",
                reason: "must be at least 1".to_string(),
            });
        }
        if config.min_size > MAX_GRID_SIZE {
            return Err(ConfigError::InvalidValue {
                parameter: "min_size",
                reason: format!("{} exceeds the largest grid size {}", config.min_size, MAX_GRID_SIZE),
            });
        }
        if let Some(max) = config.max_size {
            if max > MAX_GRID_SIZE {
                return Err(ConfigError::InvalidValue {
                    parameter: "max_size",
                    reason: format!("{} exceeds the largest grid size {}", max, MAX_GRID_SIZE),
                });
            }
            if max == 0 {
                return Err(ConfigError::InvalidValue {
                    parameter: "max_size",
                    reason: "must be at least 1".to_string(),
                });
            }
            if max < config.min_size {
                return Err(ConfigError::InvalidValue {
                    parameter: "max_size",
                    reason: format!("{} is smaller than min_size {}", max, config.min_size),
                });
            }
        }
        Ok(config)
    }
}

impl GenerationConfig {
    /// The side length growth may not exceed.
    pub fn size_limit(&self) -> usize {
        self.max_size.unwrap_or(MAX_GRID_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_overrides_matches_default() {
        let config = GenerationConfigBuilder::new().build().unwrap();
        assert_eq!(config, GenerationConfig::default());
        assert_eq!(config.attempt_budget, 100);
        assert_eq!(config.directions, DirectionSet::Forward);
    }

    #[test]
    fn builder_applies_every_override() {
        let config = GenerationConfigBuilder::new()
            .min_size(12)
            .attempt_budget(7)
            .max_growth_steps(3)
            .max_size(Some(20))
            .directions(DirectionSet::WithReversed)
            .seed(Some(42))
            .build()
            .unwrap();
        assert_eq!(config.min_size, 12);
        assert_eq!(config.attempt_budget, 7);
        assert_eq!(config.max_growth_steps, 3);
        assert_eq!(config.max_size, Some(20));
        assert_eq!(config.directions, DirectionSet::WithReversed);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn zero_attempt_budget_is_rejected() {
        let err = GenerationConfigBuilder::new()
            .attempt_budget(0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                parameter: "attempt_budget",
                ..
            }
        ));
    }

    #[test]
    fn max_size_below_min_size_is_rejected() {
        let err = GenerationConfigBuilder::new()
            .min_size(10)
            .max_size(Some(5))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                parameter: "max_size",
                ..
            }
        ));
    }

    #[test]
    fn zero_max_size_is_rejected() {
        assert!(
            GenerationConfigBuilder::new()
                .max_size(Some(0))
                .build()
                .is_err()
        );
    }

    #[test]
    fn oversized_min_size_is_rejected() {
        let err = GenerationConfigBuilder::new()
            .min_size(1 << 33)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                parameter: "min_size",
                ..
            }
        ));
    }

    #[test]
    fn oversized_max_size_is_rejected() {
        let err = GenerationConfigBuilder::new()
            .max_size(Some(MAX_GRID_SIZE + 1))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                parameter: "max_size",
                ..
            }
        ));
    }

    #[test]
    fn size_limit_falls_back_to_largest_grid() {
        assert_eq!(GenerationConfig::default().size_limit(), MAX_GRID_SIZE);
        let config = GenerationConfigBuilder::new()
            .max_size(Some(30))
            .build()
            .unwrap();
        assert_eq!(config.size_limit(), 30);
    }
}
