//! Care-plan generation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest pause allowed before a generated plan is returned.
pub const MAX_GENERATION_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct CarePlanConfig {
    /// Pause before a generated plan is returned, in milliseconds. 0 disables it.
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,
}

impl CarePlanConfig {
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn delay_enabled(&self) -> bool {
        self.generation_delay_ms > 0
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.generation_delay_ms > MAX_GENERATION_DELAY_MS {
            return Err(ValidationError::GenerationDelayTooLong {
                max_ms: MAX_GENERATION_DELAY_MS,
            });
        }
        Ok(())
    }
}

impl Default for CarePlanConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: default_generation_delay_ms(),
        }
    }
}

fn default_generation_delay_ms() -> u64 {
    2500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_two_and_a_half_seconds() {
        let config = CarePlanConfig::default();
        assert_eq!(config.generation_delay(), Duration::from_millis(2500));
        assert!(config.delay_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_disables_delay() {
        let config = CarePlanConfig {
            generation_delay_ms: 0,
        };
        assert!(!config.delay_enabled());
    }

    #[test]
    fn overly_long_delay_is_rejected() {
        let config = CarePlanConfig {
            generation_delay_ms: 60_000,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::GenerationDelayTooLong { max_ms: 10_000 })
        );
    }
}
