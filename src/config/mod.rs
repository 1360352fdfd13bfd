//! Runtime settings.
//!
//! Everything comes from `CAREFIT__<SECTION>__<KEY>` environment variables,
//! optionally seeded from a `.env` file. Every key has a default, so an empty
//! environment yields a working development server:
//!
//! | variable                                   | default |
//! |--------------------------------------------|---------|
//! | `CAREFIT__SERVER__PORT`                    | `8080`  |
//! | `CAREFIT__SERVER__ENVIRONMENT`             | `development` |
//! | `CAREFIT__SERVER__CORS_ORIGINS`            | unset   |
//! | `CAREFIT__CARE_PLAN__GENERATION_DELAY_MS`  | `2500`  |
//! | `CAREFIT__FEATURES__SEED_FIXTURES`         | `true`  |

mod care_plan;
mod error;
mod features;
mod server;

pub use care_plan::{CarePlanConfig, MAX_GENERATION_DELAY_MS};
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};

use serde::Deserialize;

const ENV_PREFIX: &str = "CAREFIT";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub care_plan: CarePlanConfig,
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads `.env` (if any) and then the process environment.
    ///
    /// Values are parsed but not checked; call [`AppConfig::validate`] next.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::Source(config::ConfigError::Foreign(Box::new(e))));
            }
        }

        let source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true);

        Ok(config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?)
    }

    /// Checks each section, then that a generated plan can be returned
    /// before the request times out.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.care_plan.validate()?;

        if self.care_plan.generation_delay() >= self.server.request_timeout() {
            return Err(ValidationError::GenerationDelayExceedsTimeout);
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
