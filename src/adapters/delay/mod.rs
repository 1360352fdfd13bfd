//! Generation delay adapters.
//!
//! - `TokioGenerationDelay` - sleeps on the tokio timer
//! - `ImmediateGenerationDelay` - returns at once (tests, delay disabled)

use async_trait::async_trait;
use std::time::Duration;

use crate::ports::GenerationDelay;

/// Sleeps for a fixed duration before a generated plan is returned.
#[derive(Debug, Clone, Copy)]
pub struct TokioGenerationDelay {
    duration: Duration,
}

impl TokioGenerationDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl GenerationDelay for TokioGenerationDelay {
    fn duration(&self) -> Duration {
        self.duration
    }

    async fn wait(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

/// No pause at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateGenerationDelay;

#[async_trait]
impl GenerationDelay for ImmediateGenerationDelay {
    fn duration(&self) -> Duration {
        Duration::ZERO
    }

    async fn wait(&self) {}
}
