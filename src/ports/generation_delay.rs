//! Generation delay port.
//!
//! Care-plan generation pauses before returning so the doctor sees the plan
//! being "prepared". The pause has no effect on the generated text and
//! cannot fail.

use async_trait::async_trait;
use std::time::Duration;

/// Pause applied before a generated care plan is returned.
#[async_trait]
pub trait GenerationDelay: Send + Sync {
    /// Configured pause length.
    fn duration(&self) -> Duration;

    /// Wait for the configured pause.
    async fn wait(&self);
}
