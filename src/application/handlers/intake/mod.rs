//! Intake handlers.

mod submit_life_context;

pub use submit_life_context::{SubmitLifeContextCommand, SubmitLifeContextHandler};
