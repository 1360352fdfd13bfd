use serde::Deserialize;

/// Switches read once at startup. Both default to on.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Wrap the router in `tower_http::trace::TraceLayer`.
    pub enable_tracing: bool,
    /// Start with the three demo patients instead of an empty store.
    pub seed_fixtures: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_tracing: true,
            seed_fixtures: true,
        }
    }
}
