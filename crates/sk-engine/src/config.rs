//! Configuration for turn resolution.

/// Damage multiplier applied to an attack against a defending target.
pub const DEFEND_MODIFIER: f64 = 0.5;

/// Configuration for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible battles. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Multiplier applied to damage dealt to a defender.
    pub defend_modifier: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            defend_modifier: DEFEND_MODIFIER,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the defend damage multiplier (clamped to 0.0-1.0).
    pub fn with_defend_modifier(mut self, modifier: f64) -> Self {
        self.defend_modifier = modifier.clamp(0.0, 1.0);
        self
    }
}
