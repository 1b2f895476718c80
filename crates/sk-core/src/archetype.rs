use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::{CoreError, CoreResult};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// A probability distribution over the four actions.
///
/// Weights are stored in [`Action::ALL`] order and always sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights", into = "RawWeights")]
pub struct ActionWeights {
    weights: [f64; 4],
}

#[derive(Serialize, Deserialize)]
struct RawWeights {
    attack: f64,
    defend: f64,
    dodge: f64,
    spell: f64,
}

impl TryFrom<RawWeights> for ActionWeights {
    type Error = CoreError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::new(raw.attack, raw.defend, raw.dodge, raw.spell)
    }
}

impl From<ActionWeights> for RawWeights {
    fn from(w: ActionWeights) -> Self {
        let [attack, defend, dodge, spell] = w.weights;
        Self {
            attack,
            defend,
            dodge,
            spell,
        }
    }
}

impl ActionWeights {
    /// Build a distribution from per-action weights.
    ///
    /// Fails unless every weight is in [0, 1] and the weights sum to 1.0.
    pub fn new(attack: f64, defend: f64, dodge: f64, spell: f64) -> CoreResult<Self> {
        let weights = [attack, defend, dodge, spell];
        if let Some(bad) = weights
            .iter()
            .find(|w| !w.is_finite() || **w < 0.0 || **w > 1.0)
        {
            return Err(CoreError::InvalidWeights(format!(
                "weight {bad} is outside [0, 1]"
            )));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(CoreError::InvalidWeights(format!(
                "weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(Self { weights })
    }

    /// Equal probability for every action.
    pub fn uniform() -> Self {
        Self { weights: [0.25; 4] }
    }

    /// The weight assigned to an action.
    pub fn weight(&self, action: Action) -> f64 {
        self.weights[action.index()]
    }

    /// Running totals of the weights, in [`Action::ALL`] order.
    pub fn cumulative(&self) -> [f64; 4] {
        let mut acc = 0.0;
        self.weights.map(|w| {
            acc += w;
            acc
        })
    }

    /// Map a uniform sample in [0, 1) onto an action.
    ///
    /// Returns the first action whose cumulative weight exceeds `sample`.
    /// If float error leaves the sample at or above the final total, the
    /// last action with a nonzero weight is chosen.
    pub fn pick(&self, sample: f64) -> Action {
        for (action, cum) in Action::ALL.iter().zip(self.cumulative()) {
            if sample < cum {
                return *action;
            }
        }
        Action::ALL
            .iter()
            .rev()
            .copied()
            .find(|a| self.weight(*a) > 0.0)
            .unwrap_or(Action::Attack)
    }
}

impl Default for ActionWeights {
    fn default() -> Self {
        Self::uniform()
    }
}

/// A named enemy template with its own action distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    /// Display name of the archetype.
    pub name: String,
    /// How this archetype picks its actions.
    pub weights: ActionWeights,
}

impl Archetype {
    /// Create an archetype from a name and distribution.
    pub fn new(name: impl Into<String>, weights: ActionWeights) -> Self {
        Self {
            name: name.into(),
            weights,
        }
    }

    /// The base enemy: uniform over all four actions, spell included.
    pub fn enemy() -> Self {
        Self::new("Enemy", ActionWeights::uniform())
    }

    /// Goblins favor attacking and never cast.
    pub fn goblin() -> Self {
        Self::new(
            "Goblin",
            ActionWeights {
                weights: [0.5, 0.3, 0.2, 0.0],
            },
        )
    }

    /// Look up a built-in archetype by name (case-insensitive).
    pub fn by_name(name: &str) -> CoreResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "enemy" | "base" => Ok(Self::enemy()),
            "goblin" => Ok(Self::goblin()),
            _ => Err(CoreError::UnknownArchetype(name.to_string())),
        }
    }

    /// Names accepted by [`Archetype::by_name`].
    pub fn builtin_names() -> &'static [&'static str] {
        &["enemy", "goblin"]
    }
}

impl Default for Archetype {
    fn default() -> Self {
        Self::enemy()
    }
}
