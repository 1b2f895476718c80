use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::archetype::Archetype;
use crate::error::{CoreError, CoreResult};

/// Dodge chance used when a combatant does not specify one.
pub const DEFAULT_DODGE_CHANCE: f64 = 0.5;

fn default_dodge_chance() -> f64 {
    DEFAULT_DODGE_CHANCE
}

fn check_dodge_chance(chance: f64) -> CoreResult<f64> {
    if (0.0..=1.0).contains(&chance) {
        Ok(chance)
    } else {
        Err(CoreError::InvalidDodgeChance(chance))
    }
}

fn deserialize_dodge_chance<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    let chance = f64::deserialize(de)?;
    check_dodge_chance(chance).map_err(serde::de::Error::custom)
}

/// The stats and identity every fighter carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name, used in every log line.
    pub name: String,
    /// Remaining health. Zero means dead.
    pub health: u32,
    /// Raw attack strength.
    pub power: i32,
    /// Subtracted from incoming attack power.
    pub defense: i32,
    /// Probability in [0, 1] that a dodge attempt succeeds.
    #[serde(
        default = "default_dodge_chance",
        deserialize_with = "deserialize_dodge_chance"
    )]
    pub dodge_chance: f64,
}

impl Combatant {
    /// Create a combatant with the default dodge chance.
    pub fn new(name: impl Into<String>, health: u32, power: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            health,
            power,
            defense,
            dodge_chance: DEFAULT_DODGE_CHANCE,
        }
    }

    /// Set the dodge chance. Fails unless it lies in [0, 1].
    pub fn with_dodge_chance(mut self, chance: f64) -> CoreResult<Self> {
        self.dodge_chance = check_dodge_chance(chance)?;
        Ok(self)
    }

    /// A combatant is dead exactly when its health is zero.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Subtract `amount` from health, flooring at zero.
    ///
    /// A negative amount raises health; no ceiling applies. Returns the new
    /// health.
    pub fn take_damage(&mut self, amount: i64) -> u32 {
        let next = (i64::from(self.health) - amount).clamp(0, i64::from(u32::MAX));
        self.health = u32::try_from(next).unwrap_or(u32::MAX);
        self.health
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (hp {}, pow {}, def {})",
            self.name, self.health, self.power, self.defense
        )
    }
}

/// An opposing combatant together with the archetype that drives its choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// The enemy's stats.
    #[serde(flatten)]
    pub combatant: Combatant,
    /// The action distribution this enemy draws from.
    #[serde(default)]
    pub archetype: Archetype,
}

impl Enemy {
    /// Pair a combatant with an archetype.
    pub fn new(combatant: Combatant, archetype: Archetype) -> Self {
        Self {
            combatant,
            archetype,
        }
    }

    /// Display name of the enemy.
    pub fn name(&self) -> &str {
        &self.combatant.name
    }

    /// Returns true if the enemy's health is zero.
    pub fn is_dead(&self) -> bool {
        self.combatant.is_dead()
    }
}
