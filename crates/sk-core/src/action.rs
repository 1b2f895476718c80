use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// What a combatant does on its turn.
///
/// `Spell` is part of the action set but has no mechanical effect; it only
/// produces flavor text when resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Strike the opponent for `power - defense` damage.
    Attack,
    /// Brace to halve incoming attack damage.
    Defend,
    /// Try to evade, winning priority on success.
    Dodge,
    /// Cast a spell. No effect.
    Spell,
}

impl Action {
    /// All actions in distribution order (attack, defend, dodge, spell).
    pub const ALL: [Action; 4] = [Self::Attack, Self::Defend, Self::Dodge, Self::Spell];

    /// Parse an action name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "attack" | "atk" => Ok(Self::Attack),
            "defend" | "def" => Ok(Self::Defend),
            "dodge" => Ok(Self::Dodge),
            "spell" | "cast" => Ok(Self::Spell),
            _ => Err(CoreError::UnknownAction(s.to_string())),
        }
    }

    /// Position of this action within [`Action::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Attack => 0,
            Self::Defend => 1,
            Self::Dodge => 2,
            Self::Spell => 3,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack => write!(f, "ATTACK"),
            Self::Defend => write!(f, "DEFEND"),
            Self::Dodge => write!(f, "DODGE"),
            Self::Spell => write!(f, "SPELL"),
        }
    }
}

impl std::str::FromStr for Action {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One of the two sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The player-controlled combatant.
    Player,
    /// The opposing combatant.
    Enemy,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Enemy => write!(f, "enemy"),
        }
    }
}

/// Which side is guaranteed to move first on the next turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Nobody holds priority; turn order is a coin flip.
    #[default]
    Neutral,
    /// The player moves first.
    Player,
    /// The enemy moves first.
    Enemy,
}

impl Priority {
    /// The side holding priority, if any.
    pub fn holder(self) -> Option<Side> {
        match self {
            Self::Neutral => None,
            Self::Player => Some(Side::Player),
            Self::Enemy => Some(Side::Enemy),
        }
    }

    /// Returns true if nobody holds priority.
    pub fn is_neutral(self) -> bool {
        self == Self::Neutral
    }
}

impl From<Side> for Priority {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Self::Player,
            Side::Enemy => Self::Enemy,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "neutral"),
            Self::Player => write!(f, "player"),
            Self::Enemy => write!(f, "enemy"),
        }
    }
}
