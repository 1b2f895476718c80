use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::Priority;
use crate::combatant::{Combatant, Enemy};
use crate::error::{CoreError, CoreResult};

/// Unique identifier for a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleId(pub Uuid);

impl BattleId {
    /// Generate a new random battle ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a battle ID from its hyphenated string form.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }
}

impl Default for BattleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a battle is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleStatus {
    /// Set up but not yet begun.
    #[default]
    NotStarted,
    /// Turns may be taken.
    Ongoing,
    /// Every enemy is dead.
    Victory,
    /// The player is dead.
    Defeat,
}

impl BattleStatus {
    /// Returns true once the battle has been decided.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

impl fmt::Display for BattleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NOT_STARTED"),
            Self::Ongoing => write!(f, "ONGOING"),
            Self::Victory => write!(f, "VICTORY"),
            Self::Defeat => write!(f, "DEFEAT"),
        }
    }
}

/// Append-only record of what happened in a battle, one line per event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The last `n` lines (or fewer if the log is shorter).
    pub fn tail(&self, n: usize) -> &[String] {
        &self.lines[self.lines.len().saturating_sub(n)..]
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Extend<String> for BattleLog {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}

/// One player against an ordered list of enemies.
///
/// The engine targets the first living enemy in list order. An enemy is
/// removed from the list when it dies, and the battle is won when the list
/// is empty.
///
/// A document holding only `player` and `enemies` deserializes to a fresh,
/// not-yet-started battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    /// Unique identifier.
    #[serde(default)]
    pub id: BattleId,
    /// The player-controlled combatant.
    pub player: Combatant,
    /// Living opponents, in targeting order.
    pub enemies: Vec<Enemy>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: BattleStatus,
    /// Who moves first next turn.
    #[serde(default)]
    pub priority: Priority,
    /// Everything that has happened so far.
    #[serde(default)]
    pub log: BattleLog,
}

impl Battle {
    /// Create a battle that is ready for turns.
    pub fn new(player: Combatant, enemies: Vec<Enemy>) -> Self {
        Self {
            id: BattleId::new(),
            player,
            enemies,
            status: BattleStatus::Ongoing,
            priority: Priority::Neutral,
            log: BattleLog::new(),
        }
    }

    /// Create a battle that must be [`start`](Battle::start)ed before turns.
    pub fn pending(player: Combatant, enemies: Vec<Enemy>) -> Self {
        Self {
            status: BattleStatus::NotStarted,
            ..Self::new(player, enemies)
        }
    }

    /// Move a not-yet-started battle to ongoing.
    pub fn start(&mut self) -> CoreResult<()> {
        self.require(BattleStatus::NotStarted)?;
        self.status = BattleStatus::Ongoing;
        Ok(())
    }

    /// Fail with [`CoreError::InvalidState`] unless the battle has `expected` status.
    pub fn require(&self, expected: BattleStatus) -> CoreResult<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidState {
                expected,
                actual: self.status,
            })
        }
    }

    /// Returns true while turns can still be taken.
    pub fn is_ongoing(&self) -> bool {
        self.status == BattleStatus::Ongoing
    }

    /// Index of the enemy currently being fought: the first living one.
    pub fn target_index(&self) -> Option<usize> {
        self.enemies.iter().position(|e| !e.is_dead())
    }

    /// The enemy currently being fought.
    pub fn target(&self) -> Option<&Enemy> {
        self.target_index().map(|i| &self.enemies[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Archetype;

    fn sample_battle() -> Battle {
        Battle::new(
            Combatant::new("Player", 100, 20, 10),
            vec![Enemy::new(
                Combatant::new("Enemy", 100, 20, 10),
                Archetype::enemy(),
            )],
        )
    }

    #[test]
    fn new_battle_is_ongoing_and_neutral() {
        let battle = sample_battle();
        assert_eq!(battle.status, BattleStatus::Ongoing);
        assert!(battle.priority.is_neutral());
        assert!(battle.log.is_empty());
        assert_eq!(battle.target().unwrap().name(), "Enemy");
    }

    #[test]
    fn target_skips_the_dead() {
        let mut battle = sample_battle();
        battle.enemies.insert(
            0,
            Enemy::new(Combatant::new("Husk", 0, 5, 5), Archetype::enemy()),
        );
        assert_eq!(battle.target_index(), Some(1));
        assert_eq!(battle.target().unwrap().name(), "Enemy");

        battle.enemies[1].combatant.health = 0;
        assert_eq!(battle.target(), None);
    }

    #[test]
    fn setup_document_fills_defaults() {
        let json = r#"{
            "player": {"name": "Aria", "health": 60, "power": 25, "defense": 4},
            "enemies": [{"name": "Troll", "health": 150, "power": 18, "defense": 12}]
        }"#;
        let battle: Battle = serde_json::from_str(json).unwrap();
        assert_eq!(battle.status, BattleStatus::NotStarted);
        assert!(battle.priority.is_neutral());
        assert!(battle.log.is_empty());
        assert_eq!(battle.enemies[0].archetype, Archetype::enemy());
        assert_eq!(battle.player.dodge_chance, 0.5);
    }

    #[test]
    fn pending_battle_starts_once() {
        let mut battle = Battle::pending(Combatant::new("P", 1, 1, 1), Vec::new());
        assert_eq!(battle.status, BattleStatus::NotStarted);
        battle.start().unwrap();
        assert!(battle.is_ongoing());
        assert!(matches!(
            battle.start(),
            Err(CoreError::InvalidState {
                expected: BattleStatus::NotStarted,
                actual: BattleStatus::Ongoing,
            })
        ));
    }

    #[test]
    fn terminal_statuses() {
        assert!(BattleStatus::Victory.is_terminal());
        assert!(BattleStatus::Defeat.is_terminal());
        assert!(!BattleStatus::Ongoing.is_terminal());
        assert!(!BattleStatus::NotStarted.is_terminal());
    }

    #[test]
    fn log_tail() {
        let mut log = BattleLog::new();
        log.push("a");
        log.push("b");
        log.push("c");
        assert_eq!(log.tail(2), ["b", "c"]);
        assert_eq!(log.tail(10).len(), 3);
    }

    #[test]
    fn json_round_trip_preserves_everything() {
        let mut battle = sample_battle();
        battle.priority = Priority::Enemy;
        battle.log.push("Player uses ATTACK!");
        battle.log.push("Enemy uses DODGE!");
        battle.enemies.push(Enemy::new(
            Combatant::new("Goblin", 80, 20, 5),
            Archetype::goblin(),
        ));

        let json = serde_json::to_string(&battle).unwrap();
        let back: Battle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, battle);
    }

    #[test]
    fn json_field_names() {
        let battle = sample_battle();
        let json = serde_json::to_value(&battle).unwrap();
        assert_eq!(json["status"], "ONGOING");
        assert_eq!(json["priority"], "neutral");
        assert!(json["log"].as_array().unwrap().is_empty());
        assert_eq!(json["id"], battle.id.to_string());
    }

    #[test]
    fn battle_id_parse() {
        let id = BattleId::new();
        assert_eq!(BattleId::parse(&id.to_string()), Some(id));
        assert_eq!(BattleId::parse("nope"), None);
    }
}
