//! The turn orchestrator.
//!
//! A turn draws the enemy's action, settles who moves first, logs both
//! actions, clears priority, runs the resolution table, and finally checks
//! for deaths. Battles that are not ongoing are left untouched.

use tracing::{debug, info};

use sk_core::{Action, Battle, BattleStatus, Priority, Side};

use crate::config::EngineConfig;
use crate::decider::Decider;
use crate::error::{EngineError, EngineResult};
use crate::resolution::{Actor, resolve};

/// What a call to [`perform_turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing happened: the battle is not ongoing or has no living enemy.
    Skipped,
    /// A full exchange was resolved.
    Resolved {
        /// The action the enemy took.
        enemy_action: Action,
        /// Whether the player moved first.
        player_first: bool,
    },
}

/// Resolve one turn with the default configuration.
pub fn perform_turn(
    battle: &mut Battle,
    player_action: Action,
    decider: &mut dyn Decider,
) -> TurnOutcome {
    perform_turn_with(battle, player_action, decider, &EngineConfig::default())
}

/// Resolve one turn of `battle` with the player taking `player_action`.
///
/// Never fails. A battle that is not ongoing, or has no living enemy, is
/// returned unchanged.
pub fn perform_turn_with(
    battle: &mut Battle,
    player_action: Action,
    decider: &mut dyn Decider,
    config: &EngineConfig,
) -> TurnOutcome {
    if !battle.is_ongoing() {
        debug!(
            battle = %battle.id,
            status = %battle.status,
            "turn skipped: battle is not ongoing"
        );
        return TurnOutcome::Skipped;
    }
    let Some(target) = battle.target_index() else {
        debug!(battle = %battle.id, "turn skipped: no living enemy");
        return TurnOutcome::Skipped;
    };

    let enemy_action = decider.choose_enemy_action(&battle.enemies[target]);
    let player_first = match battle.priority.holder() {
        Some(side) => side == Side::Player,
        None => decider.player_moves_first(),
    };
    debug!(
        battle = %battle.id,
        %player_action,
        %enemy_action,
        player_first,
        priority = %battle.priority,
        "resolving turn"
    );

    let Battle {
        player,
        enemies,
        log,
        priority,
        ..
    } = &mut *battle;
    let enemy = &mut enemies[target];

    let player_line = format!("{} uses {}!", player.name, player_action);
    let enemy_line = format!("{} uses {}!", enemy.combatant.name, enemy_action);
    if player_first {
        log.push(player_line);
        log.push(enemy_line);
    } else {
        log.push(enemy_line);
        log.push(player_line);
    }

    *priority = Priority::Neutral;

    let player_actor = Actor::new(Side::Player, player, player_action);
    let enemy_actor = Actor::new(Side::Enemy, &mut enemy.combatant, enemy_action);
    let resolution = if player_first {
        resolve(player_actor, enemy_actor, decider, config.defend_modifier)
    } else {
        resolve(enemy_actor, player_actor, decider, config.defend_modifier)
    };
    log.extend(resolution.lines);
    if let Some(side) = resolution.priority {
        *priority = side.into();
    }

    check_deaths(battle, target);

    TurnOutcome::Resolved {
        enemy_action,
        player_first,
    }
}

/// Turn deaths into defeat, enemy removal, or victory.
fn check_deaths(battle: &mut Battle, target: usize) {
    let enemy_name = battle.enemies[target].name().to_string();

    if battle.player.is_dead() {
        battle
            .log
            .push(format!("{} has killed {}.", enemy_name, battle.player.name));
        battle.log.push("The battle is lost.");
        battle.status = BattleStatus::Defeat;
        info!(battle = %battle.id, "battle lost");
    } else if battle.enemies[target].is_dead() {
        battle
            .log
            .push(format!("{} has killed {}.", battle.player.name, enemy_name));
        battle.enemies.remove(target);
        debug!(
            battle = %battle.id,
            enemy = %enemy_name,
            remaining = battle.enemies.len(),
            "enemy removed"
        );
        if battle.enemies.is_empty() {
            battle
                .log
                .push(format!("{} is victorious!", battle.player.name));
            battle.status = BattleStatus::Victory;
            info!(battle = %battle.id, "battle won");
        }
    }
}

/// Exclusive turn-by-turn access to one ongoing battle.
///
/// Opening a session checks the battle is ongoing; after that each
/// [`perform_turn`](TurnSession::perform_turn) call behaves like the free
/// function, so turns on a battle that has since ended are no-ops.
pub struct TurnSession<'b, D: Decider> {
    battle: &'b mut Battle,
    decider: D,
    config: EngineConfig,
}

impl<'b, D: Decider> TurnSession<'b, D> {
    /// Open a session with the default configuration.
    pub fn new(battle: &'b mut Battle, decider: D) -> EngineResult<Self> {
        Self::with_config(battle, decider, EngineConfig::default())
    }

    /// Open a session with explicit configuration.
    ///
    /// Fails with [`EngineError::InvalidState`] unless the battle is ongoing.
    pub fn with_config(
        battle: &'b mut Battle,
        decider: D,
        config: EngineConfig,
    ) -> EngineResult<Self> {
        if battle.status != BattleStatus::Ongoing {
            return Err(EngineError::InvalidState(battle.status));
        }
        Ok(Self {
            battle,
            decider,
            config,
        })
    }

    /// Resolve one turn with the player taking `action`.
    pub fn perform_turn(&mut self, action: Action) -> TurnOutcome {
        perform_turn_with(self.battle, action, &mut self.decider, &self.config)
    }

    /// The battle as it stands.
    pub fn battle(&self) -> &Battle {
        self.battle
    }

    /// Whether the battle has been decided.
    pub fn is_finished(&self) -> bool {
        self.battle.status.is_terminal()
    }
}
