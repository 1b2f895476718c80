//! Random decisions made during a turn.
//!
//! The engine never touches an RNG directly. It asks a [`Decider`] for the
//! enemy's action, for each dodge roll, and for the turn-order coin flip
//! when nobody holds priority. [`RandomDecider`] answers from a seeded
//! [`StdRng`]; [`ScriptedDecider`] replays fixed answers for tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sk_core::{Action, Combatant, Enemy};

use crate::config::EngineConfig;

/// Source of every random outcome in a turn.
pub trait Decider {
    /// Pick the action an enemy takes this turn.
    fn choose_enemy_action(&mut self, enemy: &Enemy) -> Action;

    /// Roll whether a combatant's dodge succeeds.
    fn attempt_dodge(&mut self, combatant: &Combatant) -> bool;

    /// Coin flip deciding turn order when priority is neutral.
    fn player_moves_first(&mut self) -> bool;
}

impl<D: Decider + ?Sized> Decider for &mut D {
    fn choose_enemy_action(&mut self, enemy: &Enemy) -> Action {
        (**self).choose_enemy_action(enemy)
    }

    fn attempt_dodge(&mut self, combatant: &Combatant) -> bool {
        (**self).attempt_dodge(combatant)
    }

    fn player_moves_first(&mut self) -> bool {
        (**self).player_moves_first()
    }
}

/// Draw an enemy action from its archetype's distribution.
pub fn choose_enemy_action<R: Rng>(rng: &mut R, enemy: &Enemy) -> Action {
    let sample: f64 = rng.random();
    enemy.archetype.weights.pick(sample)
}

/// Bernoulli draw against the combatant's own dodge chance.
pub fn attempt_dodge<R: Rng>(rng: &mut R, combatant: &Combatant) -> bool {
    rng.random::<f64>() < combatant.dodge_chance
}

/// A [`Decider`] backed by a pseudo-random generator.
#[derive(Debug, Clone)]
pub struct RandomDecider {
    rng: StdRng,
}

impl RandomDecider {
    /// Create a decider from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a decider seeded from OS entropy.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a decider from engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os(),
        }
    }
}

impl Decider for RandomDecider {
    fn choose_enemy_action(&mut self, enemy: &Enemy) -> Action {
        choose_enemy_action(&mut self.rng, enemy)
    }

    fn attempt_dodge(&mut self, combatant: &Combatant) -> bool {
        attempt_dodge(&mut self.rng, combatant)
    }

    fn player_moves_first(&mut self) -> bool {
        self.rng.random::<f64>() < 0.5
    }
}

/// A [`Decider`] that replays queued answers.
///
/// When a queue runs dry it falls back to `Attack`, a failed dodge, and
/// the player moving first.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecider {
    actions: VecDeque<Action>,
    dodges: VecDeque<bool>,
    flips: VecDeque<bool>,
}

impl ScriptedDecider {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue enemy actions, consumed one per turn.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Queue dodge outcomes, consumed one per roll in roll order.
    pub fn with_dodges(mut self, dodges: impl IntoIterator<Item = bool>) -> Self {
        self.dodges.extend(dodges);
        self
    }

    /// Queue turn-order coin flips (`true` = player first).
    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    /// Number of dodge outcomes not yet consumed.
    pub fn remaining_dodges(&self) -> usize {
        self.dodges.len()
    }

    /// Number of coin flips not yet consumed.
    pub fn remaining_flips(&self) -> usize {
        self.flips.len()
    }
}

impl Decider for ScriptedDecider {
    fn choose_enemy_action(&mut self, _enemy: &Enemy) -> Action {
        self.actions.pop_front().unwrap_or(Action::Attack)
    }

    fn attempt_dodge(&mut self, _combatant: &Combatant) -> bool {
        self.dodges.pop_front().unwrap_or(false)
    }

    fn player_moves_first(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(true)
    }
}
