//! The long-lived owner of character state.
//!
//! Exactly one `Engine` holds the authoritative snapshot. UI actions and
//! timer ticks both funnel through it, so every update is a serialized
//! functional transform over the previous snapshot; wrap the engine in a
//! `Mutex` when a ticker thread shares it with an input loop. Persistence
//! runs after each transition and its failures are logged, never allowed
//! to disturb the simulation.

use crate::character::save::SaveManager;
use crate::character::{Character, House};
use crate::core::actions::{apply_action, Action, ActionEvent};
use crate::economy::LedgerError;
use crate::world::tick::{world_tick, WorldTickEvent};
use rand::Rng;

pub struct Engine<R: Rng> {
    character: Character,
    rng: R,
    save: Option<SaveManager>,
}

impl<R: Rng> Engine<R> {
    pub fn new(character: Character, rng: R) -> Self {
        Self {
            character,
            rng,
            save: None,
        }
    }

    /// Restores the saved character (or starts fresh) and persists every
    /// transition from here on.
    pub fn with_persistence(save: SaveManager, default_name: &str, rng: R) -> Self {
        let character =
            save.load_or_default(|| Character::new(default_name.to_string(), House::default()));
        Self {
            character,
            rng,
            save: Some(save),
        }
    }

    /// The current authoritative snapshot.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Applies a player action at the current wall-clock time.
    pub fn apply(&mut self, action: Action) -> Result<Vec<ActionEvent>, LedgerError> {
        self.apply_at(action, chrono::Utc::now().timestamp())
    }

    /// Applies a player action with an explicit timestamp.
    pub fn apply_at(&mut self, action: Action, now: i64) -> Result<Vec<ActionEvent>, LedgerError> {
        let outcome = apply_action(&self.character, action, &mut self.rng, now)?;
        self.character = outcome.character;
        self.persist();
        Ok(outcome.events)
    }

    /// Advances the world by one tick.
    pub fn tick(&mut self) -> Vec<WorldTickEvent> {
        let outcome = world_tick(&self.character, &mut self.rng);
        self.character = outcome.character;
        self.persist();
        outcome.events
    }

    fn persist(&self) {
        if let Some(save) = &self.save {
            if let Err(e) = save.save(&self.character) {
                log::warn!("failed to persist character: {e}");
            }
        }
    }
}
