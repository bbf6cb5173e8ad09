use crate::character::{BattleResult, Character};
use crate::economy::LedgerError;
use rand::Rng;

/// A generated adversary. Exists only for the duration of one duel and is
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Opponent {
    pub name: String,
    pub attack: f64,
    pub defense: f64,
}

impl Opponent {
    pub fn total_power(&self) -> f64 {
        self.attack + self.defense
    }
}

/// Everything a resolved duel produced: the settled snapshot, the record
/// that went into the match history, and the opponent for display.
#[derive(Debug, Clone)]
pub struct DuelOutcome {
    pub character: Character,
    pub result: BattleResult,
    pub opponent: Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelPhase {
    Idle,
    InProgress,
    Resolved,
}

/// Drives one duel from the UI's point of view. `begin` settles the
/// outcome immediately (fee, reward, history, win/loss counters all
/// final); the session then hands out narration lines one at a time and
/// flips to `Resolved` when they run out.
#[derive(Debug)]
pub struct DuelSession {
    phase: DuelPhase,
    outcome: Option<DuelOutcome>,
    cursor: usize,
}

impl DuelSession {
    pub fn new() -> Self {
        Self {
            phase: DuelPhase::Idle,
            outcome: None,
            cursor: 0,
        }
    }

    pub fn phase(&self) -> DuelPhase {
        self.phase
    }

    /// Resolves the duel from an idle session. Returns the outcome whose
    /// `character` is the settled snapshot the caller must adopt before
    /// playing any narration.
    pub fn begin<R: Rng>(
        &mut self,
        character: &Character,
        rng: &mut R,
        now: i64,
    ) -> Result<&DuelOutcome, LedgerError> {
        assert_eq!(self.phase, DuelPhase::Idle, "duel already started");
        let outcome = super::logic::resolve(character, rng, now)?;
        self.phase = DuelPhase::InProgress;
        self.outcome = Some(outcome);
        Ok(self.outcome.as_ref().expect("just set"))
    }

    /// Next narration line, or `None` once the log is exhausted (which
    /// moves the session to `Resolved`).
    pub fn next_line(&mut self) -> Option<&str> {
        let len = self.outcome.as_ref()?.result.log.len();
        if self.cursor < len {
            let idx = self.cursor;
            self.cursor += 1;
            Some(self.outcome.as_ref().expect("checked above").result.log[idx].as_str())
        } else {
            self.phase = DuelPhase::Resolved;
            None
        }
    }

    /// The settled record, available from the moment `begin` returns.
    pub fn result(&self) -> Option<&BattleResult> {
        self.outcome.as_ref().map(|o| &o.result)
    }
}

impl Default for DuelSession {
    fn default() -> Self {
        Self::new()
    }
}
