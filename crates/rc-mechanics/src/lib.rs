//! Rune casting rules engine for Runecaster.
//!
//! Turns a selection of runes, a base die, and a magic value into a mana
//! cost, a die-size escalation, and a readable progression of dice pools.
//! The resulting pool is resolved with an exploding-dice roll that keeps a
//! full audit trail of every draw.

pub mod config;
pub mod cost;
pub mod dice;
pub mod error;
pub mod escalation;
pub mod formula;
pub mod rune;
pub mod spell;

pub use config::RulesConfig;
pub use cost::{CostPolicy, mana_cost};
pub use dice::{
    DicePool, Die, DieSource, Progression, RollEntry, RollOutcome, progression, roll, roll_capped,
};
pub use error::{MechError, MechResult};
pub use escalation::{EscalationScheme, escalation};
pub use formula::RollFormula;
pub use rune::{Rune, RuneKind};
pub use spell::{Mode, SpellParameters, SpellSheet, SpellValidation, spell_circle};
