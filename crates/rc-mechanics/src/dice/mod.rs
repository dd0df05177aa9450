//! Dice descriptors, escalation progressions, and exploding rolls.
//!
//! The catalog covers d2 through d20 plus the percentile d100. Only the
//! ladder d2..d20 escalates; d100 and any custom size are terminal.

pub mod progression;
pub mod roll;

pub use progression::{DicePool, Progression, progression};
pub use roll::{DieSource, RollEntry, RollOutcome, roll, roll_capped};

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Every die size a caster may pick as the base die.
pub const DIE_CATALOG: [u32; 8] = [2, 4, 6, 8, 10, 12, 20, 100];

/// The escalation ladder, smallest first. d20 is the top rung.
pub const ESCALATION_LADDER: [u32; 7] = [2, 4, 6, 8, 10, 12, 20];

/// The next size up the ladder, or `None` at the top or off the ladder.
pub fn successor(sides: u32) -> Option<u32> {
    let idx = ESCALATION_LADDER.iter().position(|&s| s == sides)?;
    ESCALATION_LADDER.get(idx + 1).copied()
}

/// Returns true if a die of this size can be escalated at all.
pub fn on_ladder(sides: u32) -> bool {
    ESCALATION_LADDER.contains(&sides)
}

/// The standard label for a die size (`D8`, `D100`, ...).
pub fn die_label(sides: u32) -> String {
    format!("D{sides}")
}

/// A die to roll: its size and the label shown in logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    /// Number of faces.
    pub sides: u32,
    /// Display label, e.g. `D6` or `D6 (Legame)`.
    pub label: String,
}

impl Die {
    /// A die with the standard `D{sides}` label.
    pub fn standard(sides: u32) -> Self {
        Self {
            sides,
            label: die_label(sides),
        }
    }

    /// A die with a role suffix, e.g. `D6 (Aggiuntivo)`.
    pub fn with_role(sides: u32, role: &str) -> Self {
        Self {
            sides,
            label: format!("D{sides} ({role})"),
        }
    }

    /// Parse a die from a tag like `"d20"`, `"D6"`, or `"d100"`.
    pub fn from_str_tag(s: &str) -> MechResult<Self> {
        let trimmed = s.trim();
        let sides = trimmed
            .strip_prefix(['d', 'D'])
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|&n| n >= 1)
            .ok_or_else(|| MechError::InvalidDie(trimmed.to_string()))?;
        Ok(Self::standard(sides))
    }

    /// Returns true if this die size is in the pickable catalog.
    pub fn in_catalog(&self) -> bool {
        DIE_CATALOG.contains(&self.sides)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
