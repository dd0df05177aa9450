//! Mana cost calculation.
//!
//! The cost starts from a base derived from the die and the magic value,
//! then every multiplier rune scales the running cost in the order it was
//! written: `VAS` doubles, `UUS` triples.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::rune::{Rune, RuneKind};

/// How the base of the mana cost is derived before multipliers apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CostPolicy {
    /// `base die + magic value`.
    #[default]
    Additive,
    /// `base die + min(rune count, magic value)`.
    RuneCapped,
}

impl CostPolicy {
    /// Parse a policy name as used on the command line.
    pub fn parse(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "additive" => Ok(Self::Additive),
            "runecapped" | "capped" => Ok(Self::RuneCapped),
            _ => Err(MechError::UnknownPolicy(s.to_string())),
        }
    }

    /// The cost before any multiplier runes are applied.
    pub fn base(self, base_die: u32, magic: u32, rune_count: usize) -> u64 {
        let added = match self {
            Self::Additive => u64::from(magic),
            Self::RuneCapped => (rune_count as u64).min(u64::from(magic)),
        };
        u64::from(base_die).saturating_add(added)
    }
}

impl std::fmt::Display for CostPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Additive => write!(f, "additive"),
            Self::RuneCapped => write!(f, "rune-capped"),
        }
    }
}

/// Compute the mana cost of casting `runes` with the given base die and magic.
pub fn mana_cost(policy: CostPolicy, base_die: u32, magic: u32, runes: &[Rune]) -> u64 {
    let base = policy.base(base_die, magic, runes.len());
    runes.iter().fold(base, |cost, rune| match rune.kind() {
        RuneKind::Vas => cost.saturating_mul(2),
        RuneKind::Uus => cost.saturating_mul(3),
        RuneKind::Plain => cost,
    })
}
