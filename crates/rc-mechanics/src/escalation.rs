//! Die-size escalation from multiplier runes.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::rune::{Rune, RuneKind};

/// How many upgrade steps each multiplier rune grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationScheme {
    /// Steps granted per `VAS`.
    pub vas: u32,
    /// Steps granted per `UUS`.
    pub uus: u32,
}

impl EscalationScheme {
    /// One step per `VAS`, two per `UUS`.
    pub const STANDARD: Self = Self { vas: 1, uus: 2 };

    /// Two steps per `VAS`, three per `UUS`.
    pub const STEEP: Self = Self { vas: 2, uus: 3 };

    /// Parse a scheme by name (`standard`, `steep`).
    pub fn parse(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::STANDARD),
            "steep" => Ok(Self::STEEP),
            _ => Err(MechError::UnknownScheme(s.to_string())),
        }
    }

    /// Steps contributed by a single rune.
    pub fn steps_for(&self, rune: &Rune) -> u32 {
        match rune.kind() {
            RuneKind::Vas => self.vas,
            RuneKind::Uus => self.uus,
            RuneKind::Plain => 0,
        }
    }
}

impl Default for EscalationScheme {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Count the die upgrade steps granted by `runes`.
pub fn escalation(scheme: &EscalationScheme, runes: &[Rune]) -> u32 {
    runes
        .iter()
        .fold(0u32, |steps, rune| steps.saturating_add(scheme.steps_for(rune)))
}
