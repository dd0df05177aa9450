//! Runes: the symbolic tokens a spell is built from.
//!
//! Runes compare case-insensitively. Only `VAS` and `UUS` carry mechanical
//! weight; every other token is inert for the calculators.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Mechanical classification of a rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuneKind {
    /// `VAS` ("great"): doubles the cost and escalates the die.
    Vas,
    /// `UUS` ("superior"): triples the cost and escalates the die further.
    Uus,
    /// Any other token.
    Plain,
}

/// A single rune token, compared case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rune(String);

impl Rune {
    /// Create a rune from any token. Unknown tokens are accepted as plain runes.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    /// The rune as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the rune for cost and escalation purposes.
    pub fn kind(&self) -> RuneKind {
        if self.0.eq_ignore_ascii_case("vas") {
            RuneKind::Vas
        } else if self.0.eq_ignore_ascii_case("uus") {
            RuneKind::Uus
        } else {
            RuneKind::Plain
        }
    }

    /// Returns true for the multiplier runes `VAS` and `UUS`.
    pub fn is_multiplier(&self) -> bool {
        self.kind() != RuneKind::Plain
    }

    /// Look up this rune in the shipped catalog.
    pub fn info(&self) -> Option<&'static RuneInfo> {
        RUNE_CATALOG
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(&self.0))
    }

    /// Split a written formula such as `"VAS GRAU EX LOR"` into runes.
    ///
    /// Whitespace and commas separate tokens; empty tokens are dropped.
    pub fn parse_formula(formula: &str) -> Vec<Self> {
        formula
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Self::new)
            .collect()
    }
}

impl PartialEq for Rune {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Rune {}

impl Hash for Rune {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl From<&str> for Rune {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl std::fmt::Display for Rune {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry: a rune name and its traditional meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuneInfo {
    /// Canonical spelling.
    pub name: &'static str,
    /// The meanings a caster can draw on, most common first.
    pub meanings: &'static [&'static str],
}

/// The runes offered to the caster, in alphabetical order.
pub const RUNE_CATALOG: &[RuneInfo] = &[
    RuneInfo {
        name: "An",
        meanings: &["Negazione", "Amore", "Violenza"],
    },
    RuneInfo {
        name: "Bet",
        meanings: &["Piccolo", "Carisma", "Riduci"],
    },
    RuneInfo {
        name: "Corp",
        meanings: &["Morte", "Terrore", "Tentazione"],
    },
    RuneInfo {
        name: "Des",
        meanings: &["Inferiore", "Demoni Minori", "Miracolo"],
    },
    RuneInfo {
        name: "Ex",
        meanings: &["Libera", "Libertà", "Area Media"],
    },
    RuneInfo {
        name: "Flam",
        meanings: &["Fuoco", "Potenza arma", "Forza"],
    },
    RuneInfo {
        name: "Grau",
        meanings: &["Energia", "Telecinesi", "Spirito"],
    },
    RuneInfo {
        name: "Hur",
        meanings: &["Vento", "Aria", "Destrezza"],
    },
    RuneInfo {
        name: "In",
        meanings: &["Trasforma", "Causa", "Converti"],
    },
    RuneInfo {
        name: "Jux",
        meanings: &["Creazione", "Terra", "Corpo"],
    },
    RuneInfo {
        name: "Kal",
        meanings: &["Invoca", "Evoca", "Richiama"],
    },
    RuneInfo {
        name: "Lor",
        meanings: &["Luce", "Controllo", "Precisione Arma"],
    },
    RuneInfo {
        name: "Many",
        meanings: &["Vita", "Guarigione", "Acqua", "Prontezza"],
    },
    RuneInfo {
        name: "Nox",
        meanings: &["Veleno", "Discordia", "Confusione"],
    },
    RuneInfo {
        name: "Ort",
        meanings: &["Magia", "Psichico", "Incantare"],
    },
    RuneInfo {
        name: "Por",
        meanings: &["Movimento", "Sposta", "Solleva"],
    },
    RuneInfo {
        name: "Quas",
        meanings: &["Illusione", "Visione", "Suono"],
    },
    RuneInfo {
        name: "Rel",
        meanings: &["Cambia", "Odio", "Mutazione"],
    },
    RuneInfo {
        name: "Sance",
        meanings: &["Protezione", "Purifica", "Armatura"],
    },
    RuneInfo {
        name: "Tim",
        meanings: &["Tempo", "Fortuna", "Portale"],
    },
    RuneInfo {
        name: "Uus",
        meanings: &["Superiore"],
    },
    RuneInfo {
        name: "Vas",
        meanings: &["Grande"],
    },
    RuneInfo {
        name: "Wis",
        meanings: &["Conoscenza", "Mente", "Vedi"],
    },
    RuneInfo {
        name: "Xen",
        meanings: &["Alterazione", "Assimilare", "Modifica"],
    },
    RuneInfo {
        name: "Ylem",
        meanings: &["Rivela", "Percezione", "Ascolta"],
    },
    RuneInfo {
        name: "Zu",
        meanings: &["Sonno", "Stanchezza", "Calma"],
    },
];
