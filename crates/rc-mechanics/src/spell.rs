//! Spell evaluation: from the caster's parameters to a full spell sheet.
//!
//! The circle of a hand-built spell follows from its rune count. The
//! employed magic is clamped between the circle and the caster's skill,
//! and feeds both the mana cost and the flat bonus of the final roll.

use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::cost::mana_cost;
use crate::dice::{Progression, progression};
use crate::escalation::escalation;
use crate::formula::RollFormula;
use crate::rune::Rune;

/// The highest spell circle.
pub const MAX_CIRCLE: u8 = 9;

/// The fewest runes a hand-built spell needs.
pub const MIN_RUNES: usize = 2;

/// How a spell is being put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Runes picked by hand; circle derived from the rune count.
    #[default]
    Standard,
    /// No constraints: mana cost and escalation are set directly.
    Unbound {
        /// Mana cost to report.
        mana_cost: u64,
        /// Escalation steps to apply.
        increase: u32,
    },
    /// Runes proposed by the suggestion service for a requested circle.
    Guided,
}

/// Circle of a hand-built spell.
///
/// Fewer than two runes is no spell at all. A two-rune spell opening with
/// `Bet` ("small") is first circle; otherwise the rune count is the circle.
pub fn spell_circle(runes: &[Rune]) -> u8 {
    match runes.len() {
        0 | 1 => 0,
        2 if runes[0] == Rune::new("Bet") => 1,
        n => n.min(usize::from(MAX_CIRCLE)) as u8,
    }
}

/// Most runes a caster with this skill may combine.
pub fn max_runes(magic_skill: u32) -> usize {
    magic_skill.min(u32::from(MAX_CIRCLE)) as usize
}

/// Highest circle a caster may request, never below 2.
pub fn max_requested_circle(magic_skill: u32) -> u8 {
    magic_skill.clamp(2, u32::from(MAX_CIRCLE)) as u8
}

/// The `(min, max)` range for employed magic: at least the circle (2 when
/// the runes form no spell), at most the caster's skill.
pub fn employed_magic_bounds(magic_skill: u32, circle: u8) -> (u32, u32) {
    let min = if circle > 0 { u32::from(circle) } else { 2 };
    (min, magic_skill)
}

/// Clamp the employed magic into [`employed_magic_bounds`].
///
/// The ceiling applies first, so a circle above the skill wins.
pub fn clamp_employed_magic(employed: u32, magic_skill: u32, circle: u8) -> u32 {
    let (min, max) = employed_magic_bounds(magic_skill, circle);
    employed.min(max).max(min)
}

/// Verdict on whether a spell can be cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellValidation {
    /// Not enough runes selected.
    TooFewRunes {
        /// Rune limit for the caster.
        max: usize,
    },
    /// More runes than the caster's skill allows.
    TooManyRunes {
        /// Rune limit for the caster.
        max: usize,
    },
    /// A castable spell.
    Valid {
        /// The spell's circle.
        circle: u8,
    },
    /// Runes were selected but do not form a spell.
    Invalid,
    /// Unbound mode: nothing to check.
    Unbound,
    /// A suggested spell at the requested circle.
    Guided {
        /// The requested circle.
        circle: u8,
    },
}

impl SpellValidation {
    /// Returns true if the spell may be cast and rolled.
    pub fn is_castable(&self) -> bool {
        matches!(self, Self::Valid { .. } | Self::Unbound | Self::Guided { .. })
    }
}

impl std::fmt::Display for SpellValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewRunes { max } => {
                write!(f, "Seleziona almeno {MIN_RUNES} rune (max {max}).")
            }
            Self::TooManyRunes { max } => write!(f, "Troppe rune: al massimo {max}."),
            Self::Valid { circle } => write!(f, "Incantesimo valido di Circolo {circle}."),
            Self::Invalid => write!(f, "Crea un incantesimo valido."),
            Self::Unbound => write!(f, "Il potere senza vincoli non conosce limiti."),
            Self::Guided { circle } => write!(f, "Incantesimo suggerito di Circolo {circle}."),
        }
    }
}

/// Validate a hand-built spell.
pub fn validate(runes: &[Rune], magic_skill: u32) -> SpellValidation {
    let max = max_runes(magic_skill);
    if runes.len() < MIN_RUNES {
        return SpellValidation::TooFewRunes { max };
    }
    if runes.len() > max {
        return SpellValidation::TooManyRunes { max };
    }
    match spell_circle(runes) {
        0 => SpellValidation::Invalid,
        circle => SpellValidation::Valid { circle },
    }
}

/// A snapshot of everything the caster has chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellParameters {
    /// The caster's highest die, the base of escalation.
    pub base_die: u32,
    /// Runic magic skill value.
    pub magic_skill: u32,
    /// Runic magic committed to this spell.
    pub employed_magic: u32,
    /// Requested circle, used in guided mode.
    pub spell_circle: u8,
    /// The spell's runes, in written order.
    pub runes: Vec<Rune>,
    /// How the spell is being built.
    pub mode: Mode,
}

impl Default for SpellParameters {
    fn default() -> Self {
        Self {
            base_die: 8,
            magic_skill: 3,
            employed_magic: 3,
            spell_circle: 3,
            runes: Vec::new(),
            mode: Mode::Standard,
        }
    }
}

impl SpellParameters {
    /// Set the base die.
    pub fn with_base_die(mut self, sides: u32) -> Self {
        self.base_die = sides;
        self
    }

    /// Set the magic skill value.
    pub fn with_magic_skill(mut self, skill: u32) -> Self {
        self.magic_skill = skill;
        self
    }

    /// Set the employed magic.
    pub fn with_employed_magic(mut self, employed: u32) -> Self {
        self.employed_magic = employed;
        self
    }

    /// Set the requested circle.
    pub fn with_spell_circle(mut self, circle: u8) -> Self {
        self.spell_circle = circle;
        self
    }

    /// Set the runes.
    pub fn with_runes(mut self, runes: Vec<Rune>) -> Self {
        self.runes = runes;
        self
    }

    /// Set the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Work out the cost, escalation, and roll for this spell.
    pub fn evaluate(&self, config: &RulesConfig) -> SpellSheet {
        let circle = match self.mode {
            Mode::Standard => spell_circle(&self.runes),
            Mode::Unbound { .. } | Mode::Guided => {
                self.spell_circle.min(max_requested_circle(self.magic_skill))
            }
        };
        let employed_magic = clamp_employed_magic(self.employed_magic, self.magic_skill, circle);

        let (mana_cost, increase, validation) = match self.mode {
            Mode::Standard => (
                mana_cost(config.cost_policy, self.base_die, employed_magic, &self.runes),
                escalation(&config.escalation, &self.runes),
                validate(&self.runes, self.magic_skill),
            ),
            Mode::Unbound { mana_cost, increase } => {
                (mana_cost, increase, SpellValidation::Unbound)
            }
            Mode::Guided => (
                mana_cost(config.cost_policy, self.base_die, self.magic_skill, &self.runes),
                escalation(&config.escalation, &self.runes),
                SpellValidation::Guided { circle },
            ),
        };

        let progression = progression(self.base_die, increase);
        let formula = RollFormula::from_pool(&progression).with_flat_bonus(employed_magic);

        SpellSheet {
            circle,
            employed_magic,
            mana_cost,
            increase,
            progression,
            validation,
            formula,
        }
    }
}

/// The computed results for one spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSheet {
    /// The spell's circle (0 if the runes do not form a spell).
    pub circle: u8,
    /// Employed magic after clamping.
    pub employed_magic: u32,
    /// Mana cost of casting.
    pub mana_cost: u64,
    /// Escalation steps applied to the base die.
    pub increase: u32,
    /// How the base die escalated.
    pub progression: Progression,
    /// Whether the spell can be cast.
    pub validation: SpellValidation,
    /// What to roll when casting.
    pub formula: RollFormula,
}
