//! The final roll formula: escalated dice plus optional extra dice and a flat bonus.
//!
//! A cast is rolled from the last state of its progression. The caster may
//! add a bonus die ("Aggiuntivo") and a bond die ("Legame"); the employed
//! magic is added as a flat bonus.

use serde::{Deserialize, Serialize};

use crate::dice::progression::{DIE_SEPARATOR, STEP_SEPARATOR};
use crate::dice::{Die, DieSource, Progression, RollOutcome, roll, roll_capped};
use crate::error::{MechError, MechResult};

/// Role suffix for the optional bonus die.
pub const BONUS_ROLE: &str = "Aggiuntivo";

/// Role suffix for the optional bond die.
pub const BOND_ROLE: &str = "Legame";

/// Everything that goes into one roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollFormula {
    /// The escalated dice.
    pub base: Vec<Die>,
    /// Size of the bonus die, if any.
    pub bonus_die: Option<u32>,
    /// Size of the bond die, if any.
    pub bond_die: Option<u32>,
    /// Flat amount added to the total.
    pub flat_bonus: u32,
}

impl RollFormula {
    /// Roll the final pool of a progression.
    pub fn from_pool(progression: &Progression) -> Self {
        Self {
            base: progression.final_pool().dice(),
            ..Self::default()
        }
    }

    /// Read the dice from a rendered progression such as `"D8 → D10"`.
    ///
    /// Only the text after the last arrow counts; every `D<n>` token in it
    /// becomes a die. Anything else is ignored.
    pub fn from_progression(text: &str) -> Self {
        let last = text.rsplit(STEP_SEPARATOR.trim()).next().unwrap_or(text);
        Self {
            base: scan_dice(last),
            ..Self::default()
        }
    }

    /// Parse an explicit formula like `"D20 + D6 + 3"`.
    ///
    /// Terms are separated by `+`; each is either a die tag or a number.
    pub fn parse(text: &str) -> MechResult<Self> {
        let mut formula = Self::default();
        for term in text.split('+').map(str::trim).filter(|t| !t.is_empty()) {
            if let Ok(n) = term.parse::<u32>() {
                formula.flat_bonus = formula.flat_bonus.saturating_add(n);
            } else {
                formula.base.push(Die::from_str_tag(term)?);
            }
        }
        if formula.base.is_empty() && formula.flat_bonus == 0 {
            return Err(MechError::EmptyFormula);
        }
        Ok(formula)
    }

    /// Add a bonus die. `0` removes it.
    pub fn with_bonus_die(mut self, sides: u32) -> Self {
        self.bonus_die = (sides > 0).then_some(sides);
        self
    }

    /// Add a bond die. `0` removes it.
    pub fn with_bond_die(mut self, sides: u32) -> Self {
        self.bond_die = (sides > 0).then_some(sides);
        self
    }

    /// Set the flat bonus.
    pub fn with_flat_bonus(mut self, bonus: u32) -> Self {
        self.flat_bonus = bonus;
        self
    }

    /// Every die to roll, in order: base dice, bonus die, bond die.
    pub fn dice(&self) -> Vec<Die> {
        let mut dice = self.base.clone();
        if let Some(sides) = self.bonus_die {
            dice.push(Die::with_role(sides, BONUS_ROLE));
        }
        if let Some(sides) = self.bond_die {
            dice.push(Die::with_role(sides, BOND_ROLE));
        }
        dice
    }

    /// Roll the formula, honoring an optional explosion ceiling.
    pub fn roll<S: DieSource + ?Sized>(
        &self,
        source: &mut S,
        max_explosions: Option<usize>,
    ) -> RollOutcome {
        let dice = self.dice();
        match max_explosions {
            Some(max) => roll_capped(&dice, self.flat_bonus, source, max),
            None => roll(&dice, self.flat_bonus, source),
        }
    }
}

impl std::fmt::Display for RollFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut terms: Vec<String> = self.base.iter().map(|d| d.label.clone()).collect();
        if let Some(sides) = self.bonus_die {
            terms.push(format!("D{sides}"));
        }
        if let Some(sides) = self.bond_die {
            terms.push(format!("D{sides}"));
        }
        if self.flat_bonus > 0 {
            terms.push(self.flat_bonus.to_string());
        }
        write!(f, "{}", terms.join(DIE_SEPARATOR))
    }
}

/// Extract every `D<digits>` token from free text.
fn scan_dice(text: &str) -> Vec<Die> {
    let mut dice = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find('D') {
        let after = &rest[pos + 1..];
        let digits: String = after.chars().take_while(char::is_ascii_digit).collect();
        if let Ok(sides) = digits.parse::<u32>() {
            dice.push(Die::standard(sides));
        }
        rest = &after[digits.len()..];
    }
    dice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::progression;

    #[test]
    fn reads_last_state_of_progression() {
        let f = RollFormula::from_progression("D8 → D10");
        assert_eq!(f.base, vec![Die::standard(10)]);

        let f = RollFormula::from_progression("D12 → D20 → D20 + D12");
        assert_eq!(f.base, vec![Die::standard(20), Die::standard(12)]);
    }

    #[test]
    fn static_progression_is_the_base_die() {
        let f = RollFormula::from_progression("D100");
        assert_eq!(f.base, vec![Die::standard(100)]);
    }

    #[test]
    fn from_pool_matches_text_scan() {
        let p = progression(20, 2);
        assert_eq!(
            RollFormula::from_pool(&p),
            RollFormula::from_progression(&p.to_string())
        );
    }

    #[test]
    fn extra_dice_carry_roles() {
        let f = RollFormula::from_progression("D10")
            .with_bonus_die(6)
            .with_bond_die(4)
            .with_flat_bonus(3);
        let labels: Vec<String> = f.dice().into_iter().map(|d| d.label).collect();
        assert_eq!(labels, ["D10", "D6 (Aggiuntivo)", "D4 (Legame)"]);
        assert_eq!(f.to_string(), "D10 + D6 + D4 + 3");
    }

    #[test]
    fn zero_removes_extra_die() {
        let f = RollFormula::from_progression("D10").with_bonus_die(6).with_bonus_die(0);
        assert_eq!(f.bonus_die, None);
        assert_eq!(f.to_string(), "D10");
    }

    #[test]
    fn parse_explicit_formula() {
        let f = RollFormula::parse("D20 + d6 + 3").ok();
        assert_eq!(
            f,
            Some(RollFormula {
                base: vec![Die::standard(20), Die::standard(6)],
                flat_bonus: 3,
                ..RollFormula::default()
            })
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(RollFormula::parse("D20 + fireball"), Err(MechError::InvalidDie(_))));
        assert!(matches!(RollFormula::parse("  "), Err(MechError::EmptyFormula)));
    }

    #[test]
    fn parse_flat_only() {
        let f = RollFormula::parse("5").ok();
        assert_eq!(f.map(|f| (f.base.len(), f.flat_bonus)), Some((0, 5)));
    }
}
