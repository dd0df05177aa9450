//! Exploding rolls with a readable audit trail.
//!
//! Every die is rolled once. If any two initial results match, the roll
//! explodes: extra dice sized to the largest original die are drawn for as
//! long as each new result matches an initial value, is a 1, or is the
//! maximum face.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Die;

/// History line recorded when there is nothing to roll.
pub const NO_DICE_NOTE: &str = "Nessun dado da tirare.";

/// Anything that can draw a uniform value in `1..=sides`.
///
/// Implemented for every [`rand::Rng`]; tests plug in scripted sources.
pub trait DieSource {
    /// Draw a value in `1..=sides`. Only called with `sides >= 2`.
    fn draw(&mut self, sides: u32) -> u32;
}

impl<R: Rng> DieSource for R {
    fn draw(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }
}

fn roll_die<S: DieSource + ?Sized>(source: &mut S, sides: u32) -> u32 {
    match sides {
        0 => 0,
        1 => 1,
        n => source.draw(n),
    }
}

/// One contribution to a roll total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollEntry {
    /// An initial die.
    Die {
        /// The die's label.
        label: String,
        /// The value rolled.
        value: u32,
    },
    /// A bonus die drawn by an explosion.
    Explosion {
        /// Size of the explosion die.
        sides: u32,
        /// The value rolled.
        value: u32,
    },
    /// The flat bonus.
    Flat(u32),
}

impl RollEntry {
    /// The amount this entry adds to the total.
    pub fn value(&self) -> u32 {
        match self {
            Self::Die { value, .. } | Self::Explosion { value, .. } => *value,
            Self::Flat(bonus) => *bonus,
        }
    }
}

impl std::fmt::Display for RollEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Die { label, value } => write!(f, "{value} ({label})"),
            Self::Explosion { sides, value } => write!(f, "{value} (Esplosione D{sides})"),
            Self::Flat(bonus) => write!(f, "{bonus} (Fisso)"),
        }
    }
}

/// The full result of a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Sum of every draw plus the flat bonus.
    pub total: u64,
    /// Contributions in the order they were made.
    pub entries: Vec<RollEntry>,
    /// Human-readable log, one line per event.
    pub history: Vec<String>,
    /// True if the explosion chain was cut short by a ceiling.
    pub capped: bool,
}

impl RollOutcome {
    /// Contributions joined with `" + "`, e.g. `4 (D6) + 3 (Fisso)`.
    pub fn breakdown(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Number of explosion dice drawn.
    pub fn explosions(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, RollEntry::Explosion { .. }))
            .count()
    }

    /// Returns true if the roll exploded at least once.
    pub fn exploded(&self) -> bool {
        self.explosions() > 0
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            write!(f, "{}", self.total)
        } else {
            write!(f, "{} ({})", self.total, self.breakdown())
        }
    }
}

/// Roll `dice` plus a flat bonus. Explosions are unbounded.
pub fn roll<S: DieSource + ?Sized>(dice: &[Die], flat_bonus: u32, source: &mut S) -> RollOutcome {
    resolve(dice, flat_bonus, source, None)
}

/// Like [`roll`], but stops after `max_explosions` extra dice.
///
/// A roll that hits the ceiling is marked [`RollOutcome::capped`].
pub fn roll_capped<S: DieSource + ?Sized>(
    dice: &[Die],
    flat_bonus: u32,
    source: &mut S,
    max_explosions: usize,
) -> RollOutcome {
    resolve(dice, flat_bonus, source, Some(max_explosions))
}

fn resolve<S: DieSource + ?Sized>(
    dice: &[Die],
    flat_bonus: u32,
    source: &mut S,
    cap: Option<usize>,
) -> RollOutcome {
    let mut entries = Vec::new();
    let mut history = Vec::new();
    let mut capped = false;

    if dice.is_empty() {
        history.push(NO_DICE_NOTE.to_string());
    } else {
        let mut initial = Vec::with_capacity(dice.len());
        for die in dice {
            let value = roll_die(source, die.sides);
            history.push(format!("{}: {value}", die.label));
            entries.push(RollEntry::Die {
                label: die.label.clone(),
                value,
            });
            initial.push(value);
        }

        let seen: BTreeSet<u32> = initial.iter().copied().collect();
        if seen.len() < initial.len() {
            let sides = dice.iter().map(|d| d.sides).max().unwrap_or(0);
            debug!(?initial, sides, "duplicate initial values, roll explodes");
            capped = explode(sides, &seen, source, cap, &mut entries, &mut history);
        }
    }

    if flat_bonus > 0 {
        entries.push(RollEntry::Flat(flat_bonus));
    }
    let total = entries.iter().map(|e| u64::from(e.value())).sum();

    RollOutcome {
        total,
        entries,
        history,
        capped,
    }
}

/// Run the explosion chain. Returns true if it was cut off by `cap`.
fn explode<S: DieSource + ?Sized>(
    sides: u32,
    seen: &BTreeSet<u32>,
    source: &mut S,
    cap: Option<usize>,
    entries: &mut Vec<RollEntry>,
    history: &mut Vec<String>,
) -> bool {
    let continues = |value: u32| seen.contains(&value) || value == 1 || value == sides;
    // When every face continues the chain it would never end; draw once.
    let can_settle = (1..=sides).any(|face| !continues(face));

    let mut rounds = 0usize;
    loop {
        if cap.is_some_and(|max| rounds >= max) {
            history.push(format!("Limite di {rounds} esplosioni raggiunto."));
            debug!(rounds, "explosion chain capped");
            return true;
        }

        let value = roll_die(source, sides);
        rounds += 1;
        history.push(format!("💥 ESPLOSIONE! Tiro extra D{sides}: {value}"));
        entries.push(RollEntry::Explosion { sides, value });
        debug!(round = rounds, sides, value, "explosion draw");

        if !can_settle || !continues(value) {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    /// Replays a fixed list of draws, clamped into range.
    struct Scripted(VecDeque<u32>);

    impl Scripted {
        fn new(values: &[u32]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl DieSource for Scripted {
        fn draw(&mut self, sides: u32) -> u32 {
            let value = self.0.pop_front().unwrap_or(1);
            value.clamp(1, sides)
        }
    }

    fn d(sides: u32) -> Die {
        Die::standard(sides)
    }

    #[test]
    fn empty_dice_returns_bonus() {
        let out = roll(&[], 5, &mut Scripted::new(&[]));
        assert_eq!(out.total, 5);
        assert_eq!(out.breakdown(), "5 (Fisso)");
        assert_eq!(out.history, vec![NO_DICE_NOTE.to_string()]);
    }

    #[test]
    fn empty_dice_zero_bonus() {
        let out = roll(&[], 0, &mut Scripted::new(&[]));
        assert_eq!(out.total, 0);
        assert_eq!(out.breakdown(), "");
        assert_eq!(out.history.len(), 1);
    }

    #[test]
    fn distinct_values_do_not_explode() {
        let out = roll(&[d(20), d(8)], 3, &mut Scripted::new(&[14, 5]));
        assert_eq!(out.total, 22);
        assert_eq!(out.breakdown(), "14 (D20) + 5 (D8) + 3 (Fisso)");
        assert_eq!(out.history, vec!["D20: 14", "D8: 5"]);
        assert!(!out.exploded());
    }

    #[test]
    fn duplicates_explode_with_largest_die() {
        // Initial 4,4 -> explode on d6; 5 is fresh, not 1, not 6 -> stop.
        let out = roll(&[d(6), d(6)], 0, &mut Scripted::new(&[4, 4, 5]));
        assert_eq!(out.explosions(), 1);
        assert_eq!(out.total, 13);
        assert_eq!(out.breakdown(), "4 (D6) + 4 (D6) + 5 (Esplosione D6)");
        assert_eq!(
            out.history,
            vec!["D6: 4", "D6: 4", "💥 ESPLOSIONE! Tiro extra D6: 5"]
        );
    }

    #[test]
    fn chain_continues_on_seen_one_and_max() {
        // Initial 7,7,3 on d20/d8/d8; explosions on d20:
        // 3 (seen) -> 1 (one) -> 20 (max) -> 7 (seen) -> 12 (stop).
        let out = roll(
            &[d(20), d(8), d(8)],
            2,
            &mut Scripted::new(&[7, 7, 3, 3, 1, 20, 7, 12]),
        );
        assert_eq!(out.explosions(), 5);
        assert_eq!(out.total, 7 + 7 + 3 + 3 + 1 + 20 + 7 + 12 + 2);
        assert!(out.history.iter().all(|l| !l.contains("Tiro extra D8")));
        let settled = "💥 ESPLOSIONE! Tiro extra D20: 12".to_string();
        assert!(out.history.contains(&settled));
    }

    #[test]
    fn explosion_log_reads_in_order() {
        let out = roll(&[d(12), d(8)], 3, &mut Scripted::new(&[8, 8, 12, 5]));
        insta::assert_snapshot!(out.history.join("\n"), @r"
        D12: 8
        D8: 8
        💥 ESPLOSIONE! Tiro extra D12: 12
        💥 ESPLOSIONE! Tiro extra D12: 5
        ");
        assert_eq!(
            out.breakdown(),
            "8 (D12) + 8 (D8) + 12 (Esplosione D12) + 5 (Esplosione D12) + 3 (Fisso)"
        );
        assert_eq!(out.total, 36);
    }

    #[test]
    fn total_matches_every_logged_draw() {
        let out = roll(&[d(6), d(6)], 4, &mut Scripted::new(&[2, 2, 6, 1, 3]));
        let drawn: u64 = out
            .entries
            .iter()
            .filter(|e| !matches!(e, RollEntry::Flat(_)))
            .map(|e| u64::from(e.value()))
            .sum();
        assert_eq!(out.total, drawn + 4);
        assert_eq!(out.explosions(), 3);
    }

    #[test]
    fn degenerate_sides() {
        let out = roll(&[d(1), d(0)], 0, &mut Scripted::new(&[]));
        assert_eq!(out.total, 1);
        assert_eq!(out.history, vec!["D1: 1", "D0: 0"]);
    }

    #[test]
    fn unsettleable_chain_draws_once() {
        // Two d2 showing 1: every d2 face is 1 or max, so only one extra die.
        let out = roll(&[d(2), d(2)], 0, &mut Scripted::new(&[1, 1, 2]));
        assert_eq!(out.explosions(), 1);
        assert_eq!(out.total, 4);
        assert!(!out.capped);
    }

    #[test]
    fn covered_faces_settle_after_one_draw() {
        // Initial 2,3,3 on d4: with 1 and 4 continuing too, every face would
        // keep the chain going, so the seen value 2 still ends it.
        let out = roll(&[d(4), d(4), d(4)], 0, &mut Scripted::new(&[2, 3, 3, 2]));
        assert_eq!(out.explosions(), 1);
        assert_eq!(out.total, 2 + 3 + 3 + 2);
        assert_eq!(
            out.history.last().map(String::as_str),
            Some("💥 ESPLOSIONE! Tiro extra D4: 2")
        );
    }

    #[test]
    fn capped_roll_stops_early() {
        let out = roll_capped(&[d(6), d(6)], 0, &mut Scripted::new(&[3, 3, 6, 6, 6]), 2);
        assert_eq!(out.explosions(), 2);
        assert!(out.capped);
        assert_eq!(out.total, 3 + 3 + 6 + 6);
        assert_eq!(
            out.history.last().map(String::as_str),
            Some("Limite di 2 esplosioni raggiunto.")
        );
    }

    #[test]
    fn cap_not_reached_is_not_capped() {
        let out = roll_capped(&[d(6), d(6)], 0, &mut Scripted::new(&[3, 3, 4]), 5);
        assert!(!out.capped);
        assert_eq!(out.explosions(), 1);
    }

    #[test]
    fn labels_flow_into_breakdown() {
        let dice = [d(10), Die::with_role(6, "Aggiuntivo")];
        let out = roll(&dice, 0, &mut Scripted::new(&[9, 2]));
        assert_eq!(out.breakdown(), "9 (D10) + 2 (D6 (Aggiuntivo))");
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let dice = [d(20), d(20), d(12)];
        let a = roll(&dice, 1, &mut StdRng::seed_from_u64(7));
        let b = roll(&dice, 1, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn rng_values_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let out = roll(&[d(6)], 0, &mut rng);
            assert!((1..=6).contains(&out.total));
        }
    }

    #[test]
    fn display_includes_breakdown() {
        let out = roll(&[d(4)], 1, &mut Scripted::new(&[3]));
        assert_eq!(out.to_string(), "4 (3 (D4) + 1 (Fisso))");
    }
}
