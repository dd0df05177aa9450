//! Die-size escalation rendered as a progression of dice pools.
//!
//! Each step upgrades the weakest die in the pool one rung up the ladder.
//! Once the weakest die is already a d20 the pool grows instead, gaining
//! another die of the original base size.

use serde::{Deserialize, Serialize};

use super::{Die, die_label, on_ladder, successor};

/// Separator between successive pool states.
pub const STEP_SEPARATOR: &str = " → ";

/// Separator between dice inside one pool state.
pub const DIE_SEPARATOR: &str = " + ";

/// The dice a caster currently rolls, kept sorted largest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    sides: Vec<u32>,
}

impl DicePool {
    /// A pool holding a single die.
    pub fn single(sides: u32) -> Self {
        Self { sides: vec![sides] }
    }

    /// Die sizes, largest first.
    pub fn sides(&self) -> &[u32] {
        &self.sides
    }

    /// Number of dice in the pool.
    pub fn len(&self) -> usize {
        self.sides.len()
    }

    /// Returns true if the pool holds no dice.
    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    /// Apply one escalation step.
    ///
    /// The smallest die moves one rung up the ladder. If it is already at the
    /// top, a fresh `base` die joins the pool instead. Dice off the ladder
    /// (d100, custom sizes) leave the pool untouched.
    pub fn escalate(&mut self, base: u32) {
        if !on_ladder(base) {
            return;
        }
        // Sorted descending, so the last die is the weakest.
        let Some(weakest) = self.sides.last_mut() else {
            self.sides.push(base);
            return;
        };
        if !on_ladder(*weakest) {
            return;
        }
        match successor(*weakest) {
            Some(next) => *weakest = next,
            None => self.sides.push(base),
        }
        self.sides.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// The pool as rollable dice, largest first.
    pub fn dice(&self) -> Vec<Die> {
        self.sides.iter().map(|&s| Die::standard(s)).collect()
    }

    /// Render as `D20 + D8`.
    pub fn render(&self) -> String {
        self.sides
            .iter()
            .map(|&s| die_label(s))
            .collect::<Vec<_>>()
            .join(DIE_SEPARATOR)
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// The sequence of pool states a die passes through while escalating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    states: Vec<String>,
    final_pool: DicePool,
}

impl Progression {
    /// Rendered pool states, first seen first, without repeats.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// The pool reached after every step, i.e. what actually gets rolled.
    pub fn final_pool(&self) -> &DicePool {
        &self.final_pool
    }

    /// Returns true if no escalation happened.
    pub fn is_static(&self) -> bool {
        self.states.len() <= 1
    }
}

impl std::fmt::Display for Progression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.states.join(STEP_SEPARATOR))
    }
}

/// Escalate `base_die` by `steps` and collect every pool state along the way.
///
/// Dice off the ladder (d100, custom sizes) never escalate.
pub fn progression(base_die: u32, steps: u32) -> Progression {
    let mut pool = DicePool::single(base_die);
    let mut states = vec![pool.render()];

    if steps > 0 && on_ladder(base_die) {
        for _ in 0..steps {
            pool.escalate(base_die);
            let rendered = pool.render();
            if !states.contains(&rendered) {
                states.push(rendered);
            }
        }
    }

    Progression {
        states,
        final_pool: pool,
    }
}
