//! Configuration for the casting rules.

use serde::{Deserialize, Serialize};

use crate::cost::CostPolicy;
use crate::escalation::EscalationScheme;

/// Which variant of the casting rules is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// How the base of the mana cost is derived.
    pub cost_policy: CostPolicy,
    /// Upgrade steps granted by each multiplier rune.
    pub escalation: EscalationScheme,
    /// Optional ceiling on explosion rounds per roll. `None` = unbounded.
    pub max_explosions: Option<usize>,
}

impl RulesConfig {
    /// Set the cost base policy.
    pub fn with_cost_policy(mut self, policy: CostPolicy) -> Self {
        self.cost_policy = policy;
        self
    }

    /// Set the escalation increments.
    pub fn with_escalation(mut self, scheme: EscalationScheme) -> Self {
        self.escalation = scheme;
        self
    }

    /// Cap explosion rounds per roll.
    pub fn with_max_explosions(mut self, max: usize) -> Self {
        self.max_explosions = Some(max);
        self
    }
}
