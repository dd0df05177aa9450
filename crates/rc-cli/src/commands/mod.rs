pub mod cast;
pub mod progression;
pub mod roll;
pub mod runes;
pub mod suggest;

use clap::Args;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rc_mechanics::{
    CostPolicy, Die, EscalationScheme, RollFormula, RollOutcome, RulesConfig, SpellSheet,
};

/// The caster's parameters.
#[derive(Args, Debug, Clone)]
pub struct CasterArgs {
    /// Highest die of the caster (2, 4, 6, 8, 10, 12, 20, 100)
    #[arg(short, long, default_value = "8")]
    pub die: u32,

    /// Runic magic skill value
    #[arg(short, long, default_value = "3")]
    pub skill: u32,

    /// Runic magic employed in the spell
    #[arg(short, long, default_value = "3")]
    pub employed: u32,
}

impl CasterArgs {
    /// The caster's die, if it is one a caster can pick.
    pub fn base_die(&self) -> Result<u32, String> {
        catalog_die(self.die)
    }
}

/// Accept only die sizes from the pickable catalog.
fn catalog_die(sides: u32) -> Result<u32, String> {
    if Die::standard(sides).in_catalog() {
        Ok(sides)
    } else {
        Err(format!("unsupported die D{sides} (use 2, 4, 6, 8, 10, 12, 20 or 100)"))
    }
}

/// Which variant of the rules to apply.
#[derive(Args, Debug, Clone)]
pub struct RulesArgs {
    /// Cost base: "additive" (die + magic) or "rune-capped" (die + min(runes, magic))
    #[arg(long, default_value = "additive")]
    pub policy: String,

    /// Escalation increments: "standard" (VAS 1, UUS 2) or "steep" (VAS 2, UUS 3)
    #[arg(long, default_value = "standard")]
    pub scheme: String,
}

impl RulesArgs {
    /// Build the rules configuration from the flags.
    pub fn config(&self) -> Result<RulesConfig, String> {
        let policy = CostPolicy::parse(&self.policy).map_err(|e| e.to_string())?;
        let scheme = EscalationScheme::parse(&self.scheme).map_err(|e| e.to_string())?;
        Ok(RulesConfig::default()
            .with_cost_policy(policy)
            .with_escalation(scheme))
    }
}

/// Extra dice and randomness for a roll.
#[derive(Args, Debug, Clone)]
pub struct ExtraDiceArgs {
    /// Size of the bonus die ("Aggiuntivo"), 0 for none
    #[arg(long, default_value = "0")]
    pub bonus_die: u32,

    /// Size of the bond die ("Legame"), 0 for none
    #[arg(long, default_value = "0")]
    pub bond_die: u32,

    /// RNG seed for a reproducible roll
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop the explosion chain after this many extra dice
    #[arg(long)]
    pub max_explosions: Option<usize>,
}

impl ExtraDiceArgs {
    /// Attach the extra dice to a formula.
    pub fn apply(&self, formula: RollFormula) -> RollFormula {
        formula
            .with_bonus_die(self.bonus_die)
            .with_bond_die(self.bond_die)
    }

    /// A seeded RNG if a seed was given, otherwise one seeded from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Print one labelled line of a sheet.
fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("  {label:<11} {value}");
}

/// Print the computed results of a spell.
fn print_sheet(sheet: &SpellSheet) {
    print_field("Circle", sheet.circle);
    print_field("Mana cost", sheet.mana_cost);
    print_field("Escalation", format!("+{}", sheet.increase));
    print_field("Dice", &sheet.progression);
    print_field("Roll", &sheet.formula);

    let verdict = sheet.validation.to_string();
    if sheet.validation.is_castable() {
        println!("  {}", verdict.green());
    } else {
        println!("  {}", verdict.yellow());
    }
}

/// Print a roll outcome with its log.
fn print_outcome(formula: &RollFormula, outcome: &RollOutcome) {
    print_field("Formula", formula);
    print_field("Total", outcome.total.to_string().bold());
    if !outcome.entries.is_empty() {
        print_field("Breakdown", outcome.breakdown());
    }
    if outcome.capped {
        println!("  {}", "explosion chain capped".yellow());
    }
    println!();
    println!("  {}", "Roll log".bold().underline());
    for line in &outcome.history {
        println!("    {line}");
    }
}
