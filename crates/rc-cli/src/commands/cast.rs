use colored::Colorize;
use rc_mechanics::{Mode, Rune, SpellParameters};
use tracing::{debug, warn};

use super::{CasterArgs, ExtraDiceArgs, RulesArgs};

/// Evaluate a hand-built spell, optionally rolling it.
///
/// `unbound` carries a custom mana cost and escalation that bypass every rule.
pub fn run(
    tokens: &[String],
    caster: &CasterArgs,
    rules: &RulesArgs,
    unbound: Option<(u64, u32)>,
    roll: Option<&ExtraDiceArgs>,
    json: bool,
) -> Result<(), String> {
    let mut config = rules.config()?;
    let base_die = caster.base_die()?;
    if let Some(max) = roll.and_then(|extra| extra.max_explosions) {
        config = config.with_max_explosions(max);
    }
    let runes: Vec<Rune> = tokens.iter().flat_map(|t| Rune::parse_formula(t)).collect();
    for rune in runes.iter().filter(|r| r.info().is_none()) {
        warn!(%rune, "unknown rune, it has no effect");
    }

    let mode = match unbound {
        Some((mana_cost, increase)) => Mode::Unbound { mana_cost, increase },
        None => Mode::Standard,
    };

    let params = SpellParameters::default()
        .with_base_die(base_die)
        .with_magic_skill(caster.skill)
        .with_employed_magic(caster.employed)
        .with_runes(runes)
        .with_mode(mode);
    let sheet = params.evaluate(&config);
    debug!(?sheet, "spell evaluated");

    if json {
        let out = serde_json::to_string_pretty(&sheet).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        let written: Vec<String> = params.runes.iter().map(ToString::to_string).collect();
        println!("  {} {}", "Spell".bold(), written.join(" "));
        super::print_sheet(&sheet);
    }

    let Some(extra) = roll else {
        return Ok(());
    };
    if !sheet.validation.is_castable() {
        return Err(format!("cannot roll: {}", sheet.validation));
    }
    if extra.bonus_die == 0 {
        return Err("select a bonus die to roll (--bonus-die)".into());
    }

    let formula = extra.apply(sheet.formula.clone());
    let outcome = formula.roll(&mut extra.rng(), config.max_explosions);
    println!();
    super::print_outcome(&formula, &outcome);

    Ok(())
}
