use rc_mechanics::RollFormula;
use rc_mechanics::dice::progression::STEP_SEPARATOR;

use super::ExtraDiceArgs;

/// Roll a formula or the last state of a rendered progression.
pub fn run(text: &str, bonus: u32, extra: &ExtraDiceArgs, json: bool) -> Result<(), String> {
    let formula = if text.contains(STEP_SEPARATOR.trim()) {
        RollFormula::from_progression(text)
    } else {
        RollFormula::parse(text).map_err(|e| e.to_string())?
    };
    let flat = formula.flat_bonus.saturating_add(bonus);
    let formula = extra.apply(formula).with_flat_bonus(flat);

    let outcome = formula.roll(&mut extra.rng(), extra.max_explosions);

    if json {
        let out = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        super::print_outcome(&formula, &outcome);
    }
    Ok(())
}
