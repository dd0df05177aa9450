use std::path::Path;

use colored::Colorize;
use rc_mechanics::{Mode, SpellParameters};
use rc_services::{Narrator, RecordedSuggester, SilentNarrator, SpellSuggester};

use super::{CasterArgs, RulesArgs};

pub fn run(
    intent: &str,
    circle: u8,
    response: &Path,
    caster: &CasterArgs,
    rules: &RulesArgs,
    narrate: bool,
) -> Result<(), String> {
    let suggester = RecordedSuggester::from_path(response).map_err(|e| e.to_string())?;
    let narrator = narrate.then_some(&SilentNarrator as &dyn Narrator);
    run_with(&suggester, narrator, intent, circle, caster, rules)
}

/// Ask `suggester` for a spell, cost it, and optionally narrate its pronunciation.
fn run_with(
    suggester: &dyn SpellSuggester,
    narrator: Option<&dyn Narrator>,
    intent: &str,
    circle: u8,
    caster: &CasterArgs,
    rules: &RulesArgs,
) -> Result<(), String> {
    let config = rules.config()?;
    let base_die = caster.base_die()?;
    let suggestion = suggester
        .suggest(intent, circle)
        .map_err(|e| e.to_string())?;

    println!("  {}", "Suggested spell".bold().underline());
    super::print_field("Runes", &suggestion.runes);
    super::print_field("Spoken", &suggestion.pronunciation);
    println!();
    println!("  {}", suggestion.description);
    println!();
    println!("  {}", suggestion.explanation.dimmed());
    println!();

    let sheet = SpellParameters::default()
        .with_base_die(base_die)
        .with_magic_skill(caster.skill)
        .with_employed_magic(caster.employed)
        .with_spell_circle(circle)
        .with_runes(suggestion.rune_list())
        .with_mode(Mode::Guided)
        .evaluate(&config);
    super::print_sheet(&sheet);

    if let Some(narrator) = narrator {
        let clip = narrator
            .narrate(&suggestion.pronunciation)
            .map_err(|e| e.to_string())?;
        let status = if clip.is_silent() {
            "silent".to_string()
        } else {
            format!("{} bytes of {}", clip.bytes.len(), clip.mime_type)
        };
        super::print_field("Narration", status);
    }

    Ok(())
}
