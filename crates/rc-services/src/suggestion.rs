//! Spell suggestions: a rune formula proposed for a natural-language intent.

use std::path::Path;

use rc_mechanics::Rune;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SuggestionError;

/// A spell proposed by the suggestion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSuggestion {
    /// The written formula, runes separated by spaces (e.g. `"VAS GRAU EX LOR"`).
    pub runes: String,
    /// How the formula is spoken (e.g. `"VASRAU EXOR"`).
    pub pronunciation: String,
    /// What happens when the spell is cast.
    pub description: String,
    /// Why these runes were chosen.
    pub explanation: String,
}

impl SpellSuggestion {
    /// Decode a suggestion from the service's JSON answer.
    ///
    /// All four fields are required.
    pub fn from_json(payload: &str) -> Result<Self, SuggestionError> {
        Ok(serde_json::from_str(payload.trim())?)
    }

    /// The formula split into runes, ready for the calculators.
    pub fn rune_list(&self) -> Vec<Rune> {
        Rune::parse_formula(&self.runes)
    }
}

/// A service that proposes a spell for an intent.
pub trait SpellSuggester {
    /// Propose a spell of `circle` runes that fulfils `intent`.
    fn suggest(&self, intent: &str, circle: u8) -> Result<SpellSuggestion, SuggestionError>;
}

/// The user message sent upstream for an intent and circle.
pub fn build_suggestion_prompt(intent: &str, circle: u8) -> String {
    format!(
        "Intenzione: {}\nCircolo dell'incantesimo: {circle} (usa esattamente {circle} rune)",
        intent.trim()
    )
}

/// Replays a previously captured service answer.
///
/// Useful offline and in tests: every intent gets the same suggestion.
#[derive(Debug, Clone)]
pub struct RecordedSuggester {
    payload: String,
}

impl RecordedSuggester {
    /// Replay the given JSON answer.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Replay the JSON answer stored in a file.
    pub fn from_path(path: &Path) -> Result<Self, SuggestionError> {
        let payload = std::fs::read_to_string(path)
            .map_err(|e| SuggestionError::Upstream(format!("{}: {e}", path.display())))?;
        Ok(Self::new(payload))
    }
}

impl SpellSuggester for RecordedSuggester {
    fn suggest(&self, intent: &str, circle: u8) -> Result<SpellSuggestion, SuggestionError> {
        if intent.trim().is_empty() {
            return Err(SuggestionError::EmptyIntent);
        }
        debug!(prompt = %build_suggestion_prompt(intent, circle), "replaying recorded suggestion");

        let suggestion = SpellSuggestion::from_json(&self.payload)?;
        let count = suggestion.rune_list().len();
        if count != usize::from(circle) {
            warn!(count, circle, "suggested rune count differs from requested circle");
        }
        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "runes": "VAS LOR FLAM",
        "pronunciation": "VAS LORLAM",
        "description": "Una lama di luce ardente.",
        "explanation": "LOR guida, FLAM brucia, VAS amplifica."
    }"#;

    #[test]
    fn decodes_payload() {
        let s = SpellSuggestion::from_json(PAYLOAD).ok();
        assert_eq!(s.as_ref().map(|s| s.pronunciation.as_str()), Some("VAS LORLAM"));
        let runes = s.map(|s| s.rune_list()).unwrap_or_default();
        assert_eq!(runes, vec![Rune::new("vas"), Rune::new("lor"), Rune::new("flam")]);
    }

    #[test]
    fn rejects_garbage_and_missing_fields() {
        assert!(matches!(
            SpellSuggestion::from_json("not json"),
            Err(SuggestionError::Unparseable(_))
        ));
        assert!(matches!(
            SpellSuggestion::from_json(r#"{"runes": "LOR"}"#),
            Err(SuggestionError::Unparseable(_))
        ));
    }

    #[test]
    fn recorded_suggester_replays() {
        let suggester = RecordedSuggester::new(PAYLOAD);
        let s = suggester.suggest("Illuminare la cripta", 3);
        assert_eq!(s.ok().map(|s| s.runes), Some("VAS LOR FLAM".to_string()));
    }

    #[test]
    fn blank_intent_is_rejected() {
        let suggester = RecordedSuggester::new(PAYLOAD);
        assert!(matches!(
            suggester.suggest("   ", 3),
            Err(SuggestionError::EmptyIntent)
        ));
    }

    #[test]
    fn recorded_suggester_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("answer.json");
        std::fs::write(&path, PAYLOAD).unwrap();
        let suggester = RecordedSuggester::from_path(&path).unwrap();
        assert!(suggester.suggest("luce", 3).is_ok());

        let missing = RecordedSuggester::from_path(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(SuggestionError::Upstream(_))));
    }

    #[test]
    fn prompt_mentions_intent_and_circle() {
        let prompt = build_suggestion_prompt("  Distrarre una guardia ", 2);
        assert!(prompt.contains("Intenzione: Distrarre una guardia\n"));
        assert!(prompt.contains("esattamente 2 rune"));
    }
}
