//! External services Runecaster talks to, as injectable capabilities.
//!
//! The rules engine never performs I/O. Whatever drives it (the CLI, a UI)
//! receives a [`SpellSuggester`] and a [`Narrator`] and passes their
//! results into `rc-mechanics`.

pub mod error;
pub mod narration;
pub mod suggestion;

pub use error::{NarrationError, SuggestionError};
pub use narration::{AudioClip, Narrator, SilentNarrator};
pub use suggestion::{RecordedSuggester, SpellSuggester, SpellSuggestion, build_suggestion_prompt};
