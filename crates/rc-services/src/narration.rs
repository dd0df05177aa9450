//! Narration: turning spell text into speech.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NarrationError;

/// Voice direction sent along with every narration request.
pub const NARRATION_STYLE: &str = "Voce potente e risonante, tono cupo e profetico, \
     ritmo maestoso e crescente, pause drammatiche tra le fasi del rito.";

/// Voice used for narration.
pub const NARRATION_VOICE: &str = "nova";

/// Audio produced by a narrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    /// MIME type of `bytes`, e.g. `audio/mpeg`.
    pub mime_type: String,
    /// Encoded audio.
    pub bytes: Vec<u8>,
    /// The text that was spoken.
    pub text: String,
}

impl AudioClip {
    /// Returns true if the clip holds no audio.
    pub fn is_silent(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A service that reads text aloud.
pub trait Narrator {
    /// Produce playable audio for `text`.
    fn narrate(&self, text: &str) -> Result<AudioClip, NarrationError>;
}

/// A narrator that produces empty clips. Used when no speech service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&self, text: &str) -> Result<AudioClip, NarrationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NarrationError::EmptyText);
        }
        debug!(voice = NARRATION_VOICE, chars = text.len(), "silent narration");
        Ok(AudioClip {
            mime_type: "audio/mpeg".to_string(),
            bytes: Vec::new(),
            text: text.to_string(),
        })
    }
}
