use axum::Json;
use serde::Serialize;

use crate::sounds::{sounds, AmbientSound};

/// A track as the sounds page sees it.
#[derive(Debug, Serialize)]
pub struct SoundEntry {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub url: String,
}

impl From<&AmbientSound> for SoundEntry {
    fn from(sound: &AmbientSound) -> Self {
        Self {
            name: sound.name,
            label: sound.label,
            description: sound.description,
            url: sound.url(),
        }
    }
}

/// Ambient sound catalog
pub async fn sounds_handler() -> Json<Vec<SoundEntry>> {
    Json(sounds().iter().map(SoundEntry::from).collect())
}
