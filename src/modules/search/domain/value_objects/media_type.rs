use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "photo")]
    Photo,
    #[serde(rename = "book")]
    Book,
    #[serde(rename = "game")]
    Game,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Audio => "audio",
            MediaType::Photo => "photo",
            MediaType::Book => "book",
            MediaType::Game => "game",
        }
    }
}

impl FromStr for MediaType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            "photo" => Ok(MediaType::Photo),
            "book" => Ok(MediaType::Book),
            "game" => Ok(MediaType::Game),
            _ => Err(AppError::InvalidInput(format!("Unknown media type: '{}'", s))),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
