use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Category tag carried by every catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    // Name-lookup entities
    Genre,
    GameGenre,
    MusicGenre,
    Person,
    Studio,
    MusicArtist,
    Year,

    // Containers
    Folder,
    CollectionFolder,
    BoxSet,
    Playlist,
    PhotoAlbum,

    // Playable media
    Movie,
    Series,
    Season,
    Episode,
    Trailer,
    Video,
    MusicVideo,
    Audio,
    AudioBook,
    MusicAlbum,
    Book,
    Game,
    Photo,
    TvChannel,
    TvProgram,
}

impl EntityKind {
    pub const ALL: [EntityKind; 27] = [
        EntityKind::Genre,
        EntityKind::GameGenre,
        EntityKind::MusicGenre,
        EntityKind::Person,
        EntityKind::Studio,
        EntityKind::MusicArtist,
        EntityKind::Year,
        EntityKind::Folder,
        EntityKind::CollectionFolder,
        EntityKind::BoxSet,
        EntityKind::Playlist,
        EntityKind::PhotoAlbum,
        EntityKind::Movie,
        EntityKind::Series,
        EntityKind::Season,
        EntityKind::Episode,
        EntityKind::Trailer,
        EntityKind::Video,
        EntityKind::MusicVideo,
        EntityKind::Audio,
        EntityKind::AudioBook,
        EntityKind::MusicAlbum,
        EntityKind::Book,
        EntityKind::Game,
        EntityKind::Photo,
        EntityKind::TvChannel,
        EntityKind::TvProgram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Genre => "Genre",
            EntityKind::GameGenre => "GameGenre",
            EntityKind::MusicGenre => "MusicGenre",
            EntityKind::Person => "Person",
            EntityKind::Studio => "Studio",
            EntityKind::MusicArtist => "MusicArtist",
            EntityKind::Year => "Year",
            EntityKind::Folder => "Folder",
            EntityKind::CollectionFolder => "CollectionFolder",
            EntityKind::BoxSet => "BoxSet",
            EntityKind::Playlist => "Playlist",
            EntityKind::PhotoAlbum => "PhotoAlbum",
            EntityKind::Movie => "Movie",
            EntityKind::Series => "Series",
            EntityKind::Season => "Season",
            EntityKind::Episode => "Episode",
            EntityKind::Trailer => "Trailer",
            EntityKind::Video => "Video",
            EntityKind::MusicVideo => "MusicVideo",
            EntityKind::Audio => "Audio",
            EntityKind::AudioBook => "AudioBook",
            EntityKind::MusicAlbum => "MusicAlbum",
            EntityKind::Book => "Book",
            EntityKind::Game => "Game",
            EntityKind::Photo => "Photo",
            EntityKind::TvChannel => "TvChannel",
            EntityKind::TvProgram => "TvProgram",
        }
    }

    /// Entities addressed by name across the library rather than as children of a folder
    pub fn is_name_lookup(&self) -> bool {
        matches!(
            self,
            EntityKind::Genre
                | EntityKind::GameGenre
                | EntityKind::MusicGenre
                | EntityKind::Person
                | EntityKind::Studio
                | EntityKind::MusicArtist
                | EntityKind::Year
        )
    }
}

impl FromStr for EntityKind {
    type Err = AppError;

    /// Case-insensitive; "People" is accepted for `Person`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("People") {
            return Ok(EntityKind::Person);
        }

        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown entity type: '{}'", s)))
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
