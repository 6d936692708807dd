use serde::{Deserialize, Serialize};

use crate::modules::search::domain::value_objects::{EntityKind, MediaType};

/// Kinds every search leaves out unless the caller names kinds explicitly
pub const ALWAYS_EXCLUDED: [EntityKind; 2] = [EntityKind::Year, EntityKind::Folder];

/// Container kinds excluded after the toggle groups are applied
pub const CONTAINER_EXCLUDED: [EntityKind; 2] =
    [EntityKind::CollectionFolder, EntityKind::Folder];

/// Boolean switches sent with a search request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeToggles {
    pub include_genres: bool,
    pub include_people: bool,
    pub include_studios: bool,
    pub include_artists: bool,
    pub include_media: bool,
}

impl TypeToggles {
    /// Every auxiliary group switched on, media off
    pub fn all_groups() -> Self {
        Self {
            include_genres: true,
            include_people: true,
            include_studios: true,
            include_artists: true,
            include_media: false,
        }
    }
}

/// Auxiliary, non-media kinds controlled by one toggle each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeGroup {
    Genres,
    People,
    Studios,
    Artists,
}

impl TypeGroup {
    pub const ALL: [TypeGroup; 4] = [
        TypeGroup::Genres,
        TypeGroup::People,
        TypeGroup::Studios,
        TypeGroup::Artists,
    ];

    pub fn kinds(&self) -> &'static [EntityKind] {
        match self {
            TypeGroup::Genres => &[
                EntityKind::Genre,
                EntityKind::GameGenre,
                EntityKind::MusicGenre,
            ],
            TypeGroup::People => &[EntityKind::Person],
            TypeGroup::Studios => &[EntityKind::Studio],
            TypeGroup::Artists => &[EntityKind::MusicArtist],
        }
    }

    /// Kind whose presence in an explicit include list names this group
    pub fn label(&self) -> EntityKind {
        match self {
            TypeGroup::Genres => EntityKind::Genre,
            TypeGroup::People => EntityKind::Person,
            TypeGroup::Studios => EntityKind::Studio,
            TypeGroup::Artists => EntityKind::MusicArtist,
        }
    }

    pub fn is_enabled(&self, toggles: &TypeToggles) -> bool {
        match self {
            TypeGroup::Genres => toggles.include_genres,
            TypeGroup::People => toggles.include_people,
            TypeGroup::Studios => toggles.include_studios,
            TypeGroup::Artists => toggles.include_artists,
        }
    }
}

/// Derived include/exclude sets handed to the catalog
///
/// A non-empty `include_kinds` is authoritative: `exclude_kinds` and
/// `media_types` are then always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFilter {
    pub include_kinds: Vec<EntityKind>,
    pub exclude_kinds: Vec<EntityKind>,
    pub media_types: Vec<MediaType>,
}

impl TypeFilter {
    /// Derive the filter from request toggles and explicit kind lists
    ///
    /// Each group is judged against the caller's explicit include list, not
    /// against kinds added by earlier groups.
    pub fn build(
        toggles: &TypeToggles,
        explicit_include: &[EntityKind],
        explicit_exclude: &[EntityKind],
        media_types: &[MediaType],
    ) -> Self {
        let mut include_kinds: Vec<EntityKind> = Vec::new();
        for kind in explicit_include {
            add_if_missing(&mut include_kinds, *kind);
        }

        let mut exclude_kinds: Vec<EntityKind> = Vec::new();
        for kind in explicit_exclude.iter().chain(ALWAYS_EXCLUDED.iter()) {
            add_if_missing(&mut exclude_kinds, *kind);
        }

        for group in TypeGroup::ALL {
            let requested = group.is_enabled(toggles)
                && (explicit_include.is_empty() || explicit_include.contains(&group.label()));

            if requested {
                // Media searches never pull in the auxiliary kinds
                if !toggles.include_media {
                    for kind in group.kinds() {
                        add_if_missing(&mut include_kinds, *kind);
                    }
                }
            } else {
                for kind in group.kinds() {
                    add_if_missing(&mut exclude_kinds, *kind);
                }
            }
        }

        for kind in CONTAINER_EXCLUDED {
            add_if_missing(&mut exclude_kinds, kind);
        }

        let mut media_types = media_types.to_vec();

        if !include_kinds.is_empty() {
            exclude_kinds.clear();
            media_types.clear();
        }

        log::trace!(
            "Type filter: include={:?} exclude={:?} media={:?}",
            include_kinds,
            exclude_kinds,
            media_types
        );

        Self {
            include_kinds,
            exclude_kinds,
            media_types,
        }
    }
}

fn add_if_missing(list: &mut Vec<EntityKind>, kind: EntityKind) {
    if !list.contains(&kind) {
        list.push(kind);
    }
}
