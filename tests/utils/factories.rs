/// Test data factories using builder pattern
///
/// Provides a small media library with sensible defaults
use search_hints_lib::modules::search::domain::ContentFlags;
use search_hints_lib::{CatalogItem, CatalogSnapshot, EntityKind, MediaType, User};
use uuid::Uuid;

pub struct CatalogItemFactory {
    name: String,
    sort_name: Option<String>,
    kind: EntityKind,
    media_type: Option<MediaType>,
    parent: Option<Uuid>,
    ancestors: Vec<Uuid>,
    content: ContentFlags,
}

impl CatalogItemFactory {
    pub fn new(name: &str, kind: EntityKind) -> Self {
        Self {
            name: name.to_string(),
            sort_name: None,
            kind,
            media_type: None,
            parent: None,
            ancestors: Vec::new(),
            content: ContentFlags::default(),
        }
    }

    pub fn movie(name: &str) -> Self {
        Self::new(name, EntityKind::Movie).with_media_type(MediaType::Video)
    }

    pub fn series(name: &str) -> Self {
        Self::new(name, EntityKind::Series)
    }

    pub fn person(name: &str) -> Self {
        Self::new(name, EntityKind::Person)
    }

    pub fn artist(name: &str) -> Self {
        Self::new(name, EntityKind::MusicArtist)
    }

    pub fn with_sort_name(mut self, sort_name: &str) -> Self {
        self.sort_name = Some(sort_name.to_string());
        self
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn under(mut self, parent: Uuid) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn within(mut self, ancestor: Uuid) -> Self {
        self.ancestors.push(ancestor);
        self
    }

    pub fn for_kids(mut self) -> Self {
        self.content.kids = true;
        self
    }

    pub fn build(self) -> CatalogItem {
        let mut item = CatalogItem::new(self.name, self.kind).with_content(self.content);
        if let Some(sort_name) = self.sort_name {
            item = item.with_sort_name(sort_name);
        }
        if let Some(media_type) = self.media_type {
            item = item.with_media_type(media_type);
        }
        for ancestor in self.ancestors {
            item = item.with_ancestor(ancestor);
        }
        if let Some(parent) = self.parent {
            item = item.with_parent(parent);
        }
        item
    }
}

/// Library fixture: movie, music and kids folders plus a few people and artists
pub struct SampleLibrary {
    pub movies: Uuid,
    pub music: Uuid,
    pub kids: Uuid,
    pub alice: User,
    pub kid: User,
    pub snapshot: CatalogSnapshot,
}

impl SampleLibrary {
    pub fn new() -> Self {
        let movies = Uuid::new_v4();
        let music = Uuid::new_v4();
        let kids = Uuid::new_v4();

        let items = vec![
            CatalogItemFactory::new("Knights Folder", EntityKind::CollectionFolder).build(),
            CatalogItemFactory::movie("The Dark Knight")
                .with_sort_name("dark knight")
                .under(movies)
                .build(),
            CatalogItemFactory::movie("The Dark Knight Rises")
                .with_sort_name("dark knight rises")
                .under(movies)
                .build(),
            CatalogItemFactory::movie("Knight and Day").under(movies).build(),
            CatalogItemFactory::movie("A Knight's Tale")
                .with_sort_name("knight's tale")
                .under(movies)
                .build(),
            CatalogItemFactory::movie("Dark City").under(movies).build(),
            CatalogItemFactory::movie("Amélie").under(movies).build(),
            CatalogItemFactory::series("Knightfall").under(movies).build(),
            CatalogItemFactory::movie("Shrek the Third")
                .under(kids)
                .for_kids()
                .build(),
            CatalogItemFactory::movie("Shrek").under(kids).for_kids().build(),
            CatalogItemFactory::person("Keira Knightley").build(),
            CatalogItemFactory::new("Dark Fantasy", EntityKind::Genre).build(),
            CatalogItemFactory::artist("Queen").within(music).build(),
            CatalogItemFactory::artist("Queensryche").build(),
            CatalogItemFactory::new("Queen II", EntityKind::MusicAlbum)
                .with_media_type(MediaType::Audio)
                .under(music)
                .build(),
        ];

        let alice = User::new("alice");
        let kid = User::new("kid").with_library(kids);

        Self {
            movies,
            music,
            kids,
            snapshot: CatalogSnapshot {
                items,
                users: vec![alice.clone(), kid.clone()],
            },
            alice,
            kid,
        }
    }
}
