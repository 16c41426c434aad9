//! Document models
//!
//! Documents are parsed leniently: every field defaults when missing so a
//! partially malformed document still renders, with empty values in place
//! of the missing fields.

use serde::de::DeserializeOwned;
use serde::{Serialize, Deserialize};

use crate::error::ContentError;

/// A JSON document served at a fixed site path
pub trait Document: DeserializeOwned + Sized {
    /// Which document this is
    const KIND: DocumentKind;

    /// Site path the document is served at
    const PATH: &'static str = Self::KIND.path();

    /// Parse from JSON text
    fn parse(text: &str) -> Result<Self, ContentError> {
        serde_json::from_str(text).map_err(ContentError::from)
    }

    /// Take this document out of a [`LoadedDocument`] of any kind
    fn from_loaded(document: LoadedDocument) -> Result<Self, ContentError>;
}

/// The "about me" profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub pronouns: String,
    pub last_updated: String,
    pub bio: Vec<String>,
    pub likes: Vec<String>,
}

impl Document for Profile {
    const KIND: DocumentKind = DocumentKind::Profile;

    fn from_loaded(document: LoadedDocument) -> Result<Self, ContentError> {
        match document {
            LoadedDocument::Profile(inner) => Ok(inner),
            other => Err(ContentError::WrongKind {
                expected: Self::KIND,
                found: other.kind(),
            }),
        }
    }
}

/// One playable track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Site-relative path of the audio file
    pub file: String,
}

/// The player's track list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicLibrary {
    pub songs: Vec<Song>,
}

impl Document for MusicLibrary {
    const KIND: DocumentKind = DocumentKind::Music;

    fn from_loaded(document: LoadedDocument) -> Result<Self, ContentError> {
        match document {
            LoadedDocument::Music(inner) => Ok(inner),
            other => Err(ContentError::WrongKind {
                expected: Self::KIND,
                found: other.kind(),
            }),
        }
    }
}

/// A favorite movie
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub name: String,
    pub genre: String,
    pub description: String,
}

/// Favorite movies page content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovieList {
    pub last_updated: String,
    pub movies: Vec<Movie>,
}

impl Document for MovieList {
    const KIND: DocumentKind = DocumentKind::Movies;

    fn from_loaded(document: LoadedDocument) -> Result<Self, ContentError> {
        match document {
            LoadedDocument::Movies(inner) => Ok(inner),
            other => Err(ContentError::WrongKind {
                expected: Self::KIND,
                found: other.kind(),
            }),
        }
    }
}

/// A favorite game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub name: String,
    pub genre: String,
    pub description: String,
}

/// Favorite games page content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameList {
    pub last_updated: String,
    pub games: Vec<Game>,
}

impl Document for GameList {
    const KIND: DocumentKind = DocumentKind::Games;

    fn from_loaded(document: LoadedDocument) -> Result<Self, ContentError> {
        match document {
            LoadedDocument::Games(inner) => Ok(inner),
            other => Err(ContentError::WrongKind {
                expected: Self::KIND,
                found: other.kind(),
            }),
        }
    }
}

/// Identifies a document independent of its Rust type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Profile,
    Music,
    Movies,
    Games,
}

impl DocumentKind {
    /// All document kinds
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Profile,
        DocumentKind::Music,
        DocumentKind::Movies,
        DocumentKind::Games,
    ];

    /// Site path of the document
    pub const fn path(self) -> &'static str {
        match self {
            DocumentKind::Profile => "/profile.json",
            DocumentKind::Music => "/music.json",
            DocumentKind::Movies => "/movies.json",
            DocumentKind::Games => "/games.json",
        }
    }

    /// Lowercase noun used in log and failure messages
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Profile => "profile",
            DocumentKind::Music => "music",
            DocumentKind::Movies => "movies",
            DocumentKind::Games => "games",
        }
    }

    /// Parse text as this kind of document
    pub fn parse(self, text: &str) -> Result<LoadedDocument, ContentError> {
        Ok(match self {
            DocumentKind::Profile => LoadedDocument::Profile(Profile::parse(text)?),
            DocumentKind::Music => LoadedDocument::Music(MusicLibrary::parse(text)?),
            DocumentKind::Movies => LoadedDocument::Movies(MovieList::parse(text)?),
            DocumentKind::Games => LoadedDocument::Games(GameList::parse(text)?),
        })
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed document of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedDocument {
    Profile(Profile),
    Music(MusicLibrary),
    Movies(MovieList),
    Games(GameList),
}

impl LoadedDocument {
    /// Kind of the contained document
    pub fn kind(&self) -> DocumentKind {
        match self {
            LoadedDocument::Profile(_) => DocumentKind::Profile,
            LoadedDocument::Music(_) => DocumentKind::Music,
            LoadedDocument::Movies(_) => DocumentKind::Movies,
            LoadedDocument::Games(_) => DocumentKind::Games,
        }
    }
}
