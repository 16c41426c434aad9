//! Site content documents
//!
//! The site's content lives in static JSON documents that are fetched at
//! runtime and rendered as opaque display data:
//!
//! - [`Profile`] - `/profile.json`
//! - [`MusicLibrary`] / [`Song`] - `/music.json`
//! - [`MovieList`] / [`Movie`] - `/movies.json`
//! - [`GameList`] / [`Game`] - `/games.json`
//!
//! Fetching goes through a [`DocumentSource`] (static directory, in-memory,
//! or HTTP with the `network` feature). Every request carries a
//! cache-busting timestamp. [`ContentLoader`] runs fetches on a worker thread
//! and [`Remote`] tracks per-view load state, discarding stale responses.

mod documents;
mod error;
mod request;
mod source;
mod loader;
mod remote;

pub use documents::{
    Document, DocumentKind, LoadedDocument,
    Profile, Song, MusicLibrary, Movie, MovieList, Game, GameList,
};
pub use error::ContentError;
pub use request::{DocumentRequest, normalize_base_path, router_basename, timestamp_millis};
pub use source::{DocumentSource, DirSource, MemorySource};
#[cfg(feature = "network")]
pub use source::HttpSource;
pub use loader::{ContentLoader, LoadResult};
pub use remote::{Remote, RemoteState};
