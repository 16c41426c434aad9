//! Page views
//!
//! Each route builds a [`Page`]: a flat list of [`Block`]s describing what
//! is on screen. Pages hold display data only; [`TextRenderer`] draws them.

mod header;
mod profile;
mod player_bar;
mod music;
mod movies;
mod games;
mod not_found;
mod fallback;
mod text;

pub use header::{header, SITE_TITLE};
pub use profile::profile_card;
pub use player_bar::player_bar;
pub use music::music_page;
pub use movies::movies_page;
pub use games::games_page;
pub use not_found::not_found_page;
pub use fallback::fallback_page;
pub use text::TextRenderer;

use haze_content::{Remote, RemoteState};
use haze_player::PlayerView;

use crate::router::{Route, Router};

/// Shown while a document's first load is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// A header navigation entry
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub route: Route,
    pub active: bool,
}

/// One visual element of a page
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Site title linking home
    Title(String),
    /// Header navigation
    Nav(Vec<NavLink>),
    /// Section header with its refresh state
    Section { title: String, refreshing: bool },
    /// Small uppercase heading inside a section
    Heading(String),
    /// Plain paragraph
    Text(String),
    /// Stacked lines
    List(Vec<String>),
    /// Titled card (movies, games)
    Card {
        title: String,
        subtitle: String,
        body: String,
    },
    /// Loading or failure message in place of content
    Placeholder(String),
    /// Music player bar
    Player(PlayerView),
    /// Large display text (404, error pages)
    Banner(String),
    /// Clickable action
    Button(String),
    Divider,
}

impl Block {
    /// Every piece of text the block shows
    pub fn text_fragments(&self) -> Vec<&str> {
        match self {
            Block::Title(t)
            | Block::Heading(t)
            | Block::Text(t)
            | Block::Placeholder(t)
            | Block::Banner(t)
            | Block::Button(t) => vec![t.as_str()],
            Block::Nav(links) => links.iter().map(|l| l.label.as_str()).collect(),
            Block::Section { title, .. } => vec![title.as_str()],
            Block::List(lines) => lines.iter().map(String::as_str).collect(),
            Block::Card { title, subtitle, body } => {
                vec![title.as_str(), subtitle.as_str(), body.as_str()]
            }
            Block::Player(view) => vec![view.title.as_str(), view.artist.as_str()],
            Block::Divider => Vec::new(),
        }
    }
}

/// A rendered route
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub route: Route,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            blocks: Vec::new(),
        }
    }

    /// Append blocks (builder style)
    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// True if any block shows text containing `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.blocks
            .iter()
            .flat_map(Block::text_fragments)
            .any(|t| t.contains(needle))
    }

    /// True if a placeholder block shows exactly `text`
    pub fn has_placeholder(&self, text: &str) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b, Block::Placeholder(t) if t == text))
    }

    /// True while any section still shows the loading placeholder
    pub fn is_loading(&self) -> bool {
        self.has_placeholder(LOADING_TEXT)
    }

    /// The player bar, if visible
    pub fn player(&self) -> Option<&PlayerView> {
        self.blocks.iter().find_map(|b| match b {
            Block::Player(view) => Some(view),
            _ => None,
        })
    }

    /// Number of card blocks
    pub fn card_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Card { .. }))
            .count()
    }
}

/// `/`: header, profile card and the player bar
pub fn home_page(
    router: &Router,
    profile: &Remote<haze_content::Profile>,
    player: Option<PlayerView>,
) -> Page {
    Page::new(Route::Home)
        .with_blocks(header(router, Route::Home))
        .with_blocks(profile_card(profile))
        .with_blocks(player_bar(player))
}

/// Placeholder for a remote document that is not ready, or its rendering
pub(crate) fn remote_blocks<T>(
    remote: &Remote<T>,
    render: impl FnOnce(&T) -> Vec<Block>,
) -> Vec<Block> {
    match remote.state() {
        RemoteState::Loading => vec![Block::Placeholder(LOADING_TEXT.to_string())],
        RemoteState::Ready(document) => render(document),
        RemoteState::Failed(_) => vec![Block::Placeholder(format!(
            "Failed to load {}",
            remote.kind().label()
        ))],
    }
}
