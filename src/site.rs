//! The site: current route, its mounted views and their documents
//!
//! Navigating mounts the views of the new route from scratch: their
//! document state is reset and fresh loads are requested. Results come back
//! from the [`ContentLoader`] workers and are applied on [`Site::poll`].

use std::time::{Duration, Instant};

use haze_content::{
    ContentError, ContentLoader, Document, DocumentKind, GameList, LoadResult, LoadedDocument,
    MovieList, MusicLibrary, Profile, Remote, RemoteState,
};
use haze_player::{AudioPlayer, MediaElement};

use crate::boundary::ErrorBoundary;
use crate::config::PlayerConfig;
use crate::input::SiteAction;
use crate::pages::{self, Page};
use crate::router::{Route, Router};

/// Documents the views of a route fetch on mount
pub fn route_documents(route: Route) -> &'static [DocumentKind] {
    match route {
        Route::Home => &[DocumentKind::Profile, DocumentKind::Music],
        Route::FavoriteMusic => &[DocumentKind::Music],
        Route::FavoriteGames => &[DocumentKind::Games],
        Route::FavoriteMovies => &[DocumentKind::Movies],
        Route::NotFound => &[],
    }
}

/// Site state driven by the app loop
pub struct Site {
    router: Router,
    route: Route,
    path: String,
    loader: ContentLoader,
    profile: Remote<Profile>,
    music: Remote<MusicLibrary>,
    movies: Remote<MovieList>,
    games: Remote<GameList>,
    player: AudioPlayer,
    player_config: PlayerConfig,
    boundary: ErrorBoundary,
}

impl Site {
    /// Create a site on the home route; call [`navigate`](Self::navigate) to mount
    pub fn new(loader: ContentLoader, router: Router) -> Self {
        Self {
            router,
            route: Route::Home,
            path: "/".to_string(),
            loader,
            profile: Remote::new(DocumentKind::Profile),
            music: Remote::new(DocumentKind::Music),
            movies: Remote::new(DocumentKind::Movies),
            games: Remote::new(DocumentKind::Games),
            player: AudioPlayer::new(),
            player_config: PlayerConfig::default(),
            boundary: ErrorBoundary::new(),
        }
    }

    /// Builder: player defaults applied on every mount
    pub fn with_player_config(mut self, config: PlayerConfig) -> Self {
        self.player_config = config;
        self
    }

    /// Go to a full path and mount its views
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = self.router.resolve(path);
        self.path = path.to_string();
        self.route = route;

        if route == Route::NotFound {
            log::warn!("404 Error: User attempted to access non-existent route: {}", path);
        } else {
            log::info!("Route changed to {} ({})", route.path(), route);
        }
        self.mount();
        route
    }

    /// Go to a route and mount its views
    pub fn go(&mut self, route: Route) -> Route {
        let path = self.router.href(route);
        self.navigate(&path)
    }

    /// Re-fetch the documents with a refresh button on the current route
    ///
    /// On the home page only the profile card refreshes; the player keeps
    /// the song list it loaded on mount.
    pub fn refresh(&mut self) {
        let kinds: &[DocumentKind] = match self.route {
            Route::Home => &[DocumentKind::Profile],
            route => route_documents(route),
        };
        for &kind in kinds {
            self.request(kind);
        }
    }

    /// Apply every finished load; returns how many changed view state
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        for loaded in self.loader.poll_all() {
            if self.apply(loaded) {
                applied += 1;
            }
        }
        applied
    }

    /// Block until the current route's loads have all landed, up to `timeout`
    ///
    /// Returns false on timeout.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.is_refreshing() {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            match self.loader.wait(deadline - now) {
                Some(loaded) => {
                    self.apply(loaded);
                }
                None => return !self.is_refreshing(),
            }
        }
        true
    }

    /// True while any document of the current route is in flight
    pub fn is_refreshing(&self) -> bool {
        route_documents(self.route)
            .iter()
            .any(|&kind| self.remote_refreshing(kind))
    }

    /// Push player state to the media element and take its events
    pub fn sync_media(&mut self, media: &mut dyn MediaElement) {
        self.player.sync(media);
    }

    /// Carry out a key action; `Exit` and `ToggleFullscreen` belong to the window
    pub fn perform(&mut self, action: SiteAction) {
        match action {
            SiteAction::Navigate(route) => {
                self.go(route);
            }
            SiteAction::Refresh => self.refresh(),
            SiteAction::PlayPause => self.player.toggle_play_pause(),
            SiteAction::NextTrack => self.player.next(),
            SiteAction::PreviousTrack => self.player.previous(),
            SiteAction::Volume(delta) => {
                let volume = self.player.volume() + delta;
                self.player.set_volume(volume);
            }
            SiteAction::Seek(delta) => {
                let target = self.player.current_time() + delta;
                self.player.seek(target);
            }
            SiteAction::ClosePlayer => self.player.close(),
            SiteAction::Reload => self.reload(),
            SiteAction::ToggleFullscreen | SiteAction::Exit => {
                log::debug!("{:?} is handled by the window", action);
            }
        }
    }

    /// Build the current page inside the error boundary
    pub fn page(&mut self) -> Page {
        let route = self.route;
        self.boundary.render(route, || match route {
            Route::Home => pages::home_page(&self.router, &self.profile, self.player.view()),
            Route::FavoriteMusic => pages::music_page(&self.router, &self.music),
            Route::FavoriteGames => pages::games_page(&self.router, &self.games),
            Route::FavoriteMovies => pages::movies_page(&self.router, &self.movies),
            Route::NotFound => pages::not_found_page(&self.router),
        })
    }

    /// Trip the error boundary
    pub fn fail(&mut self, error: impl std::fmt::Display) {
        self.boundary.fail(error);
    }

    /// Clear the error screen and start over; no view state is kept
    pub fn reload(&mut self) {
        log::info!("Reloading {}", self.path);
        self.boundary.reload();
        self.profile.reset();
        self.music.reset();
        self.movies.reset();
        self.games.reset();
        self.mount();
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Full path last navigated to
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn profile(&self) -> &Remote<Profile> {
        &self.profile
    }

    pub fn music(&self) -> &Remote<MusicLibrary> {
        &self.music
    }

    pub fn movies(&self) -> &Remote<MovieList> {
        &self.movies
    }

    pub fn games(&self) -> &Remote<GameList> {
        &self.games
    }

    pub fn player(&self) -> &AudioPlayer {
        &self.player
    }

    pub fn boundary(&self) -> &ErrorBoundary {
        &self.boundary
    }

    fn mount(&mut self) {
        self.player.remount(
            AudioPlayer::new()
                .with_volume(self.player_config.volume)
                .with_autoplay(self.player_config.autoplay),
        );

        for &kind in route_documents(self.route) {
            self.reset_remote(kind);
            self.request(kind);
        }
    }

    fn request(&mut self, kind: DocumentKind) {
        let generation = match kind {
            DocumentKind::Profile => self.profile.begin_refresh(),
            DocumentKind::Music => self.music.begin_refresh(),
            DocumentKind::Movies => self.movies.begin_refresh(),
            DocumentKind::Games => self.games.begin_refresh(),
        };
        self.loader.request_kind(kind, generation);
    }

    fn reset_remote(&mut self, kind: DocumentKind) {
        match kind {
            DocumentKind::Profile => self.profile.reset(),
            DocumentKind::Music => self.music.reset(),
            DocumentKind::Movies => self.movies.reset(),
            DocumentKind::Games => self.games.reset(),
        }
    }

    fn remote_refreshing(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::Profile => self.profile.is_refreshing(),
            DocumentKind::Music => self.music.is_refreshing(),
            DocumentKind::Movies => self.movies.is_refreshing(),
            DocumentKind::Games => self.games.is_refreshing(),
        }
    }

    fn apply(&mut self, loaded: LoadResult) -> bool {
        let LoadResult { kind, generation, result } = loaded;
        match kind {
            DocumentKind::Profile => apply_to(&mut self.profile, generation, result),
            DocumentKind::Movies => apply_to(&mut self.movies, generation, result),
            DocumentKind::Games => apply_to(&mut self.games, generation, result),
            DocumentKind::Music => {
                if !apply_to(&mut self.music, generation, result) {
                    return false;
                }
                // Only the home page has a player mounted
                if self.route == Route::Home {
                    match self.music.state() {
                        RemoteState::Ready(library) => self.player.load_songs(library.songs.clone()),
                        RemoteState::Failed(_) => self.player.fail_loading(),
                        RemoteState::Loading => {}
                    }
                }
                true
            }
        }
    }
}

fn apply_to<T: Document>(
    remote: &mut Remote<T>,
    generation: u64,
    result: Result<LoadedDocument, ContentError>,
) -> bool {
    remote.apply(generation, result.and_then(T::from_loaded))
}
