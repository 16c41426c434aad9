//! Client-side routes
//!
//! Paths are matched after the deployment basename is stripped, so the same
//! routes work whether the site is served from `/` or from `/repo/`.

use std::fmt;

/// A page the site can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` - profile card and music player
    Home,
    /// `/favorite-music`
    FavoriteMusic,
    /// `/favorite-games`
    FavoriteGames,
    /// `/favorite-movies`
    FavoriteMovies,
    /// Anything else
    NotFound,
}

impl Route {
    /// Routes listed in the header navigation, in display order
    pub const NAV: [Route; 4] = [
        Route::Home,
        Route::FavoriteMusic,
        Route::FavoriteGames,
        Route::FavoriteMovies,
    ];

    /// Path relative to the basename
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::FavoriteMusic => "/favorite-music",
            Route::FavoriteGames => "/favorite-games",
            Route::FavoriteMovies => "/favorite-movies",
            Route::NotFound => "/*",
        }
    }

    /// Header link text
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "about me",
            Route::FavoriteMusic => "favorite music",
            Route::FavoriteGames => "favorite games",
            Route::FavoriteMovies => "favorite movies",
            Route::NotFound => "not found",
        }
    }

    /// Match a basename-relative path
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/favorite-music" => Route::FavoriteMusic,
            "/favorite-games" => Route::FavoriteGames,
            "/favorite-movies" => Route::FavoriteMovies,
            _ => Route::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolves full paths under a basename
#[derive(Debug, Clone)]
pub struct Router {
    basename: String,
}

impl Router {
    /// Create a router for `basename` (`/` or a prefix without a trailing slash)
    pub fn new(basename: impl Into<String>) -> Self {
        let basename = basename.into();
        let basename = match basename.trim_end_matches('/') {
            "" => "/".to_string(),
            b => b.to_string(),
        };
        Self { basename }
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Resolve a full path to a route
    ///
    /// Paths outside the basename are not found. A bare route name without
    /// a leading slash (as typed on the command line) is treated as rooted.
    pub fn resolve(&self, path: &str) -> Route {
        let path = path.trim();
        let rooted;
        let path = if path.starts_with('/') {
            path
        } else {
            rooted = format!("/{}", path);
            rooted.as_str()
        };

        match self.strip_basename(path) {
            Some(relative) => Route::from_path(relative),
            None => Route::NotFound,
        }
    }

    /// Full path for a route
    pub fn href(&self, route: Route) -> String {
        match (self.basename.as_str(), route) {
            ("/", route) => route.path().to_string(),
            (base, Route::Home) => format!("{}/", base),
            (base, route) => format!("{}{}", base, route.path()),
        }
    }

    /// Full path for a basename-relative path such as `/favorite-music`
    pub fn join(&self, relative: &str) -> String {
        let relative = format!("/{}", relative.trim().trim_start_matches('/'));
        if self.basename == "/" {
            relative
        } else {
            format!("{}{}", self.basename, relative)
        }
    }

    fn strip_basename<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.basename == "/" {
            return Some(path);
        }
        let rest = path.strip_prefix(self.basename.as_str())?;
        // "/repo" must not match "/repository"
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') {
            Some(rest)
        } else {
            None
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}
