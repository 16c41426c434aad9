//! Site header with navigation

use super::{Block, NavLink};
use crate::router::{Route, Router};

/// Title shown at the top of every page
pub const SITE_TITLE: &str = "Haze's site...";

/// Title and navigation, with the link for `active` marked
pub fn header(router: &Router, active: Route) -> Vec<Block> {
    let links = Route::NAV
        .iter()
        .map(|&route| NavLink {
            label: route.label().to_string(),
            href: router.href(route),
            route,
            active: route == active,
        })
        .collect();

    vec![Block::Title(SITE_TITLE.to_string()), Block::Nav(links)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_marked() {
        let blocks = header(&Router::default(), Route::FavoriteMovies);
        assert_eq!(blocks[0], Block::Title("Haze's site...".to_string()));

        let Block::Nav(links) = &blocks[1] else {
            panic!("expected nav block");
        };
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            ["about me", "favorite music", "favorite games", "favorite movies"]
        );
        let active: Vec<_> = links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].route, Route::FavoriteMovies);
    }

    #[test]
    fn test_not_found_marks_nothing() {
        let blocks = header(&Router::default(), Route::NotFound);
        let Block::Nav(links) = &blocks[1] else {
            panic!("expected nav block");
        };
        assert!(links.iter().all(|l| !l.active));
    }

    #[test]
    fn test_links_use_basename() {
        let blocks = header(&Router::new("/hazesite"), Route::Home);
        let Block::Nav(links) = &blocks[1] else {
            panic!("expected nav block");
        };
        assert_eq!(links[1].href, "/hazesite/favorite-music");
    }
}
