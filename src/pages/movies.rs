//! Favorite movies page

use haze_content::{MovieList, Remote};

use super::{header, remote_blocks, Block, Page};
use crate::router::{Route, Router};

/// `/favorite-movies`: one card per movie
pub fn movies_page(router: &Router, movies: &Remote<MovieList>) -> Page {
    let mut page =
        Page::new(Route::FavoriteMovies).with_blocks(header(router, Route::FavoriteMovies));
    page.push(Block::Section {
        title: "Favorite Movies".to_string(),
        refreshing: movies.is_refreshing() && !movies.is_loading(),
    });

    page.with_blocks(remote_blocks(movies, |list| {
        list.movies
            .iter()
            .map(|movie| Block::Card {
                title: movie.name.clone(),
                subtitle: movie.genre.clone(),
                body: movie.description.clone(),
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use haze_content::{ContentError, DocumentKind, Movie};

    #[test]
    fn test_cards() {
        let mut remote = Remote::new(DocumentKind::Movies);
        let generation = remote.begin_refresh();
        remote.apply(
            generation,
            Ok(MovieList {
                last_updated: "2025-01-01".to_string(),
                movies: vec![
                    Movie {
                        name: "Hereditary".to_string(),
                        genre: "Horror".to_string(),
                        description: "Family grief".to_string(),
                    },
                    Movie::default(),
                ],
            }),
        );

        let page = movies_page(&Router::default(), &remote);
        assert_eq!(page.card_count(), 2);
        assert!(page.contains_text("Hereditary"));
        assert!(page.contains_text("Favorite Movies"));
    }

    #[test]
    fn test_failure_placeholder() {
        let mut remote = Remote::new(DocumentKind::Movies);
        let generation = remote.begin_refresh();
        remote.apply(generation, Err(ContentError::Http(404)));

        let page = movies_page(&Router::default(), &remote);
        assert!(page.has_placeholder("Failed to load movies"));
        assert_eq!(page.card_count(), 0);
    }
}
