//! Favorite games page

use haze_content::{GameList, Remote};

use super::{header, remote_blocks, Block, Page};
use crate::router::{Route, Router};

/// `/favorite-games`: one card per game
pub fn games_page(router: &Router, games: &Remote<GameList>) -> Page {
    let mut page =
        Page::new(Route::FavoriteGames).with_blocks(header(router, Route::FavoriteGames));
    page.push(Block::Section {
        title: "Favorite Games".to_string(),
        refreshing: games.is_refreshing() && !games.is_loading(),
    });

    page.with_blocks(remote_blocks(games, |list| {
        list.games
            .iter()
            .map(|game| Block::Card {
                title: game.name.clone(),
                subtitle: game.genre.clone(),
                body: game.description.clone(),
            })
            .collect()
    }))
}
