//! Favorite music page

use haze_content::{MusicLibrary, Remote};

use super::{header, remote_blocks, Block, Page};
use crate::router::{Route, Router};

/// `/favorite-music`: the song list
pub fn music_page(router: &Router, music: &Remote<MusicLibrary>) -> Page {
    let mut page = Page::new(Route::FavoriteMusic).with_blocks(header(router, Route::FavoriteMusic));
    page.push(Block::Section {
        title: "Favorite Music".to_string(),
        refreshing: music.is_refreshing() && !music.is_loading(),
    });

    page.with_blocks(remote_blocks(music, |library| {
        if library.songs.is_empty() {
            return vec![Block::Placeholder("No songs yet".to_string())];
        }
        let lines = library
            .songs
            .iter()
            .map(|song| format!("{} - {}", song.title, song.artist))
            .collect();
        vec![Block::List(lines)]
    }))
}
