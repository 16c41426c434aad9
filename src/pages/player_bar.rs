use haze_player::PlayerView;

use super::Block;

/// The player bar; nothing at all when the player has nothing to show
pub fn player_bar(view: Option<PlayerView>) -> Vec<Block> {
    view.map(Block::Player).into_iter().collect()
}
