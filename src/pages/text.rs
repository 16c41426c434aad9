//! Terminal rendering of pages

use std::fmt::Write;

use super::{Block, Page};

/// Draws a [`Page`] as plain text
#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: usize,
    bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            width: 64,
            bar_width: 20,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width of rules and dividers
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(8);
        self
    }

    /// Render every block of the page, one or more lines each
    pub fn render(&self, page: &Page) -> String {
        let mut out = String::new();
        for block in &page.blocks {
            self.render_block(&mut out, block);
        }
        out
    }

    fn render_block(&self, out: &mut String, block: &Block) {
        // Writing to a String cannot fail
        let _ = match block {
            Block::Title(title) => writeln!(out, "{} ☠", title.to_uppercase()),
            Block::Nav(links) => {
                let items: Vec<String> = links
                    .iter()
                    .map(|link| {
                        let label = link.label.to_uppercase();
                        if link.active {
                            format!("[{}]", label)
                        } else {
                            label
                        }
                    })
                    .collect();
                writeln!(out, "{}", items.join(" | "))
            }
            Block::Section { title, refreshing } => {
                let action = if *refreshing { "(refreshing...)" } else { "[R]efresh" };
                writeln!(out, "{}", "=".repeat(self.width))
                    .and_then(|_| writeln!(out, "♥ : {}  {}", title.to_uppercase(), action))
            }
            Block::Heading(text) => writeln!(out, "{}", text.to_uppercase()),
            Block::Text(text) => writeln!(out, "{}", text),
            Block::List(lines) => lines
                .iter()
                .try_for_each(|line| writeln!(out, "  {}", line)),
            Block::Card { title, subtitle, body } => writeln!(out, "♥ {}", title.to_uppercase())
                .and_then(|_| writeln!(out, "  {}", subtitle.to_uppercase()))
                .and_then(|_| writeln!(out, "  {}", body)),
            Block::Placeholder(text) => writeln!(out, "{:^width$}", text, width = self.width),
            Block::Player(view) => {
                let filled = (view.progress * self.bar_width as f32).round() as usize;
                let filled = filled.min(self.bar_width);
                writeln!(out, "{}", "-".repeat(self.width))
                    .and_then(|_| writeln!(out, "{}", view.status_line().to_uppercase()))
                    .and_then(|_| {
                        writeln!(
                            out,
                            "{} [{}{}] {}  vol {:>3.0}%",
                            view.elapsed,
                            "#".repeat(filled),
                            ".".repeat(self.bar_width - filled),
                            view.duration,
                            view.volume * 100.0
                        )
                    })
            }
            Block::Banner(text) => writeln!(out, "\n{:^width$}\n", text, width = self.width),
            Block::Button(label) => writeln!(out, "< {} >", label),
            Block::Divider => writeln!(out, "{}", "-".repeat(self.width)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{header, LOADING_TEXT};
    use crate::router::{Route, Router};
    use haze_player::PlayerView;

    #[test]
    fn test_header_marks_active() {
        let page = Page::new(Route::FavoriteMusic)
            .with_blocks(header(&Router::default(), Route::FavoriteMusic));
        let text = TextRenderer::new().render(&page);
        assert!(text.starts_with("HAZE'S SITE..."));
        assert!(text.contains("[FAVORITE MUSIC]"));
        assert!(text.contains("ABOUT ME |"));
    }

    #[test]
    fn test_player_line() {
        let page = Page::new(Route::Home).with_blocks([Block::Player(PlayerView {
            playing: false,
            title: "Morning Again".to_string(),
            artist: "Juice WRLD".to_string(),
            elapsed: "1:00".to_string(),
            duration: "2:00".to_string(),
            progress: 0.5,
            volume: 1.0,
        })]);
        let text = TextRenderer::new().render(&page);
        assert!(text.contains("PAUSED : MORNING AGAIN - JUICE WRLD"));
        assert!(text.contains("1:00 [##########..........] 2:00"));
        assert!(text.contains("vol 100%"));
    }

    #[test]
    fn test_placeholder_centered() {
        let page = Page::new(Route::Home)
            .with_blocks([Block::Placeholder(LOADING_TEXT.to_string())]);
        let text = TextRenderer::new().with_width(20).render(&page);
        assert_eq!(text, "     Loading...     \n");
    }
}
