use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ── Main vertical layout ────────────────────────────────────────────────────

pub const NOW_PLAYING_HEIGHT: u16 = 3;
pub const CONTENT_MIN_HEIGHT: u16 = 3;
pub const HELP_BAR_HEIGHT: u16 = 1;

pub struct MainLayout {
    pub now_playing: Rect,
    pub content: Rect,
    pub help_bar: Rect,
}

pub fn split_main(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NOW_PLAYING_HEIGHT),
            Constraint::Min(CONTENT_MIN_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);
    MainLayout {
        now_playing: chunks[0],
        content: chunks[1],
        help_bar: chunks[2],
    }
}

// ── Content horizontal layout ───────────────────────────────────────────────

pub const LIBRARY_MIN_WIDTH: u16 = 30;
pub const DEVICES_WIDTH: u16 = 36;

pub struct ContentLayout {
    pub library: Rect,
    pub devices: Rect,
}

pub fn split_content(area: Rect) -> ContentLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(LIBRARY_MIN_WIDTH),
            Constraint::Length(DEVICES_WIDTH),
        ])
        .split(area);
    ContentLayout {
        library: chunks[0],
        devices: chunks[1],
    }
}

// ── Library table ───────────────────────────────────────────────────────────

/// Space between the artist and title columns.
pub const COLUMN_SPACING: u16 = 2;
pub const HIGHLIGHT_SYMBOL: &str = "> ";

/// The width of a column that holds `column_width` cells plus an ellipsis.
pub fn library_column_width(column_width: usize) -> u16 {
    let width = column_width + albumdeck_core::window::ELLIPSIS.len();
    u16::try_from(width).unwrap_or(u16::MAX)
}

// ── Interaction constants ───────────────────────────────────────────────────

pub const PAGE_SCROLL_SIZE: usize = 20;

// ── Log view ────────────────────────────────────────────────────────────────

pub const LOG_TARGET_WIDTH: usize = 24;
pub const LOG_TARGET_SUFFIX_LEN: usize = 21;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_main() {
        let main = split_main(Rect::new(0, 0, 100, 40));
        assert_eq!(main.now_playing.height, NOW_PLAYING_HEIGHT);
        assert_eq!(main.help_bar.height, HELP_BAR_HEIGHT);
        assert_eq!(main.help_bar.y, 39);
        assert_eq!(main.content.height, 40 - NOW_PLAYING_HEIGHT - HELP_BAR_HEIGHT);
    }

    #[test]
    fn test_split_content() {
        let content = split_content(Rect::new(0, 3, 100, 20));
        assert_eq!(content.devices.width, DEVICES_WIDTH);
        assert_eq!(content.library.width, 100 - DEVICES_WIDTH);
        assert_eq!(content.devices.x, 100 - DEVICES_WIDTH);
    }

    #[test]
    fn test_library_column_width() {
        assert_eq!(library_column_width(20), 23);
        assert_eq!(library_column_width(usize::MAX / 2), u16::MAX);
    }
}
