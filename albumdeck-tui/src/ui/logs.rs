use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{keys::Action, log_buffer::LogBuffer};

use super::layout;

pub struct LogsState {
    pub log_buffer: LogBuffer,
    pub scroll_offset: usize,
}

impl LogsState {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            log_buffer,
            scroll_offset: 0,
        }
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_offset = self.log_buffer.len().saturating_sub(1);
    }
}

/// Actions the logs panel asks the app to perform.
pub enum LogsAction {
    ToggleLogs,
    Quit,
}

pub fn draw(frame: &mut Frame, logs: &mut LogsState, area: Rect) {
    let entries = logs.log_buffer.get_entries();

    let block = Block::default()
        .title(format!(" Logs ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if entries.is_empty() {
        let empty = Paragraph::new("No log entries")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let (level_str, level_color) = match entry.level {
                tracing::Level::ERROR => ("ERR", Color::Red),
                tracing::Level::WARN => ("WRN", Color::Yellow),
                tracing::Level::INFO => ("INF", Color::Cyan),
                tracing::Level::DEBUG => ("DBG", Color::Green),
                tracing::Level::TRACE => ("TRC", Color::DarkGray),
            };

            Line::from(vec![
                Span::styled(
                    level_str,
                    Style::default()
                        .fg(level_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!(
                        "{:width$}",
                        shorten_target(&entry.target),
                        width = layout::LOG_TARGET_WIDTH
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::raw(entry.message.as_str()),
            ])
            .into()
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Rgb(40, 40, 60))
            .add_modifier(Modifier::BOLD),
    );

    logs.scroll_offset = logs.scroll_offset.min(entries.len() - 1);
    let mut state = ListState::default().with_selected(Some(logs.scroll_offset));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Keeps the tail of long targets, where the module name is.
fn shorten_target(target: &str) -> String {
    if target.len() <= layout::LOG_TARGET_WIDTH {
        return target.to_string();
    }
    let mut start = target.len() - layout::LOG_TARGET_SUFFIX_LEN;
    while !target.is_char_boundary(start) {
        start += 1;
    }
    format!("...{}", &target[start..])
}

pub fn handle_key(logs: &mut LogsState, action: Action) -> Option<LogsAction> {
    let last = logs.log_buffer.len().saturating_sub(1);
    match action {
        Action::Back => return Some(LogsAction::ToggleLogs),
        Action::Quit => return Some(LogsAction::Quit),
        Action::MoveUp => logs.scroll_offset = logs.scroll_offset.saturating_sub(1),
        Action::MoveDown => logs.scroll_offset = (logs.scroll_offset + 1).min(last),
        Action::PageUp => {
            logs.scroll_offset = logs.scroll_offset.saturating_sub(layout::PAGE_SCROLL_SIZE)
        }
        Action::PageDown => {
            logs.scroll_offset = (logs.scroll_offset + layout::PAGE_SCROLL_SIZE).min(last)
        }
        Action::GotoTop => logs.scroll_offset = 0,
        Action::GotoBottom => logs.scroll_offset = last,
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_target() {
        assert_eq!(shorten_target("albumdeck::remote"), "albumdeck::remote");
        let long = "albumdeck_core::album_list::navigation";
        let short = shorten_target(long);
        assert!(short.starts_with("..."));
        assert!(short.ends_with("navigation"));
        assert_eq!(short.len(), 3 + layout::LOG_TARGET_SUFFIX_LEN);
    }

    #[test]
    fn test_scrolling_empty_buffer() {
        let mut logs = LogsState::new(LogBuffer::new());
        assert!(handle_key(&mut logs, Action::MoveDown).is_none());
        assert!(handle_key(&mut logs, Action::PageDown).is_none());
        assert_eq!(logs.scroll_offset, 0);
        assert!(matches!(
            handle_key(&mut logs, Action::Back),
            Some(LogsAction::ToggleLogs)
        ));
    }
}
