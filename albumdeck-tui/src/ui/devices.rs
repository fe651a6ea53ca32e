use albumdeck_spotify::Device;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::{app::App, keys::Action};

use super::layout;

/// The devices the player can hand playback to.
#[derive(Debug, Default)]
pub struct DevicesState {
    pub devices: Vec<Device>,
    pub selected: usize,
}

impl DevicesState {
    /// Replaces the device list, keeping the selection on the same device
    /// when it is still present and falling back to the active one.
    pub fn update(&mut self, devices: Vec<Device>) {
        let selected_id = self.selected_device().and_then(|d| d.id.clone());
        self.selected = selected_id
            .and_then(|id| devices.iter().position(|d| d.id.as_ref() == Some(&id)))
            .or_else(|| devices.iter().position(|d| d.is_active))
            .unwrap_or(0);
        self.devices = devices;
    }

    pub fn selected_device(&self) -> Option<&Device> {
        self.devices.get(self.selected)
    }

    pub fn active_device(&self) -> Option<&Device> {
        self.devices.iter().find(|d| d.is_active)
    }

    fn move_selection(&mut self, down: bool) {
        let last = self.devices.len().saturating_sub(1);
        self.selected = if down {
            (self.selected + 1).min(last)
        } else {
            self.selected.saturating_sub(1)
        };
    }
}

pub fn draw(frame: &mut Frame, state: &DevicesState, area: Rect, focused: bool) {
    let block = Block::default()
        .title(" Devices ")
        .borders(Borders::ALL)
        .border_style(super::border_style(focused));

    if state.devices.is_empty() {
        let empty = Paragraph::new("No devices found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows = state.devices.iter().map(|device| {
        let marker = if device.is_active { "\u{25B6}" } else { " " };
        let style = if device.is_active {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        Row::new([marker, device.name.as_str(), device.device_type.as_str()]).style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(["", "Name", "Type"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(block)
    .highlight_symbol(layout::HIGHLIGHT_SYMBOL)
    .row_highlight_style(super::highlight_style(focused));

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

pub fn handle_key(app: &mut App, action: Action) {
    match action {
        Action::MoveUp => app.devices.move_selection(false),
        Action::MoveDown => app.devices.move_selection(true),
        Action::Select => {
            let Some(device) = app.devices.selected_device() else {
                return;
            };
            match device.id.clone() {
                Some(id) => app.remote.transfer_playback(&id),
                None => tracing::warn!("{} can't be controlled from here", device.name),
            }
        }
        Action::Back => app.switch_focus(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, is_active: bool) -> Device {
        Device {
            id: Some(id.to_string()),
            name: id.to_uppercase(),
            device_type: "Computer".to_string(),
            is_active,
            volume_percent: None,
        }
    }

    #[test]
    fn test_first_update_selects_active_device() {
        let mut state = DevicesState::default();
        state.update(vec![device("a", false), device("b", true), device("c", false)]);
        assert_eq!(state.selected, 1);
        assert_eq!(state.active_device().map(|d| d.name.as_str()), Some("B"));
    }

    #[test]
    fn test_update_keeps_selected_device() {
        let mut state = DevicesState::default();
        state.update(vec![device("a", true), device("b", false), device("c", false)]);
        state.move_selection(true);
        state.move_selection(true);
        assert_eq!(state.selected, 2);

        // "c" moved up once "a" disappeared.
        state.update(vec![device("b", true), device("c", false)]);
        assert_eq!(state.selected_device().map(|d| d.name.as_str()), Some("C"));
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut state = DevicesState::default();
        state.move_selection(true);
        assert_eq!(state.selected, 0);

        state.update(vec![device("a", false), device("b", false)]);
        state.move_selection(false);
        assert_eq!(state.selected, 0);
        state.move_selection(true);
        state.move_selection(true);
        assert_eq!(state.selected, 1);
    }
}
