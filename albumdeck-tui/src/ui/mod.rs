pub(crate) mod devices;
pub(crate) mod layout;
pub(crate) mod library;
pub(crate) mod logs;
pub(crate) mod now_playing;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{App, FocusedPanel},
    keys,
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    // Main layout: [NowPlaying] | [Library + Devices, or Logs] | [Help].
    let main = layout::split_main(frame.area());

    now_playing::draw(frame, app, main.now_playing);

    match app.focused_panel {
        FocusedPanel::Library | FocusedPanel::Devices => {
            let content = layout::split_content(main.content);
            let library_focused = app.focused_panel == FocusedPanel::Library;
            library::draw(frame, app, content.library, library_focused);
            devices::draw(frame, &app.devices, content.devices, !library_focused);
        }
        FocusedPanel::Logs => logs::draw(frame, &mut app.logs, main.content),
    }

    draw_help_bar(frame, app, main.help_bar);
}

fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused { Color::Yellow } else { Color::White })
}

fn highlight_style(focused: bool) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    if focused {
        style.bg(Color::Rgb(50, 50, 80))
    } else {
        style.bg(Color::Rgb(35, 35, 45))
    }
}

fn help_actions(panel: FocusedPanel) -> &'static [keys::Action] {
    match panel {
        FocusedPanel::Library => keys::LIBRARY_HELP,
        FocusedPanel::Devices => keys::DEVICES_HELP,
        FocusedPanel::Logs => keys::LOGS_HELP,
    }
}

fn draw_help_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for action in help_actions(app.focused_panel) {
        if let Some((key, label)) = action.help_label() {
            spans.push(Span::styled(
                String::from(key),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(format!(":{label} ")));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
