use albumdeck_core::{TableView as _, window::HEADER_ROWS};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
};

use crate::{app::App, keys::Action};

use super::layout;

pub fn draw(frame: &mut Frame, app: &App, area: Rect, focused: bool) {
    let window = app.albums.window();
    let table = app.albums.table();

    let block = Block::default()
        .title(format!(
            " Albums {}-{} of {} ",
            window.start + 1,
            window.end,
            app.albums.dataset().len()
        ))
        .borders(Borders::ALL)
        .border_style(super::border_style(focused));

    let Some((header, rows)) = table.rows().split_first() else {
        frame.render_widget(block, area);
        return;
    };

    let column_width = layout::library_column_width(app.config.navigation.column_width);

    let widget = Table::new(
        rows.iter().map(table_row),
        [Constraint::Length(column_width), Constraint::Min(column_width)],
    )
    .header(
        table_row(header).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .column_spacing(layout::COLUMN_SPACING)
    .block(block)
    .highlight_symbol(layout::HIGHLIGHT_SYMBOL)
    .row_highlight_style(super::highlight_style(focused));

    let mut state =
        TableState::default().with_selected(table.selection().checked_sub(HEADER_ROWS));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn table_row(row: &albumdeck_core::Row) -> Row<'_> {
    Row::new(row.cells.iter().map(|c| c.as_str()))
}

pub fn handle_key(app: &mut App, action: Action) {
    let result = match action {
        Action::MoveUp => app.albums.move_up(),
        Action::MoveDown => app.albums.move_down(),
        Action::PageUp => app.albums.page_up(),
        Action::PageDown => app.albums.page_down(),
        Action::Select => {
            app.albums.activate(&mut app.remote);
            Ok(())
        }
        _ => Ok(()),
    };
    if let Err(e) = result {
        tracing::error!("failed to move the selection: {e}");
    }
}
