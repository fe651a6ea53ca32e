//! Rendering bounded windows of the dataset into a visible table.
use smol_str::SmolStr;
use unicode_width::UnicodeWidthChar as _;
use unicode_width::UnicodeWidthStr as _;

use crate::Dataset;

/// Number of pseudo-rows above the first data row. Row 0 is the header, so
/// visible row `r` shows `dataset[window.start + r - HEADER_ROWS]`.
pub const HEADER_ROWS: usize = 1;

/// The row index of the header pseudo-row.
pub const HEADER_ROW: usize = 0;

/// The default display width of each text column, in terminal cells.
pub const DEFAULT_COLUMN_WIDTH: usize = 20;

/// Marker appended to truncated fields.
pub const ELLIPSIS: &str = "...";

/// The column titles of the header row.
pub const HEADER: [&str; 2] = ["Artist", "Title"];

/// A half-open range `[start, end)` into the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSpec {
    /// The first dataset index in the window.
    pub start: usize,
    /// One past the last dataset index in the window.
    pub end: usize,
}
impl WindowSpec {
    /// Creates a window, clamping both ends to `len`.
    pub fn clamped(start: usize, end: usize, len: usize) -> Self {
        let end = end.min(len);
        Self {
            start: start.min(end),
            end,
        }
    }

    /// The number of data rows in the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window has no data rows.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The dataset index shown at visible row `row`, if `row` is a data row.
    pub fn dataset_index(&self, row: usize) -> Option<usize> {
        let offset = row.checked_sub(HEADER_ROWS)?;
        (offset < self.len()).then_some(self.start + offset)
    }
}

/// A single visible table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The cell texts, in column order.
    pub cells: [SmolStr; 2],
}
impl Row {
    /// The header row.
    pub fn header() -> Self {
        Self {
            cells: HEADER.map(SmolStr::new_static),
        }
    }
}

/// An error raised while rendering a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// There is nothing to render.
    EmptyDataset,
    /// The window size cannot express the boundary arithmetic.
    InvalidWindowSize(usize),
}
impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::EmptyDataset => write!(f, "could not render an empty dataset"),
            RenderError::InvalidWindowSize(size) => {
                write!(f, "window size must be at least 2, got {size}")
            }
        }
    }
}
impl std::error::Error for RenderError {}

/// A visible table that rows are rendered into.
///
/// Row 0 is always the header. Moving past either end wraps around, which is
/// how window boundaries are detected.
pub trait TableView {
    /// Replaces all rows.
    fn set_rows(&mut self, rows: Vec<Row>);
    /// Moves the selection without notifying anyone.
    fn set_selection(&mut self, row: usize);
    /// The currently selected row.
    fn selection(&self) -> usize;
    /// The number of rows, header included.
    fn row_count(&self) -> usize;

    /// Selects the next row, wrapping from the last row to the header.
    /// Returns the newly selected row.
    fn move_down(&mut self) -> usize {
        let count = self.row_count();
        let next = if count == 0 {
            0
        } else {
            (self.selection() + 1) % count
        };
        self.set_selection(next);
        next
    }

    /// Selects the previous row, wrapping from the header to the last row.
    /// Returns the newly selected row.
    fn move_up(&mut self) -> usize {
        let count = self.row_count();
        let previous = match self.selection() {
            0 => count.saturating_sub(1),
            row => row - 1,
        };
        self.set_selection(previous);
        previous
    }
}

/// An in-memory [`TableView`]; the front-end draws from it.
#[derive(Debug, Clone, Default)]
pub struct RowTable {
    rows: Vec<Row>,
    selected: usize,
}
impl RowTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}
impl TableView for RowTable {
    fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }

    fn set_selection(&mut self, row: usize) {
        self.selected = row.min(self.rows.len().saturating_sub(1));
    }

    fn selection(&self) -> usize {
        self.selected
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Truncates `text` to `max_width` display cells, appending [`ELLIPSIS`] if
/// anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> SmolStr {
    if text.width() <= max_width {
        return text.into();
    }

    let mut width = 0;
    let mut out = String::with_capacity(max_width + ELLIPSIS.len());
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out.into()
}

/// Builds the rows visible for `window`: the header, then one row per entry.
pub fn window_rows(
    dataset: &Dataset,
    window: WindowSpec,
    column_width: usize,
) -> Result<Vec<Row>, RenderError> {
    if dataset.is_empty() {
        return Err(RenderError::EmptyDataset);
    }

    let window = WindowSpec::clamped(window.start, window.end, dataset.len());
    let mut rows = Vec::with_capacity(window.len() + HEADER_ROWS);
    rows.push(Row::header());
    rows.extend(
        dataset.entries()[window.start..window.end]
            .iter()
            .map(|entry| Row {
                cells: [
                    truncate_with_ellipsis(&entry.artist, column_width),
                    truncate_with_ellipsis(&entry.title, column_width),
                ],
            }),
    );
    Ok(rows)
}

/// Replaces the rows of `table` with those visible for `window`.
///
/// The table is cleared even if rendering fails.
pub fn render_window(
    table: &mut impl TableView,
    dataset: &Dataset,
    window: WindowSpec,
    column_width: usize,
) -> Result<(), RenderError> {
    match window_rows(dataset, window, column_width) {
        Ok(rows) => {
            table.set_rows(rows);
            Ok(())
        }
        Err(e) => {
            table.set_rows(vec![Row::header()]);
            Err(e)
        }
    }
}
