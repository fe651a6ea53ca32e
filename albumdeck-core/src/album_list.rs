use crate::{
    Dataset, DatasetEntry, ItemId, RenderError,
    navigation::{DEFAULT_WINDOW_SIZE, FIRST_DATA_ROW, NavigationState, Transition},
    window::{DEFAULT_COLUMN_WIDTH, RowTable, TableView, WindowSpec, render_window},
};

/// Something that can start playback of an item.
pub trait Player {
    /// The error returned when the play command fails.
    type Error: std::fmt::Display;

    /// Starts playing the item identified by `id`.
    fn play_item(&mut self, id: &ItemId) -> Result<(), Self::Error>;
}

/// Sizing for an [`AlbumList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Data rows per window, excluding the header.
    pub window_size: usize,
    /// Display width of each text column.
    pub column_width: usize,
}
impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

/// A fetched collection shown through a fixed-size window of a table.
///
/// Owns the dataset and the navigation state, and applies every decision the
/// state machine makes to the table.
pub struct AlbumList<T: TableView = RowTable> {
    dataset: Dataset,
    state: NavigationState,
    table: T,
    column_width: usize,
}
impl<T: TableView> AlbumList<T> {
    /// Renders the first window and selects its first entry.
    pub fn new(dataset: Dataset, mut table: T, config: NavigatorConfig) -> Result<Self, RenderError> {
        let state = NavigationState::new(config.window_size, dataset.len())?;
        render_window(&mut table, &dataset, state.window(), config.column_width)?;
        table.set_selection(FIRST_DATA_ROW);

        Ok(Self {
            dataset,
            state,
            table,
            column_width: config.column_width,
        })
    }

    /// Handles a "selection changed" notification for `row`.
    pub fn selection_changed(&mut self, row: usize) -> Result<(), RenderError> {
        match self.state.on_selection_changed(row) {
            Transition::Moved { .. } => Ok(()),
            Transition::Shifted { window, selection } => {
                render_window(&mut self.table, &self.dataset, window, self.column_width)?;
                self.force_selection(selection);
                Ok(())
            }
            Transition::Bounced { selection } => {
                self.force_selection(selection);
                Ok(())
            }
        }
    }

    fn force_selection(&mut self, row: usize) {
        self.table.set_selection(row);
        let echoed = self.state.on_selection_changed(row);
        debug_assert!(
            matches!(echoed, Transition::Moved { .. }),
            "forced selection of row {row} was not an ordinary move: {echoed:?}"
        );
    }

    /// Moves the selection one row down.
    pub fn move_down(&mut self) -> Result<(), RenderError> {
        let row = self.table.move_down();
        self.selection_changed(row)
    }

    /// Moves the selection one row up.
    pub fn move_up(&mut self) -> Result<(), RenderError> {
        let row = self.table.move_up();
        self.selection_changed(row)
    }

    /// Moves down by a full window, one row at a time.
    pub fn page_down(&mut self) -> Result<(), RenderError> {
        for _ in 0..self.state.window_size() {
            self.move_down()?;
        }
        Ok(())
    }

    /// Moves up by a full window, one row at a time.
    pub fn page_up(&mut self) -> Result<(), RenderError> {
        for _ in 0..self.state.window_size() {
            self.move_up()?;
        }
        Ok(())
    }

    /// Handles an "item activated" notification by playing the highlighted
    /// entry. Returns the entry, or `None` if the header is selected.
    ///
    /// Playback failures are logged; whether playback actually started is
    /// the player's concern.
    pub fn activate<P: Player>(&self, player: &mut P) -> Option<&DatasetEntry> {
        let shown = self.window().dataset_index(self.table.selection())?;
        let index = self.state.absolute_index();
        debug_assert_eq!(shown, index, "highlighted row and absolute index disagree");

        let entry = self.dataset.get(index)?;
        tracing::info!("playing {} - {} ({})", entry.artist, entry.title, entry.id);
        if let Err(e) = player.play_item(&entry.id) {
            tracing::warn!("failed to play {}: {e}", entry.id);
        }
        Some(entry)
    }

    /// The position of the highlighted entry in the dataset.
    pub fn absolute_index(&self) -> usize {
        self.state.absolute_index()
    }

    /// The highlighted entry.
    pub fn selected_entry(&self) -> Option<&DatasetEntry> {
        self.dataset.get(self.state.absolute_index())
    }

    /// The visible window.
    pub fn window(&self) -> WindowSpec {
        self.state.window()
    }

    /// The full dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The table the window is rendered into.
    pub fn table(&self) -> &T {
        &self.table
    }
}
