//! The selection state machine behind the windowed album list.
//!
//! The visible table only reports "row `r` is now selected". Direction and
//! wrap-arounds are inferred from the last two rows seen, which is enough to
//! tell ordinary movement apart from the user running off either edge of the
//! window.
use std::cmp::Ordering;

use crate::{
    RenderError,
    window::{HEADER_ROW, HEADER_ROWS, WindowSpec},
};

/// The default number of data rows per window.
pub const DEFAULT_WINDOW_SIZE: usize = 45;

/// The first row that shows a dataset entry.
pub const FIRST_DATA_ROW: usize = HEADER_ROWS;

/// The last two selected rows, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionHistory([Option<usize>; 2]);
impl SelectionHistory {
    /// No history. Also marks "just jumped forward": the next row seen counts
    /// as a step down.
    pub const EMPTY: Self = Self([None, None]);

    /// Marks "just jumped backward": the echoed last-row selection counts as
    /// a step up.
    pub fn arrived_from_below(window_size: usize) -> Self {
        Self([Some(window_size + 2), Some(window_size + 1)])
    }

    /// Marks "staying put on `row`": selecting `row` again is not a move.
    pub fn resting_on(row: usize) -> Self {
        Self([None, Some(row)])
    }

    /// The older of the two entries.
    pub fn previous(&self) -> Option<usize> {
        self.0[0]
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<usize> {
        self.0[1]
    }

    fn push(&mut self, row: usize) {
        self.0 = [self.0[1], Some(row)];
    }
}

/// What the caller has to do after a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Ordinary movement inside the window.
    Moved {
        /// The updated absolute index.
        absolute_index: usize,
    },
    /// The window moved: render `window`, then select `selection`.
    Shifted {
        /// The new visible window.
        window: WindowSpec,
        /// The row to select in the new window.
        selection: usize,
    },
    /// The header was selected without crossing a boundary: select
    /// `selection` again.
    Bounced {
        /// The row to go back to.
        selection: usize,
    },
}

/// Tracks where the highlighted row sits in the full dataset.
///
/// Selections forced by a [`Transition`] are expected to be reported back
/// through [`NavigationState::on_selection_changed`], the way a widget
/// toolkit echoes programmatic selections. The history sentinels rely on it.
#[derive(Debug, Clone)]
pub struct NavigationState {
    window_size: usize,
    dataset_len: usize,
    window: WindowSpec,
    history: SelectionHistory,
    absolute_index: usize,
}
impl NavigationState {
    /// Starts at the first entry of the first window.
    pub fn new(window_size: usize, dataset_len: usize) -> Result<Self, RenderError> {
        // A window of one row cannot tell its first row from its last.
        if window_size < 2 {
            return Err(RenderError::InvalidWindowSize(window_size));
        }
        if dataset_len == 0 {
            return Err(RenderError::EmptyDataset);
        }

        Ok(Self {
            window_size,
            dataset_len,
            window: WindowSpec::clamped(0, window_size, dataset_len),
            history: SelectionHistory::EMPTY,
            absolute_index: 0,
        })
    }

    /// The position of the highlighted entry in the dataset.
    pub fn absolute_index(&self) -> usize {
        self.absolute_index
    }

    /// The currently visible window.
    pub fn window(&self) -> WindowSpec {
        self.window
    }

    /// The last two rows seen.
    pub fn history(&self) -> SelectionHistory {
        self.history
    }

    /// The number of data rows per window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Reconciles a newly selected `row` with the dataset position.
    pub fn on_selection_changed(&mut self, row: usize) -> Transition {
        if row == HEADER_ROW {
            return self.on_header_selected();
        }

        let previous = self.history.latest();
        self.history.push(row);
        match previous.map(|previous| previous.cmp(&row)) {
            Some(Ordering::Greater) => {
                self.absolute_index = self.absolute_index.saturating_sub(1);
            }
            Some(Ordering::Less) | None => {
                self.absolute_index = (self.absolute_index + 1).min(self.dataset_len - 1);
            }
            Some(Ordering::Equal) => {}
        }

        Transition::Moved {
            absolute_index: self.absolute_index,
        }
    }

    fn on_header_selected(&mut self) -> Transition {
        let size = self.window_size;
        let base = (self.absolute_index / size) * size;

        match self.history.latest() {
            // Ran off the bottom of a full window and there is more below.
            Some(row) if row == size && self.window.end < self.dataset_len => {
                self.window = WindowSpec::clamped(base + size, base + 2 * size, self.dataset_len);
                self.history = SelectionHistory::EMPTY;
                tracing::debug!("shifting forward to {:?}", self.window);
                Transition::Shifted {
                    window: self.window,
                    selection: FIRST_DATA_ROW,
                }
            }
            // Ran off the top of a window that has a predecessor.
            Some(FIRST_DATA_ROW) if self.absolute_index >= size => {
                self.window = WindowSpec::clamped(base - size, base, self.dataset_len);
                self.history = SelectionHistory::arrived_from_below(size);
                tracing::debug!("shifting backward to {:?}", self.window);
                Transition::Shifted {
                    window: self.window,
                    selection: size,
                }
            }
            latest => {
                let row = latest
                    .filter(|row| (FIRST_DATA_ROW..=self.window.len()).contains(row))
                    .unwrap_or(FIRST_DATA_ROW);
                self.history = SelectionHistory::resting_on(row);
                Transition::Bounced { selection: row }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds `row`, then echoes any forced selection, like a live table.
    fn select(state: &mut NavigationState, row: usize) -> (Transition, usize) {
        let transition = state.on_selection_changed(row);
        let selected = match transition {
            Transition::Moved { .. } => row,
            Transition::Shifted { selection, .. } | Transition::Bounced { selection } => {
                assert!(matches!(
                    state.on_selection_changed(selection),
                    Transition::Moved { .. }
                ));
                selection
            }
        };
        (transition, selected)
    }

    /// Presses "down" from `row` in a table with `rows` data rows.
    fn down(state: &mut NavigationState, row: usize) -> usize {
        let next = if row == state.window().len() { HEADER_ROW } else { row + 1 };
        select(state, next).1
    }

    /// Presses "up" from `row`.
    fn up(state: &mut NavigationState, row: usize) -> usize {
        let next = if row == HEADER_ROW { state.window().len() } else { row - 1 };
        select(state, next).1
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            NavigationState::new(1, 10).unwrap_err(),
            RenderError::InvalidWindowSize(1)
        );
        assert_eq!(
            NavigationState::new(45, 0).unwrap_err(),
            RenderError::EmptyDataset
        );

        let state = NavigationState::new(45, 10).unwrap();
        assert_eq!(state.window(), WindowSpec { start: 0, end: 10 });
        assert_eq!(state.absolute_index(), 0);
        assert_eq!(state.history(), SelectionHistory::EMPTY);
    }

    #[test]
    fn test_ordinary_moves() {
        let mut state = NavigationState::new(45, 50).unwrap();
        assert_eq!(
            state.on_selection_changed(2),
            Transition::Moved { absolute_index: 1 }
        );
        assert_eq!(
            state.on_selection_changed(3),
            Transition::Moved { absolute_index: 2 }
        );
        assert_eq!(
            state.on_selection_changed(2),
            Transition::Moved { absolute_index: 1 }
        );
        // Duplicate events don't move.
        assert_eq!(
            state.on_selection_changed(2),
            Transition::Moved { absolute_index: 1 }
        );
        assert_eq!(state.history().previous(), Some(2));
        assert_eq!(state.history().latest(), Some(2));
    }

    #[test]
    fn test_forward_boundary_scenario() {
        let mut state = NavigationState::new(45, 50).unwrap();
        let mut row = FIRST_DATA_ROW;
        for _ in 0..44 {
            row = down(&mut state, row);
        }
        assert_eq!(row, 45);
        assert_eq!(state.absolute_index(), 44);
        assert_eq!(state.window(), WindowSpec { start: 0, end: 45 });

        // The 45th press wraps the table to the header.
        assert_eq!(
            state.on_selection_changed(HEADER_ROW),
            Transition::Shifted {
                window: WindowSpec { start: 45, end: 50 },
                selection: FIRST_DATA_ROW,
            }
        );
        assert_eq!(state.absolute_index(), 44);
        assert_eq!(state.history(), SelectionHistory::EMPTY);

        // The forced selection arrives as the next ordinary event.
        assert_eq!(
            state.on_selection_changed(FIRST_DATA_ROW),
            Transition::Moved { absolute_index: 45 }
        );
    }

    #[test]
    fn test_backward_boundary() {
        let mut state = NavigationState::new(45, 100).unwrap();
        let mut row = FIRST_DATA_ROW;
        for _ in 0..45 {
            row = down(&mut state, row);
        }
        assert_eq!((row, state.absolute_index()), (1, 45));
        assert_eq!(state.window(), WindowSpec { start: 45, end: 90 });

        assert_eq!(
            state.on_selection_changed(HEADER_ROW),
            Transition::Shifted {
                window: WindowSpec { start: 0, end: 45 },
                selection: 45,
            }
        );
        assert_eq!(state.history(), SelectionHistory::arrived_from_below(45));
        assert_eq!(
            state.on_selection_changed(45),
            Transition::Moved { absolute_index: 44 }
        );
    }

    #[test]
    fn test_down_right_after_backward_shift_goes_forward_again() {
        let mut state = NavigationState::new(3, 10).unwrap();
        let mut row = FIRST_DATA_ROW;
        for _ in 0..3 {
            row = down(&mut state, row);
        }
        assert_eq!(state.window(), WindowSpec { start: 3, end: 6 });
        row = up(&mut state, row);
        assert_eq!((row, state.absolute_index()), (3, 2));
        assert_eq!(state.window(), WindowSpec { start: 0, end: 3 });

        row = down(&mut state, row);
        assert_eq!((row, state.absolute_index()), (1, 3));
        assert_eq!(state.window(), WindowSpec { start: 3, end: 6 });
    }

    #[test]
    fn test_top_of_first_window_bounces() {
        let mut state = NavigationState::new(45, 50).unwrap();
        assert_eq!(
            select(&mut state, HEADER_ROW),
            (Transition::Bounced { selection: 1 }, 1)
        );
        assert_eq!(state.absolute_index(), 0);
        assert_eq!(state.window(), WindowSpec { start: 0, end: 45 });

        // Still counts direction correctly afterwards.
        assert_eq!(down(&mut state, 1), 2);
        assert_eq!(state.absolute_index(), 1);
    }

    #[test]
    fn test_bottom_of_final_window_bounces() {
        let mut state = NavigationState::new(45, 50).unwrap();
        let mut row = FIRST_DATA_ROW;
        for _ in 0..100 {
            row = down(&mut state, row);
        }
        assert_eq!(state.window(), WindowSpec { start: 45, end: 50 });
        assert_eq!((row, state.absolute_index()), (5, 49));

        // A final window that is exactly full bounces too.
        let mut state = NavigationState::new(5, 10).unwrap();
        let mut row = FIRST_DATA_ROW;
        for _ in 0..20 {
            row = down(&mut state, row);
        }
        assert_eq!(state.window(), WindowSpec { start: 5, end: 10 });
        assert_eq!((row, state.absolute_index()), (5, 9));
    }

    #[test]
    fn test_boundary_symmetry() {
        for (size, len) in [(45, 50), (45, 200), (2, 7), (5, 10)] {
            let mut state = NavigationState::new(size, len).unwrap();
            let original = state.window();
            let mut row = FIRST_DATA_ROW;
            for _ in 0..size {
                row = down(&mut state, row);
            }
            for _ in 0..size {
                row = up(&mut state, row);
            }
            assert_eq!(state.absolute_index(), 0, "size {size}, len {len}");
            assert_eq!(state.window(), original, "size {size}, len {len}");
            assert_eq!(row, FIRST_DATA_ROW);
        }
    }

    #[test]
    fn test_absolute_index_tracks_highlighted_row() {
        // Deterministic walk with a bias that changes direction every so often.
        let mut state = NavigationState::new(4, 23).unwrap();
        let mut row = FIRST_DATA_ROW;
        let mut seed = 7u32;
        for step in 0..2000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let going_down = (seed >> 16) % 3 != 0 || step % 400 < 100;
            let before = state.absolute_index();
            row = if going_down {
                down(&mut state, row)
            } else {
                up(&mut state, row)
            };
            let after = state.absolute_index();

            assert!(after < 23);
            assert!(before.abs_diff(after) <= 1);
            assert_eq!(state.window().dataset_index(row), Some(after));
        }
    }
}
