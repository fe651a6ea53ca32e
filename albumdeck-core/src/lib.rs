//! The windowed album navigator: eager paging of a remote collection, and the
//! selection state machine that shows it through a fixed-size table window.
#![deny(missing_docs)]

mod dataset;
pub use dataset::{Dataset, DatasetEntry, ItemId, Page};

mod fetch;
pub use fetch::{DEFAULT_PAGE_SIZE, FetchError, PageSource, fetch_all};

pub mod window;
pub use window::{RenderError, Row, RowTable, TableView, WindowSpec};

pub mod navigation;
pub use navigation::{NavigationState, SelectionHistory, Transition};

mod album_list;
pub use album_list::{AlbumList, NavigatorConfig, Player};
