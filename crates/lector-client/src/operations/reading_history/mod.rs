//! The reader's post history: the paginated feed, full-text search over it,
//! title suggestions, range aggregates and hiding single entries.

mod entry;

pub mod aggregates;
pub mod hide;
pub mod read_history;
pub mod search;
pub mod suggestions;

pub use entry::{HistoryEntryKey, ReadingHistoryEntry};
pub(crate) use entry::{
    reading_history_connection_fragment, reading_history_fragment, HistoryConnectionData,
};
