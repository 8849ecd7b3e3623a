mod runner;
mod types;

pub use runner::{run, SearchReadingHistoryQuery};
pub use types::{SearchReadingHistoryInput, SearchReadingHistoryVariables};
