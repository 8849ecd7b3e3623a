mod runner;
mod service;
mod types;

pub use runner::run;
pub use service::{ReadHistory, ReadHistoryQuery};
pub use types::{ReadHistoryInput, ReadHistoryVariables};
