mod runner;
mod types;

pub use runner::{run, HideReadHistoryMutation};
pub use types::HideReadHistoryVariables;
