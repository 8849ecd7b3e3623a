mod runner;
mod types;

pub use runner::{run, SearchReadingHistorySuggestionsQuery};
pub use types::{SearchSuggestion, SearchSuggestionsVariables};
