mod runner;
mod types;

pub use runner::{run, UserReadingHistoryQuery};
pub use types::{
    MostReadTag, ReadHistoryDay, ReadingHistoryAggregates, ReadingHistoryAggregatesInput,
    ReadingRankSample, UserReadingHistoryVariables,
};
