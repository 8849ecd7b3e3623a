use chrono::NaiveDate;
use clap::Parser;
use lector_client::operations::reading_history::aggregates::{self, ReadingHistoryAggregatesInput};
use lector_client::shared::DateRange;

use crate::options::{UserIdOpt, VersionOpt};
use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct Stats {
    #[clap(flatten)]
    user: UserIdOpt,

    /// First day to include, as YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    after: NaiveDate,

    /// Last day to include, as YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    before: NaiveDate,

    #[clap(flatten)]
    version: VersionOpt,

    /// Maximum number of tags to return
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    limit: Option<i64>,
}

impl Stats {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let range = DateRange::new(self.after, self.before)?;
        let client = client_config.get_client()?;
        let aggregates = aggregates::run(
            ReadingHistoryAggregatesInput {
                id: self.user.user_id.clone(),
                range,
                version: self.version.version,
                limit: self.limit,
            },
            &client,
        )
        .await?;
        Ok(LectorOutput::ReadingAggregates(aggregates))
    }
}
