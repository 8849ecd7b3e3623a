use clap::Parser;
use lector_client::operations::reading_history::suggestions;

use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct Suggest {
    /// What has been typed so far
    #[arg(value_name = "QUERY")]
    query: String,
}

impl Suggest {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_authenticated_client()?;
        let hits = suggestions::run(self.query.clone(), &client).await?;
        Ok(LectorOutput::SearchSuggestions(hits))
    }
}
