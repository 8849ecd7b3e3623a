use clap::Parser;
use lector_client::pager::HistoryScope;

use crate::options::PagingOpt;
use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct Search {
    /// Text to look for
    #[arg(value_name = "QUERY")]
    query: String,

    #[clap(flatten)]
    paging: PagingOpt,
}

impl Search {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_authenticated_client()?;
        super::walk(
            client,
            HistoryScope::Search {
                query: self.query.clone(),
            },
            &self.paging,
        )
        .await
    }
}
