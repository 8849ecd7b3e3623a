use clap::Parser;
use lector_client::pager::HistoryScope;

use crate::options::PagingOpt;
use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct List {
    #[clap(flatten)]
    paging: PagingOpt,

    /// Only list reads shown on your public profile
    #[arg(long)]
    public: bool,
}

impl List {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_authenticated_client()?;
        super::walk(
            client,
            HistoryScope::Feed {
                public: self.public,
            },
            &self.paging,
        )
        .await
    }
}
