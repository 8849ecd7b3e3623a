use clap::Parser;
use lector_client::operations::reading_history::{hide, HistoryEntryKey};

use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct Hide {
    /// Id of the post that was read
    #[arg(long)]
    post_id: String,

    /// Timestamp key of the read, exactly as `history list` prints it
    #[arg(long)]
    timestamp: String,
}

impl Hide {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_authenticated_client()?;
        let key = HistoryEntryKey {
            post_id: self.post_id.clone(),
            timestamp: self.timestamp.clone(),
        };
        hide::run(key.clone(), &client).await?;
        Ok(LectorOutput::EntryHidden(key))
    }
}
