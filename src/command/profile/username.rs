use clap::Parser;
use lector_client::operations::user::username;

use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct UsernameSuggestion {
    /// The display name to derive a username from
    #[arg(value_name = "NAME")]
    name: String,
}

impl UsernameSuggestion {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_client()?;
        let username = username::run(self.name.clone(), &client).await?;
        Ok(LectorOutput::UsernameSuggestion(username))
    }
}
