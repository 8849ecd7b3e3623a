use clap::Parser;
use lector_client::operations::user::{
    handles::{is_valid_handle, is_valid_social_handle, strip_at},
    update::{self, UpdateUserInput},
};

use crate::error::Suggestion;
use crate::utils::client::ClientConfig;
use crate::{LectorError, LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct Update {
    /// Display name
    #[arg(long)]
    name: Option<String>,

    /// Username, with or without a leading @
    #[arg(long)]
    username: Option<String>,

    #[arg(long)]
    bio: Option<String>,

    /// Twitter handle
    #[arg(long)]
    twitter: Option<String>,

    /// GitHub handle
    #[arg(long)]
    github: Option<String>,

    /// Hashnode handle
    #[arg(long)]
    hashnode: Option<String>,

    /// Link to a personal site
    #[arg(long)]
    portfolio: Option<String>,

    /// IANA timezone name, e.g. Europe/Lisbon
    #[arg(long)]
    timezone: Option<String>,
}

impl Update {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let data = self.input()?;
        let client = client_config.get_authenticated_client()?;
        let profile = update::run(data, &client).await?;
        Ok(LectorOutput::ProfileUpdated(profile))
    }

    fn input(&self) -> LectorResult<UpdateUserInput> {
        if let Some(username) = &self.username {
            if !is_valid_handle(username) {
                return Err(invalid_handle("--username", username));
            }
        }
        for (flag, handle) in [
            ("--twitter", &self.twitter),
            ("--github", &self.github),
            ("--hashnode", &self.hashnode),
        ] {
            if let Some(handle) = handle {
                if !is_valid_social_handle(handle) {
                    return Err(invalid_handle(flag, handle));
                }
            }
        }

        let data = UpdateUserInput::builder()
            .and_name(self.name.clone())
            .and_username(self.username.as_deref().map(|h| strip_at(h).to_string()))
            .and_bio(self.bio.clone())
            .and_twitter(self.twitter.as_deref().map(|h| strip_at(h).to_string()))
            .and_github(self.github.as_deref().map(|h| strip_at(h).to_string()))
            .and_hashnode(self.hashnode.as_deref().map(|h| strip_at(h).to_string()))
            .and_portfolio(self.portfolio.clone())
            .and_timezone(self.timezone.clone())
            .build();

        if data.is_empty() {
            let mut error = LectorError::new(anyhow::anyhow!("there is nothing to update"));
            error.set_suggestion(Suggestion::Adhoc(
                "Pass at least one field to change, e.g. --bio \"...\"".to_string(),
            ));
            return Err(error);
        }
        Ok(data)
    }
}

fn invalid_handle(flag: &str, handle: &str) -> LectorError {
    let mut error = LectorError::new(anyhow::anyhow!("\"{handle}\" is not a valid handle"));
    error.set_suggestion(Suggestion::Adhoc(format!(
        "{flag} takes letters, digits, '_' and '-', optionally after a single '@'."
    )));
    error
}
