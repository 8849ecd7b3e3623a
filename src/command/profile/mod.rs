mod referral;
mod show;
mod update;
mod username;

use clap::{Parser, Subcommand};

use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct Profile {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a user's public profile
    Show(show::Show),

    /// Show a user's post and comment statistics
    Stats(show::Stats),

    /// Show a user's current reading rank
    Rank(show::Rank),

    /// Show your own reading rank progress and tags
    MyRank(show::MyRank),

    /// Show what a user's hover card displays
    Tooltip(show::Tooltip),

    /// Show the user who referred someone
    Referrer(show::Referrer),

    /// Suggest a free username for a display name
    UsernameSuggestion(username::UsernameSuggestion),

    /// Show your referral campaign
    Referral(referral::Referral),

    /// Change fields of your profile
    Update(update::Update),
}

impl Profile {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        match &self.command {
            Command::Show(command) => command.run(client_config).await,
            Command::Stats(command) => command.run(client_config).await,
            Command::Rank(command) => command.run(client_config).await,
            Command::MyRank(command) => command.run(client_config).await,
            Command::Tooltip(command) => command.run(client_config).await,
            Command::Referrer(command) => command.run(client_config).await,
            Command::UsernameSuggestion(command) => command.run(client_config).await,
            Command::Referral(command) => command.run(client_config).await,
            Command::Update(command) => command.run(client_config).await,
        }
    }
}
