use clap::Parser;
use lector_client::operations::user::{
    my_reading_rank, profile, reading_rank, referring_user, stats, tooltip,
};

use crate::options::{UserIdOpt, VersionOpt};
use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct Show {
    #[clap(flatten)]
    user: UserIdOpt,
}

impl Show {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_client()?;
        let profile = profile::run(self.user.user_id.clone(), &client).await?;
        Ok(LectorOutput::UserProfile(profile))
    }
}

#[derive(Debug, Parser)]
pub struct Stats {
    #[clap(flatten)]
    user: UserIdOpt,
}

impl Stats {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_client()?;
        let stats = stats::run(self.user.user_id.clone(), &client).await?;
        Ok(LectorOutput::UserStats(stats))
    }
}

#[derive(Debug, Parser)]
pub struct Rank {
    #[clap(flatten)]
    user: UserIdOpt,

    #[clap(flatten)]
    version: VersionOpt,
}

impl Rank {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_client()?;
        let rank =
            reading_rank::run(self.user.user_id.clone(), self.version.version, &client).await?;
        Ok(LectorOutput::ReadingRank(rank))
    }
}

#[derive(Debug, Parser)]
pub struct MyRank {
    #[clap(flatten)]
    user: UserIdOpt,

    #[clap(flatten)]
    version: VersionOpt,
}

impl MyRank {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_authenticated_client()?;
        let rank =
            my_reading_rank::run(self.user.user_id.clone(), self.version.version, &client).await?;
        Ok(LectorOutput::MyReadingRank(rank))
    }
}

#[derive(Debug, Parser)]
pub struct Tooltip {
    #[clap(flatten)]
    user: UserIdOpt,

    #[clap(flatten)]
    version: VersionOpt,

    /// Also fetch the user's name, username and profile link
    #[arg(long)]
    with_user: bool,
}

impl Tooltip {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_client()?;
        let tooltip = tooltip::run(
            self.user.user_id.clone(),
            self.version.version,
            self.with_user,
            &client,
        )
        .await?;
        Ok(LectorOutput::UserTooltip(tooltip))
    }
}

#[derive(Debug, Parser)]
pub struct Referrer {
    #[clap(flatten)]
    user: UserIdOpt,
}

impl Referrer {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_client()?;
        let user = referring_user::run(self.user.user_id.clone(), &client).await?;
        Ok(LectorOutput::ReferringUser(user))
    }
}
