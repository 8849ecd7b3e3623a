use clap::{Parser, Subcommand};
use lector_client::operations::digest::{
    fetch,
    subscribe::{self, SubscribeDigestInput},
    unsubscribe,
};

use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct Digest {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show when your personalized digest is sent
    Show,

    /// Subscribe to the personalized digest, or change its schedule
    Subscribe(Subscribe),

    /// Stop receiving the personalized digest
    Unsubscribe,
}

#[derive(Debug, Parser)]
pub struct Subscribe {
    /// Hour of the day to send the digest at, 0 to 23
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..24))]
    hour: Option<i64>,

    /// Day of the week to send the digest on, 0 (Sunday) to 6
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..7))]
    day: Option<i64>,

    /// IANA timezone name the hour is in
    #[arg(long)]
    timezone: Option<String>,
}

impl Digest {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_authenticated_client()?;
        match &self.command {
            Command::Show => Ok(LectorOutput::Digest(fetch::run(&client).await?)),
            Command::Subscribe(schedule) => {
                let input = SubscribeDigestInput {
                    hour: schedule.hour,
                    day: schedule.day,
                    timezone: schedule.timezone.clone(),
                };
                let digest = subscribe::run(input, &client).await?;
                Ok(LectorOutput::Digest(Some(digest)))
            }
            Command::Unsubscribe => {
                unsubscribe::run(&client).await?;
                Ok(LectorOutput::DigestUnsubscribed)
            }
        }
    }
}
