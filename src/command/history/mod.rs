mod hide;
mod list;
mod search;
mod stats;
mod suggest;

use clap::{Parser, Subcommand};
use lector_client::pager::{HistoryPager, HistoryScope};
use lector_client::LectorClient;

use crate::options::PagingOpt;
use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct History {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the posts you have read, most recent first
    List(list::List),

    /// Full-text search over your reading history
    Search(search::Search),

    /// Suggest post titles from your reading history as you type
    Suggest(suggest::Suggest),

    /// Reads per day, rank history and top tags of a user over a date range
    Stats(stats::Stats),

    /// Hide a single read from your reading history
    Hide(hide::Hide),
}

impl History {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        match &self.command {
            Command::List(command) => command.run(client_config).await,
            Command::Search(command) => command.run(client_config).await,
            Command::Suggest(command) => command.run(client_config).await,
            Command::Stats(command) => command.run(client_config).await,
            Command::Hide(command) => command.run(client_config).await,
        }
    }
}

/// Fetches as many pages as `paging` asks for and flattens them into one listing
async fn walk(
    client: LectorClient,
    scope: HistoryScope,
    paging: &PagingOpt,
) -> LectorResult<LectorOutput> {
    let mut pager = HistoryPager::builder()
        .client(client)
        .scope(scope)
        .and_page_size(paging.first)
        .and_after(paging.after.clone())
        .build();
    let pages = pager.collect_all(paging.page_limit()).await?.len();
    tracing::info!(pages, exhausted = pager.is_exhausted(), "finished reading history walk");

    let next_cursor = if pager.is_exhausted() {
        None
    } else {
        pager.cursor().cloned()
    };
    Ok(LectorOutput::HistoryPage {
        entries: pager.into_entries(),
        next_cursor,
    })
}
