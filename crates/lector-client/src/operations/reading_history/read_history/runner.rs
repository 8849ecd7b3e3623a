use tower::{Service, ServiceExt};

use super::service::ReadHistory;
use super::types::ReadHistoryInput;
use crate::operations::reading_history::ReadingHistoryEntry;
use crate::shared::Page;
use crate::{LectorClient, LectorClientError};

/// Fetches one page of the reader's history, newest first
pub async fn run(
    input: ReadHistoryInput,
    client: &LectorClient,
) -> Result<Page<ReadingHistoryEntry>, LectorClientError> {
    let mut service = ReadHistory::new(client.graphql_service()?);
    let service = service.ready().await?;
    let page = service.call(input).await?;
    tracing::debug!(
        entries = page.len(),
        has_next_page = page.page_info.has_next_page,
        "fetched reading history page"
    );
    Ok(page)
}
