//! Walks the reading history one page at a time.
//!
//! The pager owns the cursor. Each call to [`HistoryPager::next_page`] sends
//! the `endCursor` of the previous page as `after`, and stops for good once a
//! page reports `hasNextPage = false`.

use buildstructor::buildstructor;

use crate::operations::reading_history::{
    read_history::{self, ReadHistoryInput},
    search::{self, SearchReadingHistoryInput},
    ReadingHistoryEntry,
};
use crate::shared::{Cursor, Page};
use crate::{LectorClient, LectorClientError};

/// What a [`HistoryPager`] walks over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryScope {
    /// The reader's own history; `public` selects the public-profile view
    Feed {
        /// only posts visible on the public profile
        public: bool,
    },
    /// Matches for a full-text search over the history
    Search {
        /// the search text
        query: String,
    },
}

/// Drives successive page fetches over a [`HistoryScope`].
///
/// Fetching takes `&mut self`, so a page can only be requested once the
/// cursor of the page before it has been recorded.
#[derive(Debug)]
pub struct HistoryPager {
    client: LectorClient,
    scope: HistoryScope,
    page_size: Option<i64>,
    cursor: Option<Cursor>,
    pages: Vec<Page<ReadingHistoryEntry>>,
    exhausted: bool,
}

#[buildstructor]
impl HistoryPager {
    /// Starts a walk. `after` resumes from a cursor printed by an earlier walk.
    #[builder]
    pub fn new(
        client: LectorClient,
        scope: HistoryScope,
        page_size: Option<i64>,
        after: Option<Cursor>,
    ) -> HistoryPager {
        HistoryPager {
            client,
            scope,
            page_size,
            cursor: after,
            pages: Vec::new(),
            exhausted: false,
        }
    }

    /// Fetches the next page, or returns `Ok(None)` once the history is exhausted.
    ///
    /// A failed fetch leaves the pager exactly as it was, so calling this
    /// again retries the same page.
    pub async fn next_page(
        &mut self,
    ) -> Result<Option<&Page<ReadingHistoryEntry>>, LectorClientError> {
        if self.exhausted {
            return Ok(None);
        }
        tracing::debug!(after = ?self.cursor.as_ref().map(Cursor::as_str), "requesting history page");
        let page = self.fetch().await?;

        match page.page_info.next_cursor() {
            Some(cursor) => self.cursor = Some(cursor.clone()),
            None => {
                if page.page_info.has_next_page {
                    tracing::warn!("page claims more entries but has no end cursor, stopping");
                }
                self.exhausted = true;
            }
        }
        tracing::debug!(
            entries = page.len(),
            next = ?self.cursor.as_ref().map(Cursor::as_str),
            exhausted = self.exhausted,
            "recorded history page"
        );
        self.pages.push(page);
        Ok(self.pages.last())
    }

    /// Keeps fetching until the history is exhausted or `max_pages` more
    /// pages have been fetched. Returns every page fetched so far.
    pub async fn collect_all(
        &mut self,
        max_pages: Option<usize>,
    ) -> Result<&[Page<ReadingHistoryEntry>], LectorClientError> {
        let mut fetched = 0;
        while max_pages.map_or(true, |max_pages| fetched < max_pages) {
            if self.next_page().await?.is_none() {
                break;
            }
            fetched += 1;
        }
        Ok(&self.pages)
    }

    async fn fetch(&self) -> Result<Page<ReadingHistoryEntry>, LectorClientError> {
        match &self.scope {
            HistoryScope::Feed { public } => {
                let input = ReadHistoryInput {
                    after: self.cursor.clone(),
                    first: self.page_size,
                    is_public: public.then_some(true),
                };
                read_history::run(input, &self.client).await
            }
            HistoryScope::Search { query } => {
                let input = SearchReadingHistoryInput {
                    query: query.clone(),
                    first: self.page_size,
                    after: self.cursor.clone(),
                };
                search::run(input, &self.client).await
            }
        }
    }

    /// Pages fetched so far, in order
    pub fn pages(&self) -> &[Page<ReadingHistoryEntry>] {
        &self.pages
    }

    /// The cursor the next fetch will send, if any
    pub const fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// Whether the last page has been seen
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Every entry fetched so far, in server order
    pub fn into_entries(self) -> Vec<ReadingHistoryEntry> {
        self.pages
            .into_iter()
            .flat_map(|page| page.entries)
            .collect()
    }
}
