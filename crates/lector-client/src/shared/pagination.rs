use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::LectorClientError;

/// Opaque forward pagination token issued by the server.
///
/// The client never looks inside a cursor. The only way to get one is from
/// a page's `endCursor`, or by parsing a token that was printed earlier so
/// a walk can be resumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// The token exactly as the server issued it
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cursor {
    type Err = LectorClientError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.is_empty() {
            Err(LectorClientError::EmptyCursor)
        } else {
            Ok(Cursor(token.to_string()))
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Forward-only page information. There is no `startCursor` or
/// `hasPreviousPage`: backward pagination is not offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the last entry on the page
    pub end_cursor: Option<Cursor>,
    /// Whether another page follows
    pub has_next_page: bool,
}

impl PageInfo {
    /// The cursor to send as `after` for the next page, or `None` when the
    /// page was the last one. An `endCursor` on a final page is never handed out.
    pub fn next_cursor(&self) -> Option<&Cursor> {
        if self.has_next_page {
            self.end_cursor.as_ref()
        } else {
            None
        }
    }
}

/// One page of results, in server order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The entries on this page
    pub entries: Vec<T>,
    /// Where the next page starts, if anywhere
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Number of entries on the page
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the page has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Relay-style connection as it appears on the wire
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Connection<N> {
    pub(crate) page_info: PageInfo,
    pub(crate) edges: Vec<Edge<N>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Edge<N> {
    pub(crate) node: N,
}

impl<N> From<Connection<N>> for Page<N> {
    fn from(connection: Connection<N>) -> Self {
        Page {
            entries: connection.edges.into_iter().map(|edge| edge.node).collect(),
            page_info: connection.page_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn connections_flatten_into_pages() {
        let connection: Connection<u32> = serde_json::from_value(json!({
            "pageInfo": { "endCursor": "opaque==", "hasNextPage": true },
            "edges": [{ "node": 1 }, { "node": 2 }]
        }))
        .unwrap();

        let page = Page::from(connection);

        assert_that!(page.entries).is_equal_to(vec![1, 2]);
        assert_that!(page.page_info.next_cursor().map(Cursor::as_str)).is_equal_to(Some("opaque=="));
    }

    #[rstest]
    #[case::last_page_with_cursor(Some("opaque=="), false)]
    #[case::last_page_without_cursor(None, false)]
    #[case::missing_cursor(None, true)]
    fn no_next_cursor_is_handed_out(#[case] end_cursor: Option<&str>, #[case] has_next_page: bool) {
        let page_info: PageInfo = serde_json::from_value(json!({
            "endCursor": end_cursor,
            "hasNextPage": has_next_page
        }))
        .unwrap();

        assert_that!(page_info.next_cursor()).is_none();
    }

    #[test]
    fn empty_cursors_are_rejected() {
        assert_that!("".parse::<Cursor>()).is_err();
        assert_that!("YXJyYXljb25uZWN0aW9uOjk=".parse::<Cursor>())
            .is_ok()
            .matches(|cursor| cursor.as_str() == "YXJyYXljb25uZWN0aW9uOjk=");
    }
}
