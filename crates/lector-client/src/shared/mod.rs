mod date_range;
mod pagination;
pub(crate) mod post;
pub(crate) mod user;

pub use date_range::DateRange;
pub use pagination::{Cursor, Page, PageInfo};
pub(crate) use pagination::Connection;
pub use post::{PostSummary, SourceSummary};
pub use user::UserShortInfo;

/// Payload of mutations that only acknowledge success.
///
/// The server's `EmptyResponse` type exposes a single `_` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmptyResponse {
    /// Always `true` when present; kept optional because servers may omit it
    #[serde(rename = "_", default)]
    pub acknowledged: Option<bool>,
}
