mod output;
mod paging;
mod user;

pub use output::FormatType;
pub(crate) use paging::PagingOpt;
pub(crate) use user::{UserIdOpt, VersionOpt};
