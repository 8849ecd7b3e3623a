use clap::Parser;
use lector_client::shared::Cursor;

#[derive(Debug, Clone, Parser)]
pub struct PagingOpt {
    /// Maximum number of entries per page. The server picks a size when left out.
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    pub first: Option<i64>,

    /// Resume after this cursor, as printed by an earlier run
    #[arg(long, value_name = "CURSOR")]
    pub after: Option<Cursor>,

    /// Keep fetching pages until the history runs out
    #[arg(long)]
    pub all: bool,

    /// Stop after this many pages. Implies --all.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_pages: Option<u64>,
}

impl PagingOpt {
    /// How many pages to fetch, `None` meaning until exhausted
    pub fn page_limit(&self) -> Option<usize> {
        match (self.all, self.max_pages) {
            (_, Some(max_pages)) => Some(usize::try_from(max_pages).unwrap_or(usize::MAX)),
            (true, None) => None,
            (false, None) => Some(1),
        }
    }
}
