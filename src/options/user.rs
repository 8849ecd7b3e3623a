use clap::Parser;

#[derive(Debug, Clone, Parser)]
pub struct UserIdOpt {
    /// The id of the user
    #[arg(value_name = "USER_ID")]
    pub user_id: String,
}

#[derive(Debug, Clone, Parser)]
pub struct VersionOpt {
    /// Reading rank model version, passed to the server as is
    #[arg(long)]
    pub version: Option<i64>,
}
