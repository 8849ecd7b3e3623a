use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GraphQL text of the `UserShortInfo` fragment
macro_rules! user_short_info_fragment {
    () => {
        r#"
fragment UserShortInfo on User {
  id
  name
  image
  permalink
  username
  bio
  createdAt
  reputation
}
"#
    };
}

pub(crate) use user_short_info_fragment;

/// The short user card selected by the `UserShortInfo` fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserShortInfo {
    pub id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub permalink: String,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub reputation: Option<i64>,
}
