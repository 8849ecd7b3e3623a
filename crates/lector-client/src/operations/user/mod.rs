//! Profile lookups and updates for platform users.
//!
//! Every operation goes through [`LectorClient::post`](crate::LectorClient::post)
//! and fails with [`LectorClientError::RequestFailed`](crate::LectorClientError::RequestFailed).

pub mod handles;
pub mod my_reading_rank;
pub mod profile;
pub mod reading_rank;
pub mod referral;
pub mod referring_user;
pub mod stats;
pub mod tooltip;
pub mod update;
pub mod username;

/// Variables shared by the lookups keyed only by a user id
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UserIdVariables {
    pub(crate) id: String,
}

/// Variables of the rank lookups: a user id and an optional rank model version
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RankVariables {
    pub(crate) id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) version: Option<i64>,
}
