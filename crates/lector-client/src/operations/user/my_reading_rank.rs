use chrono::{DateTime, Utc};
use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use super::RankVariables;
use crate::{LectorClient, LectorClientError};

const MY_READING_RANK_QUERY: &str = r#"
query UserReadingRank($id: ID!, $version: Int) {
  rank: userReadingRank(id: $id, version: $version) {
    rankLastWeek
    currentRank
    progressThisWeek
    readToday
    lastReadTime
    tags {
      tag
      readingDays
      percentage
    }
  }
}
"#;

/// The viewer's own reading rank, with weekly progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyReadingRank {
    pub rank_last_week: i64,
    pub current_rank: i64,
    pub progress_this_week: i64,
    pub read_today: bool,
    pub last_read_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<RankTag>,
}

/// A tag the viewer read on some days this period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankTag {
    pub tag: String,
    pub reading_days: i64,
    pub percentage: Option<f64>,
}

/// Response of the extended `UserReadingRank` query
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MyReadingRankResponseData {
    pub(crate) rank: MyReadingRank,
}

/// The `UserReadingRank` query with the extended field set, aliased to `rank`
pub struct MyReadingRankQuery;

impl GraphQLQuery for MyReadingRankQuery {
    type Variables = RankVariables;
    type ResponseData = MyReadingRankResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: MY_READING_RANK_QUERY,
            operation_name: "UserReadingRank",
        }
    }
}

/// Fetches the viewer's own rank and weekly progress. `id` must be the viewer's id.
pub async fn run(
    id: String,
    version: Option<i64>,
    client: &LectorClient,
) -> Result<MyReadingRank, LectorClientError> {
    let response_data = client
        .post::<MyReadingRankQuery>(RankVariables { id, version })
        .await?;
    Ok(response_data.rank)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn the_aliased_rank_decodes() {
        let data: MyReadingRankResponseData = serde_json::from_value(json!({
            "rank": {
                "rankLastWeek": 2,
                "currentRank": 3,
                "progressThisWeek": 4,
                "readToday": true,
                "lastReadTime": null,
                "tags": [{ "tag": "rust", "readingDays": 3, "percentage": 0.5 }]
            }
        }))
        .unwrap();

        assert_that!(data.rank.current_rank).is_equal_to(3);
        assert_that!(data.rank.last_read_time).is_none();
        assert_that!(data.rank.tags[0].reading_days).is_equal_to(3);
    }
}
