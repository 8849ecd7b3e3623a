use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use crate::{LectorClient, LectorClientError};

const REFERRAL_CAMPAIGN_QUERY: &str = r#"
query ReferralCampaign($referralOrigin: String!) {
  referralCampaign(referralOrigin: $referralOrigin) {
    referredUsersCount
    referralCountLimit
    referralToken
    url
  }
}
"#;

/// Variables of the `ReferralCampaign` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCampaignVariables {
    pub(crate) referral_origin: String,
}

/// The viewer's standing in a referral campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCampaign {
    pub referred_users_count: i64,
    pub referral_count_limit: Option<i64>,
    pub referral_token: Option<String>,
    pub url: String,
}

/// Response of the `ReferralCampaign` query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCampaignResponseData {
    pub(crate) referral_campaign: ReferralCampaign,
}

/// The `ReferralCampaign` query
pub struct ReferralCampaignQuery;

impl GraphQLQuery for ReferralCampaignQuery {
    type Variables = ReferralCampaignVariables;
    type ResponseData = ReferralCampaignResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: REFERRAL_CAMPAIGN_QUERY,
            operation_name: "ReferralCampaign",
        }
    }
}

/// Fetches the viewer's referral campaign for `referral_origin`
pub async fn run(
    referral_origin: String,
    client: &LectorClient,
) -> Result<ReferralCampaign, LectorClientError> {
    let response_data = client
        .post::<ReferralCampaignQuery>(ReferralCampaignVariables { referral_origin })
        .await?;
    Ok(response_data.referral_campaign)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn unlimited_campaigns_decode() {
        let data: ReferralCampaignResponseData = serde_json::from_value(json!({
            "referralCampaign": {
                "referredUsersCount": 2,
                "referralCountLimit": null,
                "referralToken": null,
                "url": "https://example.com/join?cid=generic"
            }
        }))
        .unwrap();

        assert_that!(data.referral_campaign.referred_users_count).is_equal_to(2);
        assert_that!(data.referral_campaign.referral_count_limit).is_none();
    }
}
