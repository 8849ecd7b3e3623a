use clap::Parser;
use lector_client::operations::user::referral;

use crate::utils::client::ClientConfig;
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
pub struct Referral {
    /// Where the referral link will be shared, e.g. "generic"
    #[arg(value_name = "ORIGIN")]
    origin: String,
}

impl Referral {
    pub async fn run(&self, client_config: ClientConfig) -> LectorResult<LectorOutput> {
        let client = client_config.get_authenticated_client()?;
        let campaign = referral::run(self.origin.clone(), &client).await?;
        Ok(LectorOutput::ReferralCampaign(campaign))
    }
}
