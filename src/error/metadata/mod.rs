mod code;
mod suggestion;

pub use code::Code;
pub use suggestion::Suggestion;

use lector_client::{FailureReason, LectorClientError};
use serde::{Serialize, Serializer};

use crate::utils::client::LectorConfigError;

/// Metadata contains extra information about specific errors
/// Currently this includes an optional error `Code`
/// and an optional `Suggestion`
#[derive(Default, Debug, Serialize)]
pub struct Metadata {
    #[serde(serialize_with = "plain_suggestion")]
    pub suggestion: Option<Suggestion>,
    pub code: Option<Code>,
}

// suggestions are styled for the terminal; JSON gets the bare text
fn plain_suggestion<S>(suggestion: &Option<Suggestion>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match suggestion {
        Some(suggestion) => {
            serializer.collect_str(&console::strip_ansi_codes(&suggestion.to_string()))
        }
        None => serializer.serialize_none(),
    }
}

/// `Metadata` structs can be created from an `anyhow::Error`
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable
impl From<&mut anyhow::Error> for Metadata {
    fn from(error: &mut anyhow::Error) -> Self {
        if let Some(lector_client_error) = error.downcast_ref::<LectorClientError>() {
            let (suggestion, code) = match lector_client_error {
                LectorClientError::RequestFailed { reason, .. } => match reason {
                    FailureReason::Transport => {
                        (Some(Suggestion::CheckServerConnection), Some(Code::E001))
                    }
                    FailureReason::Unauthenticated => {
                        (Some(Suggestion::CheckAccessToken), Some(Code::E002))
                    }
                    FailureReason::GraphQL => (Some(Suggestion::CheckArguments), Some(Code::E003)),
                    FailureReason::Decode => (Some(Suggestion::SubmitIssue), Some(Code::E004)),
                },
                LectorClientError::InvalidHeaderName(_) => {
                    (Some(Suggestion::SubmitIssue), Some(Code::E005))
                }
                LectorClientError::InvalidHeaderValue(_) => {
                    (Some(Suggestion::CheckAccessToken), Some(Code::E005))
                }
                LectorClientError::EmptyCursor => {
                    (Some(Suggestion::RestartWithoutCursor), Some(Code::E006))
                }
                LectorClientError::InvalidDateRange { .. } => {
                    (Some(Suggestion::FixDateRange), Some(Code::E007))
                }
                LectorClientError::InvalidRetryPolicy(_) => (
                    Some(Suggestion::FixEnvValue(crate::utils::env::LectorEnvKey::Retries)),
                    Some(Code::E008),
                ),
            };
            return Metadata { suggestion, code };
        }

        if let Some(config_error) = error.downcast_ref::<LectorConfigError>() {
            let (suggestion, code) = match config_error {
                LectorConfigError::MissingAccessToken => {
                    (Some(Suggestion::ProvideAccessToken), Some(Code::E009))
                }
                LectorConfigError::InvalidEnvValue { key, .. } => {
                    (Some(Suggestion::FixEnvValue(*key)), Some(Code::E010))
                }
                LectorConfigError::InvalidEndpoint { .. } => {
                    (Some(Suggestion::CheckEndpoint), Some(Code::E011))
                }
                LectorConfigError::Http(_) => (Some(Suggestion::SubmitIssue), None),
            };
            return Metadata { suggestion, code };
        }

        Metadata::default()
    }
}
