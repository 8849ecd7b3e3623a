use std::fmt::{self, Display};

use console::style;

use crate::utils::env::LectorEnvKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    SubmitIssue,
    CheckServerConnection,
    CheckAccessToken,
    CheckArguments,
    RestartWithoutCursor,
    FixDateRange,
    FixEnvValue(LectorEnvKey),
    ProvideAccessToken,
    CheckEndpoint,
    Adhoc(String),
}

impl Display for Suggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            Suggestion::SubmitIssue => {
                "This error was unexpected! Please submit an issue with any relevant details about what you were trying to do.".to_string()
            }
            Suggestion::CheckServerConnection => {
                format!(
                    "Make sure the endpoint is reachable, or point {} at a different one.",
                    style(LectorEnvKey::Endpoint).yellow()
                )
            }
            Suggestion::CheckAccessToken => {
                format!(
                    "The server rejected your access token. Check the value passed with {} or set in {}.",
                    style("--token").yellow(),
                    style(LectorEnvKey::AccessToken).yellow()
                )
            }
            Suggestion::CheckArguments => {
                "The server could not answer this request. Check the arguments you passed, then try again.".to_string()
            }
            Suggestion::RestartWithoutCursor => {
                format!(
                    "Leave out {} to start from the first page.",
                    style("--after").yellow()
                )
            }
            Suggestion::FixDateRange => {
                format!(
                    "{} must be on or before {}.",
                    style("--after").yellow(),
                    style("--before").yellow()
                )
            }
            Suggestion::FixEnvValue(key) => {
                format!("Fix or unset {}.", style(key).yellow())
            }
            Suggestion::ProvideAccessToken => {
                format!(
                    "This command reads your own data. Pass {} or set {}.",
                    style("--token").yellow(),
                    style(LectorEnvKey::AccessToken).yellow()
                )
            }
            Suggestion::CheckEndpoint => {
                format!(
                    "Pass an absolute http(s) URL with {} or {}.",
                    style("--endpoint").yellow(),
                    style(LectorEnvKey::Endpoint).yellow()
                )
            }
            Suggestion::Adhoc(msg) => msg.to_string(),
        };
        write!(formatter, "{}", &suggestion)
    }
}
