use std::process::ExitCode;

use clap::{
    Parser, Subcommand,
    builder::{PossibleValuesParser, TypedValueParser},
};
use lector_log::{LEVELS, Level};
use url::Url;

use crate::command::{self, JsonOutput};
use crate::options::FormatType;
use crate::utils::{
    client::{ClientConfig, LectorConfigError},
    env::{LectorEnv, LectorEnvKey},
};
use crate::{LectorOutput, LectorResult};

#[derive(Debug, Parser)]
#[command(
    name = "lector",
    author,
    version,
    about = "Lector - your reading history, from the terminal",
    long_about = "
Lector - your reading history, from the terminal

Commands that read your own data need an access token. Pass it with
--token or set it once:

    $ export LECTOR_ACCESS_TOKEN=<token>

The most common commands from there are:

    - lector history list: List the posts you have read, most recent first
    - lector history search <QUERY>: Search your reading history
    - lector history stats <USER_ID> --after <DATE> --before <DATE>: Reads per day and top tags
"
)]
pub struct Lector {
    #[clap(subcommand)]
    command: Command,

    /// Specify Lector's log level
    #[arg(
        long = "log",
        short = 'l',
        global = true,
        ignore_case = true,
        value_parser = PossibleValuesParser::new(LEVELS).try_map(|level| level.parse::<Level>())
    )]
    log_level: Option<Level>,

    /// Specify Lector's output type
    #[arg(long = "format", value_enum, default_value_t = FormatType::Plain, global = true)]
    format_type: FormatType,

    /// The GraphQL endpoint to send requests to.
    /// Overrides $LECTOR_ENDPOINT
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<Url>,

    /// The access token to authenticate with.
    /// Overrides $LECTOR_ACCESS_TOKEN
    #[arg(long, global = true, value_name = "TOKEN")]
    token: Option<String>,

    #[arg(skip)]
    env_store: LectorEnv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse, search and prune your reading history
    History(command::History),

    /// Look up users and manage your own profile
    Profile(command::Profile),

    /// Manage your personalized digest subscription
    Digest(command::Digest),
}

impl Lector {
    pub async fn run(&self) -> ExitCode {
        let result = match self.log_level() {
            Ok(level) => {
                lector_log::init(level);
                tracing::trace!(command_structure = ?self.command);
                self.execute().await
            }
            Err(error) => Err(error),
        };

        match result {
            Ok(output) => {
                let printed = if self.format_type.is_json() {
                    JsonOutput::from(output).print()
                } else {
                    output.print()
                };
                if let Err(error) = printed {
                    tracing::debug!(?error, "could not print output");
                }
                ExitCode::SUCCESS
            }
            Err(error) => {
                tracing::debug!(?error);
                let printed = if self.format_type.is_json() {
                    JsonOutput::from(error).print()
                } else {
                    error.print()
                };
                if let Err(error) = printed {
                    tracing::debug!(?error, "could not print error");
                }
                ExitCode::FAILURE
            }
        }
    }

    async fn execute(&self) -> LectorResult<LectorOutput> {
        let client_config = self.client_config()?;
        match &self.command {
            Command::History(command) => command.run(client_config).await,
            Command::Profile(command) => command.run(client_config).await,
            Command::Digest(command) => command.run(client_config).await,
        }
    }

    /// `--log` wins over `$LECTOR_LOG`
    pub(crate) fn log_level(&self) -> LectorResult<Option<Level>> {
        if let Some(level) = self.log_level {
            return Ok(Some(level));
        }
        match self.env_store.get(LectorEnvKey::Log)? {
            Some(value) => match value.parse::<Level>() {
                Ok(level) => Ok(Some(level)),
                Err(_) => Err(LectorConfigError::InvalidEnvValue {
                    key: LectorEnvKey::Log,
                    value,
                }
                .into()),
            },
            None => Ok(None),
        }
    }

    pub(crate) fn client_config(&self) -> LectorResult<ClientConfig> {
        ClientConfig::new(self.endpoint.clone(), self.token.clone(), &self.env_store)
    }
}
