use crate::config::{ClientConfig, TomlConfig};
use crate::core::endpoint::ListOptions;
use crate::utils::error::{DonorDriveError, Result};
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "donordrive")]
#[command(about = "Query the DonorDrive public fundraising API and print JSON")]
pub struct CliConfig {
    /// API root, e.g. https://www.extra-life.org/api
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// TOML file with [client] and [defaults] sections
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, global = true)]
    pub api_version: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// A participant and their donations, donors, badges, milestones, incentives or activity
    Participant {
        id: Option<u64>,
        #[arg(long, value_enum, default_value_t = ParticipantResource::Details)]
        resource: ParticipantResource,
        #[command(flatten)]
        list: ListArgs,
    },
    /// A team and its participants, donations, badges or activity
    Team {
        id: Option<u64>,
        #[arg(long, value_enum, default_value_t = TeamResource::Details)]
        resource: TeamResource,
        #[command(flatten)]
        list: ListArgs,
    },
    /// A team group by its group code
    TeamGroup { code: Option<String> },
    /// Any endpoint by name, returned as untyped records
    Raw {
        endpoint: String,
        id: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// List the known endpoints
    Endpoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParticipantResource {
    Details,
    Donations,
    Donors,
    Badges,
    Milestones,
    Incentives,
    Activity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TeamResource {
    Details,
    Participants,
    Donations,
    Badges,
    Activity,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub offset: Option<u32>,
    /// e.g. "sumDonations DESC"
    #[arg(long)]
    pub order_by: Option<String>,
    /// DonorDrive `where` filter
    #[arg(long = "where")]
    pub filter: Option<String>,
}

impl From<&ListArgs> for ListOptions {
    fn from(args: &ListArgs) -> Self {
        ListOptions {
            limit: args.limit,
            offset: args.offset,
            order_by: args.order_by.clone(),
            filter: args.filter.clone(),
        }
    }
}

impl CliConfig {
    /// Loads the config file, if any, and applies command line overrides on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        self.apply_overrides(&mut config.client);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, client: &mut ClientConfig) {
        if let Some(base_url) = &self.base_url {
            client.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            client.timeout_seconds = timeout;
        }
        if let Some(version) = &self.api_version {
            client.api_version = Some(version.clone());
        }
    }
}

/// Command line value first, then the config default, else a missing-config error.
pub fn require<T: Clone>(cli_value: Option<T>, default: Option<&T>, field: &str) -> Result<T> {
    cli_value
        .or_else(|| default.cloned())
        .ok_or_else(|| DonorDriveError::MissingConfigError {
            field: field.to_string(),
        })
}
