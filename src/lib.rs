//! Thin async client for the DonorDrive public fundraising API (Extra Life
//! and other DonorDrive instances).
//!
//! ```rust,no_run
//! use donordrive::{DonorDriveClient, Fundraiser, ListOptions};
//!
//! #[tokio::main]
//! async fn main() -> donordrive::Result<()> {
//!     let client = DonorDriveClient::new("https://www.extra-life.org/api")?;
//!
//!     let participant = client.participant(478153).details().await?;
//!     println!("{} raised ${:.2}", participant.display_name, participant.sum_donations);
//!
//!     let recent = client
//!         .team(44013)
//!         .donations(&ListOptions::new().limit(5))
//!         .await?;
//!     println!("{} recent team donations", recent.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{ClientConfig, TomlConfig};

pub use crate::core::client::{DonorDriveClient, RawResponse};
pub use crate::core::endpoint::{Endpoint, ListOptions, ResponseShape};
pub use crate::core::participant::ParticipantApi;
pub use crate::core::team::TeamApi;
pub use crate::domain::model::{
    Activity, ActivityKind, Badge, Donation, Donor, Incentive, Links, Milestone, Page,
    Participant, Record, Team, TeamGroup,
};
pub use crate::domain::ports::{ConfigProvider, Fundraiser};
pub use crate::utils::error::{DonorDriveError, ErrorCategory, Result};
