use crate::core::client::DonorDriveClient;
use crate::core::endpoint::{self, ListOptions};
use crate::domain::model::{Activity, Badge, Donation, Participant, Team};
use crate::domain::ports::Fundraiser;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Handle on one team's resources. Creating it performs no I/O.
#[derive(Debug, Clone, Copy)]
pub struct TeamApi<'a> {
    client: &'a DonorDriveClient,
    team_id: u64,
}

impl<'a> TeamApi<'a> {
    pub fn new(client: &'a DonorDriveClient, team_id: u64) -> Self {
        Self { client, team_id }
    }

    pub fn id(&self) -> u64 {
        self.team_id
    }

    fn key(&self) -> String {
        self.team_id.to_string()
    }

    pub async fn participants(&self, options: &ListOptions) -> Result<Vec<Participant>> {
        self.client
            .fetch_list(&endpoint::TEAM_PARTICIPANTS, &self.key(), options)
            .await
    }

    /// The `count` members who raised the most, highest first.
    pub async fn top_participants(&self, count: u32) -> Result<Vec<Participant>> {
        let options = ListOptions::new().order_by("sumDonations DESC").limit(count);
        self.participants(&options).await
    }
}

#[async_trait]
impl Fundraiser for TeamApi<'_> {
    type Details = Team;

    async fn details(&self) -> Result<Team> {
        self.client.fetch_one(&endpoint::TEAM, &self.key()).await
    }

    async fn donations(&self, options: &ListOptions) -> Result<Vec<Donation>> {
        self.client
            .fetch_list(&endpoint::TEAM_DONATIONS, &self.key(), options)
            .await
    }

    async fn badges(&self) -> Result<Vec<Badge>> {
        self.client
            .fetch_list(&endpoint::TEAM_BADGES, &self.key(), &ListOptions::new())
            .await
    }

    async fn activity(&self) -> Result<Vec<Activity>> {
        self.client
            .fetch_list(&endpoint::TEAM_ACTIVITY, &self.key(), &ListOptions::new())
            .await
    }
}
