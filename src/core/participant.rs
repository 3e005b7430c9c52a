use crate::core::client::DonorDriveClient;
use crate::core::endpoint::{self, ListOptions};
use crate::domain::model::{Activity, Badge, Donation, Donor, Incentive, Milestone, Participant};
use crate::domain::ports::Fundraiser;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Handle on one participant's resources. Creating it performs no I/O.
#[derive(Debug, Clone, Copy)]
pub struct ParticipantApi<'a> {
    client: &'a DonorDriveClient,
    participant_id: u64,
}

impl<'a> ParticipantApi<'a> {
    pub fn new(client: &'a DonorDriveClient, participant_id: u64) -> Self {
        Self {
            client,
            participant_id,
        }
    }

    pub fn id(&self) -> u64 {
        self.participant_id
    }

    fn key(&self) -> String {
        self.participant_id.to_string()
    }

    pub async fn donors(&self, options: &ListOptions) -> Result<Vec<Donor>> {
        self.client
            .fetch_list(&endpoint::PARTICIPANT_DONORS, &self.key(), options)
            .await
    }

    pub async fn milestones(&self) -> Result<Vec<Milestone>> {
        self.client
            .fetch_list(
                &endpoint::PARTICIPANT_MILESTONES,
                &self.key(),
                &ListOptions::new(),
            )
            .await
    }

    pub async fn incentives(&self) -> Result<Vec<Incentive>> {
        self.client
            .fetch_list(
                &endpoint::PARTICIPANT_INCENTIVES,
                &self.key(),
                &ListOptions::new(),
            )
            .await
    }

    /// Largest single donation, as sorted by the API.
    pub async fn top_donation(&self) -> Result<Option<Donation>> {
        let options = ListOptions::new().order_by("amount DESC").limit(1);
        Ok(self.donations(&options).await?.into_iter().next())
    }

    /// Donor with the highest total. Anonymous donors never appear in the
    /// donors list, so this can be `None` even when donations exist.
    pub async fn top_donor(&self) -> Result<Option<Donor>> {
        let options = ListOptions::new().order_by("sumDonations DESC").limit(1);
        Ok(self.donors(&options).await?.into_iter().next())
    }
}

#[async_trait]
impl Fundraiser for ParticipantApi<'_> {
    type Details = Participant;

    async fn details(&self) -> Result<Participant> {
        self.client
            .fetch_one(&endpoint::PARTICIPANT, &self.key())
            .await
    }

    async fn donations(&self, options: &ListOptions) -> Result<Vec<Donation>> {
        self.client
            .fetch_list(&endpoint::PARTICIPANT_DONATIONS, &self.key(), options)
            .await
    }

    async fn badges(&self) -> Result<Vec<Badge>> {
        self.client
            .fetch_list(
                &endpoint::PARTICIPANT_BADGES,
                &self.key(),
                &ListOptions::new(),
            )
            .await
    }

    async fn activity(&self) -> Result<Vec<Activity>> {
        self.client
            .fetch_list(
                &endpoint::PARTICIPANT_ACTIVITY,
                &self.key(),
                &ListOptions::new(),
            )
            .await
    }
}
