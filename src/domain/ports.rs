use crate::core::endpoint::ListOptions;
use crate::domain::model::{Activity, Badge, Donation};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;

/// Client settings; implementors are validated before a client is built.
pub trait ConfigProvider: Validate + Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn api_version(&self) -> Option<&str>;
    fn user_agent(&self) -> &str;
    fn headers(&self) -> Vec<(String, String)>;
}

/// Resources shared by participants and teams.
#[async_trait]
pub trait Fundraiser: Send + Sync {
    type Details: Send;

    async fn details(&self) -> Result<Self::Details>;
    async fn donations(&self, options: &ListOptions) -> Result<Vec<Donation>>;
    async fn badges(&self) -> Result<Vec<Badge>>;
    async fn activity(&self) -> Result<Vec<Activity>>;
}
