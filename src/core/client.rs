use crate::config::ClientConfig;
use crate::core::endpoint::{self, Endpoint, ListOptions, ResponseShape};
use crate::core::participant::ParticipantApi;
use crate::core::team::TeamApi;
use crate::domain::model::{Page, Record, TeamGroup};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DonorDriveError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Response header carrying the total size of a list resource.
pub const NUM_RECORDS_HEADER: &str = "num-records";

/// Untyped response, shaped by the endpoint descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    One(Record),
    Many(Vec<Record>),
}

/// Thin async client for one DonorDrive instance.
///
/// Holds no per-call state; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct DonorDriveClient {
    http: Client,
    base_url: Url,
    api_version: Option<String>,
}

impl DonorDriveClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&ClientConfig::with_base_url(base_url))
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(config.base_url())?;

        let mut headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                DonorDriveError::InvalidConfigValueError {
                    field: "headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                DonorDriveError::InvalidConfigValueError {
                    field: format!("headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(header_name, header_value);
        }

        let http = Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .default_headers(headers)
            .build()
            .map_err(DonorDriveError::ClientBuild)?;

        tracing::debug!("DonorDrive client ready for {}", base_url);

        Ok(Self {
            http,
            base_url,
            api_version: config.api_version().map(str::to_string),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL for `endpoint`, including list options and the API version.
    pub fn url_for(
        &self,
        endpoint: &Endpoint,
        id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Url> {
        let mut url = endpoint.url(&self.base_url, id)?;

        let mut pairs = options.map(ListOptions::query_pairs).unwrap_or_default();
        if let Some(version) = &self.api_version {
            pairs.push(("version", version.clone()));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    pub async fn fetch_one<T: DeserializeOwned>(&self, endpoint: &Endpoint, id: &str) -> Result<T> {
        expect_shape(endpoint, ResponseShape::Object)?;
        let url = self.url_for(endpoint, id, None)?;
        let (body, _) = self.execute(endpoint, &url).await?;
        parse_body(&url, &body)
    }

    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        id: &str,
        options: &ListOptions,
    ) -> Result<Vec<T>> {
        Ok(self.fetch_page(endpoint, id, options).await?.items)
    }

    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        id: &str,
        options: &ListOptions,
    ) -> Result<Page<T>> {
        expect_shape(endpoint, ResponseShape::List)?;
        let url = self.url_for(endpoint, id, Some(options))?;
        let (body, total) = self.execute(endpoint, &url).await?;
        let items: Vec<T> = parse_body(&url, &body)?;
        tracing::debug!("{}: {} records (total {:?})", endpoint.name, items.len(), total);
        Ok(Page { items, total })
    }

    pub async fn fetch_raw(
        &self,
        endpoint: &Endpoint,
        id: &str,
        options: &ListOptions,
    ) -> Result<RawResponse> {
        match endpoint.shape {
            ResponseShape::Object => Ok(RawResponse::One(self.fetch_one(endpoint, id).await?)),
            ResponseShape::List => Ok(RawResponse::Many(
                self.fetch_list(endpoint, id, options).await?,
            )),
        }
    }

    pub fn participant(&self, participant_id: u64) -> ParticipantApi<'_> {
        ParticipantApi::new(self, participant_id)
    }

    pub fn team(&self, team_id: u64) -> TeamApi<'_> {
        TeamApi::new(self, team_id)
    }

    pub async fn team_group(&self, group_code: &str) -> Result<TeamGroup> {
        self.fetch_one(&endpoint::TEAM_GROUP, group_code).await
    }

    async fn execute(&self, endpoint: &Endpoint, url: &Url) -> Result<(String, Option<u64>)> {
        tracing::debug!("{} {} ({})", endpoint.method, url, endpoint.name);

        let transport = |source: reqwest::Error| DonorDriveError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .http
            .request(endpoint.method.clone(), url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let total = response
            .headers()
            .get(NUM_RECORDS_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let body = response.text().await.map_err(transport)?;

        tracing::debug!("{} responded {}", url, status);

        if !status.is_success() {
            tracing::warn!("{} returned {}", url, status);
            return Err(DonorDriveError::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        Ok((body, total))
    }
}

fn expect_shape(endpoint: &Endpoint, expected: ResponseShape) -> Result<()> {
    if endpoint.shape != expected {
        return Err(DonorDriveError::ConfigError {
            message: format!(
                "endpoint {} returns {:?}, not {:?}",
                endpoint.name, endpoint.shape, expected
            ),
        });
    }
    Ok(())
}

fn parse_body<T: DeserializeOwned>(url: &Url, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| {
        tracing::warn!("Unexpected response body from {}: {}", url, source);
        DonorDriveError::Parse {
            url: url.to_string(),
            source,
        }
    })
}
