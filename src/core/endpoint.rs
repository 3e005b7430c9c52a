//! Endpoint descriptors for the DonorDrive public API.
//!
//! Each descriptor is a path template with a single `{id}` placeholder, the
//! HTTP method, and whether the endpoint answers with one object or a list.

use crate::utils::error::{DonorDriveError, Result};
use reqwest::Method;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Object,
    List,
}

#[derive(Debug)]
pub struct Endpoint {
    pub name: &'static str,
    pub path: &'static str,
    pub method: Method,
    pub shape: ResponseShape,
}

const fn get(name: &'static str, path: &'static str, shape: ResponseShape) -> Endpoint {
    Endpoint {
        name,
        path,
        method: Method::GET,
        shape,
    }
}

pub static PARTICIPANT: Endpoint = get("participant", "/participants/{id}", ResponseShape::Object);
pub static PARTICIPANT_DONATIONS: Endpoint = get(
    "participant.donations",
    "/participants/{id}/donations",
    ResponseShape::List,
);
pub static PARTICIPANT_DONORS: Endpoint = get(
    "participant.donors",
    "/participants/{id}/donors",
    ResponseShape::List,
);
pub static PARTICIPANT_BADGES: Endpoint = get(
    "participant.badges",
    "/participants/{id}/badges",
    ResponseShape::List,
);
pub static PARTICIPANT_MILESTONES: Endpoint = get(
    "participant.milestones",
    "/participants/{id}/milestones",
    ResponseShape::List,
);
pub static PARTICIPANT_INCENTIVES: Endpoint = get(
    "participant.incentives",
    "/participants/{id}/incentives",
    ResponseShape::List,
);
pub static PARTICIPANT_ACTIVITY: Endpoint = get(
    "participant.activity",
    "/participants/{id}/activity",
    ResponseShape::List,
);
pub static TEAM: Endpoint = get("team", "/teams/{id}", ResponseShape::Object);
pub static TEAM_PARTICIPANTS: Endpoint = get(
    "team.participants",
    "/teams/{id}/participants",
    ResponseShape::List,
);
pub static TEAM_DONATIONS: Endpoint = get(
    "team.donations",
    "/teams/{id}/donations",
    ResponseShape::List,
);
pub static TEAM_BADGES: Endpoint = get("team.badges", "/teams/{id}/badges", ResponseShape::List);
pub static TEAM_ACTIVITY: Endpoint = get(
    "team.activity",
    "/teams/{id}/activity",
    ResponseShape::List,
);
pub static TEAM_GROUP: Endpoint = get("team_group", "/teamgroups/{id}", ResponseShape::Object);

pub static ALL: &[&Endpoint] = &[
    &PARTICIPANT,
    &PARTICIPANT_DONATIONS,
    &PARTICIPANT_DONORS,
    &PARTICIPANT_BADGES,
    &PARTICIPANT_MILESTONES,
    &PARTICIPANT_INCENTIVES,
    &PARTICIPANT_ACTIVITY,
    &TEAM,
    &TEAM_PARTICIPANTS,
    &TEAM_DONATIONS,
    &TEAM_BADGES,
    &TEAM_ACTIVITY,
    &TEAM_GROUP,
];

impl Endpoint {
    pub fn by_name(name: &str) -> Result<&'static Endpoint> {
        ALL.iter()
            .copied()
            .find(|endpoint| endpoint.name == name)
            .ok_or_else(|| DonorDriveError::UnknownEndpoint {
                name: name.to_string(),
            })
    }

    /// Joins the path template onto `base`, substituting `id` as one
    /// percent-encoded path segment.
    pub fn url(&self, base: &Url, id: &str) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|_| DonorDriveError::InvalidConfigValueError {
                        field: "base_url".to_string(),
                        value: base.to_string(),
                        reason: "URL cannot be used as a base".to_string(),
                    })?;
            segments.pop_if_empty();
            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                if segment == "{id}" {
                    segments.push(id);
                } else {
                    segments.push(segment);
                }
            }
        }
        Ok(url)
    }
}

/// Query parameters understood by every DonorDrive list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order_by: Option<String>,
    pub filter: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// e.g. `"sumDonations DESC"`
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Sent as the `where` parameter, e.g. `"isRegFee = 0"`.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(("orderBy", order_by.clone()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("where", filter.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_path() {
        let base = Url::parse("https://www.extra-life.org/api").unwrap();
        let url = PARTICIPANT_DONATIONS.url(&base, "478153").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.extra-life.org/api/participants/478153/donations"
        );
    }

    #[test]
    fn test_url_with_trailing_slash_and_bare_host() {
        let base = Url::parse("https://www.extra-life.org/api/").unwrap();
        assert_eq!(
            TEAM.url(&base, "44013").unwrap().as_str(),
            "https://www.extra-life.org/api/teams/44013"
        );

        let bare = Url::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            TEAM_BADGES.url(&bare, "1").unwrap().as_str(),
            "http://127.0.0.1:8080/teams/1/badges"
        );
    }

    #[test]
    fn test_identifier_is_encoded_as_one_segment() {
        let base = Url::parse("https://example.com/api").unwrap();
        let url = TEAM_GROUP.url(&base, "a/b c").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/teamgroups/a%2Fb%20c");
    }

    #[test]
    fn test_by_name() {
        let endpoint = Endpoint::by_name("team.participants").unwrap();
        assert_eq!(endpoint.path, "/teams/{id}/participants");
        assert_eq!(endpoint.shape, ResponseShape::List);
        assert_eq!(endpoint.method, Method::GET);

        let error = Endpoint::by_name("team.snacks").unwrap_err();
        assert!(matches!(error, DonorDriveError::UnknownEndpoint { name } if name == "team.snacks"));
    }

    #[test]
    fn test_endpoint_names_are_unique() {
        let mut names: Vec<&str> = ALL.iter().map(|endpoint| endpoint.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_list_options_query_pairs() {
        assert!(ListOptions::new().query_pairs().is_empty());

        let options = ListOptions::new()
            .limit(5)
            .offset(10)
            .order_by("sumDonations DESC")
            .filter("isRegFee = 0");
        assert_eq!(
            options.query_pairs(),
            vec![
                ("limit", "5".to_string()),
                ("offset", "10".to_string()),
                ("orderBy", "sumDonations DESC".to_string()),
                ("where", "isRegFee = 0".to_string()),
            ]
        );
    }
}
