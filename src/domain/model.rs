//! Response records for the DonorDrive public API.
//!
//! Field names follow the API's JSON exactly (`participantID`,
//! `avatarImageURL`, ...). Identifiers are required; everything else is
//! optional or defaulted because instances omit fields freely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One JSON object as returned by the API, untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.data.get(field)
    }
}

/// A list response together with the `Num-Records` total, when sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(rename = "participantID")]
    pub participant_id: u64,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub fundraising_goal: f64,
    #[serde(default)]
    pub sum_donations: f64,
    #[serde(default)]
    pub sum_pledges: f64,
    #[serde(default)]
    pub num_donations: u64,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(rename = "eventID", default)]
    pub event_id: Option<u64>,
    #[serde(rename = "teamID", default)]
    pub team_id: Option<u64>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub is_team_captain: bool,
    #[serde(default)]
    pub stream_is_live: bool,
    #[serde(rename = "avatarImageURL", default)]
    pub avatar_image_url: Option<String>,
    #[serde(rename = "createdDateUTC", default)]
    pub created_date_utc: Option<String>,
    #[serde(default)]
    pub links: Links,
}

impl Participant {
    /// Mean donation amount, or 0 before the first donation.
    pub fn average_donation(&self) -> f64 {
        if self.num_donations == 0 {
            0.0
        } else {
            self.sum_donations / self.num_donations as f64
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_api_timestamp(self.created_date_utc.as_deref()?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "teamID")]
    pub team_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fundraising_goal: f64,
    #[serde(default)]
    pub sum_donations: f64,
    #[serde(default)]
    pub num_donations: u64,
    #[serde(default)]
    pub num_participants: Option<u64>,
    #[serde(default)]
    pub captain_display_name: Option<String>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(rename = "eventID", default)]
    pub event_id: Option<u64>,
    #[serde(rename = "avatarImageURL", default)]
    pub avatar_image_url: Option<String>,
    #[serde(rename = "createdDateUTC", default)]
    pub created_date_utc: Option<String>,
    #[serde(default)]
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGroup {
    pub group_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fundraising_goal: f64,
    #[serde(default)]
    pub sum_donations: f64,
    #[serde(default)]
    pub num_donations: u64,
    #[serde(default)]
    pub num_participants: u64,
    #[serde(default)]
    pub num_teams: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "donationID")]
    pub donation_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Absent when the donor chose to hide the amount.
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "donorID", default)]
    pub donor_id: Option<String>,
    #[serde(rename = "participantID", default)]
    pub participant_id: Option<u64>,
    #[serde(rename = "teamID", default)]
    pub team_id: Option<u64>,
    #[serde(rename = "eventID", default)]
    pub event_id: Option<u64>,
    #[serde(rename = "incentiveID", default)]
    pub incentive_id: Option<String>,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub is_reg_fee: bool,
    #[serde(rename = "avatarImageURL", default)]
    pub avatar_image_url: Option<String>,
    #[serde(rename = "createdDateUTC", default)]
    pub created_date_utc: Option<String>,
    #[serde(default)]
    pub links: Links,
}

impl Donation {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_api_timestamp(self.created_date_utc.as_deref()?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    #[serde(rename = "donorID", default)]
    pub donor_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub sum_donations: f64,
    #[serde(default)]
    pub num_donations: u64,
    #[serde(rename = "avatarImageURL", default)]
    pub avatar_image_url: Option<String>,
    #[serde(rename = "modifiedDateUTC", default)]
    pub modified_date_utc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub badge_code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "badgeImageURL", default)]
    pub badge_image_url: Option<String>,
    #[serde(rename = "unlockedDateUTC", default)]
    pub unlocked_date_utc: Option<String>,
}

/// Fundraising milestone; not every DonorDrive instance enables these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(rename = "milestoneID")]
    pub milestone_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fundraising_goal: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(rename = "startDateUTC", default)]
    pub start_date_utc: Option<String>,
    #[serde(rename = "endDateUTC", default)]
    pub end_date_utc: Option<String>,
    #[serde(default)]
    pub links: Links,
}

/// Reward offered for donating a given amount; instance-dependent like milestones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incentive {
    #[serde(rename = "incentiveID")]
    pub incentive_id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub quantity_claimed: Option<u64>,
    #[serde(rename = "incentiveImageURL", default)]
    pub incentive_image_url: Option<String>,
    #[serde(rename = "startDateUTC", default)]
    pub start_date_utc: Option<String>,
    #[serde(rename = "endDateUTC", default)]
    pub end_date_utc: Option<String>,
    #[serde(default)]
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    Donation,
    ParticipantBadge,
    TeamBadge,
    #[default]
    Unknown,
    Other(String),
}

impl ActivityKind {
    pub fn is_badge(&self) -> bool {
        matches!(self, ActivityKind::ParticipantBadge | ActivityKind::TeamBadge)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ActivityKind::Unknown)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::Donation => "donation",
            ActivityKind::ParticipantBadge => "participantBadge",
            ActivityKind::TeamBadge => "teamBadge",
            ActivityKind::Unknown => "",
            ActivityKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ActivityKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "donation" => ActivityKind::Donation,
            "participantBadge" => ActivityKind::ParticipantBadge,
            "teamBadge" => ActivityKind::TeamBadge,
            "" => ActivityKind::Unknown,
            _ => ActivityKind::Other(kind),
        }
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        kind.as_str().to_string()
    }
}

/// An entry from an activity feed: donations and badge unlocks, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type", default, skip_serializing_if = "ActivityKind::is_unknown")]
    pub kind: ActivityKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub is_incentive: bool,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    #[serde(rename = "createdDateUTC", default)]
    pub created_date_utc: Option<String>,
}

impl Activity {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_api_timestamp(self.created_date_utc.as_deref()?)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.title.as_deref().unwrap_or("Anonymous");
        let message = self.message.as_deref().unwrap_or("");
        match &self.kind {
            ActivityKind::Donation => {
                let amount = self.amount.unwrap_or(0.0);
                if self.is_incentive {
                    write!(
                        f,
                        "Incentive reached: {} with {} donation of ${:.2}.",
                        message, title, amount
                    )
                } else {
                    write!(f, "{} donation in the amount of ${:.2}.", title, amount)
                }
            }
            kind if kind.is_badge() => write!(f, "{}: '{}' badge earned!!", message, title),
            ActivityKind::Unknown => write!(f, "Activity: {}", title),
            kind => write!(f, "{} activity: {}", kind.as_str(), title),
        }
    }
}

/// DonorDrive emits `2023-11-04T14:23:05.190+0000`; plain RFC 3339 is accepted too.
pub fn parse_api_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_participant_from_fixture() {
        let participant: Participant = serde_json::from_value(json!({
            "participantID": 478153,
            "displayName": "Eric Mesa",
            "fundraisingGoal": 500.0,
            "sumDonations": 150.0,
            "sumPledges": 0.0,
            "numDonations": 3,
            "eventName": "Extra Life 2023",
            "eventID": 553,
            "teamID": 44013,
            "teamName": "Team Mesa",
            "isTeamCaptain": true,
            "streamIsLive": false,
            "avatarImageURL": "https://example.com/avatar.png",
            "createdDateUTC": "2023-01-02T03:04:05.678+0000",
            "links": {
                "donate": "https://example.com/donate",
                "page": "https://example.com/page",
                "stream": "https://twitch.tv/djotaku"
            }
        }))
        .unwrap();

        assert_eq!(participant.participant_id, 478153);
        assert_eq!(participant.display_name, "Eric Mesa");
        assert_eq!(participant.team_id, Some(44013));
        assert!(participant.is_team_captain);
        assert_eq!(
            participant.links.stream.as_deref(),
            Some("https://twitch.tv/djotaku")
        );
        assert_eq!(participant.average_donation(), 50.0);
    }

    #[test]
    fn test_average_donation_without_donations_is_zero() {
        let participant: Participant =
            serde_json::from_value(json!({"participantID": 1})).unwrap();
        assert_eq!(participant.num_donations, 0);
        assert_eq!(participant.average_donation(), 0.0);
    }

    #[test]
    fn test_participant_requires_identifier() {
        let result = serde_json::from_value::<Participant>(json!({"displayName": "No ID"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_team_minimal_fixture() {
        let team: Team =
            serde_json::from_value(json!({"teamID": 123, "sumDonations": 450.00})).unwrap();
        assert_eq!(team.team_id, 123);
        assert_eq!(team.sum_donations, 450.0);
        assert_eq!(team.name, "");
        assert_eq!(team.links, Links::default());
    }

    #[test]
    fn test_donation_with_hidden_amount() {
        let donation: Donation = serde_json::from_value(json!({
            "donationID": "ABC123",
            "displayName": "Anonymous",
            "participantID": 478153,
            "isRegFee": false
        }))
        .unwrap();
        assert_eq!(donation.donation_id, "ABC123");
        assert_eq!(donation.amount, None);
        assert_eq!(donation.participant_id, Some(478153));
        assert_eq!(donation.created_at(), None);
    }

    #[test]
    fn test_record_keeps_every_field() {
        let record: Record = serde_json::from_value(json!({
            "teamID": 123,
            "sumDonations": 450.0,
            "somethingNew": [1, 2]
        }))
        .unwrap();
        assert_eq!(record.data.len(), 3);
        assert_eq!(record.get("teamID").and_then(|v| v.as_u64()), Some(123));
        assert_eq!(
            record.get("sumDonations").and_then(|v| v.as_f64()),
            Some(450.0)
        );
        assert_eq!(
            serde_json::to_value(&record).unwrap()["somethingNew"],
            json!([1, 2])
        );
    }

    #[test]
    fn test_activity_kinds() {
        let kinds: Vec<ActivityKind> = ["donation", "participantBadge", "teamBadge", "registration"]
            .into_iter()
            .map(|kind| ActivityKind::from(kind.to_string()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ActivityKind::Donation,
                ActivityKind::ParticipantBadge,
                ActivityKind::TeamBadge,
                ActivityKind::Other("registration".to_string()),
            ]
        );
        assert_eq!(String::from(kinds[3].clone()), "registration");
    }

    #[test]
    fn test_activity_display() {
        let donation: Activity = serde_json::from_value(json!({
            "type": "donation",
            "title": "Jane",
            "amount": 25.0,
            "isIncentive": false
        }))
        .unwrap();
        assert_eq!(donation.to_string(), "Jane donation in the amount of $25.00.");

        let incentive: Activity = serde_json::from_value(json!({
            "type": "donation",
            "title": "Jane",
            "message": "Play a horror game",
            "amount": 50.5,
            "isIncentive": true
        }))
        .unwrap();
        assert_eq!(
            incentive.to_string(),
            "Incentive reached: Play a horror game with Jane donation of $50.50."
        );

        let badge: Activity = serde_json::from_value(json!({
            "type": "teamBadge",
            "title": "First Donation",
            "message": "Team Mesa"
        }))
        .unwrap();
        assert_eq!(badge.to_string(), "Team Mesa: 'First Donation' badge earned!!");

        let other: Activity = serde_json::from_value(json!({
            "type": "registration",
            "title": "Jane"
        }))
        .unwrap();
        assert_eq!(other.to_string(), "registration activity: Jane");
    }

    #[test]
    fn test_activity_without_type() {
        let activity: Activity = serde_json::from_value(json!({"title": "Jane"})).unwrap();
        assert_eq!(activity.kind, ActivityKind::Unknown);
        assert!(!activity.kind.is_badge());
        assert_eq!(activity.to_string(), "Activity: Jane");

        let value = serde_json::to_value(&activity).unwrap();
        assert!(value.get("type").is_none());
        let reparsed: Activity = serde_json::from_value(value).unwrap();
        assert_eq!(reparsed, activity);
    }

    #[test]
    fn test_parse_api_timestamp() {
        let expected = Utc.with_ymd_and_hms(2023, 11, 4, 14, 23, 5).unwrap()
            + chrono::Duration::milliseconds(190);
        assert_eq!(
            parse_api_timestamp("2023-11-04T14:23:05.190+0000"),
            Some(expected)
        );
        assert_eq!(
            parse_api_timestamp("2023-11-04T14:23:05.190Z"),
            Some(expected)
        );
        assert_eq!(parse_api_timestamp("last tuesday"), None);
    }
}
