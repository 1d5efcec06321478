use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{Error, parse_number};

/// Millisecond timestamp used as the request identifier.
///
/// Ids are unique within a collection and strictly increase in insertion
/// order; the store bumps a colliding id past the newest stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(millis: u64) -> Self {
        Self(millis)
    }

    pub fn from_datetime(ts: DateTime<Utc>) -> Self {
        Self(ts.timestamp_millis().max(0) as u64)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// Lifecycle state of a quote request.
///
/// The only legal transition is `Pending -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Completed => "completed",
        }
    }

    /// Whether moving from `self` to `next` is allowed.
    /// Staying in the same state is always allowed.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, _) | (RequestStatus::Completed, RequestStatus::Completed)
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "completed" => Ok(RequestStatus::Completed),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

/// A submitted project inquiry as persisted in the request collection.
///
/// Field names on the wire follow the stored blob: metadata is camelCase,
/// form fields keep their form names. Unrecognised form fields survive in
/// `extra` and are written back flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: RequestId,

    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,

    #[serde(rename = "clientUser", default)]
    pub client_user: String,

    #[serde(default)]
    pub status: RequestStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Exactly 10 digits when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Finite and positive when present.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_number"
    )]
    pub area_size: Option<f64>,

    /// Finite and positive when present.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_number"
    )]
    pub budget: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_details: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl QuoteRequest {
    /// Part of the email before the first `@`, or `""` when there is no email.
    pub fn email_local_part(&self) -> &str {
        self.email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .unwrap_or("")
    }

    /// Whether this request belongs to the given session identity.
    ///
    /// Matches on `clientUser`; records stored without one fall back to the
    /// email local part.
    pub fn belongs_to(&self, identity: &str) -> bool {
        if self.client_user.is_empty() {
            !identity.is_empty() && self.email_local_part() == identity
        } else {
            self.client_user == identity
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts a JSON number or a numeric string. Older collections stored the
/// raw form strings, which the browser read with `Number()`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            parse_number(trimmed)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("not a number: {:?}", s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> QuoteRequest {
        QuoteRequest {
            id: RequestId::new(1_733_824_800_000),
            submitted_at: Utc.with_ymd_and_hms(2024, 12, 10, 10, 0, 0).unwrap(),
            client_user: "alice".to_string(),
            status: RequestStatus::Pending,
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            phone: Some("5551234567".to_string()),
            area_size: Some(1200.0),
            budget: Some(50000.0),
            project_details: Some("Kitchen remodel".to_string()),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_status_transitions() {
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Completed));
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Pending));
        assert!(RequestStatus::Completed.can_transition_to(RequestStatus::Completed));
        assert!(!RequestStatus::Completed.can_transition_to(RequestStatus::Pending));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Completed".parse::<RequestStatus>(), Ok(RequestStatus::Completed));
        assert_eq!(" pending ".parse::<RequestStatus>(), Ok(RequestStatus::Pending));
        assert!("done".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1_733_824_800_000u64);
        assert_eq!(json["clientUser"], "alice");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["area_size"], 1200.0);
        assert!(json["submittedAt"].as_str().unwrap().starts_with("2024-12-10T10:00:00"));
    }

    #[test]
    fn test_loads_string_numbers_and_missing_status() {
        let json = r#"{
            "id": 1700000000000,
            "submittedAt": "2023-11-14T22:13:20.000Z",
            "clientUser": "bob",
            "name": "Bob",
            "area_size": "850",
            "budget": " 12000.5 ",
            "service": "roofing"
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.area_size, Some(850.0));
        assert_eq!(request.budget, Some(12000.5));
        assert_eq!(request.extra.get("service"), Some(&serde_json::json!("roofing")));
    }

    #[test]
    fn test_loads_prefixed_number_strings() {
        let json = r#"{
            "id": 1700000000000,
            "submittedAt": "2023-11-14T22:13:20.000Z",
            "area_size": "0x10",
            "budget": "0b11"
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.area_size, Some(16.0));
        assert_eq!(request.budget, Some(3.0));

        let bad = json.replace("0b11", "lots");
        assert!(serde_json::from_str::<QuoteRequest>(&bad).is_err());
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let mut request = sample();
        request
            .extra
            .insert("location".to_string(), serde_json::json!("Chennai"));

        let text = serde_json::to_string(&request).unwrap();
        let reloaded: QuoteRequest = serde_json::from_str(&text).unwrap();
        assert_eq!(reloaded, request);
    }

    #[test]
    fn test_belongs_to_falls_back_to_email_local_part() {
        let mut request = sample();
        assert!(request.belongs_to("alice"));
        assert!(!request.belongs_to("bob"));

        request.client_user = String::new();
        assert!(request.belongs_to("alice"));
        assert!(!request.belongs_to(""));
    }
}
