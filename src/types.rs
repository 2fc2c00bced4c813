use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{IncidentError, Result};

/// Closed classification of incident impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// All severities, least to most severe
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];
}

enum_display_fromstr!(
    Severity,
    IncidentError::invalid_severity,
    {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
);

/// Store-assigned incident identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct IncidentId(u64);

impl IncidentId {
    /// Identifier handed out when the store holds no incidents
    pub const FIRST: IncidentId = IncidentId(1);

    pub fn new(value: u64) -> Self {
        IncidentId(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one, or `IdExhausted` at `u64::MAX`
    pub fn successor(self) -> Result<Self> {
        self.0
            .checked_add(1)
            .map(IncidentId)
            .ok_or(IncidentError::IdExhausted)
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for IncidentId {
    fn from(value: u64) -> Self {
        IncidentId(value)
    }
}

/// Instant an incident was reported
///
/// Always holds a parsed timestamp, so ordering never has to deal with
/// malformed input. Serialized as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReportedAt(Timestamp);

impl ReportedAt {
    pub fn new(timestamp: Timestamp) -> Self {
        ReportedAt(timestamp)
    }

    pub fn now() -> Self {
        ReportedAt(Timestamp::now())
    }

    /// Parse an ISO-8601 / RFC 3339 instant such as `2025-03-15T10:00:00Z`
    pub fn parse(value: &str) -> Result<Self> {
        value
            .trim()
            .parse::<Timestamp>()
            .map(ReportedAt)
            .map_err(|e| IncidentError::InvalidTimestamp(value.to_string(), e.to_string()))
    }

    pub fn timestamp(&self) -> Timestamp {
        self.0
    }

    /// Calendar date (UTC) for compact display, e.g. `2025-03-15`
    pub fn date_string(&self) -> String {
        self.0.strftime("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for ReportedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportedAt {
    type Err = IncidentError;

    fn from_str(s: &str) -> Result<Self> {
        ReportedAt::parse(s)
    }
}

impl From<Timestamp> for ReportedAt {
    fn from(value: Timestamp) -> Self {
        ReportedAt(value)
    }
}

impl Serialize for ReportedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ReportedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ReportedAt::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A single reported AI-safety event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: ReportedAt,
}

/// Incident data awaiting an identifier from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: ReportedAt,
}

impl NewIncident {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        reported_at: ReportedAt,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            reported_at,
        }
    }

    /// Attach an identifier, producing the stored record
    pub fn with_id(self, id: IncidentId) -> Incident {
        Incident {
            id,
            title: self.title,
            description: self.description,
            severity: self.severity,
            reported_at: self.reported_at,
        }
    }
}
