//! Initial incident data.
//!
//! The store is seeded once at startup, either from the built-in fixture or
//! from a JSON file named in the configuration. Seed files are plain arrays
//! of incident records:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Biased Recommendation Algorithm",
//!     "description": "...",
//!     "severity": "Medium",
//!     "reported_at": "2025-03-15T10:00:00Z"
//!   }
//! ]
//! ```

use std::fs;
use std::path::Path;

use jiff::Timestamp;
use serde::Deserialize;

use crate::error::Result;
use crate::types::{Incident, IncidentId, NewIncident, ReportedAt, Severity};

/// Seed record as written on disk; severity and timestamp are parsed after
/// deserialization so that bad values produce domain errors.
#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: u64,
    title: String,
    description: String,
    severity: String,
    reported_at: String,
}

impl SeedRecord {
    fn into_incident(self) -> Result<Incident> {
        let severity: Severity = self.severity.parse()?;
        let reported_at = ReportedAt::parse(&self.reported_at)?;
        Ok(NewIncident::new(self.title, self.description, severity, reported_at)
            .with_id(IncidentId::new(self.id)))
    }
}

fn fixture_entry(
    id: u64,
    title: &str,
    description: &str,
    severity: Severity,
    epoch_seconds: i64,
) -> Incident {
    let reported_at = ReportedAt::new(Timestamp::constant(epoch_seconds, 0));
    NewIncident::new(title, description, severity, reported_at).with_id(IncidentId::new(id))
}

/// The three incidents every session starts with
pub fn fixture() -> Vec<Incident> {
    vec![
        fixture_entry(
            1,
            "Biased Recommendation Algorithm",
            "Algorithm consistently favored certain demographics in job recommendations, \
             leading to potential discrimination issues. Initial investigation suggests \
             training data imbalance.",
            Severity::Medium,
            1_742_032_800, // 2025-03-15T10:00:00Z
        ),
        fixture_entry(
            2,
            "LLM Hallucination in Critical Info",
            "LLM provided incorrect safety procedure information in industrial setting. \
             No immediate harm but highlighted need for better fact-checking mechanisms.",
            Severity::High,
            1_743_517_800, // 2025-04-01T14:30:00Z
        ),
        fixture_entry(
            3,
            "Minor Data Leak via Chatbot",
            "Chatbot inadvertently exposed non-sensitive user metadata in responses. \
             Impact limited to non-critical information.",
            Severity::Low,
            1_742_462_100, // 2025-03-20T09:15:00Z
        ),
    ]
}

/// Parse seed incidents from JSON text
pub fn parse_seed(content: &str) -> Result<Vec<Incident>> {
    let records: Vec<SeedRecord> = serde_json::from_str(content)?;
    records.into_iter().map(SeedRecord::into_incident).collect()
}

/// Read seed incidents from a JSON file
pub fn load_seed_file(path: &Path) -> Result<Vec<Incident>> {
    let content = fs::read_to_string(path)?;
    let incidents = parse_seed(&content)?;
    tracing::info!(
        path = %path.display(),
        count = incidents.len(),
        "loaded seed incidents"
    );
    Ok(incidents)
}
