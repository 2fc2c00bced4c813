//! Severity filtering and report-date ordering of incident lists.
//!
//! Projections are recomputed from the full list on every call; nothing is
//! cached between queries.

pub mod sort;

use std::fmt;
use std::str::FromStr;

use crate::error::IncidentError;
use crate::types::{Incident, Severity};

pub use sort::{SortOrder, sort_by_reported_asc, sort_by_reported_desc, sort_incidents};

/// Which severities a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// Filter options in the order the selector cycles through them
    pub const CYCLE: [SeverityFilter; 4] = [
        SeverityFilter::All,
        SeverityFilter::Only(Severity::Low),
        SeverityFilter::Only(Severity::Medium),
        SeverityFilter::Only(Severity::High),
    ];

    pub fn matches(self, incident: &Incident) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(severity) => incident.severity == severity,
        }
    }

    fn position(self) -> usize {
        Self::CYCLE.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next option (wrapping)
    pub fn next(self) -> Self {
        Self::CYCLE[(self.position() + 1) % Self::CYCLE.len()]
    }

    /// Previous option (wrapping)
    pub fn prev(self) -> Self {
        let len = Self::CYCLE.len();
        Self::CYCLE[(self.position() + len - 1) % len]
    }

    /// Caption for the selector, e.g. "All Severities" or "High"
    pub fn label(self) -> String {
        match self {
            SeverityFilter::All => "All Severities".to_string(),
            SeverityFilter::Only(severity) => severity.to_string(),
        }
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityFilter::All => write!(f, "All"),
            SeverityFilter::Only(severity) => write!(f, "{severity}"),
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = IncidentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SeverityFilter::All);
        }
        s.parse::<Severity>()
            .map(SeverityFilter::Only)
            .map_err(|_| IncidentError::InvalidSeverityFilter(s.to_string()))
    }
}

impl From<Severity> for SeverityFilter {
    fn from(value: Severity) -> Self {
        SeverityFilter::Only(value)
    }
}

/// Keep the incidents accepted by `filter`, preserving their order
pub fn filter_incidents(incidents: &[Incident], filter: SeverityFilter) -> Vec<Incident> {
    incidents
        .iter()
        .filter(|incident| filter.matches(incident))
        .cloned()
        .collect()
}

/// Filter then order a list of incidents
pub fn filter_and_sort(
    incidents: &[Incident],
    filter: SeverityFilter,
    order: SortOrder,
) -> Vec<Incident> {
    let mut result = filter_incidents(incidents, filter);
    sort_incidents(&mut result, order);
    result
}
