//! Mock data builders for creating test incidents without a seed file.

use incident_board::types::{Incident, IncidentId, NewIncident, ReportedAt, Severity};
use incident_board::{IncidentStore, SeverityFilter, SortOrder};
use incident_board::tui::{DashboardState, ThemeMode};

/// Builder for creating test incidents
pub struct IncidentBuilder {
    id: u64,
    title: String,
    description: String,
    severity: Severity,
    reported_at: String,
}

impl IncidentBuilder {
    /// Create a new incident builder with the given id
    pub fn new(id: u64) -> Self {
        Self {
            id,
            title: format!("Incident {}", id),
            description: "Something went wrong.".to_string(),
            severity: Severity::Low,
            reported_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the report time (RFC 3339)
    pub fn reported_at(mut self, reported_at: &str) -> Self {
        self.reported_at = reported_at.to_string();
        self
    }

    pub fn build(self) -> Incident {
        let reported_at =
            ReportedAt::parse(&self.reported_at).expect("test timestamp should be valid");
        NewIncident::new(self.title, self.description, self.severity, reported_at)
            .with_id(IncidentId::new(self.id))
    }
}

/// A store holding the given incidents
pub fn store_of(incidents: Vec<Incident>) -> IncidentStore {
    IncidentStore::from_seed(incidents).expect("test incidents should be valid")
}

/// Dashboard state over the built-in seed with default filter and order
pub fn seeded_dashboard() -> DashboardState {
    DashboardState::new(
        IncidentStore::seeded(),
        SeverityFilter::All,
        SortOrder::Desc,
        ThemeMode::Light,
    )
}

/// Dashboard state over an arbitrary store
pub fn dashboard_of(store: IncidentStore) -> DashboardState {
    DashboardState::new(store, SeverityFilter::All, SortOrder::Desc, ThemeMode::Light)
}
