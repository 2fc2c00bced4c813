//! In-memory incident store.
//!
//! The store owns the canonical list of incidents in insertion order. The
//! only mutation is [`IncidentStore::add`]; display order is a projection
//! computed on demand by [`IncidentStore::filter_and_sort`].

use std::collections::HashSet;

use crate::error::{IncidentError, Result};
use crate::form::IncidentFormValidator;
use crate::query::{self, SeverityFilter, SortOrder};
use crate::seed;
use crate::types::{Incident, IncidentId, NewIncident, Severity};

/// Consumer of submitted drafts
///
/// The form controller emits into any sink; the store is the production one.
pub trait IncidentSink {
    /// Accept a draft and return the stored record
    fn accept(&mut self, draft: NewIncident) -> Result<Incident>;
}

/// Number of incidents at each severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl SeverityCounts {
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Canonical list of incidents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
}

impl IncidentStore {
    /// An empty store; the first added incident receives id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in fixture
    pub fn seeded() -> Self {
        Self {
            incidents: seed::fixture(),
        }
    }

    /// Build a store from externally supplied incidents
    ///
    /// Every record must pass the same checks as [`add`](Self::add) and ids
    /// must be unique. Titles and descriptions are stored trimmed.
    pub fn from_seed(incidents: Vec<Incident>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(incidents.len());
        let mut accepted = Vec::with_capacity(incidents.len());

        for mut incident in incidents {
            if !seen.insert(incident.id) {
                return Err(IncidentError::DuplicateId(incident.id));
            }
            let (title, description) = checked_text(&incident.title, &incident.description)?;
            incident.title = title;
            incident.description = description;
            accepted.push(incident);
        }

        Ok(Self {
            incidents: accepted,
        })
    }

    /// All incidents in insertion order
    pub fn list(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|incident| incident.id == id)
    }

    /// Identifier the next [`add`](Self::add) will assign
    ///
    /// One past the largest existing id, or [`IncidentId::FIRST`] when empty.
    pub fn next_id(&self) -> Result<IncidentId> {
        match self.incidents.iter().map(|incident| incident.id).max() {
            Some(max) => max.successor(),
            None => Ok(IncidentId::FIRST),
        }
    }

    /// Append a new incident and return the stored record
    pub fn add(&mut self, draft: NewIncident) -> Result<Incident> {
        let (title, description) = match checked_text(&draft.title, &draft.description) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("rejected incident draft: {e}");
                return Err(e);
            }
        };
        let id = self.next_id()?;

        let incident = NewIncident {
            title,
            description,
            ..draft
        }
        .with_id(id);

        tracing::debug!(id = id.get(), severity = %incident.severity, "added incident");
        self.incidents.push(incident.clone());
        Ok(incident)
    }

    /// Incidents matching `filter`, ordered by report time
    ///
    /// Recomputed from the full list on every call.
    pub fn filter_and_sort(&self, filter: SeverityFilter, order: SortOrder) -> Vec<Incident> {
        let result = query::filter_and_sort(&self.incidents, filter, order);
        tracing::trace!(%filter, %order, matched = result.len(), "filtered incidents");
        result
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for incident in &self.incidents {
            match incident.severity {
                Severity::Low => counts.low += 1,
                Severity::Medium => counts.medium += 1,
                Severity::High => counts.high += 1,
            }
        }
        counts
    }
}

impl IncidentSink for IncidentStore {
    fn accept(&mut self, draft: NewIncident) -> Result<Incident> {
        self.add(draft)
    }
}

/// Trimmed title and description, or the first blank field
fn checked_text(title: &str, description: &str) -> Result<(String, String)> {
    Ok(IncidentFormValidator::normalized(title, description)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::ReportedAt;

    fn draft(title: &str, severity: Severity, at: &str) -> NewIncident {
        NewIncident::new(title, "details", severity, ReportedAt::parse(at).unwrap())
    }

    #[test]
    fn test_seeded_store() {
        let store = IncidentStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.next_id().unwrap(), IncidentId::new(4));
    }

    #[test]
    fn test_add_assigns_next_id() {
        let mut store = IncidentStore::seeded();
        let added = store
            .add(draft("X", Severity::High, "2025-05-01T00:00:00Z"))
            .unwrap();
        assert_eq!(added.id, IncidentId::new(4));
        assert_eq!(store.list().last(), Some(&added));
        assert_eq!(store.get(IncidentId::new(4)), Some(&added));
    }

    #[test]
    fn test_add_to_empty_store_starts_at_one() {
        let mut store = IncidentStore::new();
        assert!(store.is_empty());
        let first = store
            .add(draft("first", Severity::Low, "2025-01-01T00:00:00Z"))
            .unwrap();
        let second = store
            .add(draft("second", Severity::Low, "2025-01-01T00:00:00Z"))
            .unwrap();
        assert_eq!(first.id, IncidentId::new(1));
        assert_eq!(second.id, IncidentId::new(2));
    }

    #[test]
    fn test_next_id_follows_max_not_len() {
        let seeded = vec![
            draft("a", Severity::Low, "2025-01-01T00:00:00Z").with_id(IncidentId::new(40)),
            draft("b", Severity::Low, "2025-01-01T00:00:00Z").with_id(IncidentId::new(7)),
        ];
        let mut store = IncidentStore::from_seed(seeded).unwrap();
        let added = store
            .add(draft("c", Severity::Low, "2025-01-01T00:00:00Z"))
            .unwrap();
        assert_eq!(added.id, IncidentId::new(41));
    }

    #[test]
    fn test_add_trims_text() {
        let mut store = IncidentStore::new();
        let added = store
            .add(NewIncident::new(
                "  padded  ",
                "\tbody\n",
                Severity::Medium,
                ReportedAt::parse("2025-01-01T00:00:00Z").unwrap(),
            ))
            .unwrap();
        assert_eq!(added.title, "padded");
        assert_eq!(added.description, "body");
    }

    #[test]
    fn test_add_rejects_blank_fields_without_mutation() {
        let mut store = IncidentStore::seeded();
        let before = store.clone();

        let err = store
            .add(draft("   ", Severity::High, "2025-01-01T00:00:00Z"))
            .unwrap_err();
        assert_eq!(err.as_validation(), Some(ValidationError::EmptyTitle));

        let mut blank_description = draft("t", Severity::High, "2025-01-01T00:00:00Z");
        blank_description.description = " \n ".to_string();
        let err = store.add(blank_description).unwrap_err();
        assert_eq!(err.as_validation(), Some(ValidationError::EmptyDescription));

        assert_eq!(store, before);
    }

    #[test]
    fn test_add_fails_when_ids_exhausted() {
        let seeded = vec![
            draft("a", Severity::Low, "2025-01-01T00:00:00Z").with_id(IncidentId::new(u64::MAX)),
        ];
        let mut store = IncidentStore::from_seed(seeded).unwrap();
        assert!(matches!(
            store.add(draft("b", Severity::Low, "2025-01-01T00:00:00Z")),
            Err(IncidentError::IdExhausted)
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_from_seed_rejects_duplicates() {
        let seeded = vec![
            draft("a", Severity::Low, "2025-01-01T00:00:00Z").with_id(IncidentId::new(2)),
            draft("b", Severity::Low, "2025-01-01T00:00:00Z").with_id(IncidentId::new(2)),
        ];
        assert!(matches!(
            IncidentStore::from_seed(seeded),
            Err(IncidentError::DuplicateId(id)) if id == IncidentId::new(2)
        ));
    }

    #[test]
    fn test_from_seed_rejects_blank_title() {
        let seeded =
            vec![draft("", Severity::Low, "2025-01-01T00:00:00Z").with_id(IncidentId::new(1))];
        assert!(matches!(
            IncidentStore::from_seed(seeded),
            Err(IncidentError::Validation(ValidationError::EmptyTitle))
        ));
    }

    #[test]
    fn test_filter_and_sort_reflects_add() {
        let mut store = IncidentStore::seeded();
        store
            .add(draft("later", Severity::High, "2025-06-01T00:00:00Z"))
            .unwrap();
        let high: Vec<u64> = store
            .filter_and_sort(SeverityFilter::Only(Severity::High), SortOrder::Desc)
            .iter()
            .map(|i| i.id.get())
            .collect();
        assert_eq!(high, vec![4, 2]);
    }

    #[test]
    fn test_filter_and_sort_earlier_report_goes_after() {
        let mut store = IncidentStore::seeded();
        store
            .add(draft("earlier", Severity::High, "2024-12-01T00:00:00Z"))
            .unwrap();
        let high: Vec<u64> = store
            .filter_and_sort(SeverityFilter::Only(Severity::High), SortOrder::Desc)
            .iter()
            .map(|i| i.id.get())
            .collect();
        assert_eq!(high, vec![2, 4]);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut store = IncidentStore::seeded();
        store
            .add(draft("old", Severity::Low, "2000-01-01T00:00:00Z"))
            .unwrap();
        let ids: Vec<u64> = store.list().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_severity_counts() {
        let mut store = IncidentStore::seeded();
        store
            .add(draft("x", Severity::High, "2025-01-01T00:00:00Z"))
            .unwrap();
        let counts = store.severity_counts();
        assert_eq!(counts.get(Severity::High), 2);
        assert_eq!(counts.get(Severity::Medium), 1);
        assert_eq!(counts.get(Severity::Low), 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_store_as_sink() {
        let mut store = IncidentStore::new();
        let sink: &mut dyn IncidentSink = &mut store;
        let added = sink
            .accept(draft("via sink", Severity::Medium, "2025-01-01T00:00:00Z"))
            .unwrap();
        assert_eq!(added.id, IncidentId::FIRST);
        assert_eq!(store.len(), 1);
    }
}
