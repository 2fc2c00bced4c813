//! Sort functions for incidents.
//!
//! Ordering is always by report time. Both directions use a stable sort so
//! incidents reported at the same instant keep their insertion order.

use crate::error::IncidentError;
use crate::types::Incident;

/// Report-date ordering for incident listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Earliest first
    Asc,
    /// Latest first
    #[default]
    Desc,
}

impl SortOrder {
    /// All valid string representations of this enum.
    pub const ALL_STRINGS: &[&str] = &["asc", "desc", "oldest", "newest"];

    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Button caption describing the order
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Oldest First",
            SortOrder::Desc => "Newest First",
        }
    }

    /// Arrow glyph shown next to the label
    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = IncidentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "oldest" => Ok(SortOrder::Asc),
            "desc" | "newest" => Ok(SortOrder::Desc),
            _ => Err(IncidentError::invalid_sort_order(s.to_string())),
        }
    }
}

/// Sort incidents by report time, earliest first
pub fn sort_by_reported_asc(incidents: &mut [Incident]) {
    incidents.sort_by(|a, b| a.reported_at.cmp(&b.reported_at));
}

/// Sort incidents by report time, latest first
pub fn sort_by_reported_desc(incidents: &mut [Incident]) {
    incidents.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
}

/// Sort incidents in the specified order
pub fn sort_incidents(incidents: &mut [Incident], order: SortOrder) {
    match order {
        SortOrder::Asc => sort_by_reported_asc(incidents),
        SortOrder::Desc => sort_by_reported_desc(incidents),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::types::{IncidentId, NewIncident, ReportedAt, Severity};

    fn incident(id: u64, at: &str) -> Incident {
        NewIncident::new("t", "d", Severity::Low, ReportedAt::parse(at).unwrap())
            .with_id(IncidentId::new(id))
    }

    fn ids(incidents: &[Incident]) -> Vec<u64> {
        incidents.iter().map(|i| i.id.get()).collect()
    }

    #[test]
    fn test_sort_asc() {
        let mut incidents = vec![
            incident(1, "2025-03-15T10:00:00Z"),
            incident(2, "2025-04-01T14:30:00Z"),
            incident(3, "2025-03-20T09:15:00Z"),
        ];
        sort_incidents(&mut incidents, SortOrder::Asc);
        assert_eq!(ids(&incidents), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_desc() {
        let mut incidents = vec![
            incident(1, "2025-03-15T10:00:00Z"),
            incident(2, "2025-04-01T14:30:00Z"),
            incident(3, "2025-03-20T09:15:00Z"),
        ];
        sort_incidents(&mut incidents, SortOrder::Desc);
        assert_eq!(ids(&incidents), vec![2, 3, 1]);
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        let mut incidents = vec![
            incident(5, "2025-01-01T00:00:00Z"),
            incident(2, "2025-01-01T00:00:00Z"),
            incident(9, "2024-01-01T00:00:00Z"),
            incident(4, "2025-01-01T00:00:00Z"),
        ];

        let mut asc = incidents.clone();
        sort_incidents(&mut asc, SortOrder::Asc);
        assert_eq!(ids(&asc), vec![9, 5, 2, 4]);

        sort_incidents(&mut incidents, SortOrder::Desc);
        assert_eq!(ids(&incidents), vec![5, 2, 4, 9]);
    }

    #[test]
    fn test_compares_instants_not_strings() {
        // Lexically "2025-03-15T11:00:00+02:00" sorts after the UTC value,
        // but as an instant it is an hour earlier.
        let mut incidents = vec![
            incident(1, "2025-03-15T10:00:00Z"),
            incident(2, "2025-03-15T11:00:00+02:00"),
        ];
        sort_incidents(&mut incidents, SortOrder::Asc);
        assert_eq!(ids(&incidents), vec![2, 1]);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!(SortOrder::from_str("asc").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::from_str("DESC").unwrap(), SortOrder::Desc);
        assert_eq!(SortOrder::from_str("oldest").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::from_str("Newest").unwrap(), SortOrder::Desc);
        assert!(SortOrder::from_str("sideways").is_err());
        assert!(SortOrder::from_str("").is_err());
    }

    #[test]
    fn test_sort_order_toggle_and_labels() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggle(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.toggle().toggle(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.label(), "Oldest First");
        assert_eq!(SortOrder::Desc.label(), "Newest First");
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }
}
