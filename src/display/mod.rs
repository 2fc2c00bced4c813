//! Plain-terminal rendering of incidents for the `ls` command.

use owo_colors::{OwoColorize, Stream, Style as ColorStyle};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::store::SeverityCounts;
use crate::types::{Incident, Severity};

/// Orange used for Medium badges; owo-colors has no named orange
const ORANGE: (u8, u8, u8) = (251, 146, 60);

/// A row in the incident listing table
#[derive(Tabled)]
struct IncidentTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Reported")]
    reported: String,
    #[tabled(rename = "Title")]
    title: String,
}

impl From<&Incident> for IncidentTableRow {
    fn from(incident: &Incident) -> Self {
        Self {
            id: incident.id.to_string(),
            severity: incident.severity.to_string(),
            reported: incident.reported_at.date_string(),
            title: incident.title.clone(),
        }
    }
}

fn severity_style(severity: Severity) -> ColorStyle {
    match severity {
        Severity::High => ColorStyle::new().red().bold(),
        Severity::Medium => {
            let (r, g, b) = ORANGE;
            ColorStyle::new().truecolor(r, g, b)
        }
        Severity::Low => ColorStyle::new().green(),
    }
}

/// Paint `text` in the severity's color when stdout supports color
pub fn paint_severity(severity: Severity, text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(severity_style(severity)))
        .to_string()
}

/// Rounded table of incidents in the given order
pub fn incident_table(incidents: &[Incident]) -> String {
    let rows: Vec<IncidentTableRow> = incidents.iter().map(IncidentTableRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// One-line severity breakdown, e.g. "3 incidents: 1 High, 1 Medium, 1 Low"
pub fn format_counts(counts: &SeverityCounts, colored: bool) -> String {
    let parts: Vec<String> = Severity::ALL
        .iter()
        .rev()
        .map(|&severity| {
            let label = format!("{} {}", counts.get(severity), severity);
            if colored {
                paint_severity(severity, &label)
            } else {
                label
            }
        })
        .collect();
    let noun = if counts.total() == 1 {
        "incident"
    } else {
        "incidents"
    };
    format!("{} {}: {}", counts.total(), noun, parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::store::IncidentStore;

    #[test]
    fn test_incident_table() {
        let table = incident_table(&seed::fixture());
        insta::assert_snapshot!(table, @r"
        ╭────┬──────────┬────────────┬────────────────────────────────────╮
        │ ID │ Severity │ Reported   │ Title                              │
        ├────┼──────────┼────────────┼────────────────────────────────────┤
        │ #1 │ Medium   │ 2025-03-15 │ Biased Recommendation Algorithm    │
        │ #2 │ High     │ 2025-04-01 │ LLM Hallucination in Critical Info │
        │ #3 │ Low      │ 2025-03-20 │ Minor Data Leak via Chatbot        │
        ╰────┴──────────┴────────────┴────────────────────────────────────╯
        ");
    }

    #[test]
    fn test_format_counts_plain() {
        let counts = IncidentStore::seeded().severity_counts();
        assert_eq!(
            format_counts(&counts, false),
            "3 incidents: 1 High, 1 Medium, 1 Low"
        );
    }

    #[test]
    fn test_format_counts_singular() {
        let counts = SeverityCounts {
            low: 1,
            ..Default::default()
        };
        assert_eq!(
            format_counts(&counts, false),
            "1 incident: 0 High, 0 Medium, 1 Low"
        );
    }

    #[test]
    fn test_paint_severity_plain_without_terminal() {
        // test stdout is captured, so no escapes are emitted
        assert_eq!(paint_severity(Severity::High, "1 High"), "1 High");
        assert_eq!(paint_severity(Severity::Medium, "2 Medium"), "2 Medium");
    }
}
