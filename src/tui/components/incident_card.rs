//! Incident card component
//!
//! One card per incident: severity badge, title, id and report date, with
//! the description shown underneath when the card is expanded.

use iocraft::prelude::*;

use crate::tui::theme::{ThemeMode, theme};
use crate::types::Incident;
use crate::utils::text::{truncate_string, wrap_text};

/// Props for the IncidentCard component
#[derive(Default, Props)]
pub struct IncidentCardProps {
    pub incident: Incident,
    pub is_selected: bool,
    pub is_expanded: bool,
    /// Available width for the card (in characters)
    pub width: Option<u32>,
    pub mode: ThemeMode,
}

/// Rows a collapsed card occupies: top border, summary line, bottom border
pub const COLLAPSED_CARD_ROWS: usize = 3;

/// Rows a card occupies: border, summary line, and the description when expanded
pub fn card_height(incident: &Incident, is_expanded: bool, width: u32) -> usize {
    if is_expanded {
        COLLAPSED_CARD_ROWS + description_lines(&incident.description, width).len() + 1
    } else {
        COLLAPSED_CARD_ROWS
    }
}

fn description_lines(description: &str, width: u32) -> Vec<String> {
    wrap_text(description, width.saturating_sub(4).max(8) as usize)
}

/// Incident card
///
/// Layout:
/// ```text
/// ╭──────────────────────────────────────────────────────╮
/// │> [High]  Unexpected Agent Autonomy    #2  2025-04-01 ▼│
/// │                                                      │
/// │  An autonomous agent attempted to bypass sandbox ... │
/// ╰──────────────────────────────────────────────────────╯
/// ```
#[component]
pub fn IncidentCard(props: &IncidentCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme(props.mode);
    let incident = &props.incident;
    let width = props.width.unwrap_or(80);

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let severity_color = theme.severity_color(incident.severity);

    let indicator = if props.is_selected { ">" } else { " " };
    let toggle = if props.is_expanded { "▲" } else { "▼" };

    // Badge, id, date and toggle take a fixed 30 columns; the title gets the rest
    let title_width = width.saturating_sub(34).max(8) as usize;
    let title = truncate_string(&incident.title, title_width);

    let description = if props.is_expanded {
        description_lines(&incident.description, width)
    } else {
        Vec::new()
    };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, height: 1) {
                View(width: 2, flex_shrink: 0.0) {
                    Text(content: indicator, color: text_color, weight: Weight::Bold)
                }
                View(width: 9, flex_shrink: 0.0) {
                    Text(
                        content: format!("[{}]", incident.severity),
                        color: severity_color,
                        weight: Weight::Bold,
                    )
                }
                View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                    Text(content: title, color: text_color, weight: Weight::Bold)
                }
                View(flex_shrink: 0.0, gap: 2, flex_direction: FlexDirection::Row) {
                    Text(
                        content: incident.id.to_string(),
                        color: if props.is_selected { theme.highlight_text } else { theme.id_color },
                    )
                    Text(content: incident.reported_at.date_string(), color: theme.text_dimmed)
                    Text(content: toggle, color: theme.text_dimmed)
                }
            }
            #(if props.is_expanded {
                Some(element! {
                    View(
                        flex_direction: FlexDirection::Column,
                        margin_top: 1,
                        padding_left: 2,
                    ) {
                        #(description.into_iter().map(|line| element! {
                            Text(content: line, color: text_color)
                        }))
                    }
                })
            } else {
                None
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_card_height_collapsed() {
        let incident = &seed::fixture()[0];
        assert_eq!(card_height(incident, false, 80), 3);
    }

    #[test]
    fn test_card_height_grows_when_expanded() {
        let incident = &seed::fixture()[0];
        let narrow = card_height(incident, true, 40);
        let wide = card_height(incident, true, 200);
        assert!(narrow > wide);
        assert!(wide > 3);
    }
}
