//! Scrollable incident list component
//!
//! Renders cards from the scroll offset down until the available rows run
//! out, with "more above/below" indicators.

use iocraft::prelude::*;

use super::Clickable;
use super::incident_card::{IncidentCard, card_height};
use crate::tui::dashboard::model::IncidentRow;
use crate::tui::theme::{ThemeMode, theme};

/// Props for the IncidentList component
#[derive(Default, Props)]
pub struct IncidentListProps {
    /// Visible incidents in display order
    pub rows: Vec<IncidentRow>,
    /// Index of the first card drawn
    pub scroll_offset: usize,
    /// Terminal rows available to the list
    pub visible_height: usize,
    /// Terminal columns available to the list
    pub width: u32,
    pub mode: ThemeMode,
    /// Mouse wheel handlers
    pub on_scroll_up: Option<Handler<()>>,
    pub on_scroll_down: Option<Handler<()>>,
}

/// Number of cards, starting at `start`, that fit in `height` rows
pub fn cards_that_fit(rows: &[IncidentRow], start: usize, height: usize, width: u32) -> usize {
    let mut used = 0;
    let mut count = 0;
    for row in rows.iter().skip(start) {
        used += card_height(&row.incident, row.is_expanded, width);
        if used > height && count > 0 {
            break;
        }
        count += 1;
    }
    count
}

/// Number of cards drawn from `start` in a list of `height` rows
///
/// One row is kept for the "more below" line, and one more for "more above"
/// once the list is scrolled.
pub fn cards_shown(rows: &[IncidentRow], start: usize, height: usize, width: u32) -> usize {
    let indicator_lines = if start > 0 { 2 } else { 1 };
    cards_that_fit(rows, start, height.saturating_sub(indicator_lines), width)
}

/// Scrollable incident list
#[component]
pub fn IncidentList(props: &IncidentListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme(props.mode);
    let total = props.rows.len();
    let start = props.scroll_offset.min(total);

    let has_more_above = start > 0;
    let shown = cards_shown(&props.rows, start, props.visible_height, props.width);
    let end = start + shown;
    let has_more_below = end < total;

    let cards: Vec<_> = props.rows[start..end].to_vec();
    let width = props.width;
    let mode = props.mode;

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            overflow: Overflow::Hidden,
        ) {
            #(if has_more_above {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("↑ {} more above", start),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })

            Clickable(
                on_scroll_up: props.on_scroll_up.clone(),
                on_scroll_down: props.on_scroll_down.clone(),
            ) {
                View(width: 100pct, flex_direction: FlexDirection::Column) {
                    #(cards.into_iter().map(|row| element! {
                        IncidentCard(
                            incident: row.incident,
                            is_selected: row.is_selected,
                            is_expanded: row.is_expanded,
                            width: Some(width),
                            mode: mode,
                        )
                    }))
                }
            }

            #(if has_more_below {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("↓ {} more below", total - end),
                            color: theme.text_dimmed,
                        )
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

    fn rows(expanded: bool) -> Vec<IncidentRow> {
        seed::fixture()
            .into_iter()
            .map(|incident| IncidentRow {
                incident,
                is_expanded: expanded,
                is_selected: false,
            })
            .collect()
    }

    #[test]
    fn test_cards_that_fit_collapsed() {
        assert_eq!(cards_that_fit(&rows(false), 0, 9, 80), 3);
        assert_eq!(cards_that_fit(&rows(false), 0, 6, 80), 2);
        assert_eq!(cards_that_fit(&rows(false), 2, 9, 80), 1);
    }

    #[test]
    fn test_cards_that_fit_always_shows_one() {
        assert_eq!(cards_that_fit(&rows(true), 0, 1, 40), 1);
    }

    #[test]
    fn test_cards_shown_reserves_indicator_lines() {
        // Three collapsed cards need 9 rows plus the "more below" line
        assert_eq!(cards_shown(&rows(false), 0, 10, 80), 3);
        assert_eq!(cards_shown(&rows(false), 0, 9, 80), 2);
        // Scrolled lists also lose a row to "more above"
        assert_eq!(cards_shown(&rows(false), 1, 8, 80), 2);
        assert_eq!(cards_shown(&rows(false), 1, 7, 80), 1);
    }

    #[test]
    fn test_cards_that_fit_past_end() {
        assert_eq!(cards_that_fit(&rows(false), 5, 20, 80), 0);
    }
}
