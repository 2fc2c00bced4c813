//! Dashboard model types for testable state management
//!
//! This module separates state (DashboardState) from view
//! (DashboardViewModel), enabling unit testing of every interaction without
//! the iocraft framework. The component in `mod.rs` only maps terminal
//! events to [`DashboardAction`]s and renders the computed view model.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::form::{FormField, IncidentForm};
use crate::query::{SeverityFilter, SortOrder};
use crate::store::{IncidentStore, SeverityCounts};
use crate::tui::components::empty_state::EmptyStateKind;
use crate::tui::components::footer::Shortcut;
use crate::tui::components::toast::Toast;
use crate::tui::components::{
    COLLAPSED_CARD_ROWS, cards_shown, dashboard_shortcuts, empty_shortcuts, report_shortcuts,
};
use crate::tui::expansion::ExpansionSet;
use crate::tui::theme::{ThemeMode, ThemeProvider, ThemeSwitch};
use crate::types::{Incident, IncidentId};

/// Report modal state while the user is filling in a new incident
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportState {
    /// Draft being edited
    pub form: IncidentForm,
    /// Field receiving keyboard input
    pub focused: FormField,
    /// Message from the last rejected submit
    pub error: Option<String>,
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// All incidents for this session
    pub store: IncidentStore,
    /// Active severity filter
    pub filter: SeverityFilter,
    /// Active report-date ordering
    pub order: SortOrder,
    /// Cards showing their description
    pub expanded: ExpansionSet,
    /// Index of the selected card in the visible list
    pub selected_index: usize,
    /// Index of the first card drawn
    pub scroll_offset: usize,
    /// Light/dark preference
    pub theme: ThemeSwitch,
    /// Open report modal, if any
    pub report: Option<ReportState>,
    /// Optional toast notification to display
    pub toast: Option<Toast>,
}

impl DashboardState {
    pub fn new(
        store: IncidentStore,
        filter: SeverityFilter,
        order: SortOrder,
        mode: ThemeMode,
    ) -> Self {
        Self {
            store,
            filter,
            order,
            theme: ThemeSwitch::new(mode),
            ..Default::default()
        }
    }

    /// Incidents currently shown, in display order
    pub fn visible(&self) -> Vec<Incident> {
        self.store.filter_and_sort(self.filter, self.order)
    }

    /// The selected incident, if the visible list is not empty
    pub fn selected(&self) -> Option<Incident> {
        self.visible().into_iter().nth(self.selected_index)
    }

    pub fn is_reporting(&self) -> bool {
        self.report.is_some()
    }

    /// Visible incidents as list rows, flagged expanded/selected
    pub fn rows(&self) -> Vec<IncidentRow> {
        self.visible()
            .into_iter()
            .enumerate()
            .map(|(i, incident)| IncidentRow {
                is_expanded: self.expanded.is_expanded(incident.id),
                is_selected: i == self.selected_index,
                incident,
            })
            .collect()
    }
}

/// Terminal area given to the incident list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListViewport {
    /// Rows available to the list, indicator lines included
    pub rows: usize,
    /// Columns available to each card
    pub width: u32,
}

impl ListViewport {
    pub fn new(rows: usize, width: u32) -> Self {
        Self { rows, width }
    }

    /// Cards to jump on PageUp/PageDown: half a screen of collapsed cards
    pub fn page_size(self) -> usize {
        (self.rows / COLLAPSED_CARD_ROWS / 2).max(1)
    }
}

/// All possible actions on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    // Navigation
    /// Move selection down one card
    MoveDown,
    /// Move selection up one card
    MoveUp,
    /// Jump to the first card
    GoToTop,
    /// Jump to the last card
    GoToBottom,
    /// Page down (half page)
    PageDown,
    /// Page up (half page)
    PageUp,

    // List controls
    /// Advance the severity filter (All -> Low -> Medium -> High -> All)
    NextFilter,
    /// Step the severity filter back
    PrevFilter,
    /// Switch between oldest-first and newest-first
    ToggleSort,
    /// Show or hide the selected incident's description
    ToggleExpanded,
    /// Hide every description
    CollapseAll,
    /// Switch between light and dark presentation
    ToggleTheme,

    // Report modal
    /// Open the new-incident form
    OpenReport,
    /// Close the form, discarding the draft
    CloseReport,
    /// Type a character into the focused text field
    FormInput(char),
    /// Delete the last character of the focused text field
    FormBackspace,
    /// Focus the next form field
    FormNextField,
    /// Focus the previous form field
    FormPrevField,
    /// Cycle the draft severity (true = forward)
    FormCycleSeverity(bool),
    /// Validate and add the draft to the store
    SubmitReport,

    // App
    /// Dismiss the current toast
    DismissToast,
    /// Quit the application
    Quit,
}

/// Computed view model for rendering the entire dashboard
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    /// List view model
    pub list: ListViewModel,
    /// Toolbar view model
    pub toolbar: ToolbarViewModel,
    /// Report modal view model, when open
    pub report: Option<ReportState>,
    /// Toast notification to display
    pub toast: Option<Toast>,
    /// Empty state to display (if any)
    pub empty_state: Option<EmptyStateKind>,
    /// Keyboard shortcuts to display in footer
    pub shortcuts: Vec<Shortcut>,
    /// Per-severity totals across the whole store
    pub counts: SeverityCounts,
    /// Presentation mode
    pub theme_mode: ThemeMode,
}

/// A card in the incident list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentRow {
    pub incident: Incident,
    pub is_expanded: bool,
    pub is_selected: bool,
}

/// View model for the incident list
#[derive(Debug, Clone)]
pub struct ListViewModel {
    /// Visible incidents in display order
    pub rows: Vec<IncidentRow>,
    /// Index of the selected card
    pub selected_index: usize,
    /// Scroll offset for virtual scrolling
    pub scroll_offset: usize,
}

/// View model for the filter/sort toolbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarViewModel {
    pub filter: SeverityFilter,
    pub order: SortOrder,
    pub visible_count: usize,
    pub total_count: usize,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
pub fn compute_view_model(state: &DashboardState) -> DashboardViewModel {
    let visible = state.visible();
    let total = state.store.len();

    let empty_state = if total == 0 {
        Some(EmptyStateKind::NoIncidents)
    } else if visible.is_empty() {
        Some(EmptyStateKind::NoMatches)
    } else {
        None
    };

    let shortcuts = if state.is_reporting() {
        report_shortcuts()
    } else if empty_state.is_some() {
        empty_shortcuts()
    } else {
        dashboard_shortcuts()
    };

    DashboardViewModel {
        list: ListViewModel {
            rows: state.rows(),
            selected_index: state.selected_index,
            scroll_offset: state.scroll_offset,
        },
        toolbar: ToolbarViewModel {
            filter: state.filter,
            order: state.order,
            visible_count: visible.len(),
            total_count: total,
        },
        report: state.report.clone(),
        toast: state.toast.clone(),
        empty_state,
        shortcuts,
        counts: state.store.severity_counts(),
        theme_mode: state.theme.current_mode(),
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// `viewport` is the area the list is drawn in; it sizes pages and keeps
/// the selected card scrolled into view at its real (expanded) height.
pub fn reduce_dashboard_state(
    mut state: DashboardState,
    action: DashboardAction,
    viewport: ListViewport,
) -> DashboardState {
    let list_count = state.visible().len();

    match action {
        // Navigation
        DashboardAction::MoveDown => {
            if list_count > 0 {
                state.selected_index = (state.selected_index + 1).min(list_count - 1);
            }
        }
        DashboardAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        DashboardAction::GoToTop => {
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        DashboardAction::GoToBottom => {
            state.selected_index = list_count.saturating_sub(1);
        }
        DashboardAction::PageDown => {
            if list_count > 0 {
                state.selected_index =
                    (state.selected_index + viewport.page_size()).min(list_count - 1);
            }
        }
        DashboardAction::PageUp => {
            state.selected_index = state.selected_index.saturating_sub(viewport.page_size());
        }

        // List controls
        DashboardAction::NextFilter => {
            state.filter = state.filter.next();
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        DashboardAction::PrevFilter => {
            state.filter = state.filter.prev();
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        DashboardAction::ToggleSort => {
            // Keep the same incident selected across the reorder
            let selected_id = state.selected().map(|incident| incident.id);
            state.order = state.order.toggle();
            if let Some(id) = selected_id {
                state.selected_index = position_of(&state, id).unwrap_or(0);
            }
        }
        DashboardAction::ToggleExpanded => {
            if let Some(incident) = state.selected() {
                state.expanded.toggle(incident.id);
            }
        }
        DashboardAction::CollapseAll => {
            state.expanded.collapse_all();
        }
        DashboardAction::ToggleTheme => {
            state.theme.toggle();
            state.toast = Some(Toast::info(format!(
                "Switched to {} mode",
                state.theme.current_mode()
            )));
        }

        // Report modal
        DashboardAction::OpenReport => {
            if state.report.is_none() {
                state.report = Some(ReportState::default());
            }
        }
        DashboardAction::CloseReport => {
            state.report = None;
        }
        DashboardAction::FormInput(c) => {
            if let Some(report) = state.report.as_mut() {
                report.form.push_char(report.focused, c);
            }
        }
        DashboardAction::FormBackspace => {
            if let Some(report) = state.report.as_mut() {
                report.form.pop_char(report.focused);
            }
        }
        DashboardAction::FormNextField => {
            if let Some(report) = state.report.as_mut() {
                report.focused = report.focused.next();
            }
        }
        DashboardAction::FormPrevField => {
            if let Some(report) = state.report.as_mut() {
                report.focused = report.focused.prev();
            }
        }
        DashboardAction::FormCycleSeverity(forward) => {
            if let Some(report) = state.report.as_mut() {
                report.form.cycle_severity(forward);
            }
        }
        DashboardAction::SubmitReport => {
            state = submit_report(state);
        }

        DashboardAction::DismissToast => {
            state.toast = None;
        }
        DashboardAction::Quit => {
            // Handled by the component, which owns the terminal
        }
    }

    clamp_selection(&mut state);
    state.scroll_offset = scroll_to_selection(&state, viewport);
    state
}

/// Submit the open report into the store
///
/// On success the modal closes, the new incident is selected when the
/// current filter shows it, and a toast confirms the id. On failure the
/// modal stays open with the draft untouched and the error inline.
fn submit_report(mut state: DashboardState) -> DashboardState {
    let Some(mut report) = state.report.take() else {
        return state;
    };

    match report.form.submit_into(&mut state.store) {
        Ok(incident) => {
            tracing::info!(id = incident.id.get(), "incident reported");
            if let Some(index) = position_of(&state, incident.id) {
                state.selected_index = index;
            }
            state.toast = Some(Toast::success(format!(
                "Reported incident {}: {}",
                incident.id, incident.title
            )));
        }
        Err(e) => {
            report.error = Some(e.to_string());
            state.report = Some(report);
        }
    }
    state
}

/// Index of `id` in the visible list
fn position_of(state: &DashboardState, id: IncidentId) -> Option<usize> {
    state
        .visible()
        .iter()
        .position(|incident| incident.id == id)
}

/// Keep the selection inside the visible list
fn clamp_selection(state: &mut DashboardState) {
    let count = state.visible().len();
    if count == 0 {
        state.selected_index = 0;
        state.scroll_offset = 0;
    } else if state.selected_index >= count {
        state.selected_index = count - 1;
    }
}

/// Scroll offset that keeps the selected card drawn
///
/// Scrolls up straight to the selection, or down one card at a time until
/// the cards drawn from the offset include it.
pub fn scroll_to_selection(state: &DashboardState, viewport: ListViewport) -> usize {
    let rows = state.rows();
    if rows.is_empty() {
        return 0;
    }
    let selected = state.selected_index.min(rows.len() - 1);
    let mut offset = state.scroll_offset.min(selected);
    while offset < selected
        && selected >= offset + cards_shown(&rows, offset, viewport.rows, viewport.width)
    {
        offset += 1;
    }
    offset
}

/// Convert a key event to a DashboardAction (pure function)
///
/// `report_field` is the focused form field while the report modal is open,
/// `None` otherwise. Returns `None` if the key doesn't map to any action.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    report_field: Option<FormField>,
) -> Option<DashboardAction> {
    if let Some(field) = report_field {
        return report_key_to_action(code, modifiers, field);
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(DashboardAction::Quit),
            _ => None,
        };
    }

    match code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(DashboardAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(DashboardAction::GoToBottom),
        KeyCode::PageDown => Some(DashboardAction::PageDown),
        KeyCode::PageUp => Some(DashboardAction::PageUp),

        // List controls
        KeyCode::Char('f') | KeyCode::Right => Some(DashboardAction::NextFilter),
        KeyCode::Char('F') | KeyCode::Left => Some(DashboardAction::PrevFilter),
        KeyCode::Char('s') => Some(DashboardAction::ToggleSort),
        KeyCode::Enter | KeyCode::Char(' ') => Some(DashboardAction::ToggleExpanded),
        KeyCode::Char('c') => Some(DashboardAction::CollapseAll),
        KeyCode::Char('t') => Some(DashboardAction::ToggleTheme),

        // Actions
        KeyCode::Char('n') => Some(DashboardAction::OpenReport),
        KeyCode::Char('q') | KeyCode::Esc => Some(DashboardAction::Quit),

        _ => None,
    }
}

/// Convert a key event in the report modal to a DashboardAction
fn report_key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    field: FormField,
) -> Option<DashboardAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => Some(DashboardAction::SubmitReport),
            KeyCode::Char('q') => Some(DashboardAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => return Some(DashboardAction::CloseReport),
        KeyCode::BackTab => return Some(DashboardAction::FormPrevField),
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
            return Some(DashboardAction::FormPrevField);
        }
        KeyCode::Tab => return Some(DashboardAction::FormNextField),
        _ => {}
    }

    match field {
        FormField::Severity => match code {
            KeyCode::Left | KeyCode::Char('h') => Some(DashboardAction::FormCycleSeverity(false)),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                Some(DashboardAction::FormCycleSeverity(true))
            }
            KeyCode::Enter => Some(DashboardAction::SubmitReport),
            _ => None,
        },
        FormField::Title => match code {
            KeyCode::Char(c) => Some(DashboardAction::FormInput(c)),
            KeyCode::Backspace => Some(DashboardAction::FormBackspace),
            KeyCode::Enter => Some(DashboardAction::FormNextField),
            _ => None,
        },
        FormField::Description => match code {
            KeyCode::Char(c) => Some(DashboardAction::FormInput(c)),
            KeyCode::Backspace => Some(DashboardAction::FormBackspace),
            KeyCode::Enter => Some(DashboardAction::FormInput('\n')),
            _ => None,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
