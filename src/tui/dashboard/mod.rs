//! Incident dashboard (`incident-board view`)
//!
//! Interactive list of incident cards with severity filtering, date
//! ordering, expandable descriptions, a light/dark toggle and the report
//! form modal. All interaction goes through [`model::reduce_dashboard_state`];
//! this component only translates events and renders the view model.

pub mod model;

use iocraft::prelude::*;

use crate::query::{SeverityFilter, SortOrder};
use crate::tui::components::{
    EmptyState, Footer, Header, IncidentList, Select, Selectable, options_for, render_toast,
};
use crate::tui::report::ReportForm;
use crate::tui::theme::theme;
use model::{
    DashboardAction, DashboardState, ListViewport, compute_view_model, key_to_action,
    reduce_dashboard_state,
};

/// Rows taken by everything except the list: header, toolbar and footer
const CHROME_ROWS: u16 = 4;

/// Rows taken by the toast bar when one is showing
const TOAST_ROWS: u16 = 2;

/// Props for the IncidentDashboard component
#[derive(Default, Props)]
pub struct IncidentDashboardProps {
    /// State the session starts from (store, filter, order, theme)
    pub initial: DashboardState,
}

/// Apply one action to the shared state
fn dispatch(state: &mut State<DashboardState>, action: DashboardAction, viewport: ListViewport) {
    let next = reduce_dashboard_state(state.read().clone(), action, viewport);
    state.set(next);
}

/// Handler for a mouse-driven action
fn action_handler(
    hooks: &mut Hooks<'_, '_>,
    state: State<DashboardState>,
    action: DashboardAction,
    viewport: ListViewport,
) -> Handler<()> {
    hooks.use_async_handler(move |()| {
        let mut state = state;
        let action = action.clone();
        Box::pin(async move {
            dispatch(&mut state, action, viewport);
        })
    })
}

/// Main dashboard component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header (title, severity totals)          |
/// | Severity: ◀ All ▶   Sort: ◀ ↓ Newest ▶   |
/// +------------------------------------------+
/// | IncidentCard                             |
/// | IncidentCard (expanded)                  |
/// |   description...                         |
/// +------------------------------------------+
/// | Toast                                    |
/// | Footer                                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn IncidentDashboard<'a>(
    props: &IncidentDashboardProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut state: State<DashboardState> = hooks.use_state(|| props.initial.clone());
    let mut should_exit = hooks.use_state(|| false);

    let vm = compute_view_model(&state.read());
    let mode = vm.theme_mode;
    let theme = theme(mode);

    let toast_rows = if vm.toast.is_some() { TOAST_ROWS } else { 0 };
    let viewport = ListViewport::new(
        height.saturating_sub(CHROME_ROWS + toast_rows) as usize,
        width.saturating_sub(2) as u32,
    );
    let report_field = vm.report.as_ref().map(|report| report.focused);

    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => {
            let Some(action) = key_to_action(code, modifiers, report_field) else {
                return;
            };
            if action == DashboardAction::Quit {
                should_exit.set(true);
                return;
            }
            if state.read().toast.is_some() {
                dispatch(&mut state, DashboardAction::DismissToast, viewport);
            }
            dispatch(&mut state, action, viewport);
        }
        _ => {}
    });

    if should_exit.get() {
        system.exit();
    }

    let prev_filter = action_handler(&mut hooks, state, DashboardAction::PrevFilter, viewport);
    let next_filter = action_handler(&mut hooks, state, DashboardAction::NextFilter, viewport);
    let sort_prev = action_handler(&mut hooks, state, DashboardAction::ToggleSort, viewport);
    let sort_next = action_handler(&mut hooks, state, DashboardAction::ToggleSort, viewport);
    let scroll_up = action_handler(&mut hooks, state, DashboardAction::MoveUp, viewport);
    let scroll_down = action_handler(&mut hooks, state, DashboardAction::MoveDown, viewport);

    let toolbar = vm.toolbar.clone();
    let filter_color = match toolbar.filter {
        SeverityFilter::All => theme.text,
        SeverityFilter::Only(severity) => theme.severity_color(severity),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(counts: vm.counts, mode: mode)

            View(
                width: 100pct,
                height: 1,
                flex_shrink: 0.0,
                flex_direction: FlexDirection::Row,
                padding_left: 1,
                padding_right: 1,
                column_gap: 4,
                margin_bottom: 1,
            ) {
                Select(
                    label: Some("Severity"),
                    options: options_for::<SeverityFilter>(),
                    selected_index: toolbar.filter.index(),
                    has_focus: true,
                    value_color: Some(filter_color),
                    mode: mode,
                    on_prev: Some(prev_filter),
                    on_next: Some(next_filter),
                )
                Select(
                    label: Some("Sort"),
                    options: options_for::<SortOrder>(),
                    selected_index: toolbar.order.index(),
                    has_focus: true,
                    mode: mode,
                    on_prev: Some(sort_prev),
                    on_next: Some(sort_next),
                )
                View(flex_grow: 1.0)
                Text(
                    content: format!("{} of {} incidents", toolbar.visible_count, toolbar.total_count),
                    color: theme.text_dimmed,
                )
            }

            #(Some(match vm.empty_state {
                Some(kind) => element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(kind: kind, filter: toolbar.filter, mode: mode)
                    }
                }
                .into_any(),
                None => element! {
                    View(flex_grow: 1.0, width: 100pct, padding_left: 1, padding_right: 1) {
                        IncidentList(
                            rows: vm.list.rows.clone(),
                            scroll_offset: vm.list.scroll_offset,
                            visible_height: viewport.rows,
                            width: viewport.width,
                            mode: mode,
                            on_scroll_up: Some(scroll_up),
                            on_scroll_down: Some(scroll_down),
                        )
                    }
                }
                .into_any(),
            }))

            #(render_toast(&vm.toast, mode))

            Footer(shortcuts: vm.shortcuts.clone(), mode: mode)

            #(vm.report.clone().map(|report| element! {
                ReportForm(report: report, mode: mode)
            }))
        }
    }
}
