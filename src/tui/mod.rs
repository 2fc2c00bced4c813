//! TUI module for the interactive incident dashboard
//!
//! - `dashboard` - incident list with filtering, sorting and expandable cards
//! - `report` - modal form for reporting a new incident

pub mod components;
pub mod dashboard;
pub mod expansion;
pub mod report;
pub mod theme;

pub use dashboard::model::{DashboardAction, DashboardState};
pub use dashboard::{IncidentDashboard, IncidentDashboardProps};
pub use expansion::ExpansionSet;
pub use report::{ReportForm, ReportFormProps};
pub use theme::{Theme, ThemeMode, ThemeProvider, ThemeSwitch};
