#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod logging;
pub mod query;
pub mod seed;
pub mod store;
pub mod tui;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{IncidentError, Result, ValidationError};
pub use form::{FormField, IncidentForm, IncidentFormValidator};
pub use query::{SeverityFilter, SortOrder, filter_and_sort};
pub use store::{IncidentSink, IncidentStore, SeverityCounts};
pub use types::{Incident, IncidentId, NewIncident, ReportedAt, Severity};
