use crate::config::Config;
use crate::display::{format_counts, incident_table};
use crate::error::Result;
use crate::query::{SeverityFilter, SortOrder};
use crate::store::IncidentStore;

use super::print_json;

/// Options for `incident-board ls`
#[derive(Debug, Clone, Copy, Default)]
pub struct LsOptions {
    /// Severity filter; falls back to the configured default
    pub severity: Option<SeverityFilter>,
    /// Sort order; falls back to the configured default
    pub order: Option<SortOrder>,
    pub json: bool,
}

/// Render the listing for `store` as plain text
pub fn render_listing(
    store: &IncidentStore,
    filter: SeverityFilter,
    order: SortOrder,
    colored: bool,
) -> String {
    let incidents = store.filter_and_sort(filter, order);
    if incidents.is_empty() {
        return format!("No incidents match severity {}.", filter);
    }
    format!(
        "{}\n{} ({}, {})",
        incident_table(&incidents),
        format_counts(&store.severity_counts(), colored),
        filter.label(),
        order.label()
    )
}

/// JSON array of the filtered, sorted incidents
pub fn listing_json(
    store: &IncidentStore,
    filter: SeverityFilter,
    order: SortOrder,
) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(store.filter_and_sort(filter, order))?)
}

/// List incidents, filtered and sorted
pub fn cmd_ls(config: &Config, options: LsOptions) -> Result<()> {
    let store = config.build_store()?;
    let filter = match options.severity {
        Some(filter) => filter,
        None => config.filter()?,
    };
    let order = match options.order {
        Some(order) => order,
        None => config.order()?,
    };

    if options.json {
        return print_json(&listing_json(&store, filter, order)?);
    }

    println!("{}", render_listing(&store, filter, order, true));
    Ok(())
}
