//! Report form controller.
//!
//! Holds the draft for a new incident while the user types, validates it on
//! submit and hands the finished draft to an [`IncidentSink`]. A failed
//! submit leaves every field as it was; a successful one resets the form so
//! it can be reused for the next report.

pub mod validator;

use jiff::Timestamp;

use crate::error::Result;
use crate::store::IncidentSink;
use crate::types::{Incident, NewIncident, ReportedAt, Severity};

pub use validator::IncidentFormValidator;

/// Editable fields of the report form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Severity,
}

impl FormField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Severity,
            FormField::Severity => FormField::Title,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Severity,
            FormField::Description => FormField::Title,
            FormField::Severity => FormField::Description,
        }
    }

    /// Whether the field holds free text
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::Severity)
    }
}

enum_display!(
    FormField,
    {
        Title => "Title",
        Description => "Description",
        Severity => "Severity",
    }
);

/// Draft state for a new incident
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentForm {
    title: String,
    description: String,
    severity: Severity,
}

impl IncidentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Set one field without validating text
    ///
    /// A severity value must name one of the known severities; anything else
    /// is rejected and the draft stays as it was.
    pub fn update_field(&mut self, field: FormField, value: &str) -> Result<()> {
        match field {
            FormField::Title => self.title = value.to_string(),
            FormField::Description => self.description = value.to_string(),
            FormField::Severity => match value.parse::<Severity>() {
                Ok(severity) => self.severity = severity,
                Err(e) => {
                    tracing::warn!("rejected severity input: {e}");
                    return Err(e);
                }
            },
        }
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    /// Append a typed character to a text field; ignored for severity
    pub fn push_char(&mut self, field: FormField, c: char) {
        match field {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Severity => {}
        }
    }

    /// Remove the last character of a text field; ignored for severity
    pub fn pop_char(&mut self, field: FormField) {
        match field {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Severity => {}
        }
    }

    /// Step the severity forward (wrapping Low -> Medium -> High -> Low)
    pub fn cycle_severity(&mut self, forward: bool) {
        let all = Severity::ALL;
        let idx = all.iter().position(|s| *s == self.severity).unwrap_or(0);
        let next = if forward {
            (idx + 1) % all.len()
        } else {
            (idx + all.len() - 1) % all.len()
        };
        self.severity = all[next];
    }

    /// Check the draft without changing it
    pub fn validate(&self) -> Result<()> {
        IncidentFormValidator::validate(&self.title, &self.description)?;
        Ok(())
    }

    /// Build the draft that a submit at `now` would emit
    pub fn prepare(&self, now: Timestamp) -> Result<NewIncident> {
        let (title, description) =
            IncidentFormValidator::normalized(&self.title, &self.description)?;
        Ok(NewIncident::new(
            title,
            description,
            self.severity,
            ReportedAt::new(now),
        ))
    }

    /// Validate and take the draft, resetting the form on success
    pub fn submit(&mut self) -> Result<NewIncident> {
        self.submit_at(Timestamp::now())
    }

    /// [`submit`](Self::submit) with an explicit report time
    pub fn submit_at(&mut self, now: Timestamp) -> Result<NewIncident> {
        let draft = self.prepare(now)?;
        self.reset();
        Ok(draft)
    }

    /// Validate, emit the draft into `sink` and reset once it was accepted
    ///
    /// Nothing reaches the sink when validation fails, and the fields are
    /// kept if the sink refuses the draft.
    pub fn submit_into<S: IncidentSink + ?Sized>(&mut self, sink: &mut S) -> Result<Incident> {
        self.submit_into_at(sink, Timestamp::now())
    }

    /// [`submit_into`](Self::submit_into) with an explicit report time
    pub fn submit_into_at<S: IncidentSink + ?Sized>(
        &mut self,
        sink: &mut S,
        now: Timestamp,
    ) -> Result<Incident> {
        let draft = self.prepare(now)?;
        let incident = sink.accept(draft)?;
        self.reset();
        Ok(incident)
    }

    /// Restore the defaults: empty text and Low severity
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether every field still holds its default
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}
