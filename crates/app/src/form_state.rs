use shared_types::{DishField, DraftDish, SubmissionPayload, SubmitError};
use std::collections::HashMap;

/// Everything the dish form page keeps between renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishFormState {
    pub draft: DraftDish,
    /// Messages from the last rejected submit, keyed by payload key.
    pub field_errors: HashMap<String, String>,
    pub submitting: bool,
}

impl DishFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a change event. The field's message from the last submit no
    /// longer describes its value, so it is dropped.
    pub fn edit(&mut self, field: DishField, raw: &str) {
        self.draft.apply_input(field, raw);
        self.field_errors.remove(field.payload_key());
    }

    /// Message to render under a field, empty when there is none.
    ///
    /// The live preparation-time check wins over a stored submit error.
    pub fn error_for(&self, field: DishField) -> String {
        if field == DishField::PreparationTime {
            if let Some(live) = &self.draft.preparation_time_error {
                return live.clone();
            }
        }
        self.field_errors
            .get(field.payload_key())
            .cloned()
            .unwrap_or_default()
    }

    /// Start a submit: returns the payload to send, or `None` when a request
    /// is already in flight or the draft fails validation.
    ///
    /// On success `submitting` is set before returning, so a second press
    /// handled before the request starts is ignored.
    pub fn begin_submit(&mut self) -> Option<SubmissionPayload> {
        if self.submitting {
            return None;
        }
        match self.draft.to_payload() {
            Ok(payload) => {
                self.field_errors.clear();
                self.submitting = true;
                Some(payload)
            }
            Err(e) => {
                api::log_failure(&e);
                self.field_errors = e.field_errors;
                None
            }
        }
    }

    /// Record the outcome of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        self.submitting = false;
        match result {
            Ok(()) => self.draft.reset(),
            // Failures stay in the log; the draft is kept for another try.
            Err(e) => api::log_failure(&e),
        }
    }
}
