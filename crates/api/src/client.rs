use shared_types::{AppConfig, SubmissionPayload, SubmitError, SubmitErrorKind};

/// Sends dishes to the configured endpoint.
///
/// One POST per call: no retry, no timeout, no cancellation.
#[derive(Debug, Clone)]
pub struct DishClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DishClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.submission.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the payload as JSON.
    ///
    /// A non-success status becomes a `Rejected` error carrying the body's
    /// `message` when present, otherwise the status reason phrase.
    #[tracing::instrument(skip(self, payload), fields(endpoint = %self.endpoint, dish_type = %payload.dish_type()))]
    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Dish submitted successfully");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::decode(e.to_string()))?;
        Err(SubmitError::from_rejection(
            status.as_u16(),
            status.canonical_reason(),
            &body,
        ))
    }
}

/// Write a failed submission to the diagnostic log.
pub fn log_failure(err: &SubmitError) {
    match err.kind {
        SubmitErrorKind::Rejected => {
            tracing::error!(status = ?err.status, message = %err.message, "Dish submission rejected");
        }
        SubmitErrorKind::Validation => {
            tracing::warn!(fields = ?err.field_errors, "Dish failed validation");
        }
        SubmitErrorKind::Transport | SubmitErrorKind::Decode => {
            tracing::error!(error = %err, "Dish submission failed");
        }
    }
}
