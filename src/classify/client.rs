use reqwest::blocking::multipart::{Form, Part};

use super::model::{ClassificationResult, PredictionResponse};
use crate::error::AppError;

// ---------------------------------------------------------------------------
// Classifier – the one outbound call of the application
// ---------------------------------------------------------------------------

/// HTTP client for the remote inference endpoint.
///
/// Each [`classify`](Classifier::classify) call issues exactly one request:
/// no retry, no timeout, no cancellation of an already-sent request.
pub struct Classifier {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl Classifier {
    pub fn new(endpoint: String) -> Self {
        Classifier {
            http: reqwest::blocking::Client::new(),
            endpoint,
        }
    }

    /// POST the image as `multipart/form-data` (one part named `file`) and
    /// parse the JSON answer into a validated [`ClassificationResult`].
    pub fn classify(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<ClassificationResult, AppError> {
        log::debug!("POST {} ({} bytes, {mime})", self.endpoint, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| AppError::NetworkOrParse {
                reason: e.to_string(),
            })?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| AppError::NetworkOrParse {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http {
                status: status.as_u16(),
            });
        }

        let raw: PredictionResponse =
            response.json().map_err(|e| AppError::NetworkOrParse {
                reason: e.to_string(),
            })?;
        raw.validate()
    }
}
