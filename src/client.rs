//! HTTP client for the analysis service.
//!
//! One call, one request: [`upload_diagnostic`] posts the selected file as
//! multipart form data and interprets whatever JSON comes back. The service
//! is trusted to validate file content, and no status-code gate is applied:
//! an error status carrying a well-formed analysis body resolves like a
//! success, matching the deployed service contract.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::multipart::{Form, Part};

use crate::model::{DiagnosticKind, ServiceHealth, UploadOutcome};
use crate::utils::file_display_name;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors surfaced by the upload and probe calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response from {url} was not valid JSON: {source}")]
    InvalidBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Builds the HTTP client shared by every request the app issues.
pub fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}

/// Posts one diagnostic file to the upload endpoint.
///
/// The multipart body carries the file bytes under `file` with the original
/// filename, the patient identifier under `patient_id`, and the diagnostic
/// kind's wire name under `file_type`. The multipart content type and
/// boundary are derived from the body; no headers are set explicitly.
pub async fn upload_diagnostic(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
    patient_id: &str,
    kind: DiagnosticKind,
) -> Result<UploadOutcome, ClientError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ClientError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let form = Form::new()
        .part("file", Part::bytes(bytes).file_name(file_display_name(path)))
        .text("patient_id", patient_id.to_string())
        .text("file_type", kind.as_wire());

    let response = client
        .post(url)
        .multipart(form)
        .send()
        .await
        .map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })?;

    let raw: serde_json::Value =
        response
            .json()
            .await
            .map_err(|source| ClientError::InvalidBody {
                url: url.to_string(),
                source,
            })?;

    let outcome = UploadOutcome::classify(raw);
    if let UploadOutcome::Unrecognized(value) = &outcome {
        log::warn!("upload response had no readable analysis section: {value}");
    }

    Ok(outcome)
}

/// Fetches the service health endpoint.
pub async fn probe_service(
    client: &reqwest::Client,
    url: &str,
) -> Result<ServiceHealth, ClientError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })?;

    response
        .json()
        .await
        .map_err(|source| ClientError::InvalidBody {
            url: url.to_string(),
            source,
        })
}
