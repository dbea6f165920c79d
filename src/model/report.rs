use serde::{Deserialize, Serialize};

/// Findings block inside an upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: String,
    /// Score in the 0.0–1.0 range; the service does not guarantee the bounds.
    pub confidence: f64,
    #[serde(default)]
    pub abnormalities: Vec<String>,
    #[serde(default)]
    pub urgency: Option<String>,
}

/// Response envelope returned by the upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    pub analysis: AnalysisReport,
}

/// A parsed JSON response, classified by shape before anything renders it.
///
/// Responses missing the `analysis.summary`/`analysis.confidence` pair are
/// kept as raw JSON instead of being rejected, so the caller can still log
/// or display what the service actually said.
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    Report(UploadResponse),
    Unrecognized(serde_json::Value),
}

impl UploadOutcome {
    pub fn classify(raw: serde_json::Value) -> Self {
        match serde_json::from_value::<UploadResponse>(raw.clone()) {
            Ok(response) => UploadOutcome::Report(response),
            Err(_) => UploadOutcome::Unrecognized(raw),
        }
    }
}
