use std::path::PathBuf;

use crate::model::{DiagnosticKind, ServiceHealth, UploadOutcome};

#[derive(Debug, Clone)]
pub enum Message {
    BrowseFile,
    FileSelected(Option<PathBuf>),
    PatientIdChanged(String),
    DiagnosticKindSelected(DiagnosticKind),
    SubmitRequested,
    UploadFinished {
        submission: u64,
        result: Result<UploadOutcome, String>,
    },
    ServiceProbed(Result<ServiceHealth, String>),
}
