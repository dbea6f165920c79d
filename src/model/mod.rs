pub mod diagnostic;
pub mod report;
pub mod service;

pub use diagnostic::DiagnosticKind;
pub use report::{AnalysisReport, UploadOutcome, UploadResponse};
pub use service::{ServiceHealth, ServiceStatus};
