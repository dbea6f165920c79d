#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticKind {
    #[default]
    Xray,
    Ct,
    Ecg,
    Report,
}

impl DiagnosticKind {
    pub const ALL: [DiagnosticKind; 4] = [
        DiagnosticKind::Xray,
        DiagnosticKind::Ct,
        DiagnosticKind::Ecg,
        DiagnosticKind::Report,
    ];

    /// Value carried by the `file_type` form field.
    pub fn as_wire(self) -> &'static str {
        match self {
            DiagnosticKind::Xray => "XRAY",
            DiagnosticKind::Ct => "CT",
            DiagnosticKind::Ecg => "ECG",
            DiagnosticKind::Report => "REPORT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Xray => "X-Ray",
            DiagnosticKind::Ct => "CT",
            DiagnosticKind::Ecg => "ECG",
            DiagnosticKind::Report => "Report",
        }
    }
}
