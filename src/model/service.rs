use serde::{Deserialize, Serialize};

/// Body of the analysis service's health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub worker: Option<String>,
}

/// Connectivity of the analysis service, as last probed.
#[derive(Debug, Clone, Default)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Online(ServiceHealth),
    Unreachable,
}

impl ServiceStatus {
    pub fn describe(&self) -> String {
        match self {
            ServiceStatus::Unknown => String::from("Checking analysis service…"),
            ServiceStatus::Online(health) => match health.worker.as_deref() {
                Some(worker) => format!("Analysis service online, worker {worker}"),
                None => String::from("Analysis service online"),
            },
            ServiceStatus::Unreachable => String::from("Analysis service unreachable"),
        }
    }
}
