use crate::client;
use crate::config::Config;
use crate::message::Message;
use crate::model::{DiagnosticKind, ServiceStatus, UploadOutcome};
use crate::views::{result_panel, upload_form};
use iced::widget::{column, container, row, text};
use iced::{application, Element, Length, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

const APP_TITLE: &str = "MediScan";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run_with(boot)
}

fn boot() -> (App, Task<Message>) {
    let config = Config::from_env();
    log::info!("Using analysis service at {}", config.service_url());

    let app = App::new(config);
    let probe = app.probe_task();
    (app, probe)
}

pub struct App {
    config: Config,
    client: reqwest::Client,
    selected_file: Option<PathBuf>,
    patient_id: String,
    diagnostic_kind: DiagnosticKind,
    in_flight: bool,
    submission: u64,
    last_result: Option<UploadOutcome>,
    service_status: ServiceStatus,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: client::build_client(),
            selected_file: None,
            patient_id: String::new(),
            diagnostic_kind: DiagnosticKind::default(),
            in_flight: false,
            submission: 0,
            last_result: None,
            service_status: ServiceStatus::default(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseFile => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FileSelected,
            ),
            Message::FileSelected(path) => {
                self.selected_file = path;
                Task::none()
            }
            Message::PatientIdChanged(value) => {
                self.patient_id = value;
                Task::none()
            }
            Message::DiagnosticKindSelected(kind) => {
                if self.diagnostic_kind != kind {
                    self.diagnostic_kind = kind;
                }
                Task::none()
            }
            Message::SubmitRequested => self.submit(),
            Message::UploadFinished { submission, result } => {
                if submission != self.submission {
                    log::debug!("Discarding completion of superseded submission {submission}");
                    return Task::none();
                }

                self.in_flight = false;
                if let Ok(outcome) = result {
                    self.last_result = Some(outcome);
                }
                Task::none()
            }
            Message::ServiceProbed(result) => {
                self.service_status = match result {
                    Ok(health) => ServiceStatus::Online(health),
                    Err(_) => ServiceStatus::Unreachable,
                };
                Task::none()
            }
        }
    }

    // A submission starts only from a complete, idle form; the guards fail
    // quietly.
    fn submit(&mut self) -> Task<Message> {
        if self.in_flight {
            return Task::none();
        }
        let Some(path) = self.selected_file.clone() else {
            return Task::none();
        };
        if self.patient_id.is_empty() {
            return Task::none();
        }

        self.in_flight = true;
        self.last_result = None;
        self.submission += 1;

        let submission = self.submission;
        let client = self.client.clone();
        let url = self.config.upload_url();
        let patient_id = self.patient_id.clone();
        let kind = self.diagnostic_kind;

        log::info!(
            "Submitting {} for patient {patient_id} as {}",
            path.display(),
            kind.as_wire()
        );

        Task::perform(
            async move {
                client::upload_diagnostic(&client, &url, &path, &patient_id, kind)
                    .await
                    .map_err(|err| {
                        log::error!("Upload failed: {err}");
                        err.to_string()
                    })
            },
            move |result| Message::UploadFinished { submission, result },
        )
    }

    fn probe_task(&self) -> Task<Message> {
        let client = self.client.clone();
        let url = self.config.health_url();

        Task::perform(
            async move {
                client::probe_service(&client, &url).await.map_err(|err| {
                    log::error!("Health probe failed: {err}");
                    err.to_string()
                })
            },
            Message::ServiceProbed,
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let form = upload_form(
            self.selected_file.as_deref(),
            &self.patient_id,
            self.diagnostic_kind,
            self.in_flight,
        );
        let form_panel = container(form).padding(16).width(Length::FillPortion(2));

        let result = result_panel(self.last_result.as_ref(), self.in_flight);
        let result_area = container(result).padding(16).width(Length::FillPortion(3));

        let workspace = row![form_panel, result_area]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill);

        column![workspace, text(self.service_status.describe()).size(14)]
            .padding(20)
            .spacing(20)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServiceHealth;
    use serde_json::json;

    fn test_app() -> App {
        App::new(Config::with_service_url("http://localhost:8000"))
    }

    fn ready_app() -> App {
        let mut app = test_app();
        let _ = app.update(Message::FileSelected(Some(PathBuf::from(
            "/scans/chest.png",
        ))));
        let _ = app.update(Message::PatientIdChanged("P-1001".to_string()));
        app
    }

    fn report_outcome(summary: &str) -> UploadOutcome {
        UploadOutcome::classify(json!({
            "analysis": {"summary": summary, "confidence": 0.93}
        }))
    }

    #[test]
    fn starts_idle_with_an_empty_form() {
        let app = test_app();
        assert_eq!(app.selected_file, None);
        assert_eq!(app.patient_id, "");
        assert_eq!(app.diagnostic_kind, DiagnosticKind::Xray);
        assert!(!app.in_flight);
        assert!(app.last_result.is_none());
        assert!(matches!(app.service_status, ServiceStatus::Unknown));
    }

    #[test]
    fn submit_without_a_file_is_ignored() {
        let mut app = test_app();
        let _ = app.update(Message::PatientIdChanged("P-1001".to_string()));

        let _ = app.update(Message::SubmitRequested);

        assert!(!app.in_flight);
        assert_eq!(app.submission, 0);
    }

    #[test]
    fn submit_without_a_patient_id_is_ignored() {
        let mut app = test_app();
        let _ = app.update(Message::FileSelected(Some(PathBuf::from(
            "/scans/chest.png",
        ))));

        let _ = app.update(Message::SubmitRequested);

        assert!(!app.in_flight);
        assert_eq!(app.submission, 0);
    }

    #[test]
    fn submit_marks_in_flight_and_clears_the_previous_result() {
        let mut app = ready_app();
        let _ = app.update(Message::SubmitRequested);
        let _ = app.update(Message::UploadFinished {
            submission: 1,
            result: Ok(report_outcome("Normal findings")),
        });
        assert!(app.last_result.is_some());

        let _ = app.update(Message::SubmitRequested);

        assert!(app.in_flight);
        assert_eq!(app.submission, 2);
        assert!(app.last_result.is_none());
    }

    #[test]
    fn repeat_submit_while_in_flight_is_ignored() {
        let mut app = ready_app();
        let _ = app.update(Message::SubmitRequested);
        let _ = app.update(Message::SubmitRequested);

        assert_eq!(app.submission, 1);
    }

    #[test]
    fn completion_stores_the_report_and_releases_the_latch() {
        let mut app = ready_app();
        let _ = app.update(Message::SubmitRequested);

        let _ = app.update(Message::UploadFinished {
            submission: 1,
            result: Ok(report_outcome("Normal findings")),
        });

        assert!(!app.in_flight);
        assert!(matches!(
            app.last_result,
            Some(UploadOutcome::Report(ref response))
                if response.analysis.summary == "Normal findings"
        ));
    }

    #[test]
    fn failed_upload_returns_to_idle_without_a_result() {
        let mut app = ready_app();
        let _ = app.update(Message::SubmitRequested);

        let _ = app.update(Message::UploadFinished {
            submission: 1,
            result: Err("request to http://localhost:8000/upload failed".to_string()),
        });

        assert!(!app.in_flight);
        assert!(app.last_result.is_none());
    }

    #[test]
    fn completion_of_a_superseded_submission_is_discarded() {
        let mut app = ready_app();
        let _ = app.update(Message::SubmitRequested);
        let _ = app.update(Message::UploadFinished {
            submission: 1,
            result: Ok(report_outcome("First")),
        });
        let _ = app.update(Message::SubmitRequested);

        let _ = app.update(Message::UploadFinished {
            submission: 1,
            result: Ok(report_outcome("Late duplicate")),
        });

        assert!(app.in_flight);
        assert!(app.last_result.is_none());
        assert_eq!(app.submission, 2);
    }

    #[test]
    fn dialog_dismissal_clears_the_selection() {
        let mut app = test_app();
        let _ = app.update(Message::FileSelected(Some(PathBuf::from(
            "/scans/chest.png",
        ))));
        assert!(app.selected_file.is_some());

        let _ = app.update(Message::FileSelected(None));

        assert_eq!(app.selected_file, None);
    }

    #[test]
    fn picking_a_new_file_keeps_the_last_result() {
        let mut app = ready_app();
        let _ = app.update(Message::SubmitRequested);
        let _ = app.update(Message::UploadFinished {
            submission: 1,
            result: Ok(report_outcome("Normal findings")),
        });

        let _ = app.update(Message::FileSelected(Some(PathBuf::from(
            "/scans/followup.png",
        ))));

        assert!(app.last_result.is_some());
    }

    #[test]
    fn fields_stay_editable_while_a_submission_runs() {
        let mut app = ready_app();
        let _ = app.update(Message::SubmitRequested);

        let _ = app.update(Message::PatientIdChanged("P-2002".to_string()));
        let _ = app.update(Message::DiagnosticKindSelected(DiagnosticKind::Ct));

        assert!(app.in_flight);
        assert_eq!(app.patient_id, "P-2002");
        assert_eq!(app.diagnostic_kind, DiagnosticKind::Ct);
    }

    #[test]
    fn probe_result_updates_the_service_status() {
        let mut app = test_app();

        let _ = app.update(Message::ServiceProbed(Ok(ServiceHealth {
            status: "healthy".to_string(),
            worker: Some("running".to_string()),
        })));
        assert!(matches!(app.service_status, ServiceStatus::Online(_)));

        let _ = app.update(Message::ServiceProbed(Err("unreachable".to_string())));
        assert!(matches!(app.service_status, ServiceStatus::Unreachable));
    }
}
