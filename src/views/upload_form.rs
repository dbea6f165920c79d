use std::path::Path;

use crate::components::diagnostic_kind_toggle;
use crate::message::Message;
use crate::model::DiagnosticKind;
use crate::utils::file_display_name;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element};

pub fn upload_form<'a>(
    selected_file: Option<&'a Path>,
    patient_id: &'a str,
    kind: DiagnosticKind,
    in_flight: bool,
) -> Element<'a, Message> {
    let browse_button = button("Choose File").on_press(Message::BrowseFile);
    let file_label: Element<'_, Message> = match selected_file {
        Some(path) => text(file_display_name(path))
            .wrapping(Wrapping::Word)
            .into(),
        None => text("No file selected").into(),
    };
    let file_row = row![browse_button, file_label]
        .spacing(12)
        .align_y(Alignment::Center);

    let patient_input = text_input("e.g. PAT-2024-0042", patient_id)
        .on_input(Message::PatientIdChanged)
        .on_submit(Message::SubmitRequested)
        .padding(10);

    let submit_label = if in_flight {
        "Analyzing…"
    } else {
        "Upload & Analyze"
    };
    let submit_button = button(text(submit_label).size(16))
        .padding([10, 24])
        .on_press_maybe((!in_flight).then_some(Message::SubmitRequested));

    column![
        text("Diagnostic Upload").size(20),
        file_row,
        text("Patient ID").size(14),
        patient_input,
        text("Diagnostic Type").size(14),
        diagnostic_kind_toggle(kind),
        submit_button,
    ]
    .spacing(12)
    .into()
}
