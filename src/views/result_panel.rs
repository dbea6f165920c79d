use crate::message::Message;
use crate::model::UploadOutcome;
use crate::utils::format_confidence;
use iced::widget::text::Wrapping;
use iced::widget::{column, scrollable, text};
use iced::Element;

pub fn result_panel<'a>(
    outcome: Option<&'a UploadOutcome>,
    in_flight: bool,
) -> Element<'a, Message> {
    if in_flight {
        return text("Uploading and analyzing…").into();
    }

    match outcome {
        Some(UploadOutcome::Report(response)) => {
            let analysis = &response.analysis;
            let mut card = column![
                text("Analysis Result").size(20),
                text(&analysis.summary).size(16).wrapping(Wrapping::Word),
                text(format!(
                    "Confidence: {}",
                    format_confidence(analysis.confidence)
                )),
            ];

            if let Some(urgency) = &analysis.urgency {
                card = card.push(text(format!("Urgency: {urgency}")));
            }

            if !analysis.abnormalities.is_empty() {
                card = card.push(text("Abnormalities").size(16));
                for finding in &analysis.abnormalities {
                    card = card.push(text(format!("• {finding}")).wrapping(Wrapping::Word));
                }
            }

            scrollable(card.spacing(8)).into()
        }
        Some(UploadOutcome::Unrecognized(_)) => {
            text("The analysis service returned no readable result").into()
        }
        None => text("Submit a diagnostic file to see its analysis").into(),
    }
}
