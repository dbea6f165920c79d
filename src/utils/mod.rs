pub mod formatting;

pub use formatting::{file_display_name, format_confidence};
