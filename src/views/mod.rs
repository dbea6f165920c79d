pub mod result_panel;
pub mod upload_form;

pub use result_panel::result_panel;
pub use upload_form::upload_form;
