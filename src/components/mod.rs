pub mod segmented_toggle;

pub use segmented_toggle::diagnostic_kind_toggle;
