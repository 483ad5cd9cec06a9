pub mod api;
pub mod format;
pub mod page_state;
pub mod pipeline;
pub mod report;
pub mod serde_utils;
