//! Reusable view pieces.

mod log_view;
mod panel;

pub use log_view::log_view;
pub use panel::panel;
