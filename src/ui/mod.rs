//! Terminal output helpers
//!
//! Styled output on interactive terminals, plain bracketed markers when
//! piped or running in CI.

mod context;
mod output;

pub use context::UiContext;
pub use output::{heading, key_value, remark, step_info, step_ok, step_warn};
