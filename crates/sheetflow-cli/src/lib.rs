//! CLI library components for Sheetflow.

pub mod logging;
pub mod pipeline;
