//! CLI library components for the table viewer.

pub mod logging;
pub mod pipeline;
pub mod render;
