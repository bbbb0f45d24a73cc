//! Library components for the NumTable CLI.

pub mod logging;
pub mod render;
