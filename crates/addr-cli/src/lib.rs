//! CLI library components for the address normalizer.

pub mod logging;
pub mod pipeline;
