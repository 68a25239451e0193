//! Library side of the carepath CLI: configuration, logging, play scripts
//! and screen rendering.

pub mod config;
pub mod logging;
pub mod render;
pub mod script;
