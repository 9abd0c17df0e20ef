//! CLI library components for the club records tool.

pub mod logging;
