//! CLI command modules

pub mod init;
pub mod resources;
pub mod simple_chart;
