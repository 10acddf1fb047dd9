//! Configuration management for editor-chart-gen

pub mod config;
pub mod output;
pub mod registry;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use output::OutputConfig;
pub use registry::RegistryConfig;
