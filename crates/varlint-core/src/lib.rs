//! Core functionality for the varlint stylesheet linter
//!
//! This crate provides the core linting functionality including:
//! - The stylesheet expression model handed over by an external parser
//! - Rule checking over property declarations
//! - Diagnostic generation and reporting
//! - Configuration management
//! - File discovery and processing

pub mod analyze;
pub mod ast;
pub mod check;
pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod fs;
pub mod lints;
pub mod location;
pub mod rule_options;
pub mod settings;
pub mod toml;


// Re-export commonly used types for convenience
pub use check::{check, check_stylesheet};
pub use config::{Config, build_config};
pub use diagnostic::Diagnostic;
pub use discovery::{DiscoveredSettings, discover_stylesheet_paths, discover_settings};
pub use location::Location;
pub use settings::Settings;
