//! Configuration loading and management for the Payroll Computation Core.
//!
//! This module provides functionality to load organization configuration
//! from YAML files: organization metadata and the department directory
//! used to decorate payroll records for display.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/org").unwrap();
//! println!("Loaded organization: {}", config.organization().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_DEPARTMENT};
pub use types::{Department, DepartmentsConfig, OrgConfig, OrgMetadata};
