//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading
//! organization configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DepartmentsConfig, OrgConfig, OrgMetadata};

/// The fallback label used when a department lookup misses.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Loads and provides access to organization configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/org/
/// ├── organization.yaml  # Organization metadata
/// └── departments.yaml   # Department directory
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/org").unwrap();
/// assert_eq!(loader.department_name(Some("dept_unknown")), "General");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: OrgConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing or contains invalid
    /// YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<OrgMetadata>(&path.join("organization.yaml"))?;
        let departments_config =
            Self::load_yaml::<DepartmentsConfig>(&path.join("departments.yaml"))?;

        let config = OrgConfig::new(metadata, departments_config.departments);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying organization configuration.
    pub fn config(&self) -> &OrgConfig {
        &self.config
    }

    /// Returns the organization metadata.
    pub fn organization(&self) -> &OrgMetadata {
        self.config.organization()
    }

    /// Resolves a department id to its display name.
    ///
    /// A missing id or an id with no directory entry both degrade to the
    /// `"General"` fallback label; resolution never fails.
    pub fn department_name(&self, department_id: Option<&str>) -> &str {
        department_id
            .and_then(|id| self.config.departments().get(id))
            .map(|d| d.name.as_str())
            .unwrap_or(DEFAULT_DEPARTMENT)
    }
}
