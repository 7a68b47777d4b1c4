//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the organization running payroll.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgMetadata {
    /// The organization's display name.
    pub name: String,
    /// ISO 4217 currency code for display purposes (e.g., "INR").
    pub currency: String,
}

/// A department within the organization.
#[derive(Debug, Clone, Deserialize)]
pub struct Department {
    /// The human-readable department name.
    pub name: String,
}

/// Departments configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsConfig {
    /// Map of department id to department details.
    pub departments: HashMap<String, Department>,
}

/// The complete organization configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct OrgConfig {
    /// Organization metadata.
    metadata: OrgMetadata,
    /// Departments by id.
    departments: HashMap<String, Department>,
}

impl OrgConfig {
    /// Creates a new OrgConfig from its component parts.
    pub fn new(metadata: OrgMetadata, departments: HashMap<String, Department>) -> Self {
        Self {
            metadata,
            departments,
        }
    }

    /// Returns the organization metadata.
    pub fn organization(&self) -> &OrgMetadata {
        &self.metadata
    }

    /// Returns all departments.
    pub fn departments(&self) -> &HashMap<String, Department> {
        &self.departments
    }
}
