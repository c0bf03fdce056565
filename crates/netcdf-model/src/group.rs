//! NetCDF groups.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::dimension::Dimension;
use crate::variable::Variable;

/// A group one level below the dataset root.
///
/// Identified by its hierarchical path (e.g. `/forecast/surface`); the
/// displayed name is the last path segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Hierarchical path of this group within the dataset.
    pub path: String,
    /// Dimensions defined in this group, in file order.
    pub dimensions: Vec<Dimension>,
    /// Group attributes, in file order.
    pub attributes: Vec<Attribute>,
    /// Variables in this group, in file order.
    pub variables: Vec<Variable>,
}

impl Group {
    /// Create an empty group at the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            dimensions: Vec::new(),
            attributes: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Display name: the last segment of the hierarchical path.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}
