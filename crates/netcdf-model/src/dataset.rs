//! The dataset root container.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::dimension::Dimension;
use crate::group::Group;
use crate::variable::Variable;

/// The root of a dataset's structural tree: top-level dimensions, global
/// attributes, variables, and one level of sub-groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Root-level dimensions, in file order.
    pub dimensions: Vec<Dimension>,
    /// Global attributes, in file order.
    pub attributes: Vec<Attribute>,
    /// Root-level variables, in file order.
    pub variables: Vec<Variable>,
    /// Sub-groups, in file order.
    pub groups: Vec<Group>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }
}
