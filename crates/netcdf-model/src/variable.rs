//! NetCDF variables.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::types::NcType;

/// A variable: a named, typed array whose shape is a list of dimension-name
/// references.
///
/// The referenced dimension names are expected to exist in the enclosing
/// dataset or group scope; that invariant belongs to the reader that built
/// the model and is not re-validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name.
    pub name: String,
    /// Dimension names making up the shape, outermost first. Empty for
    /// scalar variables.
    pub dimensions: Vec<String>,
    /// Element type of the stored values.
    pub data_type: NcType,
    /// Variable attributes, in file order.
    pub attributes: Vec<Attribute>,
}

impl Variable {
    /// Create a variable with no attributes.
    pub fn new(
        name: impl Into<String>,
        dimensions: Vec<String>,
        data_type: NcType,
    ) -> Self {
        Self {
            name: name.into(),
            dimensions,
            data_type,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, preserving insertion order.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}
