//! NetCDF dimensions.

use serde::{Deserialize, Serialize};

/// A named dimension with a current size.
///
/// Unlimited dimensions have no fixed extent; `size` is their current
/// length as reported by the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    /// Name of this dimension.
    pub name: String,
    /// Current size of this dimension.
    pub size: u64,
    /// Whether this dimension is unlimited (extensible).
    pub is_unlimited: bool,
}

impl Dimension {
    /// Create a fixed-size dimension.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            is_unlimited: false,
        }
    }

    /// Create an unlimited dimension with the given current size.
    pub fn unlimited(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            is_unlimited: true,
        }
    }
}
