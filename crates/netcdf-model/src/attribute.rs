//! NetCDF attributes: name/value pairs attached to datasets, groups, and
//! variables.

use serde::{Deserialize, Serialize};

use crate::types::NcType;

/// An attribute value: either text or a single numeric scalar.
///
/// Array-valued attributes are out of scope; readers that encounter them
/// are expected to stringify before building the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Textual value.
    Text(String),
    /// Signed 8-bit integer.
    Byte(i8),
    /// Signed 16-bit integer.
    Short(i16),
    /// Signed 32-bit integer.
    Int(i32),
    /// Signed 64-bit integer.
    Long(i64),
    /// 32-bit floating point.
    Float(f32),
    /// 64-bit floating point.
    Double(f64),
    /// Unsigned 32-bit integer. NetCDF-4 allows it; classic NCML has no
    /// token for it.
    UInt(u32),
}

impl AttrValue {
    /// Whether this value is textual.
    pub fn is_text(&self) -> bool {
        matches!(self, AttrValue::Text(_))
    }

    /// The element type of a numeric value, `None` for text.
    pub fn nc_type(&self) -> Option<NcType> {
        match self {
            AttrValue::Text(_) => None,
            AttrValue::Byte(_) => Some(NcType::Byte),
            AttrValue::Short(_) => Some(NcType::Short),
            AttrValue::Int(_) => Some(NcType::Int),
            AttrValue::Long(_) => Some(NcType::Int64),
            AttrValue::Float(_) => Some(NcType::Float),
            AttrValue::Double(_) => Some(NcType::Double),
            AttrValue::UInt(_) => Some(NcType::UInt),
        }
    }
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Text(s) => write!(f, "{}", s),
            AttrValue::Byte(v) => write!(f, "{}", v),
            AttrValue::Short(v) => write!(f, "{}", v),
            AttrValue::Int(v) => write!(f, "{}", v),
            AttrValue::Long(v) => write!(f, "{}", v),
            AttrValue::Float(v) => write!(f, "{}", v),
            AttrValue::Double(v) => write!(f, "{}", v),
            AttrValue::UInt(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<i8> for AttrValue {
    fn from(v: i8) -> Self {
        AttrValue::Byte(v)
    }
}

impl From<i16> for AttrValue {
    fn from(v: i16) -> Self {
        AttrValue::Short(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Long(v)
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        AttrValue::Float(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Double(v)
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::UInt(v)
    }
}

/// A named attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    pub value: AttrValue,
}

impl Attribute {
    /// Create an attribute from a name and anything convertible to a value.
    pub fn new(name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
