//! NetCDF element types.

use serde::{Deserialize, Serialize};

/// The scalar element type of a variable or attribute value, covering the
/// standard NetCDF-4 type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NcType {
    /// NC_BYTE: signed 8-bit integer
    Byte,
    /// NC_UBYTE: unsigned 8-bit integer
    UByte,
    /// NC_SHORT: signed 16-bit integer
    Short,
    /// NC_USHORT: unsigned 16-bit integer
    UShort,
    /// NC_INT: signed 32-bit integer
    Int,
    /// NC_UINT: unsigned 32-bit integer
    UInt,
    /// NC_INT64: signed 64-bit integer
    Int64,
    /// NC_UINT64: unsigned 64-bit integer
    UInt64,
    /// NC_FLOAT: 32-bit floating point
    Float,
    /// NC_DOUBLE: 64-bit floating point
    Double,
    /// NC_CHAR: fixed-length character data
    Char,
    /// NC_STRING: variable-length string
    String,
}

impl NcType {
    /// Whether this is a textual type (char or string).
    pub fn is_text(&self) -> bool {
        matches!(self, NcType::Char | NcType::String)
    }
}
