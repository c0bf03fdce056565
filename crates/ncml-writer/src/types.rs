//! Mapping between NetCDF element types and NCML type tokens.

use netcdf_model::NcType;

/// The NCML type token for an element type.
///
/// NCML inherits the classic NetCDF-3 vocabulary, so NetCDF-4 types with no
/// classic counterpart (unsigned integers) map to `unknown` rather than
/// failing. Both textual types map to `char`.
pub fn ncml_type(data_type: NcType) -> &'static str {
    match data_type {
        NcType::Byte => "byte",
        NcType::Short => "short",
        NcType::Int => "int",
        NcType::Int64 => "long",
        NcType::Float => "float",
        NcType::Double => "double",
        NcType::Char | NcType::String => "char",
        _ => "unknown",
    }
}

/// The element type named by an NCML type token, if any.
///
/// Inverse of [`ncml_type`] over the seven defined tokens; `char` resolves
/// to [`NcType::Char`].
pub fn type_for_token(token: &str) -> Option<NcType> {
    match token {
        "byte" => Some(NcType::Byte),
        "short" => Some(NcType::Short),
        "int" => Some(NcType::Int),
        "long" => Some(NcType::Int64),
        "float" => Some(NcType::Float),
        "double" => Some(NcType::Double),
        "char" => Some(NcType::Char),
        _ => None,
    }
}
