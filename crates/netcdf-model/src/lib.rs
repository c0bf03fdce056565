//! In-memory view types for the NetCDF-4 data model.
//!
//! These are plain, read-only snapshots of a dataset's structure: nested
//! groups holding dimensions, attributes, and variables. They carry metadata
//! only — array data never passes through this crate. A NetCDF reader
//! populates them; consumers such as `ncml-writer` walk them.
//!
//! Ordering matters: every container field is a `Vec` that preserves the
//! order entities were inserted in, mirroring the ordered maps of the
//! NetCDF-4 file layout. Name uniqueness within a parent is the producer's
//! responsibility and is not re-checked here.

pub mod attribute;
pub mod dataset;
pub mod dimension;
pub mod group;
pub mod types;
pub mod variable;

pub use attribute::{AttrValue, Attribute};
pub use dataset::Dataset;
pub use dimension::Dimension;
pub use group::Group;
pub use types::NcType;
pub use variable::Variable;
