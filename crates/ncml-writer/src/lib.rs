//! NCML export for NetCDF dataset metadata.
//!
//! Walks a [`netcdf_model::Dataset`] tree and emits an NCML 2.2 XML
//! document describing its dimensions, attributes, variables, and groups.
//! Metadata only: array values are never serialized.
//!
//! # Example
//!
//! ```
//! use netcdf_model::{Dataset, Dimension};
//! use ncml_writer::dataset_to_ncml;
//!
//! let mut dataset = Dataset::new();
//! dataset.dimensions.push(Dimension::unlimited("time", 24));
//! let ncml = dataset_to_ncml(&dataset, None).unwrap();
//! assert!(ncml.contains("isUnlimited=\"true\""));
//! ```

pub mod error;
pub mod escape;
pub mod types;
pub mod writer;

pub use error::{NcmlError, NcmlResult};
pub use escape::sanitize;
pub use types::{ncml_type, type_for_token};
pub use writer::{dataset_to_ncml, write_ncml, NCML_NAMESPACE};
