//! Recursive NCML document generation.
//!
//! Walks the dataset tree top-down — dimensions, then attributes, then
//! variables, then groups — appending hand-formatted XML lines to a
//! [`std::fmt::Write`] sink. Element order follows the input order of each
//! container; nothing is sorted.

use std::fmt::Write;

use tracing::{debug, trace};

use netcdf_model::{AttrValue, Attribute, Dataset, Dimension, Group, Variable};

use crate::error::NcmlResult;
use crate::escape::sanitize;
use crate::types::ncml_type;

/// Namespace of the NCML 2.2 schema.
pub const NCML_NAMESPACE: &str = "http://www.unidata.ucar.edu/namespaces/netcdf/ncml-2.2";

/// Reserved slot for an XML declaration. Left blank: historically the
/// declaration interacted badly with consumers that re-encode the document,
/// so only the separating newline is emitted.
const HEADER: &str = "";

/// One level of indentation.
const INDENT_STEP: &str = "  ";

fn write_dimension<W: Write>(out: &mut W, dim: &Dimension, indent: &str) -> NcmlResult<()> {
    if dim.is_unlimited {
        writeln!(
            out,
            "{}<dimension name=\"{}\" length=\"{}\" isUnlimited=\"true\"/>",
            indent,
            sanitize(&dim.name, true),
            dim.size
        )?;
    } else {
        writeln!(
            out,
            "{}<dimension name=\"{}\" length=\"{}\"/>",
            indent,
            sanitize(&dim.name, true),
            dim.size
        )?;
    }
    Ok(())
}

fn write_attribute<W: Write>(out: &mut W, att: &Attribute, indent: &str) -> NcmlResult<()> {
    match &att.value {
        // Text values carry no type token. The name deliberately keeps its
        // spaces here while the numeric branch collapses them; downstream
        // consumers depend on that asymmetry.
        AttrValue::Text(text) => {
            writeln!(
                out,
                "{}<attribute name=\"{}\" value=\"{}\"/>",
                indent,
                sanitize(&att.name, false),
                sanitize(text, true)
            )?;
        }
        // Numeric values are emitted raw; digits and signs need no escaping.
        value => {
            let token = value.nc_type().map(ncml_type).unwrap_or("unknown");
            writeln!(
                out,
                "{}<attribute name=\"{}\" type=\"{}\" value=\"{}\"/>",
                indent,
                sanitize(&att.name, true),
                token,
                value
            )?;
        }
    }
    Ok(())
}

fn write_variable<W: Write>(out: &mut W, var: &Variable, indent: &str) -> NcmlResult<()> {
    let shape = var
        .dimensions
        .iter()
        .map(|dname| sanitize(dname, true))
        .collect::<Vec<_>>()
        .join(" ");
    let vtype = ncml_type(var.data_type);

    if var.attributes.is_empty() {
        writeln!(
            out,
            "{}<variable name=\"{}\" shape=\"{}\" type=\"{}\"/>",
            indent,
            sanitize(&var.name, true),
            shape,
            vtype
        )?;
    } else {
        writeln!(
            out,
            "{}<variable name=\"{}\" shape=\"{}\" type=\"{}\">",
            indent,
            sanitize(&var.name, true),
            shape,
            vtype
        )?;

        let new_indent = format!("{}{}", indent, INDENT_STEP);
        for att in &var.attributes {
            write_attribute(out, att, &new_indent)?;
        }

        writeln!(out, "{}</variable>", indent)?;
    }
    Ok(())
}

fn write_group<W: Write>(out: &mut W, group: &Group, indent: &str) -> NcmlResult<()> {
    trace!(path = %group.path, "Writing group element");
    writeln!(
        out,
        "{}<group name=\"{}\">",
        indent,
        sanitize(group.name(), true)
    )?;

    let new_indent = format!("{}{}", indent, INDENT_STEP);

    for dim in &group.dimensions {
        write_dimension(out, dim, &new_indent)?;
    }
    for att in &group.attributes {
        write_attribute(out, att, &new_indent)?;
    }
    for var in &group.variables {
        write_variable(out, var, &new_indent)?;
    }

    writeln!(out, "{}</group>", indent)?;
    Ok(())
}

/// Write the NCML document for `dataset` into a caller-supplied sink.
///
/// `location` is placed verbatim on the root element when given.
/// NOTE: unlike every other interpolated string, it does not go through
/// [`sanitize`] — inherited behavior the output grammar pins down.
pub fn write_ncml<W: Write>(
    dataset: &Dataset,
    out: &mut W,
    location: Option<&str>,
) -> NcmlResult<()> {
    debug!(
        dimensions = dataset.dimensions.len(),
        attributes = dataset.attributes.len(),
        variables = dataset.variables.len(),
        groups = dataset.groups.len(),
        "Serializing dataset to NCML"
    );

    match location {
        None => writeln!(out, "{}\n<netcdf xmlns=\"{}\">", HEADER, NCML_NAMESPACE)?,
        Some(url) => writeln!(
            out,
            "{}\n<netcdf xmlns=\"{}\" location=\"{}\">",
            HEADER, NCML_NAMESPACE, url
        )?,
    }

    let indent = INDENT_STEP;
    for dim in &dataset.dimensions {
        write_dimension(out, dim, indent)?;
    }
    for att in &dataset.attributes {
        write_attribute(out, att, indent)?;
    }
    for var in &dataset.variables {
        write_variable(out, var, indent)?;
    }
    for group in &dataset.groups {
        write_group(out, group, indent)?;
    }

    writeln!(out, "</netcdf>")?;
    Ok(())
}

/// Serialize `dataset` to an NCML string.
///
/// Buffers into a fresh in-memory sink via [`write_ncml`]; the buffer lives
/// only for the duration of the call.
pub fn dataset_to_ncml(dataset: &Dataset, location: Option<&str>) -> NcmlResult<String> {
    let mut output = String::new();
    write_ncml(dataset, &mut output, location)?;
    Ok(output)
}
