use anyhow::{Context, Result, bail};
use sfeed::prelude::{ConditionTypeCatalog, FeedField, ProductData};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Validates every product data entry in `file` and returns the normalized JSON array.
///
/// The first invalid entry aborts the run; its index and the offending field end up in the
/// error chain.
pub(crate) fn check(file: &Path, catalog: &ConditionTypeCatalog, pretty: bool) -> Result<String> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let document: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let entries = entries(document)?;
    debug!(entries = entries.len(), file = %file.display(), "Loaded product data document");

    let records = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            ProductData::from_wire(catalog, entry)
                .with_context(|| format!("Entry {index} rejected"))
        })
        .collect::<Result<Vec<_>>>()?;

    info!(count = records.len(), "Product data validated");

    let output = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(output)
}

/// First-class field names, one per line.
pub(crate) fn fields() -> String {
    FeedField::iter().map(FeedField::name).collect::<Vec<_>>().join("\n")
}

/// Configured condition types, one per line.
pub(crate) fn conditions(catalog: &ConditionTypeCatalog) -> String {
    catalog.iter().collect::<Vec<_>>().join("\n")
}

fn entries(document: Value) -> Result<Vec<Map<String, Value>>> {
    match document {
        Value::Object(object) => Ok(vec![object]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(object) => Ok(object),
                other => bail!("Entry {index} is not a JSON object: {other}"),
            })
            .collect(),
        other => bail!("Expected a JSON object or array, found {other}"),
    }
}
