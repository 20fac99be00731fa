//! Decoding of flat wire objects back into validated [`ProductData`].
//!
//! First-class fields are routed through the validating constructor; every other key is
//! appended with [`ProductData::add`] in document order.

use crate::data::{ProductData, validate_condition_type, validate_greater_than_zero};
use crate::error::{ProductError, ProductErrorExt};
use serde_json::{Map, Value};
use sfeed_domain::catalog::ConditionTypeCatalog;
use sfeed_domain::field::FeedField;
use std::borrow::Cow;

impl ProductData {
    /// Rebuilds a record from a flat JSON object.
    ///
    /// A JSON `null` for a first-class field counts as absent. First-class fields are checked
    /// in the same order as [`ProductData::new`] and the first failure wins, whether it is a
    /// wrong JSON type or an out-of-domain value. Extra keys are stored without validation,
    /// exactly as [`ProductData::add`] would.
    ///
    /// # Errors
    /// Returns [`ProductError::InvalidDomain`] when a first-class field fails validation or
    /// holds the wrong JSON type (e.g. a string weight).
    pub fn from_wire(
        catalog: &ConditionTypeCatalog,
        object: &Map<String, Value>,
    ) -> Result<Self, ProductError> {
        // Each field is type-checked and domain-checked before the next one is read.
        let condition_type = text_field(object, FeedField::ConditionType)?;
        if let Some(condition_type) = condition_type {
            validate_condition_type(catalog, condition_type)?;
        }
        let package_height = measurement(object, FeedField::PackageHeight)?;
        let package_width = measurement(object, FeedField::PackageWidth)?;
        let package_length = measurement(object, FeedField::PackageLength)?;
        let package_weight = measurement(object, FeedField::PackageWeight)?;

        let mut data = Self::new(
            catalog,
            condition_type,
            package_height,
            package_width,
            package_length,
            package_weight,
        )?;

        for (name, value) in object {
            if FeedField::from_name(name).is_none() {
                data.add(name.as_str(), value.clone());
            }
        }

        Ok(data)
    }

    /// Parses `json` as a flat object and decodes it with [`ProductData::from_wire`].
    ///
    /// # Errors
    /// Returns [`ProductError::Serialize`] for malformed JSON or a document that is not an
    /// object, otherwise the errors of [`ProductData::from_wire`].
    pub fn from_json_str(catalog: &ConditionTypeCatalog, json: &str) -> Result<Self, ProductError> {
        let object: Map<String, Value> =
            serde_json::from_str(json).context("Product data must be a flat JSON object")?;
        Self::from_wire(catalog, &object)
    }
}

fn text_field(object: &Map<String, Value>, field: FeedField) -> Result<Option<&str>, ProductError> {
    match object.get(field.name()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(type_mismatch(field, "expected a string")),
    }
}

fn number_field(object: &Map<String, Value>, field: FeedField) -> Result<Option<f64>, ProductError> {
    match object.get(field.name()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            n.as_f64().map(Some).ok_or_else(|| type_mismatch(field, "number out of range"))
        },
        Some(_) => Err(type_mismatch(field, "expected a number")),
    }
}

fn measurement(object: &Map<String, Value>, field: FeedField) -> Result<Option<f64>, ProductError> {
    let value = number_field(object, field)?;
    if let Some(value) = value {
        validate_greater_than_zero(field, value)?;
    }
    Ok(value)
}

fn type_mismatch(field: FeedField, reason: &'static str) -> ProductError {
    ProductError::InvalidDomain { field, context: Some(Cow::Borrowed(reason)) }
}
