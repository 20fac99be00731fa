use crate::error::ProductError;
use crate::value::AttributeValue;
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use serde_json::{Map, Value};
use sfeed_domain::catalog::ConditionTypeCatalog;
use sfeed_domain::field::FeedField;
use tracing::{debug, trace};

/// Sparse, validated product data attributes of a feed entry.
///
/// The five first-class fields ([`FeedField`]) are validated when the record is built and
/// stored under their wire names. Afterwards the record is append-only: [`ProductData::add`]
/// fills keys that are still absent and silently ignores keys that already hold a value.
///
/// Serializes to a flat JSON object in insertion order, e.g.
/// `{"ConditionType":"New","PackageWeight":2.5}`. An empty record serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductData {
    attributes: IndexMap<String, AttributeValue>,
}

impl ProductData {
    /// Builds a record from the optional first-class fields.
    ///
    /// Fields are validated in the order condition type, height, width, length, weight and
    /// stored in that order. `None` leaves the field out entirely.
    ///
    /// # Errors
    /// Returns [`ProductError::InvalidDomain`] for the first field that fails validation:
    /// * `ConditionType` when the value is not part of `catalog`.
    /// * any package measurement that is not strictly greater than zero (`NaN` included).
    pub fn new(
        catalog: &ConditionTypeCatalog,
        condition_type: Option<&str>,
        package_height: Option<f64>,
        package_width: Option<f64>,
        package_length: Option<f64>,
        package_weight: Option<f64>,
    ) -> Result<Self, ProductError> {
        let mut attributes = IndexMap::new();

        if let Some(condition_type) = condition_type {
            validate_condition_type(catalog, condition_type)?;
            attributes.insert(
                FeedField::ConditionType.name().to_owned(),
                AttributeValue::from(condition_type),
            );
        }

        let measurements = [
            (FeedField::PackageHeight, package_height),
            (FeedField::PackageWidth, package_width),
            (FeedField::PackageLength, package_length),
            (FeedField::PackageWeight, package_weight),
        ];

        for (field, value) in measurements {
            if let Some(value) = value {
                validate_greater_than_zero(field, value)?;
                attributes.insert(field.name().to_owned(), AttributeValue::Number(value));
            }
        }

        Ok(Self { attributes })
    }

    /// Starts a [`ProductDataBuilder`] validating against `catalog`.
    pub const fn builder(catalog: &ConditionTypeCatalog) -> ProductDataBuilder<'_> {
        ProductDataBuilder {
            catalog,
            condition_type: None,
            package_height: None,
            package_width: None,
            package_length: None,
            package_weight: None,
        }
    }

    /// Returns a copy of all stored attributes in insertion order.
    #[must_use]
    pub fn all(&self) -> IndexMap<String, AttributeValue> {
        self.attributes.clone()
    }

    /// Iterates over the stored attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up a single attribute. `None` means the attribute was never stored.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Looks up a first-class field.
    #[must_use]
    pub fn get(&self, field: FeedField) -> Option<&AttributeValue> {
        self.get_attribute(field.name())
    }

    /// Stores `value` under `name` unless the key already holds a value.
    ///
    /// No validation happens here, not even for first-class field names; only construction
    /// validates. A second `add` for the same key keeps the first value.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        match self.attributes.entry(name.into()) {
            Entry::Vacant(slot) => {
                slot.insert(value.into());
            },
            Entry::Occupied(slot) => {
                trace!(attribute = %slot.key(), "Attribute already set, keeping first value");
            },
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    #[must_use]
    pub fn condition_type(&self) -> Option<&str> {
        self.get(FeedField::ConditionType).and_then(AttributeValue::as_str)
    }

    #[must_use]
    pub fn package_height(&self) -> Option<f64> {
        self.measurement(FeedField::PackageHeight)
    }

    #[must_use]
    pub fn package_width(&self) -> Option<f64> {
        self.measurement(FeedField::PackageWidth)
    }

    #[must_use]
    pub fn package_length(&self) -> Option<f64> {
        self.measurement(FeedField::PackageLength)
    }

    #[must_use]
    pub fn package_weight(&self) -> Option<f64> {
        self.measurement(FeedField::PackageWeight)
    }

    /// Returns the wire representation as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> =
            self.attributes.iter().map(|(k, v)| (k.clone(), v.to_json())).collect();
        Value::Object(object)
    }

    fn measurement(&self, field: FeedField) -> Option<f64> {
        self.get(field).and_then(AttributeValue::as_f64)
    }
}

/// Named-argument front end for [`ProductData::new`].
///
/// ```rust
/// use sfeed_domain::catalog::ConditionTypeCatalog;
/// use sfeed_product::ProductData;
///
/// let catalog = ConditionTypeCatalog::default();
/// let data = ProductData::builder(&catalog)
///     .condition_type("New")
///     .package_weight(2.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(serde_json::to_string(&data).unwrap(), r#"{"ConditionType":"New","PackageWeight":2.5}"#);
/// ```
#[derive(Debug, Clone)]
pub struct ProductDataBuilder<'a> {
    catalog: &'a ConditionTypeCatalog,
    condition_type: Option<String>,
    package_height: Option<f64>,
    package_width: Option<f64>,
    package_length: Option<f64>,
    package_weight: Option<f64>,
}

impl ProductDataBuilder<'_> {
    #[must_use = "The builder must be built to validate the product data."]
    pub fn condition_type(mut self, value: impl Into<String>) -> Self {
        self.condition_type = Some(value.into());
        self
    }

    #[must_use = "The builder must be built to validate the product data."]
    pub const fn package_height(mut self, value: f64) -> Self {
        self.package_height = Some(value);
        self
    }

    #[must_use = "The builder must be built to validate the product data."]
    pub const fn package_width(mut self, value: f64) -> Self {
        self.package_width = Some(value);
        self
    }

    #[must_use = "The builder must be built to validate the product data."]
    pub const fn package_length(mut self, value: f64) -> Self {
        self.package_length = Some(value);
        self
    }

    #[must_use = "The builder must be built to validate the product data."]
    pub const fn package_weight(mut self, value: f64) -> Self {
        self.package_weight = Some(value);
        self
    }

    /// Validates the collected fields and builds the record.
    ///
    /// # Errors
    /// Same as [`ProductData::new`].
    pub fn build(self) -> Result<ProductData, ProductError> {
        ProductData::new(
            self.catalog,
            self.condition_type.as_deref(),
            self.package_height,
            self.package_width,
            self.package_length,
            self.package_weight,
        )
    }
}

pub(crate) fn validate_condition_type(
    catalog: &ConditionTypeCatalog,
    condition_type: &str,
) -> Result<(), ProductError> {
    if catalog.contains(condition_type) {
        return Ok(());
    }
    debug!(field = %FeedField::ConditionType, value = condition_type, "Rejected condition type");
    Err(ProductError::invalid(FeedField::ConditionType))
}

pub(crate) fn validate_greater_than_zero(field: FeedField, value: f64) -> Result<(), ProductError> {
    if value > 0.0 {
        return Ok(());
    }
    debug!(field = %field, value, "Rejected non-positive measurement");
    Err(ProductError::invalid(field))
}
