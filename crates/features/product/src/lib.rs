//! # Product Data
//!
//! Validated, sparse attribute record embedded in marketplace product feeds.
//!
//! ## Model
//!
//! [`ProductData`] holds up to five first-class attributes, each optional:
//!
//! * `ConditionType`: must be a member of the injected [`ConditionTypeCatalog`].
//! * `PackageHeight`, `PackageWidth`, `PackageLength`, `PackageWeight`: must be strictly
//!   greater than zero.
//!
//! Validation runs only when the record is built ([`ProductData::new`],
//! [`ProductData::builder`], [`ProductData::from_wire`]). After that the record is
//! append-only through [`ProductData::add`]: the first value written under a key wins and
//! later writes are ignored. `add` never validates, even for first-class names.
//!
//! ## Wire shape
//!
//! Serialization produces a flat JSON object keyed by the stored attribute names in
//! insertion order:
//!
//! ```rust
//! use sfeed_product::{ConditionTypeCatalog, ProductData};
//!
//! let catalog = ConditionTypeCatalog::default();
//! let mut data = ProductData::new(&catalog, Some("New"), None, None, None, Some(2.5))?;
//! data.add("Color", "Blue");
//!
//! assert_eq!(
//!     serde_json::to_string(&data)?,
//!     r#"{"ConditionType":"New","PackageWeight":2.5,"Color":"Blue"}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod data;
mod error;
pub mod value;
mod wire;

pub use crate::data::{ProductData, ProductDataBuilder};
pub use crate::error::{ProductError, ProductErrorExt};
pub use crate::value::AttributeValue;
pub use sfeed_domain::catalog::ConditionTypeCatalog;
pub use sfeed_domain::field::FeedField;
