//! Facade crate for the feed model.
//! Re-exports domain/kernel primitives and the product data slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use sfeed_domain as domain;
pub use sfeed_kernel as kernel;
pub use sfeed_product as product;

use sfeed_domain::catalog::ConditionTypeCatalog;
use sfeed_domain::config::FeedConfig;

/// Commonly used items for feed producers.
pub mod prelude {
    pub use sfeed_domain::catalog::ConditionTypeCatalog;
    pub use sfeed_domain::config::FeedConfig;
    pub use sfeed_domain::field::FeedField;
    pub use sfeed_product::{AttributeValue, ProductData, ProductError, ProductErrorExt};
}

/// Builds the condition-type catalog configured for this deployment.
#[must_use]
pub fn catalog(config: &FeedConfig) -> ConditionTypeCatalog {
    ConditionTypeCatalog::from(&config.catalog)
}
