//! External feed field names.
//!
//! These strings are used both as internal attribute keys and as wire field names,
//! so they must never change.

pub const FEED_CONDITION_TYPE: &str = "ConditionType";
pub const FEED_PACKAGE_WEIGHT: &str = "PackageWeight";
pub const FEED_PACKAGE_HEIGHT: &str = "PackageHeight";
pub const FEED_PACKAGE_WIDTH: &str = "PackageWidth";
pub const FEED_PACKAGE_LENGTH: &str = "PackageLength";

/// Condition types accepted by the marketplace when no catalog is configured.
pub const DEFAULT_CONDITION_TYPES: &[&str] = &["New", "Used", "Refurbished"];
