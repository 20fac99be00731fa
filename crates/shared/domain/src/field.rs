use crate::constants::{
    FEED_CONDITION_TYPE, FEED_PACKAGE_HEIGHT, FEED_PACKAGE_LENGTH, FEED_PACKAGE_WEIGHT,
    FEED_PACKAGE_WIDTH,
};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// A first-class product data field: individually validated and known by name.
///
/// The string form of every variant is its wire field name, so
/// `FeedField::PackageWeight.as_ref() == "PackageWeight"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum FeedField {
    ConditionType,
    PackageHeight,
    PackageWidth,
    PackageLength,
    PackageWeight,
}

impl FeedField {
    /// Returns the wire field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConditionType => FEED_CONDITION_TYPE,
            Self::PackageHeight => FEED_PACKAGE_HEIGHT,
            Self::PackageWidth => FEED_PACKAGE_WIDTH,
            Self::PackageLength => FEED_PACKAGE_LENGTH,
            Self::PackageWeight => FEED_PACKAGE_WEIGHT,
        }
    }

    /// Looks up a first-class field by its exact wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Whether the field carries a physical measurement that must be strictly positive.
    #[must_use]
    pub const fn is_measurement(self) -> bool {
        !matches!(self, Self::ConditionType)
    }
}
