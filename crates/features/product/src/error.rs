use sfeed_domain::error::format_context;
use sfeed_domain::field::FeedField;
use std::borrow::Cow;

/// Error types specific to product data.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// A first-class field was given a value outside its domain.
    #[error("Invalid domain value for {field}{}", format_context(.context))]
    InvalidDomain { field: FeedField, context: Option<Cow<'static, str>> },

    /// Serde (de)serialization error with optional context.
    #[error("Serde serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal product data error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ProductError {
    /// Creates an [`ProductError::InvalidDomain`] without context.
    #[must_use]
    pub const fn invalid(field: FeedField) -> Self {
        Self::InvalidDomain { field, context: None }
    }

    /// The offending first-class field, if this is a domain error.
    #[must_use]
    pub const fn field(&self) -> Option<FeedField> {
        match self {
            Self::InvalidDomain { field, .. } => Some(*field),
            Self::Serialize { .. } | Self::Internal { .. } => None,
        }
    }
}

pub trait ProductErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ProductError>;
}

impl<T> ProductErrorExt<T> for Result<T, ProductError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ProductError::InvalidDomain { context: c, .. }
                | ProductError::Serialize { context: c, .. }
                | ProductError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<serde_json::Error> for ProductError {
    #[inline]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize { source, context: None }
    }
}

impl From<&'static str> for ProductError {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(message), context: None }
    }
}

impl From<String> for ProductError {
    #[inline]
    fn from(message: String) -> Self {
        Self::Internal { message: Cow::Owned(message), context: None }
    }
}

impl<T> ProductErrorExt<T> for Result<T, serde_json::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ProductError> {
        self.map_err(|source| ProductError::Serialize { source, context: Some(context.into()) })
    }
}
