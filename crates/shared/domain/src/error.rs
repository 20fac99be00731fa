//! Helpers shared by the error enums of the feed crates.

use std::borrow::Cow;

/// Renders an optional error context as a ` (context)` suffix, or nothing.
///
/// Used from `#[error(...)]` attributes: `#[error("Config error{}: {source}", format_context(.context))]`.
#[allow(clippy::ref_option)]
#[must_use]
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
