//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns a row of `=` as wide as the rendered value.
///
/// Usage in text templates: `{{ view.heading|underline }}`
#[askama::filter_fn]
pub fn underline(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok("=".repeat(value.to_string().chars().count()))
}

/// Renders the cart count badge for the text nav bar.
///
/// Usage in text templates: `{{ nav.cart_count|badge }}`
#[askama::filter_fn]
pub fn badge(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("({count})"))
}
