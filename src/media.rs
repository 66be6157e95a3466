//! Responsive helpers derived from the breakpoint scale.

use crate::scale::Scale;

/// Builds the media-query string for a breakpoint width.
///
/// # Example
///
/// ```rust
/// use tokendeck::media_query;
///
/// assert_eq!(media_query("32em"), "@media screen and (min-width:32em)");
/// ```
pub fn media_query(width: &str) -> String {
    format!("@media screen and (min-width:{})", width)
}

/// Wraps a style block in a min-width condition for a breakpoint alias.
///
/// The alias (`sm`, `md`, `lg`, `xl`) resolves through the breakpoint
/// scale's named read path; unknown aliases yield `None`.
///
/// # Example
///
/// ```rust
/// use tokendeck::{wrap_min_width, Scale};
///
/// let breakpoints = Scale::new(vec!["32em".to_string(), "48em".to_string()])
///     .with_aliases(&["sm", "lg"])
///     .unwrap();
///
/// let block = wrap_min_width(&breakpoints, "lg", "display: none;").unwrap();
/// assert_eq!(block, "@media (min-width: 48em) {\ndisplay: none;\n}");
/// assert!(wrap_min_width(&breakpoints, "xs", "").is_none());
/// ```
pub fn wrap_min_width(breakpoints: &Scale<String>, alias: &str, rules: &str) -> Option<String> {
    let width = breakpoints.by_name(alias)?;
    Some(format!("@media (min-width: {}) {{\n{}\n}}", width, rules))
}
