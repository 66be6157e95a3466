//! Static design-token theme tables.
//!
//! tokendeck defines one immutable theme record — colors, spacing,
//! typography, breakpoints, shadows, timing curves — for styling layers to
//! read. There is no runtime theming engine; the record is assembled once
//! from literal data and shared process-wide.
//!
//! The building blocks:
//!
//! - [`Scale`]: an ordered token progression with named position aliases
//!   (`sm`, `md`, `lg`, `xl`). Aliases are a secondary read path and never
//!   show up in iteration or serialized output.
//! - [`Colors`]: the semantic palette, including retired numbered names
//!   that still resolve but warn through a swappable diagnostics sink.
//! - [`Theme`]: the aggregate record, available as a shared snapshot via
//!   [`theme`].
//!
//! # Example
//!
//! ```rust
//! use tokendeck::theme;
//!
//! let theme = theme();
//! assert_eq!(theme.breakpoints.by_name("sm"), Some(&"32em".to_string()));
//! assert_eq!(theme.space[2], 8);
//! assert_eq!(theme.colors.get("blue"), Some("#007aff"));
//!
//! let responsive = theme.media_wrap("md", "font-size: 16px;").unwrap();
//! assert!(responsive.starts_with("@media (min-width: 40em)"));
//! ```

mod color;
mod diag;
mod media;
mod scale;
mod theme;
mod util;

pub use color::Colors;
pub use diag::{set_warning_sink, WarningSink};
pub use media::{media_query, wrap_min_width};
pub use scale::{Scale, ScaleError};
pub use theme::{
    theme, Durations, FontWeights, Fonts, LetterSpacings, Sizes, SpecialSizes, Theme,
    TimingFunctions, BOLD, REGULAR,
};
pub use util::{darken, format_hex, lighten, parse_hex, shade};
