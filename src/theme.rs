//! The aggregated theme record.
//!
//! [`Theme::build`] assembles every scale, alias table and constant into a
//! single immutable snapshot. [`theme`] exposes a process-wide copy behind a
//! single-initialization guard; consumers read it, nobody writes it.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::color::Colors;
use crate::media::{media_query, wrap_min_width};
use crate::scale::Scale;

/// Regular font weight.
pub const REGULAR: u16 = 400;
/// Bold font weight.
pub const BOLD: u16 = 600;

const BREAKPOINT_EMS: [u16; 4] = [32, 40, 48, 64];
const BREAKPOINT_ALIASES: [&str; 4] = ["sm", "md", "lg", "xl"];

const FONT: &str = "'Montserrat','Helvetica Neue',Helvetica,Arial,sans-serif";
const BODY_FONT: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, \
                         Arial, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \
                         \"Segoe UI Symbol\"";
const MONOSPACE: &str = "\"Operator Mono SSm A\", \"Operator Mono SSm B\", monospace";

/// Named font weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontWeights {
    pub regular: u16,
    pub bold: u16,
}

/// Named letter-spacing values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterSpacings {
    pub normal: String,
    pub caps: String,
}

/// Animation durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Durations {
    pub fast: u32,
    pub normal: u32,
    pub slow: u32,
    pub slowest: u32,
}

/// Easing curves as CSS cubic-bezier strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingFunctions {
    pub ease_in_out: String,
    pub ease_out: String,
    pub ease_in: String,
}

/// Fixed component dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialSizes {
    pub sidebar_width: u16,
    pub navbar_height: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sizes {
    pub special: SpecialSizes,
}

/// Font stacks, with the header stack derived on read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fonts {
    pub font: String,
    pub body_font: String,
    pub monospace: String,
}

impl Fonts {
    /// The header stack: a fixed display face ahead of the body stack.
    ///
    /// Computed on each read rather than stored, so it tracks `body_font`
    /// on mutable copies.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokendeck::theme;
    ///
    /// let fonts = &theme().fonts;
    /// assert!(fonts.header_font().starts_with("\"Avenir Next\", "));
    /// ```
    pub fn header_font(&self) -> String {
        format!("\"Avenir Next\", {}", self.body_font)
    }
}

/// The full design-token record.
///
/// Built once from literal data, equal across rebuilds, and treated as
/// read-only shared state by every consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub breakpoints: Scale<String>,
    pub media_queries: Scale<String>,
    pub space: Scale<u16>,
    pub font: String,
    pub font_sizes: Scale<u16>,
    pub font_weights: FontWeights,
    pub letter_spacings: LetterSpacings,
    pub regular: u16,
    pub bold: u16,
    pub colors: Colors,
    pub radii: Scale<u16>,
    pub radius: String,
    pub box_shadows: Scale<String>,
    pub max_container_width: String,
    pub duration: Durations,
    pub timing_functions: TimingFunctions,
    pub sizes: Sizes,
    pub line_heights: Scale<f32>,
    pub borders: Scale<String>,
    pub shadows: Scale<String>,
    pub fonts: Fonts,
}

impl Theme {
    /// Assembles the record from primitive literal data.
    ///
    /// Pure and idempotent: no entry depends on runtime state, and building
    /// twice yields equal records.
    pub fn build() -> Self {
        let colors = Colors::build();

        let breakpoints = Scale::new(
            BREAKPOINT_EMS.iter().map(|n| format!("{}em", n)).collect(),
        )
        .with_aliases(&BREAKPOINT_ALIASES)
        .expect("four aliases fit four breakpoints");

        let media_queries = breakpoints.map(|width| media_query(width));

        let shadows = Scale::new(vec![
            format!("0 1px 2px 0 {}", colors.text),
            format!("0 1px 4px 0 {}", colors.text),
        ]);

        Self {
            media_queries,
            breakpoints,
            space: Scale::new(vec![0, 4, 8, 16, 32, 64, 128]),
            font: FONT.into(),
            font_sizes: Scale::new(vec![12, 14, 16, 20, 24, 32, 48]),
            font_weights: FontWeights {
                regular: REGULAR,
                bold: BOLD,
            },
            letter_spacings: LetterSpacings {
                normal: "normal".into(),
                caps: "0.025em".into(),
            },
            regular: REGULAR,
            bold: BOLD,
            colors,
            radii: Scale::new(vec![0, 2, 6]),
            radius: "2px".into(),
            box_shadows: Scale::new(vec![
                "0 0 2px 0 rgba(0,0,0,.08),0 1px 4px 0 rgba(0,0,0,.16)".into(),
                "0 0 2px 0 rgba(0,0,0,.08),0 2px 8px 0 rgba(0,0,0,.16)".into(),
                "0 0 2px 0 rgba(0,0,0,.08),0 4px 16px 0 rgba(0,0,0,.16)".into(),
                "0 0 2px 0 rgba(0,0,0,.08),0 8px 32px 0 rgba(0,0,0,.16)".into(),
            ]),
            max_container_width: "1280px".into(),
            duration: Durations {
                fast: 150,
                normal: 300,
                slow: 450,
                slowest: 600,
            },
            timing_functions: TimingFunctions {
                ease_in_out: "cubic-bezier(0.5, 0, 0.25, 1)".into(),
                ease_out: "cubic-bezier(0, 0, 0.25, 1)".into(),
                ease_in: "cubic-bezier(0.5, 0, 1, 1)".into(),
            },
            sizes: Sizes {
                special: SpecialSizes {
                    sidebar_width: 300,
                    navbar_height: 50,
                },
            },
            line_heights: Scale::new(vec![1.0, 1.125, 1.25, 1.5]),
            borders: Scale::new(vec!["0".into(), "1px solid".into(), "2px solid".into()]),
            shadows,
            fonts: Fonts {
                font: FONT.into(),
                body_font: BODY_FONT.into(),
                monospace: MONOSPACE.into(),
            },
        }
    }

    /// Wraps a style block in a min-width condition for a breakpoint alias.
    ///
    /// See [`wrap_min_width`]. Unknown aliases yield `None`.
    pub fn media_wrap(&self, alias: &str, rules: &str) -> Option<String> {
        wrap_min_width(&self.breakpoints, alias, rules)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::build()
    }
}

/// The process-wide theme record.
///
/// Constructed on first access behind a single-initialization guard and
/// never mutated afterwards. All call sites share the same snapshot.
pub fn theme() -> &'static Theme {
    static THEME: Lazy<Theme> = Lazy::new(Theme::build);
    &THEME
}
