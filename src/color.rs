//! Semantic color palette with deprecated numbered accessors.
//!
//! Colors are addressed by semantic name (`blue`, `light_blue`, ...). Six
//! groups also answer to a retired numbering scheme (`blue0`..`blue3`);
//! those reads still return the right value but emit a deprecation warning
//! through the [`crate::diag`] sink on every read.

use serde::Serialize;

use crate::diag::emit_warning;
use crate::util::{darken, format_hex, lighten, shade};

// Base palette literals
const BLACK: &str = "#000";
const WHITE: &str = "#fff";
const TEXT: &str = "#001833";
const LIGHT_BLUE: &str = "#cdf";
const BLUE: &str = "#007aff"; // primary
const DARK_BLUE: &str = "#049";
const LIGHT_GRAY: &str = "#f6f8fa";
const BORDER_GRAY: &str = "#d1d6db";
const GRAY: &str = "#687b8e"; // primary
const DARK_GRAY: &str = "#364049";
const LIGHT_GREEN: &str = "#cec";
const GREEN: &str = "#0a0"; // secondary
const DARK_GREEN: &str = "#060";
const LIGHT_RED: &str = "#fcc";
const RED: &str = "#c00"; // secondary
const DARK_RED: &str = "#800";
const LIGHT_ORANGE: &str = "#feb";
const ORANGE: &str = "#fa0"; // secondary
const DARK_ORANGE: &str = "#a50";
const LIGHT_PURPLE: &str = "#ecf";
const PURPLE: &str = "#70b"; // secondary
const DARK_PURPLE: &str = "#407";

// Section accents for nav and sites
const VISION: &str = "#fc3ba3";
const WORK: &str = "#fce89f";
const JOURNAL: &str = "#9ffca8";
const PROJECTS: &str = "#9ffcf7";
const CONTACT: &str = "#9faefc";
const COLLECTIVE: &str = "#c29ffc";
const SHOP: &str = "#fc9fed";

const PALE_GREY: &str = "#efefef";
const LIGHT_GREY: &str = "rgba(20, 20, 20, 0.1)";
const GREY: &str = "#282a36";
const GREY_RGB: (u8, u8, u8) = (0x28, 0x2a, 0x36);
const VIOLET_RED: &str = "#db7093";
const VIOLET_RED_RGB: (u8, u8, u8) = (0xdb, 0x70, 0x93);
const GOLD_BASE_RGB: (u8, u8, u8) = (243, 182, 97);

/// Groups that still answer to the retired numbering scheme.
const LEGACY_GROUPS: &[&str] = &["blue", "gray", "green", "red", "orange", "purple"];

/// The full semantic palette.
///
/// Derived entries (`dark_grey`, `light_violet_red`, `gold`) are computed
/// once at build time from their base colors; everything else is literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colors {
    pub black: String,
    pub white: String,
    pub text: String,
    pub blue: String,
    pub light_blue: String,
    pub dark_blue: String,
    pub gray: String,
    pub light_gray: String,
    pub border_gray: String,
    pub dark_gray: String,
    pub green: String,
    pub light_green: String,
    pub dark_green: String,
    pub red: String,
    pub light_red: String,
    pub dark_red: String,
    pub orange: String,
    pub light_orange: String,
    pub dark_orange: String,
    pub purple: String,
    pub light_purple: String,
    pub dark_purple: String,
    pub pale_grey: String,
    pub light_grey: String,
    pub dark_grey: String,
    pub grey: String,
    pub violet_red: String,
    pub light_violet_red: String,
    pub gold: String,
    pub vision: String,
    pub work: String,
    pub journal: String,
    pub projects: String,
    pub contact: String,
    pub collective: String,
    pub shop: String,
}

impl Colors {
    /// Builds the palette, computing the derived tints.
    pub fn build() -> Self {
        Self {
            black: BLACK.into(),
            white: WHITE.into(),
            text: TEXT.into(),
            blue: BLUE.into(),
            light_blue: LIGHT_BLUE.into(),
            dark_blue: DARK_BLUE.into(),
            gray: GRAY.into(),
            light_gray: LIGHT_GRAY.into(),
            border_gray: BORDER_GRAY.into(),
            dark_gray: DARK_GRAY.into(),
            green: GREEN.into(),
            light_green: LIGHT_GREEN.into(),
            dark_green: DARK_GREEN.into(),
            red: RED.into(),
            light_red: LIGHT_RED.into(),
            dark_red: DARK_RED.into(),
            orange: ORANGE.into(),
            light_orange: LIGHT_ORANGE.into(),
            dark_orange: DARK_ORANGE.into(),
            purple: PURPLE.into(),
            light_purple: LIGHT_PURPLE.into(),
            dark_purple: DARK_PURPLE.into(),
            pale_grey: PALE_GREY.into(),
            light_grey: LIGHT_GREY.into(),
            dark_grey: format_hex(darken(0.05, GREY_RGB)),
            grey: GREY.into(),
            violet_red: VIOLET_RED.into(),
            light_violet_red: format_hex(lighten(0.27, VIOLET_RED_RGB)),
            gold: format_hex(shade(0.9, GOLD_BASE_RGB)),
            vision: VISION.into(),
            work: WORK.into(),
            journal: JOURNAL.into(),
            projects: PROJECTS.into(),
            contact: CONTACT.into(),
            collective: COLLECTIVE.into(),
            shop: SHOP.into(),
        }
    }

    /// Looks up a color by token name.
    ///
    /// Semantic names resolve directly. Retired numbered names (`blue0`,
    /// `gray2`, ...) resolve through [`Colors::legacy`], which warns on
    /// every read. Unknown names return `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokendeck::Colors;
    ///
    /// let colors = Colors::build();
    /// assert_eq!(colors.get("blue"), Some("#007aff"));
    /// assert_eq!(colors.get("nope"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "black" => &self.black,
            "white" => &self.white,
            "text" => &self.text,
            "blue" => &self.blue,
            "light_blue" => &self.light_blue,
            "dark_blue" => &self.dark_blue,
            "gray" => &self.gray,
            "light_gray" => &self.light_gray,
            "border_gray" => &self.border_gray,
            "dark_gray" => &self.dark_gray,
            "green" => &self.green,
            "light_green" => &self.light_green,
            "dark_green" => &self.dark_green,
            "red" => &self.red,
            "light_red" => &self.light_red,
            "dark_red" => &self.dark_red,
            "orange" => &self.orange,
            "light_orange" => &self.light_orange,
            "dark_orange" => &self.dark_orange,
            "purple" => &self.purple,
            "light_purple" => &self.light_purple,
            "dark_purple" => &self.dark_purple,
            "pale_grey" => &self.pale_grey,
            "light_grey" => &self.light_grey,
            "dark_grey" => &self.dark_grey,
            "grey" => &self.grey,
            "violet_red" => &self.violet_red,
            "light_violet_red" => &self.light_violet_red,
            "gold" => &self.gold,
            "vision" => &self.vision,
            "work" => &self.work,
            "journal" => &self.journal,
            "projects" => &self.projects,
            "contact" => &self.contact,
            "collective" => &self.collective,
            "shop" => &self.shop,
            _ => return self.legacy(name),
        };
        Some(value.as_str())
    }

    /// Resolves a retired numbered color name.
    ///
    /// Each group exposes indices 0..=3 over the shades
    /// `[light, light, base, base]`, a shim for the old numbering scheme.
    /// Every successful read emits a deprecation warning through the
    /// configured sink; the returned value is correct regardless. Unknown
    /// groups and out-of-range indices return `None` without warning.
    pub fn legacy(&self, name: &str) -> Option<&str> {
        let (split, last) = name.char_indices().last()?;
        let index = last.to_digit(10)? as usize;
        let group = &name[..split];
        let shades = self.legacy_shades(group)?;
        if index > 3 {
            return None;
        }

        emit_warning(&format!(
            "numbered color `{}` is deprecated and will be removed in the next \
             theme; use `light_{}`, `{}` or `dark_{}` instead",
            name, group, group, group
        ));
        Some(shades[index])
    }

    /// The `[light, light, base, base]` shade list for a legacy group.
    fn legacy_shades(&self, group: &str) -> Option<[&str; 4]> {
        if !LEGACY_GROUPS.contains(&group) {
            return None;
        }
        let (light, base) = match group {
            "blue" => (&self.light_blue, &self.blue),
            "gray" => (&self.light_gray, &self.gray),
            "green" => (&self.light_green, &self.green),
            "red" => (&self.light_red, &self.red),
            "orange" => (&self.light_orange, &self.orange),
            "purple" => (&self.light_purple, &self.purple),
            _ => return None,
        };
        Some([light, light, base, base])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::set_warning_sink;
    use serial_test::serial;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static WARNINGS: AtomicUsize = AtomicUsize::new(0);

    fn counting_sink(_message: &str) {
        WARNINGS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_semantic_lookup() {
        let colors = Colors::build();
        assert_eq!(colors.get("blue"), Some("#007aff"));
        assert_eq!(colors.get("text"), Some("#001833"));
        assert_eq!(colors.get("shop"), Some("#fc9fed"));
        assert_eq!(colors.get("missing"), None);
    }

    #[test]
    fn test_derived_tints_are_hex() {
        let colors = Colors::build();
        assert!(colors.dark_grey.starts_with('#'));
        assert!(colors.light_violet_red.starts_with('#'));
        assert!(colors.gold.starts_with('#'));
        // Derivation is deterministic
        assert_eq!(colors.dark_grey, Colors::build().dark_grey);
    }

    #[test]
    #[serial(warning_sink)]
    fn test_legacy_indices_map_to_shades() {
        set_warning_sink(|_| {});
        let colors = Colors::build();

        // [light, light, base, base]
        assert_eq!(colors.get("blue0"), colors.get("light_blue"));
        assert_eq!(colors.get("blue1"), colors.get("light_blue"));
        assert_eq!(colors.get("blue2"), colors.get("blue"));
        assert_eq!(colors.get("blue3"), colors.get("blue"));

        assert_eq!(colors.get("purple0"), colors.get("light_purple"));
        assert_eq!(colors.get("red3"), colors.get("red"));
    }

    #[test]
    #[serial(warning_sink)]
    fn test_legacy_read_warns_every_time() {
        WARNINGS.store(0, Ordering::SeqCst);
        set_warning_sink(counting_sink);
        let colors = Colors::build();

        colors.get("green2");
        colors.get("green2");
        colors.get("orange0");
        assert_eq!(WARNINGS.load(Ordering::SeqCst), 3);

        set_warning_sink(|_| {});
    }

    #[test]
    #[serial(warning_sink)]
    fn test_legacy_out_of_range_is_silent_none() {
        WARNINGS.store(0, Ordering::SeqCst);
        set_warning_sink(counting_sink);
        let colors = Colors::build();

        assert_eq!(colors.get("blue4"), None);
        assert_eq!(colors.get("blue9"), None);
        assert_eq!(colors.get("teal0"), None);
        assert_eq!(WARNINGS.load(Ordering::SeqCst), 0);

        set_warning_sink(|_| {});
    }

    #[test]
    #[serial(warning_sink)]
    fn test_warning_names_replacements() {
        static MESSAGE_OK: AtomicUsize = AtomicUsize::new(0);
        set_warning_sink(|message| {
            if message.contains("blue2")
                && message.contains("light_blue")
                && message.contains("dark_blue")
            {
                MESSAGE_OK.fetch_add(1, Ordering::SeqCst);
            }
        });

        Colors::build().get("blue2");
        assert_eq!(MESSAGE_OK.load(Ordering::SeqCst), 1);

        set_warning_sink(|_| {});
    }

    #[test]
    fn test_serialization_has_no_numbered_keys() {
        let json = serde_json::to_value(Colors::build()).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("blue"));
        assert!(object.contains_key("light_blue"));
        assert!(!object.contains_key("blue0"));
        assert!(!object.contains_key("blue2"));
    }
}
