//! External contract of the aggregated theme record.

use serial_test::serial;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokendeck::{set_warning_sink, theme, Theme};

#[test]
fn breakpoint_aliases_match_positions() {
    let theme = theme();
    assert_eq!(theme.breakpoints.by_name("sm").unwrap(), "32em");
    assert_eq!(theme.breakpoints.by_name("sm"), theme.breakpoints.get(0));
    assert_eq!(
        theme.media_queries.by_name("lg").unwrap(),
        "@media screen and (min-width:48em)"
    );
}

#[test]
fn serialized_scales_carry_values_only() {
    let json = serde_json::to_value(theme()).unwrap();

    let breakpoints = json["breakpoints"].as_array().unwrap();
    assert_eq!(breakpoints.len(), 4);
    assert_eq!(breakpoints[0], "32em");

    let space = json["space"].as_array().unwrap();
    assert_eq!(space.len(), 7);

    // Alias names never appear as entries
    assert!(json["breakpoints"].get("sm").is_none());
    assert!(json["colors"].get("blue0").is_none());
}

#[test]
#[serial(warning_sink)]
fn legacy_colors_resolve_with_warning() {
    static WARNINGS: AtomicUsize = AtomicUsize::new(0);
    WARNINGS.store(0, Ordering::SeqCst);
    set_warning_sink(|_| {
        WARNINGS.fetch_add(1, Ordering::SeqCst);
    });

    let colors = &theme().colors;
    assert_eq!(colors.get("blue0"), colors.get("light_blue"));
    assert_eq!(colors.get("blue2"), colors.get("blue"));
    assert_eq!(colors.get("gray1"), colors.get("light_gray"));

    // One warning per read, including repeats
    assert_eq!(WARNINGS.load(Ordering::SeqCst), 3);
    colors.get("blue0");
    assert_eq!(WARNINGS.load(Ordering::SeqCst), 4);

    set_warning_sink(|_| {});
}

#[test]
fn header_font_is_derived_from_body_stack() {
    let fonts = &theme().fonts;
    assert_eq!(
        fonts.header_font(),
        format!("\"Avenir Next\", {}", fonts.body_font)
    );
}

#[test]
fn rebuilding_yields_equal_records() {
    assert_eq!(Theme::build(), Theme::build());
    assert_eq!(*theme(), Theme::build());
}
