//! Tests for the footer component.

use dioxus::prelude::*;

use crate::client::components::Footer;

/// Tests rendering the footer with no props or context.
///
/// Expected: a fixed footer bar spanning the viewport width
#[test]
fn renders_without_props() {
    let html = dioxus_ssr::render_element(rsx! { Footer {} });

    assert!(html.starts_with("<footer"));
    assert!(html.contains("fixed bottom-0 w-full"));
}

/// Tests that the footer carries the icon glyphs.
///
/// Expected: one svg per icon
#[test]
fn renders_icons() {
    let html = dioxus_ssr::render_element(rsx! { Footer {} });

    assert_eq!(html.matches("<svg").count(), 3);
    for title in ["Email", "GitHub", "LinkedIn"] {
        assert!(html.contains(&format!("title=\"{}\"", title)));
    }
}
