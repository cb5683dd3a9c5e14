//! Tests for the not-found placeholder.

use dioxus::prelude::*;

use crate::client::{router::HOME_PATH, routes::NotFound};

/// Tests that the placeholder names the requested path.
///
/// Expected: message and path in the output
#[test]
fn names_requested_path() {
    let segments = vec!["random".to_string(), "page".to_string()];
    let html = dioxus_ssr::render_element(rsx! { NotFound { segments: segments } });

    assert!(html.contains("Page not found"));
    assert!(html.contains("/random/page"));
}

/// Tests that the placeholder links back to the home path.
///
/// Expected: an anchor pointing at the home path
#[test]
fn links_to_home() {
    let html = dioxus_ssr::render_element(rsx! { NotFound { segments: Vec::new() } });

    assert!(html.contains(&format!("href=\"{}\"", HOME_PATH)));
}
