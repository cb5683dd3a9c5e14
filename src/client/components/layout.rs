use dioxus::prelude::*;

use crate::client::{components::Footer, router::Route};

/// Wraps page content with the persistent chrome: content on top, footer
/// pinned to the bottom of the viewport.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div { class: "flex min-h-screen flex-col bg-background text-text",
            main { class: "flex-1",
                {children}
            }
            Footer {}
        }
    }
}

/// Layout mounted by the router, rendering the active route as content.
#[component]
pub fn RoutedLayout() -> Element {
    rsx! {
        Layout {
            Outlet::<Route> {}
        }
    }
}
