use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{components::Page, router::HOME_PATH};

/// Placeholder shown for every path without a registered route.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    let logged_path = path.clone();
    use_hook(move || tracing::warn!("No page found at {}", logged_path));

    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 px-4",
                p { class: "text-2xl",
                    "Page not found"
                }
                p {
                    "Nothing lives at {path}"
                }
                a { href: HOME_PATH, class: "underline decoration-accent decoration-2 underline-offset-8",
                    "Back to Shopper"
                }
            }
        }
    )
}
