use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::config::Config;

/// Home region. Reserved for content, currently renders an empty container.
#[component]
pub fn Home() -> Element {
    let title = try_use_context::<Config>().unwrap_or_default().title;

    rsx!(
        Title { "{title}" }
        Page {
            div { class: "mx-auto max-w-9/10 space-y-16 px-4 sm:px-20" }
        }
    )
}
