use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        section {
            class: "min-h-screen w-full pt-20 pb-16 {class}",
            {children}
        }
    )
}
