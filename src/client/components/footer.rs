use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedinIn};
use dioxus_free_icons::icons::fa_solid_icons::FaEnvelope;
use dioxus_free_icons::Icon;

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer {
            class: "fixed bottom-0 w-full bg-footer text-text",
            div {
                class: "flex h-15 flex-col items-center justify-center sm:justify-between px-4 sm:px-6 lg:px-10 sm:flex-row",
                ul { class: "flex gap-4",
                    li { title: "Email",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaEnvelope
                        }
                    }
                    li { title: "GitHub",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaGithub
                        }
                    }
                    li { title: "LinkedIn",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaLinkedinIn
                        }
                    }
                }
            }
        }
    )
}
