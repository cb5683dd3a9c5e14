use dioxus::prelude::*;

use crate::client::{
    components::RoutedLayout,
    routes::{Home, NotFound},
};

/// The only path the shell recognises.
pub const HOME_PATH: &str = "/Shopper/UI";

/// Route table. Entries are matched in declaration order, the trailing
/// catch-all renders the not-found placeholder inside the same layout.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RoutedLayout)]

    #[route("/Shopper/UI")]
    Home {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
