//! folio demo - Web app for trying the gallery widget
//!
//! Renders `GalleryWidget` over fixture images. The control panel state lives
//! in the URL so any configuration can be linked to directly.

pub mod demo_data;
pub mod pages;
pub mod url_state;

use dioxus::prelude::*;
use pages::{GalleryDemo, PresetIndex};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    PresetIndex {},
    #[route("/gallery?:state")]
    GalleryDemo { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
