//! Buttons used by the gallery overlay

use dioxus::prelude::*;

use super::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::layout;

/// Unstyled button: keeps the accessible label and swallows the click so it
/// never reaches the modal backdrop.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default)] style: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            style: style.as_deref(),
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onclick.call(e);
            },
            {children}
        }
    }
}

/// Direction a navigation button steps in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Full-height button flanking the large image
#[component]
pub fn NavButton(direction: NavDirection, onclick: EventHandler<()>) -> Element {
    let label = match direction {
        NavDirection::Previous => "Previous image",
        NavDirection::Next => "Next image",
    };

    rsx! {
        ChromelessButton {
            class: Some(
                "h-full w-full flex items-center justify-center text-gray-400 hover:text-white hover:bg-gray-700/40 rounded-lg transition-colors"
                    .to_string(),
            ),
            style: Some(layout::NAV_BUTTON.to_string()),
            aria_label: Some(label.to_string()),
            onclick: move |_| onclick.call(()),
            match direction {
                NavDirection::Previous => rsx! {
                    ChevronLeftIcon { class: "w-8 h-8", stroke_width: "1.5" }
                },
                NavDirection::Next => rsx! {
                    ChevronRightIcon { class: "w-8 h-8", stroke_width: "1.5" }
                },
            }
        }
    }
}

/// Close control in the overlay's top-right corner
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        ChromelessButton {
            class: Some("p-2 -mr-2 text-gray-400 hover:text-white transition-colors".to_string()),
            style: Some(
                "width: 40px; height: 40px; background: transparent; border: none; cursor: pointer;"
                    .to_string(),
            ),
            aria_label: Some("close".to_string()),
            onclick: move |_| onclick.call(()),
            XIcon { class: "w-6 h-6" }
        }
    }
}
