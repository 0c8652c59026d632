//! folio-ui - Dioxus components for the folio image gallery
//!
//! The view state and all index arithmetic live in `folio-common`; this crate
//! only wires that state to DOM events and renders it.

pub mod components;
pub mod hooks;
pub mod layout;
pub mod wasm_utils;

pub use components::*;
pub use folio_common::{GalleryConfig, GalleryState, Viewport};
pub use hooks::use_window_width;
