mod config;
mod filmstrip;
mod gallery_state;
mod image_hints;
mod viewport;

pub use config::{ConfigError, GalleryConfig};
pub use filmstrip::{Filmstrip, FilmstripFrame, FramePosition};
pub use gallery_state::{GalleryError, GalleryState};
pub use image_hints::{ImageFit, ImageHints};
pub use viewport::Viewport;
