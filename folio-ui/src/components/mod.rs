//! Gallery components

pub mod button;
pub mod filmstrip;
pub mod gallery;
pub mod icons;
pub mod lightbox;
pub mod modal;
pub mod thumbnail_grid;

pub use button::{ChromelessButton, CloseButton, NavButton, NavDirection};
pub use filmstrip::FilmstripView;
pub use gallery::GalleryWidget;
pub use icons::{ChevronLeftIcon, ChevronRightIcon, ImageIcon, XIcon};
pub use lightbox::GalleryLightbox;
pub use modal::Modal;
pub use thumbnail_grid::ThumbnailGrid;
