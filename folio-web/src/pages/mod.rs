mod gallery_demo;
mod preset_index;

pub use gallery_demo::GalleryDemo;
pub use preset_index::PresetIndex;
