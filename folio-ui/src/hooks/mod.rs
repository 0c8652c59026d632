mod viewport;

pub use viewport::use_window_width;
