pub mod aligned_buffer;
pub mod complex;
pub mod complex_rect;
pub mod escape_grid;
pub mod viewport;
