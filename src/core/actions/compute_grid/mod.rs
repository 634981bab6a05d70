pub mod compute_grid;
pub mod ports;
pub mod symmetry;
pub mod tiling;
