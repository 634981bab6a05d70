pub mod compute_grid;
