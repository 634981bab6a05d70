pub mod tiling_strategy;
