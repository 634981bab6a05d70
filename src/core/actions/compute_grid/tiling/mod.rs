pub mod block_strategy;
pub mod factory;
pub mod kinds;
pub mod row_strategy;
