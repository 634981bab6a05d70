pub mod block_tiles;
