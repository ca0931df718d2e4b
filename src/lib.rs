//! Bucket Tetris (workspace facade crate).
//!
//! This package keeps the `bucket_tetris::{core,types}` public API stable while the
//! implementation lives in dedicated crates under `crates/`.

pub use bucket_tetris_core as core;
pub use bucket_tetris_types as types;
