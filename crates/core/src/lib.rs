//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, windowing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for per-frame processing
//!
//! # Module Structure
//!
//! - [`bucket`]: 10x20 playfield with collision detection and line removal
//! - [`shape`]: The seven shape templates, translation, and pivot rotation
//! - [`session`]: Frame-stepped state machine plus the high-score manager
//! - [`rng`]: Seedable linear congruential generator for the piece sequence
//! - [`scoring`]: Lock bonuses, line-clear scoring, and the gravity curve
//! - [`snapshot`]: Render-ready frame state handed across the draw boundary
//!
//! # Game Rules
//!
//! This implementation follows the classic bucket rules:
//!
//! - **Uniform Randomizer**: Every spawn draws any of the seven shapes with equal chance
//! - **Pivot Rotation**: Quarter turns around each shape's pivot block; the square never turns
//! - **Wall Clamp**: A rotation hanging past a side wall is shunted back inside; there are no kicks
//! - **Input Cooldowns**: Held keys repeat on fixed timers, 0.1s for moves and 0.2s for rotations
//! - **Contact Locking**: A piece settles the instant a gravity step is blocked
//! - **Level Curve**: Every tenth spawn raises the level and steepens gravity logarithmically
//!
//! # Example
//!
//! ```
//! use bucket_tetris_core::Game;
//! use bucket_tetris_core::types::{InputState, Size};
//!
//! // Create a game and soft-drop the first piece to the floor
//! let mut game = Game::new(Size::default(), 12345);
//! let input = InputState {
//!     soft_drop: true,
//!     ..InputState::none()
//! };
//! for _ in 0..120 {
//!     game.update(1.0 / 60.0, &input);
//! }
//!
//! // The first lock has been scored by now
//! assert!(game.snapshot().score > 0);
//! ```
//!
//! # Timing
//!
//! The simulation is driven by elapsed wall time, not a fixed tick:
//!
//! - **Drop Interval**: 1.0s of drained gravity budget per row
//! - **Gravity Drain**: `dt * (1 + ln(2 * level + 1))` per frame
//! - **Soft Drop**: Drains at least 0.4s per frame while held
//! - **Cooldowns**: 0.1s between moves, 0.2s between rotations
//!
//! Call [`Game::update`](session::Game::update) every frame with the elapsed
//! seconds and the currently held inputs, then read
//! [`Game::snapshot_into`](session::Game::snapshot_into) to draw.

pub mod bucket;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use bucket_tetris_types as types;

// Re-export commonly used types for convenience
pub use bucket::Bucket;
pub use rng::SimpleRng;
pub use scoring::{drop_speed, fast_drop_step, line_clear_score, lock_bonus};
pub use session::{preview_anchor, spawn_point, Game, Session};
pub use shape::{Shape, ShapeKind};
pub use snapshot::{FrameSnapshot, ShapeView};
