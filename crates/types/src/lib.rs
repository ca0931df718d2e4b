//! Shared data types and constants for the bucket-tetris workspace.
//!
//! Everything in this crate is plain data with no required dependencies, so it
//! can be used from any context (simulation core, renderers, recording tools).
//! Coordinates are integer cell units with `(0, 0)` at the bottom-left of the
//! bucket and y increasing upward; pieces may legitimately sit above the top
//! row while they descend into view.
//!
//! # Bucket Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the bottom)
//! - **Spawn point**: (4, 20), one row above the visible grid
//!
//! # Timing Constants
//!
//! Timing values are in seconds and consumed as per-frame deltas:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_COOLDOWN` | 0.1 | Delay between accepted horizontal moves |
//! | `ROTATE_COOLDOWN` | 0.2 | Delay between accepted rotations |
//! | `DROP_INTERVAL` | 1.0 | Drop timer reset value after each gravity step |
//! | `FAST_DROP_MIN_STEP` | 0.4 | Minimum drop-timer decrement per frame while soft-dropping |
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SHAPES_PER_LEVEL` | 10 | Piece spawns per level-up |
//! | `LINE_MULTIPLIERS` | [1, 2, 4, 8] | Simultaneous-clear multiplier, indexed by line count - 1 |
//!
//! # Examples
//!
//! ```
//! use bucket_tetris_types::{InputState, Point, Size, BUCKET_WIDTH, BUCKET_HEIGHT};
//!
//! let p = Point::new(3, 7).translated(1, -1);
//! assert_eq!(p, Point::new(4, 6));
//!
//! // Rotating left then right about the same pivot is the identity.
//! let pivot = Point::new(5, 5);
//! assert_eq!(p.rotated_left(pivot).rotated_right(pivot), p);
//!
//! let size = Size::default();
//! assert_eq!((size.width, size.height), (BUCKET_WIDTH, BUCKET_HEIGHT));
//!
//! let input = InputState { move_left: true, ..InputState::none() };
//! assert!(input.move_left && !input.soft_drop);
//! ```

/// Default bucket width in cells (10 columns)
pub const BUCKET_WIDTH: i32 = 10;

/// Default bucket height in cells (20 rows)
pub const BUCKET_HEIGHT: i32 = 20;

/// Delay between accepted horizontal moves while a direction is held (seconds)
pub const MOVE_COOLDOWN: f32 = 0.1;

/// Delay between accepted rotations while a rotate input is held (seconds)
pub const ROTATE_COOLDOWN: f32 = 0.2;

/// Drop timer reset value after each gravity step (seconds)
pub const DROP_INTERVAL: f32 = 1.0;

/// Minimum drop-timer decrement per frame while soft-dropping
///
/// Guarantees a visible fast drop even at level 0, where the level-derived
/// drop speed is far smaller than this floor.
pub const FAST_DROP_MIN_STEP: f32 = 0.4;

/// Piece spawns per level-up (the spawn counter resets when it hits this)
pub const SHAPES_PER_LEVEL: u32 = 10;

/// Simultaneous line-clear multiplier, indexed by `line count - 1`
///
/// Clearing 1/2/3/4 rows in one frame multiplies the per-line score by
/// 1/2/4/8. A single lock can never complete more than four rows.
pub const LINE_MULTIPLIERS: [u32; 4] = [1, 2, 4, 8];

/// An integer position or offset in cell units
///
/// `Point` is a plain `Copy` value; every operation returns a new point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Rotates this point 90° counter-clockwise about `pivot`
    ///
    /// Works in pivot-relative coordinates: `(x, y)` maps to `(-y, x)`, then
    /// the pivot offset is restored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucket_tetris_types::Point;
    ///
    /// let pivot = Point::new(0, 0);
    /// assert_eq!(Point::new(1, 0).rotated_left(pivot), Point::new(0, 1));
    /// assert_eq!(Point::new(0, 1).rotated_left(pivot), Point::new(-1, 0));
    /// ```
    pub const fn rotated_left(self, pivot: Point) -> Self {
        let x = self.x - pivot.x;
        let y = self.y - pivot.y;
        Point {
            x: -y + pivot.x,
            y: x + pivot.y,
        }
    }

    /// Rotates this point 90° clockwise about `pivot`
    ///
    /// The inverse of [`rotated_left`](Self::rotated_left): `(x, y)` maps to
    /// `(y, -x)` in pivot-relative coordinates.
    pub const fn rotated_right(self, pivot: Point) -> Self {
        let x = self.x - pivot.x;
        let y = self.y - pivot.y;
        Point {
            x: y + pivot.x,
            y: -x + pivot.y,
        }
    }
}

/// Bucket dimensions in cells
///
/// Fixed at construction time; [`Size::default`] is the standard 10×20 field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Total cell count, for sizing row-major storage
    pub const fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::new(BUCKET_WIDTH, BUCKET_HEIGHT)
    }
}

/// An RGB color triple
///
/// The simulation only ever assigns the named palette constants below; the
/// renderer is free to map them however it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Color written into the bucket when a piece locks (gold)
pub const WALL_COLOR: Rgb = Rgb::new(255, 215, 0);

/// Falling and preview piece color under normal gravity (royal blue)
pub const DROP_COLOR: Rgb = Rgb::new(65, 105, 225);

/// Falling and preview piece color while soft-dropping (red)
pub const FAST_DROP_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Playfield background color, exposed for renderers (white)
pub const BACK_COLOR: Rgb = Rgb::new(255, 255, 255);

/// A cell in the bucket grid
///
/// - `None`: empty cell
/// - `Some(color)`: locked block with its display color
///
/// Used by the bucket as a flat row-major array of cells.
pub type Cell = Option<Rgb>;

/// Held-input snapshot consumed once per frame
///
/// Each field reports whether the corresponding control is currently held.
/// The state machine applies its own cooldowns on top, so holding a key does
/// not repeat an action every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub soft_drop: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl InputState {
    /// All controls released; same as `Default`, usable in `const` context
    pub const fn none() -> Self {
        InputState {
            move_left: false,
            move_right: false,
            soft_drop: false,
            rotate_left: false,
            rotate_right: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_translation() {
        let p = Point::new(2, 3);
        assert_eq!(p.translated(0, 0), p);
        assert_eq!(p.translated(-5, 2), Point::new(-3, 5));
    }

    #[test]
    fn test_rotation_about_origin() {
        let pivot = Point::new(0, 0);
        // Four left rotations cycle back to the start.
        let p = Point::new(2, 1);
        let once = p.rotated_left(pivot);
        assert_eq!(once, Point::new(-1, 2));
        let back = once
            .rotated_left(pivot)
            .rotated_left(pivot)
            .rotated_left(pivot);
        assert_eq!(back, p);
    }

    #[test]
    fn test_rotation_about_offset_pivot() {
        let pivot = Point::new(4, 20);
        let p = Point::new(6, 20);
        assert_eq!(p.rotated_left(pivot), Point::new(4, 22));
        assert_eq!(p.rotated_right(pivot), Point::new(4, 18));
        assert_eq!(p.rotated_left(pivot).rotated_right(pivot), p);
        // The pivot itself is a fixed point of both rotations.
        assert_eq!(pivot.rotated_left(pivot), pivot);
        assert_eq!(pivot.rotated_right(pivot), pivot);
    }

    #[test]
    fn test_size_defaults() {
        let size = Size::default();
        assert_eq!(size.width, BUCKET_WIDTH);
        assert_eq!(size.height, BUCKET_HEIGHT);
        assert_eq!(size.cell_count(), 200);
    }

    #[test]
    fn test_input_state_none() {
        assert_eq!(InputState::none(), InputState::default());
        assert!(!InputState::none().soft_drop);
    }

    #[test]
    fn test_timing_constants() {
        assert_eq!(MOVE_COOLDOWN, 0.1);
        assert_eq!(ROTATE_COOLDOWN, 0.2);
        assert_eq!(DROP_INTERVAL, 1.0);
        assert_eq!(FAST_DROP_MIN_STEP, 0.4);
        assert_eq!(LINE_MULTIPLIERS, [1, 2, 4, 8]);
    }
}
