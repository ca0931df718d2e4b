//! Shape templates and the live falling-piece value type
//!
//! The seven templates are fixed at startup. Each is four block offsets
//! around a pivot at the template origin; a live [`Shape`] carries absolute
//! bucket coordinates for its pivot and blocks.
//!
//! | Kind | Blocks (x, y)                  | Rotatable |
//! |------|--------------------------------|-----------|
//! | I    | (-2,0) (-1,0) (0,0) (1,0)      | yes       |
//! | L    | (-1,0) (0,0) (1,0) (1,1)       | yes       |
//! | J    | (-1,0) (0,0) (1,0) (1,-1)      | yes       |
//! | O    | (-1,0) (0,0) (-1,1) (0,1)      | no        |
//! | T    | (-1,0) (0,0) (1,0) (0,1)       | yes       |
//! | S    | (-1,0) (0,0) (0,1) (1,1)       | yes       |
//! | Z    | (0,0) (1,0) (0,1) (-1,1)       | yes       |
//!
//! The O piece is the 2x2 square: every rotation state looks identical, so it
//! is rotation-disabled and rotating it is the identity. Its anchor for
//! positioning is its first block instead of the pivot, which keeps the
//! square's spawn placement one cell right of where a pivot anchor would put
//! it.

use bucket_tetris_types::Point;

/// The seven shape templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    I,
    L,
    J,
    O,
    T,
    S,
    Z,
}

impl ShapeKind {
    /// Every kind, in the fixed template order used for random selection
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Whether rotating this kind produces a distinct shape
    ///
    /// Only the O square is rotation-disabled.
    pub const fn rotatable(self) -> bool {
        !matches!(self, ShapeKind::O)
    }

    /// Block offsets around the template origin
    pub const fn offsets(self) -> [Point; 4] {
        match self {
            ShapeKind::I => [
                Point::new(-2, 0),
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(1, 0),
            ],
            ShapeKind::L => [
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
            ],
            ShapeKind::J => [
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, -1),
            ],
            ShapeKind::O => [
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(-1, 1),
                Point::new(0, 1),
            ],
            ShapeKind::T => [
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
            ],
            ShapeKind::S => [
                Point::new(-1, 0),
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 1),
            ],
            ShapeKind::Z => [
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(-1, 1),
            ],
        }
    }

    /// A live shape at the template origin
    pub const fn template(self) -> Shape {
        Shape {
            kind: self,
            pivot: Point::new(0, 0),
            blocks: self.offsets(),
        }
    }
}

/// A live piece: kind plus absolute pivot and block positions
///
/// `Shape` is a `Copy` value and every operation returns a new shape, so
/// speculative placement (translate, test against the bucket, keep or
/// discard) never needs an undo step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    kind: ShapeKind,
    pivot: Point,
    blocks: [Point; 4],
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The four block positions in bucket coordinates
    pub fn blocks(&self) -> [Point; 4] {
        self.blocks
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// The point `placed_at` aligns with its target: the pivot for rotatable
    /// kinds, the first block otherwise
    fn anchor(&self) -> Point {
        if self.kind.rotatable() {
            self.pivot
        } else {
            self.blocks[0]
        }
    }

    /// Returns this shape shifted by `(dx, dy)`
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Shape {
            kind: self.kind,
            pivot: self.pivot.translated(dx, dy),
            blocks: self.blocks.map(|b| b.translated(dx, dy)),
        }
    }

    /// Returns this shape moved so its anchor lands exactly on `target`
    ///
    /// Used to spawn pieces at the spawn point and to position the preview
    /// piece at its anchor.
    pub fn placed_at(self, target: Point) -> Self {
        let anchor = self.anchor();
        self.translated(target.x - anchor.x, target.y - anchor.y)
    }

    /// Returns this shape rotated 90° counter-clockwise about its pivot
    ///
    /// Identity for a rotation-disabled kind. The pivot never moves.
    pub fn rotated_left(self) -> Self {
        if !self.kind.rotatable() {
            return self;
        }
        Shape {
            kind: self.kind,
            pivot: self.pivot,
            blocks: self.blocks.map(|b| b.rotated_left(self.pivot)),
        }
    }

    /// Returns this shape rotated 90° clockwise about its pivot
    ///
    /// Identity for a rotation-disabled kind.
    pub fn rotated_right(self) -> Self {
        if !self.kind.rotatable() {
            return self;
        }
        Shape {
            kind: self.kind,
            pivot: self.pivot,
            blocks: self.blocks.map(|b| b.rotated_right(self.pivot)),
        }
    }

    pub fn min_x(&self) -> i32 {
        let [a, b, c, d] = &self.blocks;
        a.x.min(b.x).min(c.x).min(d.x)
    }

    pub fn max_x(&self) -> i32 {
        let [a, b, c, d] = &self.blocks;
        a.x.max(b.x).max(c.x).max(d.x)
    }

    pub fn min_y(&self) -> i32 {
        let [a, b, c, d] = &self.blocks;
        a.y.min(b.y).min(c.y).min(d.y)
    }

    pub fn max_y(&self) -> i32 {
        let [a, b, c, d] = &self.blocks;
        a.y.max(b.y).max(c.y).max(d.y)
    }
}
