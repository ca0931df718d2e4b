//! Bucket module - the grid playfield
//!
//! Cells live in a flat row-major array (`y * width + x`) with row 0 at the
//! bottom, so "up" is increasing y. The grid never reallocates: removing a
//! cleared row shifts every row above it down one and empties the top row in
//! place.
//!
//! The space above the top row is open. A freshly spawned piece sits partly
//! above the grid and descends into view, so collision checks ignore blocks
//! at `y >= height` while still rejecting anything below the floor.

use arrayvec::ArrayVec;

use bucket_tetris_types::{Cell, Point, Rgb, Size};

use crate::shape::Shape;

/// The playfield grid
///
/// Owns every cell. Dimensions are fixed at construction;
/// [`Bucket::default`] is the standard 10×20 field.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    size: Size,
    /// Flat row-major cell storage, row 0 first (bottom of the field)
    cells: Vec<Cell>,
}

impl Bucket {
    /// Creates an all-empty bucket
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![None; size.cell_count()],
        }
    }

    /// Flat index of `(x, y)`. In-range coordinates are a caller invariant;
    /// the assertion keeps a wrapped negative coordinate from aliasing a
    /// valid cell in release builds.
    #[inline(always)]
    fn index(&self, p: Point) -> usize {
        assert!(
            p.x >= 0 && p.x < self.size.width && p.y >= 0 && p.y < self.size.height,
            "cell ({}, {}) outside {}x{} bucket",
            p.x,
            p.y,
            self.size.width,
            self.size.height,
        );
        (p.y as usize) * (self.size.width as usize) + (p.x as usize)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Cell at `p`. Precondition: `p` is inside the grid.
    pub fn get(&self, p: Point) -> Cell {
        self.cells[self.index(p)]
    }

    /// Replaces the cell at `p`. Precondition: `p` is inside the grid.
    pub fn set(&mut self, p: Point, cell: Cell) {
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// The whole grid as a flat row-major slice, bottom row first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether every cell in row `y` is occupied; false for out-of-range rows
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.size.height as usize {
            return false;
        }
        let width = self.size.width as usize;
        let start = y * width;
        self.cells[start..start + width].iter().all(|c| c.is_some())
    }

    /// Removes the row at `line` and appends a fresh empty row at the top
    ///
    /// Rows above `line` shift down one; grid size is preserved. Callers
    /// removing several rows from one detection pass must process indices in
    /// descending order so the remaining indices stay valid.
    pub fn drop_line(&mut self, line: usize) {
        let height = self.size.height as usize;
        assert!(line < height, "row {line} outside bucket of height {height}");
        let width = self.size.width as usize;
        self.cells
            .copy_within((line + 1) * width.., line * width);
        for cell in &mut self.cells[(height - 1) * width..] {
            *cell = None;
        }
    }

    /// Full row indices, scanned from the top row down so the result is in
    /// descending order, ready to feed to [`drop_line`](Self::drop_line)
    ///
    /// A lock adds four blocks, so at most four rows can complete at once,
    /// which bounds the list.
    pub fn full_lines(&self) -> ArrayVec<usize, 4> {
        let mut lines = ArrayVec::new();
        for y in (0..self.size.height as usize).rev() {
            if self.is_row_full(y) {
                lines.push(y);
            }
        }
        lines
    }

    /// Collision test for a live shape
    ///
    /// True if any block is below the floor, or any block inside the grid
    /// overlaps an occupied cell. Blocks at `y >= height` never collide.
    /// Block x coordinates are kept in range by the movement and rotation
    /// clamps; the indexing assertion backstops that invariant.
    pub fn collides(&self, shape: &Shape) -> bool {
        shape
            .blocks()
            .iter()
            .any(|&b| b.y < 0 || (b.y < self.size.height && self.get(b).is_some()))
    }

    /// Writes a locked piece's blocks into the grid with the given color
    pub fn lock(&mut self, shape: &Shape, color: Rgb) {
        for b in shape.blocks() {
            self.set(b, Some(color));
        }
    }

    /// Builds a bucket from rows indexed bottom-up (`rows[0]` is row 0)
    #[cfg(test)]
    pub fn from_rows(size: Size, rows: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows.len(), size.height as usize);
        assert!(rows.iter().all(|row| row.len() == size.width as usize));
        Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Fills every cell of row `y` (test shorthand for building line states)
    #[cfg(test)]
    pub fn fill_row(&mut self, y: i32, color: Rgb) {
        for x in 0..self.size.width {
            self.set(Point::new(x, y), Some(color));
        }
    }
}

impl Default for Bucket {
    fn default() -> Self {
        Self::new(Size::default())
    }
}
