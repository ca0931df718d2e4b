use bucket_tetris_types::{Cell, Point, Rgb, Size, DROP_COLOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeView {
    pub blocks: [Point; 4],
    pub color: Rgb,
}

impl ShapeView {
    pub fn empty() -> Self {
        Self {
            blocks: [Point::new(0, 0); 4],
            color: DROP_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSnapshot {
    pub size: Size,
    pub cells: Vec<Cell>,
    pub falling: Option<ShapeView>,
    pub preview: ShapeView,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
}

impl FrameSnapshot {
    pub fn clear(&mut self) {
        self.size = Size::default();
        self.cells.clear();
        self.falling = None;
        self.preview = ShapeView::empty();
        self.score = 0;
        self.level = 0;
        self.high_score = 0;
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            size: Size::default(),
            cells: Vec::new(),
            falling: None,
            preview: ShapeView::empty(),
            score: 0,
            level: 0,
            high_score: 0,
        }
    }
}
