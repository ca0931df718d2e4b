//! Session module - the per-frame state machine and the session manager
//!
//! [`Session`] advances one game: spawn, maneuvering under cooldowns,
//! gravity, locking, line scoring, and the terminal jam at the top.
//! [`Game`] wraps a session with the process-wide high score: when a session
//! ends, the manager folds the final score into the high score and starts a
//! fresh session that carries the RNG sequence forward, so back-to-back
//! games never replay the same piece order.
//!
//! Frame order inside [`Session::update`]:
//! 1. Clear and score rows completed by the previous frame's lock
//! 2. Both cooldowns tick down
//! 3. The soft-drop flag refreshes from input
//! 4. The drop timer drains by the level-derived gravity step
//! 5. Spawn when no piece is live; otherwise handle at most one horizontal
//!    move and one rotation
//! 6. Gravity: step down, settle on contact, or end the session when the
//!    jammed piece still pokes past the top row
//!
//! A spawned piece starts partly above the visible grid and the drop timer
//! keeps draining through spawn frames, so a spawn and its first gravity
//! step can land on the same frame.

use bucket_tetris_types::{
    InputState, Point, Size, DROP_COLOR, DROP_INTERVAL, FAST_DROP_COLOR, MOVE_COOLDOWN,
    ROTATE_COOLDOWN, SHAPES_PER_LEVEL, WALL_COLOR,
};

use crate::bucket::Bucket;
use crate::rng::SimpleRng;
use crate::scoring::{drop_speed, fast_drop_step, line_clear_score, lock_bonus};
use crate::shape::Shape;
use crate::snapshot::{FrameSnapshot, ShapeView};

/// Where a new piece's anchor lands: centered, one row above the grid
pub fn spawn_point(size: Size) -> Point {
    Point::new(size.width / 2 - 1, size.height)
}

/// Where the preview piece is shown: right of the spawn, above the rim
pub fn preview_anchor(size: Size) -> Point {
    Point::new(size.width / 2 + 2, size.height + 1)
}

/// One game from empty bucket to game over
#[derive(Debug, Clone)]
pub struct Session {
    bucket: Bucket,
    rng: SimpleRng,
    current: Option<Shape>,
    next: Shape,
    shape_count: u32,
    level: u32,
    score: u32,
    move_cooldown: f32,
    rotate_cooldown: f32,
    time_until_drop: f32,
    fast_drop: bool,
    game_over: bool,
    spawn_point: Point,
}

impl Session {
    /// Creates a fresh session: empty bucket, no live piece, and the first
    /// preview piece already drawn and positioned at the spawn point
    pub fn new(size: Size, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let spawn = spawn_point(size);
        let next = rng.next_kind().template().placed_at(spawn);
        Self {
            bucket: Bucket::new(size),
            rng,
            current: None,
            next,
            shape_count: 0,
            level: 0,
            score: 0,
            move_cooldown: 0.0,
            rotate_cooldown: 0.0,
            time_until_drop: DROP_INTERVAL,
            fast_drop: false,
            game_over: false,
            spawn_point: spawn,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Pieces spawned since the last level-up
    pub fn shape_count(&self) -> u32 {
        self.shape_count
    }

    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }

    /// The live falling piece; absent between a lock and the next spawn
    pub fn current(&self) -> Option<Shape> {
        self.current
    }

    /// The upcoming piece, positioned at the spawn point
    pub fn next(&self) -> Shape {
        self.next
    }

    /// Whether soft drop was held on the most recent frame
    pub fn fast_drop(&self) -> bool {
        self.fast_drop
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    /// Advances the session by one frame
    ///
    /// `dt` is the elapsed time since the previous frame in seconds; `input`
    /// is the held state of the five controls for this frame. A session that
    /// has ended ignores further updates.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if self.game_over {
            return;
        }

        self.clear_full_lines();

        self.move_cooldown -= dt;
        self.rotate_cooldown -= dt;
        self.fast_drop = input.soft_drop;
        self.time_until_drop -= if self.fast_drop {
            fast_drop_step(dt, self.level)
        } else {
            drop_speed(dt, self.level)
        };

        // A spawn frame consumes the whole frame: no moves or rotations.
        match self.current {
            None => self.spawn(),
            Some(_) => {
                self.handle_movement(input);
                self.handle_rotation(input);
            }
        }

        self.apply_gravity();
    }

    /// Scores and removes rows completed by the previous frame's lock
    ///
    /// Detection runs on one clean pass before any removal; the descending
    /// index order keeps every later `drop_line` index valid.
    fn clear_full_lines(&mut self) {
        let lines = self.bucket.full_lines();
        if lines.is_empty() {
            return;
        }
        self.score += line_clear_score(lines.len(), self.bucket.size().width, self.level);
        for &line in &lines {
            self.bucket.drop_line(line);
        }
    }

    /// Promotes the preview piece to live and draws a new preview
    fn spawn(&mut self) {
        self.current = Some(self.next);
        self.next = self.rng.next_kind().template().placed_at(self.spawn_point);
        self.shape_count += 1;
        if self.shape_count == SHAPES_PER_LEVEL {
            self.level += 1;
            self.shape_count = 0;
        }
    }

    /// At most one horizontal step per frame; left wins when both are held.
    /// The wall checks keep every x in range before the collision test
    /// indexes any cell.
    fn handle_movement(&mut self, input: &InputState) {
        if self.move_cooldown > 0.0 {
            return;
        }
        let Some(shape) = self.current else { return };
        if input.move_left {
            if shape.min_x() > 0 {
                self.commit_move(shape.translated(-1, 0));
            }
        } else if input.move_right {
            if shape.max_x() < self.bucket.size().width - 1 {
                self.commit_move(shape.translated(1, 0));
            }
        }
    }

    /// Commits a horizontal step unless it collides. Only a committed step
    /// arms the cooldown, so a blocked move retries on the next frame.
    fn commit_move(&mut self, moved: Shape) {
        if !self.bucket.collides(&moved) {
            self.current = Some(moved);
            self.move_cooldown = MOVE_COOLDOWN;
        }
    }

    /// At most one rotation per frame; rotate-left wins when both are held.
    /// A rotation that still collides after wall clamping is silently
    /// dropped and leaves the cooldown untouched. Rotating the square is a
    /// committed no-op, so it arms the cooldown like any other rotation.
    fn handle_rotation(&mut self, input: &InputState) {
        if self.rotate_cooldown > 0.0 {
            return;
        }
        let Some(shape) = self.current else { return };
        let rotated = if input.rotate_left {
            shape.rotated_left()
        } else if input.rotate_right {
            shape.rotated_right()
        } else {
            return;
        };
        let clamped = self.clamped_to_walls(rotated);
        if !self.bucket.collides(&clamped) {
            self.current = Some(clamped);
            self.rotate_cooldown = ROTATE_COOLDOWN;
        }
    }

    /// Shunts a rotated shape back inside the side walls. Both clamps run
    /// sequentially on the running value; there is no deeper wall kick.
    fn clamped_to_walls(&self, mut shape: Shape) -> Shape {
        if shape.min_x() < 0 {
            shape = shape.translated(-shape.min_x(), 0);
        }
        let width = self.bucket.size().width;
        if shape.max_x() >= width {
            shape = shape.translated(width - shape.max_x() - 1, 0);
        }
        shape
    }

    /// One gravity step once the drop timer runs out
    ///
    /// The piece tentatively moves down one row. On collision it settles at
    /// its pre-step position unless its blocked position still reaches the
    /// top row, in which case the session ends.
    fn apply_gravity(&mut self) {
        if self.time_until_drop > 0.0 {
            return;
        }
        self.time_until_drop = DROP_INTERVAL;
        let Some(shape) = self.current else { return };
        let dropped = shape.translated(0, -1);
        if !self.bucket.collides(&dropped) {
            self.current = Some(dropped);
            return;
        }
        if dropped.max_y() < self.bucket.size().height - 1 {
            self.bucket.lock(&shape, WALL_COLOR);
            self.score += lock_bonus(self.level);
            self.current = None;
        } else {
            self.game_over = true;
            self.current = None;
        }
    }
}

/// Session manager: owns the high score across game-over resets
///
/// The rendering collaborator reads one [`FrameSnapshot`] per frame after
/// [`Game::update`] returns; it never observes a terminated session because
/// the replacement happens inside the same update call.
#[derive(Debug, Clone)]
pub struct Game {
    session: Session,
    size: Size,
    high_score: u32,
}

impl Game {
    pub fn new(size: Size, seed: u32) -> Self {
        Self {
            session: Session::new(size, seed),
            size,
            high_score: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Best final score of any session this process has played
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Advances one frame, replacing the session if this frame ended it
    pub fn update(&mut self, dt: f32, input: &InputState) {
        self.session.update(dt, input);
        if self.session.game_over() {
            self.high_score = self.high_score.max(self.session.score());
            self.session = Session::new(self.size, self.session.rng_state());
        }
    }

    /// Fills `out` with the post-update frame state
    ///
    /// Reusing one snapshot across frames keeps the per-frame path free of
    /// allocation once the cell buffer has grown to the grid size.
    pub fn snapshot_into(&self, out: &mut FrameSnapshot) {
        let session = &self.session;
        let color = if session.fast_drop() {
            FAST_DROP_COLOR
        } else {
            DROP_COLOR
        };

        out.size = session.bucket().size();
        out.cells.clear();
        out.cells.extend_from_slice(session.bucket().cells());
        out.falling = session.current().map(|shape| ShapeView {
            blocks: shape.blocks(),
            color,
        });
        let preview = session.next().placed_at(preview_anchor(out.size));
        out.preview = ShapeView {
            blocks: preview.blocks(),
            color,
        };
        out.score = session.score();
        out.level = session.level();
        out.high_score = self.high_score;
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut out = FrameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Size::default(), 1)
    }
}
