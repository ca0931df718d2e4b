//! Shape tests - templates, translation, and pivot rotation

use bucket_tetris::core::ShapeKind;
use bucket_tetris::types::Point;

// ============== Template Tests ==============

#[test]
fn test_i_template() {
    let blocks = ShapeKind::I.template().blocks();
    assert_eq!(
        blocks,
        [
            Point::new(-2, 0),
            Point::new(-1, 0),
            Point::new(0, 0),
            Point::new(1, 0),
        ]
    );
}

#[test]
fn test_l_template() {
    let blocks = ShapeKind::L.template().blocks();
    assert_eq!(
        blocks,
        [
            Point::new(-1, 0),
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
        ]
    );
}

#[test]
fn test_j_template() {
    let blocks = ShapeKind::J.template().blocks();
    assert_eq!(
        blocks,
        [
            Point::new(-1, 0),
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, -1),
        ]
    );
}

#[test]
fn test_o_template() {
    let blocks = ShapeKind::O.template().blocks();
    assert_eq!(
        blocks,
        [
            Point::new(-1, 0),
            Point::new(0, 0),
            Point::new(-1, 1),
            Point::new(0, 1),
        ]
    );
}

#[test]
fn test_t_template() {
    let blocks = ShapeKind::T.template().blocks();
    assert_eq!(
        blocks,
        [
            Point::new(-1, 0),
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(0, 1),
        ]
    );
}

#[test]
fn test_s_template() {
    let blocks = ShapeKind::S.template().blocks();
    assert_eq!(
        blocks,
        [
            Point::new(-1, 0),
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 1),
        ]
    );
}

#[test]
fn test_z_template() {
    let blocks = ShapeKind::Z.template().blocks();
    assert_eq!(
        blocks,
        [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(0, 1),
            Point::new(-1, 1),
        ]
    );
}

// ============== Consistency Tests ==============

#[test]
fn test_all_templates_have_four_distinct_blocks() {
    for kind in ShapeKind::ALL {
        let blocks = kind.template().blocks();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(
                    blocks[i], blocks[j],
                    "{:?} has duplicate blocks at {} and {}",
                    kind, i, j
                );
            }
        }
    }
}

#[test]
fn test_only_the_square_is_rotation_disabled() {
    for kind in ShapeKind::ALL {
        assert_eq!(
            kind.rotatable(),
            kind != ShapeKind::O,
            "{:?} has the wrong rotatable flag",
            kind
        );
    }
}

// ============== Placement Tests ==============

#[test]
fn test_translation_moves_all_blocks() {
    let shape = ShapeKind::T.template().translated(3, 7);
    assert_eq!(shape.pivot(), Point::new(3, 7));
    assert_eq!(
        shape.blocks(),
        [
            Point::new(2, 7),
            Point::new(3, 7),
            Point::new(4, 7),
            Point::new(3, 8),
        ]
    );
}

#[test]
fn test_placed_at_aligns_the_pivot() {
    for kind in ShapeKind::ALL {
        if !kind.rotatable() {
            continue;
        }
        let shape = kind.template().placed_at(Point::new(4, 20));
        assert_eq!(shape.pivot(), Point::new(4, 20), "{:?} misplaced", kind);
    }
}

#[test]
fn test_placed_at_aligns_the_square_by_first_block() {
    let square = ShapeKind::O.template().placed_at(Point::new(4, 20));
    assert_eq!(
        square.blocks(),
        [
            Point::new(4, 20),
            Point::new(5, 20),
            Point::new(4, 21),
            Point::new(5, 21),
        ]
    );
}

#[test]
fn test_placed_at_is_absolute() {
    let a = ShapeKind::S.template().placed_at(Point::new(7, 3));
    let b = a.translated(-2, 5).placed_at(Point::new(7, 3));
    assert_eq!(a, b);
}

// ============== Rotation Tests ==============

#[test]
fn test_four_quarter_turns_are_identity() {
    for kind in ShapeKind::ALL {
        let shape = kind.template().placed_at(Point::new(5, 10));
        let left = shape
            .rotated_left()
            .rotated_left()
            .rotated_left()
            .rotated_left();
        assert_eq!(left, shape, "{:?} left cycle broken", kind);

        let right = shape
            .rotated_right()
            .rotated_right()
            .rotated_right()
            .rotated_right();
        assert_eq!(right, shape, "{:?} right cycle broken", kind);
    }
}

#[test]
fn test_opposite_rotations_cancel() {
    for kind in ShapeKind::ALL {
        let shape = kind.template().placed_at(Point::new(5, 10));
        assert_eq!(shape.rotated_left().rotated_right(), shape);
        assert_eq!(shape.rotated_right().rotated_left(), shape);
    }
}

#[test]
fn test_rotation_keeps_the_pivot() {
    for kind in ShapeKind::ALL {
        let shape = kind.template().placed_at(Point::new(5, 10));
        assert_eq!(shape.rotated_left().pivot(), shape.pivot());
        assert_eq!(shape.rotated_right().pivot(), shape.pivot());
    }
}

#[test]
fn test_square_rotation_is_identity() {
    let square = ShapeKind::O.template().placed_at(Point::new(4, 20));
    assert_eq!(square.rotated_left(), square);
    assert_eq!(square.rotated_right(), square);
}

#[test]
fn test_bar_rotates_between_horizontal_and_vertical() {
    let horizontal = ShapeKind::I.template().placed_at(Point::new(4, 10));
    assert_eq!(horizontal.min_y(), horizontal.max_y());

    let vertical = horizontal.rotated_left();
    assert_eq!(vertical.min_x(), vertical.max_x());
    assert_eq!(vertical.min_y(), 8);
    assert_eq!(vertical.max_y(), 11);
}

// ============== Extent Tests ==============

#[test]
fn test_extrema_of_a_placed_shape() {
    let shape = ShapeKind::L.template().placed_at(Point::new(4, 10));
    assert_eq!(shape.min_x(), 3);
    assert_eq!(shape.max_x(), 5);
    assert_eq!(shape.min_y(), 10);
    assert_eq!(shape.max_y(), 11);
}
