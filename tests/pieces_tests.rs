//! Pieces module tests - shape catalog, blocks, and the rotation transform

use lanken_tetris::core::{get_shape, Piece, Shape};
use lanken_tetris::types::{PieceKind, SPAWN_POSITION};

fn cells(shape: &Shape) -> Vec<(usize, usize)> {
    shape.offsets().collect()
}

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shape() {
    let i = get_shape(PieceKind::I);
    assert_eq!((i.rows(), i.cols()), (1, 4));
    assert_eq!(cells(&i), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_o_piece_shape() {
    let o = get_shape(PieceKind::O);
    assert_eq!((o.rows(), o.cols()), (2, 2));
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_s_and_z_are_mirrors() {
    let s = get_shape(PieceKind::S);
    let z = get_shape(PieceKind::Z);
    for r in 0..2 {
        for c in 0..3 {
            assert_eq!(s.get(r, c), z.get(r, 2 - c), "row {r} col {c}");
        }
    }
}

#[test]
fn test_j_and_l_are_mirrors() {
    let j = get_shape(PieceKind::J);
    let l = get_shape(PieceKind::L);
    for r in 0..2 {
        for c in 0..3 {
            assert_eq!(j.get(r, c), l.get(r, 2 - c), "row {r} col {c}");
        }
    }
}

#[test]
fn test_t_piece_shape() {
    let t = get_shape(PieceKind::T);
    assert_eq!(cells(&t), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_catalog_shapes_are_distinct() {
    for a in PieceKind::ALL {
        for b in PieceKind::ALL {
            if a != b {
                assert_ne!(get_shape(a), get_shape(b), "{a:?} vs {b:?}");
            }
        }
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_transposes_dimensions() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        let rotated = shape.rotated();
        assert_eq!(rotated.rows(), shape.cols(), "{kind:?}");
        assert_eq!(rotated.cols(), shape.rows(), "{kind:?}");
        assert_eq!(rotated.cell_count(), 4, "{kind:?}");
    }
}

#[test]
fn test_j_rotation_sequence() {
    // #..      .#      ###      ##
    // ###  ->  .#  ->  ..#  ->  #.
    //          ##               #.
    let mut piece = Piece::new(PieceKind::J);

    piece.rotate();
    assert_eq!(cells(&piece.shape), vec![(1, 0), (1, 1), (0, 2), (1, 2)]);

    piece.rotate();
    assert_eq!(cells(&piece.shape), vec![(0, 0), (1, 0), (2, 0), (2, 1)]);

    piece.rotate();
    assert_eq!(cells(&piece.shape), vec![(0, 0), (1, 0), (0, 1), (0, 2)]);

    piece.rotate();
    assert_eq!(piece.shape, get_shape(PieceKind::J));
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!(piece.shape, get_shape(kind), "{kind:?}");
    }
}

// ============== Blocks Tests ==============

#[test]
fn test_new_piece_at_spawn() {
    let piece = Piece::new(PieceKind::T);
    assert_eq!((piece.x, piece.y), SPAWN_POSITION);
    assert_eq!(piece.shape, get_shape(PieceKind::T));
}

#[test]
fn test_blocks_follow_anchor() {
    let mut piece = Piece::spawn(PieceKind::S, (2, 7));
    assert_eq!(piece.blocks().as_slice(), &[(3, 7), (4, 7), (2, 8), (3, 8)]);

    piece.x -= 2;
    piece.y = -1;
    assert_eq!(piece.blocks().as_slice(), &[(1, -1), (2, -1), (0, 0), (1, 0)]);
}

#[test]
fn test_blocks_do_not_mutate() {
    let piece = Piece::new(PieceKind::L);
    let copy = piece;
    let _ = piece.blocks();
    assert_eq!(piece, copy);
}
