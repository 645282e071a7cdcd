use twenty48::{slide_row, Direction, ErrorKind, GameError, Grid};

fn grid(rows: &[[u32; 4]; 4]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_slide_pair_merges_left() {
    let (row, gained) = slide_row(&[2, 2, 0, 0]);
    assert_eq!(row, vec![4, 0, 0, 0]);
    assert_eq!(gained, 4);
}

#[test]
fn test_slide_leftmost_pair_merges_first() {
    let (row, gained) = slide_row(&[2, 0, 2, 2]);
    assert_eq!(row, vec![4, 2, 0, 0]);
    assert_eq!(gained, 4);
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    let (row, gained) = slide_row(&[2, 2, 4, 0]);
    assert_eq!(row, vec![4, 4, 0, 0]);
    assert_eq!(gained, 4);

    let (row, gained) = slide_row(&[2, 2, 2, 2]);
    assert_eq!(row, vec![4, 4, 0, 0]);
    assert_eq!(gained, 8);

    let (row, gained) = slide_row(&[4, 4, 8, 8]);
    assert_eq!(row, vec![8, 16, 0, 0]);
    assert_eq!(gained, 24);
}

#[test]
fn test_slide_without_merge_only_compacts() {
    let (row, gained) = slide_row(&[0, 2, 0, 4]);
    assert_eq!(row, vec![2, 4, 0, 0]);
    assert_eq!(gained, 0);

    let (row, gained) = slide_row(&[0, 0, 0, 0]);
    assert_eq!(row, vec![0, 0, 0, 0]);
    assert_eq!(gained, 0);
}

#[test]
fn test_rotate_left_matches_definition() {
    let g = grid(&[[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 32]]);
    let r = g.rotate_left();
    let n = g.size();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(r.get(i, j), g.get(j, n - 1 - i));
        }
    }
    // top row ends up in the left column, read bottom to top
    assert_eq!(r.to_rows()[0], vec![16, 0, 0, 32]);
    assert_eq!(r.to_rows()[3], vec![2, 0, 0, 0]);
}

#[test]
fn test_four_rotations_are_identity() {
    let g = grid(&[[2, 4, 8, 16], [32, 0, 2, 0], [0, 4, 0, 8], [2, 2, 2, 2]]);
    assert_eq!(g.rotate_left_n(4), g);
    assert_eq!(g.rotate_left().rotate_left().rotate_left().rotate_left(), g);
}

#[test]
fn test_shift_each_direction() {
    let g = grid(&[[2, 0, 0, 2], [0, 4, 0, 0], [0, 4, 0, 0], [8, 0, 0, 0]]);

    let (left, gained) = g.shift(Direction::Left);
    assert_eq!(
        left.to_rows(),
        vec![vec![4, 0, 0, 0], vec![4, 0, 0, 0], vec![4, 0, 0, 0], vec![8, 0, 0, 0]]
    );
    assert_eq!(gained, 4);

    let (right, _) = g.shift(Direction::Right);
    assert_eq!(
        right.to_rows(),
        vec![vec![0, 0, 0, 4], vec![0, 0, 0, 4], vec![0, 0, 0, 4], vec![0, 0, 0, 8]]
    );

    let (up, gained) = g.shift(Direction::Up);
    assert_eq!(
        up.to_rows(),
        vec![vec![2, 8, 0, 2], vec![8, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0]]
    );
    assert_eq!(gained, 8);

    let (down, gained) = g.shift(Direction::Down);
    assert_eq!(
        down.to_rows(),
        vec![vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![2, 0, 0, 0], vec![8, 8, 0, 2]]
    );
    assert_eq!(gained, 8);
}

#[test]
fn test_checkerboard_is_game_over() {
    let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(g.is_game_over());
    for d in Direction::ALL {
        assert_eq!(g.shift(d).0, g);
    }
}

#[test]
fn test_single_empty_cell_is_not_game_over() {
    let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
    assert!(!g.is_game_over());
}

#[test]
fn test_horizontal_pair_is_not_game_over() {
    let g = grid(&[[2, 2, 8, 4], [4, 8, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(!g.is_game_over());
}

#[test]
fn test_vertical_pair_is_not_game_over() {
    let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 32]]);
    assert!(!g.is_game_over());
}

#[test]
fn test_contains_and_max_tile() {
    let g = grid(&[[2048; 4]; 4]);
    assert!(g.contains(2048));
    assert_eq!(g.max_tile(), 2048);
    assert_eq!(Grid::new(4).max_tile(), 0);
}

#[test]
fn test_empty_cells_row_major() {
    let g = grid(&[[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0], [2, 2, 2, 2]]);
    assert_eq!(g.empty_cells(), vec![(0, 1), (2, 3)]);
    assert_eq!(g.count_empty(), 2);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    let err = Grid::from_rows(&[[2u32]]).unwrap_err();
    assert_eq!(err, GameError::GridTooSmall { size: 1 });

    let err = Grid::from_rows(&[vec![2, 0], vec![0]]).unwrap_err();
    assert_eq!(
        err,
        GameError::NotSquare {
            row: 1,
            len: 1,
            expected: 2
        }
    );

    let err = Grid::from_rows(&[[2, 3], [0, 0]]).unwrap_err();
    assert_eq!(err, GameError::InvalidTile { row: 0, col: 1, value: 3 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = Grid::from_rows(&[[1, 0], [0, 0]]).unwrap_err();
    assert_eq!(err, GameError::InvalidTile { row: 0, col: 0, value: 1 });
}

#[test]
fn test_oversized_grid_is_rejected() {
    assert_eq!(Grid::try_new(65).unwrap_err(), GameError::GridTooLarge { size: 65 });
    assert!(Grid::try_new(64).is_ok());
    let err = Grid::from_rows(&vec![vec![0u32; 65]; 65][..]).unwrap_err();
    assert_eq!(err, GameError::GridTooLarge { size: 65 });
}

#[test]
fn test_top_bit_tiles_never_merge() {
    let top = 1u32 << 31;
    let (row, gained) = slide_row(&[top, top, 0, 0]);
    assert_eq!(row, vec![top, top, 0, 0]);
    assert_eq!(gained, 0);

    let g = Grid::from_rows(&[[top, top], [top, top]]).unwrap();
    assert!(g.is_game_over());
    for d in Direction::ALL {
        assert_eq!(g.shift(d), (g.clone(), 0), "{} moved a stuck grid", d);
    }
}

#[test]
fn test_set_checks_bounds_and_value() {
    let mut g = Grid::new(3);
    g.set(2, 2, 8).unwrap();
    assert_eq!(g.get(2, 2), Some(8));
    assert_eq!(g.set(3, 0, 2).unwrap_err(), GameError::OutOfBounds { row: 3, col: 0 });
    assert_eq!(
        g.set(0, 0, 6).unwrap_err(),
        GameError::InvalidTile { row: 0, col: 0, value: 6 }
    );
    assert_eq!(g.get(3, 3), None);
}

#[test]
fn test_non_default_sizes() {
    let g = Grid::from_rows(&[[2, 2], [0, 4]]).unwrap();
    let (left, gained) = g.shift(Direction::Left);
    assert_eq!(left.to_rows(), vec![vec![4, 0], vec![4, 0]]);
    assert_eq!(gained, 4);

    let g = Grid::from_rows(&[[2, 0, 0, 0, 2]; 5]).unwrap();
    let (right, gained) = g.shift(Direction::Right);
    assert!(right.rows().all(|r| r == [0, 0, 0, 0, 4]));
    assert_eq!(gained, 20);
}

#[test]
fn test_display_aligns_columns() {
    let g = Grid::from_rows(&[[2, 128], [0, 16]]).unwrap();
    assert_eq!(g.to_string(), "  2 128\n  .  16");
}
