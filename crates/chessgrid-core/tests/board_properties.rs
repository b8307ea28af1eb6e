//! Integration tests for the generated board.
//!
//! Checks the size, ordering and uniqueness guarantees of `generate()`
//! along with the corner and spot-check squares.

use std::collections::HashSet;

use chessgrid_core::{Board, File, Rank, Square, generate};

#[test]
fn has_exactly_64_squares() {
    assert_eq!(generate().iter().count(), 64);
}

#[test]
fn indices_are_in_order() {
    let board = generate();
    for index in 0..64 {
        assert_eq!(board[index].index(), index);
    }
}

#[test]
fn ids_and_indices_are_unique() {
    let board = generate();
    let ids: HashSet<&str> = board.iter().map(Square::id).collect();
    let indices: HashSet<usize> = board.iter().map(Square::index).collect();
    assert_eq!(ids.len(), 64);
    assert_eq!(indices.len(), 64);
}

#[test]
fn corner_and_spot_check_ids() {
    let board = generate();
    assert_eq!(board[0].id(), "a8");
    assert_eq!(board[7].id(), "h8");
    assert_eq!(board[56].id(), "a1");
    assert_eq!(board[63].id(), "h1");
    assert_eq!(board[28].id(), "e5");
}

#[test]
fn ids_follow_row_major_formula() {
    for sq in &generate() {
        let row = sq.index() / 8;
        let col = sq.index() % 8;
        let expected = format!("{}{}", (b'a' + col as u8) as char, 8 - row);
        assert_eq!(sq.id(), expected);
        assert_eq!((sq.row(), sq.col()), (row, col));
    }
}

#[test]
fn every_file_and_rank_pair_appears_once() {
    let board = generate();
    for rank in Rank::ALL {
        for file in File::ALL {
            let matches = board
                .iter()
                .filter(|sq| sq.rank() == rank && sq.file() == file)
                .count();
            assert_eq!(matches, 1, "{file}{rank}");
        }
    }
}

#[test]
fn id_parses_back_to_the_same_square() {
    for sq in &generate() {
        let parsed: Square = sq.id().parse().unwrap();
        assert_eq!(&parsed, sq);
    }
}

#[test]
fn repeated_calls_are_equal() {
    let first = generate();
    let second = Board::generate();
    assert_eq!(first, second);
    assert!(!std::ptr::eq(first.squares(), second.squares()));
}

#[test]
fn concurrent_callers_get_identical_boards() {
    let expected = generate();
    let boards: Vec<Board> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(generate)).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for board in boards {
        assert_eq!(board, expected);
    }
}
