//! Square and coordinate conversions for the mirrored board layout.
//!
//! Converts between the linear `0..=63` square index packed into compact
//! moves, file/rank coordinates, and algebraic square text ("a1".."h8").
//! Every other notation transform is built on these functions.

use crate::board::chess_types::{Coordinate, Square};

/// Coordinate of a square index. Total over `0..=63`.
#[inline]
pub fn coordinate_from_square(square: Square) -> Coordinate {
    debug_assert!(square <= 63, "square index out of range: {square}");
    let mirrored = 63 - square;
    Coordinate {
        file: mirrored % 8,
        rank: mirrored / 8,
    }
}

/// Square index of a coordinate. Exact inverse of
/// [`coordinate_from_square`] over the full 64-value domain.
#[inline]
pub fn square_from_coordinate(coordinate: Coordinate) -> Square {
    63 - 8 * coordinate.rank - coordinate.file
}

/// File letter (`'a'..='h'`) of a square.
#[inline]
pub fn file_letter(square: Square) -> char {
    char::from(b'a' + coordinate_from_square(square).file)
}

/// Rank digit (`'1'..='8'`) of a square.
#[inline]
pub fn rank_digit(square: Square) -> char {
    char::from(b'1' + (7 - coordinate_from_square(square).rank))
}

/// Algebraic text of a square, for example "e4".
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_letter(square), rank_digit(square))
}
