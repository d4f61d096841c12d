//! Structured move representation bridging the packed codec and board
//! coordinates.
//!
//! A `MoveRef` carries side-agnostic data only; whether a promotion
//! letter displays in upper or lower case is derived from the target
//! rank when the move is rendered, never stored.

use std::fmt;

use crate::board::chess_types::{CompactMove, Coordinate, PromotionPiece};
use crate::notation::compact_move::{move_from, move_promotion, move_to, pack_compact_move};
use crate::notation::square_map::{
    coordinate_from_square, square_from_coordinate, square_to_algebraic,
};

/// Source/target coordinate pair plus optional promotion piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRef {
    pub source: Coordinate,
    pub target: Coordinate,
    pub promotion: Option<PromotionPiece>,
}

impl MoveRef {
    /// Whether a promotion on this move lands on the upper side's back
    /// rank. Decides promotion letter case when the move is displayed.
    #[inline]
    pub fn promotion_for_upper_side(&self) -> bool {
        self.target.rank == 0
    }
}

impl fmt::Display for MoveRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(square_from_coordinate(self.source)),
            square_to_algebraic(square_from_coordinate(self.target)),
        )?;
        if let Some(promotion) = self.promotion {
            let letter = if self.promotion_for_upper_side() {
                promotion.letter()
            } else {
                promotion.letter().to_ascii_lowercase()
            };
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Unpack a compact move into coordinates and promotion piece.
pub fn move_ref_from_compact(mv: CompactMove) -> MoveRef {
    MoveRef {
        source: coordinate_from_square(move_from(mv)),
        target: coordinate_from_square(move_to(mv)),
        promotion: move_promotion(mv),
    }
}

/// Re-pack a `MoveRef` into the compact encoding. Lossless inverse of
/// [`move_ref_from_compact`] for every promotion case.
pub fn compact_from_move_ref(move_ref: &MoveRef) -> CompactMove {
    pack_compact_move(
        square_from_coordinate(move_ref.source),
        square_from_coordinate(move_ref.target),
        move_ref.promotion,
    )
}
