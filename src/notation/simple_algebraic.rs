//! Four/five character move text, for example "e2e4" or "e7e8q".
//!
//! The renderer maps the no-move sentinel to the literal text "zero" so
//! callers can print "no move available" states. The parser is purely
//! syntactic; legality is the move generator's concern.

use crate::board::chess_types::{CompactMove, Coordinate, PromotionPiece, NO_MOVE};
use crate::notation::compact_move::{move_from, move_promotion, move_to, pack_compact_move};
use crate::notation::square_map::{square_from_coordinate, square_to_algebraic};

/// Render a compact move as square-pair text with an optional lowercase
/// promotion letter. The `NO_MOVE` sentinel renders as "zero".
pub fn simple_algebraic_from_compact(mv: CompactMove) -> String {
    if mv == NO_MOVE {
        return "zero".to_owned();
    }

    let mut out = String::new();
    out.push_str(&square_to_algebraic(move_from(mv)));
    out.push_str(&square_to_algebraic(move_to(mv)));
    if let Some(promotion) = move_promotion(mv) {
        out.push(promotion.letter().to_ascii_lowercase());
    }
    out
}

/// Parse square-pair text back into a compact move. Accepts exactly 4 or
/// 5 characters; files and the promotion letter are case-insensitive.
pub fn compact_from_simple_algebraic(text: &str) -> Result<CompactMove, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(format!("Invalid simple algebraic move: {text}"));
    }

    let from = coordinate_from_chars(bytes[0], bytes[1])?;
    let to = coordinate_from_chars(bytes[2], bytes[3])?;

    let promotion = if bytes.len() == 5 {
        let letter = bytes[4] as char;
        match PromotionPiece::from_letter(letter) {
            Some(piece) => Some(piece),
            None => return Err(format!("Invalid promotion letter: {letter}")),
        }
    } else {
        None
    };

    Ok(pack_compact_move(
        square_from_coordinate(from),
        square_from_coordinate(to),
        promotion,
    ))
}

fn coordinate_from_chars(file_char: u8, rank_char: u8) -> Result<Coordinate, String> {
    let file = file_char.to_ascii_uppercase();
    if !(b'A'..=b'H').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file_char as char));
    }
    if !(b'1'..=b'8').contains(&rank_char) {
        return Err(format!("Invalid algebraic rank: {}", rank_char as char));
    }

    Ok(Coordinate {
        file: file - b'A',
        rank: 7 - (rank_char - b'1'),
    })
}
