//! Disambiguated PGN move rendering, for example "Nbd2" or "Rexe5+".
//!
//! The renderer classifies the moving piece from a pre-move occupancy
//! snapshot, scans the collaborator's legal-move list to decide whether a
//! file or rank qualifier is needed, and speculatively applies the move
//! to detect check. The board is restored before every return.

use crate::board::board_adapter::BoardAdapter;
use crate::board::chess_types::{CompactMove, PieceKind, PieceOccupancy, NO_MOVE};
use crate::notation::compact_move::{move_from, move_promotion, move_to};
use crate::notation::move_ref::{compact_from_move_ref, MoveRef};
use crate::notation::square_map::{
    coordinate_from_square, file_letter, rank_digit, square_to_algebraic,
};

/// Render a legal compact move as disambiguated PGN text.
///
/// `occupancy` must be the position snapshot taken before the move is
/// played. The board's apply/undo stack is touched during the check
/// probe, so concurrent renders sharing one board must be serialized.
pub fn pgn_move_from_compact<B: BoardAdapter>(
    mv: CompactMove,
    occupancy: &PieceOccupancy,
    board: &mut B,
) -> String {
    let from = move_from(mv);
    let to = move_to(mv);
    let moving_kind = occupancy[from as usize].map(|piece| piece.kind);

    let mut pgn = String::new();
    match moving_kind {
        Some(PieceKind::Knight) => pgn.push('N'),
        Some(PieceKind::King) => pgn.push('K'),
        Some(PieceKind::Queen) => pgn.push('Q'),
        Some(PieceKind::Bishop) => pgn.push('B'),
        Some(PieceKind::Rook) => pgn.push('R'),
        _ => {}
    }

    // Pawns are qualified by their capture file below, never by the
    // legal-move scan.
    if matches!(moving_kind, Some(kind) if kind != PieceKind::Pawn) {
        if let Some(qualifier) = disambiguation_qualifier(mv, occupancy, board) {
            pgn.push(qualifier);
        }
    }

    if occupancy[to as usize].is_some() {
        if moving_kind == Some(PieceKind::Pawn) {
            pgn.push(file_letter(from));
        }
        pgn.push('x');
    }

    pgn.push_str(&square_to_algebraic(to));

    if let Some(promotion) = move_promotion(mv) {
        pgn.push('=');
        pgn.push(promotion.letter());
    }

    {
        let applied = AppliedMove::new(board, mv);
        if applied.side_to_move_in_check() {
            pgn.push('+');
        }
    }

    pgn
}

/// Render a structured move as PGN text by re-packing it first.
pub fn pgn_move_from_move_ref<B: BoardAdapter>(
    move_ref: &MoveRef,
    occupancy: &PieceOccupancy,
    board: &mut B,
) -> String {
    pgn_move_from_compact(compact_from_move_ref(move_ref), occupancy, board)
}

/// Scan the legal-move list for another piece of the same color and kind
/// able to reach the same target. When the ambiguous alternative shares
/// the primary move's source file the qualifier is the source rank
/// digit, otherwise the source file letter. The last matching entry in
/// list order decides which rule applies.
fn disambiguation_qualifier<B: BoardAdapter>(
    mv: CompactMove,
    occupancy: &PieceOccupancy,
    board: &B,
) -> Option<char> {
    let from = move_from(mv);
    let to = move_to(mv);
    let from_file = coordinate_from_square(from).file;

    let mut qualifier = None;
    for legal in board.legal_moves() {
        if legal == NO_MOVE {
            break;
        }
        let legal_from = move_from(legal);
        if move_to(legal) != to || legal_from == from {
            continue;
        }
        if occupancy[legal_from as usize] != occupancy[from as usize] {
            continue;
        }

        qualifier = Some(if coordinate_from_square(legal_from).file == from_file {
            rank_digit(from)
        } else {
            file_letter(from)
        });
    }

    qualifier
}

/// Scoped apply/undo pair for the check probe. The undo runs when the
/// guard drops, on every exit path.
struct AppliedMove<'a, B: BoardAdapter> {
    board: &'a mut B,
}

impl<'a, B: BoardAdapter> AppliedMove<'a, B> {
    fn new(board: &'a mut B, mv: CompactMove) -> Self {
        assert!(
            board.apply_move(mv),
            "board rejected a legal move during PGN rendering"
        );
        Self { board }
    }

    fn side_to_move_in_check(&self) -> bool {
        self.board.is_in_check()
    }
}

impl<B: BoardAdapter> Drop for AppliedMove<'_, B> {
    fn drop(&mut self) {
        self.board.undo_move();
    }
}
