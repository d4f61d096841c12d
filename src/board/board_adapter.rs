//! Collaborator seam between the notation codec and the engine board.
//!
//! The PGN renderer needs three things from the board it is asked about:
//! the current legal-move list, a make/unmake pair for the speculative
//! check probe, and the check flag itself. The trait keeps that surface
//! narrow so any board representation can sit behind it.

use crate::board::chess_types::CompactMove;

/// Upper bound on the number of legal moves in any reachable position.
/// Sizes move buffers on the board side of the seam.
pub const MAX_LEGAL_MOVES: usize = 220;

/// Board operations consumed by the PGN renderer.
///
/// `apply_move`/`undo_move` mutate the implementor's move-history stack,
/// so rendering calls sharing one board instance must be serialized by
/// the caller. The renderer restores the board before returning.
pub trait BoardAdapter {
    /// Every legal move in the current position, in generation order.
    /// The list ends at a [`NO_MOVE`](crate::board::chess_types::NO_MOVE)
    /// sentinel or at the end of the vector, whichever comes first;
    /// entries past a sentinel are never inspected.
    fn legal_moves(&self) -> Vec<CompactMove>;

    /// Apply `mv` to the board, returning whether it was applied.
    /// Returning `false` for a move taken from `legal_moves` is a
    /// contract violation.
    fn apply_move(&mut self, mv: CompactMove) -> bool;

    /// Revert the most recently applied move.
    fn undo_move(&mut self);

    /// Whether the side to move is currently in check.
    fn is_in_check(&self) -> bool;
}
