//! Basic piece-movement rules.

use super::{path_is_clear, IllegalMove, MoveResult, RuleSet};
use crate::Board;
use board_core::{Color, Move, Piece, PieceKind, Square};

/// Piece movement without any game-level rules.
///
/// Each kind moves by its geometric rule alone:
/// - Pawns push one square, two from their home rank, and capture one square
///   diagonally forward
/// - Knights jump
/// - Bishops, rooks, and queens slide along clear paths
/// - Kings step one square
///
/// There is no check detection, castling, en passant, or promotion.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRules;

impl RuleSet for BasicRules {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn is_legal_move(&self, board: &Board, mover: Color, from: Square, to: Square) -> MoveResult {
        if !from.is_on_board() || !to.is_on_board() {
            return Err(IllegalMove::OutOfBounds);
        }

        let piece = board.piece_at(from).ok_or(IllegalMove::NoPieceAtSource)?;
        if piece.color != mover {
            return Err(IllegalMove::WrongColorPiece);
        }

        // Checked ahead of the per-kind rules, so no kind can take its own side.
        if board.piece_at(to).is_some_and(|target| target.color == mover) {
            return Err(IllegalMove::FriendlyFireCapture);
        }

        if piece_can_move(board, piece, Move::new(from, to)) {
            Ok(())
        } else {
            Err(IllegalMove::IllegalPieceMove)
        }
    }

    fn apply_move(&self, board: &Board, from: Square, to: Square) -> Board {
        let mut next = *board;
        if from.is_on_board() && to.is_on_board() {
            let piece = next.take(from);
            next.set(to, piece);
        }
        next
    }
}

/// Dispatches to the movement rule for the piece's kind.
fn piece_can_move(board: &Board, piece: Piece, m: Move) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_can_move(board, piece.color, m),
        PieceKind::Knight => knight_can_move(m),
        PieceKind::Bishop => bishop_can_move(board, m),
        PieceKind::Rook => rook_can_move(board, m),
        PieceKind::Queen => bishop_can_move(board, m) || rook_can_move(board, m),
        PieceKind::King => king_can_move(m),
    }
}

fn pawn_can_move(board: &Board, color: Color, m: Move) -> bool {
    let dir = color.pawn_direction();
    let target = board.piece_at(m.to());

    match (m.rank_diff(), m.file_diff().abs()) {
        (d, 0) if d == dir => target.is_none(),
        (d, 0) if d == 2 * dir => {
            m.from().rank() == color.home_rank()
                && target.is_none()
                && board.piece_at(m.from().offset(dir, 0)).is_none()
        }
        // Diagonal steps only capture.
        (d, 1) if d == dir => target.is_some_and(|p| p.color != color),
        _ => false,
    }
}

fn knight_can_move(m: Move) -> bool {
    matches!(
        (m.rank_diff().abs(), m.file_diff().abs()),
        (2, 1) | (1, 2)
    )
}

fn bishop_can_move(board: &Board, m: Move) -> bool {
    let (dr, df) = (m.rank_diff().abs(), m.file_diff().abs());
    dr == df && dr != 0 && path_is_clear(board, m.from(), m.to())
}

fn rook_can_move(board: &Board, m: Move) -> bool {
    let (dr, df) = (m.rank_diff(), m.file_diff());
    ((dr == 0) != (df == 0)) && path_is_clear(board, m.from(), m.to())
}

fn king_can_move(m: Move) -> bool {
    let (dr, df) = (m.rank_diff().abs(), m.file_diff().abs());
    dr.max(df) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(rank: i8, file: i8) -> Square {
        Square::new(rank, file)
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn check(b: &Board, mover: Color, from: Square, to: Square) -> MoveResult {
        BasicRules.is_legal_move(b, mover, from, to)
    }

    #[test]
    fn out_of_bounds_checked_first() {
        let b = Board::initial();
        assert_eq!(
            check(&b, Color::White, sq(8, 0), sq(5, 0)),
            Err(IllegalMove::OutOfBounds)
        );
        assert_eq!(
            check(&b, Color::White, sq(6, 4), sq(6, -1)),
            Err(IllegalMove::OutOfBounds)
        );
        // Even an empty, in-range source loses to an off-board destination.
        assert_eq!(
            check(&b, Color::White, sq(4, 4), sq(4, 8)),
            Err(IllegalMove::OutOfBounds)
        );
    }

    #[test]
    fn no_piece_at_source() {
        let b = Board::initial();
        assert_eq!(
            check(&b, Color::White, sq(4, 4), sq(3, 4)),
            Err(IllegalMove::NoPieceAtSource)
        );
    }

    #[test]
    fn wrong_color_piece() {
        let b = Board::initial();
        assert_eq!(
            check(&b, Color::White, sq(1, 4), sq(2, 4)),
            Err(IllegalMove::WrongColorPiece)
        );
        assert_eq!(
            check(&b, Color::Black, sq(6, 4), sq(5, 4)),
            Err(IllegalMove::WrongColorPiece)
        );
    }

    #[test]
    fn friendly_fire_beats_bad_geometry() {
        let b = Board::initial();
        // Rook onto its own knight: both geometry and occupancy are wrong.
        assert_eq!(
            check(&b, Color::White, sq(7, 0), sq(7, 1)),
            Err(IllegalMove::FriendlyFireCapture)
        );
        // Knight onto its own pawn from a legal knight offset.
        assert_eq!(
            check(&b, Color::White, sq(7, 1), sq(6, 3)),
            Err(IllegalMove::FriendlyFireCapture)
        );
        // Moving onto the source square lands on the mover's own piece.
        assert_eq!(
            check(&b, Color::Black, sq(0, 4), sq(0, 4)),
            Err(IllegalMove::FriendlyFireCapture)
        );
    }

    #[test]
    fn pawn_pushes() {
        let b = Board::initial();
        assert!(check(&b, Color::White, sq(6, 4), sq(5, 4)).is_ok());
        assert!(check(&b, Color::White, sq(6, 4), sq(4, 4)).is_ok());
        assert!(check(&b, Color::Black, sq(1, 2), sq(2, 2)).is_ok());
        assert!(check(&b, Color::Black, sq(1, 2), sq(3, 2)).is_ok());
        assert_eq!(
            check(&b, Color::White, sq(6, 4), sq(3, 4)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn pawn_never_moves_backward_or_sideways() {
        let b = board("8/8/8/8/3P4/8/8/8");
        let from = sq(4, 3);
        for to in [sq(5, 3), sq(4, 2), sq(4, 4), sq(5, 2), sq(5, 4)] {
            assert_eq!(
                check(&b, Color::White, from, to),
                Err(IllegalMove::IllegalPieceMove),
                "{} -> {}",
                from,
                to
            );
        }
    }

    #[test]
    fn pawn_double_push_only_from_home_rank() {
        let b = board("8/8/8/8/8/3P4/8/8");
        assert!(check(&b, Color::White, sq(5, 3), sq(4, 3)).is_ok());
        assert_eq!(
            check(&b, Color::White, sq(5, 3), sq(3, 3)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn pawn_double_push_needs_both_squares_empty() {
        // Blocker directly in front.
        let b = board("8/8/8/8/8/4n3/4P3/8");
        assert_eq!(
            check(&b, Color::White, sq(6, 4), sq(4, 4)),
            Err(IllegalMove::IllegalPieceMove)
        );
        // Blocker on the landing square.
        let b = board("8/8/8/8/4n3/8/4P3/8");
        assert!(check(&b, Color::White, sq(6, 4), sq(5, 4)).is_ok());
        assert_eq!(
            check(&b, Color::White, sq(6, 4), sq(4, 4)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn pawn_push_cannot_capture() {
        let b = board("8/8/8/8/8/4p3/4P3/8");
        assert_eq!(
            check(&b, Color::White, sq(6, 4), sq(5, 4)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn pawn_diagonal_captures_only() {
        let b = board("8/8/8/8/8/3p4/4P3/8");
        assert!(check(&b, Color::White, sq(6, 4), sq(5, 3)).is_ok());
        assert_eq!(
            check(&b, Color::White, sq(6, 4), sq(5, 5)),
            Err(IllegalMove::IllegalPieceMove)
        );
        // Black captures toward increasing rank.
        assert!(check(&b, Color::Black, sq(5, 3), sq(6, 4)).is_ok());
        assert_eq!(
            check(&b, Color::Black, sq(5, 3), sq(4, 4)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn pawn_diagonal_onto_own_piece_is_friendly_fire() {
        let b = board("8/8/8/8/8/3N4/4P3/8");
        assert_eq!(
            check(&b, Color::White, sq(6, 4), sq(5, 3)),
            Err(IllegalMove::FriendlyFireCapture)
        );
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let b = Board::initial();
        assert!(check(&b, Color::White, sq(7, 1), sq(5, 2)).is_ok());
        assert!(check(&b, Color::White, sq(7, 1), sq(5, 0)).is_ok());
        assert!(check(&b, Color::Black, sq(0, 6), sq(2, 5)).is_ok());
        assert_eq!(
            check(&b, Color::White, sq(7, 1), sq(5, 1)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn bishop_clear_and_blocked() {
        let b = board("8/8/8/8/8/8/8/2B5");
        assert!(check(&b, Color::White, sq(7, 2), sq(2, 7)).is_ok());
        assert!(check(&b, Color::White, sq(7, 2), sq(5, 0)).is_ok());
        assert_eq!(
            check(&b, Color::White, sq(7, 2), sq(5, 2)),
            Err(IllegalMove::IllegalPieceMove)
        );

        let b = board("8/8/8/8/5p2/8/8/2B5");
        assert!(check(&b, Color::White, sq(7, 2), sq(4, 5)).is_ok());
        assert_eq!(
            check(&b, Color::White, sq(7, 2), sq(3, 6)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn rook_clear_and_blocked() {
        let b = board("8/8/8/8/R7/8/8/8");
        assert!(check(&b, Color::White, sq(4, 0), sq(0, 0)).is_ok());
        assert!(check(&b, Color::White, sq(4, 0), sq(4, 7)).is_ok());
        assert_eq!(
            check(&b, Color::White, sq(4, 0), sq(3, 1)),
            Err(IllegalMove::IllegalPieceMove)
        );

        let b = board("8/8/8/8/R2p4/8/8/8");
        assert!(check(&b, Color::White, sq(4, 0), sq(4, 3)).is_ok());
        assert_eq!(
            check(&b, Color::White, sq(4, 0), sq(4, 6)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let b = board("8/8/8/8/3q4/8/8/8");
        let from = sq(4, 3);
        assert!(check(&b, Color::Black, from, sq(4, 7)).is_ok());
        assert!(check(&b, Color::Black, from, sq(0, 3)).is_ok());
        assert!(check(&b, Color::Black, from, sq(7, 0)).is_ok());
        assert!(check(&b, Color::Black, from, sq(0, 7)).is_ok());
        assert_eq!(
            check(&b, Color::Black, from, sq(2, 4)),
            Err(IllegalMove::IllegalPieceMove)
        );

        let b = board("8/8/8/8/3q4/4P3/8/8");
        assert!(check(&b, Color::Black, from, sq(5, 4)).is_ok());
        assert_eq!(
            check(&b, Color::Black, from, sq(6, 5)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn king_single_steps() {
        let b = board("8/8/8/8/4K3/8/8/8");
        let from = sq(4, 4);
        for (dr, df) in [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)] {
            assert!(check(&b, Color::White, from, from.offset(dr, df)).is_ok());
        }
        assert_eq!(
            check(&b, Color::White, from, sq(4, 6)),
            Err(IllegalMove::IllegalPieceMove)
        );
        assert_eq!(
            check(&b, Color::White, from, sq(2, 4)),
            Err(IllegalMove::IllegalPieceMove)
        );
    }

    #[test]
    fn apply_move_moves_and_captures() {
        let b = board("8/8/8/8/8/3p4/4P3/8");
        let next = BasicRules.apply_move(&b, sq(6, 4), sq(5, 3));
        assert_eq!(
            next.piece_at(sq(5, 3)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(next.is_vacant(sq(6, 4)));
        assert_eq!(next.count(), 1);
        // The input board is unchanged.
        assert_eq!(b.count(), 2);
    }

    #[test]
    fn apply_move_off_board_is_a_no_op() {
        let b = Board::initial();
        assert_eq!(BasicRules.apply_move(&b, sq(6, 4), sq(9, 4)), b);
    }

    #[test]
    fn legal_moves_from_starting_knight() {
        let b = Board::initial();
        let moves = BasicRules.legal_moves_from(&b, Color::White, sq(7, 6));
        let targets: Vec<Square> = moves.iter().map(|m| m.to()).collect();
        assert_eq!(targets, vec![sq(5, 5), sq(5, 7)]);
    }
}
