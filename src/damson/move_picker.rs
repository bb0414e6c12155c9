use std::cmp::Reverse;

use arrayvec::ArrayVec;

use crate::*;

/*----------------------------------------------------------------*/

const BEST_MOVE_SCORE: i32 = 2_000_000;
const KILLER_SCORE: i32 = 1_000_000;
const CAPTURE_SCORE: i32 = 100_000;

/// Orders a move list for the search: a promoted best move first, then the
/// depth's killers, then captures by most-valuable-victim least-valuable-
/// attacker, then quiet moves in generation order. The sort is stable, so
/// equal scores preserve the generator's order.
pub fn order_moves(
    board: &Board,
    moves: MoveList,
    killers: &Killers,
    best_first: Option<Move>,
) -> MoveList {
    let mut scored = moves
        .into_iter()
        .map(|mv| (mv, score_move(board, mv, killers, best_first)))
        .collect::<ArrayVec<(Move, i32), 256>>();

    scored.sort_by_key(|&(_, score)| Reverse(score));

    scored.into_iter().map(|(mv, _)| mv).collect()
}

/// Whether a move takes an enemy piece, counting en passant.
pub fn is_capture(board: &Board, mv: Move) -> bool {
    mv.is_en_passant() || board.piece_at(mv.to()).is_some()
}

/*----------------------------------------------------------------*/

fn score_move(board: &Board, mv: Move, killers: &Killers, best_first: Option<Move>) -> i32 {
    if best_first == Some(mv) {
        return BEST_MOVE_SCORE;
    }

    if killers.contains(mv) {
        return KILLER_SCORE;
    }

    if let Some(victim) = capture_victim(board, mv) {
        let attacker = match board.piece_at(mv.from()) {
            Some(piece) => piece.kind().value(),
            None => 0,
        };

        return CAPTURE_SCORE + victim.value() - attacker;
    }

    0
}

fn capture_victim(board: &Board, mv: Move) -> Option<PieceKind> {
    if mv.is_en_passant() {
        return Some(PieceKind::Pawn);
    }

    board.piece_at(mv.to()).map(Piece::kind)
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_order_by_victim_then_attacker() {
        // The pawn and the queen can both take the rook on d5; the knight
        // can take the pawn on b3.
        let tables = AttackTables::new();
        let board = Board::from_fen("3qk3/8/8/3r4/2P5/1p6/3N2Q1/4K3 w - - 0 1").unwrap();

        let moves = legal_moves(&board, &tables);
        let ordered = order_moves(&board, moves, &Killers::new(), None);

        // Pawn takes rook leads: biggest victim, cheapest attacker.
        assert_eq!(ordered[0], Move::new(Square::C4, Square::D5, MoveFlag::Normal));

        let queen_takes_rook = ordered
            .iter()
            .position(|&mv| mv == Move::new(Square::G2, Square::D5, MoveFlag::Normal))
            .unwrap();
        let knight_takes_pawn = ordered
            .iter()
            .position(|&mv| mv == Move::new(Square::D2, Square::B3, MoveFlag::Normal))
            .unwrap();

        // A cheap pawn win outranks winning the same rook with the queen.
        assert!(knight_takes_pawn < queen_takes_rook);
        assert!(is_capture(&board, ordered[0]));
    }

    #[test]
    fn killers_lead_quiets_and_captures() {
        let tables = AttackTables::new();
        let board = Board::from_fen("3qk3/8/8/3r4/2P5/1p6/3N2Q1/4K3 w - - 0 1").unwrap();

        let killer = Move::new(Square::E1, Square::F1, MoveFlag::Normal);
        let mut killers = Killers::new();
        killers.push(killer);

        let moves = legal_moves(&board, &tables);
        let ordered = order_moves(&board, moves, &killers, None);
        assert_eq!(ordered[0], killer);

        // A promoted previous-best move outranks even the killers.
        let best = Move::new(Square::G2, Square::G1, MoveFlag::Normal);
        let moves = legal_moves(&board, &tables);
        let ordered = order_moves(&board, moves, &killers, Some(best));
        assert_eq!(ordered[0], best);
        assert_eq!(ordered[1], killer);
    }
}
