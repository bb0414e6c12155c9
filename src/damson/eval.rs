use crate::*;

/*----------------------------------------------------------------*/

/// Total piece count below which the king switches to its endgame table.
const ENDGAME_PIECE_COUNT: u32 = 16;

/// Static score for the position, always from White's perspective: positive
/// favors White, negative favors Black. The search negates it for the side
/// to move.
pub fn evaluate(board: &Board) -> i32 {
    material(board) + piece_positions(board)
}

/*----------------------------------------------------------------*/

/// Material balance over the five non-king piece kinds.
fn material(board: &Board) -> i32 {
    let mut score = 0;

    for kind in [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ] {
        let white = board.pieces(Piece::new(kind, Color::White)).popcnt() as i32;
        let black = board.pieces(Piece::new(kind, Color::Black)).popcnt() as i32;

        score += (white - black) * kind.value();
    }

    score
}

fn piece_positions(board: &Board) -> i32 {
    let king_pst: &[i32; 64] = if is_endgame(board) {
        &KING_ENDGAME_PST
    } else {
        &KING_MIDGAME_PST
    };

    let mut score = 0;

    score += pst_score(board, PieceKind::Pawn, &PAWN_PST);
    score += pst_score(board, PieceKind::Knight, &KNIGHT_PST);
    score += pst_score(board, PieceKind::Bishop, &BISHOP_PST);
    score += pst_score(board, PieceKind::Rook, &ROOK_PST);
    score += pst_score(board, PieceKind::Queen, &QUEEN_PST);
    score += pst_score(board, PieceKind::King, king_pst);

    score
}

/// White reads the table directly, Black through the 63 - square mirror.
fn pst_score(board: &Board, kind: PieceKind, table: &[i32; 64]) -> i32 {
    let mut score = 0;

    for sq in board.pieces(Piece::new(kind, Color::White)) {
        score += table[sq as usize];
    }

    for sq in board.pieces(Piece::new(kind, Color::Black)) {
        score -= table[sq.mirror() as usize];
    }

    score
}

fn is_endgame(board: &Board) -> bool {
    board.occupied().popcnt() < ENDGAME_PIECE_COUNT
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damson::test_util::mirrored_fen;

    #[test]
    fn startpos_is_balanced() {
        assert_eq!(evaluate(&Board::default()), 0);
    }

    #[test]
    fn material_counts() {
        // White is a knight up, Black a pawn up.
        let board = Board::from_fen("4k3/pppp4/8/8/8/8/PPP5/4K1N1 w - - 0 1").unwrap();

        assert_eq!(material(&board), 300 - 100);
    }

    /// Mirroring a position negates its score.
    #[test]
    fn evaluation_symmetry() {
        let fens = [
            "4k3/pppp4/8/8/8/8/PPP5/4K1N1 w - - 0 1",
            "4k3/2p5/3p4/1P5r/1R3p2/8/4P1P1/4K3 w - - 0 1",
            "r2q1rk1/p4ppp/2p1pn2/8/2BP4/2N5/PP3PPP/R2Q1RK1 b - - 4 12",
            "8/5k2/8/3K4/8/8/8/8 w - - 0 1",
        ];

        for fen in fens {
            let board = Board::from_fen(fen).unwrap();
            let mirror = Board::from_fen(&mirrored_fen(fen)).unwrap();

            assert_eq!(evaluate(&board), -evaluate(&mirror), "fen: {}", fen);
        }
    }

    #[test]
    fn king_table_switches_with_the_phase() {
        // Two kings only: deep endgame, the centralized king is ahead.
        let central = Board::from_fen("7k/8/8/4K3/8/8/8/8 w - - 0 1").unwrap();
        assert!(evaluate(&central) > 0);
        assert!(is_endgame(&central));

        // With full material on the board the same king placement reads
        // from the middlegame table, which punishes the walk.
        let crowded = Board::from_fen(
            "rnbqkbnr/pppppppp/8/8/4K3/8/PPPPPPPP/RNBQ1BNR w - - 0 1",
        ).unwrap();
        assert!(!is_endgame(&crowded));
        assert_eq!(KING_ENDGAME_PST[Square::E5 as usize], 40);
        assert_eq!(KING_MIDGAME_PST[Square::E4 as usize], -40);
    }
}
