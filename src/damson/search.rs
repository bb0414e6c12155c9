use std::{sync::Arc, thread, time::Duration};

use crate::*;

/*----------------------------------------------------------------*/

pub const MAX_DEPTH: u8 = 64;

/// Alpha-beta window bound; checkmate for the side to move scores its
/// negation.
pub const INFINITY: i32 = 100_000;
pub const MATE_SCORE: i32 = 100_000;

/// How often the deep recursion polls the clock, in nodes.
const STOP_CHECK_INTERVAL: u64 = 4096;

/*----------------------------------------------------------------*/

/// One search at a time: iterative deepening over a cancellable root
/// driver around a negamax core with alpha-beta pruning.
pub struct Searcher {
    pub tables: AttackTables,
    pub pos: Position,
    time_man: Arc<TimeManager>,
    killers: [Killers; MAX_DEPTH as usize + 1],
    nodes: u64,
    stopped: bool,
}

impl Searcher {
    pub fn new(board: Board, time_man: Arc<TimeManager>) -> Searcher {
        Searcher {
            tables: AttackTables::new(),
            pos: Position::new(board),
            time_man,
            killers: [Killers::new(); MAX_DEPTH as usize + 1],
            nodes: 0,
            stopped: false,
        }
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub fn set_position(&mut self, board: Board, moves: &[Move]) {
        self.pos.set_board(board);

        for &mv in moves {
            self.pos.make_move(mv);
        }
    }

    /*----------------------------------------------------------------*/

    /// Runs the iterative-deepening loop and returns the last fully
    /// completed depth's move and score (side-to-move relative). `None`
    /// means the position has no legal move or is a fifty-move draw.
    pub fn search(&mut self, limits: &[SearchLimit]) -> (Option<Move>, i32) {
        self.time_man.init(self.pos.board().stm(), limits);
        self.killers = [Killers::new(); MAX_DEPTH as usize + 1];
        self.nodes = 0;
        self.stopped = false;

        let max_depth = limits
            .iter()
            .find_map(|limit| match limit {
                SearchLimit::MaxDepth(depth) => Some((*depth).clamp(1, MAX_DEPTH)),
                _ => None,
            })
            .unwrap_or(MAX_DEPTH);

        let mut best = None;
        let mut best_score = 0;

        for depth in 1..=max_depth {
            match self.root_search(depth, best) {
                Some((mv, score)) => {
                    best = Some(mv);
                    best_score = score;
                    self.report(depth, score);
                }
                None => break,
            }

            if self.time_man.should_stop() {
                break;
            }
        }

        // An infinite search holds its answer until told to stop.
        while self.time_man.is_infinite() && !self.time_man.should_stop() {
            thread::sleep(Duration::from_millis(10));
        }

        (best, best_score)
    }

    /// Searches the root to `depth`. Returns `None` when there is nothing
    /// to report: no legal moves, a fifty-move draw, or a cancelled depth.
    fn root_search(&mut self, depth: u8, prev_best: Option<Move>) -> Option<(Move, i32)> {
        let board = self.pos.board();
        let moves = legal_moves(board, &self.tables);

        if moves.is_empty() || board.halfmove_clock() == 100 {
            return None;
        }

        let ordered = order_moves(board, moves, &self.killers[depth as usize], prev_best);

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best = None;
        let mut best_score = -INFINITY;

        for mv in ordered {
            if self.time_man.should_stop() {
                return None;
            }

            self.pos.make_move(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha);
            self.pos.unmake_move();

            if self.stopped {
                return None;
            }

            if best.is_none() || score > best_score {
                best = Some(mv);
                best_score = score;
            }

            alpha = alpha.max(score);
            self.nodes += 1;
        }

        best.map(|mv| (mv, best_score))
    }

    /// Negamax with alpha-beta pruning, side-to-move relative. A quiet move
    /// that fails high is remembered as a killer for this depth.
    fn negamax(&mut self, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if self.nodes % STOP_CHECK_INTERVAL == 0 && self.time_man.should_stop() {
            self.stopped = true;
        }

        if self.stopped {
            return 0;
        }

        let board = self.pos.board();

        if depth == 0 {
            return board.stm().sign() * evaluate(board);
        }

        let moves = legal_moves(board, &self.tables);

        if moves.is_empty() {
            return if in_check(board, &self.tables) {
                -MATE_SCORE
            } else {
                0
            };
        }

        if board.halfmove_clock() == 100 {
            return 0;
        }

        let ordered = order_moves(board, moves, &self.killers[depth as usize], None);

        for mv in ordered {
            self.pos.make_move(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha);
            self.pos.unmake_move();

            if self.stopped {
                return 0;
            }

            if score >= beta {
                if !is_capture(self.pos.board(), mv) {
                    self.killers[depth as usize].push(mv);
                }

                return beta;
            }

            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }

    /*----------------------------------------------------------------*/

    fn report(&self, depth: u8, score: i32) {
        let elapsed = self.time_man.elapsed().as_millis().max(1) as u64;

        println!(
            "info depth {} score cp {} time {} nodes {} nps {}",
            depth,
            score,
            elapsed,
            self.nodes,
            self.nodes * 1000 / elapsed,
        );
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damson::test_util::mirrored_fen;

    fn fixed_depth_search(fen: &str, depth: u8) -> (Option<Move>, i32) {
        let time_man = Arc::new(TimeManager::new());
        let mut searcher = Searcher::new(Board::from_fen(fen).unwrap(), time_man);

        // A wide move-time keeps the clock out of fixed-depth results.
        searcher.search(&[
            SearchLimit::MaxDepth(depth),
            SearchLimit::MoveTime(Duration::from_secs(3600)),
        ])
    }

    #[test]
    fn finds_mate_in_one() {
        let (best, score) = fixed_depth_search("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1", 2);

        assert_eq!(best.unwrap().to_string(), "a1a8");
        assert_eq!(score, MATE_SCORE);
    }

    #[test]
    fn prefers_the_hanging_queen() {
        let (best, _) = fixed_depth_search("3qk3/8/8/8/8/8/3R4/3RK3 w - - 0 1", 3);

        assert_eq!(best.unwrap().to_string(), "d2d8");
    }

    #[test]
    fn reports_nothing_when_mated() {
        let (best, _) = fixed_depth_search(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            3,
        );

        assert_eq!(best, None);
    }

    #[test]
    fn reports_nothing_in_stalemate() {
        let (best, _) = fixed_depth_search("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", 3);

        assert_eq!(best, None);
    }

    #[test]
    fn fifty_move_clock_ends_the_search() {
        let (best, _) = fixed_depth_search("4k3/8/8/8/8/8/8/4K2R w - - 100 80", 3);

        assert_eq!(best, None);
    }

    /// The zero-sum property: the same search from the other side of a
    /// color-swapped mirror yields the same side-to-move-relative score.
    #[test]
    fn search_is_zero_sum_under_mirroring() {
        let fens = [
            "4k3/pp6/8/8/8/6P1/4P3/4K3 w - - 0 1",
            "r2q1rk1/p4ppp/2p1pn2/8/2BP4/2N5/PP3PPP/R2Q1RK1 b - - 4 12",
        ];

        for fen in fens {
            let (_, score) = fixed_depth_search(fen, 3);
            let (_, mirror_score) = fixed_depth_search(&mirrored_fen(fen), 3);

            assert_eq!(score, mirror_score, "fen: {}", fen);
        }
    }

    /// Cancelling mid-search still reports the best move found so far and
    /// leaves the position exactly as it was.
    #[test]
    fn cancellation_unwinds_the_position() {
        let time_man = Arc::new(TimeManager::new());
        let mut searcher = Searcher::new(Board::default(), Arc::clone(&time_man));
        let before = searcher.pos.board().clone();

        let stopper = {
            let time_man = Arc::clone(&time_man);

            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                time_man.stop();
            })
        };

        let (best, _) = searcher.search(&[SearchLimit::Infinite]);
        stopper.join().unwrap();

        assert!(best.is_some());
        assert_eq!(*searcher.pos.board(), before);
    }
}
