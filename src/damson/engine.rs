use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
        mpsc::{Sender, channel},
    },
    thread,
    time::Instant,
};

use crate::*;

/*----------------------------------------------------------------*/

enum ThreadCommand {
    Go(Vec<SearchLimit>),
    SetPosition(Board, Vec<Move>),
    NewGame,
    Quit,
}

/// Owns the search worker. Searches run off the input thread so that stop
/// requests are seen promptly; `go` while a search is running is a no-op.
pub struct Engine {
    searcher: Arc<Mutex<Searcher>>,
    time_man: Arc<TimeManager>,
    searching: Arc<AtomicBool>,
    sender: Sender<ThreadCommand>,
}

impl Engine {
    pub fn new() -> Engine {
        let time_man = Arc::new(TimeManager::new());
        let searcher = Arc::new(Mutex::new(Searcher::new(
            Board::default(),
            Arc::clone(&time_man),
        )));
        let searching = Arc::new(AtomicBool::new(false));

        let (sender, receiver) = channel::<ThreadCommand>();

        {
            let searcher = Arc::clone(&searcher);
            let searching = Arc::clone(&searching);

            thread::spawn(move || {
                while let Ok(cmd) = receiver.recv() {
                    match cmd {
                        ThreadCommand::Go(limits) => {
                            let mut searcher = searcher.lock().unwrap();

                            let (best, _) = searcher.search(&limits);
                            searching.store(false, Ordering::Relaxed);

                            match best {
                                Some(mv) => println!("bestmove {}", mv),
                                None => println!("bestmove 0000"),
                            }
                        }
                        ThreadCommand::SetPosition(board, moves) => {
                            searcher.lock().unwrap().set_position(board, &moves);
                        }
                        ThreadCommand::NewGame => {
                            searcher.lock().unwrap().set_position(Board::default(), &[]);
                        }
                        ThreadCommand::Quit => return,
                    }
                }
            });
        }

        Engine {
            searcher,
            time_man,
            searching,
            sender,
        }
    }

    /// A handle for asynchronous stop requests (the interrupt handler).
    pub fn time_man(&self) -> Arc<TimeManager> {
        Arc::clone(&self.time_man)
    }

    /*----------------------------------------------------------------*/

    /// Handles one protocol line. Returns false once the engine should
    /// exit.
    pub fn input(&mut self, line: &str) -> bool {
        let cmd = match UciCommand::parse(line) {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("info string ignoring input: {:?}", err);
                return true;
            }
        };

        match cmd {
            UciCommand::Uci => {
                println!("id name damson v{}", env!("CARGO_PKG_VERSION"));
                println!("id author the damson authors");
                println!("uciok");
            }
            UciCommand::IsReady => println!("readyok"),
            UciCommand::NewGame => self.send(ThreadCommand::NewGame),
            UciCommand::Position(board, moves) => {
                self.send(ThreadCommand::SetPosition(board, moves));
            }
            UciCommand::Go(limits) => {
                // One search at a time: a second go is a no-op until the
                // running search has reported.
                if !self.searching.swap(true, Ordering::Relaxed) {
                    self.send(ThreadCommand::Go(limits));
                }
            }
            UciCommand::Stop => self.time_man.stop(),
            UciCommand::Display => {
                let searcher = self.searcher.lock().unwrap();
                let board = searcher.pos.board();

                println!("{:?}", board);
                println!("FEN: {}", board);
            }
            UciCommand::Perft(depth) => {
                let searcher = self.searcher.lock().unwrap();
                let mut board = searcher.pos.board().clone();

                let start = Instant::now();
                let nodes = perft(&mut board, &searcher.tables, depth);
                let elapsed = start.elapsed().as_millis().max(1) as u64;

                println!(
                    "info string perft {} nodes {} time {} nps {}",
                    depth,
                    nodes,
                    elapsed,
                    nodes * 1000 / elapsed,
                );
            }
            UciCommand::FindMagics => {
                let searcher = self.searcher.lock().unwrap();

                find_magics(&searcher.tables);
            }
            UciCommand::Quit => {
                self.time_man.stop();
                self.send(ThreadCommand::Quit);
                return false;
            }
        }

        true
    }

    fn send(&self, cmd: ThreadCommand) {
        // The worker only exits after Quit, so the channel outlives input.
        let _ = self.sender.send(cmd);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
