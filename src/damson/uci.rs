use std::time::Duration;

use crate::*;

/*----------------------------------------------------------------*/

#[derive(Debug, Clone)]
pub enum UciCommand {
    Uci,
    IsReady,
    NewGame,
    Position(Board, Vec<Move>),
    Go(Vec<SearchLimit>),
    Stop,
    Display,
    Perft(u32),
    FindMagics,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLimit {
    WhiteTime(Duration),
    BlackTime(Duration),
    WhiteInc(Duration),
    BlackInc(Duration),
    MoveTime(Duration),
    MovesToGo(u16),
    MaxDepth(u8),
    Infinite,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UciParseError {
    UnknownCommand,
    InvalidArguments,
}

/*----------------------------------------------------------------*/

impl UciCommand {
    /// Parses one protocol line. Errors are recoverable: the caller reports
    /// them and the engine state stays untouched.
    pub fn parse(s: &str) -> Result<UciCommand, UciParseError> {
        let mut reader = s.split_whitespace();
        let token = reader.next().ok_or(UciParseError::UnknownCommand)?;

        match token {
            "uci" => Ok(UciCommand::Uci),
            "isready" => Ok(UciCommand::IsReady),
            "ucinewgame" => Ok(UciCommand::NewGame),
            "stop" => Ok(UciCommand::Stop),
            "quit" | "q" => Ok(UciCommand::Quit),
            "display" | "d" => Ok(UciCommand::Display),
            "findmagics" => Ok(UciCommand::FindMagics),
            "perft" => {
                let depth = reader
                    .next()
                    .and_then(|s| s.parse::<u32>().ok())
                    .ok_or(UciParseError::InvalidArguments)?;

                Ok(UciCommand::Perft(depth))
            }
            "position" => parse_position(&mut reader),
            "go" => parse_go(&mut reader),
            _ => Err(UciParseError::UnknownCommand),
        }
    }
}

/*----------------------------------------------------------------*/

fn parse_position<'a>(
    reader: &mut impl Iterator<Item = &'a str>,
) -> Result<UciCommand, UciParseError> {
    let kind = reader.next().ok_or(UciParseError::InvalidArguments)?;
    let mut saw_moves = false;

    let board = match kind {
        "startpos" => Board::default(),
        "fen" => {
            let mut fen = String::new();

            for part in reader.by_ref() {
                if part == "moves" {
                    saw_moves = true;
                    break;
                }

                fen.push_str(part);
                fen.push(' ');
            }

            Board::from_fen(fen.trim()).map_err(|_| UciParseError::InvalidArguments)?
        }
        _ => return Err(UciParseError::InvalidArguments),
    };

    if !saw_moves {
        saw_moves = reader.next() == Some("moves");
    }

    let mut moves = Vec::new();

    if saw_moves {
        // Replay on a scratch board so each move's special flag resolves
        // against the position it is actually played in.
        let mut scratch = board.clone();

        for token in reader {
            let mv = Move::parse(&scratch, token).map_err(|_| UciParseError::InvalidArguments)?;

            scratch.make_move(mv);
            moves.push(mv);
        }
    }

    Ok(UciCommand::Position(board, moves))
}

fn parse_go<'a>(reader: &mut impl Iterator<Item = &'a str>) -> Result<UciCommand, UciParseError> {
    let mut limits = Vec::new();

    let millis = |token: Option<&str>| {
        token
            .and_then(|s| s.parse::<i64>().ok())
            .map(|ms| Duration::from_millis(ms.max(0) as u64))
            .ok_or(UciParseError::InvalidArguments)
    };

    while let Some(token) = reader.next() {
        limits.push(match token {
            "wtime" => SearchLimit::WhiteTime(millis(reader.next())?),
            "btime" => SearchLimit::BlackTime(millis(reader.next())?),
            "winc" => SearchLimit::WhiteInc(millis(reader.next())?),
            "binc" => SearchLimit::BlackInc(millis(reader.next())?),
            "movetime" => SearchLimit::MoveTime(millis(reader.next())?),
            "movestogo" => {
                let moves = reader
                    .next()
                    .and_then(|s| s.parse::<u16>().ok())
                    .ok_or(UciParseError::InvalidArguments)?;

                SearchLimit::MovesToGo(moves)
            }
            "depth" => {
                let depth = reader
                    .next()
                    .and_then(|s| s.parse::<u8>().ok())
                    .ok_or(UciParseError::InvalidArguments)?;

                SearchLimit::MaxDepth(depth)
            }
            "infinite" => SearchLimit::Infinite,
            _ => return Err(UciParseError::InvalidArguments),
        });
    }

    Ok(UciCommand::Go(limits))
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_position_commands() {
        let cmd = UciCommand::parse("position startpos moves e2e4 e7e5 g1f3").unwrap();

        match cmd {
            UciCommand::Position(board, moves) => {
                assert_eq!(board, Board::default());
                assert_eq!(moves.len(), 3);
                assert_eq!(moves[0].to_string(), "e2e4");
            }
            _ => panic!("expected a position command"),
        }

        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let cmd = UciCommand::parse(&format!("position fen {}", fen)).unwrap();

        match cmd {
            UciCommand::Position(board, moves) => {
                assert_eq!(board.fen(), fen);
                assert!(moves.is_empty());
            }
            _ => panic!("expected a position command"),
        }
    }

    #[test]
    fn resolves_move_flags_against_the_running_position() {
        // e5f6 only becomes en passant because f7f5 was replayed first.
        let cmd = UciCommand::parse("position startpos moves e2e4 g8f6 e4e5 f7f5 e5f6").unwrap();

        match cmd {
            UciCommand::Position(_, moves) => {
                assert!(moves[4].is_en_passant());
            }
            _ => panic!("expected a position command"),
        }
    }

    #[test]
    fn parses_go_limits() {
        let cmd = UciCommand::parse("go wtime 60000 btime 30000 winc 1000 binc 500 movestogo 20").unwrap();

        match cmd {
            UciCommand::Go(limits) => {
                assert_eq!(limits.len(), 5);
                assert_eq!(limits[0], SearchLimit::WhiteTime(Duration::from_millis(60_000)));
                assert_eq!(limits[4], SearchLimit::MovesToGo(20));
            }
            _ => panic!("expected a go command"),
        }

        assert!(matches!(
            UciCommand::parse("go infinite"),
            Ok(UciCommand::Go(limits)) if limits == vec![SearchLimit::Infinite]
        ));
        assert!(matches!(
            UciCommand::parse("go movetime 2000"),
            Ok(UciCommand::Go(limits)) if limits == vec![SearchLimit::MoveTime(Duration::from_secs(2))]
        ));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(UciCommand::parse("").unwrap_err(), UciParseError::UnknownCommand);
        assert_eq!(UciCommand::parse("banana").unwrap_err(), UciParseError::UnknownCommand);
        assert_eq!(UciCommand::parse("position fen not a fen").unwrap_err(), UciParseError::InvalidArguments);
        assert_eq!(UciCommand::parse("position startpos moves e2e9").unwrap_err(), UciParseError::InvalidArguments);
        assert_eq!(UciCommand::parse("go wtime banana").unwrap_err(), UciParseError::InvalidArguments);
        assert_eq!(UciCommand::parse("perft x").unwrap_err(), UciParseError::InvalidArguments);
    }
}
