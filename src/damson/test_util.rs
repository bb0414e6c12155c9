use crate::*;

/// Color-swaps a castling-free FEN by rotating the board 180 degrees, which
/// pairs every square with its piece-square mirror.
pub fn mirrored_fen(fen: &str) -> String {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().unwrap();
    let stm = fields.next().unwrap();
    let castling = fields.next().unwrap();
    let en_passant = fields.next().unwrap();
    let rest = fields.collect::<Vec<_>>().join(" ");

    assert_eq!(castling, "-", "mirroring does not preserve castling geometry");

    let placement = placement
        .split('/')
        .rev()
        .map(|row| {
            row.chars()
                .rev()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/");

    let stm = if stm == "w" { "b" } else { "w" };
    let en_passant = if en_passant == "-" {
        "-".to_string()
    } else {
        en_passant.parse::<Square>().unwrap().mirror().to_string()
    };

    format!("{} {} - {} {}", placement, stm, en_passant, rest)
}
