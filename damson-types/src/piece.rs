use std::{fmt, str::FromStr};

use crate::Color;

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(i: usize) -> PieceKind {
        if i >= Self::COUNT {
            panic!("PieceKind::index(): Index out of bounds");
        }

        Self::ALL[i]
    }

    #[inline]
    pub const fn try_index(i: usize) -> Option<PieceKind> {
        if i < Self::COUNT { Some(Self::ALL[i]) } else { None }
    }

    /// Centipawn value used for material counting and capture ordering.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    /*----------------------------------------------------------------*/

    pub const COUNT: usize = 6;
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/*----------------------------------------------------------------*/

/*
Bitboard array slots: White P, N, B, R, Q, K take indices 0-5 and Black the
same kinds take 6-11, so index % 6 is the kind and index / 6 the color.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Piece {
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece::index(kind as usize + 6 * color as usize)
    }

    #[inline]
    pub const fn index(i: usize) -> Piece {
        if i >= Self::COUNT {
            panic!("Piece::index(): Index out of bounds");
        }

        Self::ALL[i]
    }

    #[inline]
    pub const fn try_index(i: usize) -> Option<Piece> {
        if i < Self::COUNT { Some(Self::ALL[i]) } else { None }
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::index(self as usize % 6)
    }

    #[inline]
    pub const fn color(self) -> Color {
        Color::index(self as usize / 6)
    }

    /// The same kind of piece belonging to the other side.
    #[inline]
    pub const fn recolored(self) -> Piece {
        Piece::index((self as usize + 6) % 12)
    }

    /*----------------------------------------------------------------*/

    pub const COUNT: usize = 12;
    pub const ALL: [Piece; Self::COUNT] = [
        Piece::WhitePawn,
        Piece::WhiteKnight,
        Piece::WhiteBishop,
        Piece::WhiteRook,
        Piece::WhiteQueen,
        Piece::WhiteKing,
        Piece::BlackPawn,
        Piece::BlackKnight,
        Piece::BlackBishop,
        Piece::BlackRook,
        Piece::BlackQueen,
        Piece::BlackKing,
    ];
}

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PieceParseError;

impl From<Piece> for char {
    #[inline]
    fn from(piece: Piece) -> char {
        let c = match piece.kind() {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match piece.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(PieceParseError),
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };

        Ok(Piece::new(kind, color))
    }
}

impl FromStr for Piece {
    type Err = PieceParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Piece, PieceParseError> {
        let mut chars = s.chars();
        let c = chars.next().ok_or(PieceParseError)?;

        if chars.next().is_none() {
            c.try_into()
        } else {
            Err(PieceParseError)
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/*----------------------------------------------------------------*/

#[test]
fn validate_pieces() {
    assert_eq!(Piece::WhitePawn as usize, 0);
    assert_eq!(Piece::BlackKing as usize, 11);
    assert_eq!(Piece::new(PieceKind::Rook, Color::Black), Piece::BlackRook);
    assert_eq!(Piece::BlackRook.kind(), PieceKind::Rook);
    assert_eq!(Piece::BlackRook.color(), Color::Black);
    assert_eq!(Piece::WhiteQueen.recolored(), Piece::BlackQueen);
    assert_eq!(Piece::BlackQueen.recolored(), Piece::WhiteQueen);
    assert_eq!(char::from(Piece::WhiteKnight), 'N');
    assert_eq!(Piece::try_from('n'), Ok(Piece::BlackKnight));
    assert!(Piece::try_from('x').is_err());
}
