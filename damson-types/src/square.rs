use std::{fmt, str::FromStr};

use crate::{Bitboard, File, Rank};

/*----------------------------------------------------------------*/

/// Squares numbered rank-major from Black's back rank: a8 is 0, h8 is 7,
/// a1 is 56, h1 is 63. Square `s` occupies bit `63 - s` of a bitboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Square {
    A8, B8, C8, D8, E8, F8, G8, H8,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A1, B1, C1, D1, E1, F1, G1, H1,
}

impl Square {
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square::index((rank as usize) * 8 + file as usize)
    }

    #[inline]
    pub const fn index(i: usize) -> Square {
        if i >= Self::COUNT {
            panic!("Square::index(): Index out of bounds");
        }

        Self::ALL[i]
    }

    #[inline]
    pub const fn try_index(i: usize) -> Option<Square> {
        if i < Self::COUNT { Some(Self::ALL[i]) } else { None }
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub const fn file(self) -> File {
        File::index(self as usize % 8)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::index(self as usize / 8)
    }

    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard(1u64 << (63 - self as u32))
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub const fn try_offset(self, dx: i8, dy: i8) -> Option<Square> {
        let file = self as i8 % 8 + dx;
        let rank = self as i8 / 8 + dy;

        if file < 0 || file >= File::COUNT as i8 || rank < 0 || rank >= Rank::COUNT as i8 {
            return None;
        }

        Some(Square::index((rank * 8 + file) as usize))
    }

    /// The 180-degree rotation of this square, pairing each square with the
    /// one whose piece-square-table entry mirrors it for the other color.
    #[inline]
    pub const fn mirror(self) -> Square {
        Square::index(63 - self as usize)
    }

    /*----------------------------------------------------------------*/

    pub const COUNT: usize = 64;
    pub const ALL: [Square; Self::COUNT] = [
        Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
        Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
        Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
        Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
        Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
        Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
        Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
        Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
    ];
}

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SquareParseError {
    InvalidFile,
    InvalidRank,
}

impl FromStr for Square {
    type Err = SquareParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next()
            .and_then(|c| File::try_from(c).ok())
            .ok_or(SquareParseError::InvalidFile)?;
        let rank = chars.next()
            .and_then(|c| Rank::try_from(c).ok())
            .ok_or(SquareParseError::InvalidRank)?;

        Ok(Square::new(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", char::from(self.file()), char::from(self.rank()))
    }
}

/*----------------------------------------------------------------*/

#[test]
fn validate_squares() {
    let a8 = Square::A8;

    assert_eq!(Square::index(0), a8);
    assert_eq!(a8.bitboard(), Bitboard(0x8000000000000000));
    assert_eq!(a8.file(), File::A);
    assert_eq!(a8.rank(), Rank::Eighth);
    assert_eq!(a8.try_offset(-1, 0), None);
    assert_eq!(a8.try_offset(0, -1), None);
    assert_eq!(a8.try_offset(1, 0), Some(Square::B8));
    assert_eq!(a8.try_offset(0, 1), Some(Square::A7));

    let h1 = Square::H1;

    assert_eq!(Square::index(63), h1);
    assert_eq!(h1.bitboard(), Bitboard(0x1));
    assert_eq!(h1.try_offset(1, 0), None);
    assert_eq!(h1.try_offset(0, 1), None);
    assert_eq!(h1.try_offset(-1, -1), Some(Square::G2));

    let e4 = Square::E4;

    assert_eq!(e4 as usize, 36);
    assert_eq!(e4.mirror(), Square::D5);
    assert_eq!("e4".parse::<Square>(), Ok(e4));
    assert_eq!(e4.to_string(), "e4");
    assert_eq!(Square::new(File::E, Rank::Fourth), e4);
    assert!("e9".parse::<Square>().is_err());
    assert!("x4".parse::<Square>().is_err());
}
