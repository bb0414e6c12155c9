use rand::Rng;

use crate::{AttackTables, Bitboard, Square, blocker_subsets};

/*----------------------------------------------------------------*/

/// Magic multipliers for bishop attack hashing, one per square. Found
/// offline with [`find_magic`] and validated collision-free over every
/// blocker subset of the square's relevant mask.
pub const BISHOP_MAGICS: [u64; Square::COUNT] = [
    0x14180A1412420200, 0x4180A024301E10D2, 0x02C46E4CE0844901, 0x0441004020024410,
    0x210020A024A09802, 0x520198876B08082C, 0x10E0911382012051, 0x42508200808440C0,
    0x02201B2101011503, 0x459850100A830086, 0x80400A9007120260, 0x180A60A104240400,
    0x1E18800084041030, 0x3191708348080418, 0x04420108B804044C, 0x0C311D0820046544,
    0x70884D010E0111A7, 0x21044808410448D0, 0x423E888102010101, 0x49A7412012021503,
    0xB600346013001807, 0x8042E01150104800, 0x140A08228CEBD922, 0x494A012C4009E00B,
    0x2325E70200410084, 0xC044040886440990, 0x8921022200808802, 0x0032900880440020,
    0x8444120080980080, 0x8101240300100112, 0x4CAE066004701102, 0x002238051640900A,
    0x2261850246104A0A, 0x9211822403051020, 0x00080A0028410088, 0x0602002022008141,
    0x10C0110026004900, 0x001808082B021020, 0x08021220204C0423, 0x4010112040246310,
    0x0800F02841280388, 0x8820C06988045001, 0x010200A502920100, 0x3284804C00A01070,
    0x01140108240410B0, 0x0814409202040100, 0xC110133204250408, 0x2E20039021024189,
    0x94E034848C01A000, 0x8020852C1006280C, 0x2402210120130304, 0x80D6091140000000,
    0x040CA82184A10830, 0x004EC10450808002, 0x00425A8248210100, 0xF4185010304302D2,
    0x2404402C88201000, 0x011080842120001D, 0x1C46282088010108, 0x0E540C608C200208,
    0xB959040B08940200, 0x0889540102013010, 0xA860118410808041, 0x088A18020404022A,
];

/// Magic multipliers for rook attack hashing, one per square.
pub const ROOK_MAGICS: [u64; Square::COUNT] = [
    0x4602D109A4814402, 0x101948101201209C, 0x0A01004400080A09, 0x000600305805204A,
    0x9001001000080521, 0x2511402860010091, 0x0250400193028021, 0x15038108E2004032,
    0x8000840B05509200, 0x1841D00601080400, 0x0243020004008080, 0x006C11000801C500,
    0x81CCC80010068080, 0x0209410012A00700, 0x4004820301C0EA00, 0x0380042194400080,
    0x38000402A44A0009, 0x0840C1380A040010, 0xA04A042040180110, 0x2820310008010044,
    0xE518A200407A0010, 0x2528821200420020, 0x0820005004A44000, 0x80303180C0008002,
    0x0442940942000889, 0x0881821584001810, 0x29B2009822004450, 0xE108110501001800,
    0xF173805001800800, 0x0110842000801000, 0x04D8200040C01000, 0x340C8009C1002101,
    0x0645488200054401, 0xCAC3126400108108, 0xB282008200100804, 0x9408012900100500,
    0x000211E200084200, 0x0011420200188060, 0x0A0840008020048C, 0x010681A08000C012,
    0x04000A0001095194, 0x028C240070122D28, 0xC84101000C00484E, 0x1013250028010070,
    0x2250010048306100, 0x6609420022008251, 0x5420848020004001, 0xB0C1608000400485,
    0x24028003C3001080, 0x2822000802004584, 0x0D0200101826004C, 0x5B9D001100280006,
    0x82D3001000230058, 0x042A002180B60140, 0x2119002040010880, 0x90C080012180400E,
    0x0080068003422100, 0x0A00075200080284, 0x15000900A80C0006, 0x320018220044E010,
    0x3D00046100500028, 0x0280200008801000, 0xA4C000D002A00042, 0x008000C002908820,
];

/*----------------------------------------------------------------*/

/// Brute-force search for a magic multiplier for one square. Offline
/// utility only: the engine ships with the fixed constants above and never
/// calls this at runtime.
///
/// Samples sparse candidates (the AND of two uniform words, rejected below
/// six set bits) until one hashes every blocker subset of the square's
/// relevant mask without a destructive collision.
pub fn find_magic(tables: &AttackTables, sq: Square, bishop: bool) -> u64 {
    let mask = if bishop { tables.bishop_mask(sq) } else { tables.rook_mask(sq) };
    let shift = 64 - mask.popcnt();

    let subsets = blocker_subsets(mask);
    let attacks = subsets.iter()
        .map(|&subset| if bishop {
            tables.bishop_attacks_slow(sq, subset)
        } else {
            tables.rook_attacks_slow(sq, subset)
        })
        .collect::<Vec<_>>();

    let mut rng = rand::rng();

    loop {
        let candidate = rng.random::<u64>() & rng.random::<u64>();

        if candidate.count_ones() < 6 {
            continue;
        }

        let mut table = vec![Bitboard::EMPTY; subsets.len()];
        let mut collided = false;

        for (&subset, &attack) in subsets.iter().zip(&attacks) {
            let index = (subset.0.wrapping_mul(candidate) >> shift) as usize;

            if table[index].is_empty() {
                table[index] = attack;
            } else if table[index] != attack {
                collided = true;
                break;
            }
        }

        if !collided {
            return candidate;
        }
    }
}

/// Searches all 64 squares for both slider families and prints tables
/// ready to paste over the constants above.
pub fn find_magics(tables: &AttackTables) {
    for (name, bishop) in [("bishop", true), ("rook", false)] {
        println!("Magic numbers for {}:", name);

        for &sq in &Square::ALL {
            print!("{:#018X}, ", find_magic(tables, sq, bishop));

            if sq as usize % 4 == 3 {
                println!();
            }
        }

        println!();
    }
}
