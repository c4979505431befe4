//! Routes and the location table.
//!
//! A route is a byte string: values with low seven bits below 40 are door
//! pair indices (bit 7 flips which half is approached), values 40..=117
//! index [`LOCATIONS`], and 255 terminates. A route is walked forwards or
//! backwards according to the reverse bit of the route *index* held by the
//! character; that bit also flips the door half actually used.

use crate::math::Pos8;

/// Reverse-traversal flag carried in a route index.
pub const ROUTEINDEX_REVERSE: u8 = 1 << 7;

/// Route index meaning "stand still".
pub const ROUTEINDEX_HALT: u8 = 0;

/// Route index meaning "wander the location block chosen by the step".
pub const ROUTEINDEX_WANDER: u8 = 255;

/// Byte terminating a route.
pub const ROUTEBYTE_END: u8 = 255;

/// First route byte value that indexes [`LOCATIONS`].
pub const ROUTEBYTE_LOCATION_BASE: u8 = 40;

pub const ROUTES_LENGTH: usize = 46;

const fn l(x: u8, y: u8) -> Pos8 {
    Pos8::new(x, y)
}

/// Target locations, in map units outdoors or room units indoors.
///
/// The table is grouped in blocks of eight so that route 255 can pick a
/// random location within the block selected by its step.
pub static LOCATIONS: [Pos8; 78] = [
    // 0..=7: eastern dog compound
    l(68, 84), l(72, 90), l(66, 96), l(70, 102), l(74, 96), l(68, 104), l(72, 86), l(66, 90),
    // 8..=15: hut compound
    l(88, 62), l(96, 66), l(104, 68), l(92, 74), l(100, 62), l(108, 66), l(86, 68), l(94, 68),
    // 16..=23: western strip
    l(46, 58), l(52, 62), l(58, 66), l(46, 70), l(52, 58), l(58, 62), l(50, 66), l(56, 70),
    // 24..=31: southern dog compound
    l(102, 68), l(96, 64), l(90, 70), l(88, 66), l(94, 68), l(100, 64), l(86, 68), l(98, 70),
    // 32..=39: roll call line
    l(98, 64), l(100, 64), l(102, 64), l(104, 64), l(106, 64), l(108, 64), l(110, 64), l(112, 64),
    // 40..=47: approach to the mess block
    l(64, 66), l(66, 62), l(60, 64), l(62, 58), l(58, 60), l(60, 56), l(64, 58), l(62, 66),
    // 48..=55: general camp waypoints
    l(80, 68), l(84, 72), l(78, 62), l(74, 70), l(82, 58), l(76, 58), l(72, 62), l(70, 66),
    // 56..=63: exercise yard
    l(84, 48), l(88, 52), l(92, 46), l(96, 50), l(86, 54), l(90, 44), l(94, 54), l(80, 50),
    // 64..=71: gate approaches
    l(106, 72), l(102, 72), l(98, 72), l(94, 72), l(90, 72), l(86, 72), l(82, 72), l(78, 72),
    // 72..=77: in-room spots (beds, benches, the solitary cell)
    l(60, 46), l(64, 44), l(68, 46), l(58, 50), l(62, 50), l(66, 50),
];

const R: u8 = 1 << 7; // door byte reverse flag

/// All routes, dense by index. Several entries duplicate others; the
/// indices are load-bearing so the table must stay dense.
pub static ROUTES: [&[u8]; ROUTES_LENGTH] = [
    /*  0 */ &[255],
    /*  1 */ &[64, 69, 40, 45, 255],
    /*  2 */ &[56, 57, 58, 59, 63, 60, 255],
    /*  3 */
    &[22 | R, 19 | R, 18 | R, 17 | R, 16 | R, 6 | R, 88, 89, 50, 52, 96, 98, 104, 6, 16, 17, 18, 19, 22, 255],
    /*  4 */ &[104, 105, 255],
    /*  5 */ &[3 | R, 48, 51, 255],
    /*  6 */ &[3 | R, 48, 51, 255],
    /*  7 */ &[112, 255],
    /*  8 */ &[113, 255],
    /*  9 */ &[114, 255],
    /* 10 */ &[112, 255],
    /* 11 */ &[113, 255],
    /* 12 */ &[114, 255],
    /* 13 */ &[115, 255],
    /* 14 */ &[50, 1, 96, 98, 101, 255],
    /* 15 */ &[50, 1, 96, 98, 101, 255],
    /* 16 */ &[48, 5, 27, 113, 255],
    /* 17 */ &[48, 5, 27, 113, 255],
    /* 18 */ &[116, 255],
    /* 19 */ &[117, 255],
    /* 20 */ &[115, 255],
    /* 21 */ &[116, 255],
    /* 22 */ &[117, 255],
    /* 23 */ &[115, 255],
    /* 24 */ &[113, 255],
    /* 25 */ &[114, 255],
    /* 26 */ &[72, 255],
    /* 27 */ &[73, 255],
    /* 28 */ &[74, 255],
    /* 29 */ &[75, 255],
    /* 30 */ &[76, 255],
    /* 31 */ &[77, 255],
    /* 32 */ &[78, 255],
    /* 33 */ &[79, 255],
    /* 34 */ &[72, 255],
    /* 35 */ &[75, 255],
    /* 36 */ &[50, 104, 12, 112, 255],
    /* 37 */ &[12 | R, 104, 255],
    /* 38 */ &[104, 100, 96, 92, 255],
    /* 39 */ &[105, 101, 97, 93, 255],
    /* 40 */ &[106, 102, 98, 94, 255],
    /* 41 */ &[107, 103, 99, 95, 255],
    /* 42 */ &[29, 114, 255],
    /* 43 */ &[113, 116, 255],
    /* 44 */ &[29 | R, 112, 255],
    /* 45 */ &[3 | R, 79, 255],
];

/// Fetch a route's byte string.
pub fn get_route(index: u8) -> &'static [u8] {
    let i = (index & !ROUTEINDEX_REVERSE) as usize;
    if i < ROUTES_LENGTH { ROUTES[i] } else { &ROUTES[0] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_terminated() {
        for (i, route) in ROUTES.iter().enumerate() {
            assert_eq!(*route.last().unwrap(), ROUTEBYTE_END, "route {i}");
        }
    }

    #[test]
    fn route_bytes_are_valid() {
        for (i, route) in ROUTES.iter().enumerate() {
            for &byte in route[..route.len() - 1].iter() {
                let low = byte & 0x7F;
                assert!(
                    low < ROUTEBYTE_LOCATION_BASE || (40..118).contains(&byte),
                    "route {i} byte {byte:#x}"
                );
                if byte >= ROUTEBYTE_LOCATION_BASE && byte != ROUTEBYTE_END {
                    assert!(((byte - ROUTEBYTE_LOCATION_BASE) as usize) < LOCATIONS.len());
                }
            }
        }
    }

    #[test]
    fn reverse_flag_is_masked_by_lookup() {
        assert_eq!(get_route(5), get_route(5 | ROUTEINDEX_REVERSE));
    }
}
