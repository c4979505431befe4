//! Exterior and interior tile banks, supertiles and the exterior map.
//!
//! The bank split matches the original layout: supertile indices 0..=44
//! resolve through bank 0, 45..=138 and 204..=217 through bank 1, and
//! 139..=203 through bank 2. Interiors use a single bank of their own.
//!
//! The pixel content here is generated placeholder artwork; the shapes,
//! index ranges and bank selection rules are the real ones, and every
//! consumer (including the pseudo-random nibble source) goes through them.

use once_cell::sync::Lazy;

use crate::graphics::{Supertile, Tile};

pub const MAP_WIDTH: usize = 54;
pub const MAP_HEIGHT: usize = 34;

pub const SUPERTILES_LENGTH: usize = 218;

const fn gen_tile(seed: u8, index: usize, row: usize) -> u8 {
    let t = index as u8;
    let r = row as u8;
    seed ^ t
        .wrapping_mul(29)
        .wrapping_add(r.wrapping_mul(83))
        .wrapping_add(t >> 3)
        .rotate_left((r & 7) as u32)
}

const fn gen_bank<const N: usize>(seed: u8) -> [Tile; N] {
    let mut bank = [Tile([0; 8]); N];
    let mut t = 0;
    while t < N {
        let mut r = 0;
        while r < 8 {
            bank[t].0[r] = gen_tile(seed, t, r);
            r += 1;
        }
        t += 1;
    }
    bank
}

pub static EXTERIOR_TILES_0: [Tile; 256] = gen_bank(0x1D);
pub static EXTERIOR_TILES_1: [Tile; 256] = gen_bank(0x5B);
pub static EXTERIOR_TILES_2: [Tile; 256] = gen_bank(0xA7);
pub static INTERIOR_TILES: [Tile; 256] = gen_bank(0x3E);

const fn gen_supertiles() -> [Supertile; SUPERTILES_LENGTH] {
    let mut out = [Supertile([0; 16]); SUPERTILES_LENGTH];
    let mut s = 0;
    while s < SUPERTILES_LENGTH {
        let mut i = 0;
        while i < 16 {
            out[s].0[i] = (s as u8)
                .wrapping_mul(13)
                .wrapping_add((i as u8).wrapping_mul(47))
                .wrapping_add(s as u8 >> 2);
            i += 1;
        }
        s += 1;
    }
    out
}

pub static SUPERTILES: [Supertile; SUPERTILES_LENGTH] = gen_supertiles();

const fn gen_map() -> [u8; MAP_WIDTH * MAP_HEIGHT] {
    let mut map = [0u8; MAP_WIDTH * MAP_HEIGHT];
    let mut i = 0;
    while i < map.len() {
        let x = i % MAP_WIDTH;
        let y = i / MAP_WIDTH;
        // A stable spread over all three banks' index ranges.
        let mix = (x as u8).wrapping_mul(7).wrapping_add((y as u8).wrapping_mul(19));
        map[i] = mix % (SUPERTILES_LENGTH as u8);
        i += 1;
    }
    map
}

pub static MAP: [u8; MAP_WIDTH * MAP_HEIGHT] = gen_map();

/// The fixed 256-nibble pseudo-random source: the low nibbles of the
/// first exterior tile bank, read in order.
pub static RANDOM_NIBBLES: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut out = [0u8; 256];
    for (index, nibble) in out.iter_mut().enumerate() {
        *nibble = EXTERIOR_TILES_0[index >> 3].0[index & 7] & 0x0F;
    }
    out
});

/// Which exterior bank a supertile index selects.
pub fn exterior_bank(supertile: u8) -> &'static [Tile; 256] {
    match supertile {
        0..=44 => &EXTERIOR_TILES_0,
        45..=138 | 204..=255 => &EXTERIOR_TILES_1,
        139..=203 => &EXTERIOR_TILES_2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_references_valid_supertiles() {
        for &s in MAP.iter() {
            assert!((s as usize) < SUPERTILES_LENGTH);
        }
    }

    #[test]
    fn bank_selection_ranges() {
        assert!(core::ptr::eq(exterior_bank(0), &EXTERIOR_TILES_0));
        assert!(core::ptr::eq(exterior_bank(44), &EXTERIOR_TILES_0));
        assert!(core::ptr::eq(exterior_bank(45), &EXTERIOR_TILES_1));
        assert!(core::ptr::eq(exterior_bank(138), &EXTERIOR_TILES_1));
        assert!(core::ptr::eq(exterior_bank(139), &EXTERIOR_TILES_2));
        assert!(core::ptr::eq(exterior_bank(203), &EXTERIOR_TILES_2));
        assert!(core::ptr::eq(exterior_bank(204), &EXTERIOR_TILES_1));
    }

    #[test]
    fn nibble_table_mirrors_tile_bank() {
        for i in 0..256 {
            assert_eq!(RANDOM_NIBBLES[i], EXTERIOR_TILES_0[i >> 3].0[i & 7] & 0x0F);
        }
    }
}
