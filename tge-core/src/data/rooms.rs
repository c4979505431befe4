//! Room definitions, interior objects and the interior mask table.
//!
//! A room definition is a byte stream: dimensions index; a count of
//! object bounds followed by (x0,x1,y0,y1) tuples; a count of interior
//! mask references; a count of objects followed by (object, column, row)
//! triples. A handful of object bytes are shadowed by game state so beds,
//! benches and the tunnel blockage can change at runtime without touching
//! this table.

use super::MaskDef;

/// Maximum interior mask references any room definition carries.
pub const MAX_INTERIOR_MASKS: usize = 7;

/// Interior object identifiers.
pub mod object {
    pub const EMPTY_BED_FACING_SE: u8 = 0;
    pub const OCCUPIED_BED: u8 = 1;
    pub const EMPTY_BENCH: u8 = 2;
    pub const PRISONER_SAT_MID_TABLE: u8 = 3;
    pub const PRISONER_SAT_END_TABLE: u8 = 4;
    pub const TABLE: u8 = 5;
    pub const STOVE_PIPE: u8 = 6;
    pub const PACKING_CASE: u8 = 7;
    pub const DOOR_FRAME_NW: u8 = 8;
    pub const DOOR_FRAME_NE: u8 = 9;
    pub const DOOR_FRAME_SW: u8 = 10;
    pub const DOOR_FRAME_SE: u8 = 11;
    pub const WALL_SECTION: u8 = 12;
    pub const WINDOW: u8 = 13;
    pub const CUPBOARD: u8 = 14;
    pub const SHELVES: u8 = 15;
    pub const CHAIR_FACING_SE: u8 = 16;
    pub const KEY_RACK: u8 = 17;
    pub const WARDROBE: u8 = 18;
    pub const SINK: u8 = 19;
    pub const TUNNEL_JOIN: u8 = 20;
    pub const COLLAPSED_TUNNEL_SW_NE: u8 = 21;
    pub const TUNNEL_OPEN_SW_NE: u8 = 22;
    pub const TUNNEL_PROP: u8 = 23;
    pub const LIMIT: u8 = 24;
}

/// Walkable interior extents selected by a dimensions index.
#[derive(Debug, Clone, Copy)]
pub struct RoomDims {
    pub umin: u8,
    pub umax: u8,
    pub vmin: u8,
    pub vmax: u8,
}

static DIMENSIONS: [RoomDims; 4] = [
    RoomDims { umin: 22, umax: 66, vmin: 22, vmax: 66 },
    RoomDims { umin: 26, umax: 62, vmin: 26, vmax: 62 },
    RoomDims { umin: 24, umax: 56, vmin: 24, vmax: 56 },
    RoomDims { umin: 28, umax: 48, vmin: 28, vmax: 48 },
];

pub fn dimensions(index: u8) -> &'static RoomDims {
    &DIMENSIONS[(index as usize).min(DIMENSIONS.len() - 1)]
}

/// Object graphics, RLE encoded: width, height, then a stream in which a
/// plain byte is a tile, `FF 4n t` emits an incrementing run of n tiles
/// from t, `FF 8n t` repeats t n times, and `FF FF` emits a literal 0xFF.
/// Tile zero is transparent and skipped.
pub static OBJECT_DEFS: [&[u8]; object::LIMIT as usize] = [
    // EMPTY_BED_FACING_SE
    &[4, 3, 0xFF, 0x44, 0x60, 0xFF, 0x44, 0x68, 0xFF, 0x44, 0x70],
    // OCCUPIED_BED
    &[4, 3, 0xFF, 0x44, 0x78, 0xFF, 0x44, 0x80, 0xFF, 0x44, 0x88],
    // EMPTY_BENCH
    &[3, 2, 0x90, 0x91, 0x92, 0x93, 0x94, 0x95],
    // PRISONER_SAT_MID_TABLE
    &[3, 3, 0x96, 0x97, 0x98, 0x99, 0x9A, 0x9B, 0x9C, 0x9D, 0x9E],
    // PRISONER_SAT_END_TABLE
    &[3, 3, 0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8],
    // TABLE
    &[5, 2, 0xFF, 0x45, 0xB0, 0xFF, 0x45, 0xB8],
    // STOVE_PIPE
    &[2, 4, 0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7],
    // PACKING_CASE
    &[3, 3, 0xFF, 0x43, 0xC8, 0xFF, 0x43, 0xCC, 0xFF, 0x43, 0xD0],
    // DOOR_FRAME_NW
    &[2, 5, 0xFF, 0x8A, 0xD4],
    // DOOR_FRAME_NE
    &[2, 5, 0xFF, 0x8A, 0xD5],
    // DOOR_FRAME_SW
    &[2, 5, 0xFF, 0x8A, 0xD6],
    // DOOR_FRAME_SE
    &[2, 5, 0xFF, 0x8A, 0xD7],
    // WALL_SECTION: includes a literal 0xFF tile
    &[6, 2, 0xFF, 0x84, 0xD8, 0xFF, 0xFF, 0xD9, 0xFF, 0x84, 0xDA, 0xFF, 0xFF, 0xDB],
    // WINDOW
    &[2, 2, 0xDC, 0xDD, 0xDE, 0xDF],
    // CUPBOARD
    &[2, 3, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5],
    // SHELVES
    &[3, 2, 0xFF, 0x43, 0xE6, 0xFF, 0x43, 0xEA],
    // CHAIR_FACING_SE
    &[2, 2, 0xEE, 0xEF, 0xF0, 0xF1],
    // KEY_RACK
    &[2, 2, 0xF2, 0xF3, 0xF4, 0xF5],
    // WARDROBE
    &[2, 4, 0xFF, 0x88, 0xF6],
    // SINK
    &[2, 2, 0xF7, 0xF8, 0xF9, 0xFA],
    // TUNNEL_JOIN
    &[4, 2, 0xFF, 0x44, 0x40, 0xFF, 0x44, 0x48],
    // COLLAPSED_TUNNEL_SW_NE
    &[4, 3, 0xFF, 0x44, 0x50, 0xFF, 0x84, 0x58, 0xFF, 0x44, 0x50],
    // TUNNEL_OPEN_SW_NE
    &[4, 3, 0xFF, 0x44, 0x40, 0xFF, 0x84, 0x00, 0xFF, 0x44, 0x48],
    // TUNNEL_PROP
    &[1, 3, 0x5C, 0x5D, 0x5E],
];

// Bespoke room layouts. Rooms sharing a template share a definition; the
// shadowed rooms have their own so object offsets stay stable.

static ROOMDEF_HUT_LEFT: [u8; 18] = [
    1, // dimensions
    1, 50, 60, 34, 44, // bounds: the bed
    1, 40, // mask refs
    3, // objects
    object::OCCUPIED_BED, 6, 6,
    object::TABLE, 2, 11,
    object::DOOR_FRAME_SE, 12, 2,
];

static ROOMDEF_HUT_RIGHT: [u8; 21] = [
    1,
    1, 48, 60, 30, 48,
    1, 41,
    4,
    object::OCCUPIED_BED, 2, 4,
    object::OCCUPIED_BED, 6, 7,
    object::OCCUPIED_BED, 10, 10,
    object::DOOR_FRAME_SW, 1, 2,
];

static ROOMDEF_MESS_23: [u8; 24] = [
    0,
    1, 36, 52, 30, 40,
    1, 42,
    5,
    object::EMPTY_BENCH, 3, 5,
    object::EMPTY_BENCH, 8, 5,
    object::EMPTY_BENCH, 13, 5,
    object::TABLE, 5, 8,
    object::DOOR_FRAME_NE, 18, 3,
];

static ROOMDEF_MESS_25: [u8; 27] = [
    0,
    1, 36, 52, 30, 40,
    1, 43,
    6,
    object::EMPTY_BENCH, 3, 5,
    object::EMPTY_BENCH, 8, 5,
    object::EMPTY_BENCH, 13, 5,
    object::EMPTY_BENCH, 18, 5,
    object::TABLE, 5, 8,
    object::DOOR_FRAME_NW, 1, 3,
];

static ROOMDEF_TUNNEL_30: [u8; 18] = [
    3,
    1, 30, 46, 30, 46,
    1, 46,
    3,
    object::TUNNEL_JOIN, 4, 6,
    object::COLLAPSED_TUNNEL_SW_NE, 10, 6,
    object::TUNNEL_PROP, 2, 3,
];

static ROOMDEF_SOLITARY: [u8; 15] = [
    3,
    1, 40, 46, 40, 46,
    1, 44,
    2,
    object::DOOR_FRAME_NW, 1, 4,
    object::WINDOW, 8, 1,
];

static ROOMDEF_CORRIDOR: [u8; 14] = [
    2,
    0,
    1, 45,
    3,
    object::DOOR_FRAME_NW, 1, 4,
    object::DOOR_FRAME_SE, 18, 4,
    object::WINDOW, 9, 1,
];

static ROOMDEF_STORE: [u8; 18] = [
    2,
    1, 30, 40, 30, 40,
    1, 46,
    3,
    object::SHELVES, 4, 3,
    object::PACKING_CASE, 10, 8,
    object::DOOR_FRAME_SW, 1, 3,
];

static ROOMDEF_OFFICE: [u8; 22] = [
    2,
    1, 32, 44, 32, 40,
    2, 44, 45,
    4,
    object::TABLE, 6, 8,
    object::CHAIR_FACING_SE, 9, 6,
    object::CUPBOARD, 2, 2,
    object::KEY_RACK, 14, 2,
];

static ROOMDEF_TUNNEL: [u8; 11] = [
    3,
    0,
    1, 46,
    2,
    object::TUNNEL_JOIN, 4, 6,
    object::TUNNEL_PROP, 12, 4,
];

static ROOMDEF_EMPTY: [u8; 8] = [2, 0, 1, 45, 1, object::WINDOW, 9, 1];

/// Room definitions, dense by room index. Index 0 (outdoors) is unused.
pub static ROOMDEFS: [&[u8]; 59] = [
    &ROOMDEF_EMPTY,      // 0: outdoors, never expanded
    &ROOMDEF_HUT_RIGHT,  // 1
    &ROOMDEF_HUT_LEFT,   // 2
    &ROOMDEF_HUT_RIGHT,  // 3
    &ROOMDEF_HUT_LEFT,   // 4
    &ROOMDEF_HUT_RIGHT,  // 5
    &ROOMDEF_EMPTY,      // 6
    &ROOMDEF_CORRIDOR,   // 7
    &ROOMDEF_CORRIDOR,   // 8
    &ROOMDEF_STORE,      // 9
    &ROOMDEF_STORE,      // 10
    &ROOMDEF_OFFICE,     // 11
    &ROOMDEF_CORRIDOR,   // 12
    &ROOMDEF_CORRIDOR,   // 13
    &ROOMDEF_STORE,      // 14
    &ROOMDEF_STORE,      // 15
    &ROOMDEF_CORRIDOR,   // 16
    &ROOMDEF_CORRIDOR,   // 17
    &ROOMDEF_OFFICE,     // 18
    &ROOMDEF_STORE,      // 19
    &ROOMDEF_STORE,      // 20
    &ROOMDEF_CORRIDOR,   // 21
    &ROOMDEF_STORE,      // 22
    &ROOMDEF_MESS_23,    // 23
    &ROOMDEF_SOLITARY,   // 24
    &ROOMDEF_MESS_25,    // 25
    &ROOMDEF_EMPTY,      // 26
    &ROOMDEF_EMPTY,      // 27
    &ROOMDEF_HUT_LEFT,   // 28
    &ROOMDEF_TUNNEL,     // 29
    &ROOMDEF_TUNNEL_30,  // 30
    &ROOMDEF_TUNNEL,     // 31
    &ROOMDEF_TUNNEL,     // 32
    &ROOMDEF_TUNNEL,     // 33
    &ROOMDEF_TUNNEL,     // 34
    &ROOMDEF_TUNNEL,     // 35
    &ROOMDEF_TUNNEL,     // 36
    &ROOMDEF_TUNNEL,     // 37
    &ROOMDEF_TUNNEL,     // 38
    &ROOMDEF_TUNNEL,     // 39
    &ROOMDEF_TUNNEL,     // 40
    &ROOMDEF_TUNNEL,     // 41
    &ROOMDEF_TUNNEL,     // 42
    &ROOMDEF_TUNNEL,     // 43
    &ROOMDEF_TUNNEL,     // 44
    &ROOMDEF_TUNNEL,     // 45
    &ROOMDEF_TUNNEL,     // 46
    &ROOMDEF_TUNNEL,     // 47
    &ROOMDEF_TUNNEL,     // 48
    &ROOMDEF_TUNNEL,     // 49
    &ROOMDEF_TUNNEL,     // 50
    &ROOMDEF_TUNNEL,     // 51
    &ROOMDEF_TUNNEL,     // 52
    &ROOMDEF_TUNNEL,     // 53
    &ROOMDEF_TUNNEL,     // 54
    &ROOMDEF_TUNNEL,     // 55
    &ROOMDEF_TUNNEL,     // 56
    &ROOMDEF_TUNNEL,     // 57
    &ROOMDEF_TUNNEL,     // 58
];

/// Offset of the hero's bed object byte within room 2's definition.
pub const ROOMDEF_2_BED: usize = 9;

/// The six prisoner beds: room plus object byte offset.
pub static BEDS: [(u8, usize); 6] = [(3, 9), (3, 12), (3, 15), (5, 9), (5, 12), (5, 15)];

/// Mess hall bench object offsets.
pub const ROOMDEF_23_BENCH_A: usize = 9;
pub const ROOMDEF_23_BENCH_B: usize = 12;
pub const ROOMDEF_23_BENCH_C: usize = 15;
pub const ROOMDEF_25_BENCH_D: usize = 9;
pub const ROOMDEF_25_BENCH_E: usize = 12;
pub const ROOMDEF_25_BENCH_F: usize = 15;
pub const ROOMDEF_25_BENCH_G: usize = 18;

/// Tunnel blockage object offsets in room 30.
pub const ROOMDEF_30_TUNNEL_JOIN: usize = 9;
pub const ROOMDEF_30_BLOCKAGE: usize = 12;

/// Shadowed (room, offset) addresses, in shadow-slot order: the hero's
/// bed, six prisoner beds, seven benches, and the two tunnel bytes.
pub static SHADOW_ADDRESSES: [(u8, usize); 16] = [
    (2, ROOMDEF_2_BED),
    (3, 9),
    (3, 12),
    (3, 15),
    (5, 9),
    (5, 12),
    (5, 15),
    (23, ROOMDEF_23_BENCH_A),
    (23, ROOMDEF_23_BENCH_B),
    (23, ROOMDEF_23_BENCH_C),
    (25, ROOMDEF_25_BENCH_D),
    (25, ROOMDEF_25_BENCH_E),
    (25, ROOMDEF_25_BENCH_F),
    (25, ROOMDEF_25_BENCH_G),
    (30, ROOMDEF_30_TUNNEL_JOIN),
    (30, ROOMDEF_30_BLOCKAGE),
];

const fn m(index: u8, x0: u8, x1: u8, y0: u8, y1: u8, u: u8, v: u8, w: u8) -> MaskDef {
    MaskDef::new(index, x0, x1, y0, y1, u, v, w)
}

/// Interior mask placements referenced by room definitions.
pub static INTERIOR_MASKS: [MaskDef; 47] = [
    m(15, 2, 6, 2, 6, 30, 30, 26),
    m(16, 4, 8, 2, 6, 34, 30, 26),
    m(17, 6, 10, 2, 6, 38, 30, 26),
    m(18, 8, 12, 2, 6, 42, 30, 26),
    m(19, 10, 14, 2, 6, 46, 30, 26),
    m(20, 12, 16, 2, 6, 50, 30, 26),
    m(21, 14, 18, 2, 6, 54, 30, 26),
    m(22, 16, 20, 2, 6, 58, 30, 26),
    m(23, 2, 6, 6, 10, 30, 34, 26),
    m(24, 4, 8, 6, 10, 34, 34, 26),
    m(25, 6, 10, 6, 10, 38, 34, 26),
    m(26, 8, 12, 6, 10, 42, 34, 26),
    m(27, 10, 14, 6, 10, 46, 34, 26),
    m(28, 12, 16, 6, 10, 50, 34, 26),
    m(29, 14, 18, 6, 10, 54, 34, 26),
    m(15, 2, 6, 8, 12, 30, 40, 26),
    m(16, 4, 8, 8, 12, 34, 40, 26),
    m(17, 6, 10, 8, 12, 38, 40, 26),
    m(18, 8, 12, 8, 12, 42, 40, 26),
    m(19, 10, 14, 8, 12, 46, 40, 26),
    m(20, 12, 16, 8, 12, 50, 40, 26),
    m(21, 14, 18, 8, 12, 54, 40, 26),
    m(22, 16, 20, 8, 12, 58, 40, 26),
    m(23, 2, 6, 10, 14, 30, 44, 26),
    m(24, 4, 8, 10, 14, 34, 44, 26),
    m(25, 6, 10, 10, 14, 38, 44, 26),
    m(26, 8, 12, 10, 14, 42, 44, 26),
    m(27, 10, 14, 10, 14, 46, 44, 26),
    m(28, 12, 16, 10, 14, 50, 44, 26),
    m(29, 14, 18, 10, 14, 54, 44, 26),
    m(15, 4, 8, 4, 8, 32, 32, 28),
    m(16, 6, 10, 4, 8, 36, 32, 28),
    m(17, 8, 12, 4, 8, 40, 32, 28),
    m(18, 10, 14, 4, 8, 44, 32, 28),
    m(19, 12, 16, 4, 8, 48, 32, 28),
    m(20, 14, 18, 4, 8, 52, 32, 28),
    m(21, 16, 20, 4, 8, 56, 32, 28),
    m(22, 2, 6, 12, 16, 30, 48, 28),
    m(23, 4, 8, 12, 16, 34, 48, 28),
    m(24, 6, 10, 12, 16, 38, 48, 28),
    m(25, 8, 12, 12, 16, 42, 48, 28),  // 40: hut left rooms
    m(26, 10, 14, 12, 16, 46, 48, 28), // 41: hut right rooms
    m(27, 12, 16, 12, 16, 50, 48, 28), // 42: mess hall 23
    m(28, 14, 18, 12, 16, 54, 48, 28), // 43: mess hall 25
    m(29, 6, 10, 14, 17, 38, 52, 28),  // 44: offices
    m(15, 8, 12, 14, 17, 42, 52, 28),  // 45: corridors
    m(16, 10, 14, 14, 17, 46, 52, 28), // 46: tunnels
];

/// Fetch a room definition.
pub fn roomdef(room: u8) -> &'static [u8] {
    ROOMDEFS[(room as usize).min(ROOMDEFS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_addresses_point_at_object_bytes() {
        for &(room, offset) in SHADOW_ADDRESSES.iter() {
            let def = roomdef(room);
            assert!(offset < def.len(), "room {room} offset {offset}");
            // The byte at the offset must be an object id.
            assert!(def[offset] < object::LIMIT);
        }
    }

    #[test]
    fn object_defs_are_within_the_tile_bank() {
        for def in OBJECT_DEFS.iter() {
            assert!(def.len() >= 3);
            assert!(def[0] > 0 && def[1] > 0);
        }
    }

    #[test]
    fn interior_masks_reference_interior_strips() {
        for mask in INTERIOR_MASKS.iter() {
            assert!((15..30).contains(&mask.index));
        }
    }
}
