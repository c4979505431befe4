//! The door table.
//!
//! Doors come in pairs: pair `i` occupies table halves `2i` and `2i+1`,
//! one per side of the doorway. Each half records the destination room,
//! the facing a character must have to pass through, and the door's map
//! position on its own side. The landing position for a half is the
//! *other* half's position.
//!
//! Exterior halves store their positions at twice map scale (a transition
//! scales them by four into fine units); interior halves store room-local
//! coordinates directly.

use crate::math::{Direction, MapPos8};

/// Flag selecting the second half of a door pair.
pub const DOOR_REVERSE: u8 = 1 << 7;

/// Flag marking an entry of the locked-door list as locked.
pub const DOOR_LOCKED: u8 = 1 << 7;

/// Number of door pairs. The first sixteen are exterior.
pub const DOOR_PAIRS: usize = 40;

#[derive(Debug, Clone, Copy)]
pub struct Door {
    pub room_and_direction: u8,
    pub mappos: MapPos8,
}

impl Door {
    pub fn room(&self) -> u8 {
        self.room_and_direction >> 2
    }

    pub fn direction(&self) -> Direction {
        Direction::from_byte(self.room_and_direction)
    }
}

/// Look up one half of a door pair.
pub fn get_door(index: u8) -> &'static Door {
    let pair = (index & !DOOR_REVERSE) as usize;
    debug_assert!(pair < DOOR_PAIRS);
    let half = pair * 2 + usize::from(index & DOOR_REVERSE != 0);
    &DOORS[half.min(DOORS.len() - 1)]
}

const TL: u8 = 0;
const TR: u8 = 1;
const BR: u8 = 2;
const BL: u8 = 3;

const fn door(room: u8, direction: u8, u: u8, v: u8, w: u8) -> Door {
    Door {
        room_and_direction: (room << 2) | direction,
        mappos: MapPos8::new(u, v, w),
    }
}

/// Exterior door positions are stored at double map scale.
const fn ext(room: u8, direction: u8, u: u8, v: u8) -> Door {
    door(room, direction, u * 2, v * 2, 0)
}

/// All door halves. Pairs 0..=15 are exterior, the rest interior.
pub static DOORS: [Door; DOOR_PAIRS * 2] = [
    // 0: main gate (locked at night)
    ext(0, TL, 106, 73),
    ext(0, BR, 110, 73),
    // 1: north gate between the hut compound and the exercise yard (locked)
    ext(0, BL, 69, 64),
    ext(0, TR, 69, 60),
    // 2: hut 1
    ext(28, TR, 106, 79),
    door(0, BL, 28, 50, 24),
    // 3: hut 2
    ext(2, TR, 94, 79),
    door(0, BL, 28, 50, 24),
    // 4: hut 3
    ext(4, TR, 82, 79),
    door(0, BL, 28, 50, 24),
    // 5: mess block
    ext(21, TL, 64, 66),
    door(0, BR, 30, 46, 24),
    // 6: admin block, west door
    ext(7, TL, 100, 62),
    door(0, BR, 30, 46, 24),
    // 7: crate shed
    ext(9, TL, 76, 64),
    door(0, BR, 26, 44, 24),
    // 8: lockpick hut
    ext(10, TL, 110, 62),
    door(0, BR, 26, 44, 24),
    // 9: torch hut
    ext(14, TL, 56, 70),
    door(0, BR, 26, 44, 24),
    // 10: red cross hut
    ext(20, TL, 52, 64),
    door(0, BR, 26, 44, 24),
    // 11: second yard gate
    ext(0, BL, 65, 64),
    ext(0, TR, 65, 60),
    // 12: solitary block (locked)
    ext(24, TL, 60, 46),
    door(0, BR, 58, 46, 24),
    // 13: red key store (locked)
    ext(22, TL, 44, 68),
    door(0, BR, 26, 44, 24),
    // 14: uniform store (locked)
    ext(15, TL, 44, 60),
    door(0, BR, 26, 44, 24),
    // 15: admin block, east door
    ext(16, TL, 100, 58),
    door(0, BR, 30, 44, 24),
    // 16: corridor 7 <-> room 8
    door(8, TL, 20, 46, 24),
    door(7, BR, 52, 46, 24),
    // 17: room 8 <-> corridor 12
    door(12, TR, 36, 28, 24),
    door(8, BL, 36, 62, 24),
    // 18: corridor 12 <-> corridor 13
    door(13, TL, 20, 46, 24),
    door(12, BR, 52, 46, 24),
    // 19: corridor 13 <-> corridor 16
    door(16, TR, 36, 28, 24),
    door(13, BL, 36, 62, 24),
    // 20: corridor 16 <-> corridor 17
    door(17, TL, 20, 46, 24),
    door(16, BR, 52, 46, 24),
    // 21: corridor 17 <-> corridor 21
    door(21, TR, 36, 28, 24),
    door(17, BL, 36, 62, 24),
    // 22: corridor 16 <-> papers office (locked)
    door(11, TL, 20, 46, 24),
    door(16, BR, 52, 46, 24),
    // 23: corridor 7 <-> lockpick store
    door(10, TR, 36, 28, 24),
    door(7, BL, 36, 62, 24),
    // 24: corridor 17 <-> radio room (locked)
    door(18, TL, 20, 46, 24),
    door(17, BR, 52, 46, 24),
    // 25: room 8 <-> torch store
    door(14, TR, 36, 28, 24),
    door(8, BL, 36, 62, 24),
    // 26: corridor 21 <-> mess hall 23
    door(23, TL, 20, 46, 24),
    door(21, BR, 52, 46, 24),
    // 27: corridor 21 <-> mess hall 25
    door(25, TR, 36, 28, 24),
    door(21, BL, 36, 62, 24),
    // 28: mess hall 23 <-> mess hall 25
    door(25, TL, 20, 46, 24),
    door(23, BR, 52, 46, 24),
    // 29: hut 2 left <-> hut 2 right
    door(3, TR, 36, 28, 24),
    door(2, BL, 36, 62, 24),
    // 30: hut 3 left <-> hut 3 right
    door(5, TR, 36, 28, 24),
    door(4, BL, 36, 62, 24),
    // 31: corridor 12 <-> red key room (locked)
    door(22, TL, 20, 46, 24),
    door(12, BR, 52, 46, 24),
    // 32: hut 1 left <-> hut 1 right
    door(1, TR, 36, 28, 24),
    door(28, BL, 36, 62, 24),
    // 33: crate shed <-> lockpick store
    door(10, TL, 20, 46, 24),
    door(9, BR, 52, 46, 24),
    // 34: corridor 13 <-> food store (locked)
    door(19, TL, 20, 46, 24),
    door(13, BR, 52, 46, 24),
    // 35: mess hall 25 <-> red cross room
    door(20, TL, 20, 46, 24),
    door(25, BR, 52, 46, 24),
    // 36: tunnel mouth under hut 2
    door(29, TR, 40, 30, 24),
    door(2, BL, 40, 60, 24),
    // 37: tunnel join
    door(30, TL, 20, 46, 24),
    door(29, BR, 52, 46, 24),
    // 38: tunnel join
    door(31, TR, 36, 28, 24),
    door(30, BL, 36, 62, 24),
    // 39: tunnel exit beyond the wire
    door(0, TL, 20, 46, 24),
    ext(31, BR, 114, 64),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_fully_paired() {
        assert_eq!(DOORS.len(), DOOR_PAIRS * 2);
    }

    #[test]
    fn get_door_selects_halves() {
        let fwd = get_door(3);
        let rev = get_door(3 | DOOR_REVERSE);
        assert_eq!(fwd.room(), 2);
        assert_eq!(rev.room(), 0);
        assert_eq!(fwd.direction(), Direction::TopRight);
        assert_eq!(rev.direction(), Direction::BottomLeft);
    }

    #[test]
    fn halves_face_opposite_ways() {
        for pair in 0..DOOR_PAIRS {
            let a = &DOORS[pair * 2];
            let b = &DOORS[pair * 2 + 1];
            assert_eq!(a.direction().reversed(), b.direction(), "pair {pair}");
        }
    }
}
