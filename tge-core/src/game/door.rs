//! Door traversal: finding a door in front of a character, checking its
//! lock, and committing the room change.

use crate::data::doors::{DOOR_LOCKED, DOOR_REVERSE, DOORS, get_door};
use crate::game::context::Game;
use crate::game::rooms;
use crate::game::vischar::HERO;
use crate::game::Flow;

/// Doors-per-room cap; unused slots hold this sentinel.
pub const INTERIOR_DOOR_NONE: u8 = 255;

/// Number of exterior door pairs scanned by outdoor door handling.
const EXTERIOR_DOOR_PAIRS: u8 = 16;

impl Game {
    /// The room a door half sits in: the destination of its twin.
    pub(crate) fn door_half_room(half: usize) -> u8 {
        DOORS[half ^ 1].room()
    }

    /// Rebuild the current room's door list.
    pub(crate) fn setup_doors(&mut self) {
        self.interior_doors = [INTERIOR_DOOR_NONE; 4];
        let mut slot = 0;

        for half in 0..DOORS.len() {
            if Game::door_half_room(half) != self.room_index {
                continue;
            }
            let index = (half as u8 / 2) | if half & 1 != 0 { DOOR_REVERSE } else { 0 };
            if slot < self.interior_doors.len() {
                self.interior_doors[slot] = index;
                slot += 1;
            }
        }
    }

    /// Is the door referenced by `current_door` locked?
    pub(crate) fn is_door_locked(&self) -> bool {
        let pair = self.current_door & !DOOR_REVERSE;
        self.locked_doors
            .iter()
            .any(|&entry| entry & !DOOR_LOCKED == pair && entry & DOOR_LOCKED != 0)
    }

    /// Outdoor door scan for the hero's candidate position.
    pub(crate) fn door_handling_exterior(&mut self, index: usize) -> Flow {
        let facing = self.vischars[index].facing();

        for half in 0..(EXTERIOR_DOOR_PAIRS as usize * 2) {
            let door = &DOORS[half];
            if door.direction() != facing {
                continue;
            }
            if !self.door_in_range(half) {
                continue;
            }

            self.current_door = (half as u8 / 2) | if half & 1 != 0 { DOOR_REVERSE } else { 0 };
            if self.is_door_locked() {
                return Ok(()); // The door is there but won't open.
            }

            debug!(
                "vischar {} passes through exterior door pair {}",
                index,
                half / 2
            );
            self.vischars[index].room = door.room();
            let landing = DOORS[half ^ 1].mappos;
            return self.transition(index, landing);
        }
        Ok(())
    }

    /// Reject doors farther than three map units from the stashed hero
    /// position on either axis. Exterior door positions are stored at
    /// double map scale.
    fn door_in_range(&self, half: usize) -> bool {
        let door = &DOORS[half];
        let hero_u = self.hero_mappos.u as i32 * 2;
        let hero_v = self.hero_mappos.v as i32 * 2;
        (hero_u - door.mappos.u as i32).abs() <= 6 && (hero_v - door.mappos.v as i32).abs() <= 6
    }

    /// Indoor door scan against the room's precomputed door list.
    pub(crate) fn door_handling_interior(&mut self, index: usize) -> Flow {
        let facing = self.vischars[index].facing();

        for slot in 0..self.interior_doors.len() {
            let door_index = self.interior_doors[slot];
            if door_index == INTERIOR_DOOR_NONE {
                continue;
            }
            let door = get_door(door_index);
            if door.direction() != facing {
                continue;
            }

            // Candidate position against the door position, -3..=2.
            let du = self.saved_mappos.u as i32 - door.mappos.u as i32;
            let dv = self.saved_mappos.v as i32 - door.mappos.v as i32;
            if !(-3..=2).contains(&du) || !(-3..=2).contains(&dv) {
                continue;
            }

            self.current_door = door_index;
            if self.is_door_locked() {
                if index == HERO {
                    self.queue_message(crate::game::message::Message::TheDoorIsLocked);
                }
                return Ok(());
            }

            debug!(
                "vischar {} passes through interior door {}",
                index,
                door_index & !DOOR_REVERSE
            );
            self.vischars[index].room = door.room();
            let twin = get_door(door_index ^ DOOR_REVERSE).mappos;
            return self.transition(index, twin);
        }
        Ok(())
    }

    /// Clear a lock. Used by the lock picking action.
    pub(crate) fn unlock_door(&mut self, locked_slot: usize) {
        self.locked_doors[locked_slot] &= !DOOR_LOCKED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::doors;
    use crate::test_common;

    #[test]
    fn setup_doors_lists_the_rooms_doors() {
        let mut game = test_common::game();
        game.room_index = rooms::HUT2LEFT;
        game.setup_doors();

        // Hut 2 left connects outdoors (pair 3), to hut 2 right (29) and
        // to the tunnel mouth (36).
        let pairs: Vec<u8> = game
            .interior_doors
            .iter()
            .filter(|&&d| d != INTERIOR_DOOR_NONE)
            .map(|&d| d & !DOOR_REVERSE)
            .collect();
        assert!(pairs.contains(&3));
        assert!(pairs.contains(&29));
        assert!(pairs.contains(&36));
    }

    #[test]
    fn lock_state_follows_the_locked_list() {
        let mut game = test_common::game();
        game.current_door = 0;
        assert!(game.is_door_locked());
        game.current_door = 3;
        assert!(!game.is_door_locked());

        // Unlock the main gate.
        game.unlock_door(0);
        game.current_door = 0;
        assert!(!game.is_door_locked());
    }

    #[test]
    fn entering_and_leaving_a_door_round_trips() {
        use crate::game::vischar::HERO;
        use crate::game::{Exit, Input};
        use crate::math::{Direction, MapPos8};
        use crate::test_common;

        let mut game = test_common::game();
        // Right at hut 2's exterior door, walking in.
        test_common::place_hero_outdoors(&mut game, MapPos8::new(94, 78, 0));
        game.vischars[HERO].direction = Direction::TopRight as u8;
        game.vischars[HERO].input = (Input::RIGHT | Input::KICK).bits();

        let result = game.animate();
        assert!(matches!(result, Err(Exit::Transitioned)));
        assert_eq!(game.room(), rooms::HUT2LEFT);

        // Straight back out the way he came.
        game.vischars[HERO].direction = Direction::BottomLeft as u8;
        game.vischars[HERO].input = (Input::LEFT | Input::KICK).bits();
        let result = game.animate();
        assert!(matches!(result, Err(Exit::Transitioned)));
        assert_eq!(game.room(), rooms::OUTDOORS);

        let back = crate::math::scale_mappos_down(&game.vischars[HERO].mi.mappos);
        assert!((back.u as i32 - 94).abs() <= 1);
        assert!((back.v as i32 - 78).abs() <= 1);
    }

    #[test]
    fn door_pair_symmetry_matches_the_lookup() {
        for pair in 0..doors::DOOR_PAIRS as u8 {
            let fwd = doors::get_door(pair);
            let rev = doors::get_door(pair | DOOR_REVERSE);
            assert_eq!(fwd.mappos, doors::DOORS[pair as usize * 2].mappos);
            assert_eq!(rev.mappos, doors::DOORS[pair as usize * 2 + 1].mappos);
        }
    }
}
