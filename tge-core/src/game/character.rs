//! Off-screen characters and the promotion/demotion machinery.
//!
//! A character is represented by exactly one of its characterstruct
//! (off-screen) or a vischar slot (on-screen). Off-screen characters walk
//! their routes in coarse steps, one character per tick.

use crate::data::doors::DOOR_REVERSE;
use crate::data::routes::{ROUTEINDEX_HALT, ROUTEINDEX_WANDER};
use crate::data::sprites::{SPRITE_COMMANDANT, SPRITE_DOG, SPRITE_GUARD, SPRITE_PRISONER};
use crate::game::context::Game;
use crate::game::route::{Route, Target};
use crate::game::vischar::{HERO, PURSUIT_PURSUE, Vischar};
use crate::game::{characters, rooms};
use crate::math::{MapPos8, scale_mappos_down};

/// Set when the character has been promoted to a vischar.
pub const CHARACTERSTRUCT_ON_SCREEN: u8 = 1 << 6;
pub const CHARACTERSTRUCT_CHARACTER_MASK: u8 = 0x1F;

/// One off-screen character.
#[derive(Debug, Clone, Copy)]
pub struct CharacterStruct {
    pub character_and_flags: u8,
    pub room: u8,
    pub mappos: MapPos8,
    pub route: Route,
}

impl CharacterStruct {
    pub const fn new(character: u8, room: u8, mappos: MapPos8, route: Route) -> Self {
        CharacterStruct { character_and_flags: character, room, mappos, route }
    }

    pub fn character(&self) -> u8 {
        self.character_and_flags & CHARACTERSTRUCT_CHARACTER_MASK
    }

    pub fn on_screen(&self) -> bool {
        self.character_and_flags & CHARACTERSTRUCT_ON_SCREEN != 0
    }
}

/// Where a route lives: in a vischar or in a characterstruct.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RouteRef {
    Vischar(usize),
    Char(usize),
}

impl Game {
    pub(crate) fn route_of(&self, route_ref: RouteRef) -> Route {
        match route_ref {
            RouteRef::Vischar(i) => self.vischars[i].route,
            RouteRef::Char(i) => self.character_structs[i].route,
        }
    }

    pub(crate) fn store_route(&mut self, route_ref: RouteRef, route: Route) {
        match route_ref {
            RouteRef::Vischar(i) => self.vischars[i].route = route,
            RouteRef::Char(i) => self.character_structs[i].route = route,
        }
    }

    /// Promote characters sharing the hero's room (or near the visible
    /// window when outdoors) into vischar slots.
    pub(crate) fn spawn_characters(&mut self) {
        for index in 0..self.character_structs.len() {
            let charstr = &self.character_structs[index];
            if charstr.on_screen() || charstr.room == rooms::NONE {
                continue;
            }
            if charstr.room != self.room_index {
                continue;
            }
            if charstr.room == rooms::OUTDOORS && !self.near_map_window(&charstr.mappos) {
                continue;
            }
            self.spawn_character(index);
        }
    }

    /// Is an outdoor map position within the grace region around the
    /// visible window?
    fn near_map_window(&self, mappos: &MapPos8) -> bool {
        // The coarse projection is already in UDG units.
        let iso = crate::math::project_coarse(mappos);
        let x = iso.x as i32;
        let y = iso.y as i32;
        let wx = self.map_position.x as i32;
        let wy = self.map_position.y as i32;
        x >= wx - 4
            && x < wx + self.columns as i32 + 4
            && y >= wy - 4
            && y < wy + self.rows as i32 + 4
    }

    /// Promote one characterstruct into a free vischar slot.
    pub(crate) fn spawn_character(&mut self, char_index: usize) {
        let Some(slot) = (1..self.vischars.len()).find(|&i| self.vischars[i].is_empty()) else {
            return;
        };

        let charstr = self.character_structs[char_index];
        let character = charstr.character();

        let sprite_base = match character {
            characters::COMMANDANT => SPRITE_COMMANDANT,
            c if c >= characters::PRISONER_1 => SPRITE_PRISONER,
            c if c >= characters::DOG_1 => SPRITE_DOG,
            _ => SPRITE_GUARD,
        };

        let mut vischar = Vischar {
            character,
            flags: 0,
            route: charstr.route,
            room: charstr.room,
            ..Vischar::default()
        };
        vischar.mi.sprite_base = sprite_base;
        vischar.mi.mappos = if charstr.room == rooms::OUTDOORS {
            charstr.mappos.to_fine()
        } else {
            crate::math::MapPos16::new(
                charstr.mappos.u as u16,
                charstr.mappos.v as u16,
                charstr.mappos.w as u16,
            )
        };
        self.vischars[slot] = vischar;
        self.character_structs[char_index].character_and_flags |= CHARACTERSTRUCT_ON_SCREEN;

        debug!("character {character} spawns into vischar slot {slot}");

        self.entered_move_a_character = false;
        self.calc_vischar_isopos(slot);
        // Hostiles join any ongoing pursuit straight away.
        if self.red_flag && character <= characters::GUARD_15 {
            self.vischars[slot].flags = PURSUIT_PURSUE;
        }
        self.set_route_for_vischar(slot);
    }

    /// Demote vischars which left the hero's room or strayed out of the
    /// grace region.
    pub(crate) fn purge_invisible_characters(&mut self) {
        for slot in 1..self.vischars.len() {
            let vischar = &self.vischars[slot];
            if vischar.is_empty() {
                continue;
            }
            if vischar.room != self.room_index {
                self.reset_visible_character(slot);
                continue;
            }
            if vischar.room == rooms::OUTDOORS {
                let coarse = scale_mappos_down(&vischar.mi.mappos);
                if !self.near_map_window(&coarse) {
                    self.reset_visible_character(slot);
                }
            }
        }
    }

    /// Demote a vischar back into its characterstruct (or its movable
    /// item slot) and free the slot.
    pub(crate) fn reset_visible_character(&mut self, slot: usize) {
        let vischar = self.vischars[slot];
        let character = vischar.character;
        if character == characters::NONE {
            self.vischars[slot] = Vischar::default();
            return;
        }

        if character >= characters::STOVE_1 {
            // Movable object: park its position back in the shared slot.
            let index = (character - characters::STOVE_1) as usize;
            if index < self.movable_items.len() {
                self.movable_items[index].mappos = vischar.mi.mappos;
            }
            self.vischars[slot] = Vischar::default();
            return;
        }

        debug!("vischar slot {slot} (character {character}) demotes");

        let charstr = &mut self.character_structs[character as usize];
        charstr.character_and_flags &= !CHARACTERSTRUCT_ON_SCREEN;
        charstr.room = vischar.room;
        charstr.route = vischar.route;
        charstr.mappos = if vischar.room == rooms::OUTDOORS {
            scale_mappos_down(&vischar.mi.mappos)
        } else {
            MapPos8::new(
                vischar.mi.mappos.u as u8,
                vischar.mi.mappos.v as u8,
                vischar.mi.mappos.w as u8,
            )
        };
        self.vischars[slot] = Vischar::default();
    }

    /// Advance one off-screen character a coarse step along its route.
    pub(crate) fn move_a_character(&mut self) {
        self.entered_move_a_character = true;

        // Round-robin for a character that is off-screen.
        for _ in 0..self.character_structs.len() {
            self.character_index =
                (self.character_index + 1) % characters::LIMIT;
            let index = self.character_index as usize;
            let charstr = &self.character_structs[index];
            if charstr.on_screen() || charstr.room == rooms::NONE {
                continue;
            }
            if charstr.route.index == ROUTEINDEX_HALT {
                return;
            }
            self.move_one_character(index);
            return;
        }
    }

    fn move_one_character(&mut self, index: usize) {
        let charstr = self.character_structs[index];
        let mut route = charstr.route;

        let target = self.get_target(&route);
        match target {
            Target::RouteEnds => {
                self.route_ended(RouteRef::Char(index));
            }
            Target::Location(pos) => {
                let max = if charstr.room == rooms::OUTDOORS { 2 } else { 6 };
                let arrived = self.step_character_towards(index, pos.x, pos.y, max);
                if arrived {
                    Game::advance_route(&mut route);
                    self.character_structs[index].route = route;
                }
            }
            Target::Door { index: door_index, mappos } => {
                // Exterior door positions are held at double scale.
                let (tx, ty) = if charstr.room == rooms::OUTDOORS {
                    (mappos.u / 2, mappos.v / 2)
                } else {
                    (mappos.u, mappos.v)
                };
                let max = if charstr.room == rooms::OUTDOORS { 2 } else { 6 };
                let arrived = self.step_character_towards(index, tx, ty, max);
                if arrived {
                    // Step through: room change plus a jump to the paired
                    // half's position.
                    let door = crate::data::doors::get_door(door_index);
                    let twin = crate::data::doors::get_door(door_index ^ DOOR_REVERSE);
                    let charstr = &mut self.character_structs[index];
                    charstr.room = door.room();
                    charstr.mappos = if door.room() == rooms::OUTDOORS {
                        MapPos8::new(twin.mappos.u / 2, twin.mappos.v / 2, twin.mappos.w)
                    } else {
                        twin.mappos
                    };
                    Game::advance_route(&mut route);
                    self.character_structs[index].route = route;
                }
            }
        }
    }

    /// Move both horizontal axes up to `max` units towards the target.
    /// Returns true on arrival.
    fn step_character_towards(&mut self, index: usize, tx: u8, ty: u8, max: u8) -> bool {
        let charstr = &mut self.character_structs[index];
        charstr.mappos.u = move_towards(charstr.mappos.u, tx, max);
        charstr.mappos.v = move_towards(charstr.mappos.v, ty, max);
        charstr.mappos.u == tx && charstr.mappos.v == ty
    }

    /// A route ran out: guards patrol back the way they came, everyone
    /// else gets a character event.
    pub(crate) fn route_ended(&mut self, route_ref: RouteRef) {
        let character = match route_ref {
            RouteRef::Vischar(HERO) => None,
            RouteRef::Vischar(slot) => Some(self.vischars[slot].character),
            RouteRef::Char(index) => Some(self.character_structs[index].character()),
        };

        if let Some(character) = character {
            if (characters::GUARD_1..=characters::GUARD_11).contains(&character) {
                let mut route = self.route_of(route_ref);
                Game::reverse_route(&mut route);
                self.store_route(route_ref, route);
                return;
            }
        }

        self.character_event(route_ref);
    }

    /// Dispatch the event keyed by the ended route. Routes with no entry
    /// halt the character.
    pub(crate) fn character_event(&mut self, route_ref: RouteRef) {
        let route = self.route_of(route_ref);
        let reversed = route.is_reversed();

        match (route.base_index(), reversed) {
            (5, false) => self.charevnt_wander_top(route_ref),
            (5, true) => self.charevnt_bed(route_ref),
            (7..=12, false) => self.charevnt_sleeps(route_ref),
            (14, false) => self.charevnt_wander_yard(route_ref),
            (14, true) => self.charevnt_wander_top(route_ref),
            (16, false) => self.charevnt_breakfast(route_ref),
            (16, true) => self.charevnt_wander_top(route_ref),
            (18..=23, false) => self.charevnt_sits(route_ref),
            (36, false) => self.charevnt_hero_release(),
            (36, true) => self.charevnt_commandant_to_yard(route_ref),
            (37, false) => self.charevnt_solitary_ends(),
            (42, false) => self.charevnt_exit_hut2(route_ref),
            (43, false) => self.charevnt_hero_sits(),
            (44, false) => self.charevnt_hero_sleeps(),
            (ROUTEINDEX_WANDER, _) => {} // wandering never ends
            _ => {
                self.store_route(route_ref, Route::new(ROUTEINDEX_HALT, 0));
            }
        }
    }

    fn charevnt_wander_top(&mut self, route_ref: RouteRef) {
        self.store_route(route_ref, Route::new(ROUTEINDEX_WANDER, 8));
    }

    #[allow(dead_code)]
    pub(crate) fn charevnt_wander_left(&mut self, route_ref: RouteRef) {
        self.store_route(route_ref, Route::new(ROUTEINDEX_WANDER, 16));
    }

    fn charevnt_wander_yard(&mut self, route_ref: RouteRef) {
        self.store_route(route_ref, Route::new(ROUTEINDEX_WANDER, 56));
    }

    fn charevnt_exit_hut2(&mut self, route_ref: RouteRef) {
        self.store_route(route_ref, Route::new(5, 0));
    }

    fn charevnt_commandant_to_yard(&mut self, route_ref: RouteRef) {
        self.store_route(route_ref, Route::new(ROUTEINDEX_WANDER, 56));
    }

    /// The commandant reaches the solitary cell: the hero is released.
    fn charevnt_hero_release(&mut self) {
        use crate::data::doors::DOOR_LOCKED;

        self.in_solitary = false;
        self.automatic_player_counter = 0;
        self.queue_message(crate::game::message::Message::ItIsOpen);

        // The cell door opens.
        for entry in self.locked_doors.iter_mut() {
            if *entry & !DOOR_LOCKED == 12 {
                *entry &= !DOOR_LOCKED;
            }
        }

        // The hero walks out; his short route ends in
        // charevnt_solitary_ends which restores control.
        self.vischars[HERO].route = Route::new(37, 0);
        self.set_route_for_vischar(HERO);
    }

    fn charevnt_solitary_ends(&mut self) {
        self.in_solitary = false;
        self.vischars[HERO].route = Route::new(ROUTEINDEX_HALT, 0);
    }
}

/// Step a coordinate towards a target by at most `max`.
pub(crate) fn move_towards(current: u8, target: u8, max: u8) -> u8 {
    if current < target {
        current.saturating_add((target - current).min(max))
    } else {
        current.saturating_sub((current - target).min(max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_common;

    #[test]
    fn move_towards_clamps_step() {
        assert_eq!(move_towards(10, 20, 2), 12);
        assert_eq!(move_towards(20, 10, 6), 14);
        assert_eq!(move_towards(10, 11, 6), 11);
        assert_eq!(move_towards(10, 10, 6), 10);
    }

    #[test]
    fn spawn_then_purge_round_trips_the_representation() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(102, 68, 3));

        // Guard 1 defaults to outdoors at (102,68): inside the window.
        game.spawn_characters();

        let charstr = &game.character_structs[characters::GUARD_1 as usize];
        assert!(charstr.on_screen());
        let slot = game
            .vischars
            .iter()
            .position(|v| !v.is_empty() && v.character == characters::GUARD_1)
            .expect("guard 1 should be on screen");

        // Teleport the window away: the guard purges back.
        game.map_position.x = 0;
        game.map_position.y = 0;
        game.purge_invisible_characters();

        assert!(game.vischars[slot].is_empty());
        assert!(!game.character_structs[characters::GUARD_1 as usize].on_screen());
    }

    #[test]
    fn exactly_one_representation_invariant_holds() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(102, 68, 3));
        game.spawn_characters();

        for (index, charstr) in game.character_structs.iter().enumerate() {
            let on_screen_count = game
                .vischars
                .iter()
                .filter(|v| !v.is_empty() && v.character as usize == index)
                .count();
            if charstr.on_screen() {
                assert_eq!(on_screen_count, 1, "character {index}");
            } else if index != characters::COMMANDANT as usize {
                assert_eq!(on_screen_count, 0, "character {index}");
            }
        }
    }

    #[test]
    fn offscreen_characters_step_towards_their_target() {
        let mut game = test_common::game();
        // Dog 3 wanders block 24; its first target is deterministic from
        // the PRNG, so just verify it moves by at most two units.
        let index = characters::DOG_1 as usize + 2;
        let before = game.character_structs[index].mappos;
        game.character_index = index as u8 - 1;
        game.move_a_character();
        let after = game.character_structs[index].mappos;
        assert!((after.u as i32 - before.u as i32).abs() <= 2);
        assert!((after.v as i32 - before.v as i32).abs() <= 2);
        assert!(game.entered_move_a_character);
    }
}
