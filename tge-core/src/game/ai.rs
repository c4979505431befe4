//! Character behaviour: pursuit modes, walking towards targets and the
//! reactions of hostiles to a suspicious hero.

use crate::data::routes::ROUTEINDEX_WANDER;
use crate::game::context::Game;
use crate::game::item::{ITEM_FLAG_POISONED, ITEMSTRUCT_NEARBY_6, Item};
use crate::game::message::Message;
use crate::game::route::{Route, Target};
use crate::game::vischar::{
    FLAGS_PURSUIT_MASK, FLAGS_TARGET_IS_DOOR, HERO, PURSUIT_DOG_FOOD, PURSUIT_HASSLE,
    PURSUIT_PURSUE, PURSUIT_SAW_BRIBE, CF_V_DOMINANT,
};
use crate::game::{Flow, Input, characters, rooms};
use crate::math::scale_mappos_down;

impl Game {
    /// Drive every non-player vischar (and the hero when the autopilot
    /// has him).
    pub(crate) fn automatics(&mut self) -> Flow {
        // A misplaced item in the current room draws attention.
        if self.game_counter & 63 == 0 {
            self.is_item_discoverable();
        }

        for slot in 1..self.vischars.len() {
            if self.vischars[slot].is_empty() {
                continue;
            }
            self.current_vischar = slot;
            self.guards_follow_suspicious_character(slot);
            self.character_behaviour(slot)?;
        }

        // The hero drives himself once the player stops supplying input.
        if self.automatic_player_counter == 0 && !self.morale_exhausted {
            self.current_vischar = HERO;
            self.character_behaviour(HERO)?;
        }
        Ok(())
    }

    /// Hostile reactions: join a pursuit, hassle a player-controlled
    /// hero, or smell out food.
    pub(crate) fn guards_follow_suspicious_character(&mut self, slot: usize) {
        let character = self.vischars[slot].character;
        let vischar = &self.vischars[slot];

        if character <= characters::GUARD_15 {
            if self.red_flag {
                let flags = self.vischars[slot].flags;
                self.vischars[slot].flags = (flags & !FLAGS_PURSUIT_MASK) | PURSUIT_PURSUE;
                return;
            }

            // By day a guard will harry a hero wandering under manual
            // control nearby.
            if !self.day_or_night
                && self.automatic_player_counter > 0
                && vischar.pursuit() == 0
                && self.vischars[HERO].room == vischar.room
            {
                let hero = scale_mappos_down(&self.vischars[HERO].mi.mappos);
                let own = scale_mappos_down(&vischar.mi.mappos);
                let close = (hero.u as i32 - own.u as i32).abs() <= 20
                    && (hero.v as i32 - own.v as i32).abs() <= 20;
                if close {
                    self.vischars[slot].flags =
                        (self.vischars[slot].flags & !FLAGS_PURSUIT_MASK) | PURSUIT_HASSLE;
                }
            }
        } else if (characters::DOG_1..=characters::DOG_4).contains(&character) {
            // Dogs go for any food left in the open.
            let food = &self.item_structs[Item::Food as usize];
            if food.room_and_flags & ITEMSTRUCT_NEARBY_6 != 0
                && vischar.room == rooms::OUTDOORS
                && vischar.pursuit() == 0
            {
                self.vischars[slot].flags =
                    (self.vischars[slot].flags & !FLAGS_PURSUIT_MASK) | PURSUIT_DOG_FOOD;
            }
        }
    }

    /// Walk a vischar towards its current target, whatever mode chose
    /// that target.
    pub(crate) fn character_behaviour(&mut self, slot: usize) -> Flow {
        match self.vischars[slot].pursuit() {
            PURSUIT_PURSUE => {
                let hero = self.hero_mappos;
                self.vischars[slot].target = hero;
            }
            PURSUIT_HASSLE => {
                if self.automatic_player_counter > 0 {
                    let hero = self.hero_mappos;
                    self.vischars[slot].target = hero;
                } else {
                    // Back to the day job.
                    self.vischars[slot].flags &= !FLAGS_PURSUIT_MASK;
                    self.set_route_for_vischar(slot);
                }
            }
            PURSUIT_DOG_FOOD => self.dog_food_behaviour(slot),
            PURSUIT_SAW_BRIBE => {
                let bribed = self.bribed_character;
                let found = (0..self.vischars.len()).find(|&i| {
                    !self.vischars[i].is_empty() && self.vischars[i].character == bribed
                });
                match found {
                    Some(target_slot) => {
                        let pos = scale_mappos_down(&self.vischars[target_slot].mi.mappos);
                        self.vischars[slot].target = pos;
                    }
                    None => {
                        self.vischars[slot].flags &= !FLAGS_PURSUIT_MASK;
                        self.set_route_for_vischar(slot);
                    }
                }
            }
            _ => {}
        }

        self.move_towards_target(slot)
    }

    fn dog_food_behaviour(&mut self, slot: usize) {
        let food = &self.item_structs[Item::Food as usize];
        if food.room_and_flags & ITEMSTRUCT_NEARBY_6 == 0 {
            // The scent is gone: wander again.
            self.vischars[slot].flags &= !FLAGS_PURSUIT_MASK;
            self.vischars[slot].route = Route::new(ROUTEINDEX_WANDER, 0);
            self.set_route_for_vischar(slot);
            return;
        }

        let food_pos = food.mappos;
        self.vischars[slot].target = food_pos;

        // Reaching the food ends well for nobody.
        let own = scale_mappos_down(&self.vischars[slot].mi.mappos);
        if (own.u as i32 - food_pos.u as i32).abs() <= 1
            && (own.v as i32 - food_pos.v as i32).abs() <= 1
        {
            let poisoned =
                self.item_structs[Item::Food as usize].item_and_flags & ITEM_FLAG_POISONED != 0;
            self.item_discovered(Item::Food as usize);
            if poisoned {
                // A poisoned dog is out of the game for good.
                let character = self.vischars[slot].character;
                self.reset_visible_character(slot);
                self.character_structs[character as usize].room = rooms::NONE;
                debug!("dog {character} takes the poisoned food");
            } else {
                self.hostiles_pursue();
            }
        }
    }

    /// Compute the axis-dominant input that closes on the target, or
    /// handle arrival.
    fn move_towards_target(&mut self, slot: usize) -> Flow {
        let vischar = &self.vischars[slot];
        if vischar.is_empty() {
            return Ok(()); // Demoted mid-update.
        }

        // Target scale: room units indoors; outdoors door positions are
        // double map scale, plain locations single.
        let scale: i32 = if vischar.room != rooms::OUTDOORS {
            1
        } else if vischar.flags & FLAGS_TARGET_IS_DOOR != 0 {
            4
        } else {
            8
        };

        let du = vischar.target.u as i32 * scale - vischar.mi.mappos.u as i32;
        let dv = vischar.target.v as i32 * scale - vischar.mi.mappos.v as i32;

        let input_u = if du > 3 {
            Input::UP
        } else if du < -3 {
            Input::DOWN
        } else {
            Input::empty()
        };
        let input_v = if dv > 3 {
            Input::RIGHT
        } else if dv < -3 {
            Input::LEFT
        } else {
            Input::empty()
        };

        if input_u.is_empty() && input_v.is_empty() {
            return self.target_reached(slot);
        }

        // One axis at a time; a wall collision flips the dominant axis.
        let v_dominant = vischar.counter_and_flags & CF_V_DOMINANT != 0;
        let chosen = if v_dominant {
            if input_v.is_empty() { input_u } else { input_v }
        } else if input_u.is_empty() {
            input_v
        } else {
            input_u
        };

        self.character_behaviour_set_input(slot, chosen);
        Ok(())
    }

    /// Latch a new input onto a vischar if it differs from the current
    /// one.
    fn character_behaviour_set_input(&mut self, slot: usize, input: Input) {
        let current = self.vischars[slot].input & !Input::KICK.bits();
        if current != input.bits() {
            self.vischars[slot].input = input.bits() | Input::KICK.bits();
        }
    }

    /// The vischar stands on its target: pass through the door, or step
    /// the route onwards.
    pub(crate) fn target_reached(&mut self, slot: usize) -> Flow {
        let vischar = &self.vischars[slot];

        if vischar.flags & FLAGS_TARGET_IS_DOOR != 0 {
            let route = vischar.route;
            let Target::Door { index: door_index, .. } = self.get_target(&route) else {
                // The route byte changed under us: resolve it again.
                self.vischars[slot].flags &= !FLAGS_TARGET_IS_DOOR;
                self.set_route_for_vischar(slot);
                return Ok(());
            };

            self.current_door = door_index;
            if self.is_door_locked() {
                return Ok(()); // Wait at the door.
            }

            let door = crate::data::doors::get_door(door_index);
            let twin =
                crate::data::doors::get_door(door_index ^ crate::data::doors::DOOR_REVERSE);

            // Step the route past the door before the transition can
            // demote us.
            let mut route = self.vischars[slot].route;
            Game::advance_route(&mut route);
            self.vischars[slot].route = route;
            self.vischars[slot].flags &= !FLAGS_TARGET_IS_DOOR;
            self.vischars[slot].room = door.room();
            return self.transition(slot, twin.mappos);
        }

        let mut route = vischar.route;
        Game::advance_route(&mut route);
        self.vischars[slot].route = route;
        self.set_route_for_vischar(slot);
        Ok(())
    }

    /// Put every on-screen hostile on the hero's tail.
    pub(crate) fn hostiles_pursue(&mut self) {
        for slot in 1..self.vischars.len() {
            let vischar = &mut self.vischars[slot];
            if !vischar.is_empty() && vischar.character <= characters::GUARD_15 {
                vischar.flags = (vischar.flags & !FLAGS_PURSUIT_MASK) | PURSUIT_PURSUE;
            }
        }
    }

    /// The bribed guard takes the money and wanders off as a decoy.
    pub(crate) fn accept_bribe(&mut self, slot: usize) {
        self.queue_message(Message::HeTakesTheBribe);
        self.queue_message(Message::AndActsAsDecoy);

        // The bribe is spent.
        let bribe = Item::Bribe as usize;
        if self.items_held[0] == bribe as u8 {
            self.items_held[0] = self.items_held[1];
            self.items_held[1] = crate::game::item::ITEM_NONE;
            self.draw_all_items();
        } else if self.items_held[1] == bribe as u8 {
            self.items_held[1] = crate::game::item::ITEM_NONE;
            self.draw_all_items();
        }
        self.item_structs[bribe].room_and_flags = crate::game::item::ITEMSTRUCT_ROOM_NONE;

        // Everyone who saw it heads for the decoy instead of the hero.
        for other in 1..self.vischars.len() {
            let vischar = &mut self.vischars[other];
            if vischar.is_empty() || vischar.character > characters::GUARD_15 {
                continue;
            }
            vischar.flags = (vischar.flags & !FLAGS_PURSUIT_MASK)
                | if other == slot { 0 } else { PURSUIT_SAW_BRIBE };
        }
        self.vischars[slot].route = Route::new(ROUTEINDEX_WANDER, 8);
        self.set_route_for_vischar(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{MapPos8, MapPos16};
    use crate::test_common;

    fn spawn_guard(game: &mut Game, slot: usize, pos: MapPos16) {
        let guard = &mut game.vischars[slot];
        guard.flags = 0;
        guard.character = characters::GUARD_1;
        guard.room = rooms::OUTDOORS;
        guard.mi.mappos = pos;
    }

    #[test]
    fn pursuers_track_the_hero() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        spawn_guard(&mut game, 1, MapPos16::new(400, 400, 0));
        game.vischars[1].flags = PURSUIT_PURSUE;

        game.character_behaviour(1).unwrap();
        assert_eq!(game.vischars[1].target, game.hero_mappos);
        // Hero is at higher u: the guard pushes up.
        assert_ne!(game.vischars[1].input & Input::UP.bits(), 0);
    }

    #[test]
    fn red_flag_turns_guards_hostile() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        spawn_guard(&mut game, 1, MapPos16::new(500, 500, 0));
        game.red_flag = true;

        game.guards_follow_suspicious_character(1);
        assert_eq!(game.vischars[1].pursuit(), PURSUIT_PURSUE);
    }

    #[test]
    fn hassle_reverts_when_the_autopilot_resumes() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        spawn_guard(&mut game, 1, MapPos16::new(660, 500, 0));
        game.vischars[1].flags = PURSUIT_HASSLE;
        game.vischars[1].route = Route::new(1, 0);
        game.automatic_player_counter = 0;

        game.character_behaviour(1).unwrap();
        assert_eq!(game.vischars[1].pursuit(), 0);
    }

    #[test]
    fn dogs_lose_interest_when_the_food_goes() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        let dog_slot = 1;
        let dog = &mut game.vischars[dog_slot];
        dog.flags = PURSUIT_DOG_FOOD;
        dog.character = characters::DOG_1;
        dog.room = rooms::OUTDOORS;
        dog.mi.mappos = MapPos16::new(500, 500, 0);

        // No food nearby: back to wandering.
        game.character_behaviour(dog_slot).unwrap();
        assert_eq!(game.vischars[dog_slot].pursuit(), 0);
        assert_eq!(game.vischars[dog_slot].route.index, ROUTEINDEX_WANDER);
    }

    #[test]
    fn arrival_advances_the_route() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        spawn_guard(&mut game, 1, MapPos16::new(0, 0, 0));

        // Route 4's first location, exactly.
        let target = crate::data::routes::LOCATIONS[64];
        game.vischars[1].route = Route::new(4, 0);
        game.vischars[1].target = MapPos8::new(target.x, target.y, 0);
        game.vischars[1].mi.mappos =
            MapPos16::new(target.x as u16 * 8, target.y as u16 * 8, 0);

        game.character_behaviour(1).unwrap();
        assert_eq!(game.vischars[1].route.step, 1);
    }
}
