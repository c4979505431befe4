//! The permitted-area watchdog, escape endings and solitary confinement.

use crate::data::defaults;
use crate::data::doors::DOOR_LOCKED;
use crate::game::context::Game;
use crate::game::item::{ITEM_NONE, Item};
use crate::game::message::Message;
use crate::game::route::Route;
use crate::game::vischar::HERO;
use crate::game::{Exit, Flow, rooms};
use crate::math::MapPos8;
use crate::spectrum::attribute;

/// Outdoor area identifiers used by the permitted tables.
const AREA_CORRIDOR_TO_YARD: u8 = 0;
const AREA_HUTS: u8 = 1;
const AREA_YARD: u8 = 2;

/// Area bounding rectangles in map units: (umin, umax, vmin, vmax).
static AREA_BOUNDS: [(u8, u8, u8, u8); 3] = [
    (60, 80, 56, 74),  // the strip between the compounds
    (76, 114, 56, 82), // the hut compound
    (78, 98, 42, 58),  // the exercise yard
];

const ROOM_FLAG: u8 = 1 << 7;

/// Per-route permitted places, indexed by route step.
static PERMITTED_ROUTE_42: [u8; 2] = [ROOM_FLAG | 2, ROOM_FLAG | 3];
static PERMITTED_ROUTE_5: [u8; 3] = [ROOM_FLAG | 2, AREA_HUTS, AREA_HUTS];
static PERMITTED_ROUTE_14: [u8; 5] =
    [AREA_HUTS, AREA_CORRIDOR_TO_YARD, AREA_YARD, AREA_YARD, AREA_YARD];
static PERMITTED_ROUTE_16: [u8; 4] =
    [AREA_HUTS, AREA_HUTS, ROOM_FLAG | 21, ROOM_FLAG | 25];
static PERMITTED_ROUTE_43: [u8; 2] = [ROOM_FLAG | 25, ROOM_FLAG | 25];
static PERMITTED_ROUTE_44: [u8; 2] = [ROOM_FLAG | 3, ROOM_FLAG | 2];
static PERMITTED_ROUTE_45: [u8; 2] = [AREA_HUTS, AREA_HUTS];

fn permitted_for_route(route_index: u8) -> Option<&'static [u8]> {
    match route_index {
        5 => Some(&PERMITTED_ROUTE_5),
        14 => Some(&PERMITTED_ROUTE_14),
        16 => Some(&PERMITTED_ROUTE_16),
        42 => Some(&PERMITTED_ROUTE_42),
        43 => Some(&PERMITTED_ROUTE_43),
        44 => Some(&PERMITTED_ROUTE_44),
        45 => Some(&PERMITTED_ROUTE_45),
        _ => None,
    }
}

impl Game {
    /// Verify the hero is where the daily schedule says he should be;
    /// stray heroes raise the alarm, and crossing the map edge is an
    /// escape attempt.
    pub(crate) fn in_permitted_area(&mut self) -> Flow {
        // Keep the stashed hero position fresh for everyone else.
        let hero = &self.vischars[HERO];
        self.hero_mappos = if hero.room == rooms::OUTDOORS {
            crate::math::scale_mappos_down(&hero.mi.mappos)
        } else {
            MapPos8::new(
                hero.mi.mappos.u as u8,
                hero.mi.mappos.v as u8,
                hero.mi.mappos.w as u8,
            )
        };

        // Over the edge of the world means over the wire.
        if hero.room == rooms::OUTDOORS {
            let x = (hero.isopos.x / 8) as u32;
            let y = (hero.isopos.y / 8) as u32;
            if x >= (crate::data::tiles::MAP_WIDTH as u32) * 4
                || y >= (crate::data::tiles::MAP_HEIGHT as u32) * 4
            {
                return self.escaped();
            }
        }

        if self.in_solitary || self.hero_in_bed || self.hero_in_breakfast {
            return Ok(());
        }

        let permitted = if self.clock >= 100 {
            // Lights out: only the hero's own hut is permitted.
            self.hero_location_matches(ROOM_FLAG | rooms::HUT2LEFT)
                || self.hero_location_matches(ROOM_FLAG | rooms::HUT2RIGHT)
        } else {
            let route = self.vischars[HERO].route;
            match permitted_for_route(route.base_index()) {
                None => true,
                Some(list) => {
                    let step = (route.step as usize).min(list.len() - 1);
                    match (0..list.len()).find(|&i| self.hero_location_matches(list[i])) {
                        None => false,
                        Some(matched) if matched > step => {
                            // Ahead of schedule: advance the route to the
                            // leg he's actually on.
                            let mut route = self.vischars[HERO].route;
                            route.step = matched as u8;
                            self.vischars[HERO].route = route;
                            self.set_route_for_vischar(HERO);
                            true
                        }
                        Some(_) => true,
                    }
                }
            }
        };

        if permitted {
            if self.red_flag {
                self.red_flag = false;
                self.set_morale_flag_screen_attributes(attribute::BRIGHT_GREEN_OVER_BLACK);
            }
        } else if !self.red_flag {
            debug!("hero is out of bounds: the camp goes on alert");
            self.red_flag = true;
            self.bell = crate::game::alarm::BELL_PERPETUAL;
            self.set_morale_flag_screen_attributes(attribute::BRIGHT_RED_OVER_BLACK);
            self.hostiles_pursue();
        }
        Ok(())
    }

    /// Does the hero's location match a permitted entry (room with the
    /// top bit, outdoor area otherwise)?
    fn hero_location_matches(&self, entry: u8) -> bool {
        let room = self.vischars[HERO].room;
        if entry & ROOM_FLAG != 0 {
            room == entry & !ROOM_FLAG
        } else if room != rooms::OUTDOORS {
            false
        } else {
            let (umin, umax, vmin, vmax) = AREA_BOUNDS[(entry as usize).min(2)];
            let pos = self.hero_mappos;
            pos.u >= umin && pos.u <= umax && pos.v >= vmin && pos.v <= vmax
        }
    }

    /// The hero crossed the wire: judge the attempt by what he carries.
    pub(crate) fn escaped(&mut self) -> Flow {
        let holding = |item: Item| {
            self.items_held.contains(&(item as u8))
        };

        let compass = holding(Item::Compass);
        let papers = holding(Item::Papers);
        let purse = holding(Item::Purse);
        let uniform = holding(Item::Uniform)
            || self.vischars[HERO].mi.sprite_base == crate::data::sprites::SPRITE_GUARD;

        static ENDING_WELL_DONE: [&str; 5] = [
            "WELL DONE",
            "YOU HAVE ESCAPED",
            "FROM THE CAMP",
            "AND WILL CROSS THE",
            "BORDER SUCCESSFULLY",
        ];
        static ENDING_CROSS_BORDER: [&str; 4] = [
            "YOU HAVE ESCAPED",
            "FROM THE CAMP",
            "AND WILL CROSS THE",
            "BORDER SUCCESSFULLY",
        ];
        static ENDING_UNIFORM: [&str; 3] =
            ["YOU HAVE ESCAPED", "BUT YOUR UNIFORM", "GIVES YOU AWAY"];
        static ENDING_UNPREPARED: [&str; 3] =
            ["YOU HAVE ESCAPED", "BUT WERE RECAPTURED", "TOTALLY UNPREPARED"];

        let (lines, succeeded): (&[&str], bool) = if compass && papers {
            (&ENDING_WELL_DONE, true)
        } else if compass && purse {
            (&ENDING_CROSS_BORDER, true)
        } else if uniform {
            (&ENDING_UNIFORM, false)
        } else {
            (&ENDING_UNPREPARED, false)
        };

        debug!("escape attempt: success={succeeded}");
        self.plot_ending_screen(lines);
        self.wait_for_any_key()?;

        if succeeded || uniform {
            self.reset_game()
        } else {
            self.solitary()
        }
    }

    /// Confiscate everything and lock the hero in the cells until the
    /// commandant lets him out.
    pub(crate) fn solitary(&mut self) -> Flow {
        debug!("the hero is sent to solitary");

        self.queue_message(Message::YouAreInSolitary);
        self.queue_message(Message::WaitForRelease);
        self.queue_message(Message::AnotherDayDawns);

        // Both inventory slots are seized and immediately discovered.
        for slot in 0..2 {
            let item = self.items_held[slot];
            if item != ITEM_NONE {
                self.items_held[slot] = ITEM_NONE;
                self.item_discovered(item as usize);
            }
        }
        self.draw_all_items();

        self.in_solitary = true;
        self.automatic_player_counter = 0;
        self.red_flag = false;
        self.bell = crate::game::alarm::BELL_STOP;

        self.reset_map_and_characters();

        // The cell door locks behind him; the commandant will come.
        for entry in self.locked_doors.iter_mut() {
            if *entry & !DOOR_LOCKED == 12 {
                *entry |= DOOR_LOCKED;
            }
        }
        self.set_character_route(crate::game::characters::COMMANDANT, Route::new(36, 0));

        self.vischars[HERO].room = rooms::SOLITARY;
        self.transition(HERO, MapPos8::new(58, 42, 24))
    }

    /// Put the world back to its start-of-day state.
    pub(crate) fn reset_map_and_characters(&mut self) {
        for slot in 1..self.vischars.len() {
            if !self.vischars[slot].is_empty() {
                self.reset_visible_character(slot);
            }
        }
        self.character_structs = defaults::default_character_structs();
        self.movable_items = defaults::default_movable_items();
        self.clock = 7; // shortly before wake-up
    }

    /// Full reset back to the opening state, hero asleep in his bunk.
    pub(crate) fn reset_game(&mut self) -> Flow {
        debug!("game reset");

        self.items_held = [ITEM_NONE; 2];
        self.item_structs = defaults::default_item_structs();
        for index in 0..self.item_structs.len() {
            self.calc_item_isopos(index);
        }
        self.item_attributes = defaults::DEFAULT_ITEM_ATTRIBUTES;
        self.locked_doors = defaults::DEFAULT_LOCKED_DOORS;
        self.roomdef_shadow_bytes = defaults::DEFAULT_SHADOW_BYTES;
        self.searchlights = defaults::default_searchlights();
        self.searchlight_state = crate::game::searchlight::STATE_SEARCHING;
        self.searchlight_morale_cooldown = 0;

        self.morale = crate::game::context::MORALE_MAX;
        self.displayed_morale = crate::game::context::MORALE_MAX;
        self.moraleflag_screen_offset = crate::spectrum::screen_offset(2, 16);
        self.morale_exhausted = false;
        self.red_flag = false;
        self.in_solitary = false;
        self.bell = crate::game::alarm::BELL_STOP;
        self.score_digits = [0; 5];
        self.game_counter = 0;
        self.day_or_night = false;
        self.bribed_character = crate::game::characters::NONE;
        self.red_cross_parcel_current_contents = ITEM_NONE;
        self.messages = Default::default();

        self.reset_map_and_characters();

        // The hero starts asleep in hut 2.
        self.vischars[HERO] = Default::default();
        self.vischars[HERO].character = crate::game::characters::COMMANDANT;
        self.vischars[HERO].flags = 0;
        self.vischars[HERO].room = rooms::HUT2LEFT;
        self.vischars[HERO].mi.mappos = crate::math::MapPos16::new(46, 46, 24);
        self.hero_sleeps_at_start();

        self.room_index = rooms::HUT2LEFT;
        match self.enter_room() {
            Err(Exit::Cancelled) => Err(Exit::Cancelled),
            _ => Err(Exit::Reset),
        }
    }

    fn hero_sleeps_at_start(&mut self) {
        self.set_roomdef(
            rooms::HUT2LEFT,
            crate::data::rooms::ROOMDEF_2_BED,
            crate::data::rooms::object::OCCUPIED_BED,
        );
        self.hero_in_bed = true;
        self.vischars[HERO].route = Route::new(crate::data::routes::ROUTEINDEX_HALT, 0);
        self.calc_vischar_isopos(HERO);
    }

    /// Spin until any key goes down, honouring host cancellation.
    pub(crate) fn wait_for_any_key(&mut self) -> Flow {
        loop {
            if self.keyscan_all() != 0 {
                return Ok(());
            }
            self.speccy.stamp();
            if self.speccy.sleep(crate::spectrum::FRAME_PERIOD_US)
                == crate::spectrum::SleepOutcome::Cancelled
            {
                return Err(Exit::Cancelled);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters;
    use crate::test_common;

    #[test]
    fn solitary_seizes_items_and_scripts_the_commandant() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        game.items_held = [Item::Shovel as u8, Item::Torch as u8];

        let result = game.solitary();
        assert!(matches!(result, Err(Exit::Transitioned)));

        assert!(game.in_solitary);
        assert_eq!(game.items_held, [ITEM_NONE; 2]);
        // Seized items return to their default homes.
        assert_eq!(
            game.item_structs[Item::Shovel as usize].room(),
            rooms::CRATE
        );
        // The hero is in the cell.
        assert_eq!(game.room(), rooms::SOLITARY);
        assert_eq!(game.vischars[HERO].mi.mappos, crate::math::MapPos16::new(58, 42, 24));
        // The commandant is on his way.
        assert_eq!(
            game.character_structs[characters::COMMANDANT as usize].route,
            Route::new(36, 0)
        );
        // The three solitary messages head the queue.
        assert_eq!(game.messages.queue[2], Message::YouAreInSolitary as u8);
        assert_eq!(game.messages.queue[4], Message::WaitForRelease as u8);
        assert_eq!(game.messages.queue[6], Message::AnotherDayDawns as u8);
    }

    #[test]
    fn night_time_only_permits_the_hut() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        game.clock = 101;

        game.in_permitted_area().unwrap();
        assert!(game.red_flag);
        assert_eq!(game.bell, crate::game::alarm::BELL_PERPETUAL);
    }

    #[test]
    fn returning_to_bounds_clears_the_flag() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        game.red_flag = true;
        game.clock = 20;
        game.vischars[HERO].route = Route::new(45, 0); // roll call: hut area

        game.in_permitted_area().unwrap();
        assert!(!game.red_flag);
    }

    #[test]
    fn escape_with_papers_and_compass_succeeds() {
        // The host cancels during the "press any key" wait, which is
        // how a headless test leaves the ending screen.
        let mut game = test_common::game_with_cancel_after(0);
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        game.items_held = [Item::Papers as u8, Item::Compass as u8];

        let result = game.escaped();
        assert!(matches!(result, Err(Exit::Cancelled)));

        // The ending text was plotted onto a wiped screen.
        let pixels = &game.speccy_mut().screen().pixels;
        assert!(pixels.iter().any(|&b| b != 0));
    }

    #[test]
    fn crossing_the_map_edge_triggers_the_escape_judgement() {
        let mut game = test_common::game_with_cancel_after(0);
        // Far out past the wire: the projected position leaves the map.
        test_common::place_hero_outdoors(&mut game, MapPos8::new(10, 10, 0));
        game.items_held = [Item::Compass as u8, Item::Purse as u8];

        let result = game.in_permitted_area();
        assert!(matches!(result, Err(Exit::Cancelled)));
    }

    #[test]
    fn wrong_leg_resynchronises_the_step() {
        let mut game = test_common::game();
        // Hero indoors in mess hall 25 while his breakfast route thinks
        // he is still outside: the step snaps forward.
        test_common::place_hero_in_room(&mut game, rooms::MESS_HALL_25, MapPos8::new(40, 40, 24));
        game.vischars[HERO].route = Route::new(16, 0);

        game.in_permitted_area().unwrap();
        assert!(!game.red_flag);
        assert_eq!(game.vischars[HERO].route.step, 3);
    }
}
