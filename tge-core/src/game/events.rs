//! Timed events and the daily schedule, plus the route setters they use.

use crate::data::doors::DOOR_LOCKED;
use crate::data::rooms::{
    BEDS, ROOMDEF_2_BED, ROOMDEF_23_BENCH_A, ROOMDEF_25_BENCH_D, ROOMDEF_25_BENCH_G, object,
};
use crate::data::routes::{ROUTEINDEX_HALT, ROUTEINDEX_REVERSE};
use crate::game::alarm::BELL_RING_40_TIMES;
use crate::game::character::{CHARACTERSTRUCT_ON_SCREEN, RouteRef};
use crate::game::context::{CLOCK_LIMIT, Game};
use crate::game::item::{ITEMSTRUCT_ROOM_MASK, ITEMSTRUCT_ROOM_NONE, Item};
use crate::game::message::Message;
use crate::game::route::Route;
use crate::game::vischar::{FLAGS_TARGET_IS_DOOR, HERO};
use crate::game::{characters, rooms};
use crate::math::MapPos8;

/// Characters routed together by the schedule: two guards, three
/// prisoners, two guards, three prisoners.
static PRISONERS_AND_GUARDS: [u8; 10] = [
    characters::GUARD_12,
    characters::GUARD_12 + 1,
    characters::PRISONER_1,
    characters::PRISONER_1 + 1,
    characters::PRISONER_1 + 2,
    characters::GUARD_12 + 2,
    characters::GUARD_12 + 3,
    characters::PRISONER_1 + 3,
    characters::PRISONER_1 + 4,
    characters::PRISONER_1 + 5,
];

/// The timed event table: clock values and their handlers.
static TIMED_EVENTS: [(u8, fn(&mut Game)); 15] = [
    (0, Game::event_another_day_dawns),
    (8, Game::event_wake_up),
    (12, Game::event_new_red_cross_parcel),
    (16, Game::event_go_to_roll_call),
    (20, Game::event_roll_call),
    (21, Game::event_go_to_breakfast_time),
    (36, Game::event_end_of_breakfast),
    (46, Game::event_go_to_exercise_time),
    (64, Game::event_exercise_time),
    (74, Game::event_go_to_roll_call),
    (78, Game::event_roll_call),
    (79, Game::event_go_to_time_for_bed),
    (98, Game::event_time_for_bed),
    (100, Game::event_night_time),
    (130, Game::event_search_light),
];

impl Game {
    /// Advance the clock and run any event due at the new time.
    pub(crate) fn dispatch_timed_event(&mut self) {
        let mut time = self.clock + 1;
        if time == CLOCK_LIMIT {
            time = 0;
        }
        self.clock = time;

        for &(event_time, handler) in TIMED_EVENTS.iter() {
            if time == event_time {
                debug!("timed event at clock {time}");
                handler(self);
                return;
            }
        }
    }

    fn event_night_time(&mut self) {
        if !self.hero_in_bed {
            self.set_hero_route(Route::new(44, 1));
        }
        self.set_day_or_night(true);
    }

    fn event_another_day_dawns(&mut self) {
        self.queue_message(Message::AnotherDayDawns);
        self.decrease_morale(25);
        self.set_day_or_night(false);
    }

    pub(crate) fn set_day_or_night(&mut self, night: bool) {
        self.day_or_night = night;
        let attrs = self.choose_game_window_attributes();
        self.set_game_window_attributes(attrs);
    }

    fn event_wake_up(&mut self) {
        self.bell = BELL_RING_40_TIMES;
        self.queue_message(Message::TimeToWakeUp);
        self.wake_up();
    }

    fn event_go_to_roll_call(&mut self) {
        self.bell = BELL_RING_40_TIMES;
        self.queue_message(Message::RollCall);
        self.go_to_roll_call();
    }

    fn event_roll_call(&mut self) {
        // Skipping roll call puts the camp on alert.
        if !self.hero_at_roll_call() {
            self.queue_message(Message::MissedRollCall);
            self.hostiles_pursue();
        }
    }

    fn hero_at_roll_call(&self) -> bool {
        if self.in_solitary {
            return true; // Excused.
        }
        let hero = &self.vischars[HERO];
        hero.room == rooms::OUTDOORS && hero.route.base_index() == 45
    }

    fn event_go_to_breakfast_time(&mut self) {
        self.bell = BELL_RING_40_TIMES;
        self.queue_message(Message::BreakfastTime);
        self.set_route_go_to_breakfast();
    }

    fn event_end_of_breakfast(&mut self) {
        self.bell = BELL_RING_40_TIMES;
        self.end_of_breakfast();
    }

    fn event_go_to_exercise_time(&mut self) {
        self.bell = BELL_RING_40_TIMES;
        self.queue_message(Message::ExerciseTime);

        // Unlock the gates.
        self.locked_doors[0] = 0;
        self.locked_doors[1] = 1;

        self.set_route_go_to_yard(false);
    }

    fn event_exercise_time(&mut self) {
        self.bell = BELL_RING_40_TIMES;
        self.set_route_go_to_yard(true);
    }

    fn event_go_to_time_for_bed(&mut self) {
        self.bell = BELL_RING_40_TIMES;

        // Lock the gates.
        self.locked_doors[0] = 0 | DOOR_LOCKED;
        self.locked_doors[1] = 1 | DOOR_LOCKED;

        self.queue_message(Message::TimeForBed);
        self.go_to_time_for_bed();
    }

    fn event_new_red_cross_parcel(&mut self) {
        static CONTENTS_LIST: [Item; 4] =
            [Item::Purse, Item::Wiresnips, Item::Bribe, Item::Compass];

        // Don't deliver a fresh parcel while one still exists.
        let parcel = Item::RedCrossParcel as usize;
        if self.item_structs[parcel].room_and_flags & ITEMSTRUCT_ROOM_MASK
            != ITEMSTRUCT_ROOM_NONE
        {
            return;
        }

        // Contents: the first candidate not already in the world.
        let Some(&contents) = CONTENTS_LIST.iter().find(|&&item| {
            self.item_structs[item as usize].room_and_flags & ITEMSTRUCT_ROOM_MASK
                == ITEMSTRUCT_ROOM_NONE
                && !self.items_held.contains(&(item as u8))
        }) else {
            return;
        };

        self.red_cross_parcel_current_contents = contents as u8;
        let itemstr = &mut self.item_structs[parcel];
        itemstr.room_and_flags = rooms::REDCROSS & ITEMSTRUCT_ROOM_MASK;
        itemstr.mappos = MapPos8::new(44, 44, 12);
        self.calc_item_isopos(parcel);
        self.queue_message(Message::RedCrossParcel);
    }

    fn event_time_for_bed(&mut self) {
        let route = Route::new(38 | ROUTEINDEX_REVERSE, 3);
        self.set_guards_route(route);
    }

    fn event_search_light(&mut self) {
        let route = Route::new(38, 0);
        self.set_guards_route(route);
    }

    /// Send guards 12..=15 on consecutive routes starting at the given
    /// one.
    fn set_guards_route(&mut self, mut route: Route) {
        for character in characters::GUARD_12..=characters::GUARD_15 {
            self.set_character_route(character, route);
            route.index += 1;
        }
    }

    /// Wake up: hero out of bed, prisoners re-roomed, beds emptied.
    pub(crate) fn wake_up(&mut self) {
        if self.hero_in_bed {
            self.vischars[HERO].mi.mappos.u = 46;
            self.vischars[HERO].mi.mappos.v = 46;
        }
        self.hero_in_bed = false;
        self.set_hero_route(Route::new(42, 0));

        // Prisoners go three to hut 2 right, three to hut 3 right.
        for (offset, charstr) in self
            .character_structs
            .iter_mut()
            .skip(characters::PRISONER_1 as usize)
            .take(6)
            .enumerate()
        {
            charstr.room = if offset < 3 { rooms::HUT2RIGHT } else { rooms::HUT3RIGHT };
        }

        let mut route = Route::new(5, 0);
        self.set_prisoners_and_guards_route_halved(&mut route);

        // Empty every bed.
        for &(room, offset) in BEDS.iter() {
            self.set_roomdef(room, offset, object::EMPTY_BED_FACING_SE);
        }
        self.set_roomdef(rooms::HUT2LEFT, ROOMDEF_2_BED, object::EMPTY_BED_FACING_SE);

        if self.room_index != rooms::OUTDOORS && self.room_index < 6 {
            self.setup_room_and_plot();
        }
    }

    /// End of breakfast: hero up from the table, benches emptied,
    /// everyone routed out.
    pub(crate) fn end_of_breakfast(&mut self) {
        if self.hero_in_breakfast {
            self.vischars[HERO].mi.mappos.u = 52;
            self.vischars[HERO].mi.mappos.v = 62;
            self.hero_in_breakfast = false;
        }
        self.set_hero_route(Route::new(16 | ROUTEINDEX_REVERSE, 3));

        for (offset, charstr) in self
            .character_structs
            .iter_mut()
            .skip(characters::PRISONER_1 as usize)
            .take(6)
            .enumerate()
        {
            charstr.room = if offset < 3 { rooms::MESS_HALL_25 } else { rooms::MESS_HALL_23 };
        }

        let mut route = Route::new(16 | ROUTEINDEX_REVERSE, 3);
        self.set_prisoners_and_guards_route_halved(&mut route);

        for offset in [ROOMDEF_23_BENCH_A, ROOMDEF_23_BENCH_A + 3, ROOMDEF_23_BENCH_A + 6] {
            self.set_roomdef(rooms::MESS_HALL_23, offset, object::EMPTY_BENCH);
        }
        for offset in [
            ROOMDEF_25_BENCH_D,
            ROOMDEF_25_BENCH_D + 3,
            ROOMDEF_25_BENCH_D + 6,
            ROOMDEF_25_BENCH_G,
        ] {
            self.set_roomdef(rooms::MESS_HALL_25, offset, object::EMPTY_BENCH);
        }

        if self.room_index >= rooms::HUT1RIGHT && self.room_index <= rooms::HUT1LEFT {
            self.setup_room_and_plot();
        }
    }

    /// Set the hero's route, unless he's in solitary.
    pub(crate) fn set_hero_route(&mut self, route: Route) {
        if self.in_solitary {
            return;
        }
        self.set_hero_route_force(route);
    }

    pub(crate) fn set_hero_route_force(&mut self, route: Route) {
        let vischar = &mut self.vischars[HERO];
        vischar.flags &= !FLAGS_TARGET_IS_DOOR;
        vischar.route = route;
        self.set_route_for_vischar(HERO);
    }

    pub(crate) fn go_to_time_for_bed(&mut self) {
        self.set_hero_route(Route::new(5 | ROUTEINDEX_REVERSE, 2));
        let mut route = Route::new(5 | ROUTEINDEX_REVERSE, 2);
        self.set_prisoners_and_guards_route_halved(&mut route);
    }

    /// Assign a different route index to every member of the group.
    pub(crate) fn set_prisoners_and_guards_route(&mut self, route: &mut Route) {
        for &character in PRISONERS_AND_GUARDS.iter() {
            self.set_character_route(character, *route);
            route.index += 1;
        }
    }

    /// Assign the same route to each half of the group, bumping the
    /// index once at the halfway point.
    pub(crate) fn set_prisoners_and_guards_route_halved(&mut self, route: &mut Route) {
        for (position, &character) in PRISONERS_AND_GUARDS.iter().enumerate() {
            self.set_character_route(character, *route);
            // After the first five: the second half of the group.
            if position == 4 {
                route.index += 1;
            }
        }
    }

    /// Store a route into a characterstruct, or into the vischar if the
    /// character is on screen.
    pub(crate) fn set_character_route(&mut self, character: u8, route: Route) {
        let charstr = &mut self.character_structs[character as usize];
        if charstr.character_and_flags & CHARACTERSTRUCT_ON_SCREEN == 0 {
            charstr.route = route;
            return;
        }

        // On screen: find the vischar and re-resolve its target.
        for slot in 1..self.vischars.len() {
            if self.vischars[slot].character == character && !self.vischars[slot].is_empty() {
                self.vischars[slot].flags &= !FLAGS_TARGET_IS_DOOR;
                self.vischars[slot].route = route;
                self.set_route_for_vischar(slot);
                return;
            }
        }
    }

    /// Resolve a vischar's route into a concrete target.
    pub(crate) fn set_route_for_vischar(&mut self, slot: usize) {
        use crate::game::route::Target;

        self.entered_move_a_character = false;

        let route = self.vischars[slot].route;
        match self.get_target(&route) {
            Target::Location(pos) => {
                self.vischars[slot].target = MapPos8::new(pos.x, pos.y, 0);
            }
            Target::Door { index: _, mappos } => {
                self.vischars[slot].target = mappos;
                self.vischars[slot].flags |= FLAGS_TARGET_IS_DOOR;
            }
            Target::RouteEnds => {
                self.current_vischar = slot;
                self.route_ended(RouteRef::Vischar(slot));
                if self.vischars[slot].route.index != ROUTEINDEX_HALT {
                    self.set_route_for_vischar(slot);
                }
            }
        }
    }

    // Character events which park characters in beds and on benches.

    /// Send a character to bed: prisoners to their own bunks, hostiles
    /// to the guard room.
    pub(crate) fn charevnt_bed(&mut self, route_ref: RouteRef) {
        let character = match (self.entered_move_a_character, route_ref) {
            (true, _) => self.character_index,
            (false, RouteRef::Vischar(slot)) => {
                let character = self.vischars[slot].character;
                if character == characters::COMMANDANT {
                    // The commandant drives the hero to bed instead.
                    self.set_hero_route(Route::new(44, 0));
                    return;
                }
                character
            }
            (false, RouteRef::Char(index)) => self.character_structs[index].character(),
        };

        let route = if character >= characters::PRISONER_1 {
            // Routes 7..=12 walk prisoners 1..=6 to bed.
            Route::new(character - 13, 0)
        } else if character & 1 != 0 {
            Route::new(13 | ROUTEINDEX_REVERSE, 1)
        } else {
            Route::new(13, 0)
        };
        self.store_route(route_ref, route);
    }

    /// Start-of-breakfast: sit everyone down.
    pub(crate) fn charevnt_breakfast(&mut self, route_ref: RouteRef) {
        let character = match (self.entered_move_a_character, route_ref) {
            (true, _) => self.character_index,
            (false, RouteRef::Vischar(slot)) => {
                let character = self.vischars[slot].character;
                if character == characters::COMMANDANT {
                    self.set_hero_route(Route::new(43, 0));
                    return;
                }
                character
            }
            (false, RouteRef::Char(index)) => self.character_structs[index].character(),
        };

        let route = if character >= characters::PRISONER_1 {
            // Routes 18..=23 walk prisoners 1..=6 to their seats.
            Route::new(character - 2, 0)
        } else if character & 1 != 0 {
            Route::new(25, 0)
        } else {
            Route::new(24, 0)
        };
        self.store_route(route_ref, route);
    }

    /// A prisoner reaches his bunk: the bed fills and he vanishes.
    pub(crate) fn charevnt_sleeps(&mut self, route_ref: RouteRef) {
        let route = self.route_of(route_ref);
        let index = (route.base_index() - 7) as usize;
        let (room, offset) = BEDS[index.min(BEDS.len() - 1)];
        self.set_roomdef(room, offset, object::OCCUPIED_BED);

        let sleeping_room =
            if route.base_index() < 10 { rooms::HUT2RIGHT } else { rooms::HUT3RIGHT };
        self.character_sit_sleep_common(route_ref, sleeping_room);
    }

    /// A prisoner reaches his bench: the bench fills and he vanishes.
    pub(crate) fn charevnt_sits(&mut self, route_ref: RouteRef) {
        let route = self.route_of(route_ref);
        let index = (route.base_index() - 18) as usize;
        let (room, offset) = if index < 3 {
            (rooms::MESS_HALL_25, ROOMDEF_25_BENCH_D + index * 3)
        } else {
            (rooms::MESS_HALL_23, ROOMDEF_23_BENCH_A + (index - 3) * 3)
        };
        self.set_roomdef(room, offset, object::PRISONER_SAT_MID_TABLE);

        let sitting_room =
            if route.base_index() < 21 { rooms::MESS_HALL_25 } else { rooms::MESS_HALL_23 };
        self.character_sit_sleep_common(route_ref, sitting_room);
    }

    /// Common tail: halt the route and make the character disappear,
    /// repainting if the room is on screen.
    fn character_sit_sleep_common(&mut self, route_ref: RouteRef, room: u8) {
        self.store_route(route_ref, Route::new(ROUTEINDEX_HALT, 0));

        match route_ref {
            RouteRef::Char(index) if self.room_index != room => {
                self.character_structs[index].room = rooms::NONE;
            }
            RouteRef::Char(index) => {
                self.character_structs[index].room = rooms::NONE;
                self.setup_room_and_plot();
            }
            RouteRef::Vischar(slot) => {
                self.vischars[slot].room = rooms::NONE;
                if self.room_index == room {
                    self.setup_room_and_plot();
                }
            }
        }
    }

    /// The hero sits down to breakfast.
    pub(crate) fn charevnt_hero_sits(&mut self) {
        self.set_roomdef(
            rooms::MESS_HALL_25,
            ROOMDEF_25_BENCH_G,
            object::PRISONER_SAT_END_TABLE,
        );
        self.hero_sit_sleep_common(true);
    }

    /// The hero gets into bed.
    pub(crate) fn charevnt_hero_sleeps(&mut self) {
        self.set_roomdef(rooms::HUT2LEFT, ROOMDEF_2_BED, object::OCCUPIED_BED);
        self.hero_sit_sleep_common(false);
    }

    pub(crate) fn hero_sit_sleep_common(&mut self, breakfast: bool) {
        if breakfast {
            self.hero_in_breakfast = true;
        } else {
            self.hero_in_bed = true;
        }
        self.vischars[HERO].route = Route::new(ROUTEINDEX_HALT, 0);
        self.vischars[HERO].mi.mappos.u = 0;
        self.vischars[HERO].mi.mappos.v = 0;
        self.calc_vischar_isopos(HERO);
        self.setup_room_and_plot();
    }

    pub(crate) fn set_route_go_to_yard(&mut self, reversed: bool) {
        let route = if reversed {
            Route::new(14 | ROUTEINDEX_REVERSE, 4)
        } else {
            Route::new(14, 0)
        };
        self.set_hero_route(route);
        let mut group_route = route;
        self.set_prisoners_and_guards_route_halved(&mut group_route);
    }

    pub(crate) fn set_route_go_to_breakfast(&mut self) {
        self.set_hero_route(Route::new(16, 0));
        let mut route = Route::new(16, 0);
        self.set_prisoners_and_guards_route_halved(&mut route);
    }

    pub(crate) fn go_to_roll_call(&mut self) {
        let mut route = Route::new(26, 0);
        self.set_prisoners_and_guards_route(&mut route);
        self.set_hero_route(Route::new(45, 0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_common;

    #[test]
    fn clock_wraps_at_140() {
        let mut game = test_common::game();
        game.clock = CLOCK_LIMIT - 1;
        game.dispatch_timed_event();
        assert_eq!(game.clock, 0);
    }

    #[test]
    fn wake_up_scenario() {
        let mut game = test_common::game();
        game.hero_in_bed = true;
        game.clock = 7;

        game.dispatch_timed_event();

        // Bell rings, message queued, hero routed across hut 2.
        assert_eq!(game.bell, BELL_RING_40_TIMES);
        assert_eq!(game.messages.queue[2], Message::TimeToWakeUp as u8);
        assert!(!game.hero_in_bed);
        assert_eq!(game.vischars[HERO].route.base_index(), 42);

        // Prisoners re-roomed into the hut right-hand sides.
        for offset in 0..3usize {
            assert_eq!(
                game.character_structs[characters::PRISONER_1 as usize + offset].room,
                rooms::HUT2RIGHT
            );
            assert_eq!(
                game.character_structs[characters::PRISONER_1 as usize + 3 + offset].room,
                rooms::HUT3RIGHT
            );
        }

        // All six bunks plus the hero's bed read as empty.
        for &(room, offset) in BEDS.iter() {
            assert_eq!(game.get_roomdef(room, offset), object::EMPTY_BED_FACING_SE);
        }
        assert_eq!(
            game.get_roomdef(rooms::HUT2LEFT, ROOMDEF_2_BED),
            object::EMPTY_BED_FACING_SE
        );
    }

    #[test]
    fn exercise_time_unlocks_the_gates_and_bed_time_locks_them() {
        let mut game = test_common::game();
        game.clock = 45;
        game.dispatch_timed_event();
        assert_eq!(game.locked_doors[0], 0);
        assert_eq!(game.locked_doors[1], 1);

        game.clock = 78;
        game.dispatch_timed_event();
        assert_eq!(game.locked_doors[0], 0 | DOOR_LOCKED);
        assert_eq!(game.locked_doors[1], 1 | DOOR_LOCKED);
    }

    #[test]
    fn red_cross_parcel_regenerates_with_fresh_contents() {
        let mut game = test_common::game();
        let parcel = Item::RedCrossParcel as usize;
        assert_eq!(
            game.item_structs[parcel].room_and_flags & ITEMSTRUCT_ROOM_MASK,
            ITEMSTRUCT_ROOM_NONE
        );

        game.clock = 11;
        game.dispatch_timed_event();

        let itemstr = &game.item_structs[parcel];
        assert_eq!(itemstr.room(), rooms::REDCROSS);
        assert_eq!(itemstr.mappos, MapPos8::new(44, 44, 12));
        // The purse is first in the candidate list and starts nowhere.
        assert_eq!(game.red_cross_parcel_current_contents, Item::Purse as u8);

        // A second delivery is refused while the parcel exists.
        game.clock = 11;
        game.dispatch_timed_event();
        assert_eq!(game.red_cross_parcel_current_contents, Item::Purse as u8);
    }

    #[test]
    fn group_routes_are_assigned_consecutively() {
        let mut game = test_common::game();
        let mut route = Route::new(26, 0);
        game.set_prisoners_and_guards_route(&mut route);

        assert_eq!(
            game.character_structs[characters::GUARD_12 as usize].route.index,
            26
        );
        assert_eq!(
            game.character_structs[characters::PRISONER_1 as usize].route.index,
            28
        );
        assert_eq!(
            game.character_structs[characters::PRISONER_6 as usize].route.index,
            35
        );
    }

    #[test]
    fn halved_group_routes_bump_once() {
        let mut game = test_common::game();
        let mut route = Route::new(5, 0);
        game.set_prisoners_and_guards_route_halved(&mut route);

        assert_eq!(game.character_structs[characters::GUARD_12 as usize].route.index, 5);
        assert_eq!(
            game.character_structs[characters::PRISONER_1 as usize + 2].route.index,
            5
        );
        assert_eq!(
            game.character_structs[characters::PRISONER_6 as usize].route.index,
            6
        );
    }

    #[test]
    fn night_time_changes_the_window_attributes() {
        let mut game = test_common::game();
        game.clock = 99;
        game.dispatch_timed_event();
        assert!(game.day_or_night);
    }
}
