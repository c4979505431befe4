//! The main loop: one call, one tick, in the fixed order the original
//! keeps.

use crate::game::context::Game;
use crate::game::message::Message;
use crate::game::rooms;
use crate::game::vischar::{HERO, Vischar};
use crate::game::{Exit, Flow, Input, InputDevice};
use crate::math::MapPos8;
use crate::spectrum::{FRAME_PERIOD_US, SleepOutcome, port};

impl Game {
    /// Prepare the screen: wiped, with the menu chrome drawn.
    pub fn setup(&mut self) {
        self.wipe_full_screen_and_attributes();
        self.draw_menu_screen();
    }

    /// Prepare the game proper: lookup tables, inert vischar slots, the
    /// hero asleep in his bunk.
    pub fn setup_play(&mut self) {
        self.setup_play_tables();
        for vischar in self.vischars.iter_mut() {
            *vischar = Vischar::default();
        }
        // reset_game places the hero in bed and enters the room; the
        // transition exit is the normal way out.
        let _ = self.reset_game();
    }

    /// Build the bit-reverse table used by the sprite flip paths.
    pub(crate) fn setup_play_tables(&mut self) {
        for (index, slot) in self.reversed.iter_mut().enumerate() {
            *slot = (index as u8).reverse_bits();
        }
    }

    /// Run the game until the host cancels.
    pub fn play(&mut self) {
        loop {
            match self.main_loop_tick() {
                Ok(()) => {}
                Err(Exit::Cancelled) => return,
                Err(Exit::Transitioned) | Err(Exit::Reset) => {
                    // The tick unwound after a transition or reset;
                    // carry on from the top, like the original's
                    // longjmp back to the main loop entry.
                }
            }
        }
    }

    /// One tick of the game.
    pub fn main_loop_tick(&mut self) -> Flow {
        self.speccy.stamp();

        self.check_morale();
        self.keyscan_break()?;
        self.message_display();
        self.process_player_input()?;
        self.in_permitted_area()?;
        self.restore_tiles();
        self.move_a_character();
        self.automatics()?;
        self.purge_invisible_characters();
        self.spawn_characters();
        self.mark_nearby_items();
        self.ring_bell();
        self.animate()?;
        self.move_map();
        self.message_display();
        self.ring_bell();
        self.plot_sprites();
        self.plot_game_window();
        self.ring_bell();
        if self.day_or_night
            || self.searchlight_state != crate::game::searchlight::STATE_SEARCHING
        {
            self.nighttime();
        }
        self.wave_morale_flag();
        if self.game_counter & 63 == 0 {
            self.dispatch_timed_event();
        }

        if self.speccy.sleep(FRAME_PERIOD_US) == SleepOutcome::Cancelled {
            return Err(Exit::Cancelled);
        }
        Ok(())
    }

    /// BREAK (shift+space): confirm, then reset or resume.
    pub(crate) fn keyscan_break(&mut self) -> Flow {
        let shift = self.speccy.read_port(port::KEYBOARD_SHIFTZXCV) & 0x01 == 0;
        let space = self.speccy.read_port(port::KEYBOARD_SPACESYMMNB) & 0x01 == 0;
        if !(shift && space) {
            return Ok(());
        }

        if self.user_confirm()? {
            self.reset_game()
        } else {
            // Repaint the scene and resume.
            if self.room_index == rooms::OUTDOORS {
                self.reset_outdoors()
            } else {
                self.enter_room()
            }
        }
    }

    /// Wait for a yes/no answer.
    pub(crate) fn user_confirm(&mut self) -> Result<bool, Exit> {
        loop {
            if self.speccy.read_port(port::KEYBOARD_POIUY) & 0x10 == 0 {
                return Ok(true); // Y
            }
            if self.speccy.read_port(port::KEYBOARD_SPACESYMMNB) & 0x08 == 0 {
                return Ok(false); // N
            }
            self.speccy.stamp();
            if self.speccy.sleep(FRAME_PERIOD_US) == SleepOutcome::Cancelled {
                return Err(Exit::Cancelled);
            }
        }
    }

    /// Any key at all, on any half-row.
    pub(crate) fn keyscan_all(&mut self) -> u8 {
        let ports = [
            port::KEYBOARD_SHIFTZXCV,
            port::KEYBOARD_ASDFG,
            port::KEYBOARD_QWERT,
            port::KEYBOARD_12345,
            port::KEYBOARD_09876,
            port::KEYBOARD_POIUY,
            port::KEYBOARD_ENTERLKJH,
            port::KEYBOARD_SPACESYMMNB,
        ];
        let mut pressed = 0;
        for p in ports {
            pressed |= !self.speccy.read_port(p) & 0x1F;
        }
        pressed
    }

    /// Read the chosen input device into an input byte.
    pub(crate) fn input_routine(&mut self) -> Input {
        match self.chosen_input_device {
            InputDevice::Keyboard => {
                let mut input = Input::empty();
                if self.speccy.read_port(port::KEYBOARD_QWERT) & 0x01 == 0 {
                    input |= Input::UP; // Q
                }
                if self.speccy.read_port(port::KEYBOARD_ASDFG) & 0x01 == 0 {
                    input |= Input::DOWN; // A
                }
                let poiuy = self.speccy.read_port(port::KEYBOARD_POIUY);
                if poiuy & 0x02 == 0 {
                    input |= Input::LEFT; // O
                }
                if poiuy & 0x01 == 0 {
                    input |= Input::RIGHT; // P
                }
                if self.speccy.read_port(port::KEYBOARD_SPACESYMMNB) & 0x01 == 0 {
                    input |= Input::FIRE; // space
                }
                input
            }
            InputDevice::Kempston => {
                let joy = self.speccy.read_port(port::KEMPSTON_JOYSTICK);
                let mut input = Input::empty();
                if joy & 0x01 != 0 {
                    input |= Input::RIGHT;
                }
                if joy & 0x02 != 0 {
                    input |= Input::LEFT;
                }
                if joy & 0x04 != 0 {
                    input |= Input::DOWN;
                }
                if joy & 0x08 != 0 {
                    input |= Input::UP;
                }
                if joy & 0x10 != 0 {
                    input |= Input::FIRE;
                }
                input
            }
            InputDevice::Sinclair => {
                let row = self.speccy.read_port(port::KEYBOARD_09876);
                let mut input = Input::empty();
                if row & 0x10 == 0 {
                    input |= Input::LEFT; // 6
                }
                if row & 0x08 == 0 {
                    input |= Input::RIGHT; // 7
                }
                if row & 0x04 == 0 {
                    input |= Input::DOWN; // 8
                }
                if row & 0x02 == 0 {
                    input |= Input::UP; // 9
                }
                if row & 0x01 == 0 {
                    input |= Input::FIRE; // 0
                }
                input
            }
            InputDevice::Protek => {
                let mut input = Input::empty();
                if self.speccy.read_port(port::KEYBOARD_12345) & 0x10 == 0 {
                    input |= Input::LEFT; // 5
                }
                let row = self.speccy.read_port(port::KEYBOARD_09876);
                if row & 0x10 == 0 {
                    input |= Input::DOWN; // 6
                }
                if row & 0x08 == 0 {
                    input |= Input::UP; // 7
                }
                if row & 0x04 == 0 {
                    input |= Input::RIGHT; // 8
                }
                if row & 0x01 == 0 {
                    input |= Input::FIRE; // 0
                }
                input
            }
        }
    }

    /// Resolve the player's input for this tick.
    pub(crate) fn process_player_input(&mut self) -> Flow {
        if self.in_solitary || self.morale_exhausted {
            return Ok(()); // Input is inhibited.
        }

        // Mid lock-pick or wire-cut: the player is locked out until the
        // timer runs down. A zero stamp means no lockout is pending.
        if self.player_locked_out_until != 0 {
            if self.player_locked_out_until != self.game_counter {
                return Ok(());
            }
            if self.door_being_lockpicked.is_some() {
                self.picking_lock_done();
            } else {
                self.cutting_wire_done();
            }
        }

        let input = self.input_routine();

        if input.contains(Input::FIRE) {
            self.process_player_input_fire(input)?;
            self.automatic_player_counter = 31;
            return Ok(());
        }

        if !input.is_empty() {
            self.automatic_player_counter = 31;
            if self.hero_in_bed || self.hero_in_breakfast {
                self.hero_gets_up();
            }
        } else if self.automatic_player_counter > 0 {
            self.automatic_player_counter -= 1;
        }

        // Latch the input onto the hero if it changed.
        let current = self.vischars[HERO].input & !Input::KICK.bits();
        if current != input.bits() {
            self.vischars[HERO].input = input.bits() | Input::KICK.bits();
        }
        Ok(())
    }

    /// Fire plus a direction selects an item action.
    fn process_player_input_fire(&mut self, input: Input) -> Flow {
        if input.contains(Input::UP) {
            self.pick_up_item()?;
        } else if input.contains(Input::DOWN) {
            self.drop_item();
        } else if input.contains(Input::LEFT) {
            self.use_item(0)?;
        } else if input.contains(Input::RIGHT) {
            self.use_item(1)?;
        }
        Ok(())
    }

    /// Any real input rouses the hero from bed or breakfast.
    fn hero_gets_up(&mut self) {
        use crate::data::rooms::{ROOMDEF_2_BED, ROOMDEF_25_BENCH_G, object};

        if self.hero_in_bed {
            self.hero_in_bed = false;
            self.set_roomdef(rooms::HUT2LEFT, ROOMDEF_2_BED, object::EMPTY_BED_FACING_SE);
            self.vischars[HERO].mi.mappos = crate::math::MapPos16::new(46, 46, 24);
        } else {
            self.hero_in_breakfast = false;
            self.set_roomdef(
                rooms::MESS_HALL_25,
                ROOMDEF_25_BENCH_G,
                object::EMPTY_BENCH,
            );
            self.vischars[HERO].mi.mappos = crate::math::MapPos16::new(52, 62, 24);
        }
        self.calc_vischar_isopos(HERO);
        self.setup_room_and_plot();
    }

    /// The lock gives way.
    fn picking_lock_done(&mut self) {
        if let Some(slot) = self.door_being_lockpicked.take() {
            self.unlock_door(slot);
            self.queue_message(Message::ItIsOpen);
        }
        self.player_locked_out_until = 0;
    }

    /// The wire parts: the hero slips through the fence.
    fn cutting_wire_done(&mut self) {
        use crate::data::walls::{FIRST_FENCE, WALLS};

        let Some(fence_index) = self.nearest_fence() else {
            self.player_locked_out_until = 0;
            return;
        };
        let fence = &WALLS[FIRST_FENCE + fence_index];
        let hero_pos = self.hero_mappos;

        // Step across the thin axis of the fence.
        let mut target = hero_pos;
        if fence.maxx - fence.minx <= 4 {
            target.u = if hero_pos.u <= fence.minx {
                fence.maxx + 1
            } else {
                fence.minx.saturating_sub(1)
            };
        } else {
            target.v = if hero_pos.v <= fence.miny {
                fence.maxy + 1
            } else {
                fence.miny.saturating_sub(1)
            };
        }

        self.vischars[HERO].mi.mappos = MapPos8::new(target.u, target.v, 0).to_fine();
        self.calc_vischar_isopos(HERO);
        self.player_locked_out_until = 0;
        debug!("the hero slips through the wire");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_common;

    #[test]
    fn tick_runs_to_completion() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        game.get_supertiles();
        game.plot_all_tiles();
        for _ in 0..8 {
            game.main_loop_tick().unwrap();
        }
    }

    #[test]
    fn timed_events_fire_every_64_ticks() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        game.get_supertiles();
        game.plot_all_tiles();

        let clock_before = game.clock;
        for _ in 0..65 {
            game.main_loop_tick().unwrap();
        }
        assert_eq!(game.clock, clock_before + 1);
    }

    #[test]
    fn cancelled_sleep_exits_the_tick() {
        let mut game = test_common::game_with_cancel_after(0);
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        assert!(matches!(game.main_loop_tick(), Err(Exit::Cancelled)));
    }

    #[test]
    fn autopilot_counter_drains_without_input() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        game.automatic_player_counter = 3;
        game.process_player_input().unwrap();
        assert_eq!(game.automatic_player_counter, 2);
    }

    #[test]
    fn solitary_inhibits_input() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        game.in_solitary = true;
        game.vischars[HERO].input = 0;
        test_common::press_key(&mut game, port::KEYBOARD_QWERT, 0x01);
        game.process_player_input().unwrap();
        assert_eq!(game.vischars[HERO].input, 0);
    }

    #[test]
    fn lockpick_completes_after_its_countdown() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));

        // Pretend a pick is in progress on locked-door slot 3 (pair 12).
        game.door_being_lockpicked = Some(3);
        game.game_counter = 10;
        game.player_locked_out_until = 10;

        game.process_player_input().unwrap();
        assert!(game.door_being_lockpicked.is_none());
        assert_eq!(
            game.locked_doors[3] & crate::data::doors::DOOR_LOCKED,
            0
        );
        assert_eq!(game.messages.queue[2], Message::ItIsOpen as u8);
    }
}
