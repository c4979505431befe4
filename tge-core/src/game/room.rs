//! Room and door transitions, room definition expansion and the shadowed
//! roomdef bytes.

use crate::data::rooms::{
    INTERIOR_MASKS, MAX_INTERIOR_MASKS, OBJECT_DEFS, SHADOW_ADDRESSES, roomdef,
};
use crate::data::sprites::{SPRITE_CRATE, SPRITE_STOVE};
use crate::data::Bounds;
use crate::game::context::Game;
use crate::game::vischar::{CF_NO_COLLIDE, HERO, Vischar};
use crate::game::{Exit, Flow, characters, rooms};
use crate::math::{DIRECTION_CRAWL, MapPos8, MapPos16, Pos8};

/// Which room each movable item lives in.
static MOVABLE_ITEM_ROOMS: [u8; 3] = [rooms::CORRIDOR_21, rooms::CRATE, rooms::MESS_HALL_23];

impl Game {
    /// Commit a movement through a door.
    ///
    /// Non-hero characters are simply demoted back to their
    /// characterstructs. For the hero the new room is entered (or the
    /// outdoors reset) and the tick exits.
    pub(crate) fn transition(&mut self, slot: usize, target: MapPos8) -> Flow {
        let new_room = self.vischars[slot].room;
        self.vischars[slot].mi.mappos = if new_room == rooms::OUTDOORS {
            // Exterior door positions are double map scale; fine units
            // are eight times map scale.
            MapPos16::new(target.u as u16 * 4, target.v as u16 * 4, target.w as u16 * 4)
        } else {
            MapPos16::new(target.u as u16, target.v as u16, target.w as u16)
        };

        if slot != HERO {
            self.reset_visible_character(slot);
            return Ok(());
        }

        self.vischars[HERO].counter_and_flags &= !CF_NO_COLLIDE;
        self.room_index = new_room;
        if new_room == rooms::OUTDOORS {
            self.reset_outdoors()
        } else {
            self.enter_room()
        }
    }

    /// Enter the hero's current room: expand it, plot it and iris in.
    pub(crate) fn enter_room(&mut self) -> Flow {
        self.game_window_offset = Pos8::new(0, 0);
        self.setup_room();
        self.plot_interior_tiles();
        self.map_position = Pos8::new(116, 234);
        self.set_hero_sprite_for_room();
        self.calc_vischar_isopos(HERO);
        self.setup_movable_items();
        self.zoombox()?;
        self.increase_score(1);

        Err(Exit::Transitioned)
    }

    /// Going outdoors: centre the map on the hero and repaint it all.
    pub(crate) fn reset_outdoors(&mut self) -> Flow {
        self.calc_vischar_isopos(HERO);
        let hero = &self.vischars[HERO];
        let x = (hero.isopos.x / 8) as i32 - 11;
        let y = (hero.isopos.y / 8) as i32 - 6;
        self.map_position = Pos8::new(x.clamp(0, 192) as u8, y.clamp(0, 124) as u8);

        self.room_index = rooms::OUTDOORS;
        self.set_hero_sprite_for_room();
        self.get_supertiles();
        self.plot_all_tiles();

        Err(Exit::Transitioned)
    }

    /// Pick the hero's stance for the room: tunnels force a crawl.
    pub(crate) fn set_hero_sprite_for_room(&mut self) {
        let hero = &mut self.vischars[HERO];
        if hero.room >= rooms::FIRST_TUNNEL {
            hero.direction |= DIRECTION_CRAWL;
        } else {
            hero.direction &= !DIRECTION_CRAWL;
        }
        hero.input |= crate::game::Input::KICK.bits();
    }

    /// Read a room definition byte, honouring the shadow overrides.
    pub(crate) fn get_roomdef(&self, room: u8, offset: usize) -> u8 {
        if let Some(slot) = SHADOW_ADDRESSES
            .iter()
            .position(|&(r, o)| r == room && o == offset)
        {
            return self.roomdef_shadow_bytes[slot];
        }
        let def = roomdef(room);
        def[offset.min(def.len() - 1)]
    }

    /// Override a shadowed room definition byte. Writes to addresses
    /// outside the shadow set are programming faults.
    pub(crate) fn set_roomdef(&mut self, room: u8, offset: usize, value: u8) {
        match SHADOW_ADDRESSES
            .iter()
            .position(|&(r, o)| r == room && o == offset)
        {
            Some(slot) => self.roomdef_shadow_bytes[slot] = value,
            None => debug_assert!(false, "set_roomdef({room}, {offset}) has no shadow slot"),
        }
    }

    /// Clear the tile and window buffers ahead of a room expansion.
    pub(crate) fn wipe_visible_tiles(&mut self) {
        self.tile_buf.fill(0);
        self.window_buf.fill(0);
    }

    /// Expand the current room definition into game state and the tile
    /// buffer.
    pub(crate) fn setup_room(&mut self) {
        self.wipe_visible_tiles();
        self.setup_doors();

        let room = self.room_index;
        let def = roomdef(room);
        let mut cursor = 0usize;

        self.roomdef_dimensions_index = def[cursor];
        cursor += 1;

        let bounds_count = def[cursor].min(4);
        cursor += 1;
        self.roomdef_object_bounds_count = bounds_count;
        for index in 0..bounds_count as usize {
            self.roomdef_object_bounds[index] = Bounds::new(
                def[cursor],
                def[cursor + 1],
                def[cursor + 2],
                def[cursor + 3],
            );
            cursor += 4;
        }

        let mask_count = def[cursor].min(MAX_INTERIOR_MASKS as u8);
        cursor += 1;
        self.interior_mask_data_count = mask_count;
        for index in 0..mask_count as usize {
            let reference = def[cursor] as usize;
            cursor += 1;
            self.interior_mask_data[index] =
                INTERIOR_MASKS[reference.min(INTERIOR_MASKS.len() - 1)];
        }

        let object_count = def[cursor];
        cursor += 1;
        for _ in 0..object_count {
            // Objects read through the shadow overlay so beds and
            // benches reflect the day's happenings.
            let object_index = self.get_roomdef(room, cursor);
            let column = def[cursor + 1];
            let row = def[cursor + 2];
            cursor += 3;
            self.expand_object(object_index, column as usize, row as usize);
        }
    }

    /// Decode one object's RLE stream into the tile buffer.
    pub(crate) fn expand_object(&mut self, index: u8, column: usize, row: usize) {
        let def = OBJECT_DEFS[(index as usize).min(OBJECT_DEFS.len() - 1)];
        let width = def[0] as usize;
        let height = def[1] as usize;
        let mut stream = def[2..].iter();

        let columns = self.columns;
        let rows = self.rows;
        let mut x = 0usize;
        let mut y = 0usize;

        let mut emit = |game: &mut Game, tile: u8, x: &mut usize, y: &mut usize| {
            if *y >= height {
                return;
            }
            let cx = column + *x;
            let cy = row + *y;
            // Tile zero is transparent; off-buffer emits are dropped.
            if tile != 0 && cx < columns && cy < rows {
                game.tile_buf[cy * columns + cx] = tile;
            }
            *x += 1;
            if *x == width {
                *x = 0;
                *y += 1;
            }
        };

        while let Some(&byte) = stream.next() {
            if byte != 0xFF {
                emit(self, byte, &mut x, &mut y);
                continue;
            }
            let Some(&control) = stream.next() else { break };
            match control {
                0xFF => emit(self, 0xFF, &mut x, &mut y),
                0x40..=0x4F => {
                    // Incrementing run.
                    let count = control & 0x0F;
                    let Some(&tile) = stream.next() else { break };
                    for step in 0..count {
                        emit(self, tile.wrapping_add(step), &mut x, &mut y);
                    }
                }
                0x80..=0xFE => {
                    // Repeated run.
                    let count = control & 0x7F;
                    let Some(&tile) = stream.next() else { break };
                    for _ in 0..count {
                        emit(self, tile, &mut x, &mut y);
                    }
                }
                _ => {
                    // Malformed control byte: treat as a literal tile.
                    debug_assert!(false, "bad object control byte {control:#x}");
                    emit(self, control, &mut x, &mut y);
                }
            }
        }
    }

    /// Expand the room then repaint it, for mid-game roomdef changes.
    pub(crate) fn setup_room_and_plot(&mut self) {
        if self.room_index == rooms::OUTDOORS || self.room_index == rooms::NONE {
            return;
        }
        self.setup_room();
        self.plot_interior_tiles();
    }

    /// Spawn any movable item (stove, crate) living in the current room
    /// into a vischar slot so it can be pushed around.
    pub(crate) fn setup_movable_items(&mut self) {
        for (index, &room) in MOVABLE_ITEM_ROOMS.iter().enumerate() {
            if room != self.room_index {
                continue;
            }
            let Some(slot) = (1..self.vischars.len()).find(|&i| self.vischars[i].is_empty())
            else {
                return;
            };

            let character = characters::STOVE_1 + index as u8;
            let mut vischar = Vischar {
                character,
                flags: 0,
                room: self.room_index,
                ..Vischar::default()
            };
            vischar.mi = self.movable_items[index];
            vischar.mi.sprite_base =
                if character == characters::CRATE { SPRITE_CRATE } else { SPRITE_STOVE };
            vischar.mi.sprite_index = 0;
            self.vischars[slot] = vischar;
            self.calc_vischar_isopos(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::rooms::{ROOMDEF_2_BED, object};
    use crate::test_common;

    #[test]
    fn shadow_bytes_override_static_data() {
        let mut game = test_common::game();
        // The hero's bed reads occupied by default...
        assert_eq!(
            game.get_roomdef(rooms::HUT2LEFT, ROOMDEF_2_BED),
            object::OCCUPIED_BED
        );
        // ...until the state says otherwise. The static table is
        // untouched either way.
        game.set_roomdef(rooms::HUT2LEFT, ROOMDEF_2_BED, object::EMPTY_BED_FACING_SE);
        assert_eq!(
            game.get_roomdef(rooms::HUT2LEFT, ROOMDEF_2_BED),
            object::EMPTY_BED_FACING_SE
        );
        assert_eq!(roomdef(rooms::HUT2LEFT)[ROOMDEF_2_BED], object::OCCUPIED_BED);
    }

    #[test]
    fn setup_room_loads_bounds_and_masks() {
        let mut game = test_common::game();
        game.room_index = rooms::HUT2LEFT;
        game.setup_room();

        assert_eq!(game.roomdef_dimensions_index, 1);
        assert_eq!(game.roomdef_object_bounds_count, 1);
        assert_eq!(game.roomdef_object_bounds[0], Bounds::new(50, 60, 34, 44));
        assert_eq!(game.interior_mask_data_count, 1);
    }

    #[test]
    fn setup_room_populates_the_tile_buffer() {
        let mut game = test_common::game();
        game.room_index = rooms::HUT2LEFT;
        game.setup_room();
        assert!(game.tile_buf.iter().any(|&t| t != 0));
    }

    #[test]
    fn incrementing_runs_expand() {
        let mut game = test_common::game();
        game.wipe_visible_tiles();
        // EMPTY_BED_FACING_SE: three incrementing runs of four from 0x60.
        game.expand_object(object::EMPTY_BED_FACING_SE, 2, 3);
        let columns = game.columns;
        assert_eq!(game.tile_buf[3 * columns + 2], 0x60);
        assert_eq!(game.tile_buf[3 * columns + 5], 0x63);
        assert_eq!(game.tile_buf[4 * columns + 2], 0x68);
        assert_eq!(game.tile_buf[5 * columns + 5], 0x73);
    }

    #[test]
    fn literal_ff_and_repeats_expand() {
        let mut game = test_common::game();
        game.wipe_visible_tiles();
        // WALL_SECTION embeds FF FF pairs: a literal 0xFF tile follows
        // each repeated run of four.
        game.expand_object(object::WALL_SECTION, 0, 0);
        let columns = game.columns;
        assert_eq!(game.tile_buf[0], 0xD8);
        assert_eq!(game.tile_buf[3], 0xD8);
        assert_eq!(game.tile_buf[4], 0xFF);
        assert_eq!(game.tile_buf[5], 0xD9);
        assert_eq!(game.tile_buf[columns], 0xDA);
    }

    #[test]
    fn transition_demotes_non_hero_vischars() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, crate::math::MapPos8::new(80, 60, 0));
        let guard = &mut game.vischars[1];
        guard.flags = 0;
        guard.character = characters::GUARD_1;
        guard.room = rooms::CORRIDOR_7;
        game.character_structs[characters::GUARD_1 as usize].character_and_flags |=
            crate::game::character::CHARACTERSTRUCT_ON_SCREEN;

        let result = game.transition(1, MapPos8::new(30, 44, 24));
        assert!(result.is_ok());
        assert!(game.vischars[1].is_empty());
        let charstr = &game.character_structs[characters::GUARD_1 as usize];
        assert!(!charstr.on_screen());
        assert_eq!(charstr.room, rooms::CORRIDOR_7);
    }

    #[test]
    fn entering_a_room_exits_the_tick() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, crate::math::MapPos8::new(80, 60, 0));
        game.vischars[HERO].room = rooms::CRATE;
        let result = game.transition(HERO, MapPos8::new(26, 44, 24));
        assert!(matches!(result, Err(Exit::Transitioned)));
        assert_eq!(game.room(), rooms::CRATE);
        assert_eq!(game.map_position, Pos8::new(116, 234));
        // Entering a room scores a point.
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn tunnels_force_the_crawl_stance() {
        let mut game = test_common::game();
        game.vischars[HERO].room = rooms::FIRST_TUNNEL;
        game.set_hero_sprite_for_room();
        assert!(game.vischars[HERO].crawling());

        game.vischars[HERO].room = rooms::HUT2LEFT;
        game.set_hero_sprite_for_room();
        assert!(!game.vischars[HERO].crawling());
    }
}
