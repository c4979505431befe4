//! The map, tile and window buffers, and the scrolling that keeps them
//! aligned with the hero.

use crate::data::animations::MAP_DIRECTION_NONE;
use crate::data::tiles::{MAP, MAP_HEIGHT, MAP_WIDTH, SUPERTILES, exterior_bank, INTERIOR_TILES};
use crate::game::context::Game;
use crate::game::rooms;
use crate::game::vischar::{ANIMINDEX_REVERSE, CF_DONT_MOVE_MAP, HERO};
use crate::graphics::Tile;
use crate::math::Direction;

impl Game {
    /// Fill the supertile buffer for the current map position.
    pub(crate) fn get_supertiles(&mut self) {
        let base_x = (self.map_position.x / 4) as usize;
        let base_y = (self.map_position.y / 4) as usize;

        for row in 0..self.st_rows {
            for col in 0..self.st_columns {
                let map_x = (base_x + col).min(MAP_WIDTH - 1);
                let map_y = (base_y + row).min(MAP_HEIGHT - 1);
                self.map_buf[row * self.st_columns + col] = MAP[map_y * MAP_WIDTH + map_x];
            }
        }
    }

    /// The supertile index under window UDG (x, y).
    fn supertile_at(&self, x: usize, y: usize) -> u8 {
        let st_col = ((self.map_position.x as usize & 3) + x) / 4;
        let st_row = ((self.map_position.y as usize & 3) + y) / 4;
        self.map_buf[(st_row.min(self.st_rows - 1)) * self.st_columns
            + st_col.min(self.st_columns - 1)]
    }

    /// The tile pixel data for a tile index under the given supertile.
    pub(crate) fn select_tile_set(&self, x: usize, y: usize) -> &'static [Tile; 256] {
        if self.room_index == rooms::OUTDOORS {
            exterior_bank(self.supertile_at(x, y))
        } else {
            &INTERIOR_TILES
        }
    }

    /// Write one tile's eight rows into the window buffer.
    pub(crate) fn plot_tile(&mut self, tile_index: u8, x: usize, y: usize) {
        let bank = self.select_tile_set(x, y);
        let tile = &bank[tile_index as usize];
        let columns = self.columns;
        for (line, &row) in tile.0.iter().enumerate() {
            self.window_buf[(y * 8 + line) * columns + x] = row;
        }
    }

    /// Recompute one window cell from the map and paint it.
    fn refresh_tile(&mut self, x: usize, y: usize) {
        let tile_index = if self.room_index == rooms::OUTDOORS {
            let supertile = self.supertile_at(x, y);
            let tx = (self.map_position.x as usize + x) & 3;
            let ty = (self.map_position.y as usize + y) & 3;
            SUPERTILES[supertile as usize].0[ty * 4 + tx]
        } else {
            self.tile_buf[y * self.columns + x]
        };
        if self.room_index == rooms::OUTDOORS {
            self.tile_buf[y * self.columns + x] = tile_index;
        }
        self.plot_tile(tile_index, x, y);
    }

    /// Expand the entire visible map into the tile and window buffers.
    pub(crate) fn plot_all_tiles(&mut self) {
        for y in 0..self.rows {
            for x in 0..self.columns {
                self.refresh_tile(x, y);
            }
        }
    }

    /// Expand the tile buffer of an interior scene into the window
    /// buffer.
    pub(crate) fn plot_interior_tiles(&mut self) {
        for y in 0..self.rows {
            for x in 0..self.columns {
                let tile_index = self.tile_buf[y * self.columns + x];
                self.plot_tile(tile_index, x, y);
            }
        }
    }

    pub(crate) fn plot_topmost_tiles(&mut self) {
        for x in 0..self.columns {
            self.refresh_tile(x, 0);
        }
    }

    pub(crate) fn plot_bottommost_tiles(&mut self) {
        for x in 0..self.columns {
            self.refresh_tile(x, self.rows - 1);
        }
    }

    pub(crate) fn plot_leftmost_tiles(&mut self) {
        for y in 0..self.rows {
            self.refresh_tile(0, y);
        }
    }

    pub(crate) fn plot_rightmost_tiles(&mut self) {
        for y in 0..self.rows {
            self.refresh_tile(self.columns - 1, y);
        }
    }

    /// Slide both buffers one UDG horizontally. Positive `dx` moves
    /// content towards lower columns (the map scrolled left).
    fn shift_buffers_horizontal(&mut self, left: bool) {
        let columns = self.columns;
        for y in 0..self.rows {
            let row = y * columns;
            if left {
                self.tile_buf.copy_within(row + 1..row + columns, row);
            } else {
                self.tile_buf.copy_within(row..row + columns - 1, row + 1);
            }
            for line in 0..8 {
                let scan = (y * 8 + line) * columns;
                if left {
                    self.window_buf.copy_within(scan + 1..scan + columns, scan);
                } else {
                    self.window_buf.copy_within(scan..scan + columns - 1, scan + 1);
                }
            }
        }
    }

    /// Slide both buffers one UDG vertically. `up` moves content
    /// towards lower rows (the map scrolled up... the window moved
    /// down).
    fn shift_buffers_vertical(&mut self, up: bool) {
        let columns = self.columns;
        let rows = self.rows;
        if up {
            self.tile_buf.copy_within(columns.., 0);
            self.window_buf.copy_within(8 * columns..rows * 8 * columns, 0);
        } else {
            self.tile_buf.copy_within(0..(rows - 1) * columns, columns);
            self.window_buf
                .copy_within(0..(rows - 1) * 8 * columns, 8 * columns);
        }
    }

    pub(crate) fn shunt_map_left(&mut self) {
        self.get_supertiles();
        self.shift_buffers_horizontal(true);
        self.plot_rightmost_tiles();
    }

    pub(crate) fn shunt_map_right(&mut self) {
        self.get_supertiles();
        self.shift_buffers_horizontal(false);
        self.plot_leftmost_tiles();
    }

    pub(crate) fn shunt_map_up(&mut self) {
        self.get_supertiles();
        self.shift_buffers_vertical(true);
        self.plot_bottommost_tiles();
    }

    pub(crate) fn shunt_map_down(&mut self) {
        self.get_supertiles();
        self.shift_buffers_vertical(false);
        self.plot_topmost_tiles();
    }

    pub(crate) fn shunt_map_up_right(&mut self) {
        self.get_supertiles();
        self.shift_buffers_vertical(true);
        self.shift_buffers_horizontal(true);
        self.plot_bottommost_tiles();
        self.plot_rightmost_tiles();
    }

    pub(crate) fn shunt_map_down_left(&mut self) {
        self.get_supertiles();
        self.shift_buffers_vertical(false);
        self.shift_buffers_horizontal(false);
        self.plot_topmost_tiles();
        self.plot_leftmost_tiles();
    }

    /// Scroll the map after the hero: a four-phase pattern gives each
    /// walking direction the right two-to-one step ratio.
    pub(crate) fn move_map(&mut self) {
        if self.room_index != rooms::OUTDOORS {
            return;
        }
        let hero = &self.vischars[HERO];
        if hero.counter_and_flags & CF_DONT_MOVE_MAP != 0 {
            return;
        }

        let anim = hero.current_anim();
        if anim.map_direction == MAP_DIRECTION_NONE {
            return;
        }
        let mut direction = Direction::from_byte(anim.map_direction);
        if hero.animindex & ANIMINDEX_REVERSE != 0 {
            direction = direction.reversed();
        }

        self.move_map_y = (self.move_map_y + 1) & 3;
        let phase = self.move_map_y;

        let x = self.map_position.x as i32;
        let y = self.map_position.y as i32;

        match direction {
            Direction::TopLeft => match phase {
                0 | 2 => self.move_map_to(x - 1, y),
                1 => self.move_map_to(x, y - 1),
                _ => {}
            },
            Direction::BottomRight => match phase {
                0 | 2 => self.move_map_to(x + 1, y),
                1 => self.move_map_to(x, y + 1),
                _ => {}
            },
            Direction::TopRight => match phase {
                0 => self.move_map_to(x + 1, y),
                1 => self.move_map_to(x + 1, y - 1),
                _ => {}
            },
            Direction::BottomLeft => match phase {
                0 => self.move_map_to(x - 1, y),
                1 => self.move_map_to(x - 1, y + 1),
                _ => {}
            },
        }
    }

    /// Clamp, commit and repaint a single-step map move.
    fn move_map_to(&mut self, x: i32, y: i32) {
        let nx = x.clamp(0, 192) as u8;
        let ny = y.clamp(0, 124) as u8;
        let old = self.map_position;
        if nx == old.x && ny == old.y {
            return;
        }
        self.map_position.x = nx;
        self.map_position.y = ny;

        match ((nx as i32 - old.x as i32), (ny as i32 - old.y as i32)) {
            (1, 0) => self.shunt_map_left(),
            (-1, 0) => self.shunt_map_right(),
            (0, 1) => self.shunt_map_up(),
            (0, -1) => self.shunt_map_down(),
            (1, -1) => self.shunt_map_up_right(),
            (-1, 1) => self.shunt_map_down_left(),
            _ => {
                // A clamped diagonal collapses to a single axis.
                self.get_supertiles();
                self.plot_all_tiles();
            }
        }
    }

    /// Repaint the background tiles beneath every drawable sprite, so
    /// this frame's plots start from a clean scene.
    pub(crate) fn restore_tiles(&mut self) {
        for index in 0..self.vischars.len() {
            let vischar = &self.vischars[index];
            if vischar.is_empty() {
                continue;
            }

            let width = vischar.width as usize + 1;
            let height = (vischar.height as usize + 7) / 8 + 1;
            let iso_x = (vischar.isopos.x / 8) as i32 - self.map_position.x as i32;
            let iso_y = (vischar.isopos.y / 8) as i32 - self.map_position.y as i32;

            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    let cx = iso_x + x;
                    let cy = iso_y + y;
                    if (0..self.columns as i32).contains(&cx)
                        && (0..self.rows as i32).contains(&cy)
                    {
                        self.refresh_tile(cx as usize, cy as usize);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Pos8;
    use crate::test_common;

    #[test]
    fn buffers_reseed_identically_after_shunting() {
        let mut game = test_common::game();
        game.room_index = rooms::OUTDOORS;
        game.map_position = Pos8::new(80, 40);
        game.get_supertiles();
        game.plot_all_tiles();

        // Scroll one step right and back.
        game.map_position.x += 1;
        game.shunt_map_left();
        game.map_position.x -= 1;
        game.shunt_map_right();

        let shunted_tiles = game.tile_buf.clone();
        let shunted_window = game.window_buf.clone();

        // A from-scratch reseed must agree with the shunted buffers.
        game.get_supertiles();
        game.plot_all_tiles();
        assert_eq!(game.tile_buf, shunted_tiles);
        assert_eq!(&game.window_buf[..], &shunted_window[..]);
    }

    #[test]
    fn map_buffer_tracks_the_map_position() {
        let mut game = test_common::game();
        game.room_index = rooms::OUTDOORS;
        game.map_position = Pos8::new(40, 20);
        game.get_supertiles();

        for row in 0..5 {
            for col in 0..7 {
                assert_eq!(
                    game.map_buf[row * 7 + col],
                    MAP[(20 / 4 + row) * MAP_WIDTH + 40 / 4 + col]
                );
            }
        }
    }

    #[test]
    fn window_buffer_rows_match_the_tile_bank() {
        let mut game = test_common::game();
        game.room_index = rooms::OUTDOORS;
        game.map_position = Pos8::new(0, 0);
        game.get_supertiles();
        game.plot_all_tiles();

        // Spot-check one tile's eight rows.
        let tile_index = game.tile_buf[0];
        let bank = game.select_tile_set(0, 0);
        for line in 0..8 {
            assert_eq!(game.window_buf[line * game.columns], bank[tile_index as usize].0[line]);
        }
    }

    #[test]
    fn move_map_styles_follow_the_phase_pattern() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, crate::math::MapPos8::new(80, 60, 0));
        game.map_position = Pos8::new(80, 40);
        game.get_supertiles();
        game.plot_all_tiles();

        // Walking top-left: over four phases the map moves two columns
        // and one row up-left.
        let hero = &mut game.vischars[HERO];
        hero.anim = 4; // walk top-left
        hero.animindex = 0;
        let before = game.map_position;
        for _ in 0..4 {
            game.move_map();
        }
        assert_eq!(game.map_position.x, before.x - 2);
        assert_eq!(game.map_position.y, before.y - 1);
    }

    #[test]
    fn indoor_scenes_never_scroll() {
        let mut game = test_common::game();
        test_common::place_hero_in_room(&mut game, rooms::HUT2LEFT, crate::math::MapPos8::new(40, 40, 24));
        let before = game.map_position;
        game.move_map();
        assert_eq!(game.map_position, before);
    }
}
