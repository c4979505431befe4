//! The zoombox: the iris-in played when a room is entered.

use crate::data::screen_offsets::GAME_WINDOW_START_OFFSETS;
use crate::game::context::Game;
use crate::game::{Exit, Flow};
use crate::graphics::Tile;
use crate::spectrum::{SCREEN_WIDTH, SleepOutcome, invalidate_bitmap, next_scanline};

/// Zoombox growth state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zoombox {
    pub x: u8,
    pub y: u8,
    pub width: u8,
    pub height: u8,
}

/// Border tiles: corners, horizontal and vertical edges.
static ZOOMBOX_TILES: [Tile; 6] = [
    Tile([0x00, 0x00, 0x00, 0x03, 0x04, 0x08, 0x08, 0x08]), // top left
    Tile([0x00, 0x20, 0x18, 0xF4, 0x2F, 0x18, 0x04, 0x00]), // horizontal
    Tile([0x00, 0x00, 0x00, 0x00, 0xE0, 0x10, 0x08, 0x08]), // top right
    Tile([0x08, 0x08, 0x1A, 0x2C, 0x34, 0x58, 0x10, 0x10]), // vertical
    Tile([0x10, 0x10, 0x10, 0x20, 0xC0, 0x00, 0x00, 0x00]), // bottom right
    Tile([0x10, 0x10, 0x08, 0x07, 0x00, 0x00, 0x00, 0x00]), // bottom left
];

const TILE_TL: usize = 0;
const TILE_HZ: usize = 1;
const TILE_TR: usize = 2;
const TILE_VT: usize = 3;
const TILE_BR: usize = 4;
const TILE_BL: usize = 5;

impl Game {
    /// Run the iris-in: the box grows from the window centre out to the
    /// full 22x15 area, each frame copying that part of the window
    /// buffer to the screen inside a drawn border.
    pub(crate) fn zoombox(&mut self) -> Flow {
        self.zoombox.x = 12;
        self.zoombox.y = 8;
        self.zoombox.width = 0;
        self.zoombox.height = 0;

        let attrs = self.choose_game_window_attributes();
        for (row, column) in [(9, 18), (9, 19), (10, 18), (10, 19)] {
            self.speccy.screen().attributes[row * SCREEN_WIDTH + column] = attrs;
        }

        loop {
            self.speccy.stamp();

            // Shrink x towards 1, growing the width with it.
            if self.zoombox.x != 1 {
                self.zoombox.x -= 1;
                self.zoombox.width += 1;
            }
            if self.zoombox.x + self.zoombox.width < 22 {
                self.zoombox.width += 1;
            }
            // Shrink y towards 1, growing the height with it.
            if self.zoombox.y != 1 {
                self.zoombox.y -= 1;
                self.zoombox.height += 1;
            }
            if self.zoombox.y + self.zoombox.height < 15 {
                self.zoombox.height += 1;
            }

            self.zoombox_fill();
            self.zoombox_draw_border();

            let first_line = (self.zoombox.y as usize - 1) * 8;
            invalidate_bitmap(
                self.speccy.as_mut(),
                GAME_WINDOW_START_OFFSETS[first_line.min(127)] as usize
                    + self.zoombox.x as usize
                    - 1,
                (self.zoombox.width as i32 + 2) * 8,
                (self.zoombox.height as i32 + 2) * 8,
            );

            // The original slows as the area grows; match that pace.
            let delay =
                (self.zoombox.height as u32 + self.zoombox.width as u32) * 110_951 / 35;
            if self.speccy.sleep(delay) == SleepOutcome::Cancelled {
                return Err(Exit::Cancelled);
            }

            if self.zoombox.height + self.zoombox.width >= 35 {
                return Ok(());
            }
        }
    }

    /// Copy the boxed part of the window buffer to the screen.
    fn zoombox_fill(&mut self) {
        let columns = self.columns;
        let width = self.zoombox.width as usize;

        for row in 0..self.zoombox.height as usize {
            let window_row = self.zoombox.y as usize + row;
            for line in 0..8usize {
                let scanline = window_row * 8 + line;
                if scanline >= GAME_WINDOW_START_OFFSETS.len() {
                    break;
                }
                let src = scanline * columns + self.zoombox.x as usize + 1;
                let dst =
                    GAME_WINDOW_START_OFFSETS[scanline] as usize + self.zoombox.x as usize;
                let pixels = &mut self.speccy.screen().pixels;
                if dst + width <= pixels.len() && src + width <= self.window_buf.len() {
                    pixels[dst..dst + width]
                        .copy_from_slice(&self.window_buf[src..src + width]);
                }
            }
        }
    }

    /// Draw the box border: corners, then the edges clockwise.
    fn zoombox_draw_border(&mut self) {
        let x = self.zoombox.x as usize;
        let y = self.zoombox.y as usize;
        let width = self.zoombox.width as usize;
        let height = self.zoombox.height as usize;

        let top_row = y - 1;
        let bottom_row = y + height;

        self.zoombox_draw_tile(TILE_TL, x - 1, top_row);
        for step in 0..width {
            self.zoombox_draw_tile(TILE_HZ, x + step, top_row);
        }
        self.zoombox_draw_tile(TILE_TR, x + width, top_row);
        for step in 0..height {
            self.zoombox_draw_tile(TILE_VT, x + width, y + step);
        }
        self.zoombox_draw_tile(TILE_BR, x + width, bottom_row);
        for step in 0..width {
            self.zoombox_draw_tile(TILE_HZ, x + step, bottom_row);
        }
        self.zoombox_draw_tile(TILE_BL, x - 1, bottom_row);
        for step in 0..height {
            self.zoombox_draw_tile(TILE_VT, x - 1, y + step);
        }
    }

    /// Draw one border tile at a window-relative UDG cell, colouring
    /// its attribute.
    fn zoombox_draw_tile(&mut self, tile: usize, x: usize, y: usize) {
        let scanline = y * 8;
        if scanline >= GAME_WINDOW_START_OFFSETS.len() || x >= 24 {
            return;
        }
        let mut offset = GAME_WINDOW_START_OFFSETS[scanline] as usize + x;

        for &row in ZOOMBOX_TILES[tile].0.iter() {
            if offset < self.speccy.screen().pixels.len() {
                self.speccy.screen().pixels[offset] = row;
            }
            offset = next_scanline(offset);
        }

        // Attribute under the tile: window area starts at screen row 2,
        // column 7.
        let attr_index = (y + 2) * SCREEN_WIDTH + x + 7;
        let attrs = self.game_window_attribute;
        if attr_index < self.speccy.screen().attributes.len() {
            self.speccy.screen().attributes[attr_index] = attrs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_common;

    #[test]
    fn zoombox_grows_to_full_size() {
        let mut game = test_common::game();
        game.window_buf.fill(0x55);
        assert!(game.zoombox().is_ok());
        assert_eq!(game.zoombox.x, 1);
        assert_eq!(game.zoombox.y, 1);
        assert!(game.zoombox.width + game.zoombox.height >= 35);
    }

    #[test]
    fn zoombox_copies_window_contents() {
        let mut game = test_common::game();
        game.window_buf.fill(0xAA);
        game.zoombox().unwrap();

        // The centre of the window area ends up painted.
        let scanline = 8usize * 8;
        let offset = GAME_WINDOW_START_OFFSETS[scanline] as usize + 12;
        assert_eq!(game.speccy_mut().screen().pixels[offset], 0xAA);
    }
}
