//! Writing to the host screen: the window blit, glyphs, the score, the
//! morale flag and whole-screen wipes.

use crate::data::font::{ASCII_TO_FONT, BITMAP_FONT};
use crate::data::screen_offsets::GAME_WINDOW_START_OFFSETS;
use crate::game::context::Game;
use crate::game::rooms;
use crate::spectrum::{
    self, SCREEN_ATTRIBUTES_LENGTH, SCREEN_WIDTH, attribute, invalidate_bitmap, next_scanline,
};

/// Screen column where message text begins, row 23.
const MESSAGE_COLUMN: usize = 8;
const MESSAGE_ROW: usize = 23;

/// Screen position of the score digits.
const SCORE_COLUMN: usize = 26;
const SCORE_ROW: usize = 21;

/// The morale flag bitmap, two frames of cloth.
static FLAG_UP: [u8; 6] = [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0];
static FLAG_DOWN: [u8; 6] = [0xE0, 0xF0, 0xF8, 0xFC, 0xFE, 0xFF];

impl Game {
    /// Blit the window buffer into the game window area of the host
    /// screen, applying the sub-character scroll.
    ///
    /// The horizontal offset picks one of four start columns; the
    /// vertical flag selects a four-bit right shift with the previous
    /// byte's low nibble carried along.
    pub(crate) fn plot_game_window(&mut self) {
        let columns = self.columns;
        let x_offset = (self.game_window_offset.x & 6) as usize;
        let shifted = self.game_window_offset.y == 255;

        for (scanline, &start) in GAME_WINDOW_START_OFFSETS.iter().enumerate() {
            let src_row = scanline * columns;
            let dst = start as usize;

            if !shifted {
                for byte in 0..23 {
                    let src = src_row + x_offset + 1 + byte;
                    self.speccy.screen().pixels[dst + byte] =
                        if src < src_row + columns { self.window_buf[src] } else { 0 };
                }
            } else {
                let mut previous = self.window_buf[src_row + x_offset];
                for byte in 0..23 {
                    let src = src_row + x_offset + 1 + byte;
                    let current =
                        if src < src_row + columns { self.window_buf[src] } else { 0 };
                    self.speccy.screen().pixels[dst + byte] =
                        (previous << 4) | (current >> 4);
                    previous = current;
                }
            }
        }

        invalidate_bitmap(
            self.speccy.as_mut(),
            GAME_WINDOW_START_OFFSETS[0] as usize,
            23 * 8,
            128,
        );
    }

    /// Copy a bitmap to the screen, one byte column at a time.
    pub(crate) fn plot_bitmap(&mut self, src: &[u8], dst_offset: usize, width: u8, height: u8) {
        let mut row_offset = dst_offset;
        for row in 0..height as usize {
            for byte in 0..width as usize {
                let dst = row_offset + byte;
                if dst < self.speccy.screen().pixels.len() {
                    self.speccy.screen().pixels[dst] = src[row * width as usize + byte];
                }
            }
            row_offset = next_scanline(row_offset);
        }
    }

    /// Plot a single 8x8 tile at a screen offset.
    pub(crate) fn plot_bitmap_tile(&mut self, tile: &[u8; 8], dst_offset: usize) {
        self.plot_bitmap(tile, dst_offset, 1, 8);
    }

    /// Zero a width-by-height pixel area.
    pub(crate) fn screen_wipe(&mut self, dst_offset: usize, width: u8, height: u8) {
        let mut row_offset = dst_offset;
        for _ in 0..height {
            for byte in 0..width as usize {
                let dst = row_offset + byte;
                if dst < self.speccy.screen().pixels.len() {
                    self.speccy.screen().pixels[dst] = 0;
                }
            }
            row_offset = next_scanline(row_offset);
        }
    }

    /// Draw one font glyph for an ASCII byte at a UDG cell.
    pub(crate) fn plot_glyph(&mut self, ascii: u8, column: usize, row: usize) {
        let glyph = ASCII_TO_FONT[ascii as usize];
        let tile = BITMAP_FONT[(glyph as usize).min(BITMAP_FONT.len() - 1)];
        let offset = spectrum::screen_offset(column, row * 8);
        self.plot_bitmap_tile(&tile.0, offset);
        invalidate_bitmap(self.speccy.as_mut(), offset, 8, 8);
    }

    /// Draw a glyph of the current message at the status bar.
    pub(crate) fn plot_message_glyph(&mut self, ascii: u8, index: usize) {
        if MESSAGE_COLUMN + index < SCREEN_WIDTH {
            self.plot_glyph(ascii, MESSAGE_COLUMN + index, MESSAGE_ROW);
        }
    }

    /// Redraw the score digits.
    pub(crate) fn plot_score(&mut self) {
        let score_digits = self.score_digits;
        for (index, &digit) in score_digits.iter().enumerate() {
            self.plot_glyph(b'0' + digit, SCORE_COLUMN + index, SCORE_ROW);
        }
    }

    /// Draw the morale flag at its current height.
    pub(crate) fn plot_morale_flag(&mut self, up_frame: bool) {
        let cloth: &[u8; 6] = if up_frame { &FLAG_UP } else { &FLAG_DOWN };
        let offset = self.moraleflag_screen_offset;
        let mut row_offset = offset;
        for &row in cloth.iter() {
            if row_offset < self.speccy.screen().pixels.len() {
                self.speccy.screen().pixels[row_offset] = row;
            }
            row_offset = next_scanline(row_offset);
        }
        invalidate_bitmap(self.speccy.as_mut(), offset, 8, 6);
    }

    /// Recolour the flagpole cells.
    pub(crate) fn set_morale_flag_screen_attributes(&mut self, attrs: u8) {
        for row in 2..17 {
            let index = row * SCREEN_WIDTH + 2;
            self.speccy.screen().attributes[index] = attrs;
        }
        self.speccy.draw(None);
    }

    /// Window colour for the current time of day and alert state.
    pub(crate) fn choose_game_window_attributes(&self) -> u8 {
        if self.red_flag || self.bell == crate::game::alarm::BELL_PERPETUAL {
            attribute::BRIGHT_RED_OVER_BLACK
        } else if self.day_or_night {
            attribute::BRIGHT_BLUE_OVER_BLACK
        } else if self.room_index >= rooms::FIRST_TUNNEL && self.room_index != rooms::NONE {
            // Tunnels are dark without the torch.
            let torch = crate::game::item::Item::Torch as u8;
            if self.items_held.contains(&torch) {
                attribute::WHITE_OVER_BLACK
            } else {
                attribute::BLUE_OVER_BLACK
            }
        } else {
            attribute::WHITE_OVER_BLACK
        }
    }

    /// Fill the game window's attribute cells.
    pub(crate) fn set_game_window_attributes(&mut self, attrs: u8) {
        self.game_window_attribute = attrs;
        for row in 2..18 {
            for column in 7..30 {
                self.speccy.screen().attributes[row * SCREEN_WIDTH + column] = attrs;
            }
        }
        self.speccy.draw(None);
    }

    /// Blank the whole screen and its attributes.
    pub(crate) fn wipe_full_screen_and_attributes(&mut self) {
        let screen = self.speccy.screen();
        screen.pixels.fill(0);
        screen.attributes[..SCREEN_ATTRIBUTES_LENGTH].fill(attribute::WHITE_OVER_BLACK);
        self.speccy.draw(None);
    }

    /// Centre a block of ending text on a blank screen.
    pub(crate) fn plot_ending_screen(&mut self, lines: &[&str]) {
        self.wipe_full_screen_and_attributes();
        let first_row = 8usize.saturating_sub(lines.len() / 2) + 2;
        for (line_index, line) in lines.iter().enumerate() {
            let column = (SCREEN_WIDTH - line.len().min(SCREEN_WIDTH)) / 2;
            for (char_index, &ascii) in line.as_bytes().iter().enumerate() {
                self.plot_glyph(ascii, column + char_index, first_row + line_index * 2);
            }
        }
        self.speccy.draw(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_common;

    #[test]
    fn unshifted_blit_copies_window_rows() {
        let mut game = test_common::game();
        for (index, byte) in game.window_buf.iter_mut().enumerate() {
            *byte = (index & 0xFF) as u8;
        }
        game.game_window_offset = crate::math::Pos8::new(0, 0);
        game.plot_game_window();

        // First scanline: 23 bytes from window column 1.
        let dst = GAME_WINDOW_START_OFFSETS[0] as usize;
        let expected: Vec<u8> = (1..24).map(|i| (i & 0xFF) as u8).collect();
        assert_eq!(&game.speccy_mut().screen().pixels[dst..dst + 23], &expected[..]);
    }

    #[test]
    fn shifted_blit_carries_nibbles() {
        let mut game = test_common::game();
        game.window_buf.fill(0);
        game.window_buf[0] = 0xAB;
        game.window_buf[1] = 0xCD;
        game.game_window_offset = crate::math::Pos8::new(0, 255);
        game.plot_game_window();

        let dst = GAME_WINDOW_START_OFFSETS[0] as usize;
        // High nibble of the previous byte joins the current one.
        assert_eq!(game.speccy_mut().screen().pixels[dst], 0xBC);
        assert_eq!(game.speccy_mut().screen().pixels[dst + 1], 0xD0);
    }

    #[test]
    fn glyphs_land_at_the_status_bar() {
        let mut game = test_common::game();
        game.plot_message_glyph(b'A', 0);
        let offset = spectrum::screen_offset(MESSAGE_COLUMN, MESSAGE_ROW * 8);
        let glyph = ASCII_TO_FONT[b'A' as usize];
        assert_eq!(
            game.speccy_mut().screen().pixels[offset],
            BITMAP_FONT[glyph as usize].0[0]
        );
    }

    #[test]
    fn window_attributes_follow_day_night_and_alarm() {
        let mut game = test_common::game();
        assert_eq!(game.choose_game_window_attributes(), attribute::WHITE_OVER_BLACK);
        game.day_or_night = true;
        assert_eq!(
            game.choose_game_window_attributes(),
            attribute::BRIGHT_BLUE_OVER_BLACK
        );
        game.red_flag = true;
        assert_eq!(
            game.choose_game_window_attributes(),
            attribute::BRIGHT_RED_OVER_BLACK
        );
    }

    #[test]
    fn tunnel_needs_the_torch() {
        let mut game = test_common::game();
        game.room_index = rooms::FIRST_TUNNEL;
        assert_eq!(game.choose_game_window_attributes(), attribute::BLUE_OVER_BLACK);
        game.items_held[0] = crate::game::item::Item::Torch as u8;
        assert_eq!(game.choose_game_window_attributes(), attribute::WHITE_OVER_BLACK);
    }
}
