//! The foreground mask buffer: scenery that should visually cover
//! sprites is cut into a per-sprite mask before each masked plot.

use once_cell::sync::Lazy;

use crate::data::masks::{EXTERIOR_MASKS, MASK_RUN_FLAG, MASK_STRIPS};
use crate::data::MaskDef;
use crate::game::context::{Game, MASK_BUFFER_HEIGHT, MASK_BUFFER_WIDTHBYTES};
use crate::game::rooms;
use crate::graphics::Tile;

/// Mask tiles referenced by the strips: 0 leaves the sprite visible,
/// 1 blanks it, the rest are edge shapes.
static MASK_TILES: Lazy<[Tile; 128]> = Lazy::new(|| {
    let mut tiles = [Tile([0xFF; 8]); 128];
    tiles[1] = Tile([0x00; 8]);
    for index in 2..128usize {
        let mut tile = [0u8; 8];
        for (row, bits) in tile.iter_mut().enumerate() {
            // Diagonal-ish edges, deterministic per index.
            *bits = (0xFFu8 << ((index + row) & 7))
                | ((index as u8).rotate_left(row as u32) & 0x0F);
        }
        tiles[index] = Tile(tile);
    }
    tiles
});

/// AND one mask tile into a UDG cell of the mask buffer.
pub(crate) fn mask_against_tile(index: u8, buffer: &mut [u8], col: usize, row: usize) {
    let tile = &MASK_TILES[(index as usize) & 0x7F];
    for (line, &bits) in tile.0.iter().enumerate() {
        let offset = (row * 8 + line) * MASK_BUFFER_WIDTHBYTES + col;
        buffer[offset] &= bits;
    }
}

impl Game {
    /// Rebuild the mask buffer for the sprite whose position is stashed
    /// in `mappos_stash`/`isopos`.
    ///
    /// At night outdoors the buffer goes dark instead, and only the
    /// searchlight beams restore visibility; the hero's caught test then
    /// reads straight out of this buffer.
    pub(crate) fn render_mask_buffer(&mut self) {
        self.mask_buffer.fill(0xFF);

        if self.room_index == rooms::OUTDOORS {
            for index in 0..EXTERIOR_MASKS.len() {
                let mask = EXTERIOR_MASKS[index];
                self.apply_mask(&mask);
            }
            if self.day_or_night {
                self.mask_buffer.fill(0x00);
                self.searchlight_mask_feed();
            }
        } else {
            for index in 0..self.interior_mask_data_count as usize {
                let mask = self.interior_mask_data[index];
                self.apply_mask(&mask);
            }
        }
    }

    /// Apply one scenery mask if it covers the current sprite.
    fn apply_mask(&mut self, mask: &MaskDef) {
        let iso_x = self.isopos.x as i32;
        let iso_y = self.isopos.y as i32;

        // Horizontal and vertical overlap of the mask's footprint with
        // the sprite's.
        if (mask.bounds.x1 as i32) < iso_x || (mask.bounds.x0 as i32) > iso_x + 3 {
            return;
        }
        if (mask.bounds.y1 as i32) < iso_y - 4 || (mask.bounds.y0 as i32) > iso_y + 5 {
            return;
        }

        // Depth: the scenery covers the sprite only when the sprite is
        // behind and below it.
        let stash = self.mappos_stash;
        if stash.u < mask.mappos.u || stash.v <= mask.mappos.v || stash.w >= mask.mappos.w {
            return;
        }

        let strip = MASK_STRIPS[(mask.index as usize).min(MASK_STRIPS.len() - 1)];
        let width = strip[0] as usize;

        // Walk the strip's RLE, dropping cells outside the buffer.
        let origin_col = mask.bounds.x0 as i32 - iso_x;
        let origin_row = mask.bounds.y0 as i32 - iso_y;

        let mut col = 0usize;
        let mut row = 0usize;
        let mut cursor = 1usize;
        while cursor < strip.len() {
            let byte = strip[cursor];
            cursor += 1;
            let (count, value) = if byte & MASK_RUN_FLAG != 0 {
                if cursor >= strip.len() {
                    break;
                }
                let value = strip[cursor];
                cursor += 1;
                (((byte & !MASK_RUN_FLAG) + 1) as usize, value)
            } else {
                (1usize, byte)
            };

            for _ in 0..count {
                let dst_col = origin_col + col as i32;
                let dst_row = origin_row + row as i32;
                if (0..MASK_BUFFER_WIDTHBYTES as i32).contains(&dst_col)
                    && (0..MASK_BUFFER_HEIGHT as i32).contains(&dst_row)
                {
                    mask_against_tile(
                        value,
                        &mut self.mask_buffer,
                        dst_col as usize,
                        dst_row as usize,
                    );
                }
                col += 1;
                if col == width {
                    col = 0;
                    row += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{MapPos8, Pos8};
    use crate::test_common;

    #[test]
    fn mask_tiles_have_the_two_fixed_entries() {
        assert_eq!(MASK_TILES[0].0, [0xFF; 8]);
        assert_eq!(MASK_TILES[1].0, [0x00; 8]);
    }

    #[test]
    fn buffer_defaults_to_fully_visible() {
        let mut game = test_common::game();
        game.room_index = rooms::HUT2LEFT;
        game.interior_mask_data_count = 0;
        game.render_mask_buffer();
        assert!(game.mask_buffer.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn depth_test_selects_only_covering_masks() {
        let mut game = test_common::game();
        game.room_index = rooms::OUTDOORS;

        // The first exterior mask: a hut at bounds (71..112, 39..63),
        // map position (106, 82, 12). A sprite behind it, overlapping
        // the solid part of the strip...
        game.isopos = Pos8::new(106, 40);
        game.mappos_stash = MapPos8::new(110, 90, 2);
        game.render_mask_buffer();
        assert!(game.mask_buffer.iter().any(|&b| b != 0xFF));

        // ...and one in front of it, which stays uncovered.
        game.mappos_stash = MapPos8::new(100, 70, 2);
        game.render_mask_buffer();
        assert!(game.mask_buffer.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn masks_outside_the_sprite_footprint_are_skipped() {
        let mut game = test_common::game();
        game.room_index = rooms::OUTDOORS;
        game.isopos = Pos8::new(200, 120);
        game.mappos_stash = MapPos8::new(255, 255, 0);
        game.render_mask_buffer();
        assert!(game.mask_buffer.iter().all(|&b| b == 0xFF));
    }
}
