//! The masked isometric sprite plotter.
//!
//! Sprites come in two widths: 16 pixels (two source bytes, three
//! shifted) and 24 pixels (three source bytes, four shifted). Each row
//! is shifted into place by the sprite's sub-cell x offset, cut by the
//! sprite's own transparency mask, then cut again by the foreground
//! mask so scenery stands in front.

use crate::data::sprites::{SPRITE_FLIP, SPRITES};
use crate::game::context::{Game, MASK_BUFFER_WIDTHBYTES};
use crate::game::item::{ITEMSTRUCT_NEARBY_6, item_sprite};
use crate::game::rooms;
use crate::game::vischar::CF_DRAWABLE;
use crate::math::{MapPos8, Pos8, scale_mappos_down};

/// Scratch state for one masked plot.
#[derive(Debug, Clone, Copy)]
pub struct SpritePlotter {
    pub bitmap: &'static [u8],
    pub mask: &'static [u8],
    pub bitmap_offset: usize,
    pub mask_offset: usize,
    /// First output byte within the window buffer.
    pub window_offset: usize,
    /// First row within the foreground mask buffer.
    pub fg_mask_offset: usize,
    /// Sub-cell shift, 0..=7 bits.
    pub x_shift: u8,
    pub flip: bool,
    /// Source bytes per row.
    pub width_bytes: u8,
    pub left_skip: u8,
    pub clipped_width: u8,
    pub top_skip: u8,
    pub clipped_height: u8,
    /// Which of the up-to-four shifted output bytes are written.
    pub enables: [bool; 4],
}

impl Default for SpritePlotter {
    fn default() -> Self {
        SpritePlotter {
            bitmap: &[],
            mask: &[],
            bitmap_offset: 0,
            mask_offset: 0,
            window_offset: 0,
            fg_mask_offset: 0,
            x_shift: 0,
            flip: false,
            width_bytes: 2,
            left_skip: 0,
            clipped_width: 0,
            top_skip: 0,
            clipped_height: 0,
            enables: [false; 4],
        }
    }
}

/// Clip a sprite's span against the window. Returns
/// `(lead_skip, visible)` or None when fully outside.
fn clip_span(origin: i32, extent: i32, limit: i32) -> Option<(u8, u8)> {
    if origin >= limit || origin + extent <= 0 {
        return None;
    }
    let lead = (-origin).max(0);
    let visible = (extent - lead).min(limit - origin.max(0));
    if visible <= 0 { None } else { Some((lead as u8, visible as u8)) }
}

impl Game {
    /// Clip a vischar against the window, in UDG columns and pixel rows.
    pub(crate) fn vischar_visible(&self, slot: usize) -> Option<(u8, u8, u8, u8)> {
        let vischar = &self.vischars[slot];
        let width_bytes = vischar.width as i32 + 1;
        let height = vischar.height as i32;

        let x = (vischar.isopos.x / 8) as i32 - self.map_position.x as i32;
        let (left_skip, clipped_width) = clip_span(x, width_bytes, self.columns as i32)?;

        // Vertical clipping works in pixels since heights do.
        let y = vischar.isopos.y as i32 - self.map_position.y as i32 * 8;
        let (top_skip, clipped_height) = clip_span(y, height, self.rows as i32 * 8)?;

        Some((left_skip, clipped_width, top_skip, clipped_height))
    }

    /// Clip an item the same way. Items are two bytes wide.
    pub(crate) fn item_visible(&self, isopos: Pos8) -> Option<(u8, u8, u8, u8)> {
        let width_bytes = 3i32;
        let height = self.item_height as i32;

        let x = isopos.x as i32 - self.map_position.x as i32;
        let (left_skip, clipped_width) = clip_span(x, width_bytes, self.columns as i32)?;

        let y = isopos.y as i32 * 8 - self.map_position.y as i32 * 8;
        let (top_skip, clipped_height) = clip_span(y, height, self.rows as i32 * 8)?;

        Some((left_skip, clipped_width, top_skip, clipped_height))
    }

    /// Select which shifted output bytes a clip allows.
    fn patch_enables(&mut self, total_bytes: u8, left_skip: u8, clipped_width: u8) {
        for byte in 0..4u8 {
            self.plotter.enables[byte as usize] =
                byte < total_bytes && byte >= left_skip && byte < left_skip + clipped_width;
        }
    }

    /// Prepare the plotter for a vischar. Returns false when offscreen.
    pub(crate) fn setup_vischar_plotting(&mut self, slot: usize) -> bool {
        let vischar = &self.vischars[slot];
        let def = &SPRITES[(vischar.mi.sprite_base as usize
            + (vischar.mi.sprite_index & !SPRITE_FLIP) as usize)
            .min(SPRITES.len() - 1)];

        // Refresh the cached dimensions.
        let width = def.width;
        let height = def.height;
        self.vischars[slot].width = width;
        self.vischars[slot].height = height;

        // Stash positions for the mask selection.
        let vischar = &self.vischars[slot];
        self.mappos_stash = if vischar.room == rooms::OUTDOORS {
            scale_mappos_down(&vischar.mi.mappos)
        } else {
            MapPos8::new(
                vischar.mi.mappos.u as u8,
                vischar.mi.mappos.v as u8,
                vischar.mi.mappos.w as u8,
            )
        };
        self.isopos = Pos8::new((vischar.isopos.x / 8) as u8, (vischar.isopos.y / 8) as u8);
        self.sprite_index = vischar.mi.sprite_index;

        let Some((left_skip, clipped_width, top_skip, clipped_height)) =
            self.vischar_visible(slot)
        else {
            return false;
        };

        let vischar = &self.vischars[slot];
        let isopos = vischar.isopos;
        let sprite_index = vischar.mi.sprite_index;

        self.plotter.bitmap = def.bitmap;
        self.plotter.mask = def.mask;
        self.plotter.width_bytes = width;
        self.plotter.bitmap_offset = top_skip as usize * width as usize;
        self.plotter.mask_offset = top_skip as usize * width as usize;
        self.plotter.flip = sprite_index & SPRITE_FLIP != 0;
        self.plotter.x_shift = (isopos.x & 7) as u8;
        self.plotter.left_skip = left_skip;
        self.plotter.clipped_width = clipped_width;
        self.plotter.top_skip = top_skip;
        self.plotter.clipped_height = clipped_height;
        self.patch_enables(width + 1, left_skip, clipped_width);

        // Window cursor: first visible scanline, first visible column.
        let x = (isopos.x / 8) as i32 - self.map_position.x as i32;
        let y = isopos.y as i32 - self.map_position.y as i32 * 8;
        let start_row = (y + top_skip as i32) as usize;
        let start_col = (x + left_skip as i32) as usize;
        self.plotter.window_offset = start_row * self.columns + start_col;

        // Mask cursor: one four-byte row per pixel row.
        self.plotter.fg_mask_offset =
            (top_skip as usize + (isopos.y & 7) as usize) * MASK_BUFFER_WIDTHBYTES;

        true
    }

    /// Prepare the plotter for an item. Returns false when offscreen.
    pub(crate) fn setup_item_plotting(&mut self, item_index: usize) -> bool {
        let itemstr = self.item_structs[item_index];
        let item = itemstr.item_and_flags;
        let (bitmap, mask, height) = item_sprite(item);
        self.item_height = height;

        self.mappos_stash = itemstr.mappos;
        self.isopos = itemstr.isopos;
        self.sprite_index = 0;

        let Some((left_skip, clipped_width, top_skip, clipped_height)) =
            self.item_visible(itemstr.isopos)
        else {
            return false;
        };

        self.plotter.bitmap = bitmap;
        self.plotter.mask = mask;
        self.plotter.width_bytes = 2;
        self.plotter.bitmap_offset = top_skip as usize * 2;
        self.plotter.mask_offset = top_skip as usize * 2;
        self.plotter.flip = false;
        self.plotter.x_shift = 0;
        self.plotter.left_skip = left_skip;
        self.plotter.clipped_width = clipped_width;
        self.plotter.top_skip = top_skip;
        self.plotter.clipped_height = clipped_height;
        self.patch_enables(3, left_skip, clipped_width);

        let x = itemstr.isopos.x as i32 - self.map_position.x as i32;
        let y = (itemstr.isopos.y as i32 - self.map_position.y as i32) * 8;
        let start_row = (y + top_skip as i32) as usize;
        let start_col = (x + left_skip as i32) as usize;
        self.plotter.window_offset = start_row * self.columns + start_col;
        self.plotter.fg_mask_offset = top_skip as usize * MASK_BUFFER_WIDTHBYTES;

        true
    }

    /// Plot the prepared sprite into the window buffer.
    ///
    /// Every scanline: load, optionally mirror, shift into place, then
    /// combine with the screen under both masks.
    pub(crate) fn masked_sprite_plot(&mut self) {
        let p = self.plotter;
        let src_width = p.width_bytes as usize;
        let out_width = src_width + 1;

        let mut bitmap_offset = p.bitmap_offset;
        let mut mask_offset = p.mask_offset;
        let mut window_offset = p.window_offset;
        let mut fg_offset = p.fg_mask_offset;

        for _ in 0..p.clipped_height {
            let mut bitmap_row = [0u8; 3];
            let mut mask_row = [0xFFu8; 3];
            for byte in 0..src_width {
                bitmap_row[byte] = p.bitmap.get(bitmap_offset + byte).copied().unwrap_or(0);
                mask_row[byte] = p.mask.get(mask_offset + byte).copied().unwrap_or(0xFF);
            }

            if p.flip {
                // Swap byte order and reverse each byte's bits.
                let mut flipped_bitmap = [0u8; 3];
                let mut flipped_mask = [0xFFu8; 3];
                for byte in 0..src_width {
                    flipped_bitmap[byte] =
                        self.reversed[bitmap_row[src_width - 1 - byte] as usize];
                    flipped_mask[byte] =
                        self.reversed[mask_row[src_width - 1 - byte] as usize];
                }
                bitmap_row = flipped_bitmap;
                mask_row = flipped_mask;
            }

            // Shift right by the sub-cell offset: zeros feed the bitmap,
            // ones feed the mask.
            let mut shifted_bitmap = [0u8; 4];
            let mut shifted_mask = [0xFFu8; 4];
            let shift = p.x_shift as u32;
            if shift == 0 {
                shifted_bitmap[..src_width].copy_from_slice(&bitmap_row[..src_width]);
                shifted_bitmap[src_width] = 0;
                shifted_mask[..src_width].copy_from_slice(&mask_row[..src_width]);
                shifted_mask[src_width] = 0xFF;
            } else {
                let mut bitmap_carry = 0u8;
                let mut mask_carry = 0xFFu8 << (8 - shift); // ones shift in
                for byte in 0..out_width {
                    let (bitmap_in, mask_in) = if byte < src_width {
                        (bitmap_row[byte], mask_row[byte])
                    } else {
                        (0, 0xFF)
                    };
                    shifted_bitmap[byte] = (bitmap_in >> shift) | bitmap_carry;
                    shifted_mask[byte] = (mask_in >> shift) | mask_carry;
                    bitmap_carry = bitmap_in << (8 - shift);
                    mask_carry = mask_in << (8 - shift);
                }
            }

            // Combine with the window under the two masks.
            for byte in 0..out_width {
                if !p.enables[byte] {
                    continue;
                }
                let fg_index = fg_offset + byte;
                let fg = if fg_index < self.mask_buffer.len() {
                    self.mask_buffer[fg_index]
                } else {
                    0xFF
                };
                let out_index = window_offset + byte - p.left_skip as usize;
                if out_index >= self.window_buf.len() {
                    continue;
                }
                let screen = self.window_buf[out_index];
                self.window_buf[out_index] =
                    ((!fg | shifted_mask[byte]) & screen) | (shifted_bitmap[byte] & fg);
            }

            bitmap_offset += src_width;
            mask_offset += src_width;
            window_offset += self.columns;
            fg_offset += MASK_BUFFER_WIDTHBYTES;
        }
    }

    /// Z-sorted draw of every drawable vischar and nearby item into the
    /// window buffer, back to front.
    pub(crate) fn plot_sprites(&mut self) {
        loop {
            let mut best_depth: i32 = -1;
            let mut best_vischar: Option<usize> = None;
            let mut best_item: Option<usize> = None;

            for slot in 0..self.vischars.len() {
                let vischar = &self.vischars[slot];
                if vischar.is_empty() || vischar.counter_and_flags & CF_DRAWABLE == 0 {
                    continue;
                }
                let pos = &vischar.mi.mappos;
                let depth = pos.u as i32 + pos.v as i32 + pos.w as i32;
                if depth > best_depth {
                    best_depth = depth;
                    best_vischar = Some(slot);
                    best_item = None;
                }
            }

            let scale = if self.room_index == rooms::OUTDOORS { 8 } else { 1 };
            for index in 0..self.item_structs.len() {
                let itemstr = &self.item_structs[index];
                if itemstr.room_and_flags & ITEMSTRUCT_NEARBY_6 == 0 {
                    continue;
                }
                let pos = &itemstr.mappos;
                let depth =
                    (pos.u as i32 + pos.v as i32 + pos.w as i32) * scale;
                if depth > best_depth {
                    best_depth = depth;
                    best_item = Some(index);
                    best_vischar = None;
                }
            }

            if let Some(index) = best_item {
                self.item_structs[index].room_and_flags &= !ITEMSTRUCT_NEARBY_6;
                if self.setup_item_plotting(index) {
                    self.render_mask_buffer();
                    self.masked_sprite_plot();
                }
            } else if let Some(slot) = best_vischar {
                self.vischars[slot].counter_and_flags &= !CF_DRAWABLE;
                if self.setup_vischar_plotting(slot) {
                    self.render_mask_buffer();
                    self.searchlight_mask_test(slot);
                    self.masked_sprite_plot();
                }
            } else {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::vischar::HERO;
    use crate::math::MapPos8;
    use crate::test_common;

    fn prepare(game: &mut Game, iso_x_udg: i32) {
        test_common::place_hero_outdoors(game, MapPos8::new(80, 60, 0));
        // Force a specific window-relative x by moving the window.
        let hero_x = (game.vischars[HERO].isopos.x / 8) as i32;
        game.map_position.x = (hero_x - iso_x_udg).clamp(0, 192) as u8;
        let hero_y = (game.vischars[HERO].isopos.y / 8) as i32;
        game.map_position.y = (hero_y - 6).clamp(0, 124) as u8;
    }

    #[test]
    fn clipping_boundaries_for_a_16_wide_sprite() {
        let mut game = test_common::game();

        // Fully visible in the middle.
        prepare(&mut game, 10);
        let (left, width, _, _) = game.vischar_visible(HERO).expect("visible");
        assert_eq!((left, width), (0, 3));

        // Hard left edge.
        prepare(&mut game, 0);
        let (left, width, _, _) = game.vischar_visible(HERO).expect("visible");
        assert_eq!((left, width), (0, 3));

        // Clipped on the right edge.
        prepare(&mut game, 22);
        let (left, width, _, _) = game.vischar_visible(HERO).expect("visible");
        assert_eq!(left, 0);
        assert_eq!(width, 2);

        // Fully off the right.
        prepare(&mut game, 24);
        assert!(game.vischar_visible(HERO).is_none());
    }

    #[test]
    fn partial_left_clip_skips_columns() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 60, 0));
        let hero_x = (game.vischars[HERO].isopos.x / 8) as i32;
        // Window one column past the sprite's left byte.
        game.map_position.x = (hero_x + 1) as u8;
        let (left, width, _, _) = game.vischar_visible(HERO).expect("visible");
        assert_eq!(left, 1);
        assert_eq!(width, 2);
    }

    #[test]
    fn plot_writes_only_enabled_bytes() {
        let mut game = test_common::game();
        prepare(&mut game, 10);
        game.get_supertiles();
        game.plot_all_tiles();
        let before = game.window_buf.clone();

        assert!(game.setup_vischar_plotting(HERO));
        game.render_mask_buffer();
        game.masked_sprite_plot();

        // Something within the sprite's span changed...
        assert_ne!(&game.window_buf[..], &before[..]);
        // ...and nothing outside its rows did.
        let p = game.plotter;
        let first_touched = p.window_offset - (p.window_offset % game.columns);
        for offset in 0..first_touched.min(game.window_buf.len()) {
            assert_eq!(game.window_buf[offset], before[offset], "offset {offset}");
        }
    }

    #[test]
    fn flip_mirrors_the_output() {
        let mut game = test_common::game();
        prepare(&mut game, 10);
        game.setup_play_tables();
        game.get_supertiles();

        // Plot unflipped and flipped against a blank background and
        // compare their leftmost output columns.
        game.window_buf.fill(0);
        game.mask_buffer.fill(0xFF);
        assert!(game.setup_vischar_plotting(HERO));
        game.masked_sprite_plot();
        let unflipped = game.window_buf.clone();

        game.window_buf.fill(0);
        game.vischars[HERO].mi.sprite_index |= SPRITE_FLIP;
        assert!(game.setup_vischar_plotting(HERO));
        game.masked_sprite_plot();

        assert_ne!(&game.window_buf[..], &unflipped[..]);
    }

    #[test]
    fn items_plot_when_nearby() {
        let mut game = test_common::game();
        test_common::place_hero_in_room(&mut game, rooms::CRATE, MapPos8::new(40, 40, 24));
        game.window_buf.fill(0);
        game.calc_item_isopos(crate::game::item::Item::Shovel as usize);
        game.mark_nearby_items();
        assert!(
            game.item_structs[crate::game::item::Item::Shovel as usize].room_and_flags
                & ITEMSTRUCT_NEARBY_6
                != 0
        );

        game.plot_sprites();
        // The shovel's nearby flag is consumed by the draw.
        assert!(
            game.item_structs[crate::game::item::Item::Shovel as usize].room_and_flags
                & ITEMSTRUCT_NEARBY_6
                == 0
        );
    }
}
