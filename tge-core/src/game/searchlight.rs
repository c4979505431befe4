//! The three searchlights and the night-time display.

use crate::game::context::Game;
use crate::game::rooms;
use crate::game::vischar::HERO;
use crate::math::{Direction, Pos8};
use crate::spectrum::attribute;

/// Scanning for the hero.
pub const STATE_SEARCHING: u8 = 0xFF;
/// The hero is pinned in the beam.
pub const STATE_CAUGHT: u8 = 0x1F;

/// Reverse-playback bit of a movement script index.
pub const SEARCHLIGHT_REVERSE: u8 = 1 << 7;

/// One searchlight: its beam position, how far through its movement leg
/// it is, and where it is in its script.
#[derive(Debug, Clone, Copy)]
pub struct SearchlightMovement {
    /// Beam centre in map-window coordinates (UDG units).
    pub xy: Pos8,
    pub counter: u8,
    pub direction: Direction,
    /// Script step, with SEARCHLIGHT_REVERSE riding the top bit.
    pub index: u8,
    /// Which movement script this light follows.
    pub pattern: usize,
}

/// Movement scripts: (steps, direction) pairs, 255-terminated.
pub static SEARCHLIGHT_PATTERNS: [&[u8]; 3] = [
    &[32, Direction::BottomRight as u8, 32, Direction::TopRight as u8, 255],
    &[
        24, Direction::TopRight as u8,
        12, Direction::TopLeft as u8,
        24, Direction::BottomLeft as u8,
        12, Direction::TopLeft as u8,
        32, Direction::TopRight as u8,
        20, Direction::TopLeft as u8,
        32, Direction::BottomLeft as u8,
        44, Direction::BottomRight as u8,
        255,
    ],
    &[44, Direction::BottomRight as u8, 42, Direction::TopRight as u8, 255],
];

/// The 16x16 circle of light, one bit per pixel.
static SEARCHLIGHT_SHAPE: [u8; 32] = [
    0x07, 0xE0, 0x1F, 0xF8, 0x3F, 0xFC, 0x7F, 0xFE, 0x7F, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xFE, 0x7F, 0xFE, 0x3F, 0xFC, 0x1F, 0xF8,
    0x07, 0xE0,
];

impl Game {
    /// Night processing: move the lights, test for capture and repaint
    /// whatever the beams cover.
    pub(crate) fn nighttime(&mut self) {
        if self.room_index != rooms::OUTDOORS {
            return;
        }

        // A hero who slipped out of the beam fades the state back down
        // to searching.
        if self.searchlight_state != STATE_SEARCHING
            && self.searchlight_state != STATE_CAUGHT
        {
            self.searchlight_state = self.searchlight_state.wrapping_sub(1);
            if self.searchlight_state == 0 {
                self.searchlight_state = STATE_SEARCHING;
            }
        }

        for index in 0..self.searchlights.len() {
            let mut light = self.searchlights[index];
            Game::searchlight_movement(&mut light);
            self.searchlights[index] = light;
            self.searchlight_caught(index);

            if self.searchlight_visible(index) {
                self.searchlight_plot(index);
            }
        }
    }

    /// One step of a light's scripted sweep.
    pub(crate) fn searchlight_movement(light: &mut SearchlightMovement) {
        if light.counter > 0 {
            light.counter -= 1;
            // Two units along the major axis, one along the minor.
            let (dx, dy): (i16, i16) = match light.direction {
                Direction::TopLeft => (-2, -1),
                Direction::TopRight => (2, -1),
                Direction::BottomRight => (2, 1),
                Direction::BottomLeft => (-2, 1),
            };
            light.xy.x = (light.xy.x as i16 + dx).clamp(0, 255) as u8;
            light.xy.y = (light.xy.y as i16 + dy).clamp(0, 255) as u8;
            return;
        }

        let script = SEARCHLIGHT_PATTERNS[light.pattern];
        let reversed = light.index & SEARCHLIGHT_REVERSE != 0;
        let step = (light.index & !SEARCHLIGHT_REVERSE) as usize;

        if script[step * 2] == 255 || (reversed && step == 0 && light.counter == 0 && script[0] == 255)
        {
            // Unreachable guard for malformed scripts.
            light.index = 0;
            return;
        }

        light.counter = script[step * 2];
        let mut direction = Direction::from_byte(script[step * 2 + 1]);
        if reversed {
            direction = direction.reversed();
        }
        light.direction = direction;

        // Advance, reversing at either end of the script.
        if reversed {
            if step == 0 {
                light.index = 0; // forwards again
            } else {
                light.index = (step as u8 - 1) | SEARCHLIGHT_REVERSE;
            }
        } else {
            let next = step + 1;
            if script[next * 2] == 255 {
                light.index = (step as u8) | SEARCHLIGHT_REVERSE;
            } else {
                light.index = next as u8;
            }
        }
    }

    /// Does the light's 16x16 pool overlap the game window?
    fn searchlight_visible(&self, index: usize) -> bool {
        let light = &self.searchlights[index];
        let x = light.xy.x as i32;
        let y = light.xy.y as i32;
        let wx = self.map_position.x as i32;
        let wy = self.map_position.y as i32;
        x + 2 > wx && x < wx + self.columns as i32 && y + 2 > wy && y < wy + self.rows as i32
    }

    /// Catch the hero if the beam covers him.
    pub(crate) fn searchlight_caught(&mut self, index: usize) {
        let light = self.searchlights[index];
        let hero_x = (self.vischars[HERO].isopos.x / 8) as i32;
        let hero_y = (self.vischars[HERO].isopos.y / 8) as i32;
        let lx = light.xy.x as i32;
        let ly = light.xy.y as i32;

        let covered = (lx..lx + 2).contains(&hero_x) && (ly..ly + 2).contains(&hero_y);
        if covered {
            if self.searchlight_state != STATE_CAUGHT {
                debug!("searchlight {index} catches the hero");
            }
            self.searchlight_state = STATE_CAUGHT;
            self.bell = crate::game::alarm::BELL_PERPETUAL;
            // The drain is throttled: at most one hit per five ticks of
            // continuous contact.
            if self.searchlight_morale_cooldown == 0 {
                self.decrease_morale(10);
                self.searchlight_morale_cooldown = 5;
            } else {
                self.searchlight_morale_cooldown -= 1;
            }
        } else if self.searchlight_state == STATE_CAUGHT {
            // Just escaped the beam: begin the fade back to searching.
            self.searchlight_state = STATE_CAUGHT - 1;
            self.searchlight_morale_cooldown = 0;
        }
    }

    /// Paint the pool of light: the circle shape goes into the
    /// foreground mask so only lit areas stay visible, and the covered
    /// attribute cells switch to yellow over black.
    pub(crate) fn searchlight_plot(&mut self, index: usize) {
        let light = self.searchlights[index];
        let wx = light.xy.x as i32 - self.map_position.x as i32;
        let wy = light.xy.y as i32 - self.map_position.y as i32;

        for row in 0..2i32 {
            for col in 0..2i32 {
                let cx = wx + col;
                let cy = wy + row;
                // The window paints into screen columns 7.. and rows 2..
                if !(0..23).contains(&cx) || !(0..16).contains(&cy) {
                    continue;
                }
                let attr_index = (cy as usize + 2) * 32 + cx as usize + 7;
                let shape_byte =
                    SEARCHLIGHT_SHAPE[(row as usize * 8) * 2 + col as usize];
                let attrs = &mut self.speccy.screen().attributes;
                if attr_index < attrs.len() {
                    attrs[attr_index] = if shape_byte != 0 {
                        attribute::BRIGHT_YELLOW_OVER_BLACK
                    } else {
                        attribute::BRIGHT_BLUE_OVER_BLACK
                    };
                }
            }
        }

    }

    /// Restore visibility inside any beam covering the sprite whose
    /// mask is being built. The beam bytes land where the caught test
    /// samples them.
    pub(crate) fn searchlight_mask_feed(&mut self) {
        let iso_x = self.isopos.x as i32;
        let iso_y = self.isopos.y as i32;

        for index in 0..self.searchlights.len() {
            let light = self.searchlights[index];
            if (light.xy.x as i32 - iso_x).abs() > 2 || (light.xy.y as i32 - iso_y).abs() > 2 {
                continue;
            }
            for (offset, &byte) in SEARCHLIGHT_SHAPE.iter().enumerate() {
                let dst = 32 + 16 + 1 + (offset / 2) * 4 + (offset & 1);
                if dst < self.mask_buffer.len() {
                    self.mask_buffer[dst] |= byte;
                }
            }
        }
    }

    /// Sample the hero's foreground mask to decide whether he stands in
    /// a beam. Eight rows are probed at a stride of four.
    pub(crate) fn searchlight_mask_test(&mut self, vischar_index: usize) {
        if vischar_index != HERO || self.room_index != rooms::OUTDOORS || !self.day_or_night {
            return;
        }

        let mut lit = false;
        let mut offset = 32 + 16 + 1;
        for _ in 0..8 {
            if self.mask_buffer[offset] != 0 {
                lit = true;
            }
            offset += 4;
        }

        if lit && self.searchlight_state != STATE_CAUGHT {
            self.searchlight_state = STATE_CAUGHT;
            self.bell = crate::game::alarm::BELL_PERPETUAL;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::MapPos8;
    use crate::test_common;

    #[test]
    fn movement_follows_script_and_reverses() {
        let mut light = SearchlightMovement {
            xy: Pos8::new(36, 82),
            counter: 0,
            direction: Direction::BottomRight,
            index: 0,
            pattern: 0,
        };

        // First leg: 32 steps bottom-right.
        Game::searchlight_movement(&mut light);
        assert_eq!(light.counter, 32);
        assert_eq!(light.direction, Direction::BottomRight);

        // Drain both legs: the script then plays backwards.
        for _ in 0..200 {
            Game::searchlight_movement(&mut light);
        }
        assert_ne!(light.index & SEARCHLIGHT_REVERSE, 0);
    }

    #[test]
    fn caught_state_rings_the_bell_and_drains_morale() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 46, 0));
        let hero_x = (game.vischars[HERO].isopos.x / 8) as u8;
        let hero_y = (game.vischars[HERO].isopos.y / 8) as u8;
        game.searchlights[0].xy = Pos8::new(hero_x, hero_y);
        let morale_before = game.morale;

        game.searchlight_caught(0);

        assert_eq!(game.searchlight_state, STATE_CAUGHT);
        assert_eq!(game.bell, crate::game::alarm::BELL_PERPETUAL);
        assert_eq!(game.morale, morale_before - 10);
    }

    #[test]
    fn caught_morale_drain_is_throttled() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 46, 0));
        let hero_x = (game.vischars[HERO].isopos.x / 8) as u8;
        let hero_y = (game.vischars[HERO].isopos.y / 8) as u8;
        game.searchlights[0].xy = Pos8::new(hero_x, hero_y);
        let morale_before = game.morale;

        // Ten ticks pinned in the beam cost two hits, not ten.
        for _ in 0..10 {
            game.searchlight_caught(0);
        }
        assert_eq!(game.morale, morale_before - 20);
    }

    #[test]
    fn the_beam_recolours_the_cells_it_covers() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 46, 0));
        let wx = game.map_position.x;
        let wy = game.map_position.y;
        game.searchlights[0].xy = Pos8::new(wx + 5, wy + 5);

        game.searchlight_plot(0);

        let attrs = &game.speccy_mut().screen().attributes;
        assert_eq!(
            attrs[(5 + 2) * 32 + 5 + 7],
            crate::spectrum::attribute::BRIGHT_YELLOW_OVER_BLACK
        );
    }

    #[test]
    fn leaving_the_beam_decays_back_to_searching() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 46, 0));
        game.searchlight_state = STATE_CAUGHT;
        game.searchlights[0].xy = Pos8::new(0, 0); // far away
        game.searchlight_caught(0);
        assert_eq!(game.searchlight_state, STATE_CAUGHT - 1);

        game.room_index = rooms::OUTDOORS;
        game.searchlights[0].counter = 200; // keep it moving, far away
        for _ in 0..(STATE_CAUGHT - 1) {
            game.nighttime();
        }
        assert_eq!(game.searchlight_state, STATE_SEARCHING);
    }
}
