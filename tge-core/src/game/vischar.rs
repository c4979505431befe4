//! Visible characters: the eight on-screen slots, their animation
//! advance, movement commit and collision handling.

use crate::data::animations::{ANIM_REVERSE, ANIMATIONS, ANIMINDICES, Anim};
use crate::data::sprites::{SPRITE_FLIP, SPRITE_PRISONER};
use crate::data::walls::WALLS;
use crate::game::context::Game;
use crate::game::route::Route;
use crate::game::{Flow, Input, characters, rooms};
use crate::math::{self, DIRECTION_CRAWL, Direction, MapPos8, MapPos16, Pos16};

/// Slot index of the hero.
pub const HERO: usize = 0;

/// `flags` values and bits.
pub const FLAGS_EMPTY_SLOT: u8 = 0xFF;
pub const FLAGS_PURSUIT_MASK: u8 = 0x3F;
pub const PURSUIT_PURSUE: u8 = 1;
pub const PURSUIT_HASSLE: u8 = 2;
pub const PURSUIT_DOG_FOOD: u8 = 3;
pub const PURSUIT_SAW_BRIBE: u8 = 4;
pub const FLAGS_TARGET_IS_DOOR: u8 = 1 << 6;

/// `counter_and_flags` bits: a small delay counter plus four state bits.
pub const CF_COUNTER_MASK: u8 = 0x0F;
pub const CF_V_DOMINANT: u8 = 1 << 4;
pub const CF_NO_COLLIDE: u8 = 1 << 5;
pub const CF_DONT_MOVE_MAP: u8 = 1 << 6;
pub const CF_DRAWABLE: u8 = 1 << 7;

/// Reverse-play bit of `animindex`.
pub const ANIMINDEX_REVERSE: u8 = 1 << 7;

/// A movable on-screen object: position plus sprite selection.
#[derive(Debug, Clone, Copy)]
pub struct MovableItem {
    pub mappos: MapPos16,
    /// Base index into the sprite table for this figure's set.
    pub sprite_base: u8,
    /// Frame offset within the set, bit 7 flipping left/right.
    pub sprite_index: u8,
}

impl Default for MovableItem {
    fn default() -> Self {
        MovableItem {
            mappos: MapPos16::default(),
            sprite_base: SPRITE_PRISONER,
            sprite_index: 0,
        }
    }
}

/// One visible character slot.
#[derive(Debug, Clone, Copy)]
pub struct Vischar {
    pub character: u8,
    pub flags: u8,
    pub route: Route,
    pub target: MapPos8,
    pub counter_and_flags: u8,
    pub animbase: &'static [Anim],
    /// Index into `animbase`.
    pub anim: u8,
    /// Frame cursor, bit 7 set when playing in reverse.
    pub animindex: u8,
    /// Pending input bits, including the KICK latch.
    pub input: u8,
    /// Facing direction plus the crawl flag.
    pub direction: u8,
    pub mi: MovableItem,
    /// Projected screen position in pixels.
    pub isopos: Pos16,
    pub room: u8,
    /// Current bitmap width in bytes and height in rows.
    pub width: u8,
    pub height: u8,
}

impl Default for Vischar {
    fn default() -> Self {
        Vischar {
            character: characters::NONE,
            flags: FLAGS_EMPTY_SLOT,
            route: Route::default(),
            target: MapPos8::default(),
            counter_and_flags: 0,
            animbase: &ANIMATIONS,
            anim: 0,
            animindex: 0,
            input: 0,
            direction: Direction::BottomLeft as u8,
            mi: MovableItem::default(),
            isopos: Pos16::default(),
            room: rooms::NONE,
            width: 2,
            height: 27,
        }
    }
}

impl Vischar {
    pub fn is_empty(&self) -> bool {
        self.flags == FLAGS_EMPTY_SLOT
    }

    pub fn pursuit(&self) -> u8 {
        self.flags & FLAGS_PURSUIT_MASK
    }

    pub fn crawling(&self) -> bool {
        self.direction & DIRECTION_CRAWL != 0
    }

    pub fn facing(&self) -> Direction {
        Direction::from_byte(self.direction)
    }

    pub fn current_anim(&self) -> &'static Anim {
        &self.animbase[(self.anim & !ANIM_REVERSE) as usize]
    }
}

/// Input that turns a character one step anti-clockwise, by facing.
static TURN_ANTICLOCKWISE_INPUT: [Input; 4] =
    [Input::LEFT, Input::UP, Input::RIGHT, Input::DOWN];

impl Game {
    /// Advance every occupied vischar one animation frame, committing the
    /// movement only when collision and bounds tests allow.
    pub(crate) fn animate(&mut self) -> Flow {
        for index in 0..self.vischars.len() {
            if self.vischars[index].is_empty() {
                continue;
            }
            self.current_vischar = index;
            self.vischars[index].counter_and_flags |= CF_NO_COLLIDE;
            let result = self.animate_one(index);
            self.vischars[index].counter_and_flags &= !CF_NO_COLLIDE;
            result?;
        }
        Ok(())
    }

    fn animate_one(&mut self, index: usize) -> Flow {
        // Movable objects don't animate; they only get shoved around.
        let character = self.vischars[index].character;
        if (characters::STOVE_1..=characters::STOVE_2).contains(&character) {
            let pos = self.vischars[index].mi.mappos;
            self.saved_mappos = crate::game::context::SavedMappos { u: pos.u, v: pos.v, w: pos.w };
            let sprite = self.vischars[index].mi.sprite_index;
            return self.touch(index, sprite);
        }

        // Frozen characters sit their delay out but stay drawable.
        if self.vischars[index].counter_and_flags & CF_COUNTER_MASK != 0 {
            self.vischars[index].counter_and_flags -= 1;
            let pos = self.vischars[index].mi.mappos;
            self.saved_mappos = crate::game::context::SavedMappos { u: pos.u, v: pos.v, w: pos.w };
            let sprite = self.vischars[index].mi.sprite_index;
            return self.touch(index, sprite);
        }

        loop {
            let vischar = &self.vischars[index];
            if vischar.input & Input::KICK.bits() != 0 {
                // Pick a fresh animation for the latched input.
                let crawl = usize::from(vischar.crawling());
                let row = (vischar.direction & 3) as usize + crawl * 4;
                let col = Input::from_bits_truncate(vischar.input).direction_index();
                let entry = ANIMINDICES[row][col];

                let vischar = &mut self.vischars[index];
                vischar.anim = entry & !ANIM_REVERSE;
                vischar.input &= !Input::KICK.bits();
                let anim = vischar.current_anim();
                let crawl_bit = vischar.direction & DIRECTION_CRAWL;
                if entry & ANIM_REVERSE != 0 {
                    vischar.animindex = (anim.nframes - 1) | ANIMINDEX_REVERSE;
                    // Reverse play exchanges the start and end facings.
                    vischar.direction = anim.to | crawl_bit;
                } else {
                    vischar.animindex = 0;
                    vischar.direction = anim.from | crawl_bit;
                }
                break;
            }

            // Advance the current animation one frame.
            let anim = vischar.current_anim();
            let reverse = vischar.animindex & ANIMINDEX_REVERSE != 0;
            let cursor = vischar.animindex & !ANIMINDEX_REVERSE;
            let ended = if reverse { cursor == 0 } else { cursor + 1 >= anim.nframes };
            if ended {
                // Finish the animation: adopt its end facing and ask for a
                // fresh pick next time round the loop.
                let end_facing = if reverse { anim.from } else { anim.to };
                let vischar = &mut self.vischars[index];
                let crawl_bit = vischar.direction & DIRECTION_CRAWL;
                vischar.direction = end_facing | crawl_bit;
                vischar.input |= Input::KICK.bits();
                continue;
            }
            let vischar = &mut self.vischars[index];
            vischar.animindex = if reverse {
                (cursor - 1) | ANIMINDEX_REVERSE
            } else {
                cursor + 1
            };
            break;
        }

        // Apply the current frame's movement deltas.
        let vischar = &self.vischars[index];
        let anim = vischar.current_anim();
        let reverse = vischar.animindex & ANIMINDEX_REVERSE != 0;
        let cursor = (vischar.animindex & !ANIMINDEX_REVERSE) as usize;
        let frame = &anim.frames[cursor.min(anim.frames.len() - 1)];
        let (du, dv, dw) = if reverse {
            (-(frame.du as i32), -(frame.dv as i32), -(frame.dw as i32))
        } else {
            (frame.du as i32, frame.dv as i32, frame.dw as i32)
        };
        let mut sprite = frame.sprite;
        if reverse {
            // Mirrored play also mirrors the sprite's facing.
            sprite ^= SPRITE_FLIP;
        }

        let pos = vischar.mi.mappos;
        self.saved_mappos = crate::game::context::SavedMappos {
            u: (pos.u as i32 + du).clamp(0, u16::MAX as i32) as u16,
            v: (pos.v as i32 + dv).clamp(0, u16::MAX as i32) as u16,
            w: (pos.w as i32 + dw).clamp(0, u16::MAX as i32) as u16,
        };

        self.touch(index, sprite)
    }

    /// Validate and commit a candidate move held in `saved_mappos`.
    ///
    /// Marks the vischar drawable either way. Door handling for the hero
    /// can commit a room transition and exit the tick.
    pub(crate) fn touch(&mut self, index: usize, sprite: u8) -> Flow {
        self.vischars[index].counter_and_flags |= CF_DRAWABLE;
        self.vischars[index].counter_and_flags &= !CF_DONT_MOVE_MAP;

        // Doors first: stepping into one commits a transition and leaves
        // the tick entirely.
        if index == HERO {
            if self.vischars[index].room == rooms::OUTDOORS {
                self.door_handling_exterior(index)?;
            } else {
                self.door_handling_interior(index)?;
            }
        }

        let blocked = if self.vischars[index].room == rooms::OUTDOORS {
            self.bounds_check(index)
        } else {
            self.interior_bounds_check(index)
        };
        if blocked {
            // Try the other axis next frame: this is what makes
            // characters slide along walls.
            let vischar = &mut self.vischars[index];
            vischar.counter_and_flags ^= CF_V_DOMINANT;
            vischar.counter_and_flags |= CF_DONT_MOVE_MAP;
            vischar.input |= Input::KICK.bits();
            return Ok(());
        }

        if self.collision(index)? {
            self.vischars[index].counter_and_flags |= CF_DONT_MOVE_MAP;
            return Ok(());
        }

        // Commit.
        let saved = self.saved_mappos;
        let vischar = &mut self.vischars[index];
        vischar.mi.mappos = MapPos16 { u: saved.u, v: saved.v, w: saved.w };
        vischar.mi.sprite_index = sprite;
        self.calc_vischar_isopos(index);
        Ok(())
    }

    /// Test the candidate position against every other vischar.
    ///
    /// Returns true when the move is blocked. Touching the hero while in
    /// pursuit ends in a bribe or in solitary.
    pub(crate) fn collision(&mut self, index: usize) -> Result<bool, crate::game::Exit> {
        let candidate = self.saved_mappos;

        for other_index in 0..self.vischars.len() {
            if other_index == index {
                continue;
            }
            let other = &self.vischars[other_index];
            if other.is_empty() || other.counter_and_flags & CF_NO_COLLIDE != 0 {
                continue;
            }

            let du = (other.mi.mappos.u as i32 - candidate.u as i32).abs();
            let dv = (other.mi.mappos.v as i32 - candidate.v as i32).abs();
            let dw = (other.mi.mappos.w as i32 - candidate.w as i32).abs();
            if du >= 8 || dv >= 8 || dw >= 24 {
                continue;
            }

            // Hostiles in pursuit catching the hero.
            let this_char = self.vischars[index].character;
            if other_index == HERO && self.vischars[index].pursuit() == PURSUIT_PURSUE {
                if this_char == self.bribed_character {
                    self.accept_bribe(index);
                } else {
                    self.solitary()?;
                }
                return Ok(true);
            }

            let other_char = other.character;
            if other_char >= characters::STOVE_1 && other_char <= characters::STOVE_2 {
                self.push_movable_object(index, other_index);
                return Ok(true);
            }

            // Bumped into someone: turn anti-clockwise and freeze briefly.
            let facing = self.vischars[index].facing();
            let vischar = &mut self.vischars[index];
            vischar.input =
                (TURN_ANTICLOCKWISE_INPUT[facing as usize] | Input::KICK).bits();
            vischar.counter_and_flags =
                (vischar.counter_and_flags & !CF_COUNTER_MASK) | 5;
            return Ok(true);
        }
        Ok(false)
    }

    /// Shove a stove or crate along its constrained axis.
    ///
    /// Stoves slide on v around centre 35, the crate on u around centre
    /// 54, each within plus or minus seven units. Pushing while facing
    /// bottom-right snaps the object to the low end of its range.
    fn push_movable_object(&mut self, index: usize, object_index: usize) {
        const RANGE: u16 = 7;
        let object_char = self.vischars[object_index].character;
        let on_u_axis = object_char == characters::CRATE;
        let centre: u16 = if on_u_axis { 54 } else { 35 };
        let facing = self.vischars[index].facing();

        let mappos = &mut self.vischars[object_index].mi.mappos;
        let coord = if on_u_axis { &mut mappos.u } else { &mut mappos.v };
        match facing {
            Direction::TopLeft if on_u_axis => *coord = (*coord + 1).min(centre + RANGE),
            Direction::TopRight if !on_u_axis => *coord = (*coord + 1).min(centre + RANGE),
            Direction::BottomLeft if !on_u_axis => {
                *coord = coord.saturating_sub(1).max(centre - RANGE)
            }
            Direction::BottomRight => *coord = centre - RANGE,
            _ => {}
        }

        // Mirror into the persistent movable item slot.
        let slot = (object_char - characters::STOVE_1) as usize;
        self.movable_items[slot].mappos = self.vischars[object_index].mi.mappos;
        self.calc_vischar_isopos(object_index);
    }

    /// Outdoor wall and fence test of the candidate position.
    fn bounds_check(&mut self, _index: usize) -> bool {
        let u = (self.saved_mappos.u >> 3) as u8;
        let v = (self.saved_mappos.v >> 3) as u8;
        let w = (self.saved_mappos.w >> 3) as u8;

        for wall in WALLS.iter() {
            if u >= wall.minx
                && u <= wall.maxx
                && v >= wall.miny
                && v <= wall.maxy
                && w >= wall.minheight
                && w <= wall.maxheight
            {
                return true;
            }
        }
        false
    }

    /// Room wall and object test of the candidate position.
    pub(crate) fn interior_bounds_check(&mut self, _index: usize) -> bool {
        let dims = crate::data::rooms::dimensions(self.roomdef_dimensions_index);
        let u = self.saved_mappos.u;
        let v = self.saved_mappos.v;
        if u < dims.umin as u16 || u > dims.umax as u16 || v < dims.vmin as u16 || v > dims.vmax as u16 {
            return true;
        }

        let count = self.roomdef_object_bounds_count as usize;
        for bounds in self.roomdef_object_bounds[..count].iter() {
            if u >= bounds.x0 as u16
                && u <= bounds.x1 as u16
                && v >= bounds.y0 as u16
                && v <= bounds.y1 as u16
            {
                return true;
            }
        }
        false
    }

    /// Refresh a vischar's projected screen position from its map position.
    pub(crate) fn calc_vischar_isopos(&mut self, index: usize) {
        let vischar = &mut self.vischars[index];
        vischar.isopos = math::project(&vischar.mi.mappos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_common;

    #[test]
    fn empty_slots_are_skipped() {
        let mut game = test_common::game();
        for vischar in game.vischars.iter_mut() {
            vischar.flags = FLAGS_EMPTY_SLOT;
        }
        assert!(game.animate().is_ok());
    }

    #[test]
    fn kick_selects_animation_for_input() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 90, 0));

        let hero = &mut game.vischars[HERO];
        hero.direction = Direction::TopLeft as u8;
        hero.input = (Input::UP | Input::KICK).bits();
        game.animate().unwrap();

        let hero = &game.vischars[HERO];
        // Facing top-left, pressing up: the walk-top-left animation.
        assert_eq!(hero.anim, 4);
        assert_eq!(hero.input & Input::KICK.bits(), 0);
    }

    #[test]
    fn walking_moves_along_the_facing_axis() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 90, 0));

        let before = game.vischars[HERO].mi.mappos;
        let hero = &mut game.vischars[HERO];
        hero.direction = Direction::TopLeft as u8;
        hero.input = (Input::UP | Input::KICK).bits();
        game.animate().unwrap();

        let after = game.vischars[HERO].mi.mappos;
        assert_eq!(after.u, before.u + 2);
        assert_eq!(after.v, before.v);
    }

    #[test]
    fn reverse_animation_mirrors_deltas() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 90, 0));
        // Put the hero in a tunnel crawl facing top-right, then push the
        // opposite way: the crawl plays in reverse, moving backwards.
        let hero = &mut game.vischars[HERO];
        hero.direction = Direction::TopRight as u8 | DIRECTION_CRAWL;
        hero.input = (Input::LEFT | Input::KICK).bits();

        let before = game.vischars[HERO].mi.mappos;
        game.animate().unwrap();
        let hero = &game.vischars[HERO];
        assert_eq!(hero.anim, 13); // crawl top-right...
        assert_ne!(hero.animindex & ANIMINDEX_REVERSE, 0); // ...played backwards
        assert!(game.vischars[HERO].mi.mappos.v < before.v);
    }

    #[test]
    fn collision_freezes_and_turns() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(80, 90, 0));
        let hero_pos = game.vischars[HERO].mi.mappos;

        // A guard right on top of the hero's next position.
        let guard = &mut game.vischars[1];
        guard.flags = 0;
        guard.character = characters::GUARD_1;
        guard.room = rooms::OUTDOORS;
        guard.mi.mappos = MapPos16::new(hero_pos.u + 2, hero_pos.v, hero_pos.w);
        guard.direction = Direction::TopLeft as u8;
        guard.input = 0;

        let hero = &mut game.vischars[HERO];
        hero.direction = Direction::TopLeft as u8;
        hero.input = (Input::UP | Input::KICK).bits();
        game.animate().unwrap();

        // Hero blocked: unmoved, frozen for five ticks, new turn queued.
        assert_eq!(game.vischars[HERO].mi.mappos, hero_pos);
        assert_eq!(game.vischars[HERO].counter_and_flags & CF_COUNTER_MASK, 5);
        assert_ne!(game.vischars[HERO].input & Input::KICK.bits(), 0);
    }

    #[test]
    fn wall_stops_the_hero() {
        let mut game = test_common::game();
        // Approaching the south face of the first hut: walking top-left
        // runs into it within a few frames.
        test_common::place_hero_outdoors(&mut game, MapPos8::new(101, 80, 0));
        for _ in 0..8 {
            let hero = &mut game.vischars[HERO];
            hero.direction = Direction::TopLeft as u8;
            hero.input = (Input::UP | Input::KICK).bits();
            game.animate().unwrap();
        }

        let hero = &game.vischars[HERO];
        // Never inside the hut footprint, and the last frame was blocked.
        assert!(hero.mi.mappos.u >> 3 < 102);
        assert_ne!(hero.counter_and_flags & CF_DONT_MOVE_MAP, 0);
    }
}
