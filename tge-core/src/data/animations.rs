//! Animation records and the animation selection table.
//!
//! An animation is a short list of per-frame movement deltas plus sprite
//! frames. Playing one in reverse mirrors the deltas and exchanges its
//! start/end directions, which is how characters crawl backwards along
//! straight tunnels without turning around.

use super::sprites::{
    SPRITE_CRAWL_BR_0, SPRITE_CRAWL_BR_1, SPRITE_CRAWL_TR_0, SPRITE_CRAWL_TR_1, SPRITE_FLIP,
    SPRITE_WALK_BR_0, SPRITE_WALK_BR_1, SPRITE_WALK_TR_0, SPRITE_WALK_TR_1,
};

/// One frame: movement deltas in fine units plus a sprite-set offset.
#[derive(Debug, Clone, Copy)]
pub struct AnimFrame {
    pub du: i8,
    pub dv: i8,
    pub dw: i8,
    pub sprite: u8,
}

/// A complete animation record.
#[derive(Debug, Clone, Copy)]
pub struct Anim {
    pub nframes: u8,
    pub from: u8,
    pub to: u8,
    /// Direction the map scrolls while this plays, or 255 for none.
    pub map_direction: u8,
    pub frames: &'static [AnimFrame],
}

pub const MAP_DIRECTION_NONE: u8 = 255;

const TL: u8 = 0;
const TR: u8 = 1;
const BR: u8 = 2;
const BL: u8 = 3;

const fn frame(du: i8, dv: i8, dw: i8, sprite: u8) -> AnimFrame {
    AnimFrame { du, dv, dw, sprite }
}

// Left-facing sprites are mirrored right-facing ones.
const W_TL0: u8 = SPRITE_WALK_TR_0 | SPRITE_FLIP;
const W_TL1: u8 = SPRITE_WALK_TR_1 | SPRITE_FLIP;
const W_BL0: u8 = SPRITE_WALK_BR_0 | SPRITE_FLIP;
const W_BL1: u8 = SPRITE_WALK_BR_1 | SPRITE_FLIP;
const C_TL0: u8 = SPRITE_CRAWL_TR_0 | SPRITE_FLIP;
const C_TL1: u8 = SPRITE_CRAWL_TR_1 | SPRITE_FLIP;
const C_BL0: u8 = SPRITE_CRAWL_BR_0 | SPRITE_FLIP;
const C_BL1: u8 = SPRITE_CRAWL_BR_1 | SPRITE_FLIP;

static STAND_TL: [AnimFrame; 1] = [frame(0, 0, 0, W_TL0)];
static STAND_TR: [AnimFrame; 1] = [frame(0, 0, 0, SPRITE_WALK_TR_0)];
static STAND_BR: [AnimFrame; 1] = [frame(0, 0, 0, SPRITE_WALK_BR_0)];
static STAND_BL: [AnimFrame; 1] = [frame(0, 0, 0, W_BL0)];

static WALK_TL: [AnimFrame; 4] = [
    frame(2, 0, 0, W_TL0),
    frame(2, 0, 0, W_TL1),
    frame(2, 0, 0, W_TL0),
    frame(2, 0, 0, W_TL1),
];
static WALK_TR: [AnimFrame; 4] = [
    frame(0, 2, 0, SPRITE_WALK_TR_0),
    frame(0, 2, 0, SPRITE_WALK_TR_1),
    frame(0, 2, 0, SPRITE_WALK_TR_0),
    frame(0, 2, 0, SPRITE_WALK_TR_1),
];
static WALK_BR: [AnimFrame; 4] = [
    frame(-2, 0, 0, SPRITE_WALK_BR_0),
    frame(-2, 0, 0, SPRITE_WALK_BR_1),
    frame(-2, 0, 0, SPRITE_WALK_BR_0),
    frame(-2, 0, 0, SPRITE_WALK_BR_1),
];
static WALK_BL: [AnimFrame; 4] = [
    frame(0, -2, 0, W_BL0),
    frame(0, -2, 0, W_BL1),
    frame(0, -2, 0, W_BL0),
    frame(0, -2, 0, W_BL1),
];

static CRAWL_STAND_TL: [AnimFrame; 1] = [frame(0, 0, 0, C_TL0)];
static CRAWL_STAND_TR: [AnimFrame; 1] = [frame(0, 0, 0, SPRITE_CRAWL_TR_0)];
static CRAWL_STAND_BR: [AnimFrame; 1] = [frame(0, 0, 0, SPRITE_CRAWL_BR_0)];
static CRAWL_STAND_BL: [AnimFrame; 1] = [frame(0, 0, 0, C_BL0)];

static CRAWL_TL: [AnimFrame; 2] = [frame(1, 0, 0, C_TL0), frame(1, 0, 0, C_TL1)];
static CRAWL_TR: [AnimFrame; 2] = [
    frame(0, 1, 0, SPRITE_CRAWL_TR_0),
    frame(0, 1, 0, SPRITE_CRAWL_TR_1),
];
static CRAWL_BR: [AnimFrame; 2] = [
    frame(-1, 0, 0, SPRITE_CRAWL_BR_0),
    frame(-1, 0, 0, SPRITE_CRAWL_BR_1),
];
static CRAWL_BL: [AnimFrame; 2] = [frame(0, -1, 0, C_BL0), frame(0, -1, 0, C_BL1)];

static TURN_TL_TR: [AnimFrame; 2] = [frame(0, 0, 0, W_TL0), frame(0, 0, 0, SPRITE_WALK_TR_0)];
static TURN_TR_BR: [AnimFrame; 2] = [
    frame(0, 0, 0, SPRITE_WALK_TR_0),
    frame(0, 0, 0, SPRITE_WALK_BR_0),
];
static TURN_BR_BL: [AnimFrame; 2] = [frame(0, 0, 0, SPRITE_WALK_BR_0), frame(0, 0, 0, W_BL0)];
static TURN_BL_TL: [AnimFrame; 2] = [frame(0, 0, 0, W_BL0), frame(0, 0, 0, W_TL0)];

static TURN_TL_BL: [AnimFrame; 2] = [frame(0, 0, 0, W_TL0), frame(0, 0, 0, W_BL0)];
static TURN_TR_TL: [AnimFrame; 2] = [frame(0, 0, 0, SPRITE_WALK_TR_0), frame(0, 0, 0, W_TL0)];
static TURN_BR_TR: [AnimFrame; 2] = [
    frame(0, 0, 0, SPRITE_WALK_BR_0),
    frame(0, 0, 0, SPRITE_WALK_TR_0),
];
static TURN_BL_BR: [AnimFrame; 2] = [frame(0, 0, 0, W_BL0), frame(0, 0, 0, SPRITE_WALK_BR_0)];

const fn anim(from: u8, to: u8, map_direction: u8, frames: &'static [AnimFrame]) -> Anim {
    Anim { nframes: frames.len() as u8, from, to, map_direction, frames }
}

/// All 24 animations.
///
/// 0..=3 stand, 4..=7 walk, 8..=11 crawl-stand, 12..=15 crawl,
/// 16..=19 turn clockwise, 20..=23 turn anti-clockwise; each block is
/// indexed by facing.
pub static ANIMATIONS: [Anim; 24] = [
    anim(TL, TL, MAP_DIRECTION_NONE, &STAND_TL),
    anim(TR, TR, MAP_DIRECTION_NONE, &STAND_TR),
    anim(BR, BR, MAP_DIRECTION_NONE, &STAND_BR),
    anim(BL, BL, MAP_DIRECTION_NONE, &STAND_BL),
    anim(TL, TL, TL, &WALK_TL),
    anim(TR, TR, TR, &WALK_TR),
    anim(BR, BR, BR, &WALK_BR),
    anim(BL, BL, BL, &WALK_BL),
    anim(TL, TL, MAP_DIRECTION_NONE, &CRAWL_STAND_TL),
    anim(TR, TR, MAP_DIRECTION_NONE, &CRAWL_STAND_TR),
    anim(BR, BR, MAP_DIRECTION_NONE, &CRAWL_STAND_BR),
    anim(BL, BL, MAP_DIRECTION_NONE, &CRAWL_STAND_BL),
    anim(TL, TL, TL, &CRAWL_TL),
    anim(TR, TR, TR, &CRAWL_TR),
    anim(BR, BR, BR, &CRAWL_BR),
    anim(BL, BL, BL, &CRAWL_BL),
    anim(TL, TR, MAP_DIRECTION_NONE, &TURN_TL_TR),
    anim(TR, BR, MAP_DIRECTION_NONE, &TURN_TR_BR),
    anim(BR, BL, MAP_DIRECTION_NONE, &TURN_BR_BL),
    anim(BL, TL, MAP_DIRECTION_NONE, &TURN_BL_TL),
    anim(TL, BL, MAP_DIRECTION_NONE, &TURN_TL_BL),
    anim(TR, TL, MAP_DIRECTION_NONE, &TURN_TR_TL),
    anim(BR, TR, MAP_DIRECTION_NONE, &TURN_BR_TR),
    anim(BL, BR, MAP_DIRECTION_NONE, &TURN_BL_BR),
];

/// Reverse-play flag carried in a selection entry and in a vischar's
/// animation frame index.
pub const ANIM_REVERSE: u8 = 1 << 7;

/// Animation selection: `ANIMINDICES[facing + crawl][input index]` yields
/// an animation index plus an optional [`ANIM_REVERSE`] bit.
///
/// Rows 0..=3 are the walking facings, 4..=7 the crawling ones. Columns
/// follow the input encoding: none, up, down, left, up+left, down+left,
/// right, up+right, down+right.
pub static ANIMINDICES: [[u8; 9]; 8] = [
    [0, 4, 6, 20, 4, 20, 16, 16, 6],
    [1, 21, 17, 7, 21, 7, 5, 5, 17],
    [2, 4, 6, 18, 4, 18, 22, 22, 6],
    [3, 19, 23, 7, 19, 7, 5, 5, 23],
    [8, 12, 0x8C, 8, 12, 8, 8, 8, 0x8C],
    [9, 9, 9, 0x8D, 9, 0x8D, 13, 13, 9],
    [10, 0x8E, 14, 10, 0x8E, 10, 10, 10, 14],
    [11, 11, 11, 15, 11, 15, 0x8F, 0x8F, 11],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counts_match_slices() {
        for a in ANIMATIONS.iter() {
            assert_eq!(a.nframes as usize, a.frames.len());
            assert!(a.nframes > 0);
        }
    }

    #[test]
    fn selection_entries_reference_real_animations() {
        for row in ANIMINDICES.iter() {
            for &entry in row.iter() {
                assert!(((entry & !ANIM_REVERSE) as usize) < ANIMATIONS.len());
            }
        }
    }

    #[test]
    fn walk_animations_keep_their_facing() {
        for facing in 0..4u8 {
            let a = &ANIMATIONS[4 + facing as usize];
            assert_eq!(a.from, facing);
            assert_eq!(a.to, facing);
            assert_eq!(a.map_direction, facing);
        }
    }

    #[test]
    fn turn_animations_rotate_one_step() {
        for facing in 0..4u8 {
            let cw = &ANIMATIONS[16 + facing as usize];
            assert_eq!(cw.from, facing);
            assert_eq!(cw.to, (facing + 1) & 3);
            let ccw = &ANIMATIONS[20 + facing as usize];
            assert_eq!(ccw.from, facing);
            assert_eq!(ccw.to, (facing + 3) & 3);
        }
    }
}
