//! Static data tables.
//!
//! The engine treats everything in here as ROM. Tables whose bytes survive
//! in reference material are carried verbatim (mask strips and bounds, item
//! bitmaps, the font, screen offsets, default state); the pure artwork
//! banks are deterministic generated patterns of the correct shape.

pub mod animations;
pub mod defaults;
pub mod doors;
pub mod font;
pub mod item_bitmaps;
pub mod mask_strips;
pub mod masks;
pub mod rooms;
pub mod routes;
pub mod screen_offsets;
pub mod sprites;
pub mod tiles;
pub mod walls;

use crate::math::MapPos8;

/// An axis-aligned bounding box in iso (projected) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x0: u8,
    pub x1: u8,
    pub y0: u8,
    pub y1: u8,
}

impl Bounds {
    pub const fn new(x0: u8, x1: u8, y0: u8, y1: u8) -> Self {
        Bounds { x0, x1, y0, y1 }
    }
}

/// Placement of one mask strip: which strip, where it bites on screen and
/// the map position deciding whether it covers a given sprite.
#[derive(Debug, Clone, Copy)]
pub struct MaskDef {
    pub index: u8,
    pub bounds: Bounds,
    pub mappos: MapPos8,
}

impl MaskDef {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(index: u8, x0: u8, x1: u8, y0: u8, y1: u8, u: u8, v: u8, w: u8) -> Self {
        MaskDef {
            index,
            bounds: Bounds::new(x0, x1, y0, y1),
            mappos: MapPos8::new(u, v, w),
        }
    }
}
