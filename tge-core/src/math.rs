//! World coordinates and the isometric projection.
//!
//! Two spaces coexist. A *map position* is (u,v,w): u and v are the two
//! horizontal isometric axes, w is height. Characters and items store map
//! positions as bytes; a visible character in flight holds them in units
//! eight times finer as 16-bit values. An *iso position* is the projected
//! 2-D screen position in pixels.

use crate::common::divide_by_8_with_rounding;

/// A compact map position, one byte per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapPos8 {
    pub u: u8,
    pub v: u8,
    pub w: u8,
}

/// A map position in fine (1/8th) units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapPos16 {
    pub u: u16,
    pub v: u16,
    pub w: u16,
}

/// An unsigned 2-D position (UDG or map-offset units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pos8 {
    pub x: u8,
    pub y: u8,
}

/// A projected screen position in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pos16 {
    pub x: u16,
    pub y: u16,
}

impl MapPos8 {
    pub const fn new(u: u8, v: u8, w: u8) -> Self {
        MapPos8 { u, v, w }
    }

    /// Scale up into fine units.
    pub fn to_fine(self) -> MapPos16 {
        MapPos16 {
            u: self.u as u16 * 8,
            v: self.v as u16 * 8,
            w: self.w as u16 * 8,
        }
    }
}

impl MapPos16 {
    pub const fn new(u: u16, v: u16, w: u16) -> Self {
        MapPos16 { u, v, w }
    }
}

impl Pos8 {
    pub const fn new(x: u8, y: u8) -> Self {
        Pos8 { x, y }
    }
}

/// Project a fine map position to screen pixels.
pub fn project(mappos: &MapPos16) -> Pos16 {
    Pos16 {
        x: (0x0200u16.wrapping_sub(mappos.u).wrapping_add(mappos.v)).wrapping_mul(2),
        y: 0x0800u16
            .wrapping_sub(mappos.u)
            .wrapping_sub(mappos.v)
            .wrapping_sub(mappos.w),
    }
}

/// Project a byte map position to screen pixels. Used for items outdoors.
pub fn project_coarse(mappos: &MapPos8) -> Pos16 {
    Pos16 {
        x: (0x40u16.wrapping_sub(mappos.u as u16).wrapping_add(mappos.v as u16)).wrapping_mul(2),
        y: 0x100u16
            .wrapping_sub(mappos.u as u16)
            .wrapping_sub(mappos.v as u16)
            .wrapping_sub(mappos.w as u16),
    }
}

/// Reduce a fine map position to byte form, rounding each axis.
pub fn scale_mappos_down(mappos: &MapPos16) -> MapPos8 {
    MapPos8 {
        u: divide_by_8_with_rounding(mappos.u) as u8,
        v: divide_by_8_with_rounding(mappos.v) as u8,
        w: divide_by_8_with_rounding(mappos.w) as u8,
    }
}

/// The four isometric facing directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

/// Flag bit combined into a facing byte when the character is crawling.
pub const DIRECTION_CRAWL: u8 = 1 << 2;

impl Direction {
    pub fn from_byte(byte: u8) -> Direction {
        match byte & 0x03 {
            0 => Direction::TopLeft,
            1 => Direction::TopRight,
            2 => Direction::BottomRight,
            _ => Direction::BottomLeft,
        }
    }

    /// The opposite facing.
    pub fn reversed(self) -> Direction {
        Direction::from_byte(self as u8 ^ 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_formulas() {
        let p = project(&MapPos16::new(0, 0, 0));
        assert_eq!(p.x, 0x0400);
        assert_eq!(p.y, 0x0800);

        let p = project(&MapPos16::new(8, 8, 0));
        assert_eq!(p.x, 0x0400);
        assert_eq!(p.y, 0x07F0);
    }

    #[test]
    fn coarse_projection_matches_fine() {
        let coarse = MapPos8::new(64, 32, 2);
        let fine = coarse.to_fine();
        let a = project_coarse(&coarse);
        let b = project(&fine);
        // The fine projection is exactly eight times the coarse one.
        assert_eq!(a.x, b.x / 8);
        assert_eq!(a.y, b.y / 8);
    }

    #[test]
    fn scaling_rounds_to_nearest() {
        let fine = MapPos16::new(12, 11, 4);
        let coarse = scale_mappos_down(&fine);
        assert_eq!(coarse, MapPos8::new(2, 1, 1));
    }

    #[test]
    fn direction_reversal() {
        assert_eq!(Direction::TopLeft.reversed(), Direction::BottomRight);
        assert_eq!(Direction::TopRight.reversed(), Direction::BottomLeft);
    }
}
