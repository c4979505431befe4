//! Rendering: tile expansion, masked sprite plotting and the final blit
//! onto the virtual Spectrum's screen.

pub mod masks;
pub mod plotter;
pub mod screen;
pub mod tilemap;
pub mod zoombox;

/// An 8x8 pixel tile, one byte per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile(pub [u8; 8]);

/// A supertile: a 4x4 grid of tile indices.
#[derive(Debug, Clone, Copy)]
pub struct Supertile(pub [u8; 16]);
