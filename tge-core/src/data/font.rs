//! Bitmap font used by the status bar and messages.

use crate::graphics::Tile;

pub static BITMAP_FONT: [Tile; 38] = [
    Tile([0x00, 0x7c, 0xfe, 0xee, 0xee, 0xee, 0xfe, 0x7c]),
    Tile([0x00, 0x1e, 0x3e, 0x6e, 0x0e, 0x0e, 0x0e, 0x0e]),
    Tile([0x00, 0x7c, 0xfe, 0xce, 0x1c, 0x70, 0xfe, 0xfe]),
    Tile([0x00, 0xfc, 0xfe, 0x0e, 0x3c, 0x0e, 0xfe, 0xfc]),
    Tile([0x00, 0x0e, 0x1e, 0x3e, 0x6e, 0xfe, 0x0e, 0x0e]),
    Tile([0x00, 0xfc, 0xc0, 0xfc, 0x7e, 0x0e, 0xfe, 0xfc]),
    Tile([0x00, 0x38, 0x60, 0xfc, 0xfe, 0xc6, 0xfe, 0x7c]),
    Tile([0x00, 0xfe, 0x0e, 0x0e, 0x1c, 0x1c, 0x38, 0x38]),
    Tile([0x00, 0x7c, 0xee, 0xee, 0x7c, 0xee, 0xee, 0x7c]),
    Tile([0x00, 0x7c, 0xfe, 0xc6, 0xfe, 0x7e, 0x0c, 0x38]),
    Tile([0x00, 0x38, 0x7c, 0x7c, 0xee, 0xee, 0xfe, 0xee]),
    Tile([0x00, 0xfc, 0xee, 0xee, 0xfc, 0xee, 0xee, 0xfc]),
    Tile([0x00, 0x1e, 0x7e, 0xfe, 0xf0, 0xfe, 0x7e, 0x1e]),
    Tile([0x00, 0xf0, 0xfc, 0xee, 0xee, 0xee, 0xfc, 0xf0]),
    Tile([0x00, 0xfe, 0xfe, 0xe0, 0xfe, 0xe0, 0xfe, 0xfe]),
    Tile([0x00, 0xfe, 0xfe, 0xe0, 0xfc, 0xe0, 0xe0, 0xe0]),
    Tile([0x00, 0x1e, 0x7e, 0xf0, 0xee, 0xf2, 0x7e, 0x1e]),
    Tile([0x00, 0xee, 0xee, 0xee, 0xfe, 0xee, 0xee, 0xee]),
    Tile([0x00, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38]),
    Tile([0x00, 0xfe, 0x38, 0x38, 0x38, 0x38, 0xf8, 0xf0]),
    Tile([0x00, 0xee, 0xee, 0xfc, 0xf8, 0xfc, 0xee, 0xee]),
    Tile([0x00, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0, 0xfe, 0xfe]),
    Tile([0x00, 0x6c, 0xfe, 0xfe, 0xd6, 0xd6, 0xc6, 0xc6]),
    Tile([0x00, 0xe6, 0xf6, 0xfe, 0xfe, 0xee, 0xe6, 0xe6]),
    Tile([0x00, 0xfc, 0xee, 0xee, 0xee, 0xfc, 0xe0, 0xe0]),
    Tile([0x00, 0x7c, 0xfe, 0xee, 0xee, 0xee, 0xfc, 0x7e]),
    Tile([0x00, 0xfc, 0xee, 0xee, 0xfc, 0xf8, 0xec, 0xee]),
    Tile([0x00, 0x7e, 0xfe, 0xf0, 0x7c, 0x1e, 0xfe, 0xfc]),
    Tile([0x00, 0xfe, 0xfe, 0x38, 0x38, 0x38, 0x38, 0x38]),
    Tile([0x00, 0xee, 0xee, 0xee, 0xee, 0xee, 0xfe, 0x7c]),
    Tile([0x00, 0xee, 0xee, 0xee, 0xee, 0x6c, 0x7c, 0x38]),
    Tile([0x00, 0xc6, 0xc6, 0xc6, 0xd6, 0xfe, 0xee, 0xc6]),
    Tile([0x00, 0xc6, 0xee, 0x7c, 0x38, 0x7c, 0xee, 0xc6]),
    Tile([0x00, 0xc6, 0xee, 0x7c, 0x38, 0x38, 0x38, 0x38]),
    Tile([0x00, 0xfe, 0xfe, 0x0e, 0x38, 0xe0, 0xfe, 0xfe]),
    Tile([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    Tile([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30]),
    Tile([0x55, 0xaa, 0x55, 0xaa, 0x55, 0xaa, 0x55, 0xaa]),
];

pub static ASCII_TO_FONT: [u8; 256] = [
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x23, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x24, 0x25,
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x00,
    0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, 0x20, 0x21, 0x22, 0x23, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
    0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25, 0x25,
];

