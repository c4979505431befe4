//! Run-length encoded mask strips.
//!
//! Each strip starts with its width in bytes. A top-bit-set byte is a
//! repeat count (low seven bits, plus one) applied to the following byte.

use super::MaskDef;

static EXTERIOR_MASK_0: [u8; 160] = [
    0x2a, 0xa0, 0x00, 0x05, 0x07, 0x08, 0x09, 0x01, 0x0a, 0xa2, 0x00, 0x05,
    0x06, 0x04, 0x85, 0x01, 0x0b, 0x9f, 0x00, 0x05, 0x06, 0x04, 0x88, 0x01,
    0x0c, 0x9c, 0x00, 0x05, 0x06, 0x04, 0x8a, 0x01, 0x0d, 0x0e, 0x99, 0x00,
    0x05, 0x06, 0x04, 0x8d, 0x01, 0x0f, 0x10, 0x96, 0x00, 0x05, 0x06, 0x04,
    0x90, 0x01, 0x11, 0x94, 0x00, 0x05, 0x06, 0x04, 0x92, 0x01, 0x12, 0x92,
    0x00, 0x05, 0x06, 0x04, 0x94, 0x01, 0x12, 0x90, 0x00, 0x05, 0x06, 0x04,
    0x96, 0x01, 0x12, 0x8e, 0x00, 0x05, 0x06, 0x04, 0x98, 0x01, 0x12, 0x8c,
    0x00, 0x05, 0x06, 0x04, 0x9a, 0x01, 0x12, 0x8a, 0x00, 0x05, 0x06, 0x04,
    0x9c, 0x01, 0x12, 0x88, 0x00, 0x05, 0x06, 0x04, 0x9e, 0x01, 0x18, 0x86,
    0x00, 0x05, 0x06, 0x04, 0xa1, 0x01, 0x84, 0x00, 0x05, 0x06, 0x04, 0xa3,
    0x01, 0x00, 0x00, 0x05, 0x06, 0x04, 0xa5, 0x01, 0x05, 0x03, 0x04, 0xa7,
    0x01, 0x02, 0xa9, 0x01, 0x02, 0xa9, 0x01, 0x02, 0xa9, 0x01, 0x02, 0xa9,
    0x01, 0x02, 0xa9, 0x01, 0x02, 0xa9, 0x01, 0x02, 0xa9, 0x01, 0x02, 0xa9,
    0x01, 0x02, 0xa9, 0x01,
];

static EXTERIOR_MASK_1: [u8; 31] = [
    0x12, 0x02, 0x91, 0x01, 0x02, 0x91, 0x01, 0x02, 0x91, 0x01, 0x02, 0x91,
    0x01, 0x02, 0x91, 0x01, 0x02, 0x91, 0x01, 0x02, 0x91, 0x01, 0x02, 0x91,
    0x01, 0x02, 0x91, 0x01, 0x02, 0x91, 0x01,
];

static EXTERIOR_MASK_2: [u8; 172] = [
    0x10, 0x13, 0x14, 0x15, 0x8d, 0x00, 0x16, 0x17, 0x18, 0x17, 0x15, 0x8b,
    0x00, 0x19, 0x1a, 0x1b, 0x17, 0x18, 0x17, 0x15, 0x89, 0x00, 0x19, 0x1a,
    0x1c, 0x1a, 0x1b, 0x17, 0x18, 0x17, 0x15, 0x87, 0x00, 0x19, 0x1a, 0x1c,
    0x1a, 0x1c, 0x1a, 0x1b, 0x17, 0x13, 0x14, 0x15, 0x85, 0x00, 0x19, 0x1a,
    0x1c, 0x1a, 0x1c, 0x1a, 0x1c, 0x1d, 0x16, 0x17, 0x18, 0x17, 0x15, 0x83,
    0x00, 0x19, 0x1a, 0x1c, 0x1a, 0x1c, 0x1a, 0x1c, 0x1d, 0x19, 0x1a, 0x1b,
    0x17, 0x18, 0x17, 0x15, 0x00, 0x19, 0x1a, 0x1c, 0x1a, 0x1c, 0x1a, 0x1c,
    0x1d, 0x19, 0x1a, 0x1c, 0x1a, 0x1b, 0x17, 0x18, 0x17, 0x00, 0x20, 0x1c,
    0x1a, 0x1c, 0x1a, 0x1c, 0x1d, 0x19, 0x1a, 0x1c, 0x1a, 0x1c, 0x1a, 0x1b,
    0x17, 0x83, 0x00, 0x20, 0x1c, 0x1a, 0x1c, 0x1d, 0x19, 0x1a, 0x1c, 0x1a,
    0x1c, 0x1a, 0x1c, 0x1d, 0x85, 0x00, 0x20, 0x1c, 0x1d, 0x19, 0x1a, 0x1c,
    0x1a, 0x1c, 0x1a, 0x1c, 0x1d, 0x87, 0x00, 0x1f, 0x19, 0x1a, 0x1c, 0x1a,
    0x1c, 0x1a, 0x1c, 0x1d, 0x89, 0x00, 0x20, 0x1c, 0x1a, 0x1c, 0x1a, 0x1c,
    0x1d, 0x8b, 0x00, 0x20, 0x1c, 0x1a, 0x1c, 0x1d, 0x8d, 0x00, 0x20, 0x1c,
    0x1d, 0x8f, 0x00, 0x1f,
];

static EXTERIOR_MASK_3: [u8; 129] = [
    0x1a, 0x88, 0x00, 0x05, 0x4c, 0x90, 0x00, 0x86, 0x00, 0x05, 0x06, 0x04,
    0x32, 0x30, 0x4c, 0x8e, 0x00, 0x84, 0x00, 0x05, 0x06, 0x04, 0x84, 0x01,
    0x32, 0x30, 0x4c, 0x8c, 0x00, 0x00, 0x00, 0x05, 0x06, 0x04, 0x88, 0x01,
    0x32, 0x30, 0x4c, 0x8a, 0x00, 0x00, 0x06, 0x04, 0x8c, 0x01, 0x32, 0x30,
    0x4c, 0x88, 0x00, 0x02, 0x90, 0x01, 0x32, 0x30, 0x4c, 0x86, 0x00, 0x02,
    0x92, 0x01, 0x32, 0x30, 0x4c, 0x84, 0x00, 0x02, 0x94, 0x01, 0x32, 0x30,
    0x4c, 0x00, 0x00, 0x02, 0x96, 0x01, 0x32, 0x30, 0x00, 0x02, 0x98, 0x01,
    0x12, 0x02, 0x98, 0x01, 0x12, 0x02, 0x98, 0x01, 0x12, 0x02, 0x98, 0x01,
    0x12, 0x02, 0x98, 0x01, 0x12, 0x02, 0x98, 0x01, 0x12, 0x02, 0x98, 0x01,
    0x12, 0x02, 0x98, 0x01, 0x12, 0x02, 0x98, 0x01, 0x12, 0x02, 0x98, 0x01,
    0x12, 0x02, 0x98, 0x01, 0x12, 0x02, 0x98, 0x01, 0x12,
];

static EXTERIOR_MASK_4: [u8; 13] = [
    0x0d, 0x02, 0x8c, 0x01, 0x02, 0x8c, 0x01, 0x02, 0x8c, 0x01, 0x02, 0x8c,
    0x01,
];

static EXTERIOR_MASK_5: [u8; 39] = [
    0x0e, 0x02, 0x8c, 0x01, 0x12, 0x02, 0x8c, 0x01, 0x12, 0x02, 0x8c, 0x01,
    0x12, 0x02, 0x8c, 0x01, 0x12, 0x02, 0x8c, 0x01, 0x12, 0x02, 0x8c, 0x01,
    0x12, 0x02, 0x8c, 0x01, 0x12, 0x02, 0x8c, 0x01, 0x12, 0x02, 0x8d, 0x01,
    0x02, 0x8d, 0x01,
];

static EXTERIOR_MASK_6: [u8; 23] = [
    0x08, 0x5b, 0x5a, 0x86, 0x00, 0x01, 0x01, 0x5b, 0x5a, 0x84, 0x00, 0x84,
    0x01, 0x5b, 0x5a, 0x00, 0x00, 0x86, 0x01, 0x5b, 0x5a, 0xd8, 0x01,
];

static EXTERIOR_MASK_7: [u8; 25] = [
    0x09, 0x88, 0x01, 0x12, 0x88, 0x01, 0x12, 0x88, 0x01, 0x12, 0x88, 0x01,
    0x12, 0x88, 0x01, 0x12, 0x88, 0x01, 0x12, 0x88, 0x01, 0x12, 0x88, 0x01,
    0x12,
];

static EXTERIOR_MASK_8: [u8; 173] = [
    0x10, 0x8d, 0x00, 0x23, 0x24, 0x25, 0x8b, 0x00, 0x23, 0x26, 0x27, 0x26,
    0x28, 0x89, 0x00, 0x23, 0x26, 0x27, 0x26, 0x22, 0x29, 0x2a, 0x87, 0x00,
    0x23, 0x26, 0x27, 0x26, 0x22, 0x29, 0x2b, 0x29, 0x2a, 0x85, 0x00, 0x23,
    0x24, 0x25, 0x26, 0x22, 0x29, 0x2b, 0x29, 0x2b, 0x29, 0x2a, 0x83, 0x00,
    0x23, 0x26, 0x27, 0x26, 0x28, 0x2f, 0x2b, 0x29, 0x2b, 0x29, 0x2b, 0x29,
    0x2a, 0x00, 0x23, 0x26, 0x27, 0x26, 0x22, 0x29, 0x2a, 0x2f, 0x2b, 0x29,
    0x2b, 0x29, 0x2b, 0x29, 0x2a, 0x26, 0x27, 0x26, 0x22, 0x29, 0x2b, 0x29,
    0x2a, 0x2f, 0x2b, 0x29, 0x2b, 0x29, 0x2b, 0x29, 0x2a, 0x26, 0x22, 0x29,
    0x2b, 0x29, 0x2b, 0x29, 0x2a, 0x2f, 0x2b, 0x29, 0x2b, 0x29, 0x2b, 0x31,
    0x2d, 0x2f, 0x2b, 0x29, 0x2b, 0x29, 0x2b, 0x29, 0x2a, 0x2f, 0x2b, 0x29,
    0x2b, 0x31, 0x83, 0x00, 0x2f, 0x2b, 0x29, 0x2b, 0x29, 0x2b, 0x29, 0x2a,
    0x2f, 0x2b, 0x31, 0x85, 0x00, 0x2f, 0x2b, 0x29, 0x2b, 0x29, 0x2b, 0x29,
    0x2a, 0x2e, 0x87, 0x00, 0x2f, 0x2b, 0x29, 0x2b, 0x29, 0x2b, 0x31, 0x2d,
    0x88, 0x00, 0x2f, 0x2b, 0x29, 0x2b, 0x31, 0x8b, 0x00, 0x2f, 0x2b, 0x31,
    0x8d, 0x00, 0x2e, 0x8f, 0x00,
];

static EXTERIOR_MASK_9: [u8; 71] = [
    0x0a, 0x83, 0x00, 0x05, 0x06, 0x30, 0x4c, 0x83, 0x00, 0x00, 0x05, 0x06,
    0x04, 0x01, 0x01, 0x32, 0x30, 0x4c, 0x00, 0x34, 0x04, 0x86, 0x01, 0x32,
    0x33, 0x83, 0x00, 0x40, 0x01, 0x01, 0x3f, 0x83, 0x00, 0x02, 0x46, 0x47,
    0x48, 0x49, 0x42, 0x41, 0x45, 0x44, 0x12, 0x34, 0x01, 0x01, 0x46, 0x4b,
    0x43, 0x44, 0x01, 0x01, 0x33, 0x00, 0x3c, 0x3e, 0x40, 0x01, 0x01, 0x3f,
    0x37, 0x39, 0x00, 0x83, 0x00, 0x3d, 0x3a, 0x3b, 0x38, 0x83, 0x00,
];

static EXTERIOR_MASK_10: [u8; 77] = [
    0x08, 0x35, 0x86, 0x01, 0x36, 0x90, 0x01, 0x88, 0x00, 0x3c, 0x86, 0x00,
    0x39, 0x3c, 0x00, 0x02, 0x36, 0x35, 0x12, 0x00, 0x39, 0x3c, 0x00, 0x02,
    0x01, 0x01, 0x12, 0x00, 0x39, 0x3c, 0x00, 0x02, 0x01, 0x01, 0x12, 0x00,
    0x39, 0x3c, 0x00, 0x02, 0x01, 0x01, 0x12, 0x00, 0x39, 0x3c, 0x00, 0x02,
    0x01, 0x01, 0x12, 0x00, 0x39, 0x3c, 0x00, 0x02, 0x01, 0x01, 0x12, 0x00,
    0x39, 0x3c, 0x00, 0x02, 0x01, 0x01, 0x12, 0x00, 0x39, 0x3c, 0x00, 0x02,
    0x01, 0x01, 0x12, 0x00, 0x39,
];

static EXTERIOR_MASK_11: [u8; 63] = [
    0x08, 0x01, 0x4f, 0x86, 0x00, 0x01, 0x50, 0x01, 0x4f, 0x84, 0x00, 0x01,
    0x00, 0x00, 0x51, 0x01, 0x4f, 0x00, 0x00, 0x01, 0x00, 0x00, 0x53, 0x19,
    0x50, 0x01, 0x4f, 0x01, 0x00, 0x00, 0x53, 0x19, 0x00, 0x00, 0x52, 0x01,
    0x00, 0x00, 0x53, 0x19, 0x00, 0x00, 0x52, 0x01, 0x54, 0x00, 0x53, 0x19,
    0x00, 0x00, 0x52, 0x83, 0x00, 0x55, 0x19, 0x00, 0x00, 0x52, 0x85, 0x00,
    0x54, 0x00, 0x52,
];

static EXTERIOR_MASK_12: [u8; 17] = [
    0x02, 0x56, 0x57, 0x56, 0x57, 0x58, 0x59, 0x58, 0x59, 0x58, 0x59, 0x58,
    0x59, 0x58, 0x59, 0x58, 0x59,
];

static EXTERIOR_MASK_13: [u8; 50] = [
    0x05, 0x00, 0x00, 0x23, 0x24, 0x25, 0x02, 0x00, 0x27, 0x26, 0x28, 0x02,
    0x00, 0x22, 0x26, 0x28, 0x02, 0x00, 0x2b, 0x29, 0x2a, 0x02, 0x00, 0x2b,
    0x29, 0x2a, 0x02, 0x00, 0x2b, 0x29, 0x2a, 0x02, 0x00, 0x2b, 0x29, 0x2a,
    0x02, 0x00, 0x2b, 0x29, 0x2a, 0x02, 0x00, 0x2b, 0x31, 0x00, 0x02, 0x00,
    0x83, 0x00,
];

static EXTERIOR_MASK_14: [u8; 40] = [
    0x04, 0x19, 0x83, 0x00, 0x19, 0x17, 0x15, 0x00, 0x19, 0x17, 0x18, 0x17,
    0x19, 0x1a, 0x1b, 0x17, 0x19, 0x1a, 0x1c, 0x1d, 0x19, 0x1a, 0x1c, 0x1d,
    0x19, 0x1a, 0x1c, 0x1d, 0x19, 0x1a, 0x1c, 0x1d, 0x19, 0x1a, 0x1c, 0x1d,
    0x00, 0x20, 0x1c, 0x1d,
];

static INTERIOR_MASK_15: [u8; 5] = [
    0x02, 0x04, 0x32, 0x01, 0x01,
];

static INTERIOR_MASK_16: [u8; 26] = [
    0x09, 0x86, 0x00, 0x5d, 0x5c, 0x54, 0x84, 0x00, 0x5d, 0x5c, 0x01, 0x01,
    0x01, 0x00, 0x00, 0x5d, 0x5c, 0x85, 0x01, 0x5d, 0x5c, 0x87, 0x01, 0x2b,
    0x88, 0x01,
];

static INTERIOR_MASK_17: [u8; 13] = [
    0x05, 0x00, 0x00, 0x5d, 0x5c, 0x67, 0x5d, 0x5c, 0x83, 0x01, 0x3c, 0x84,
    0x01,
];

static INTERIOR_MASK_18: [u8; 5] = [
    0x02, 0x5d, 0x68, 0x3c, 0x69,
];

static INTERIOR_MASK_19: [u8; 27] = [
    0x0a, 0x86, 0x00, 0x5d, 0x5c, 0x46, 0x47, 0x84, 0x00, 0x5d, 0x5c, 0x83,
    0x01, 0x39, 0x00, 0x00, 0x5d, 0x5c, 0x86, 0x01, 0x5d, 0x5c, 0x88, 0x01,
    0x4a, 0x89, 0x01,
];

static INTERIOR_MASK_20: [u8; 15] = [
    0x06, 0x5d, 0x5c, 0x01, 0x47, 0x6a, 0x00, 0x4a, 0x84, 0x01, 0x6b, 0x00,
    0x84, 0x01, 0x5f,
];

static INTERIOR_MASK_21: [u8; 25] = [
    0x04, 0x05, 0x4c, 0x00, 0x00, 0x61, 0x65, 0x66, 0x4c, 0x61, 0x12, 0x02,
    0x60, 0x61, 0x12, 0x02, 0x60, 0x61, 0x12, 0x02, 0x60, 0x61, 0x12, 0x02,
    0x60,
];

static INTERIOR_MASK_22: [u8; 29] = [
    0x04, 0x00, 0x00, 0x05, 0x4c, 0x05, 0x63, 0x64, 0x60, 0x61, 0x12, 0x02,
    0x60, 0x61, 0x12, 0x02, 0x60, 0x61, 0x12, 0x02, 0x60, 0x61, 0x12, 0x02,
    0x60, 0x61, 0x12, 0x62, 0x00,
];

static INTERIOR_MASK_23: [u8; 10] = [
    0x03, 0x00, 0x6c, 0x00, 0x02, 0x01, 0x68, 0x02, 0x01, 0x69,
];

static INTERIOR_MASK_24: [u8; 14] = [
    0x05, 0x01, 0x5e, 0x4c, 0x00, 0x00, 0x01, 0x01, 0x32, 0x30, 0x00, 0x84,
    0x01, 0x5f,
];

static INTERIOR_MASK_25: [u8; 7] = [
    0x02, 0x6e, 0x5a, 0x6d, 0x39, 0x3c, 0x39,
];

static INTERIOR_MASK_26: [u8; 9] = [
    0x04, 0x5d, 0x5c, 0x46, 0x47, 0x4a, 0x01, 0x01, 0x39,
];

static INTERIOR_MASK_27: [u8; 10] = [
    0x03, 0x2c, 0x47, 0x00, 0x00, 0x61, 0x12, 0x00, 0x61, 0x12,
];

static INTERIOR_MASK_28: [u8; 10] = [
    0x03, 0x00, 0x45, 0x1e, 0x02, 0x60, 0x00, 0x02, 0x60, 0x00,
];

static INTERIOR_MASK_29: [u8; 21] = [
    0x05, 0x45, 0x1e, 0x2c, 0x47, 0x00, 0x2c, 0x47, 0x45, 0x1e, 0x12, 0x00,
    0x61, 0x12, 0x61, 0x12, 0x00, 0x61, 0x5f, 0x00, 0x00,
];

/// Strips in mask-index order: outdoor masks first, then indoor.
pub static MASK_STRIPS: [&[u8]; 30] = [
    &EXTERIOR_MASK_0,
    &EXTERIOR_MASK_1,
    &EXTERIOR_MASK_2,
    &EXTERIOR_MASK_3,
    &EXTERIOR_MASK_4,
    &EXTERIOR_MASK_5,
    &EXTERIOR_MASK_6,
    &EXTERIOR_MASK_7,
    &EXTERIOR_MASK_8,
    &EXTERIOR_MASK_9,
    &EXTERIOR_MASK_10,
    &EXTERIOR_MASK_11,
    &EXTERIOR_MASK_13,
    &EXTERIOR_MASK_14,
    &EXTERIOR_MASK_12,
    &INTERIOR_MASK_29,
    &INTERIOR_MASK_27,
    &INTERIOR_MASK_28,
    &INTERIOR_MASK_15,
    &INTERIOR_MASK_16,
    &INTERIOR_MASK_17,
    &INTERIOR_MASK_18,
    &INTERIOR_MASK_19,
    &INTERIOR_MASK_20,
    &INTERIOR_MASK_21,
    &INTERIOR_MASK_22,
    &INTERIOR_MASK_23,
    &INTERIOR_MASK_24,
    &INTERIOR_MASK_25,
    &INTERIOR_MASK_26,
];

/// Mask placements for the exterior scene: (strip index, iso bounds, map position).
pub static EXTERIOR_MASKS: [MaskDef; 58] = [
    MaskDef::new( 0,  71, 112,  39,  63, 106,  82, 12),
    MaskDef::new( 0,  95, 136,  51,  75,  94,  82, 12),
    MaskDef::new( 0, 119, 160,  63,  87,  82,  82, 12),
    MaskDef::new( 1, 159, 176,  40,  49,  62, 106, 60),
    MaskDef::new( 1, 159, 176,  50,  59,  62, 106, 60),
    MaskDef::new( 2,  64,  79,  76,  91,  70,  70,  8),
    MaskDef::new( 2,  80,  95,  84,  99,  70,  70,  8),
    MaskDef::new( 2,  96, 111,  92, 107,  70,  70,  8),
    MaskDef::new( 2, 112, 127, 100, 115,  70,  70,  8),
    MaskDef::new( 2,  48,  63,  84,  99,  62,  62,  8),
    MaskDef::new( 2,  64,  79,  92, 107,  62,  62,  8),
    MaskDef::new( 2,  80,  95, 100, 115,  62,  62,  8),
    MaskDef::new( 2,  96, 111, 108, 123,  62,  62,  8),
    MaskDef::new( 2, 112, 127, 116, 131,  62,  62,  8),
    MaskDef::new( 2,  16,  31, 100, 115,  74,  46,  8),
    MaskDef::new( 2,  32,  47, 108, 123,  74,  46,  8),
    MaskDef::new( 2,  48,  63, 116, 131,  74,  46,  8),
    MaskDef::new( 3,  43,  68,  51,  71, 103,  69, 18),
    MaskDef::new( 4,  43,  55,  72,  75, 109,  69,  8),
    MaskDef::new( 5,  55,  68,  72,  81, 103,  69,  8),
    MaskDef::new( 6,   8,  15,  42,  60, 110,  70, 10),
    MaskDef::new( 6,  16,  23,  46,  64, 110,  70, 10),
    MaskDef::new( 6,  24,  31,  50,  68, 110,  70, 10),
    MaskDef::new( 6,  32,  39,  54,  72, 110,  70, 10),
    MaskDef::new( 6,  40,  47,  58,  76, 110,  70, 10),
    MaskDef::new( 7,   8,  16,  31,  38, 130,  70, 18),
    MaskDef::new( 7,   8,  16,  39,  45, 130,  70, 18),
    MaskDef::new( 8, 128, 143, 100, 115,  70,  70,  8),
    MaskDef::new( 8, 144, 159,  92, 107,  70,  70,  8),
    MaskDef::new( 8, 160, 176,  84,  99,  70,  70,  8),
    MaskDef::new( 8, 176, 191,  76,  91,  70,  70,  8),
    MaskDef::new( 8, 192, 207,  68,  83,  70,  70,  8),
    MaskDef::new( 8, 128, 143, 116, 131,  62,  62,  8),
    MaskDef::new( 8, 144, 159, 108, 123,  62,  62,  8),
    MaskDef::new( 8, 160, 176, 100, 115,  62,  62,  8),
    MaskDef::new( 8, 176, 191,  92, 107,  62,  62,  8),
    MaskDef::new( 8, 192, 207,  84,  99,  62,  62,  8),
    MaskDef::new( 8, 208, 223,  76,  91,  62,  62,  8),
    MaskDef::new( 8,  64,  79, 116, 131,  78,  46,  8),
    MaskDef::new( 8,  80,  95, 108, 123,  78,  46,  8),
    MaskDef::new( 8,  16,  31,  88, 103, 104,  46,  8),
    MaskDef::new( 8,  32,  47,  80,  95, 104,  46,  8),
    MaskDef::new( 8,  48,  63,  72,  87, 104,  46,  8),
    MaskDef::new( 9,  27,  36,  78,  85, 104,  55, 15),
    MaskDef::new(10,  28,  35,  81,  93, 104,  56, 10),
    MaskDef::new( 9,  59,  68, 114, 121,  78,  45, 15),
    MaskDef::new(10,  60,  67, 117, 129,  78,  46, 10),
    MaskDef::new( 9, 123, 132,  98, 105,  70,  69, 15),
    MaskDef::new(10, 124, 131, 101, 113,  70,  70, 10),
    MaskDef::new( 9, 171, 180,  74,  81,  70,  93, 15),
    MaskDef::new(10, 172, 179,  77,  89,  70,  94, 10),
    MaskDef::new(11,  88,  95,  90,  98,  70,  70,  8),
    MaskDef::new(11,  72,  79,  98, 106,  62,  62,  8),
    MaskDef::new(12,  11,  15,  96, 103, 104,  46,  8),
    MaskDef::new(13,  12,  15,  97, 106,  78,  46,  8),
    MaskDef::new(14, 127, 128, 124, 131,  62,  62,  8),
    MaskDef::new(13,  44,  47,  81,  90,  62,  62,  8),
    MaskDef::new(13,  60,  63,  73,  82,  70,  70,  8),
];
