//! Item bitmaps and their masks. All are 16 pixels wide, variable height.

pub static BITMAP_SHOVEL: [u8; 26] = [
    0x00, 0x00,
    0x00, 0x02,
    0x00, 0x05,
    0x00, 0x0e,
    0x00, 0x30,
    0x00, 0xc0,
    0x33, 0x00,
    0x6c, 0x00,
    0xe7, 0x00,
    0xfc, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
];

pub static BITMAP_KEY: [u8; 26] = [
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x18,
    0x00, 0x64,
    0x00, 0x1c,
    0x00, 0x70,
    0x19, 0xc0,
    0x27, 0x00,
    0x32, 0x00,
    0x19, 0x00,
    0x07, 0x00,
    0x00, 0x00,
];

pub static BITMAP_LOCKPICK: [u8; 32] = [
    0x01, 0x80,
    0x00, 0xc0,
    0x03, 0x70,
    0x0c, 0x60,
    0x38, 0x40,
    0xe0, 0x00,
    0xc0, 0x00,
    0x03, 0x18,
    0x0c, 0xf0,
    0x30, 0xc0,
    0x23, 0x07,
    0x2c, 0x08,
    0x30, 0x38,
    0x00, 0xe6,
    0x03, 0xc4,
    0x03, 0x00,
];

pub static BITMAP_COMPASS: [u8; 24] = [
    0x00, 0x00,
    0x07, 0xe0,
    0x18, 0x18,
    0x24, 0x24,
    0x41, 0x02,
    0x41, 0x02,
    0x24, 0xa4,
    0x58, 0x9a,
    0x27, 0xe4,
    0x18, 0x18,
    0x07, 0xe0,
    0x00, 0x00,
];

pub static BITMAP_PURSE: [u8; 24] = [
    0x00, 0x00,
    0x01, 0x80,
    0x07, 0x40,
    0x03, 0x80,
    0x01, 0x00,
    0x02, 0x80,
    0x05, 0x40,
    0x0d, 0xa0,
    0x0b, 0xe0,
    0x0f, 0xe0,
    0x07, 0xc0,
    0x00, 0x00,
];

pub static BITMAP_PAPERS: [u8; 30] = [
    0x00, 0x00,
    0x0c, 0x00,
    0x07, 0x00,
    0x06, 0xc0,
    0x02, 0xb0,
    0x33, 0x6c,
    0x6c, 0xd4,
    0x6b, 0x36,
    0xda, 0xce,
    0xd6, 0xf3,
    0x35, 0xec,
    0x0d, 0xdc,
    0x03, 0xd0,
    0x00, 0x80,
    0x00, 0x00,
];

pub static BITMAP_WIRESNIPS: [u8; 22] = [
    0x00, 0x00,
    0x00, 0x18,
    0x00, 0x36,
    0x00, 0x60,
    0x03, 0xfb,
    0x0e, 0x6e,
    0x30, 0xe0,
    0xc1, 0x80,
    0x06, 0x00,
    0x18, 0x00,
    0x00, 0x00,
];

pub static MASK_SHOVELKEY: [u8; 26] = [
    0xff, 0xfd,
    0xff, 0xf8,
    0xff, 0xe0,
    0xff, 0x80,
    0xff, 0x01,
    0xcc, 0x01,
    0x80, 0x03,
    0x00, 0x0f,
    0x00, 0x3f,
    0x00, 0xff,
    0x00, 0x7f,
    0xe0, 0x7f,
    0xf8, 0xff,
];

pub static MASK_LOCKPICK: [u8; 32] = [
    0xfc, 0x3f,
    0xfc, 0x0f,
    0xf0, 0x07,
    0xc0, 0x0f,
    0x03, 0x1f,
    0x07, 0xbf,
    0x1c, 0xe7,
    0x30, 0x03,
    0xc0, 0x07,
    0x80, 0x08,
    0x80, 0x30,
    0x80, 0xc0,
    0x83, 0x01,
    0xcc, 0x00,
    0xf8, 0x11,
    0xf8, 0x3b,
];

pub static MASK_COMPASS: [u8; 24] = [
    0xf8, 0x1f,
    0xe0, 0x07,
    0xc0, 0x03,
    0x80, 0x01,
    0x00, 0x00,
    0x00, 0x00,
    0x80, 0x01,
    0x00, 0x00,
    0x80, 0x01,
    0xc0, 0x03,
    0xe0, 0x07,
    0xf8, 0x1f,
];

pub static MASK_PURSE: [u8; 24] = [
    0xfe, 0x7f,
    0xf8, 0x3f,
    0xf0, 0x1f,
    0xf8, 0x3f,
    0xfc, 0x3f,
    0xf8, 0x3f,
    0xf0, 0x1f,
    0xe0, 0x0f,
    0xe0, 0x0f,
    0xe0, 0x0f,
    0xf0, 0x1f,
    0xf8, 0x3f,
];

pub static MASK_PAPERS: [u8; 30] = [
    0xf3, 0xff,
    0xe0, 0xff,
    0xf0, 0x3f,
    0xf0, 0x0f,
    0xc8, 0x03,
    0x80, 0x01,
    0x00, 0x01,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0xc0, 0x01,
    0xf0, 0x03,
    0xfc, 0x2f,
    0xff, 0x7f,
];

pub static MASK_WIRESNIPS: [u8; 22] = [
    0xff, 0xe7,
    0xff, 0xc1,
    0xff, 0x80,
    0xfc, 0x00,
    0xf0, 0x00,
    0xc0, 0x00,
    0x00, 0x01,
    0x08, 0x1f,
    0x20, 0x7f,
    0xc1, 0xff,
    0xe7, 0xff,
];

pub static BITMAP_FOOD: [u8; 32] = [
    0x00, 0x30,
    0x00, 0x00,
    0x00, 0x30,
    0x00, 0x30,
    0x0e, 0x78,
    0x1f, 0xb8,
    0x07, 0x38,
    0x18, 0xb8,
    0x1e, 0x38,
    0x19, 0x98,
    0x17, 0xe0,
    0x19, 0xf8,
    0x06, 0x60,
    0x07, 0x98,
    0x01, 0xf8,
    0x00, 0x60,
];

pub static BITMAP_POISON: [u8; 32] = [
    0x00, 0x00,
    0x00, 0x80,
    0x00, 0x80,
    0x01, 0x40,
    0x01, 0xc0,
    0x00, 0x80,
    0x01, 0x40,
    0x03, 0xe0,
    0x06, 0x30,
    0x06, 0xb0,
    0x06, 0x30,
    0x06, 0xf0,
    0x06, 0xf0,
    0x07, 0xf0,
    0x05, 0xd0,
    0x03, 0xe0,
];

pub static BITMAP_TORCH: [u8; 24] = [
    0x00, 0x00,
    0x00, 0x08,
    0x00, 0x3c,
    0x02, 0xfc,
    0x0d, 0x70,
    0x1e, 0xa0,
    0x1e, 0x80,
    0x16, 0x80,
    0x16, 0x80,
    0x16, 0x00,
    0x0c, 0x00,
    0x00, 0x00,
];

pub static BITMAP_UNIFORM: [u8; 32] = [
    0x01, 0xe0,
    0x07, 0xf0,
    0x0f, 0xf8,
    0x0f, 0xf8,
    0x1f, 0xfc,
    0x0f, 0xf3,
    0xf3, 0xcc,
    0x3c, 0x30,
    0x0f, 0xcf,
    0xf3, 0x3c,
    0x3c, 0xf0,
    0x0f, 0xcf,
    0xf3, 0x3c,
    0x3c, 0xf0,
    0x0f, 0xc0,
    0x03, 0x00,
];

pub static BITMAP_BRIBE: [u8; 26] = [
    0x00, 0x00,
    0x00, 0x00,
    0x03, 0x00,
    0x0f, 0xc0,
    0x3f, 0x30,
    0x4c, 0xfc,
    0xf3, 0xf2,
    0x3c, 0xcf,
    0x0f, 0x3c,
    0x03, 0xf0,
    0x00, 0xc0,
    0x00, 0x00,
    0x00, 0x00,
];

pub static BITMAP_RADIO: [u8; 32] = [
    0x00, 0x10,
    0x00, 0x10,
    0x38, 0x10,
    0xc6, 0x10,
    0x37, 0x90,
    0xcc, 0x50,
    0xf3, 0x50,
    0xcc, 0xee,
    0xb7, 0x38,
    0xb6, 0xc6,
    0xcf, 0x36,
    0x3e, 0xd6,
    0x0f, 0x36,
    0x03, 0xd6,
    0x00, 0xf6,
    0x00, 0x35,
];

pub static BITMAP_PARCEL: [u8; 32] = [
    0x00, 0x00,
    0x03, 0x00,
    0x0e, 0x40,
    0x39, 0xf0,
    0xe7, 0xe4,
    0x1f, 0x9f,
    0x8e, 0x7c,
    0xb1, 0xf3,
    0xb8, 0xcf,
    0xbb, 0x37,
    0xbb, 0x73,
    0xbb, 0x67,
    0xbb, 0x77,
    0x3b, 0x7c,
    0x0b, 0x70,
    0x03, 0x40,
];

pub static MASK_BRIBE: [u8; 26] = [
    0xfc, 0xff,
    0xf0, 0x3f,
    0xc0, 0x0f,
    0x80, 0x03,
    0x80, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0xc0, 0x00,
    0xf0, 0x00,
    0xfc, 0x00,
    0xff, 0x03,
    0xff, 0xcf,
];

pub static MASK_UNIFORM: [u8; 32] = [
    0xf8, 0x0f,
    0xf0, 0x07,
    0xe0, 0x03,
    0xe0, 0x03,
    0xc0, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x03,
    0xc0, 0x0f,
    0xf0, 0x3f,
];

pub static MASK_PARCEL: [u8; 32] = [
    0xfc, 0xff,
    0xf0, 0x3f,
    0xc0, 0x0f,
    0x00, 0x03,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0xc0, 0x03,
    0xf0, 0x0f,
];

pub static MASK_POISON: [u8; 32] = [
    0xff, 0x7f,
    0xfe, 0x3f,
    0xfe, 0x3f,
    0xfc, 0x1f,
    0xfc, 0x1f,
    0xfe, 0x3f,
    0xfc, 0x1f,
    0xf8, 0x0f,
    0xf0, 0x07,
    0xf0, 0x07,
    0xf0, 0x07,
    0xf0, 0x07,
    0xf0, 0x07,
    0xf0, 0x07,
    0xf0, 0x07,
    0xf8, 0x0f,
];

pub static MASK_TORCH: [u8; 24] = [
    0xff, 0xf7,
    0xff, 0xc3,
    0xfd, 0x01,
    0xf0, 0x01,
    0xe0, 0x03,
    0xc0, 0x0f,
    0xc0, 0x1f,
    0xc0, 0x3f,
    0xc0, 0x3f,
    0xc0, 0x7f,
    0xe1, 0xff,
    0xf3, 0xff,
];

pub static MASK_RADIO: [u8; 32] = [
    0xff, 0xc7,
    0xc7, 0xc7,
    0x01, 0xc7,
    0x00, 0x47,
    0x00, 0x07,
    0x00, 0x07,
    0x00, 0x01,
    0x00, 0x00,
    0x00, 0x01,
    0x00, 0x00,
    0x00, 0x00,
    0x00, 0x00,
    0xc0, 0x00,
    0xf0, 0x00,
    0xfc, 0x00,
    0xff, 0x01,
];

pub static MASK_FOOD: [u8; 32] = [
    0xff, 0x87,
    0xff, 0xcf,
    0xff, 0x87,
    0xf1, 0x87,
    0xe0, 0x03,
    0xc0, 0x03,
    0xe0, 0x03,
    0xc0, 0x03,
    0xc0, 0x03,
    0xc0, 0x03,
    0xc0, 0x07,
    0xc0, 0x03,
    0xe0, 0x07,
    0xf0, 0x03,
    0xf8, 0x03,
    0xfe, 0x07,
];

