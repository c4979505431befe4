//! Start offsets of each game-window scanline within the screen bitmap.
//!
//! These capture the Spectrum's interleaved scanline layout for the
//! 16-row window area, relative to the start of screen memory.

pub static GAME_WINDOW_START_OFFSETS: [u16; 128] = [
    0x0047, 0x0147, 0x0247, 0x0347, 0x0447, 0x0547, 0x0647, 0x0747,
    0x0067, 0x0167, 0x0267, 0x0367, 0x0467, 0x0567, 0x0667, 0x0767,
    0x0087, 0x0187, 0x0287, 0x0387, 0x0487, 0x0587, 0x0687, 0x0787,
    0x00a7, 0x01a7, 0x02a7, 0x03a7, 0x04a7, 0x05a7, 0x06a7, 0x07a7,
    0x00c7, 0x01c7, 0x02c7, 0x03c7, 0x04c7, 0x05c7, 0x06c7, 0x07c7,
    0x00e7, 0x01e7, 0x02e7, 0x03e7, 0x04e7, 0x05e7, 0x06e7, 0x07e7,
    0x0807, 0x0907, 0x0a07, 0x0b07, 0x0c07, 0x0d07, 0x0e07, 0x0f07,
    0x0827, 0x0927, 0x0a27, 0x0b27, 0x0c27, 0x0d27, 0x0e27, 0x0f27,
    0x0847, 0x0947, 0x0a47, 0x0b47, 0x0c47, 0x0d47, 0x0e47, 0x0f47,
    0x0867, 0x0967, 0x0a67, 0x0b67, 0x0c67, 0x0d67, 0x0e67, 0x0f67,
    0x0887, 0x0987, 0x0a87, 0x0b87, 0x0c87, 0x0d87, 0x0e87, 0x0f87,
    0x08a7, 0x09a7, 0x0aa7, 0x0ba7, 0x0ca7, 0x0da7, 0x0ea7, 0x0fa7,
    0x08c7, 0x09c7, 0x0ac7, 0x0bc7, 0x0cc7, 0x0dc7, 0x0ec7, 0x0fc7,
    0x08e7, 0x09e7, 0x0ae7, 0x0be7, 0x0ce7, 0x0de7, 0x0ee7, 0x0fe7,
    0x1007, 0x1107, 0x1207, 0x1307, 0x1407, 0x1507, 0x1607, 0x1707,
    0x1027, 0x1127, 0x1227, 0x1327, 0x1427, 0x1527, 0x1627, 0x1727,
];
