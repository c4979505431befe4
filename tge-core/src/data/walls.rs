//! Solid walls and fences used by the outdoor bounds check.
//!
//! Coordinates are map units. The final eight entries are the wire
//! fences: the only segments the wiresnips can open.

/// An axis-aligned solid volume.
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub minx: u8,
    pub maxx: u8,
    pub miny: u8,
    pub maxy: u8,
    pub minheight: u8,
    pub maxheight: u8,
}

const fn wall(minx: u8, maxx: u8, miny: u8, maxy: u8, minheight: u8, maxheight: u8) -> Wall {
    Wall { minx, maxx, miny, maxy, minheight, maxheight }
}

/// Index of the first fence entry within [`WALLS`].
pub const FIRST_FENCE: usize = 16;

pub static WALLS: [Wall; 24] = [
    // Huts, east to west along the southern row. The bands stop short
    // of the doorways on their northern faces.
    wall(102, 110, 80, 86, 0, 16),
    wall(90, 98, 80, 86, 0, 16),
    wall(78, 86, 80, 86, 0, 16),
    // Perimeter wall by the main gate.
    wall(108, 112, 40, 72, 0, 20),
    // Corner block south of the gate.
    wall(60, 66, 102, 110, 0, 30),
    // Watchtowers.
    wall(102, 106, 54, 58, 0, 30),
    wall(76, 80, 44, 48, 0, 30),
    wall(68, 72, 68, 72, 0, 30),
    wall(68, 72, 92, 96, 0, 30),
    // Admin block, mess block, solitary block.
    wall(96, 104, 59, 61, 0, 16),
    wall(60, 68, 62, 65, 0, 16),
    wall(56, 62, 43, 45, 0, 16),
    // Store sheds.
    wall(74, 78, 62, 63, 0, 12),
    wall(108, 112, 60, 61, 0, 12),
    wall(54, 58, 68, 69, 0, 12),
    wall(50, 54, 62, 63, 0, 12),
    // Fences.
    wall(64, 112, 69, 71, 0, 6),
    wall(48, 112, 61, 63, 0, 6),
    wall(73, 75, 30, 46, 0, 6),
    wall(77, 79, 30, 46, 0, 6),
    wall(103, 105, 30, 46, 0, 6),
    wall(61, 63, 56, 62, 0, 6),
    wall(69, 71, 84, 106, 0, 6),
    wall(85, 87, 62, 72, 0, 6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_are_well_formed() {
        for w in WALLS.iter() {
            assert!(w.minx < w.maxx);
            assert!(w.miny < w.maxy);
            assert!(w.minheight < w.maxheight);
        }
    }

    #[test]
    fn fences_are_low() {
        for fence in WALLS[FIRST_FENCE..].iter() {
            assert!(fence.maxheight <= 6);
        }
    }
}
