//! Facade over the mask data: the RLE strips and the exterior placement
//! table.

pub use super::mask_strips::{EXTERIOR_MASKS, MASK_STRIPS};

/// Top bit of a strip byte marks a repetition; the low seven bits are
/// the count, plus one.
pub const MASK_RUN_FLAG: u8 = 1 << 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_strip_declares_its_width() {
        for (index, strip) in MASK_STRIPS.iter().enumerate() {
            assert!(strip.len() > 1, "strip {index}");
            assert!(strip[0] > 0 && strip[0] <= 0x2A, "strip {index}");
        }
    }

    #[test]
    fn exterior_placements_reference_outdoor_strips() {
        for mask in EXTERIOR_MASKS.iter() {
            assert!(mask.index < 15);
            assert!(mask.bounds.x0 <= mask.bounds.x1);
            assert!(mask.bounds.y0 <= mask.bounds.y1);
        }
    }
}
