//! Default game state: where everyone and everything starts.

use crate::data::MaskDef;
use crate::data::doors::DOOR_LOCKED;
use crate::data::sprites::{SPRITE_CRATE, SPRITE_STOVE};
use crate::game::character::CharacterStruct;
use crate::game::item::ItemStruct;
use crate::game::route::Route;
use crate::game::searchlight::SearchlightMovement;
use crate::game::vischar::MovableItem;
use crate::game::{characters, rooms};
use crate::math::{Direction, MapPos8, MapPos16, Pos8};
use crate::spectrum::attribute;

pub const EMPTY_MASKDEF: MaskDef = MaskDef::new(0, 0, 0, 0, 0, 0, 0, 0);

/// The movable stoves and crate.
pub fn default_movable_items() -> [MovableItem; 3] {
    [
        MovableItem {
            mappos: MapPos16::new(62, 35, 16),
            sprite_base: SPRITE_STOVE,
            sprite_index: 0,
        },
        MovableItem {
            mappos: MapPos16::new(55, 54, 14),
            sprite_base: SPRITE_CRATE,
            sprite_index: 0,
        },
        MovableItem {
            mappos: MapPos16::new(62, 35, 16),
            sprite_base: SPRITE_STOVE,
            sprite_index: 0,
        },
    ]
}

/// Everyone's opening position and route.
pub fn default_character_structs() -> [CharacterStruct; characters::LIMIT as usize] {
    const fn cs(character: u8, room: u8, u: u8, v: u8, w: u8, route: u8, step: u8) -> CharacterStruct {
        CharacterStruct::new(character, room, MapPos8::new(u, v, w), Route::new(route, step))
    }

    [
        // The commandant tours the camp; guards 1..11 hold the wire and
        // the towers; guards 12..15 sleep in the huts; the dogs wander
        // their pens; the prisoners materialise at wake-up.
        cs(0, rooms::PAPERS, 46, 46, 24, 3, 0),
        cs(1, rooms::OUTDOORS, 102, 68, 3, 1, 0),
        cs(2, rooms::OUTDOORS, 68, 104, 3, 1, 2),
        cs(3, rooms::CORRIDOR_16, 46, 46, 24, 3, 19),
        cs(4, rooms::OUTDOORS, 61, 103, 3, 2, 4),
        cs(5, rooms::OUTDOORS, 106, 56, 13, 0, 0),
        cs(6, rooms::OUTDOORS, 72, 94, 13, 0, 0),
        cs(7, rooms::OUTDOORS, 72, 70, 13, 0, 0),
        cs(8, rooms::OUTDOORS, 80, 46, 13, 0, 0),
        cs(9, rooms::OUTDOORS, 108, 71, 21, 4, 0),
        cs(10, rooms::OUTDOORS, 92, 52, 3, 255, 56),
        cs(11, rooms::OUTDOORS, 109, 69, 3, 0, 0),
        cs(12, rooms::HUT2RIGHT, 40, 60, 24, 0, 8),
        cs(13, rooms::HUT2LEFT, 36, 48, 24, 0, 8),
        cs(14, rooms::HUT3RIGHT, 40, 60, 24, 0, 16),
        cs(15, rooms::HUT3RIGHT, 36, 34, 24, 0, 16),
        cs(16, rooms::OUTDOORS, 68, 84, 1, 255, 0),
        cs(17, rooms::OUTDOORS, 68, 104, 1, 255, 0),
        cs(18, rooms::OUTDOORS, 102, 68, 1, 255, 24),
        cs(19, rooms::OUTDOORS, 88, 68, 1, 255, 24),
        cs(20, rooms::NONE, 52, 60, 24, 0, 8),
        cs(21, rooms::NONE, 52, 44, 24, 0, 8),
        cs(22, rooms::NONE, 52, 28, 24, 0, 8),
        cs(23, rooms::NONE, 52, 60, 24, 0, 16),
        cs(24, rooms::NONE, 52, 44, 24, 0, 16),
        cs(25, rooms::NONE, 52, 28, 24, 0, 16),
    ]
}

/// Every item's opening location.
pub fn default_item_structs() -> [ItemStruct; 16] {
    const NONE: u8 = 0x3F; // itemstruct room-none, in six bits

    const fn is(item: u8, room: u8, u: u8, v: u8, w: u8) -> ItemStruct {
        ItemStruct::new(item, room, MapPos8::new(u, v, w))
    }

    [
        is(0, NONE, 64, 32, 2),             // wiresnips
        is(1, rooms::CRATE, 62, 48, 0),     // shovel
        is(2, rooms::LOCKPICK, 73, 36, 16), // lockpick
        is(3, rooms::PAPERS, 42, 58, 4),    // papers
        is(4, rooms::TORCH, 34, 24, 2),     // torch
        is(5, NONE, 36, 44, 4),             // bribe
        is(6, rooms::UNIFORM, 44, 65, 16),  // uniform
        is(7, rooms::FOOD, 64, 48, 16),     // food
        is(8, rooms::HUT1RIGHT, 66, 52, 4), // poison
        is(9, rooms::REDKEY, 60, 42, 0),    // red key
        is(10, rooms::PAPERS, 28, 34, 0),   // yellow key
        is(11, rooms::OUTDOORS, 74, 72, 0), // green key
        is(12, NONE, 28, 50, 12),           // red cross parcel
        is(13, rooms::RADIO, 36, 58, 8),    // radio
        is(14, NONE, 36, 44, 4),            // purse
        is(15, NONE, 52, 28, 4),            // compass
    ]
}

/// An item's default (home) room, used by discovery.
pub fn default_item_room(item: usize) -> u8 {
    default_item_structs()[item.min(15)].room()
}

/// An item's default state, used when it's rediscovered.
pub fn default_item(item: usize) -> ItemStruct {
    default_item_structs()[item.min(15)]
}

/// Status bar colours for each item.
pub static DEFAULT_ITEM_ATTRIBUTES: [u8; 16] = [
    attribute::YELLOW_OVER_BLACK,
    attribute::CYAN_OVER_BLACK,
    attribute::CYAN_OVER_BLACK,
    attribute::WHITE_OVER_BLACK,
    attribute::GREEN_OVER_BLACK,
    attribute::BRIGHT_RED_OVER_BLACK,
    attribute::GREEN_OVER_BLACK,
    attribute::WHITE_OVER_BLACK,
    attribute::PURPLE_OVER_BLACK,
    attribute::BRIGHT_RED_OVER_BLACK,
    attribute::YELLOW_OVER_BLACK,
    attribute::GREEN_OVER_BLACK,
    attribute::CYAN_OVER_BLACK,
    attribute::WHITE_OVER_BLACK,
    attribute::WHITE_OVER_BLACK,
    attribute::GREEN_OVER_BLACK,
];

/// Gates and doors which start out locked. The first five are exterior.
pub static DEFAULT_LOCKED_DOORS: [u8; 11] = [
    0 | DOOR_LOCKED,
    1 | DOOR_LOCKED,
    13 | DOOR_LOCKED,
    12 | DOOR_LOCKED,
    14 | DOOR_LOCKED,
    34 | DOOR_LOCKED,
    24 | DOOR_LOCKED,
    31 | DOOR_LOCKED,
    22 | DOOR_LOCKED,
    0,
    0,
];

/// Default values of the shadowed roomdef bytes: beds occupied, benches
/// empty, the tunnel blocked.
pub static DEFAULT_SHADOW_BYTES: [u8; 16] = [
    crate::data::rooms::object::OCCUPIED_BED,
    crate::data::rooms::object::OCCUPIED_BED,
    crate::data::rooms::object::OCCUPIED_BED,
    crate::data::rooms::object::OCCUPIED_BED,
    crate::data::rooms::object::OCCUPIED_BED,
    crate::data::rooms::object::OCCUPIED_BED,
    crate::data::rooms::object::OCCUPIED_BED,
    crate::data::rooms::object::EMPTY_BENCH,
    crate::data::rooms::object::EMPTY_BENCH,
    crate::data::rooms::object::EMPTY_BENCH,
    crate::data::rooms::object::EMPTY_BENCH,
    crate::data::rooms::object::EMPTY_BENCH,
    crate::data::rooms::object::EMPTY_BENCH,
    crate::data::rooms::object::EMPTY_BENCH,
    crate::data::rooms::object::TUNNEL_JOIN,
    crate::data::rooms::object::COLLAPSED_TUNNEL_SW_NE,
];

/// The three searchlights and their sweeps.
pub fn default_searchlights() -> [SearchlightMovement; 3] {
    [
        SearchlightMovement {
            xy: Pos8::new(36, 82),
            counter: 44,
            direction: Direction::BottomRight,
            index: 0,
            pattern: 2,
        },
        SearchlightMovement {
            xy: Pos8::new(120, 82),
            counter: 24,
            direction: Direction::TopRight,
            index: 0,
            pattern: 1,
        },
        SearchlightMovement {
            xy: Pos8::new(60, 76),
            counter: 32,
            direction: Direction::BottomRight,
            index: 0,
            pattern: 0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_are_ordered_by_index() {
        let structs = default_character_structs();
        for (index, charstr) in structs.iter().enumerate() {
            assert_eq!(charstr.character() as usize, index);
            assert!(!charstr.on_screen());
        }
    }

    #[test]
    fn items_are_ordered_by_index() {
        let structs = default_item_structs();
        for (index, itemstr) in structs.iter().enumerate() {
            assert_eq!((itemstr.item_and_flags & 0x0F) as usize, index);
        }
    }

    #[test]
    fn locked_list_matches_the_door_table() {
        for &entry in DEFAULT_LOCKED_DOORS.iter() {
            let pair = entry & !DOOR_LOCKED;
            assert!((pair as usize) < crate::data::doors::DOOR_PAIRS);
        }
    }
}
