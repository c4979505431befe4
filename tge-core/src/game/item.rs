//! Items: pickup, drop, use actions, discovery and the inventory display.

use strum_macros::FromRepr;

use crate::data::item_bitmaps as bitmaps;
use crate::data::rooms::{ROOMDEF_30_BLOCKAGE, ROOMDEF_30_TUNNEL_JOIN, object};
use crate::data::walls::{FIRST_FENCE, WALLS};
use crate::game::context::Game;
use crate::game::message::Message;
use crate::game::vischar::{HERO, PURSUIT_PURSUE};
use crate::game::{Flow, characters, rooms};
use crate::math::{self, MapPos8, Pos8};
use crate::spectrum;

pub const ITEM_NONE: u8 = 255;
pub const ITEM_COUNT: usize = 16;

/// Flags packed into `item_and_flags`.
pub const ITEM_MASK: u8 = 0x0F;
pub const ITEM_FLAG_POISONED: u8 = 1 << 5;
/// Latches on first pickup; also marks the item as seen by hostiles.
pub const ITEM_FLAG_HELD: u8 = 1 << 7;

/// Flags packed into `room_and_flags`.
pub const ITEMSTRUCT_ROOM_MASK: u8 = 0x3F;
pub const ITEMSTRUCT_ROOM_NONE: u8 = 0x3F;
/// Both set while the item is close enough to the window to draw.
pub const ITEMSTRUCT_NEARBY_6: u8 = 1 << 6;
pub const ITEMSTRUCT_NEARBY_7: u8 = 1 << 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum Item {
    Wiresnips,
    Shovel,
    Lockpick,
    Papers,
    Torch,
    Bribe,
    Uniform,
    Food,
    Poison,
    RedKey,
    YellowKey,
    GreenKey,
    RedCrossParcel,
    Radio,
    Purse,
    Compass,
}

/// One item's state.
#[derive(Debug, Clone, Copy)]
pub struct ItemStruct {
    pub item_and_flags: u8,
    pub room_and_flags: u8,
    pub mappos: MapPos8,
    pub isopos: Pos8,
}

impl ItemStruct {
    pub const fn new(item: u8, room: u8, mappos: MapPos8) -> Self {
        ItemStruct {
            item_and_flags: item,
            room_and_flags: room & ITEMSTRUCT_ROOM_MASK,
            mappos,
            isopos: Pos8::new(0, 0),
        }
    }

    pub fn room(&self) -> u8 {
        let room = self.room_and_flags & ITEMSTRUCT_ROOM_MASK;
        if room == ITEMSTRUCT_ROOM_NONE { rooms::NONE } else { room }
    }

    pub fn in_world(&self) -> bool {
        self.room_and_flags & ITEMSTRUCT_ROOM_MASK != ITEMSTRUCT_ROOM_NONE
    }
}

/// Item bitmap, mask and pixel height. Every item bitmap is 16 wide.
pub(crate) fn item_sprite(item: u8) -> (&'static [u8], &'static [u8], u8) {
    let (bm, mk): (&[u8], &[u8]) = match Item::from_repr(item & ITEM_MASK) {
        Some(Item::Wiresnips) => (&bitmaps::BITMAP_WIRESNIPS, &bitmaps::MASK_WIRESNIPS),
        Some(Item::Shovel) => (&bitmaps::BITMAP_SHOVEL, &bitmaps::MASK_SHOVELKEY),
        Some(Item::Lockpick) => (&bitmaps::BITMAP_LOCKPICK, &bitmaps::MASK_LOCKPICK),
        Some(Item::Papers) => (&bitmaps::BITMAP_PAPERS, &bitmaps::MASK_PAPERS),
        Some(Item::Torch) => (&bitmaps::BITMAP_TORCH, &bitmaps::MASK_TORCH),
        Some(Item::Bribe) => (&bitmaps::BITMAP_BRIBE, &bitmaps::MASK_BRIBE),
        Some(Item::Uniform) => (&bitmaps::BITMAP_UNIFORM, &bitmaps::MASK_UNIFORM),
        Some(Item::Food) => (&bitmaps::BITMAP_FOOD, &bitmaps::MASK_FOOD),
        Some(Item::Poison) => (&bitmaps::BITMAP_POISON, &bitmaps::MASK_POISON),
        Some(Item::RedKey) | Some(Item::YellowKey) | Some(Item::GreenKey) => {
            (&bitmaps::BITMAP_KEY, &bitmaps::MASK_SHOVELKEY)
        }
        Some(Item::RedCrossParcel) => (&bitmaps::BITMAP_PARCEL, &bitmaps::MASK_PARCEL),
        Some(Item::Radio) => (&bitmaps::BITMAP_RADIO, &bitmaps::MASK_RADIO),
        Some(Item::Purse) => (&bitmaps::BITMAP_PURSE, &bitmaps::MASK_PURSE),
        Some(Item::Compass) | None => (&bitmaps::BITMAP_COMPASS, &bitmaps::MASK_COMPASS),
    };
    (bm, mk, (bm.len() / 2) as u8)
}

impl Game {
    /// Refresh an item's cached projected position from its map position.
    ///
    /// Both forms land in UDG units: the coarse projection is already
    /// there, the room-space projection after dividing by eight.
    pub(crate) fn calc_item_isopos(&mut self, item: usize) {
        let itemstr = &mut self.item_structs[item];
        if itemstr.room() == rooms::OUTDOORS {
            let iso = math::project_coarse(&itemstr.mappos);
            itemstr.isopos = Pos8::new(iso.x as u8, iso.y as u8);
        } else {
            let pos = itemstr.mappos;
            let room_pos =
                crate::math::MapPos16::new(pos.u as u16, pos.v as u16, pos.w as u16);
            let iso = math::project(&room_pos);
            itemstr.isopos = Pos8::new((iso.x / 8) as u8, (iso.y / 8) as u8);
        }
    }

    /// Mark which items are close enough to the window to draw (and for
    /// the dogs to smell).
    pub(crate) fn mark_nearby_items(&mut self) {
        let map_x = self.map_position.x as i32;
        let map_y = self.map_position.y as i32;

        for index in 0..self.item_structs.len() {
            let itemstr = &mut self.item_structs[index];
            itemstr.room_and_flags &= !(ITEMSTRUCT_NEARBY_6 | ITEMSTRUCT_NEARBY_7);

            if itemstr.room() != self.room_index {
                continue;
            }
            let x = itemstr.isopos.x as i32;
            let y = itemstr.isopos.y as i32;
            let near = if self.room_index == rooms::OUTDOORS {
                x >= map_x - 2
                    && x < map_x + self.columns as i32
                    && y >= map_y - 2
                    && y < map_y + self.rows as i32
            } else {
                true
            };
            if near {
                itemstr.room_and_flags |= ITEMSTRUCT_NEARBY_6 | ITEMSTRUCT_NEARBY_7;
            }
        }
    }

    /// Find an item within reach of the hero: one map unit outdoors, six
    /// room units indoors.
    pub(crate) fn find_nearby_item(&self) -> Option<usize> {
        let radius: i32 = if self.room_index == rooms::OUTDOORS { 1 } else { 6 };
        let hero = self.hero_mappos;

        (0..self.item_structs.len()).find(|&i| {
            let itemstr = &self.item_structs[i];
            itemstr.room() == self.room_index
                && (itemstr.mappos.u as i32 - hero.u as i32).abs() <= radius
                && (itemstr.mappos.v as i32 - hero.v as i32).abs() <= radius
        })
    }

    /// Transfer a nearby item into the inventory.
    pub(crate) fn pick_up_item(&mut self) -> Flow {
        if self.items_held[0] != ITEM_NONE && self.items_held[1] != ITEM_NONE {
            return Ok(()); // Hands full.
        }
        let Some(index) = self.find_nearby_item() else {
            return Ok(());
        };

        let item = self.item_structs[index].item_and_flags & ITEM_MASK;
        let slot = if self.items_held[0] == ITEM_NONE { 0 } else { 1 };
        self.items_held[slot] = item;

        let itemstr = &mut self.item_structs[index];
        if itemstr.item_and_flags & ITEM_FLAG_HELD == 0 {
            // First pickup of this item is worth something.
            itemstr.item_and_flags |= ITEM_FLAG_HELD;
            self.increase_morale_by_5_score_by_5();
        }
        let itemstr = &mut self.item_structs[index];
        itemstr.room_and_flags = 0;
        itemstr.isopos = Pos8::new(0, 0);

        debug!("hero picks up item {item}");
        self.draw_all_items();
        Ok(())
    }

    /// Drop the first inventory slot at the hero's feet.
    pub(crate) fn drop_item(&mut self) {
        let item = self.items_held[0];
        if item == ITEM_NONE {
            return;
        }

        // Dropping the uniform reverts the hero's disguise.
        if item == Item::Uniform as u8 {
            self.vischars[HERO].mi.sprite_base = crate::data::sprites::SPRITE_PRISONER;
        }

        self.items_held[0] = self.items_held[1];
        self.items_held[1] = ITEM_NONE;
        self.draw_all_items();
        self.drop_item_tail(item as usize);
    }

    /// Place a dropped item into the world at the hero's position.
    pub(crate) fn drop_item_tail(&mut self, item: usize) {
        let hero_room = self.vischars[HERO].room;
        let hero_pos = if hero_room == rooms::OUTDOORS {
            math::scale_mappos_down(&self.vischars[HERO].mi.mappos)
        } else {
            let p = self.vischars[HERO].mi.mappos;
            MapPos8::new(p.u as u8, p.v as u8, 0)
        };

        let itemstr = &mut self.item_structs[item];
        itemstr.room_and_flags = hero_room & ITEMSTRUCT_ROOM_MASK;
        itemstr.mappos = hero_pos;
        self.calc_item_isopos(item);
        debug!("item {item} dropped in room {hero_room}");
    }

    /// Use the item in the given inventory slot.
    pub(crate) fn use_item(&mut self, slot: usize) -> Flow {
        let item = self.items_held[slot];
        if item == ITEM_NONE {
            return Ok(());
        }
        let Some(item) = Item::from_repr(item & ITEM_MASK) else {
            return Ok(());
        };

        debug!("hero uses {item:?}");
        match item {
            Item::Wiresnips => self.action_wiresnips(),
            Item::Lockpick => self.action_lockpick(),
            Item::RedKey => self.action_key(rooms::REDKEY),
            Item::YellowKey => self.action_key(rooms::PAPERS),
            Item::GreenKey => self.action_key(rooms::UNIFORM),
            Item::Papers => self.action_papers()?,
            Item::Uniform => self.action_uniform(),
            Item::Shovel => self.action_shovel(),
            Item::Poison => self.action_poison(),
            Item::Bribe => self.action_bribe(),
            Item::RedCrossParcel => self.action_red_cross_parcel(),
            _ => {}
        }
        Ok(())
    }

    /// Begin cutting the nearest stretch of fence.
    fn action_wiresnips(&mut self) {
        if self.room_index != rooms::OUTDOORS {
            return;
        }
        if self.nearest_fence().is_none() {
            return;
        }
        self.queue_message(Message::CuttingTheWire);
        self.player_locked_out_until = self.game_counter.wrapping_add(96);
        self.door_being_lockpicked = None;
    }

    /// The fence segment the hero stands beside, if any.
    pub(crate) fn nearest_fence(&self) -> Option<usize> {
        let hero = self.hero_mappos;
        WALLS[FIRST_FENCE..].iter().position(|fence| {
            hero.u + 2 >= fence.minx
                && hero.u <= fence.maxx.saturating_add(2)
                && hero.v + 2 >= fence.miny
                && hero.v <= fence.maxy.saturating_add(2)
        })
    }

    /// Begin picking the nearest locked door.
    fn action_lockpick(&mut self) {
        let Some(slot) = self.nearest_locked_door() else {
            return;
        };
        self.door_being_lockpicked = Some(slot);
        self.player_locked_out_until = self.game_counter.wrapping_add(255);
        self.queue_message(Message::PickingTheLock);
    }

    /// The locked-door list slot for a locked door near the hero.
    pub(crate) fn nearest_locked_door(&self) -> Option<usize> {
        use crate::data::doors::{DOOR_LOCKED, DOORS};

        for (slot, &entry) in self.locked_doors.iter().enumerate() {
            if entry & DOOR_LOCKED == 0 {
                continue;
            }
            let pair = (entry & !DOOR_LOCKED) as usize;
            if pair >= crate::data::doors::DOOR_PAIRS {
                continue;
            }
            for half in [pair * 2, pair * 2 + 1] {
                let door = &DOORS[half];
                let in_range = if self.room_index == rooms::OUTDOORS {
                    let hu = self.hero_mappos.u as i32 * 2;
                    let hv = self.hero_mappos.v as i32 * 2;
                    (hu - door.mappos.u as i32).abs() <= 8
                        && (hv - door.mappos.v as i32).abs() <= 8
                } else {
                    Game::door_half_room(half) == self.room_index
                        && (self.hero_mappos.u as i32 - door.mappos.u as i32).abs() <= 8
                        && (self.hero_mappos.v as i32 - door.mappos.v as i32).abs() <= 8
                };
                if in_range {
                    return Some(slot);
                }
            }
        }
        None
    }

    /// A key opens a nearby locked door only when the door leads to the
    /// key's own room.
    fn action_key(&mut self, room_of_key: u8) {
        use crate::data::doors::{DOOR_LOCKED, DOORS};

        let Some(slot) = self.nearest_locked_door() else {
            return;
        };
        let pair = (self.locked_doors[slot] & !DOOR_LOCKED) as usize;
        let opens = [pair * 2, pair * 2 + 1]
            .iter()
            .any(|&half| DOORS[half].room() == room_of_key);
        let message = if opens {
            self.unlock_door(slot);
            Message::ItIsOpen
        } else {
            Message::IncorrectKey
        };
        self.queue_message(message);
    }

    /// Presenting papers at the main gate.
    fn action_papers(&mut self) -> Flow {
        let hero = self.hero_mappos;
        let at_gate = self.room_index == rooms::OUTDOORS
            && (105..=109).contains(&hero.u)
            && (73..=75).contains(&hero.v);
        if !at_gate {
            return Ok(());
        }

        if self.vischars[HERO].mi.sprite_base == crate::data::sprites::SPRITE_GUARD {
            // Waved through: appear on the far side of the gate.
            self.vischars[HERO].room = rooms::OUTDOORS;
            self.transition(HERO, MapPos8::new(222, 146, 0))
        } else {
            self.solitary()
        }
    }

    fn action_uniform(&mut self) {
        self.vischars[HERO].mi.sprite_base = crate::data::sprites::SPRITE_GUARD;
    }

    /// Dig out the collapsed tunnel.
    fn action_shovel(&mut self) {
        if self.room_index != rooms::TUNNEL_30 {
            return;
        }
        if self.get_roomdef(rooms::TUNNEL_30, ROOMDEF_30_BLOCKAGE)
            != object::COLLAPSED_TUNNEL_SW_NE
        {
            return;
        }
        self.set_roomdef(rooms::TUNNEL_30, ROOMDEF_30_TUNNEL_JOIN, object::TUNNEL_JOIN);
        self.set_roomdef(
            rooms::TUNNEL_30,
            ROOMDEF_30_BLOCKAGE,
            object::TUNNEL_OPEN_SW_NE,
        );
        self.setup_room_and_plot();
        self.increase_morale_by_10_score_by_50();
    }

    /// Taint the food.
    fn action_poison(&mut self) {
        let food = &mut self.item_structs[Item::Food as usize];
        if food.item_and_flags & ITEM_FLAG_POISONED != 0 {
            return;
        }
        food.item_and_flags |= ITEM_FLAG_POISONED;
        self.item_attributes[Item::Food as usize] =
            spectrum::attribute::PURPLE_OVER_BLACK;
        self.increase_morale_by_10_score_by_50();
    }

    /// Wave the bribe at the nearest hostile.
    fn action_bribe(&mut self) {
        for slot in 1..self.vischars.len() {
            let vischar = &self.vischars[slot];
            if vischar.is_empty() {
                continue;
            }
            if vischar.character >= characters::GUARD_1
                && vischar.character <= characters::GUARD_15
            {
                self.bribed_character = vischar.character;
                self.vischars[slot].flags =
                    (self.vischars[slot].flags & !0x3F) | PURSUIT_PURSUE;
                debug!("character {} offered the bribe", self.bribed_character);
                return;
            }
        }
    }

    /// Open the red cross parcel, revealing its contents.
    fn action_red_cross_parcel(&mut self) {
        let contents = self.red_cross_parcel_current_contents;

        // The parcel itself leaves the inventory and the world.
        let parcel = Item::RedCrossParcel as u8;
        if self.items_held[0] == parcel {
            self.items_held[0] = self.items_held[1];
            self.items_held[1] = ITEM_NONE;
        } else if self.items_held[1] == parcel {
            self.items_held[1] = ITEM_NONE;
        }
        self.item_structs[parcel as usize].room_and_flags = ITEMSTRUCT_ROOM_NONE;

        if contents != ITEM_NONE {
            self.red_cross_parcel_current_contents = ITEM_NONE;
            self.drop_item_tail(contents as usize);
            self.queue_message(Message::YouOpenTheBox);
            self.increase_morale_by_10_score_by_50();
        }
        self.draw_all_items();
    }

    /// Does a room contain an item that does not belong there?
    pub(crate) fn is_item_discoverable_interior(&self, room: u8) -> Option<usize> {
        (0..self.item_structs.len()).find(|&i| {
            let itemstr = &self.item_structs[i];
            itemstr.room() == room
                && room != rooms::NONE
                && crate::data::defaults::default_item_room(i) != room
                && (itemstr.item_and_flags & ITEM_MASK) != Item::RedCrossParcel as u8
        })
    }

    /// Hostile discovery of misplaced items: the camp goes on alert and
    /// the item returns to its default position.
    pub(crate) fn is_item_discoverable(&mut self) {
        let room = self.room_index;
        if let Some(index) = self.is_item_discoverable_interior(room) {
            self.hostiles_pursue();
            self.item_discovered(index);
        }
    }

    /// Return an item to its default location.
    pub(crate) fn item_discovered(&mut self, index: usize) {
        self.queue_message(Message::ItemDiscovered);
        self.decrease_morale(5);

        let default = crate::data::defaults::default_item(index);
        let itemstr = &mut self.item_structs[index];
        itemstr.item_and_flags &= !ITEM_FLAG_HELD;
        itemstr.room_and_flags = default.room_and_flags & ITEMSTRUCT_ROOM_MASK;
        itemstr.mappos = default.mappos;
        self.calc_item_isopos(index);

        // Seize it from the inventory if carried.
        let item = (self.item_structs[index].item_and_flags & ITEM_MASK) as u8;
        if self.items_held[0] == item {
            self.items_held[0] = self.items_held[1];
            self.items_held[1] = ITEM_NONE;
            self.draw_all_items();
        } else if self.items_held[1] == item {
            self.items_held[1] = ITEM_NONE;
            self.draw_all_items();
        }
    }

    /// Repaint both inventory icons on the status bar.
    pub(crate) fn draw_all_items(&mut self) {
        self.draw_item(self.items_held[0], 7);
        self.draw_item(self.items_held[1], 10);
    }

    /// Draw one inventory icon at the given status-bar column.
    fn draw_item(&mut self, item: u8, column: usize) {
        use crate::spectrum::screen_offset;

        // Wipe the two-cell icon area first.
        let base = screen_offset(column, 20 * 8);
        self.screen_wipe(base, 2, 16);

        if item == ITEM_NONE {
            self.speccy.draw(None);
            return;
        }

        let (bitmap, _mask, height) = item_sprite(item);
        self.plot_bitmap(bitmap, base, 2, height);

        // Colour the icon cells.
        let attr = self.item_attributes[(item & ITEM_MASK) as usize];
        let screen = self.speccy.screen();
        screen.attributes[20 * 32 + column] = attr;
        screen.attributes[20 * 32 + column + 1] = attr;
        screen.attributes[21 * 32 + column] = attr;
        screen.attributes[21 * 32 + column + 1] = attr;
        self.speccy.draw(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_common;

    #[test]
    fn pick_up_then_drop_round_trips() {
        let mut game = test_common::game();
        test_common::place_hero_in_room(&mut game, rooms::CRATE, MapPos8::new(62, 48, 0));

        let before = game.item_structs[Item::Shovel as usize];
        game.pick_up_item().unwrap();
        assert_eq!(game.items_held[0], Item::Shovel as u8);
        assert_eq!(game.item_structs[Item::Shovel as usize].room_and_flags, 0);

        game.drop_item();
        let after = game.item_structs[Item::Shovel as usize];
        assert_eq!(game.items_held[0], ITEM_NONE);
        assert_eq!(after.room(), before.room());
        assert_eq!(after.mappos, before.mappos);
        // HELD latches on first pickup.
        assert_ne!(after.item_and_flags & ITEM_FLAG_HELD, 0);
    }

    #[test]
    fn first_pickup_awards_morale_and_score() {
        let mut game = test_common::game();
        test_common::place_hero_in_room(&mut game, rooms::CRATE, MapPos8::new(62, 48, 0));
        game.morale = 50;

        game.pick_up_item().unwrap();
        assert_eq!(game.morale, 55);
        assert_eq!(game.score(), 5);

        // Second pickup of the same item awards nothing.
        game.drop_item();
        game.pick_up_item().unwrap();
        assert_eq!(game.morale, 55);
        assert_eq!(game.score(), 5);
    }

    #[test]
    fn slot_zero_fills_before_slot_one() {
        let mut game = test_common::game();
        test_common::place_hero_in_room(&mut game, rooms::CRATE, MapPos8::new(62, 48, 0));

        game.pick_up_item().unwrap();
        assert_ne!(game.items_held[0], ITEM_NONE);
        assert_eq!(game.items_held[1], ITEM_NONE);
    }

    #[test]
    fn poison_taints_the_food() {
        let mut game = test_common::game();
        game.items_held[0] = Item::Poison as u8;
        game.use_item(0).unwrap();
        let food = &game.item_structs[Item::Food as usize];
        assert_ne!(food.item_and_flags & ITEM_FLAG_POISONED, 0);
        assert_eq!(
            game.item_attributes[Item::Food as usize],
            spectrum::attribute::PURPLE_OVER_BLACK
        );
    }

    #[test]
    fn wrong_papers_at_the_gate_mean_solitary() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(107, 74, 0));
        game.items_held[0] = Item::Papers as u8;

        let result = game.use_item(0);
        assert!(matches!(result, Err(crate::game::Exit::Transitioned)));
        assert!(game.in_solitary);
        assert_eq!(game.room(), rooms::SOLITARY);
    }

    #[test]
    fn papers_in_uniform_pass_the_gate() {
        let mut game = test_common::game();
        test_common::place_hero_outdoors(&mut game, MapPos8::new(107, 74, 0));
        game.items_held[0] = Item::Papers as u8;
        game.vischars[crate::game::vischar::HERO].mi.sprite_base =
            crate::data::sprites::SPRITE_GUARD;

        let result = game.use_item(0);
        assert!(matches!(result, Err(crate::game::Exit::Transitioned)));
        assert!(!game.in_solitary);
        assert_eq!(game.room(), rooms::OUTDOORS);
        // Deposited beyond the gate.
        assert_eq!(game.vischars[crate::game::vischar::HERO].mi.mappos.u / 8, 111);
    }

    #[test]
    fn misplaced_items_are_discovered_and_returned() {
        let mut game = test_common::game();
        // Drop the shovel in the wrong room.
        let shovel = Item::Shovel as usize;
        game.item_structs[shovel].room_and_flags = rooms::TORCH;
        game.room_index = rooms::TORCH;

        game.is_item_discoverable();

        let itemstr = &game.item_structs[shovel];
        assert_eq!(itemstr.room(), rooms::CRATE);
        assert_eq!(itemstr.mappos, MapPos8::new(62, 48, 0));
    }
}
