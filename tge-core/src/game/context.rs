//! The game state: one structure owning every subsystem's variables plus
//! the virtual Spectrum being driven.

use anyhow::Result;

use crate::data::defaults;
use crate::data::rooms::MAX_INTERIOR_MASKS;
use crate::data::{Bounds, MaskDef};
use crate::game::character::CharacterStruct;
use crate::game::item::ItemStruct;
use crate::game::message::Messages;
use crate::game::route::Route;
use crate::game::searchlight::SearchlightMovement;
use crate::game::vischar::{MovableItem, Vischar};
use crate::game::{InputDevice, characters, rooms};
use crate::graphics::plotter::SpritePlotter;
use crate::graphics::zoombox::Zoombox;
use crate::math::{MapPos8, Pos8};
use crate::spectrum::{SCREEN_HEIGHT, SCREEN_WIDTH, ZxSpectrum};

pub const MASK_BUFFER_WIDTHBYTES: usize = 4;
pub const MASK_BUFFER_ROWBYTES: usize = MASK_BUFFER_WIDTHBYTES * 8;
pub const MASK_BUFFER_HEIGHT: usize = 5;
pub const MASK_BUFFER_LENGTH: usize = MASK_BUFFER_ROWBYTES * MASK_BUFFER_HEIGHT;

pub const VISCHARS_LENGTH: usize = 8;
pub const LOCKED_DOORS_LENGTH: usize = 11;

pub const MORALE_MAX: u8 = 112;
pub const CLOCK_LIMIT: u8 = 140;

/// A map position scratch pad viewed either at fine or byte scale.
///
/// The plotters stash a fine position here while the AI move-towards path
/// reads it back at byte scale; both views alias the same storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavedMappos {
    pub u: u16,
    pub v: u16,
    pub w: u16,
}

impl SavedMappos {
    pub fn set_coarse(&mut self, pos: MapPos8) {
        self.u = pos.u as u16;
        self.v = pos.v as u16;
        self.w = pos.w as u16;
    }

    pub fn coarse(&self) -> MapPos8 {
        MapPos8::new(self.u as u8, self.v as u8, self.w as u8)
    }
}

/// Holds the current state of the game.
pub struct Game {
    /// The virtual Spectrum being driven.
    pub(crate) speccy: Box<dyn ZxSpectrum>,

    /// Screen dimensions in UDGs.
    pub(crate) width: usize,
    pub(crate) height: usize,
    /// Game window dimensions in UDGs. The buffer is one unit larger in
    /// both directions than the 23x16 area shown on screen, allowing for
    /// sub-character scrolling.
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    /// Game window dimensions in supertiles, rounded up with a border.
    pub(crate) st_columns: usize,
    pub(crate) st_rows: usize,

    /// The vischar slot being processed (was register IY).
    pub(crate) current_vischar: usize,

    /// Overrides for the mutable bytes of certain room definitions.
    pub(crate) roomdef_shadow_bytes: [u8; 16],

    /// The hero's current room, or `rooms::OUTDOORS`.
    pub(crate) room_index: u8,
    /// Door index consulted by the lock check.
    pub(crate) current_door: u8,

    pub(crate) movable_items: [MovableItem; 3],
    pub(crate) character_structs: [CharacterStruct; characters::LIMIT as usize],
    pub(crate) item_structs: [ItemStruct; 16],
    pub(crate) messages: Messages,

    /// 256 bit-reversed bytes used by the sprite flip paths.
    pub(crate) reversed: [u8; 256],

    pub(crate) vischars: [Vischar; VISCHARS_LENGTH],

    /// Foreground mask scratch: scenery is cut away from sprites here.
    pub(crate) mask_buffer: [u8; MASK_BUFFER_LENGTH],

    /// Scratch map position shared between the plotters (fine view) and
    /// the AI move-towards path (byte view).
    pub(crate) saved_mappos: SavedMappos,

    /// Map position of the sprite being masked.
    pub(crate) mappos_stash: MapPos8,
    /// Screen position (UDG units) of the sprite being plotted.
    pub(crate) isopos: Pos8,
    /// Flip flag of the sprite being plotted.
    pub(crate) sprite_index: u8,

    /// The hero's map position, stashed for door-range tests.
    pub(crate) hero_mappos: MapPos8,

    /// Scroll offset of the visible map window.
    pub(crate) map_position: Pos8,

    pub(crate) searchlight_state: u8,
    /// Ticks remaining before the beam can drain morale again.
    pub(crate) searchlight_morale_cooldown: u8,

    /// Current room definition, expanded by setup_room.
    pub(crate) roomdef_dimensions_index: u8,
    pub(crate) roomdef_object_bounds_count: u8,
    pub(crate) roomdef_object_bounds: [Bounds; 4],
    pub(crate) interior_doors: [u8; 4],
    pub(crate) interior_mask_data_count: u8,
    pub(crate) interior_mask_data: [MaskDef; MAX_INTERIOR_MASKS],

    /// Height of the item bitmap being plotted.
    pub(crate) item_height: u8,

    /// The two inventory slots; slot 0 fills first.
    pub(crate) items_held: [u8; 2],

    /// Round-robin cursor over off-screen characters.
    pub(crate) character_index: u8,

    pub(crate) game_counter: u8,
    pub(crate) bell: u8,
    pub(crate) score_digits: [u8; 5],
    pub(crate) hero_in_breakfast: bool,
    pub(crate) red_flag: bool,
    /// Countdown until CPU control of the hero is assumed; reset to 31 by
    /// any input event.
    pub(crate) automatic_player_counter: u8,
    pub(crate) in_solitary: bool,
    pub(crate) morale_exhausted: bool,
    pub(crate) morale: u8,
    /// The game clock; increments every 64 ticks, wraps at 140. 100+ is
    /// night time.
    pub(crate) clock: u8,
    /// Selects whether character events resolve through character_index
    /// or through the current vischar.
    pub(crate) entered_move_a_character: bool,
    pub(crate) hero_in_bed: bool,
    pub(crate) displayed_morale: u8,
    /// Screen pixel offset where the morale flag was last plotted.
    pub(crate) moraleflag_screen_offset: usize,
    /// Index into locked_doors of the lock being picked.
    pub(crate) door_being_lockpicked: Option<usize>,
    /// Game time at which player control returns after lock picking or
    /// wire cutting.
    pub(crate) player_locked_out_until: u8,
    pub(crate) day_or_night: bool,
    pub(crate) red_cross_parcel_current_contents: u8,

    /// Four-phase scroll cursor used only by move_map.
    pub(crate) move_map_y: u8,
    pub(crate) game_window_offset: Pos8,

    pub(crate) zoombox: Zoombox,
    pub(crate) game_window_attribute: u8,

    pub(crate) searchlights: [SearchlightMovement; 3],

    pub(crate) bribed_character: u8,

    pub(crate) prng_index: u8,

    pub(crate) food_discovered_counter: u8,

    pub(crate) item_attributes: [u8; 16],

    pub(crate) plotter: SpritePlotter,

    /// Doors which are currently locked, DOOR_LOCKED set per entry.
    pub(crate) locked_doors: [u8; LOCKED_DOORS_LENGTH],

    pub(crate) chosen_input_device: InputDevice,

    /// One tile index per UDG of the window.
    pub(crate) tile_buf: Vec<u8>,
    /// The expanded window: eight bytes per tile row, stored linearly.
    pub(crate) window_buf: Vec<u8>,
    pub(crate) window_buf_stride: usize,
    /// One supertile index per 4x4-UDG area.
    pub(crate) map_buf: Vec<u8>,
}

impl Game {
    /// Build a fresh game over the given virtual Spectrum, with every
    /// buffer allocated and the default world installed.
    pub fn new(speccy: Box<dyn ZxSpectrum>) -> Result<Game> {
        let columns = 24usize;
        let rows = 17usize;
        let st_columns = 7usize;
        let st_rows = 5usize;

        let window_buf_stride = columns * 8;
        // Eight bytes of padding absorb plotter overruns on the final row.
        let window_buf_size = window_buf_stride * rows + 8;

        let mut game = Game {
            speccy,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            columns,
            rows,
            st_columns,
            st_rows,
            current_vischar: 0,
            roomdef_shadow_bytes: defaults::DEFAULT_SHADOW_BYTES,
            room_index: rooms::NONE,
            current_door: 0,
            movable_items: defaults::default_movable_items(),
            character_structs: defaults::default_character_structs(),
            item_structs: defaults::default_item_structs(),
            messages: Messages::default(),
            reversed: [0; 256],
            vischars: Default::default(),
            mask_buffer: [0; MASK_BUFFER_LENGTH],
            saved_mappos: SavedMappos::default(),
            mappos_stash: MapPos8::default(),
            isopos: Pos8::default(),
            sprite_index: 0,
            hero_mappos: MapPos8::default(),
            map_position: Pos8::default(),
            searchlight_state: crate::game::searchlight::STATE_SEARCHING,
            searchlight_morale_cooldown: 0,
            roomdef_dimensions_index: 0,
            roomdef_object_bounds_count: 0,
            roomdef_object_bounds: [Bounds::default(); 4],
            interior_doors: [0; 4],
            interior_mask_data_count: 0,
            interior_mask_data: [defaults::EMPTY_MASKDEF; MAX_INTERIOR_MASKS],
            item_height: 0,
            items_held: [crate::game::item::ITEM_NONE; 2],
            character_index: 0,
            game_counter: 0,
            bell: crate::game::alarm::BELL_STOP,
            score_digits: [0; 5],
            hero_in_breakfast: false,
            red_flag: false,
            automatic_player_counter: 0,
            in_solitary: false,
            morale_exhausted: false,
            morale: MORALE_MAX,
            clock: 0,
            entered_move_a_character: false,
            hero_in_bed: false,
            displayed_morale: MORALE_MAX,
            moraleflag_screen_offset: crate::spectrum::screen_offset(2, 16),
            door_being_lockpicked: None,
            player_locked_out_until: 0,
            day_or_night: false,
            red_cross_parcel_current_contents: crate::game::item::ITEM_NONE,
            move_map_y: 0,
            game_window_offset: Pos8::default(),
            zoombox: Zoombox::default(),
            game_window_attribute: 0,
            searchlights: defaults::default_searchlights(),
            bribed_character: characters::NONE,
            prng_index: 0,
            food_discovered_counter: 0,
            item_attributes: defaults::DEFAULT_ITEM_ATTRIBUTES,
            plotter: SpritePlotter::default(),
            locked_doors: defaults::DEFAULT_LOCKED_DOORS,
            chosen_input_device: InputDevice::default(),
            tile_buf: vec![0; columns * rows],
            window_buf: vec![0; window_buf_size],
            window_buf_stride,
            map_buf: vec![0; st_columns * st_rows],
        };

        ensure!(
            game.speccy.screen().pixels.len() == crate::spectrum::SCREEN_BITMAP_LENGTH,
            "host screen has the wrong shape"
        );

        game.room_index = rooms::OUTDOORS;
        for index in 0..game.item_structs.len() {
            game.calc_item_isopos(index);
        }
        Ok(game)
    }

    /// Direct access to the host, mainly for embedders and tests.
    pub fn speccy_mut(&mut self) -> &mut dyn ZxSpectrum {
        self.speccy.as_mut()
    }

    pub fn room(&self) -> u8 {
        self.room_index
    }

    pub fn morale(&self) -> u8 {
        self.morale
    }

    pub fn clock(&self) -> u8 {
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use crate::test_common;

    #[test]
    fn new_game_installs_defaults() {
        let game = test_common::game();
        assert_eq!(game.morale, super::MORALE_MAX);
        assert_eq!(game.items_held, [crate::game::item::ITEM_NONE; 2]);
        assert_eq!(game.locked_doors[0] & !crate::data::doors::DOOR_LOCKED, 0);
        assert_eq!(game.tile_buf.len(), 24 * 17);
        assert_eq!(game.window_buf.len(), 24 * 8 * 17 + 8);
        assert_eq!(game.map_buf.len(), 7 * 5);
    }
}
