//! Shared test scaffolding: a headless virtual Spectrum and game
//! placement helpers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Once;

use crate::game::context::Game;
use crate::game::rooms;
use crate::game::vischar::HERO;
use crate::math::{MapPos8, Pos8};
use crate::spectrum::{DirtyRect, SleepOutcome, ZxScreen, ZxSpectrum};

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("debug"),
        )
        .is_test(true)
        .try_init();
    });
}

type KeyMap = Rc<RefCell<HashMap<u16, u8>>>;

thread_local! {
    /// The key map of the most recently built host on this thread, so
    /// tests can press keys without holding a handle.
    static CURRENT_KEYS: RefCell<Option<KeyMap>> = const { RefCell::new(None) };
}

/// A headless host: instant sleeps, scripted key presses.
pub struct TestSpectrum {
    screen: ZxScreen,
    /// Port -> active mask of held keys.
    keys: KeyMap,
    pub sleeps: u32,
    pub draws: u32,
    /// Cancel the nth sleep (and all after it), if set.
    cancel_after: Option<u32>,
}

impl TestSpectrum {
    pub fn new() -> Self {
        let keys: KeyMap = Rc::new(RefCell::new(HashMap::new()));
        CURRENT_KEYS.with(|current| *current.borrow_mut() = Some(keys.clone()));
        TestSpectrum {
            screen: ZxScreen::default(),
            keys,
            sleeps: 0,
            draws: 0,
            cancel_after: None,
        }
    }
}

impl Default for TestSpectrum {
    fn default() -> Self {
        Self::new()
    }
}

impl ZxSpectrum for TestSpectrum {
    fn screen(&mut self) -> &mut ZxScreen {
        &mut self.screen
    }

    fn read_port(&mut self, port: u16) -> u8 {
        // Keyboard rows are active low; unpressed reads all ones.
        match self.keys.borrow().get(&port) {
            Some(&mask) => !mask,
            None if port == crate::spectrum::port::KEMPSTON_JOYSTICK => 0,
            None => 0xFF,
        }
    }

    fn write_port(&mut self, _port: u16, _byte: u8) {}

    fn stamp(&mut self) {}

    fn sleep(&mut self, _microseconds: u32) -> SleepOutcome {
        let cancelled = self.cancel_after.is_some_and(|n| self.sleeps >= n);
        self.sleeps += 1;
        if cancelled { SleepOutcome::Cancelled } else { SleepOutcome::Completed }
    }

    fn draw(&mut self, _rect: Option<DirtyRect>) {
        self.draws += 1;
    }
}

/// A fresh game over a headless host.
pub fn game() -> Game {
    setup();
    Game::new(Box::new(TestSpectrum::new())).expect("game construction")
}

/// A game whose host cancels from the nth sleep onwards.
pub fn game_with_cancel_after(n: u32) -> Game {
    setup();
    let mut host = TestSpectrum::new();
    host.cancel_after = Some(n);
    Game::new(Box::new(host)).expect("game construction")
}

/// Hold a key down on the current thread's test host.
pub fn press_key(_game: &mut Game, port: u16, mask: u8) {
    CURRENT_KEYS.with(|current| {
        if let Some(keys) = current.borrow().as_ref() {
            *keys.borrow_mut().entry(port).or_insert(0) |= mask;
        }
    });
}

/// Stand the hero outdoors at a map position, window centred on him.
pub fn place_hero_outdoors(game: &mut Game, mappos: MapPos8) {
    game.setup_play_tables();
    let hero = &mut game.vischars[HERO];
    hero.flags = 0;
    hero.character = 0;
    hero.room = rooms::OUTDOORS;
    hero.mi.mappos = mappos.to_fine();
    game.room_index = rooms::OUTDOORS;
    game.calc_vischar_isopos(HERO);
    game.hero_mappos = mappos;

    let hero = &game.vischars[HERO];
    let x = ((hero.isopos.x / 8) as i32 - 11).clamp(0, 192);
    let y = ((hero.isopos.y / 8) as i32 - 6).clamp(0, 124);
    game.map_position = Pos8::new(x as u8, y as u8);
    game.get_supertiles();
}

/// Stand the hero inside a room at a room-local position.
pub fn place_hero_in_room(game: &mut Game, room: u8, mappos: MapPos8) {
    game.setup_play_tables();
    let hero = &mut game.vischars[HERO];
    hero.flags = 0;
    hero.character = 0;
    hero.room = room;
    hero.mi.mappos =
        crate::math::MapPos16::new(mappos.u as u16, mappos.v as u16, mappos.w as u16);
    game.room_index = room;
    game.map_position = Pos8::new(116, 234);
    game.calc_vischar_isopos(HERO);
    game.hero_mappos = mappos;
    game.setup_room();
    game.plot_interior_tiles();
}
