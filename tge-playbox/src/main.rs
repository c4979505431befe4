//! An interactive driver for the engine: a minifb window standing in
//! for the ZX Spectrum's display, keyboard and speaker.

use std::time::{Duration, Instant};

use minifb::{Key, Scale, Window, WindowOptions};

use tge_core::spectrum::{
    DirtyRect, SCREEN_BITMAP_LENGTH, SleepOutcome, ZxScreen, ZxSpectrum, port, screen_offset,
};
use tge_core::Game;

const WIDTH: usize = 256;
const HEIGHT: usize = 192;

/// The Spectrum palette, normal then bright.
static PALETTE: [u32; 16] = [
    0x000000, 0x0000D7, 0xD70000, 0xD700D7, 0x00D700, 0x00D7D7, 0xD7D700, 0xD7D7D7,
    0x000000, 0x0000FF, 0xFF0000, 0xFF00FF, 0x00FF00, 0x00FFFF, 0xFFFF00, 0xFFFFFF,
];

struct MinifbSpectrum {
    screen: ZxScreen,
    window: Window,
    frame: Vec<u32>,
    stamped: Instant,
    quit: bool,
}

impl MinifbSpectrum {
    fn new() -> Self {
        let mut window = Window::new(
            "the great escape",
            WIDTH,
            HEIGHT,
            WindowOptions { scale: Scale::X2, ..WindowOptions::default() },
        )
        .expect("window creation");
        window.set_target_fps(50);

        MinifbSpectrum {
            screen: ZxScreen::default(),
            window,
            frame: vec![0; WIDTH * HEIGHT],
            stamped: Instant::now(),
            quit: false,
        }
    }

    /// Expand the 1bpp pixels and attribute cells into the RGB frame.
    fn render(&mut self) {
        for y in 0..HEIGHT {
            for column in 0..32 {
                let bits = self.screen.pixels[screen_offset(column, y)];
                let attr = self.screen.attributes[(y / 8) * 32 + column];
                let bright = (attr & 0x40) >> 3;
                let ink = PALETTE[((attr & 0x07) | bright) as usize];
                let paper = PALETTE[(((attr >> 3) & 0x07) | bright) as usize];
                for bit in 0..8 {
                    let lit = bits & (0x80 >> bit) != 0;
                    self.frame[y * WIDTH + column * 8 + bit] =
                        if lit { ink } else { paper };
                }
            }
        }
    }

    fn keys_to_row(&self, row: u16) -> u8 {
        let pressed = |key: Key| self.window.is_key_down(key);
        let mut bits = 0u8;
        let mut set = |condition: bool, bit: u8| {
            if condition {
                bits |= bit;
            }
        };
        match row {
            port::KEYBOARD_SHIFTZXCV => {
                set(pressed(Key::LeftShift) || pressed(Key::RightShift), 0x01);
                set(pressed(Key::Z), 0x02);
                set(pressed(Key::X), 0x04);
                set(pressed(Key::C), 0x08);
                set(pressed(Key::V), 0x10);
            }
            port::KEYBOARD_ASDFG => {
                set(pressed(Key::A), 0x01);
                set(pressed(Key::S), 0x02);
                set(pressed(Key::D), 0x04);
                set(pressed(Key::F), 0x08);
                set(pressed(Key::G), 0x10);
            }
            port::KEYBOARD_QWERT => {
                set(pressed(Key::Q), 0x01);
                set(pressed(Key::W), 0x02);
                set(pressed(Key::E), 0x04);
                set(pressed(Key::R), 0x08);
                set(pressed(Key::T), 0x10);
            }
            port::KEYBOARD_12345 => {
                set(pressed(Key::Key1), 0x01);
                set(pressed(Key::Key2), 0x02);
                set(pressed(Key::Key3), 0x04);
                set(pressed(Key::Key4), 0x08);
                set(pressed(Key::Key5), 0x10);
            }
            port::KEYBOARD_09876 => {
                set(pressed(Key::Key0), 0x01);
                set(pressed(Key::Key9), 0x02);
                set(pressed(Key::Key8), 0x04);
                set(pressed(Key::Key7), 0x08);
                set(pressed(Key::Key6), 0x10);
            }
            port::KEYBOARD_POIUY => {
                set(pressed(Key::P), 0x01);
                set(pressed(Key::O), 0x02);
                set(pressed(Key::I), 0x04);
                set(pressed(Key::U), 0x08);
                set(pressed(Key::Y), 0x10);
            }
            port::KEYBOARD_ENTERLKJH => {
                set(pressed(Key::Enter), 0x01);
                set(pressed(Key::L), 0x02);
                set(pressed(Key::K), 0x04);
                set(pressed(Key::J), 0x08);
                set(pressed(Key::H), 0x10);
            }
            port::KEYBOARD_SPACESYMMNB => {
                set(pressed(Key::Space), 0x01);
                set(pressed(Key::RightCtrl), 0x02);
                set(pressed(Key::M), 0x04);
                set(pressed(Key::N), 0x08);
                set(pressed(Key::B), 0x10);
            }
            _ => {}
        }
        bits
    }
}

impl ZxSpectrum for MinifbSpectrum {
    fn screen(&mut self) -> &mut ZxScreen {
        &mut self.screen
    }

    fn read_port(&mut self, port_address: u16) -> u8 {
        if port_address == port::KEMPSTON_JOYSTICK {
            // Cursor keys stand in for the joystick, active high.
            let mut bits = 0u8;
            if self.window.is_key_down(Key::Right) {
                bits |= 0x01;
            }
            if self.window.is_key_down(Key::Left) {
                bits |= 0x02;
            }
            if self.window.is_key_down(Key::Down) {
                bits |= 0x04;
            }
            if self.window.is_key_down(Key::Up) {
                bits |= 0x08;
            }
            if self.window.is_key_down(Key::LeftCtrl) {
                bits |= 0x10;
            }
            return bits;
        }
        !self.keys_to_row(port_address)
    }

    fn write_port(&mut self, _port: u16, _byte: u8) {
        // The EAR bit would click the speaker here; stay silent.
    }

    fn stamp(&mut self) {
        self.stamped = Instant::now();
    }

    fn sleep(&mut self, microseconds: u32) -> SleepOutcome {
        let target = self.stamped + Duration::from_micros(microseconds as u64);
        let now = Instant::now();
        if target > now {
            std::thread::sleep(target - now);
        }

        self.render();
        if self
            .window
            .update_with_buffer(&self.frame, WIDTH, HEIGHT)
            .is_err()
        {
            self.quit = true;
        }
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            self.quit = true;
        }
        if self.quit { SleepOutcome::Cancelled } else { SleepOutcome::Completed }
    }

    fn draw(&mut self, _rect: Option<DirtyRect>) {
        // The frame is pushed wholesale at every sleep; nothing to do
        // per-rectangle.
    }
}

fn main() {
    env_logger::init();

    let host = MinifbSpectrum::new();
    assert_eq!(host.screen.pixels.len(), SCREEN_BITMAP_LENGTH);

    let mut game = Game::new(Box::new(host)).expect("engine construction");

    game.setup();
    loop {
        match game.menu() {
            0 => continue,
            n if n > 0 => break,
            _ => return,
        }
    }

    game.setup_play();
    log::info!("entering the main loop");
    game.play();
}
