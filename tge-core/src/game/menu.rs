//! A minimal menu: pick an input device, press zero to begin.

use crate::game::context::Game;
use crate::game::InputDevice;
use crate::spectrum::{FRAME_PERIOD_US, SleepOutcome, port};

static MENU_LINES: [&str; 6] = [
    "THE GREAT ESCAPE",
    "1 KEYBOARD",
    "2 KEMPSTON JOYSTICK",
    "3 SINCLAIR JOYSTICK",
    "4 PROTEK JOYSTICK",
    "0 START GAME",
];

impl Game {
    /// Draw the menu chrome onto a wiped screen.
    pub(crate) fn draw_menu_screen(&mut self) {
        for (index, line) in MENU_LINES.iter().enumerate() {
            let row = 4 + index * 2;
            let column = (32 - line.len()) / 2;
            for (offset, &ascii) in line.as_bytes().iter().enumerate() {
                self.plot_glyph(ascii, column + offset, row);
            }
        }
        self.speccy.draw(None);
    }

    /// One frame of menu processing.
    ///
    /// Returns a positive value once the player starts the game, zero
    /// to be called again, negative when the host cancels.
    pub fn menu(&mut self) -> i32 {
        let row_12345 = self.speccy.read_port(port::KEYBOARD_12345);
        if row_12345 & 0x01 == 0 {
            self.chosen_input_device = InputDevice::Keyboard;
        } else if row_12345 & 0x02 == 0 {
            self.chosen_input_device = InputDevice::Kempston;
        } else if row_12345 & 0x04 == 0 {
            self.chosen_input_device = InputDevice::Sinclair;
        } else if row_12345 & 0x08 == 0 {
            self.chosen_input_device = InputDevice::Protek;
        }

        if self.speccy.read_port(port::KEYBOARD_09876) & 0x01 == 0 {
            return 1; // zero pressed: begin
        }

        self.speccy.stamp();
        if self.speccy.sleep(FRAME_PERIOD_US) == SleepOutcome::Cancelled {
            return -1;
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_common;

    #[test]
    fn device_keys_select_a_device() {
        let mut game = test_common::game();
        test_common::press_key(&mut game, port::KEYBOARD_12345, 0x02);
        assert_eq!(game.menu(), 0);
        assert_eq!(game.chosen_input_device, InputDevice::Kempston);
    }

    #[test]
    fn zero_starts_the_game() {
        let mut game = test_common::game();
        test_common::press_key(&mut game, port::KEYBOARD_09876, 0x01);
        assert_eq!(game.menu(), 1);
    }
}
