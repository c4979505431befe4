//! The simulation: world model, per-tick logic and the daily schedule.

pub mod ai;
pub mod alarm;
pub mod character;
pub mod context;
pub mod door;
pub mod escape;
pub mod events;
pub mod item;
pub mod main_loop;
pub mod menu;
pub mod message;
pub mod room;
pub mod route;
pub mod searchlight;
pub mod vischar;

use bitflags::bitflags;

/// Why control left the middle of a tick.
///
/// The original unwinds with `longjmp` when a room transition commits,
/// when the game resets and when the host cancels a sleep. Here the same
/// three exits ride an error value back to the main loop's catch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// A room transition committed; restart the tick loop.
    Transitioned,
    /// The game was reset; restart the tick loop.
    Reset,
    /// The host asked the core to stop.
    Cancelled,
}

/// Result type threaded through every routine that can exit non-locally.
pub type Flow = Result<(), Exit>;

bitflags! {
    /// One frame of player input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Input: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
        const FIRE  = 1 << 4;
        /// New-input latch: forces the animation to be re-picked.
        const KICK  = 1 << 7;
    }
}

impl Input {
    /// Collapse direction bits to the nine-column index used by the
    /// animation selection table: none, up, down, left, up+left,
    /// down+left, right, up+right, down+right.
    pub fn direction_index(self) -> usize {
        let up = self.contains(Input::UP);
        let down = self.contains(Input::DOWN) && !up;
        match (
            up,
            down,
            self.contains(Input::LEFT),
            self.contains(Input::RIGHT),
        ) {
            (false, false, false, false) => 0,
            (true, _, false, false) => 1,
            (_, true, false, false) => 2,
            (false, false, true, _) => 3,
            (true, _, true, _) => 4,
            (_, true, true, _) => 5,
            (false, false, false, true) => 6,
            (true, _, false, true) => 7,
            (_, true, false, true) => 8,
        }
    }
}

/// The input devices selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputDevice {
    #[default]
    Keyboard,
    Kempston,
    Sinclair,
    Protek,
}

/// Named rooms. Room 0 is outdoors; rooms 29 and up are tunnels.
pub mod rooms {
    pub const OUTDOORS: u8 = 0;
    pub const HUT1RIGHT: u8 = 1;
    pub const HUT2LEFT: u8 = 2;
    pub const HUT2RIGHT: u8 = 3;
    pub const HUT3LEFT: u8 = 4;
    pub const HUT3RIGHT: u8 = 5;
    pub const CORRIDOR_7: u8 = 7;
    pub const ROOM_8: u8 = 8;
    pub const CRATE: u8 = 9;
    pub const LOCKPICK: u8 = 10;
    pub const PAPERS: u8 = 11;
    pub const CORRIDOR_12: u8 = 12;
    pub const CORRIDOR_13: u8 = 13;
    pub const TORCH: u8 = 14;
    pub const UNIFORM: u8 = 15;
    pub const CORRIDOR_16: u8 = 16;
    pub const CORRIDOR_17: u8 = 17;
    pub const RADIO: u8 = 18;
    pub const FOOD: u8 = 19;
    pub const REDCROSS: u8 = 20;
    pub const CORRIDOR_21: u8 = 21;
    pub const REDKEY: u8 = 22;
    pub const MESS_HALL_23: u8 = 23;
    pub const SOLITARY: u8 = 24;
    pub const MESS_HALL_25: u8 = 25;
    pub const HUT1LEFT: u8 = 28;
    /// Rooms from here on are tunnel sections: everyone crawls.
    pub const FIRST_TUNNEL: u8 = 29;
    pub const TUNNEL_30: u8 = 30;
    pub const TUNNEL_31: u8 = 31;
    pub const LIMIT: u8 = 59;
    pub const NONE: u8 = 255;
}

/// Named characters. 0..=25 are real; 26..=28 address the movable items.
pub mod characters {
    pub const COMMANDANT: u8 = 0;
    pub const GUARD_1: u8 = 1;
    pub const GUARD_11: u8 = 11;
    pub const GUARD_12: u8 = 12;
    pub const GUARD_15: u8 = 15;
    pub const DOG_1: u8 = 16;
    pub const DOG_4: u8 = 19;
    pub const PRISONER_1: u8 = 20;
    pub const PRISONER_6: u8 = 25;
    pub const LIMIT: u8 = 26;
    pub const STOVE_1: u8 = 26;
    pub const CRATE: u8 = 27;
    pub const STOVE_2: u8 = 28;
    pub const NONE: u8 = 255;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_index_covers_all_columns() {
        assert_eq!(Input::empty().direction_index(), 0);
        assert_eq!(Input::UP.direction_index(), 1);
        assert_eq!(Input::DOWN.direction_index(), 2);
        assert_eq!(Input::LEFT.direction_index(), 3);
        assert_eq!((Input::UP | Input::LEFT).direction_index(), 4);
        assert_eq!((Input::DOWN | Input::LEFT).direction_index(), 5);
        assert_eq!(Input::RIGHT.direction_index(), 6);
        assert_eq!((Input::UP | Input::RIGHT).direction_index(), 7);
        assert_eq!((Input::DOWN | Input::RIGHT).direction_index(), 8);
    }

    #[test]
    fn fire_does_not_change_direction() {
        assert_eq!((Input::FIRE | Input::UP).direction_index(), 1);
        assert_eq!(Input::FIRE.direction_index(), 0);
    }
}
