//! The status-bar message queue and its drip-feed display.

use strum_macros::FromRepr;

use crate::game::context::Game;

pub const MESSAGE_QUEUE_LENGTH: usize = 12;
pub const MESSAGE_QUEUE_END: u8 = 255;

/// Set on `display_index` when the next message should be fetched.
pub const MESSAGE_NEXT_FLAG: u8 = 1 << 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum Message {
    MissedRollCall,
    TimeToWakeUp,
    BreakfastTime,
    ExerciseTime,
    TimeForBed,
    TheDoorIsLocked,
    ItIsOpen,
    IncorrectKey,
    RollCall,
    RedCrossParcel,
    PickingTheLock,
    CuttingTheWire,
    YouOpenTheBox,
    YouAreInSolitary,
    WaitForRelease,
    MoraleIsZero,
    ItemDiscovered,
    HeTakesTheBribe,
    AndActsAsDecoy,
    AnotherDayDawns,
}

pub static MESSAGE_TEXTS: [&str; 20] = [
    "MISSED ROLL CALL",
    "TIME TO WAKE UP",
    "BREAKFAST TIME",
    "EXERCISE TIME",
    "TIME FOR BED",
    "THE DOOR IS LOCKED",
    "IT IS OPEN",
    "INCORRECT KEY",
    "ROLL CALL",
    "RED CROSS PARCEL",
    "PICKING THE LOCK",
    "CUTTING THE WIRE",
    "YOU OPEN THE BOX",
    "YOU ARE IN SOLITARY",
    "WAIT FOR RELEASE",
    "MORALE IS ZERO",
    "ITEM DISCOVERED",
    "HE TAKES THE BRIBE",
    "AND ACTS AS DECOY",
    "ANOTHER DAY DAWNS",
];

/// Message display state: a small queue of (id, 0) pairs with a sentinel
/// kept at the tail, plus the glyph-at-a-time display cursor.
#[derive(Debug, Clone)]
pub struct Messages {
    pub queue: [u8; MESSAGE_QUEUE_LENGTH],
    /// Insertion offset into `queue`.
    pub queue_pointer: usize,
    pub display_delay: u8,
    /// Column being written, with MESSAGE_NEXT_FLAG and the wipe state
    /// riding the top bit.
    pub display_index: u8,
    /// The message being displayed and the glyph reached within it.
    pub current_message: u8,
    pub current_offset: usize,
}

impl Default for Messages {
    fn default() -> Self {
        let mut queue = [0; MESSAGE_QUEUE_LENGTH];
        queue[0] = MESSAGE_QUEUE_END;
        queue[1] = MESSAGE_QUEUE_END;
        queue[MESSAGE_QUEUE_LENGTH - 2] = MESSAGE_QUEUE_END;
        queue[MESSAGE_QUEUE_LENGTH - 1] = MESSAGE_QUEUE_END;
        Messages {
            queue,
            queue_pointer: 2,
            display_delay: 0,
            display_index: MESSAGE_NEXT_FLAG,
            current_message: 0,
            current_offset: 0,
        }
    }
}

impl Game {
    /// Append a message unless it duplicates the most recent entry or
    /// the queue is full.
    pub(crate) fn queue_message(&mut self, message: Message) {
        let index = message as u8;
        let qp = self.messages.queue_pointer;

        if qp >= MESSAGE_QUEUE_LENGTH - 2 {
            return; // Queue full.
        }
        if qp >= 4 && self.messages.queue[qp - 2] == index && self.messages.queue[qp - 1] == 0 {
            return; // Already pending.
        }

        self.messages.queue[qp] = index;
        self.messages.queue[qp + 1] = 0;
        self.messages.queue_pointer = qp + 2;
    }

    /// One tick of message display: a delay, a glyph plotted, a glyph
    /// wiped, or the next message fetched.
    pub(crate) fn message_display(&mut self) {
        if self.messages.display_delay > 0 {
            self.messages.display_delay -= 1;
            return;
        }

        let index = self.messages.display_index;
        if index == MESSAGE_NEXT_FLAG {
            self.next_message();
        } else if index > MESSAGE_NEXT_FLAG {
            self.wipe_message();
        } else {
            let text = MESSAGE_TEXTS[self.messages.current_message as usize];
            let bytes = text.as_bytes();
            let offset = self.messages.current_offset;
            let glyph = bytes[offset.min(bytes.len() - 1)];
            self.plot_message_glyph(glyph, index as usize);

            self.messages.display_index = index + 1;
            if offset + 1 >= bytes.len() {
                // Whole message shown: hold it, then wipe.
                self.messages.display_delay = 31;
                self.messages.display_index |= MESSAGE_NEXT_FLAG;
            } else {
                self.messages.current_offset = offset + 1;
            }
        }
    }

    /// Erase one glyph of the departing message, right to left.
    fn wipe_message(&mut self) {
        let index = self.messages.display_index.wrapping_sub(1);
        self.messages.display_index = index;
        let column = (index & !MESSAGE_NEXT_FLAG) as usize;
        self.plot_message_glyph(b' ', column);
        if column == 0 {
            self.messages.display_index = MESSAGE_NEXT_FLAG;
        }
    }

    /// Dequeue the next message, shuffling the queue down.
    fn next_message(&mut self) {
        if self.messages.queue_pointer == 2 {
            return; // Nothing queued.
        }

        let message = self.messages.queue[2];
        debug_assert!((message as usize) < MESSAGE_TEXTS.len());
        self.messages.current_message = message.min(MESSAGE_TEXTS.len() as u8 - 1);
        self.messages.current_offset = 0;

        self.messages.queue.copy_within(4.., 2);
        self.messages.queue_pointer -= 2;
        self.messages.display_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_common;

    #[test]
    fn queueing_refuses_duplicates() {
        let mut game = test_common::game();
        game.queue_message(Message::RollCall);
        game.queue_message(Message::RollCall);
        assert_eq!(game.messages.queue_pointer, 4);
        assert_eq!(game.messages.queue[2], Message::RollCall as u8);
    }

    #[test]
    fn queueing_stops_when_full() {
        let mut game = test_common::game();
        game.queue_message(Message::RollCall);
        game.queue_message(Message::TimeForBed);
        game.queue_message(Message::BreakfastTime);
        game.queue_message(Message::ExerciseTime);
        let pointer = game.messages.queue_pointer;
        game.queue_message(Message::ItIsOpen);
        assert_eq!(game.messages.queue_pointer, pointer);
    }

    #[test]
    fn display_drip_feeds_one_glyph_per_tick() {
        let mut game = test_common::game();
        game.queue_message(Message::RollCall);

        // Fetch, then plot one glyph per tick.
        game.message_display();
        assert_eq!(game.messages.display_index, 0);
        game.message_display();
        assert_eq!(game.messages.display_index, 1);
        assert_eq!(game.messages.current_offset, 1);
    }

    #[test]
    fn completed_message_waits_then_wipes() {
        let mut game = test_common::game();
        game.queue_message(Message::ItIsOpen); // 10 characters

        game.message_display(); // fetch
        for _ in 0.."IT IS OPEN".len() {
            game.message_display();
        }
        assert_eq!(game.messages.display_delay, 31);
        assert!(game.messages.display_index > MESSAGE_NEXT_FLAG);
    }
}
