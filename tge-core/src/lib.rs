//! Core engine of a reimplementation of the 1986 isometric prison-escape
//! game "The Great Escape".
//!
//! The crate is a pure simulation/rendering core: it drives a virtual
//! ZX Spectrum supplied by the embedder through the [`spectrum::ZxSpectrum`]
//! trait and never touches a real display or input device itself.

#[macro_use]
extern crate log;

#[macro_use]
extern crate anyhow;

pub mod common;
pub mod data;
pub mod game;
pub mod graphics;
pub mod math;
pub mod rand;
pub mod spectrum;

#[cfg(test)]
pub mod test_common;

pub use game::context::Game;
pub use game::{Exit, Flow};
pub use spectrum::{DirtyRect, SleepOutcome, ZxScreen, ZxSpectrum};
