#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod input;
#[cfg(feature = "std")]
mod logging;
mod observer;
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod random;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::{BitBoard, BitBoardError, Members};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
pub use game::*;
pub use input::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use observer::*;
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use random::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
