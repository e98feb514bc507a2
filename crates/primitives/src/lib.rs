#![doc = include_str!("../README.md")]

//! Primitives for Balin, a player for the OP Stack's dispute protocol.

mod dispute_game;
pub use dispute_game::{Claim, GameStatus};

mod traits;
pub use traits::{Agent, GameStateReader};
