//! The player crate drives a single FaultDisputeGame to completion on behalf of one side of the dispute, and
//! validates that the local absolute prestate matches the one the game was created with.

extern crate balin_primitives;

mod traits;
pub use traits::{PrestateSource, TraceProvider};

mod outcome;
pub use outcome::GameOutcome;

mod player;
pub use player::GamePlayer;

mod prestate;
pub use prestate::{validate_absolute_prestate, PrestateError};

mod config;
pub use config::PlayerConfig;

pub mod logging;
pub mod providers;
