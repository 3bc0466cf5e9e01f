//! Turn management and the text front-end
//!
//! This module drives the engine the way a board UI would: selection,
//! forced captures, capture chains, the computer's replies and game over.

pub mod error;
pub mod protocol;
pub mod state;

pub use error::GameError;
pub use protocol::Session;
pub use state::{Game, GameMode, Turn};
