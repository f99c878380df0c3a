//! Event handling for stockdeck.
//!
//! Terminal input is translated into [`crate::state::Action`] values by
//! the [`EventHandler`]; nothing else in the crate touches crossterm
//! events.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
