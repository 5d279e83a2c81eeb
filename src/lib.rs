//! Cardtable Widgets Library
//!
//! Player panel and counter badge widgets for a card game client.
//! Widgets emit backend-agnostic draw commands; the host compositor
//! rasterizes them and uploads cached avatar composites as textures.

pub mod gui;
pub mod player;

pub use gui::{CounterBadge, PlayerPanel};
pub use player::UserInfo;
