//! GUI Module
//!
//! Widget rendering, paint command collection, and the avatar pixmap cache.

pub mod counter_badge;
pub mod paint;
pub mod pixmap;
pub mod pixmap_cache;
pub mod placeholder;
pub mod player_panel;

pub use counter_badge::CounterBadge;
pub use paint::{CacheMode, DrawCommand, PaintContext, TextCommand};
pub use pixmap::Pixmap;
pub use pixmap_cache::{shared_cache, InMemoryPixmapCache, PixmapCache};
pub use placeholder::{LevelPlaceholderGenerator, PlaceholderGenerator};
pub use player_panel::PlayerPanel;
