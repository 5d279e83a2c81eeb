//! Player Panel
//!
//! The player-representing widget: avatar composite over a radial gradient,
//! truncated name strip, border, and a red overlay while the panel is the
//! target of a pointing action. Avatar composites are memoized in the pixmap
//! cache keyed by on-screen size, user level and avatar identity.

use std::sync::Arc;

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use image::imageops;
use log::{debug, warn};

use super::counter_badge::CounterBadge;
use super::paint::{CacheMode, PaintContext, TextCommand};
use super::pixmap::{self, Pixmap};
use super::pixmap_cache::{shared_cache, PixmapCache};
use super::placeholder::{LevelPlaceholderGenerator, PlaceholderGenerator};
use crate::player::UserInfo;

const PANEL_SIZE: Vec2 = Vec2::new(160.0, 64.0);
const BORDER: f32 = 2.0;
const NAME_STRIP_SIZE: Vec2 = Vec2::new(110.0, 20.0);
const NAME_MAX_CHARS: usize = 13;
const NAME_TRUNCATED_CHARS: usize = 10;
const MIN_FONT_PX: f32 = 9.0;

pub struct PlayerPanel {
    name: String,
    level: i32,
    avatar: Option<Pixmap>,
    counter: Option<CounterBadge>,
    being_pointed_at: bool,
    cache: Arc<dyn PixmapCache>,
    placeholder: Arc<dyn PlaceholderGenerator>,
}

impl PlayerPanel {
    /// Build a panel from the player's user info, using the process-wide
    /// pixmap cache and the default placeholder art.
    pub fn new(info: &UserInfo) -> Self {
        Self::with_services(info, shared_cache(), Arc::new(LevelPlaceholderGenerator))
    }

    /// Build a panel with an injected cache and placeholder generator.
    ///
    /// Avatar bytes are decoded once here; a decode failure is absorbed and
    /// the panel falls back to placeholder rendering.
    pub fn with_services(
        info: &UserInfo,
        cache: Arc<dyn PixmapCache>,
        placeholder: Arc<dyn PlaceholderGenerator>,
    ) -> Self {
        let avatar = if info.avatar_bmp.is_empty() {
            None
        } else {
            match Pixmap::decode(&info.avatar_bmp) {
                Ok(pixmap) => Some(pixmap),
                Err(err) => {
                    warn!("failed to decode avatar for {}: {}", info.name, err);
                    None
                }
            }
        };

        Self {
            name: info.name.clone(),
            level: info.level,
            avatar,
            counter: None,
            being_pointed_at: false,
            cache,
            placeholder,
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, PANEL_SIZE)
    }

    /// The panel's rasterized output only changes with device size or state,
    /// so hosts are invited to cache it in device coordinates.
    pub fn cache_mode(&self) -> CacheMode {
        CacheMode::DeviceCoordinate
    }

    pub fn is_being_pointed_at(&self) -> bool {
        self.being_pointed_at
    }

    /// Observer hook for the arrow-targeting UI.
    pub fn set_being_pointed_at(&mut self, pointed_at: bool) {
        self.being_pointed_at = pointed_at;
    }

    pub fn counter(&self) -> Option<&CounterBadge> {
        self.counter.as_ref()
    }

    pub fn counter_mut(&mut self) -> Option<&mut CounterBadge> {
        self.counter.as_mut()
    }

    /// Create the panel's counter badge, flush to the bottom-right corner.
    /// Returns `None` when a counter already exists; at most one per panel.
    pub fn add_counter(&mut self, id: i32, name: &str, value: i32) -> Option<&mut CounterBadge> {
        if self.counter.is_some() {
            return None;
        }

        let badge_size = Vec2::new(50.0, 30.0);
        let pos = Pos2::new(
            PANEL_SIZE.x - badge_size.x,
            PANEL_SIZE.y - badge_size.y,
        );
        self.counter = Some(CounterBadge::new(id, name, value, pos));
        self.counter.as_mut()
    }

    /// Drop the owned counter badge so a later `add_counter` succeeds again.
    pub fn remove_counter(&mut self) {
        self.counter = None;
    }

    pub fn paint(&self, ctx: &mut PaintContext) {
        let bounds = self.bounding_rect();

        // Avatar area: bounds inset by the border, measured in device pixels.
        let avatar_rect = ctx.map_rect(bounds.shrink(BORDER));
        let width = (avatar_rect.width().round() as u32).max(1);
        let height = (avatar_rect.height().round() as u32).max(1);

        let composite = self.avatar_composite(width, height);

        // Horizontally centered in the avatar area, flush to the top.
        let offset = (avatar_rect.width() - composite.width() as f32) / 2.0;
        let dest = Rect::from_min_size(
            Pos2::new(avatar_rect.min.x + offset, avatar_rect.min.y),
            avatar_rect.size(),
        );
        ctx.blit(dest, composite);

        // Name strip anchored at the bottom-left.
        let strip_rect = ctx.map_rect(Rect::from_min_size(
            Pos2::new(0.0, PANEL_SIZE.y - NAME_STRIP_SIZE.y),
            NAME_STRIP_SIZE,
        ));
        ctx.fill_rect(strip_rect, Color32::from_rgba_unmultiplied(0, 0, 0, 160));

        let font_px = (strip_rect.height() / 1.5).round().max(MIN_FONT_PX);
        ctx.text(TextCommand {
            rect: strip_rect,
            text: format!("  {}", truncate_name(&self.name)),
            font: FontId::proportional(font_px),
            color: Color32::WHITE,
            align: Align2::LEFT_CENTER,
            strong: false,
        });

        // Border with rounded joins.
        ctx.stroke_rect(
            ctx.map_rect(bounds.shrink(BORDER / 2.0)),
            Stroke::new(BORDER * ctx.scaling(), Color32::from_rgb(100, 100, 100)),
        );

        if self.being_pointed_at {
            ctx.fill_rect(
                ctx.map_rect(bounds),
                Color32::from_rgba_unmultiplied(255, 0, 0, 100),
            );
        }
    }

    /// Look up or render the avatar composite for the given on-screen size.
    fn avatar_composite(&self, width: u32, height: u32) -> Pixmap {
        let avatar_id = self.avatar.as_ref().map(Pixmap::id).unwrap_or(0);
        let key = format!("avatar{}_{}_{}", width, self.level, avatar_id);

        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        debug!(
            "rendering avatar composite {}x{} for level {}",
            width, height, self.level
        );
        let mut background = pixmap::radial_gradient(width, height);
        let foreground = match &self.avatar {
            Some(avatar) => avatar.scaled_to_fit(width, height),
            None => self.placeholder.generate_pixmap(height, self.level),
        };
        let x = width.saturating_sub(foreground.width()) / 2;
        let y = height.saturating_sub(foreground.height()) / 2;
        imageops::overlay(&mut background, foreground.image(), i64::from(x), i64::from(y));

        let composite = Pixmap::from_image(background);
        self.cache.put(&key, composite.clone());
        composite
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_MAX_CHARS {
        let mut truncated: String = name.chars().take(NAME_TRUNCATED_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        name.to_string()
    }
}
