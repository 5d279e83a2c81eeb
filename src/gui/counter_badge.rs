//! Counter Badge
//!
//! Small overlay badge showing an integer counter value over its player panel.
//! Value and hover state are driven externally by the counter abstraction.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke, Vec2};

use super::paint::{PaintContext, TextCommand};

const BADGE_SIZE: Vec2 = Vec2::new(50.0, 30.0);
const CORNER_RADIUS: f32 = 8.0;
const BORDER: f32 = 1.0;
const MIN_FONT_PX: f32 = 9.0;

pub struct CounterBadge {
    id: i32,
    name: String,
    value: i32,
    hovered: bool,
    /// Position within the owning panel, set when the panel creates the badge.
    pos: Pos2,
}

impl CounterBadge {
    pub(crate) fn new(id: i32, name: &str, value: i32, pos: Pos2) -> Self {
        Self {
            id,
            name: name.to_string(),
            value,
            hovered: false,
            pos,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Position of the badge within its owning panel, in logical units.
    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, BADGE_SIZE)
    }

    /// Emit the badge: a panel shape with the top-right corner rounded,
    /// filled translucent dark (lighter while hovered), with a 1-unit gray
    /// border and the value centered in white bold text.
    pub fn paint(&self, ctx: &mut PaintContext) {
        let screen_rect = ctx.map_rect(self.bounding_rect());

        let fill = if self.hovered {
            Color32::from_rgba_unmultiplied(50, 50, 50, 160)
        } else {
            Color32::from_rgba_unmultiplied(0, 0, 0, 160)
        };
        let corner_radius = CornerRadius {
            ne: (CORNER_RADIUS * ctx.scaling()).round().clamp(0.0, 255.0) as u8,
            ..Default::default()
        };
        ctx.rounded_rect(
            screen_rect,
            corner_radius,
            fill,
            Stroke::new(BORDER * ctx.scaling(), Color32::from_rgb(100, 100, 100)),
        );

        let font_px = (screen_rect.height() / 1.3).round().max(MIN_FONT_PX);
        ctx.text(TextCommand {
            rect: screen_rect,
            text: self.value.to_string(),
            font: FontId::proportional(font_px),
            color: Color32::WHITE,
            align: Align2::CENTER_CENTER,
            strong: true,
        });
    }
}
