//! Paint Command Collection
//!
//! Widgets paint by emitting backend-agnostic draw commands in screen space.
//! The host compositor applies the widget's scene transform when constructing
//! the [`PaintContext`], then rasterizes the collected commands (and uploads
//! [`Pixmap`] blits as textures) however it sees fit.

use egui::emath::TSTransform;
use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke};

use super::pixmap::Pixmap;

/// Caching hint a widget advertises to the host compositor.
///
/// `DeviceCoordinate` asks the host to cache the widget's rasterized output in
/// device pixels across repaints. Purely an optimization hint; honoring it is
/// optional and does not change what `paint` emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    None,
    DeviceCoordinate,
}

/// A single text draw, vertically/horizontally placed inside `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub rect: Rect,
    pub text: String,
    pub font: FontId,
    pub color: Color32,
    pub align: Align2,
    /// Render with the bold/strong face of the font family.
    pub strong: bool,
}

/// Draw primitives emitted by widget paint calls, all in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color32,
    },
    RoundedRect {
        rect: Rect,
        corner_radius: CornerRadius,
        fill: Color32,
        stroke: Stroke,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
    },
    /// Draw `pixmap` stretched over `rect`.
    Blit {
        rect: Rect,
        pixmap: Pixmap,
    },
    Text(TextCommand),
}

/// Command sink handed to widgets for one paint pass.
///
/// Carries the current scale/translate transform so widgets can compute
/// on-screen sizes (font pixel sizes, avatar cache keys) the same way the
/// compositor will place them.
pub struct PaintContext {
    transform: TSTransform,
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new(transform: TSTransform) -> Self {
        Self {
            transform,
            commands: Vec::new(),
        }
    }

    /// Uniform scale factor of the current transform.
    pub fn scaling(&self) -> f32 {
        self.transform.scaling
    }

    /// Map a rect from widget-local logical units to screen coordinates.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.map_pos(rect.min), self.map_pos(rect.max))
    }

    fn map_pos(&self, pos: Pos2) -> Pos2 {
        Pos2::new(
            self.transform.translation.x + pos.x * self.transform.scaling,
            self.transform.translation.y + pos.y * self.transform.scaling,
        )
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn rounded_rect(
        &mut self,
        rect: Rect,
        corner_radius: CornerRadius,
        fill: Color32,
        stroke: Stroke,
    ) {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            corner_radius,
            fill,
            stroke,
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeRect { rect, stroke });
    }

    pub fn blit(&mut self, rect: Rect, pixmap: Pixmap) {
        self.commands.push(DrawCommand::Blit { rect, pixmap });
    }

    pub fn text(&mut self, command: TextCommand) {
        self.commands.push(DrawCommand::Text(command));
    }

    /// Commands collected so far, in emission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;

    #[test]
    fn test_map_rect_identity() {
        let ctx = PaintContext::new(TSTransform::IDENTITY);
        let rect = Rect::from_min_size(Pos2::new(2.0, 2.0), Vec2::new(156.0, 60.0));
        assert_eq!(ctx.map_rect(rect), rect);
    }

    #[test]
    fn test_map_rect_scale_and_translate() {
        let ctx = PaintContext::new(TSTransform {
            translation: Vec2::new(10.0, 20.0),
            scaling: 2.0,
        });
        let rect = Rect::from_min_size(Pos2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let mapped = ctx.map_rect(rect);
        assert_eq!(mapped.min, Pos2::new(12.0, 24.0));
        assert_eq!(mapped.max, Pos2::new(18.0, 32.0));
    }

    #[test]
    fn test_commands_preserve_emission_order() {
        let mut ctx = PaintContext::new(TSTransform::IDENTITY);
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(10.0, 10.0));
        ctx.fill_rect(rect, Color32::BLACK);
        ctx.stroke_rect(rect, Stroke::new(1.0, Color32::GRAY));
        let commands = ctx.into_commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
        assert!(matches!(commands[1], DrawCommand::StrokeRect { .. }));
    }
}
