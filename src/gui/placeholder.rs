//! Level Placeholder Art
//!
//! Generates stand-in avatar art keyed by user level, used when a player has
//! no avatar image (or it failed to decode).

use image::{Rgba, RgbaImage};

use super::pixmap::Pixmap;

/// Level-indexed placeholder image capability. Injectable so hosts can plug in
/// their own art and tests can count invocations.
pub trait PlaceholderGenerator: Send + Sync {
    /// Produce a `size` x `size` image representing `level`.
    fn generate_pixmap(&self, size: u32, level: i32) -> Pixmap;
}

/// Default generator: a shaded disc on a transparent background, tinted by
/// user-level tier.
pub struct LevelPlaceholderGenerator;

fn level_color(level: i32) -> (u8, u8, u8) {
    match level {
        l if l >= 100 => (226, 170, 36),
        l if l >= 60 => (152, 60, 205),
        l if l >= 30 => (55, 95, 205),
        l if l >= 10 => (60, 160, 70),
        _ => (120, 120, 120),
    }
}

impl PlaceholderGenerator for LevelPlaceholderGenerator {
    fn generate_pixmap(&self, size: u32, level: i32) -> Pixmap {
        let size = size.max(1);
        let (r, g, b) = level_color(level);
        let center = size as f32 / 2.0;
        let radius = (size as f32 / 2.0 - 1.0).max(0.5);

        let image = RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if (dx * dx + dy * dy).sqrt() <= radius {
                // subtle top-to-bottom shading
                let shade = 1.0 - 0.35 * (y as f32 / size as f32);
                Rgba([
                    (r as f32 * shade) as u8,
                    (g as f32 * shade) as u8,
                    (b as f32 * shade) as u8,
                    255,
                ])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        Pixmap::from_image(image)
    }
}
