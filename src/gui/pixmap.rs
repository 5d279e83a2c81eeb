//! Pixmap Type
//!
//! Cheaply clonable RGBA bitmaps with a process-unique identity, plus the
//! radial gradient used behind avatar composites.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};
use thiserror::Error;

// Identity 0 is reserved for "no pixmap" in cache keys.
static NEXT_PIXMAP_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum PixmapError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// An immutable RGBA bitmap. Clones share pixel storage and identity.
///
/// The identity changes whenever new pixel data is created, so it can stand in
/// for "avatar image version" in cache keys.
#[derive(Debug, Clone)]
pub struct Pixmap {
    id: u64,
    pixels: Arc<RgbaImage>,
}

impl Pixmap {
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            id: NEXT_PIXMAP_ID.fetch_add(1, Ordering::Relaxed),
            pixels: Arc::new(image),
        }
    }

    /// Decode arbitrary encoded bitmap bytes (BMP, PNG, JPEG, WebP).
    pub fn decode(bytes: &[u8]) -> Result<Self, PixmapError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from_image(decoded.to_rgba8()))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Resize to fit within `width` x `height`, preserving aspect ratio,
    /// with smooth (triangle) filtering.
    pub fn scaled_to_fit(&self, width: u32, height: u32) -> Pixmap {
        let dynamic = DynamicImage::ImageRgba8((*self.pixels).clone());
        let resized = dynamic.resize(width.max(1), height.max(1), FilterType::Triangle);
        Pixmap::from_image(resized.to_rgba8())
    }
}

impl PartialEq for Pixmap {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Radial gradient from light gray `rgb(180,180,180)` at the center to black
/// at a radius of half the diagonal.
pub fn radial_gradient(width: u32, height: u32) -> RgbaImage {
    let width = width.max(1);
    let height = height.max(1);
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let radius = ((width as f32).powi(2) + (height as f32).powi(2)).sqrt() / 2.0;

    RgbaImage::from_fn(width, height, |x, y| {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        let t = ((dx * dx + dy * dy).sqrt() / radius).clamp(0.0, 1.0);
        let v = (180.0 * (1.0 - t)).round() as u8;
        Rgba([v, v, v, 255])
    })
}
