//! Drawing surface contract and 2D primitives

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.y
    }

    /// True if `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x() >= self.x()
            && other.y() >= self.y()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// RGBA color, alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string for canvas fill styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Colors for debug overlays
pub mod colors {
    use super::Color;

    pub const PLAYER_HITBOX: Color = Color::rgba(255, 0, 0, 0.4);
    pub const OBSTACLE_HITBOX: Color = Color::rgba(0, 0, 0, 0.4);
}

/// A pre-loaded image handle
pub trait Image {
    /// Natural width in pixels
    fn width(&self) -> f64;
    /// Natural height in pixels
    fn height(&self) -> f64;

    /// Whether the image is decoded and drawable. Surfaces skip images that aren't.
    fn is_ready(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

/// Rendering target. The simulation only ever writes to it.
pub trait Surface {
    type Image: Image;

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a whole image scaled into `dest`
    fn draw_image(&mut self, image: &Self::Image, dest: Rect);

    /// Draw the `src` region of an image scaled into `dest`
    fn draw_image_region(&mut self, image: &Self::Image, src: Rect, dest: Rect);
}

/// The three images a runner needs
#[derive(Debug, Clone)]
pub struct Assets<I> {
    pub ground: I,
    pub obstacles: I,
    pub player: I,
}
