//! Recording surface
//!
//! Captures draw calls instead of rasterizing them. Used by the headless
//! native run and by tests that check layering and draw purity.

use serde::{Deserialize, Serialize};

use super::surface::{Color, Image, Rect, Surface};

/// An image known only by name and size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedImage {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl NamedImage {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

impl Image for NamedImage {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    Image { image: String, dest: Rect },
    ImageRegion { image: String, src: Rect, dest: Rect },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands (start of a new frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Names of drawn images, in draw order
    pub fn image_names(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { image, .. } | DrawCommand::ImageRegion { image, .. } => {
                    Some(image.as_str())
                }
                DrawCommand::FillRect { .. } => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    type Image = NamedImage;

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, image: &NamedImage, dest: Rect) {
        if !image.is_ready() {
            return;
        }
        self.commands.push(DrawCommand::Image {
            image: image.name.clone(),
            dest,
        });
    }

    fn draw_image_region(&mut self, image: &NamedImage, src: Rect, dest: Rect) {
        if !image.is_ready() {
            return;
        }
        self.commands.push(DrawCommand::ImageRegion {
            image: image.name.clone(),
            src,
            dest,
        });
    }
}
