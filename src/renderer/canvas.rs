//! Canvas 2D surface (browser only)

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::surface::{Color, Image, Rect, Surface};

/// Browser image element
#[derive(Debug, Clone)]
pub struct WebImage(pub HtmlImageElement);

impl Image for WebImage {
    fn width(&self) -> f64 {
        self.0.natural_width() as f64
    }

    fn height(&self) -> f64 {
        self.0.natural_height() as f64
    }

    fn is_ready(&self) -> bool {
        self.0.complete() && self.0.natural_width() > 0
    }
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Wipe the whole canvas before a frame
    pub fn clear(&self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
}

impl Surface for CanvasSurface {
    type Image = WebImage;

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(rect.x(), rect.y(), rect.width(), rect.height());
    }

    fn draw_image(&mut self, image: &WebImage, dest: Rect) {
        if !image.is_ready() {
            return;
        }
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &image.0,
            dest.x(),
            dest.y(),
            dest.width(),
            dest.height(),
        ) {
            log::warn!("drawImage failed: {:?}", e);
        }
    }

    fn draw_image_region(&mut self, image: &WebImage, src: Rect, dest: Rect) {
        if !image.is_ready() {
            return;
        }
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &image.0,
                src.x(),
                src.y(),
                src.width(),
                src.height(),
                dest.x(),
                dest.y(),
                dest.width(),
                dest.height(),
            )
        {
            log::warn!("drawImage (region) failed: {:?}", e);
        }
    }
}
