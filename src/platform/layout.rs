//! Responsive canvas sizing
//!
//! The canvas keeps a 1600:450 display ratio and fills 90% of whichever
//! window dimension runs out first. Only the CSS display size changes; the
//! logical canvas the game draws into stays fixed.

/// Native display size the ratio is taken from
pub const NATIVE_WIDTH: f64 = 1600.0;
pub const NATIVE_HEIGHT: f64 = 450.0;
/// Share of the limiting window dimension the canvas takes up
pub const WINDOW_FILL: f64 = 0.9;

/// CSS display size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

/// Fit the canvas inside a window of the given size
pub fn fit_canvas(window_width: f64, window_height: f64) -> DisplaySize {
    let native_ratio = NATIVE_WIDTH / NATIVE_HEIGHT;
    let window_ratio = window_width / window_height;

    let (width, height) = if window_ratio > native_ratio {
        // Wider than native: height is the limit
        let height = (window_height * WINDOW_FILL).floor();
        (height * NATIVE_WIDTH / NATIVE_HEIGHT, height)
    } else {
        let width = (window_width * WINDOW_FILL).floor();
        (width, width * NATIVE_HEIGHT / NATIVE_WIDTH)
    };

    DisplaySize {
        width: width.floor().max(0.0) as u32,
        height: height.floor().max(0.0) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_window_limited_by_height() {
        let size = fit_canvas(3000.0, 500.0);
        assert_eq!(size.height, 450);
        assert_eq!(size.width, 1600);
    }

    #[test]
    fn test_tall_window_limited_by_width() {
        let size = fit_canvas(800.0, 1000.0);
        assert_eq!(size.width, 720);
        assert_eq!(size.height, 202);
    }

    #[test]
    fn test_degenerate_window() {
        assert_eq!(fit_canvas(0.0, 0.0), DisplaySize { width: 0, height: 0 });
        assert_eq!(fit_canvas(100.0, 0.0), DisplaySize { width: 0, height: 0 });
    }

    #[test]
    fn test_keeps_ratio_within_a_pixel() {
        for (w, h) in [(1920.0, 1080.0), (1280.0, 720.0), (375.0, 812.0), (2560.0, 600.0)] {
            let size = fit_canvas(w, h);
            let expected_h = size.width as f64 * NATIVE_HEIGHT / NATIVE_WIDTH;
            assert!((size.height as f64 - expected_h).abs() <= 1.0, "{w}x{h} -> {size:?}");
            assert!(size.width as f64 <= w && size.height as f64 <= h);
        }
    }
}
