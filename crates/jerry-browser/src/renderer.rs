//! Software renderer for headless image generation.
//!
//! Executes a `DisplayList` to an RGBA pixel buffer.
//!
//! # Architecture
//!
//! The renderer is the final stage in the pipeline:
//!
//! ```text
//! Style → Layout → Paint → Render
//!                    ↓        ↓
//!              DisplayList → Pixels
//! ```
//!
//! The renderer knows nothing about CSS, layout, or the DOM. It simply executes
//! drawing commands from the display list.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use image::{ImageBuffer, Rgba, RgbaImage};
use jerry_css::{Color, DisplayCommand, DisplayList, LayoutBox, Rect, build_display_list};

/// Largest canvas, in pixels, that [`Renderer::with_bounds`] will allocate.
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Software renderer that executes a display list to a pixel buffer.
pub struct Renderer {
    /// RGBA pixel buffer, initially opaque white.
    buffer: RgbaImage,
}

impl Renderer {
    /// Create a new renderer with a white canvas of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: ImageBuffer::from_pixel(width, height, Rgba([255, 255, 255, 255])),
        }
    }

    /// Create a white canvas the size of `bounds`, truncated to whole pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas would hold more than
    /// [`MAX_CANVAS_PIXELS`] pixels.
    pub fn with_bounds(bounds: Rect) -> Result<Self> {
        let (width, height) = (to_pixels(bounds.width), to_pixels(bounds.height));
        ensure!(
            u64::from(width) * u64::from(height) <= MAX_CANVAS_PIXELS,
            "canvas of {width}x{height} pixels exceeds the limit of {MAX_CANVAS_PIXELS} pixels"
        );
        Ok(Self::new(width, height))
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// The color at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.buffer
            .get_pixel_checked(x, y)
            .map(|&Rgba([r, g, b, a])| Color::new(r, g, b, a))
    }

    /// Execute a display list, drawing all commands to the pixel buffer.
    ///
    /// Commands are executed in order, so later commands paint over earlier
    /// ones.
    pub fn render(&mut self, display_list: &DisplayList) {
        for command in display_list.commands() {
            match *command {
                DisplayCommand::SolidColor { color, rect } => self.fill_rect(rect, color),
            }
        }
    }

    /// Fill a rectangle with the given color, clipped to the canvas.
    ///
    /// Pixels are overwritten: the color's alpha channel is stored as-is.
    // TODO: composite `color.a` over the existing pixel instead of overwriting.
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rgba = Rgba([color.r, color.g, color.b, color.a]);

        let x0 = clamp_to_canvas(rect.x, self.width());
        let y0 = clamp_to_canvas(rect.y, self.height());
        let x1 = clamp_to_canvas(rect.x + rect.width, self.width());
        let y1 = clamp_to_canvas(rect.y + rect.height, self.height());

        for y in y0..y1 {
            for x in x0..x1 {
                self.buffer.put_pixel(x, y, rgba);
            }
        }
    }

    /// Save the rendered image to a file. The format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is empty, or if the image cannot be
    /// encoded or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        ensure!(
            self.width() > 0 && self.height() > 0,
            "cannot save an empty {}x{} canvas to '{}': the root box has no area \
             (give the root element `display: block` and some content or a height)",
            self.width(),
            self.height(),
            path.display()
        );
        self.buffer
            .save(path)
            .with_context(|| format!("failed to save image to '{}'", path.display()))
    }
}

/// Paint a laid-out tree onto a fresh canvas the size of `bounds`.
///
/// Boxes are drawn at their document coordinates; anything outside
/// `0..bounds.width` by `0..bounds.height` is clipped.
///
/// # Errors
///
/// Returns an error if `bounds` exceeds [`MAX_CANVAS_PIXELS`].
pub fn paint(layout_root: &LayoutBox<'_>, bounds: Rect) -> Result<Renderer> {
    let display_list = build_display_list(layout_root);
    let mut renderer = Renderer::with_bounds(bounds)?;
    renderer.render(&display_list);
    Ok(renderer)
}

/// Convert a length to whole pixels. Negative and NaN lengths become zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn to_pixels(length: f64) -> u32 {
    length as u32
}

fn clamp_to_canvas(coordinate: f64, limit: u32) -> u32 {
    to_pixels(coordinate.clamp(0.0, f64::from(limit)))
}
