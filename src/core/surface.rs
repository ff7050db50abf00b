use glam::DVec2;

/// Straight (non-premultiplied) color with an opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f64) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// Same hue with a different opacity.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, e.g. `rgba(108, 99, 255, 0.8)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// 2D immediate-mode drawing target the particle field renders onto.
///
/// The browser implementation forwards to `CanvasRenderingContext2d`; host
/// tests record the calls instead.
pub trait Surface {
    /// Clear the rectangle `(0, 0)..(width, height)`.
    fn clear(&mut self, width: f64, height: f64);

    /// Stroke a segment with a linear gradient running from `start` at `from`
    /// to `end` at `to`.
    fn stroke_gradient_line(&mut self, from: DVec2, to: DVec2, start: Rgba, end: Rgba, width: f64);

    /// Fill a full circle.
    fn fill_disc(&mut self, center: DVec2, radius: f64, color: Rgba);
}
