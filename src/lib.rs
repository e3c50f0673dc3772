//! Contrasting colors and legend steps for map widgets.
//!
//! - [`resolve_to_rgb`], [`luma`] and [`contrasting_color`] turn any
//!   CSS color into a legible black or white foreground.
//! - [`LegendDomain`] computes the value of each step of a linear or
//!   logarithmic color ramp, [`round_to`] rounds it for display.
//! - [`Legend`] and [`Theme`] put both together for a legend and for
//!   the controls of a map viewer.
//!
//! Colors are resolved through the [`ColorResolver`] trait, the
//! default [`CssResolver`] understands every CSS color syntax.

use rgb::{RGBA, RGB8, RGBA8};

mod error;
mod legend;
mod metrics;
mod resolve;
mod stepper;
mod theme;

pub use error::{Error, Result};
pub use legend::{LayerLegend, Legend, LegendEntry, DEFAULT_COLORS};
pub use metrics::{contrasting_color, contrasting_color_with, luma, luma_with,
                  Contrast, LUMA_THRESHOLD, LUMA_WEIGHTS};
pub use resolve::{resolve_to_rgb, ColorResolver, CssResolver};
pub use stepper::{round_to, step_value, LegendDomain, Steps};
pub use theme::{Theme, DEFAULT_THEME};

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Perceptual luma of the color, in \[0, 255\].  Alpha is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_legend::RGBColor;
    /// assert_eq!(RGB8::new(0, 0, 0).luma(), 0.);
    /// ```
    fn luma(&self) -> f64 {
        let RGBA { r, g, b, .. } = Self::to_rgba(self);
        let [wr, wg, wb] = metrics::LUMA_WEIGHTS_10K;
        (wr * r + wg * g + wb * b) / 10_000.
    }

    /// Return the foreground (black or white) legible on this color.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_legend::{Contrast, RGBColor};
    /// let red = RGB8::new(255, 0, 0);
    /// assert_eq!(red.contrast(), Contrast::White);
    /// ```
    #[inline]
    fn contrast(&self) -> Contrast { Contrast::for_luma(self.luma()) }

    /// Return the color as `#rrggbb`.
    fn to_hex(&self) -> String {
        let RGBA { r, g, b, .. } = Self::to_rgba(self);
        let c = |x: f64| x.round().clamp(0., 255.) as u8;
        format!("#{:02x}{:02x}{:02x}", c(r), c(g), c(b))
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8, a: c.a as u8 }
    }
}
