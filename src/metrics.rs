use std::fmt;
use rgb::RGBA;
use crate::error::Result;
use crate::resolve::{resolve_to_rgb, ColorResolver, CssResolver};
use crate::RGBColor;

/// BT.709 weights of the red, green and blue channels.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// [`LUMA_WEIGHTS`] in ten-thousandths.  Integer weights summing to
/// 10000 keep the luma of any gray exactly equal to its channel value.
pub(crate) const LUMA_WEIGHTS_10K: [f64; 3] = [2126., 7152., 722.];

/// Backgrounds with a luma at or above this value get a black
/// foreground, the others a white one.
pub const LUMA_THRESHOLD: f64 = 165.;

/// Foreground color legible on a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde",
           derive(serde::Serialize, serde::Deserialize),
           serde(rename_all = "lowercase"))]
pub enum Contrast {
    Black,
    White,
}

impl Contrast {
    /// Return the foreground for a background of luma `luma`.
    #[inline]
    pub fn for_luma(luma: f64) -> Self {
        if luma >= LUMA_THRESHOLD { Contrast::Black } else { Contrast::White }
    }

    /// The CSS hex form, `#000000` or `#ffffff`.
    pub fn hex(self) -> &'static str {
        match self {
            Contrast::Black => "#000000",
            Contrast::White => "#ffffff",
        }
    }

    /// The color name, `black` or `white`.
    pub fn name(self) -> &'static str {
        match self {
            Contrast::Black => "black",
            Contrast::White => "white",
        }
    }

    /// Convert to any RGB encoding.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_legend::Contrast;
    /// let white: RGB8 = Contrast::White.color();
    /// assert_eq!(white, RGB8::new(255, 255, 255));
    /// ```
    pub fn color<Color: RGBColor>(self) -> Color {
        let x = match self { Contrast::Black => 0., Contrast::White => 255. };
        Color::from_rgba(RGBA { r: x, g: x, b: x, a: 255. })
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Luma of `spec` as resolved by `resolver`.
pub fn luma_with(resolver: &impl ColorResolver, spec: &str) -> Result<f64> {
    Ok(resolve_to_rgb(resolver, spec)?.luma())
}

/// Perceptual luma, in \[0, 255\], of the CSS color `spec`.
///
/// The BT.709 weights are applied to the sRGB encoded channels
/// without linearization.
///
/// ```
/// assert_eq!(color_legend::luma("white").unwrap(), 255.);
/// ```
pub fn luma(spec: &str) -> Result<f64> { luma_with(&CssResolver, spec) }

/// Foreground legible on the background `spec` as resolved by
/// `resolver`.
pub fn contrasting_color_with(
    resolver: &impl ColorResolver, spec: &str) -> Result<Contrast> {
    luma_with(resolver, spec).map(Contrast::for_luma)
}

/// Foreground (black or white) legible on the CSS color `spec`.
///
/// ```
/// use color_legend::{contrasting_color, Contrast};
/// assert_eq!(contrasting_color("yellow").unwrap(), Contrast::Black);
/// assert_eq!(contrasting_color("navy").unwrap(), Contrast::White);
/// ```
pub fn contrasting_color(spec: &str) -> Result<Contrast> {
    contrasting_color_with(&CssResolver, spec)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;
    use crate::error::Error;

    #[test]
    fn luma_bounds() {
        assert_eq!(luma("#000000"), Ok(0.));
        assert_eq!(luma("#ffffff"), Ok(255.));
    }

    #[test]
    fn gray_luma_is_exact() {
        for v in 0 ..= 255u8 {
            assert_eq!(RGB8::new(v, v, v).luma(), v as f64);
        }
        assert_eq!(luma("rgb(165, 165, 165)"), Ok(165.));
        assert_eq!(contrasting_color("rgb(165, 165, 165)"), Ok(Contrast::Black));
    }

    #[test]
    fn luma_of_primaries() {
        let r = luma("red").unwrap();
        assert!((r - 0.2126 * 255.).abs() < 1e-9, "{r}");
        let g = luma("#00ff00").unwrap();
        assert!((g - 0.7152 * 255.).abs() < 1e-9, "{g}");
        let b = luma("blue").unwrap();
        assert!((b - 0.0722 * 255.).abs() < 1e-9, "{b}");
    }

    #[test]
    fn red_gets_white() {
        assert_eq!(contrasting_color("red"), Ok(Contrast::White));
        assert_eq!(contrasting_color("#313131"), Ok(Contrast::White));
        assert_eq!(contrasting_color("lime"), Ok(Contrast::Black));
        assert_eq!(contrasting_color("#EEEEEE"), Ok(Contrast::Black));
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(Contrast::for_luma(165.), Contrast::Black);
        assert_eq!(Contrast::for_luma(164.999), Contrast::White);
        assert_eq!(Contrast::for_luma(0.), Contrast::White);
        assert_eq!(Contrast::for_luma(255.), Contrast::Black);
    }

    #[test]
    fn grays_around_threshold() {
        // A gray's luma is its channel value (the weights sum to 1).
        assert_eq!(contrasting_color("rgb(164, 164, 164)"), Ok(Contrast::White));
        assert_eq!(contrasting_color("rgb(166, 166, 166)"), Ok(Contrast::Black));
    }

    #[test]
    fn total_over_resolvable_colors() {
        for spec in ["black", "white", "teal", "#123", "hsl(200, 50%, 60%)",
                     "rgb(10 200 30)", "transparent", "goldenrod"] {
            let c = contrasting_color(spec).unwrap();
            assert!(matches!(c, Contrast::Black | Contrast::White));
        }
    }

    #[test]
    fn invalid_spec_propagates() {
        assert_eq!(luma("bogus"),
                   Err(Error::InvalidColorSpec("bogus".to_string())));
        assert!(contrasting_color("#zzzzzz").is_err());
    }

    #[test]
    fn custom_resolver() {
        let always_white = |_: &str| Some("#ffffff".to_string());
        assert_eq!(contrasting_color_with(&always_white, "whatever"),
                   Ok(Contrast::Black));
    }

    #[test]
    fn contrast_rendering() {
        assert_eq!(Contrast::Black.to_string(), "#000000");
        assert_eq!(Contrast::White.hex(), "#ffffff");
        assert_eq!(Contrast::Black.name(), "black");
        let black: RGB8 = Contrast::Black.color();
        assert_eq!(black, RGB8::new(0, 0, 0));
    }
}
