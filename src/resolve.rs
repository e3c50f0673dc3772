//! Resolution of CSS color strings to RGB.

use log::debug;
use rgb::RGB8;
use crate::error::{Error, Result};

/// The host capability turning an arbitrary color string into its
/// canonical form.
///
/// A browser would assign the string to a canvas `fillStyle` and read
/// it back; [`CssResolver`] does the same with a CSS color parser.
pub trait ColorResolver {
    /// Return the normalized `#rrggbb` form of `spec`, or `None` if it
    /// does not denote a color.
    fn normalize(&self, spec: &str) -> Option<String>;
}

impl<F> ColorResolver for F where F: Fn(&str) -> Option<String> {
    #[inline]
    fn normalize(&self, spec: &str) -> Option<String> { self(spec) }
}

/// Resolver accepting every CSS color syntax: named colors, `#rgb`,
/// `#rrggbb`, `rgb()`, `hsl()`, `hwb()`...
///
/// The alpha channel is dropped, a translucent color resolves to its
/// RGB channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssResolver;

impl ColorResolver for CssResolver {
    fn normalize(&self, spec: &str) -> Option<String> {
        // Bare hex digits ("f00", "bad") are not CSS colors.
        let s = spec.trim();
        if !s.is_empty() && s.bytes().all(|c| c.is_ascii_hexdigit()) {
            return None
        }
        let [r, g, b, _] = csscolorparser::parse(spec).ok()?.to_rgba8();
        Some(format!("#{r:02x}{g:02x}{b:02x}"))
    }
}

/// Decode a `#rrggbb` string (the `#` is optional).
fn decode_hex(hex: &str) -> Option<RGB8> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16).ok();
    Some(RGB8::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Resolve `spec` to its RGB channels using `resolver`.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use color_legend::{resolve_to_rgb, CssResolver};
/// assert_eq!(resolve_to_rgb(&CssResolver, "red").unwrap(),
///            RGB8::new(255, 0, 0));
/// ```
pub fn resolve_to_rgb(resolver: &impl ColorResolver, spec: &str) -> Result<RGB8> {
    let rgb = resolver.normalize(spec).as_deref().and_then(decode_hex);
    rgb.ok_or_else(|| {
        debug!("cannot resolve color {spec:?}");
        Error::InvalidColorSpec(spec.to_string())
    })
}
