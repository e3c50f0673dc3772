use crate::error::Result;
use crate::metrics::{contrasting_color_with, Contrast};
use crate::resolve::ColorResolver;

/// Theme color of the map viewer when none is given.
pub const DEFAULT_THEME: &str = "#313131";

/// Colors of the map viewer controls derived from its theme color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    background: String,
    foreground: Contrast,
}

impl Theme {
    /// Build the theme of background `color`.
    ///
    /// # Example
    ///
    /// ```
    /// use color_legend::{CssResolver, Theme};
    /// let t = Theme::new(&CssResolver, "gold").unwrap();
    /// assert_eq!(t.foreground().hex(), "#000000");
    /// assert_eq!(t.border(), "#00000070");
    /// assert_eq!(t.icon_variant(), "black");
    /// ```
    pub fn new(resolver: &impl ColorResolver, color: &str) -> Result<Self> {
        let foreground = contrasting_color_with(resolver, color)?;
        Ok(Theme { background: color.to_string(), foreground })
    }

    /// The theme color, as given.
    pub fn background(&self) -> &str { &self.background }

    /// Color of text and lines drawn over the theme color.
    pub fn foreground(&self) -> Contrast { self.foreground }

    /// Border color: the foreground at 0x70 (44%) opacity, as
    /// `#rrggbbaa`.
    pub fn border(&self) -> String { format!("{}70", self.foreground.hex()) }

    /// Which variant, `"black"` or `"white"`, of the control icons
    /// suits the theme.
    pub fn icon_variant(&self) -> &'static str { self.foreground.name() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::resolve::CssResolver;

    #[test]
    fn default_theme() {
        let t = Theme::new(&CssResolver, DEFAULT_THEME).unwrap();
        assert_eq!(t.background(), "#313131");
        assert_eq!(t.foreground(), Contrast::White);
        assert_eq!(t.border(), "#ffffff70");
        assert_eq!(t.icon_variant(), "white");
    }

    #[test]
    fn light_theme() {
        let t = Theme::new(&CssResolver, "hsl(60, 100%, 90%)").unwrap();
        assert_eq!(t.foreground(), Contrast::Black);
        assert_eq!(t.icon_variant(), "black");
    }

    #[test]
    fn invalid_theme() {
        assert_eq!(Theme::new(&CssResolver, "#31313"),
                   Err(Error::InvalidColorSpec("#31313".to_string())));
    }
}
