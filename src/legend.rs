//! Cells of a discrete color ramp.

use log::warn;
use crate::error::Result;
use crate::metrics::{contrasting_color_with, Contrast};
use crate::resolve::ColorResolver;
use crate::stepper::{round_to, LegendDomain};

/// Colors of a legend when none are given: a ramp of grays.
pub const DEFAULT_COLORS: [&str; 8] = [
    "#000000", "#222222", "#444444", "#666666",
    "#888888", "#AAAAAA", "#CCCCCC", "#EEEEEE"];

/// A legend: one cell per color, the first and last cells labelled
/// with the bounds of the data range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde",
           derive(serde::Serialize, serde::Deserialize),
           serde(default))]
pub struct Legend {
    pub min: f64,
    pub max: f64,
    pub log: bool,
    /// Background of each cell, any CSS color.
    pub colors: Vec<String>,
    pub unit: String,
    /// Name of the layer the legend describes, if known.
    pub name: Option<String>,
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            min: 0.,
            max: 10.,
            log: false,
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            unit: String::new(),
            name: None,
        }
    }
}

/// One cell of a [`Legend`].
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub background: String,
    pub foreground: Contrast,
    pub label: Option<String>,
}

/// Legend of a map layer, as announced when the layer is added to the
/// map.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde",
           derive(serde::Serialize, serde::Deserialize),
           serde(default))]
pub struct LayerLegend {
    pub min: f64,
    pub max: f64,
    pub unit: String,
    pub name: String,
}

impl LayerLegend {
    /// Return the first legend of `layers`, skipping the layers
    /// without one.
    pub fn first_in<'a, I>(layers: I) -> Option<&'a LayerLegend>
    where I: IntoIterator<Item = Option<&'a LayerLegend>> {
        layers.into_iter().flatten().next()
    }
}

impl Legend {
    /// Set the range of the legend.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Use logarithmic (`true`) or linear steps.
    pub fn log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// Set the unit appended to the labels.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the colors from a comma separated list such as
    /// `"#fff,#888,black"`.  Blank items are skipped.
    ///
    /// Colors with commas inside (such as `rgb(1,2,3)`) cannot be
    /// given this way, set [`Legend::colors`] directly.
    pub fn colors_csv(mut self, csv: &str) -> Self {
        self.colors = csv.split(',').map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    /// Take the range, unit and name of a layer legend.
    pub fn apply(&mut self, layer: &LayerLegend) {
        self.min = layer.min;
        self.max = layer.max;
        self.unit = layer.unit.clone();
        self.name = Some(layer.name.clone());
    }

    /// The domain split into one step per color.
    pub fn domain(&self) -> LegendDomain {
        LegendDomain { min: self.min, max: self.max,
                       steps: self.colors.len(), log: self.log }
    }

    /// Label of a cell whose value is `x`: rounded to one decimal and
    /// followed by the unit.
    pub fn label(&self, x: f64) -> String {
        let x = round_to(x, 1) + 0.; // no "-0"
        if self.unit.is_empty() { format!("{x}") }
        else { format!("{x} {}", self.unit) }
    }

    /// Return the cells of the legend, in the order of the colors.
    ///
    /// A color that `resolver` does not understand is treated as a
    /// white background.  Fails if the domain is invalid, in
    /// particular if there are less than 2 colors.
    ///
    /// # Example
    ///
    /// ```
    /// use color_legend::{Contrast, CssResolver, Legend};
    /// let legend = Legend::default().range(0., 35.).unit("°C")
    ///     .colors_csv("navy,teal,yellow");
    /// let cells = legend.entries(&CssResolver).unwrap();
    /// assert_eq!(cells[0].label.as_deref(), Some("0 °C"));
    /// assert_eq!(cells[1].label, None);
    /// assert_eq!(cells[2].foreground, Contrast::Black);
    /// assert_eq!(cells[2].label.as_deref(), Some("35 °C"));
    /// ```
    pub fn entries(&self, resolver: &impl ColorResolver)
                   -> Result<Vec<LegendEntry>> {
        let steps = self.domain().steps()?;
        let last = steps.len() - 1;
        let entries = steps.map(|(i, x)| {
            let background = &self.colors[i];
            let foreground = contrasting_color_with(resolver, background)
                .unwrap_or_else(|e| {
                    warn!("legend cell {i}: {e}, assuming a white background");
                    Contrast::Black
                });
            let label = if i == 0 || i == last { Some(self.label(x)) }
                        else { None };
            LegendEntry { background: background.clone(), foreground, label }
        });
        Ok(entries.collect())
    }
}
