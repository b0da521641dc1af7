//! Figure styling passed explicitly to every renderer.

use plotters::style::RGBColor;
use thiserror::Error;

/// Visual configuration for diagnostic figures.
///
/// Renderers never consult process-wide defaults; every plot receives one of
/// these values.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    /// Figure size in pixels (width, height).
    pub size: (u32, u32),
    /// Font family used for all text.
    pub font_family: String,
    /// Font size of the figure title.
    pub title_size: f64,
    /// Font size of axis labels.
    pub label_size: f64,
    /// Font size of tick labels.
    pub tick_label_size: f64,
    /// Whether titles and labels are drawn in bold.
    pub bold: bool,
    /// Space reserved for axis labels, in pixels.
    pub label_area: u32,
    /// Fill colour of histogram bars and scatter markers.
    pub color: RGBColor,
    /// Opacity of histogram bars and scatter markers.
    pub opacity: f64,
    /// Marker radius for scatter plots, in pixels.
    pub marker_size: u32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            size: (1200, 800),
            font_family: "sans-serif".to_string(),
            title_size: 36.0,
            label_size: 18.0,
            tick_label_size: 14.0,
            bold: true,
            label_area: 60,
            color: RGBColor(76, 114, 176),
            opacity: 0.75,
            marker_size: 5,
        }
    }
}

/// Errors that can occur when validating a figure style.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("figure size must be positive, got {0}x{1}")]
    InvalidSize(u32, u32),
    #[error("font size must be positive, got {0}")]
    InvalidFontSize(f64),
    #[error("opacity must be in [0, 1], got {0}")]
    InvalidOpacity(f64),
    #[error("font family must not be empty")]
    EmptyFontFamily,
}

impl FigureStyle {
    /// Create a new builder for figure styles.
    pub fn builder() -> FigureStyleBuilder {
        FigureStyleBuilder::default()
    }

    /// Wide layout with large fonts, suited to side-by-side model reports.
    pub fn report() -> Self {
        Self {
            size: (2000, 1000),
            title_size: 30.0,
            label_size: 25.0,
            tick_label_size: 20.0,
            label_area: 80,
            ..Default::default()
        }
    }

    /// Validate the style and return an error if invalid.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(StyleError::InvalidSize(self.size.0, self.size.1));
        }
        for size in [self.title_size, self.label_size, self.tick_label_size] {
            if !(size.is_finite() && size > 0.0) {
                return Err(StyleError::InvalidFontSize(size));
            }
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(StyleError::InvalidOpacity(self.opacity));
        }
        if self.font_family.trim().is_empty() {
            return Err(StyleError::EmptyFontFamily);
        }
        Ok(())
    }
}

/// Builder for `FigureStyle`.
#[derive(Debug, Clone, Default)]
pub struct FigureStyleBuilder {
    style: FigureStyle,
}

impl FigureStyleBuilder {
    /// Create a new builder with default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the figure size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.style.size = (width, height);
        self
    }

    /// Set the font family.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.style.font_family = family.into();
        self
    }

    /// Set the figure title font size.
    pub fn title_size(mut self, size: f64) -> Self {
        self.style.title_size = size;
        self
    }

    /// Set the axis label font size.
    pub fn label_size(mut self, size: f64) -> Self {
        self.style.label_size = size;
        self
    }

    /// Set the tick label font size.
    pub fn tick_label_size(mut self, size: f64) -> Self {
        self.style.tick_label_size = size;
        self
    }

    /// Set whether text is drawn in bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = bold;
        self
    }

    /// Set the space reserved for axis labels.
    pub fn label_area(mut self, pixels: u32) -> Self {
        self.style.label_area = pixels;
        self
    }

    /// Set the fill colour.
    pub fn color(mut self, color: RGBColor) -> Self {
        self.style.color = color;
        self
    }

    /// Set the fill opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = opacity;
        self
    }

    /// Set the scatter marker radius.
    pub fn marker_size(mut self, radius: u32) -> Self {
        self.style.marker_size = radius;
        self
    }

    /// Build the style, validating all parameters.
    pub fn build(self) -> Result<FigureStyle, StyleError> {
        self.style.validate()?;
        Ok(self.style)
    }

    /// Build the style without validation.
    pub fn build_unchecked(self) -> FigureStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_valid() {
        assert!(FigureStyle::default().validate().is_ok());
        assert!(FigureStyle::report().validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let style = FigureStyle::builder()
            .size(640, 480)
            .title_size(20.0)
            .bold(false)
            .build()
            .expect("style should be valid");

        assert_eq!(style.size, (640, 480));
        assert!((style.title_size - 20.0).abs() < 1e-12);
        assert!(!style.bold);
    }

    #[test]
    fn test_validation_invalid_size() {
        let result = FigureStyle::builder().size(0, 480).build();
        assert!(matches!(result, Err(StyleError::InvalidSize(0, 480))));
    }

    #[test]
    fn test_validation_invalid_font_size() {
        let result = FigureStyle::builder().label_size(-1.0).build();
        assert!(matches!(result, Err(StyleError::InvalidFontSize(_))));
    }

    #[test]
    fn test_validation_invalid_opacity() {
        let result = FigureStyle::builder().opacity(1.5).build();
        assert!(matches!(result, Err(StyleError::InvalidOpacity(_))));
    }

    #[test]
    fn test_validation_empty_font_family() {
        let result = FigureStyle::builder().font_family("  ").build();
        assert!(matches!(result, Err(StyleError::EmptyFontFamily)));
    }

    #[test]
    fn test_build_unchecked_skips_validation() {
        let style = FigureStyle::builder().opacity(2.0).build_unchecked();
        assert!((style.opacity - 2.0).abs() < 1e-12);
    }
}
