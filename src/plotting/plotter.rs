//! Residual diagnostic figures for an observation pair.

use std::path::Path;

use crate::core::{ArrayInput, FigureStyle, InvalidTypeError};
use crate::diagnostics::ErrorCalculator;
use crate::plotting::histogram::histogram_bins;
use crate::plotting::render::{self, draw_histogram, draw_scatter, draw_title, PlotError};
use crate::validation::check_for_array_validity;
use faer::Col;
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::{DrawingArea, DrawingBackend};

/// Residuals and standardized residuals of an observation pair.
#[derive(Debug, Clone)]
pub struct Calculations {
    pub residuals: Col<f64>,
    pub standardized_residuals: Col<f64>,
}

impl Calculations {
    pub const RESIDUALS: &'static str = "Residuals";
    pub const STANDARDIZED_RESIDUALS: &'static str = "Standardized Residuals";

    fn from_calculator(calc: &ErrorCalculator<'_>) -> Self {
        Self {
            residuals: calc.get_residuals(),
            standardized_residuals: calc.get_standardised_residuals(),
        }
    }

    /// Entries in display order: residuals, then standardized residuals.
    pub fn entries(&self) -> [(&'static str, &Col<f64>); 2] {
        [
            (Self::RESIDUALS, &self.residuals),
            (Self::STANDARDIZED_RESIDUALS, &self.standardized_residuals),
        ]
    }

    /// Look up an entry by its label.
    pub fn get(&self, label: &str) -> Option<&Col<f64>> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == label)
            .map(|(_, values)| values)
    }
}

/// A two-panel residual figure: compute once, render on demand.
///
/// Implementors differ only in [`draw_panels`](DiagnosticPlot::draw_panels)
/// and [`title`](DiagnosticPlot::title).
pub trait DiagnosticPlot {
    /// Observed values.
    fn observed(&self) -> &Col<f64>;

    /// Predicted values.
    fn predictions(&self) -> &Col<f64>;

    /// Calculations computed when the plotter was constructed.
    fn calculations(&self) -> &Calculations;

    /// Style applied when rendering.
    fn style(&self) -> &FigureStyle;

    /// Figure title for the given model name.
    fn title(&self, model_name: &str) -> String;

    /// Draw the two panels.
    fn draw_panels<DB: DrawingBackend>(
        &self,
        left: &DrawingArea<DB, Shift>,
        right: &DrawingArea<DB, Shift>,
    ) -> Result<(), PlotError>;

    /// Recompute residuals and standardized residuals from the stored pair.
    fn run_calculations(&self) -> Calculations {
        let calc = ErrorCalculator::from_validated(self.observed(), self.predictions());
        Calculations::from_calculator(&calc)
    }

    /// Draw the titled figure onto `root`.
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        model_name: &str,
    ) -> Result<(), PlotError> {
        let body = draw_title(root, &self.title(model_name), self.style())?;
        let panels = body.split_evenly((1, 2));
        self.draw_panels(&panels[0], &panels[1])
    }

    /// Render the figure to an SVG file.
    fn plot(&self, model_name: &str, path: impl AsRef<Path>) -> Result<(), PlotError> {
        render::svg_file(path.as_ref(), self.style(), |root| self.draw(root, model_name))
    }

    /// Render the figure to an SVG document held in memory.
    fn render_svg(&self, model_name: &str) -> Result<String, PlotError> {
        render::svg_string(self.style(), |root| self.draw(root, model_name))
    }
}

#[derive(Debug, Clone)]
struct ResidualDiagnostics<'a> {
    y: &'a Col<f64>,
    y_hat: &'a Col<f64>,
    calculations: Calculations,
    style: FigureStyle,
}

impl<'a> ResidualDiagnostics<'a> {
    fn new(y: ArrayInput<'a>, y_hat: ArrayInput<'a>) -> Result<Self, InvalidTypeError> {
        let (y, y_hat) = check_for_array_validity(y, y_hat)?;
        let calculations =
            Calculations::from_calculator(&ErrorCalculator::from_validated(y, y_hat));
        debug!("computed residual diagnostics for {} observations", y.nrows());
        Ok(Self {
            y,
            y_hat,
            calculations,
            style: FigureStyle::default(),
        })
    }
}

fn titled(model_name: &str, headings: &[&str]) -> String {
    std::iter::once(model_name)
        .chain(headings.iter().copied())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Histograms of residuals and standardized residuals.
#[derive(Debug, Clone)]
pub struct Plotter<'a> {
    inner: ResidualDiagnostics<'a>,
}

/// Alternative name for the histogram variant.
pub type HistogramPlotter<'a> = Plotter<'a>;

impl<'a> Plotter<'a> {
    /// Validate the pair and compute residuals eagerly.
    pub fn new(
        y: impl Into<ArrayInput<'a>>,
        y_hat: impl Into<ArrayInput<'a>>,
    ) -> Result<Self, InvalidTypeError> {
        Ok(Self {
            inner: ResidualDiagnostics::new(y.into(), y_hat.into())?,
        })
    }

    /// Replace the rendering style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.inner.style = style;
        self
    }
}

impl DiagnosticPlot for Plotter<'_> {
    fn observed(&self) -> &Col<f64> {
        self.inner.y
    }

    fn predictions(&self) -> &Col<f64> {
        self.inner.y_hat
    }

    fn calculations(&self) -> &Calculations {
        &self.inner.calculations
    }

    fn style(&self) -> &FigureStyle {
        &self.inner.style
    }

    fn title(&self, model_name: &str) -> String {
        titled(model_name, &["Residuals Histogram"])
    }

    fn draw_panels<DB: DrawingBackend>(
        &self,
        left: &DrawingArea<DB, Shift>,
        right: &DrawingArea<DB, Shift>,
    ) -> Result<(), PlotError> {
        let [(res_label, residuals), (std_label, standardized)] = self.calculations().entries();
        draw_histogram(left, &histogram_bins(residuals), res_label, "Count", self.style())?;
        draw_histogram(right, &histogram_bins(standardized), std_label, "Count", self.style())
    }
}

/// Predictions plotted against residuals and standardized residuals.
#[derive(Debug, Clone)]
pub struct ScatterPlotter<'a> {
    inner: ResidualDiagnostics<'a>,
}

impl<'a> ScatterPlotter<'a> {
    /// Validate the pair and compute residuals eagerly.
    pub fn new(
        y: impl Into<ArrayInput<'a>>,
        y_hat: impl Into<ArrayInput<'a>>,
    ) -> Result<Self, InvalidTypeError> {
        Ok(Self {
            inner: ResidualDiagnostics::new(y.into(), y_hat.into())?,
        })
    }

    /// Replace the rendering style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.inner.style = style;
        self
    }
}

impl DiagnosticPlot for ScatterPlotter<'_> {
    fn observed(&self) -> &Col<f64> {
        self.inner.y
    }

    fn predictions(&self) -> &Col<f64> {
        self.inner.y_hat
    }

    fn calculations(&self) -> &Calculations {
        &self.inner.calculations
    }

    fn style(&self) -> &FigureStyle {
        &self.inner.style
    }

    fn title(&self, model_name: &str) -> String {
        titled(model_name, &["Predictions vs. Residuals", "Scatter Plot"])
    }

    fn draw_panels<DB: DrawingBackend>(
        &self,
        left: &DrawingArea<DB, Shift>,
        right: &DrawingArea<DB, Shift>,
    ) -> Result<(), PlotError> {
        let predictions: Vec<f64> = self.predictions().iter().copied().collect();
        let [(res_label, residuals), (std_label, standardized)] = self.calculations().entries();

        let residuals: Vec<f64> = residuals.iter().copied().collect();
        draw_scatter(
            left,
            &predictions,
            &residuals,
            None,
            &[],
            "Predictions",
            res_label,
            self.style(),
        )?;

        let standardized: Vec<f64> = standardized.iter().copied().collect();
        draw_scatter(
            right,
            &predictions,
            &standardized,
            None,
            &[],
            "Predictions",
            std_label,
            self.style(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(values: &[f64]) -> Col<f64> {
        Col::from_fn(values.len(), |i| values[i])
    }

    #[test]
    fn test_entries_in_order() {
        let y = col(&[4.0, 5.0, 6.0]);
        let y_hat = col(&[7.0, 8.0, 9.0]);
        let plotter = Plotter::new(&y, &y_hat).expect("pair is valid");

        let labels: Vec<&str> = plotter
            .calculations()
            .entries()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, vec!["Residuals", "Standardized Residuals"]);
    }

    #[test]
    fn test_get_by_label() {
        let y = col(&[1.0, 2.0, 3.0]);
        let y_hat = col(&[1.0, 2.0, 4.0]);
        let plotter = ScatterPlotter::new(&y, &y_hat).expect("pair is valid");

        let residuals = plotter
            .calculations()
            .get("Residuals")
            .expect("residuals entry exists");
        assert_eq!(residuals[2], -1.0);
        assert!(plotter.calculations().get("Leverage").is_none());
    }

    #[test]
    fn test_titles() {
        let y = col(&[1.0, 2.0, 3.0]);
        let histogram = Plotter::new(&y, &y).expect("pair is valid");
        let scatter = ScatterPlotter::new(&y, &y).expect("pair is valid");

        assert_eq!(histogram.title("Model 1"), "Model 1\nResiduals Histogram");
        assert_eq!(
            scatter.title("Model 1"),
            "Model 1\nPredictions vs. Residuals\nScatter Plot"
        );
    }

    #[test]
    fn test_sequence_rejected() {
        let y = vec![1.0_f64, 2.0, 3.0];
        let y_hat = col(&[1.0, 2.0, 3.0]);
        let err = Plotter::new(&y, &y_hat).expect_err("sequence is not an array");
        assert_eq!(err.to_string(), "expected a numpy array for the parameter y");
    }
}
