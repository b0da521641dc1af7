//! SVG diagnostic figures.
//!
//! Residual histograms and scatter plots implement [`DiagnosticPlot`]; the
//! leverage graph is rendered through
//! [`InfluenceCalculator`](crate::diagnostics::InfluenceCalculator).

pub mod histogram;
pub(crate) mod influence_plot;
mod plotter;
pub(crate) mod render;

pub use influence_plot::{influence_points, InfluencePoint, LEVERAGE_LABEL, STUDENTIZED_LABEL};
pub use plotter::{Calculations, DiagnosticPlot, HistogramPlotter, Plotter, ScatterPlotter};
pub use render::{Annotation, PlotError};
