//! Influence diagnostics of a fitted least-squares model.

use std::any::Any;
use std::path::Path;

use crate::core::{FigureStyle, InvalidTypeError};
use crate::plotting::influence_plot::draw_influence;
use crate::plotting::render::{svg_file, svg_string};
use crate::plotting::PlotError;
use crate::solvers::FittedLeastSquares;
use crate::validation::check_model_validity;
use faer::Col;
use log::debug;

/// Borrows a fitted model and exposes its influence measures.
#[derive(Debug, Clone)]
pub struct InfluenceCalculator<'a> {
    model: &'a FittedLeastSquares,
    style: FigureStyle,
}

impl<'a> InfluenceCalculator<'a> {
    /// Accept only models produced by this crate's least-squares fitters.
    ///
    /// # Errors
    /// [`InvalidTypeError::Model`] for any other value.
    pub fn new(model: &'a dyn Any) -> Result<Self, InvalidTypeError> {
        let model = check_model_validity(model)?;
        debug!(
            "influence calculator over {} observations",
            model.n_observations()
        );
        Ok(Self {
            model,
            style: FigureStyle::default(),
        })
    }

    /// Replace the rendering style.
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    pub fn model(&self) -> &'a FittedLeastSquares {
        self.model
    }

    /// Cook's distance and its p-values.
    pub fn cooks_distance(&self) -> (Col<f64>, Col<f64>) {
        self.model.influence().cooks_distance
    }

    /// Diagonal of the hat matrix.
    pub fn leverage(&self) -> Col<f64> {
        self.model.influence().hat_matrix_diag
    }

    /// Render the leverage graph to an SVG file.
    pub fn show(&self, model_name: &str, path: impl AsRef<Path>) -> Result<(), PlotError> {
        svg_file(path.as_ref(), &self.style, |root| {
            draw_influence(root, self.model, model_name, &self.style)
        })
    }

    /// Render the leverage graph to an SVG document held in memory.
    pub fn render_svg(&self, model_name: &str) -> Result<String, PlotError> {
        svg_string(&self.style, |root| {
            draw_influence(root, self.model, model_name, &self.style)
        })
    }
}
