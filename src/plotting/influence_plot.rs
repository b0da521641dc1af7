//! Studentized residuals against leverage, sized by Cook's distance.

use crate::core::FigureStyle;
use crate::diagnostics::high_leverage_points;
use crate::plotting::render::{draw_scatter, draw_title, Annotation, PlotError};
use crate::solvers::FittedLeastSquares;
use plotters::coord::Shift;
use plotters::prelude::{DrawingArea, DrawingBackend};
use statrs::distribution::{ContinuousCDF, StudentsT};

pub const LEVERAGE_LABEL: &str = "H Leverage";
pub const STUDENTIZED_LABEL: &str = "Studentized Residuals";

/// Largest marker radius, reached by the most influential observation.
const MAX_RADIUS: f64 = 24.0;

/// One observation on the influence plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfluencePoint {
    pub index: usize,
    pub leverage: f64,
    pub studentized: f64,
    pub cooks_distance: f64,
    /// High leverage, or a studentized residual beyond the two-sided
    /// Student-t critical value.
    pub flagged: bool,
}

/// Collect the plotted quantities of every observation.
///
/// `alpha` is the two-sided significance level used to flag large
/// studentized residuals; leverage above `2p/n` is flagged as well.
pub fn influence_points(model: &FittedLeastSquares, alpha: f64) -> Vec<InfluencePoint> {
    let influence = model.influence();
    let leverage = &influence.hat_matrix_diag;
    let studentized = &influence.resid_studentized_external;
    let (distances, _) = &influence.cooks_distance;

    let critical = studentized_critical_value(model.df_resid(), alpha);
    let high_leverage = high_leverage_points(leverage, model.rank(), None);

    (0..leverage.nrows())
        .map(|i| {
            let r = studentized[i];
            let outlying = critical.is_some_and(|c| r.is_finite() && r.abs() > c);
            InfluencePoint {
                index: i,
                leverage: leverage[i],
                studentized: r,
                cooks_distance: distances[i],
                flagged: outlying || high_leverage.contains(&i),
            }
        })
        .collect()
}

/// Critical value of `t(df_resid - 1)` at `1 - alpha / 2`.
fn studentized_critical_value(df_resid: usize, alpha: f64) -> Option<f64> {
    if df_resid <= 1 {
        return None;
    }
    StudentsT::new(0.0, 1.0, (df_resid - 1) as f64)
        .ok()
        .map(|t| t.inverse_cdf(1.0 - alpha / 2.0))
}

/// Marker radii proportional to `sqrt(d / max d)`, never below the style's
/// marker size.
fn marker_radii(points: &[InfluencePoint], style: &FigureStyle) -> Vec<u32> {
    let max_d = points
        .iter()
        .map(|p| p.cooks_distance)
        .filter(|d| d.is_finite())
        .fold(0.0_f64, f64::max);
    let base = style.marker_size as f64;

    points
        .iter()
        .map(|p| {
            let d = p.cooks_distance;
            let scaled = if max_d > 0.0 && d.is_finite() {
                base + (MAX_RADIUS - base).max(0.0) * (d / max_d).sqrt()
            } else {
                base
            };
            scaled.round() as u32
        })
        .collect()
}

/// Draw the titled influence figure onto `root`.
pub(crate) fn draw_influence<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    model: &FittedLeastSquares,
    model_name: &str,
    style: &FigureStyle,
) -> Result<(), PlotError> {
    let body = draw_title(root, &format!("{}\nLeverage Graph", model_name), style)?;

    let points = influence_points(model, model.options().alpha);
    let xs: Vec<f64> = points.iter().map(|p| p.leverage).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.studentized).collect();
    let radii = marker_radii(&points, style);
    let annotations: Vec<Annotation> = points
        .iter()
        .filter(|p| p.flagged && p.leverage.is_finite() && p.studentized.is_finite())
        .map(|p| Annotation {
            x: p.leverage,
            y: p.studentized,
            label: p.index.to_string(),
        })
        .collect();

    draw_scatter(
        &body,
        &xs,
        &ys,
        Some(&radii),
        &annotations,
        LEVERAGE_LABEL,
        STUDENTIZED_LABEL,
        style,
    )
}
