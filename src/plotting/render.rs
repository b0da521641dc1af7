//! Drawing primitives shared by the diagnostic figures.

use std::path::Path;

use crate::core::FigureStyle;
use crate::plotting::histogram::HistogramBin;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

/// Errors raised while rendering a figure.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("invalid figure style: {0}")]
    Style(#[from] crate::core::StyleError),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing(err.to_string())
    }
}

/// A single labelled point drawn on top of a scatter panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

pub(crate) fn font(style: &FigureStyle, size: f64) -> FontDesc<'_> {
    let weight = if style.bold {
        FontStyle::Bold
    } else {
        FontStyle::Normal
    };
    FontDesc::new(FontFamily::Name(&style.font_family), size, weight)
}

/// Render into an in-memory SVG document.
pub(crate) fn svg_string<F>(style: &FigureStyle, draw: F) -> Result<String, PlotError>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<(), PlotError>,
{
    style.validate()?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, style.size).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }
    Ok(svg)
}

/// Render into an SVG file at `path`.
pub(crate) fn svg_file<F>(path: &Path, style: &FigureStyle, draw: F) -> Result<(), PlotError>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<(), PlotError>,
{
    style.validate()?;
    let root = SVGBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE)?;
    draw(&root)?;
    root.present()?;
    Ok(())
}

/// Draw a (possibly multi-line) centred title and return the area below it.
pub(crate) fn draw_title<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    style: &FigureStyle,
) -> Result<DrawingArea<DB, Shift>, PlotError> {
    let lines: Vec<&str> = title.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Ok(root.clone());
    }

    let (width, _) = root.dim_in_pixel();
    let line_height = (style.title_size * 1.25).ceil() as i32;
    let text_style =
        TextStyle::from(font(style, style.title_size)).pos(Pos::new(HPos::Center, VPos::Top));

    for (k, line) in lines.iter().enumerate() {
        root.draw(&Text::new(
            line.to_string(),
            (width as i32 / 2, k as i32 * line_height + line_height / 4),
            text_style.clone(),
        ))?;
    }

    let (_, body) = root.split_vertically(lines.len() as i32 * line_height + line_height / 2);
    Ok(body)
}

/// Draw a histogram panel.
pub(crate) fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    bins: &[HistogramBin],
    x_label: &str,
    y_label: &str,
    style: &FigureStyle,
) -> Result<(), PlotError> {
    let (x_lo, x_hi) = match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => (first.lower, last.upper),
        _ => (0.0, 1.0),
    };
    let y_hi = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64 * 1.05;

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(style.label_area)
        .y_label_area_size(style.label_area)
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .axis_desc_style(font(style, style.label_size))
        .label_style(font(style, style.tick_label_size))
        .draw()?;

    let fill = style.color.mix(style.opacity).filled();
    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.lower, 0.0), (b.upper, b.count as f64)], fill)
    }))?;
    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.lower, 0.0), (b.upper, b.count as f64)], BLACK.stroke_width(1))
    }))?;

    Ok(())
}

/// Draw a scatter panel; `radii` overrides the marker size per point.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    xs: &[f64],
    ys: &[f64],
    radii: Option<&[u32]>,
    annotations: &[Annotation],
    x_label: &str,
    y_label: &str,
    style: &FigureStyle,
) -> Result<(), PlotError> {
    let points: Vec<(usize, f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .enumerate()
        .filter(|(_, (x, y))| x.is_finite() && y.is_finite())
        .map(|(i, (&x, &y))| (i, x, y))
        .collect();

    let (x_lo, x_hi) = padded_range(points.iter().map(|p| p.1));
    let (y_lo, y_hi) = padded_range(points.iter().map(|p| p.2));

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(style.label_area)
        .y_label_area_size(style.label_area)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .axis_desc_style(font(style, style.label_size))
        .label_style(font(style, style.tick_label_size))
        .draw()?;

    let fill = style.color.mix(style.opacity).filled();
    chart.draw_series(points.iter().map(|&(i, x, y)| {
        let radius = radii.map_or(style.marker_size, |r| r[i]);
        Circle::new((x, y), radius, fill)
    }))?;

    let label_font = font(style, style.tick_label_size);
    chart.draw_series(annotations.iter().map(|a| {
        Text::new(a.label.clone(), (a.x, a.y), label_font.clone())
    }))?;

    Ok(())
}

/// Data range padded by 5% on each side; degenerate ranges widen by ±0.5.
pub(crate) fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let bounds = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    });

    match bounds {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        let (lo, hi) = padded_range([0.0, 10.0].into_iter());
        assert!((lo + 0.5).abs() < 1e-12);
        assert!((hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_padded_range_degenerate() {
        assert_eq!(padded_range([2.0, 2.0].into_iter()), (1.5, 2.5));
        assert_eq!(padded_range(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn test_title_lines_rendered() {
        let style = FigureStyle::builder().size(400, 300).build_unchecked();
        let svg = svg_string(&style, |root| {
            draw_title(root, "First line\nSecond line", &style).map(|_| ())
        })
        .expect("rendering should succeed");

        assert!(svg.contains("First line"));
        assert!(svg.contains("Second line"));
    }

    #[test]
    fn test_invalid_style_rejected() {
        let style = FigureStyle::builder().size(0, 0).build_unchecked();
        let result = svg_string(&style, |_| Ok(()));
        assert!(matches!(result, Err(PlotError::Style(_))));
    }
}
