//! Histogram binning.

use faer::Col;

/// One histogram bar covering `[lower, upper)` (the last bar is closed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Number of bins chosen by the `auto` rule: the larger of the Sturges and
/// Freedman–Diaconis bin counts.
///
/// Sturges is used alone when the interquartile range is zero, or when the
/// Freedman–Diaconis count is not finite or exceeds the number of values.
/// Near-identical values with a single outlier otherwise ask for an
/// unbounded number of bins.
pub fn auto_bin_count(values: &[f64]) -> usize {
    let n = values.len();
    let Some((lo, hi)) = finite_range(values) else {
        return 1;
    };
    let range = hi - lo;
    if range == 0.0 {
        return 1;
    }

    let sturges = ((n as f64).log2() + 1.0).ceil().max(1.0) as usize;
    let cap = n.max(sturges);

    let fd_width = 2.0 * interquartile_range(values) * (n as f64).powf(-1.0 / 3.0);
    if fd_width <= 0.0 {
        return sturges;
    }
    let fd = (range / fd_width).ceil();
    if !fd.is_finite() || fd > cap as f64 {
        return sturges;
    }

    sturges.max(fd as usize)
}

/// Bin the finite entries of `values` using [`auto_bin_count`] equal-width bins.
///
/// A zero-width range is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram_bins(values: &Col<f64>) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    let Some((mut lo, mut hi)) = finite_range(&finite) else {
        return Vec::new();
    };
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let k = auto_bin_count(&finite);
    let width = (hi - lo) / k as f64;

    let mut bins: Vec<HistogramBin> = (0..k)
        .map(|b| HistogramBin {
            lower: lo + b as f64 * width,
            upper: if b + 1 == k {
                hi
            } else {
                lo + (b + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    for v in finite {
        let idx = (((v - lo) / (hi - lo)) * k as f64) as usize;
        bins[idx.min(k - 1)].count += 1;
    }

    bins
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Linear-interpolation percentile of already finite values, `q` in [0, 1].
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let below = pos.floor() as usize;
    let above = pos.ceil() as usize;
    let frac = pos - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * frac
}

fn interquartile_range(values: &[f64]) -> f64 {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(f64::total_cmp);
    percentile(&sorted, 0.75) - percentile(&sorted, 0.25)
}
