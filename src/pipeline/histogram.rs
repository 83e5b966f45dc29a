//! Equal-width binning and ASCII bar rendering

use serde::Serialize;

/// Message rendered when there is nothing to plot
pub const NO_DATA_MESSAGE: &str = "No data to plot.";

/// Default number of bins
pub const DEFAULT_BINS: usize = 10;

/// Default bar width in characters
pub const DEFAULT_WIDTH: usize = 50;

const BAR_CHAR: char = '#';

/// A single histogram bin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: usize,
}

/// Bucket `values` into `bins` contiguous equal-width bins spanning `[min, max]`.
///
/// A value lands in the first bin with `lower <= v < upper`; the last bin is
/// closed on both ends so the maximum is always counted. Returns no bins for
/// empty input, `bins == 0`, or when all values are equal.
pub fn compute_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some((min, max)) = value_range(values) else {
        return Vec::new();
    };
    if bins == 0 || min == max {
        return Vec::new();
    }

    let step = (max - min) / bins as f64;
    let mut edges: Vec<f64> = (0..=bins).map(|i| min + i as f64 * step).collect();
    edges[bins] = max;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let slot = (0..bins).find(|&i| {
            if i + 1 == bins {
                edges[i] <= v && v <= edges[i + 1]
            } else {
                edges[i] <= v && v < edges[i + 1]
            }
        });
        if let Some(i) = slot {
            counts[i] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower_bound: edges[i],
            upper_bound: edges[i + 1],
            count,
        })
        .collect()
}

/// Render a text histogram of `values`.
///
/// Bars are scaled so the fullest bin spans `width` characters. When all
/// values are equal a single bar is drawn whose length is the value itself,
/// clamped to `width`.
pub fn render_histogram(values: &[f64], bins: usize, width: usize) -> String {
    let Some((min, max)) = value_range(values) else {
        return NO_DATA_MESSAGE.to_string();
    };

    if min == max {
        let value = values[0];
        let length = (value.round_ties_even().max(0.0) as usize).min(width);
        return format!("{:.2} | {}\n", value, bar(length));
    }

    let histogram = compute_histogram(values, bins);
    let max_count = histogram.iter().map(|b| b.count).max().unwrap_or(0);

    histogram
        .iter()
        .map(|b| {
            let length = if max_count > 0 {
                (b.count as f64 / max_count as f64 * width as f64).round_ties_even() as usize
            } else {
                0
            };
            format!(
                "{:>6.2} - {:>6.2} | {} ({})",
                b.lower_bound,
                b.upper_bound,
                bar(length),
                b.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bar(length: usize) -> String {
    std::iter::repeat(BAR_CHAR).take(length).collect()
}

fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}
