//! Pearson correlation between study time and performance

/// Compute the population Pearson correlation of two paired sequences.
///
/// Returns `None` when the correlation is undefined: empty input, sequences
/// of different lengths, or zero variance in either variable.
///
/// # Arguments
/// * `xs` - First variable (study hours)
/// * `ys` - Second variable (student averages), paired with `xs` by index
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n == 0 || n != ys.len() {
        return None;
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov_xy = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov_xy += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = var_x.sqrt() * var_y.sqrt();
    if denominator == 0.0 {
        return None;
    }

    Some(cov_xy / denominator)
}
