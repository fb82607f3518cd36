//! Descriptive statistics shared by the accuracy checks.
//!
//! All functions take plain slices and never allocate beyond a sorted copy.
//! Standard deviation is the population form (divide by n).

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around `mean`.
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Returns an ascending copy of `values`.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Median of an ascending slice; even lengths average the middle pair.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n.is_multiple_of(2) {
        Some((sorted[mid.saturating_sub(1)] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Tukey fences computed from index-based quartiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartileBounds {
    /// Value at index `floor(n * 0.25)`
    pub q1: f64,
    /// Value at index `floor(n * 0.75)`
    pub q3: f64,
    /// `q1 - multiplier * iqr`
    pub lower: f64,
    /// `q3 + multiplier * iqr`
    pub upper: f64,
}

impl QuartileBounds {
    /// Returns true if `value` falls outside the fences.
    pub fn is_outside(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Computes quartiles of an ascending slice by direct indexing (no
/// interpolation) and widens them by `multiplier` times the IQR.
pub fn quartile_bounds(sorted: &[f64], multiplier: f64) -> QuartileBounds {
    let at = |fraction: f64| {
        let index = (sorted.len() as f64 * fraction).floor() as usize;
        sorted.get(index).copied().unwrap_or(0.0)
    };
    let q1 = at(0.25);
    let q3 = at(0.75);
    let iqr = q3 - q1;
    QuartileBounds {
        q1,
        q3,
        lower: q1 - multiplier * iqr,
        upper: q3 + multiplier * iqr,
    }
}

/// Absolute z-score; 0 when the spread is zero.
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev > 0.0 {
        (value - mean).abs() / std_dev
    } else {
        0.0
    }
}
