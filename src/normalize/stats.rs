//! Element-wise normalization of value lists.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n). Returns 0.0 for an
/// empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let var = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Z-score normalization: `(x − mean) / std`.
///
/// Returns an empty vector for empty input and all zeros when the standard
/// deviation is zero.
///
/// # Examples
///
/// ```
/// use u_pareto::normalize::z_score;
///
/// let z = z_score(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((z[0] + 1.5).abs() < 1e-10);
/// assert!((z[7] - 2.0).abs() < 1e-10);
///
/// assert_eq!(z_score(&[3.0, 3.0]), vec![0.0, 0.0]);
/// ```
pub fn z_score(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let avg = mean(values);
    let std = std_dev(values);
    if std == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - avg) / std).collect()
}

/// Min-max normalization into `[0, 1]`, optionally inverted (`1 − v`) so
/// that lower raw values score higher.
///
/// A constant list maps to 0.5 for every element, inverted or not. This
/// differs from the matrix score normalizer, which maps constant columns
/// to 0.0.
///
/// # Examples
///
/// ```
/// use u_pareto::normalize::min_max;
///
/// assert_eq!(min_max(&[10.0, 15.0, 20.0], false), vec![0.0, 0.5, 1.0]);
/// assert_eq!(min_max(&[10.0, 15.0, 20.0], true), vec![1.0, 0.5, 0.0]);
/// assert_eq!(min_max(&[7.0, 7.0], true), vec![0.5, 0.5]);
/// assert!(min_max(&[], false).is_empty());
/// ```
pub fn min_max(values: &[f64], invert: bool) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![0.5; values.len()];
    }

    let range = max - min;
    values
        .iter()
        .map(|v| {
            let n = (v - min) / range;
            if invert {
                1.0 - n
            } else {
                n
            }
        })
        .collect()
}
