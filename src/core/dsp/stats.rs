//! Statistical helpers over f64 buffers

/// Arithmetic mean, 0 for an empty slice
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Mean of absolute values
pub fn mean_abs(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|x| x.abs()).sum::<f64>() / data.len() as f64
}

/// Mean of squared values
pub fn energy(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|x| x * x).sum::<f64>() / data.len() as f64
}

/// Peak absolute amplitude
pub fn peak_amplitude(data: &[f64]) -> f64 {
    data.iter().map(|s| s.abs()).fold(0.0f64, f64::max)
}

/// Sign flips between adjacent samples divided by the total sample count.
/// A zero sample never counts as a crossing.
pub fn zero_crossing_rate(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let crossings = data.windows(2).filter(|w| w[0] * w[1] < 0.0).count();
    crossings as f64 / data.len() as f64
}
