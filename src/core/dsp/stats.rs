//! Statistical helpers for energy-series analysis

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(data: &[f32]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f32>() / data.len() as f32
}

/// Population standard deviation; 0.0 for an empty slice.
pub fn std_dev(data: &[f32]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let variance = data.iter().map(|&x| (x - m) * (x - m)).sum::<f32>() / data.len() as f32;
    variance.sqrt()
}
