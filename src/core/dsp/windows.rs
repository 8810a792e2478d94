//! Window function implementations

use std::f32::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Rectangular,
    Hann,
    Hamming,
}

/// Create window function
pub fn create_window(size: usize, window_type: WindowType) -> Vec<f32> {
    let n = size as f32;
    (0..size)
        .map(|i| {
            let x = i as f32;
            match window_type {
                WindowType::Rectangular => 1.0,
                WindowType::Hann => 0.5 * (1.0 - (2.0 * PI * x / n).cos()),
                WindowType::Hamming => 0.54 - 0.46 * (2.0 * PI * x / n).cos(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hann_window() {
        let window = create_window(4, WindowType::Hann);
        assert!((window[0]).abs() < 0.01); // Should be ~0 at edges
        assert!((window[2] - 1.0).abs() < 0.01); // Should be ~1 at center
    }

    #[test]
    fn test_rectangular_window() {
        let window = create_window(8, WindowType::Rectangular);
        assert!(window.iter().all(|&w| (w - 1.0).abs() < f32::EPSILON));
    }
}
