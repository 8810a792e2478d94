//! FFT processing with windowing

use rustfft::{num_complex::Complex, FftPlanner};
use super::windows::{create_window, WindowType};

/// FFT computation with windowing
pub struct FftProcessor {
    planner: FftPlanner<f32>,
    window: Vec<f32>,
    fft_size: usize,
}

impl FftProcessor {
    pub fn new(fft_size: usize, window_type: WindowType) -> Self {
        let window = create_window(fft_size, window_type);
        Self {
            planner: FftPlanner::new(),
            window,
            fft_size,
        }
    }

    /// Compute magnitude spectrum over the positive-frequency bins
    /// (`fft_size / 2 + 1` values, DC through Nyquist).
    ///
    /// Input shorter than `fft_size` is zero-padded.
    pub fn magnitude_spectrum(&mut self, samples: &[f32]) -> Vec<f32> {
        let fft = self.planner.plan_fft_forward(self.fft_size);

        let mut buffer: Vec<Complex<f32>> = samples
            .iter()
            .take(self.fft_size)
            .enumerate()
            .map(|(i, &s)| Complex::new(s * self.window[i], 0.0))
            .collect();

        // Zero-pad if necessary
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        fft.process(&mut buffer);

        buffer[..self.fft_size / 2 + 1]
            .iter()
            .map(|c| c.norm())
            .collect()
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn spectrum_length_is_half_plus_one() {
        let mut processor = FftProcessor::new(1024, WindowType::Hann);
        let samples: Vec<f32> = (0..1024)
            .map(|i| (2.0 * PI * 440.0 * i as f32 / 44100.0).sin())
            .collect();
        let spectrum = processor.magnitude_spectrum(&samples);
        assert_eq!(spectrum.len(), 513);
    }

    #[test]
    fn pure_tone_energy_lands_in_nearest_bin() {
        let fft_size = 2048;
        let sample_rate = 48000.0f32;
        let freq = 2020.0f32;
        let mut processor = FftProcessor::new(fft_size, WindowType::Hann);

        let samples: Vec<f32> = (0..fft_size)
            .map(|i| (2.0 * PI * freq * i as f32 / sample_rate).sin())
            .collect();
        let spectrum = processor.magnitude_spectrum(&samples);

        let max_bin = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        let expected = (freq * fft_size as f32 / sample_rate).round() as usize;
        assert!((max_bin as i64 - expected as i64).abs() <= 1);
    }

    #[test]
    fn short_input_is_zero_padded() {
        let mut processor = FftProcessor::new(256, WindowType::Rectangular);
        let spectrum = processor.magnitude_spectrum(&[1.0, 1.0, 1.0]);
        assert_eq!(spectrum.len(), 129);
        assert!(spectrum[0] > 0.0);
    }
}
