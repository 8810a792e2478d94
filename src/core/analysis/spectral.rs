// src/core/analysis/spectral.rs
//
// Short-time spectral analysis at a single target frequency.

use log::debug;

use crate::config::DetectorConfig;
use crate::core::dsp::{FftProcessor, WindowType};

/// Per-frame magnitude of one STFT bin, with the frame-to-time mapping.
#[derive(Debug, Clone)]
pub struct EnergySeries {
    /// Magnitude per frame, in frame order.
    pub values: Vec<f32>,
    /// Stride between frames, in samples.
    pub hop_length: usize,
    /// Source sample rate in Hz.
    pub sample_rate: u32,
}

impl EnergySeries {
    /// Elapsed time of a frame: `frame_index * hop_length / sample_rate`.
    pub fn frame_time(&self, frame_index: usize) -> f64 {
        frame_index as f64 * self.hop_length as f64 / self.sample_rate as f64
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extracts the energy-over-time series of the STFT bin nearest a
/// target frequency.
///
/// Windowing policy is fixed rather than inherited from a library
/// default: Hann window, frames start at `i * hop_length` with no
/// centering, and a signal shorter than one window is analyzed as a
/// single zero-padded frame.
pub struct SpectralAnalyzer {
    fft_window_size: usize,
    hop_length: usize,
    target_frequency: f64,
}

impl SpectralAnalyzer {
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            fft_window_size: config.fft_window_size,
            hop_length: config.hop_length,
            target_frequency: config.target_frequency,
        }
    }

    /// Bin center frequencies for the given sample rate:
    /// `k * sample_rate / fft_window_size`, DC through Nyquist.
    pub fn bin_frequencies(&self, sample_rate: u32) -> Vec<f64> {
        (0..=self.fft_window_size / 2)
            .map(|k| k as f64 * sample_rate as f64 / self.fft_window_size as f64)
            .collect()
    }

    /// Index of the bin whose center is nearest the target frequency.
    /// Computed once per call; fixed for the whole signal.
    pub fn target_bin(&self, sample_rate: u32) -> usize {
        self.bin_frequencies(sample_rate)
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (*a - self.target_frequency).abs();
                let db = (*b - self.target_frequency).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Compute the energy series of the target bin across the signal.
    pub fn analyze(&self, samples: &[f32], sample_rate: u32) -> EnergySeries {
        let bin = self.target_bin(sample_rate);
        debug!(
            "target bin {} ({:.1} Hz) for {:.1} Hz at {} Hz sample rate",
            bin,
            bin as f64 * sample_rate as f64 / self.fft_window_size as f64,
            self.target_frequency,
            sample_rate
        );

        let num_frames = if samples.is_empty() {
            0
        } else if samples.len() < self.fft_window_size {
            1
        } else {
            (samples.len() - self.fft_window_size) / self.hop_length + 1
        };

        let mut processor = FftProcessor::new(self.fft_window_size, WindowType::Hann);
        let mut values = Vec::with_capacity(num_frames);
        for i in 0..num_frames {
            let start = i * self.hop_length;
            let end = (start + self.fft_window_size).min(samples.len());
            let spectrum = processor.magnitude_spectrum(&samples[start..end]);
            values.push(spectrum[bin]);
        }

        EnergySeries {
            values,
            hop_length: self.hop_length,
            sample_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgen::tone;
    use approx::assert_relative_eq;

    fn analyzer() -> SpectralAnalyzer {
        SpectralAnalyzer::new(&DetectorConfig::default())
    }

    #[test]
    fn bin_frequencies_span_dc_to_nyquist() {
        let freqs = analyzer().bin_frequencies(48000);
        assert_eq!(freqs.len(), 1025);
        assert_eq!(freqs[0], 0.0);
        assert_relative_eq!(*freqs.last().unwrap(), 24000.0);
    }

    #[test]
    fn target_bin_is_nearest_to_2020_hz() {
        let a = analyzer();
        let sr = 48000;
        let bin = a.target_bin(sr);
        let freqs = a.bin_frequencies(sr);
        // 2020 / (48000/2048) = 86.2 -> bin 86
        assert_eq!(bin, 86);
        assert!((freqs[bin] - 2020.0).abs() <= sr as f64 / 2048.0 / 2.0);
    }

    #[test]
    fn empty_signal_yields_empty_series() {
        let series = analyzer().analyze(&[], 48000);
        assert!(series.is_empty());
    }

    #[test]
    fn sub_window_signal_yields_single_frame() {
        let series = analyzer().analyze(&vec![0.1; 1000], 48000);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn tone_at_target_dominates_silence_frames() {
        let sr = 48000;
        let mut samples = vec![0.0f32; sr as usize]; // 1 s silence
        let burst = tone(2020.0, 0.1, sr, 0.8);
        samples.extend_from_slice(&burst);
        samples.extend(vec![0.0f32; sr as usize]);

        let series = analyzer().analyze(&samples, sr);
        let max_frame = series
            .values
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        let max_time = series.frame_time(max_frame);
        assert!((max_time - 1.0).abs() < 0.15, "peak at {max_time}s");
    }

    #[test]
    fn frame_time_mapping() {
        let series = EnergySeries {
            values: vec![0.0; 4],
            hop_length: 512,
            sample_rate: 48000,
        };
        assert_relative_eq!(series.frame_time(0), 0.0);
        assert_relative_eq!(series.frame_time(3), 3.0 * 512.0 / 48000.0);
    }
}
