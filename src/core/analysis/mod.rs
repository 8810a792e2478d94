//! Detection pipeline stages

pub mod pairing;
pub mod peaks;
pub mod spectral;

pub use pairing::BeepPairMatcher;
pub use peaks::PeakDetector;
pub use spectral::{EnergySeries, SpectralAnalyzer};
