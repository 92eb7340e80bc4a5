//! DSP utilities shared by the feature extractors

pub mod spectrum;
pub mod stats;

pub use spectrum::spectral_centroid;
pub use stats::{energy, mean, mean_abs, peak_amplitude, std_dev, variance, zero_crossing_rate};
