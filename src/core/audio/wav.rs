// src/core/audio/wav.rs
//
// PCM WAV reading through hound.

use hound::{SampleFormat, WavReader};
use log::debug;
use std::io::Read;
use std::path::Path;

use super::Waveform;
use crate::core::error::{AnalysisError, Result};

/// Read a PCM WAV file.
///
/// Sample values follow the byte-width rules of the raw stream:
/// 2-byte samples are signed 16-bit, every other width is read as a
/// sequence of unsigned bytes.
pub fn read_wav(path: &Path) -> Result<Waveform> {
    let reader = WavReader::open(path)?;
    read_wav_from(reader)
}

pub(crate) fn read_wav_from<R: Read>(mut reader: WavReader<R>) -> Result<Waveform> {
    let spec = reader.spec();
    let frame_count = u64::from(reader.duration());
    let sample_width = (spec.bits_per_sample + 7) / 8;

    debug!(
        "WAV header: {} ch, {} bit, {} Hz, {} frames",
        spec.channels, spec.bits_per_sample, spec.sample_rate, frame_count
    );

    if spec.sample_format == SampleFormat::Float {
        return Err(AnalysisError::UnsupportedFormat(format!(
            "{}-bit IEEE float WAV",
            spec.bits_per_sample
        )));
    }

    let samples: Vec<f64> = match sample_width {
        2 => reader
            .samples::<i16>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>()?,
        1 => reader
            .samples::<i8>()
            .map(|s| s.map(|v| f64::from(i16::from(v) + 128)))
            .collect::<std::result::Result<_, _>>()?,
        width => {
            let width = usize::from(width);
            // the header's data length is not trusted for sizing
            let mut bytes = Vec::new();
            for sample in reader.samples::<i32>() {
                let raw = sample?.to_le_bytes();
                bytes.extend(raw.iter().take(width).map(|&b| f64::from(b)));
            }
            bytes
        }
    };

    Ok(Waveform {
        channels: spec.channels,
        sample_width,
        frame_rate: spec.sample_rate,
        frame_count,
        samples,
    })
}
