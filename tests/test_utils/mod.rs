#![allow(dead_code)]

use deepscan::AnalysisResult;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn video_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_video-detect"))
}

pub fn voice_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_voice-detect"))
}

/// Command with every DEEPSCAN_* variable cleared
pub fn clean_command(binary: &Path) -> Command {
    let mut cmd = Command::new(binary);
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("DEEPSCAN_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

pub fn run_with_args(binary: &Path, args: &[&str]) -> Output {
    clean_command(binary)
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

/// Parse the single JSON line written to stdout
pub fn parse_result(output: &Output) -> AnalysisResult {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected one JSON line, got: {:?}", stdout);
    serde_json::from_str(lines[0]).expect("stdout is not a valid result")
}

pub fn write_wav_i16(path: &Path, channels: u16, sample_rate: u32, samples: &[i16]) {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("Failed to create WAV");
    for &s in samples {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

pub fn write_wav_i8(path: &Path, channels: u16, sample_rate: u32, samples: &[i8]) {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 8,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("Failed to create WAV");
    for &s in samples {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

/// Quiet 800 Hz tone with a single full-scale click, 8 kHz
pub fn quiet_tone_with_click(seconds: u32) -> Vec<i16> {
    let n = 8000 * seconds as usize;
    let mut samples: Vec<i16> = (0..n)
        .map(|i| {
            let phase = std::f64::consts::PI * i as f64 / 5.0 + 0.3;
            (0.3 * 32767.0 * phase.sin()).round() as i16
        })
        .collect();
    samples[100] = i16::MAX;
    samples
}

/// Full-scale square wave with a period of 8 samples
pub fn square_wave(len: usize) -> Vec<i16> {
    (0..len)
        .map(|i| if (i / 4) % 2 == 0 { 30000 } else { -30000 })
        .collect()
}
