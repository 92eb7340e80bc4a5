// tests/cli_test.rs
//
// End-to-end checks of the video-detect and voice-detect binaries.

mod test_utils;

use deepscan::{AnalysisResult, AnalysisStatus};
use tempfile::TempDir;
use test_utils::*;

#[test]
fn test_no_arguments_is_usage_error() {
    for binary in [video_binary(), voice_binary()] {
        let output = run_with_args(&binary, &[]);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim(),
            r#"{"score":0,"status":"error","factors":["Invalid number of arguments"]}"#
        );
    }
}

#[test]
fn test_two_arguments_is_usage_error() {
    for binary in [video_binary(), voice_binary()] {
        let output = run_with_args(&binary, &["a.wav", "b.wav"]);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            parse_result(&output),
            AnalysisResult::error("Invalid number of arguments")
        );
    }
}

#[test]
fn test_invalid_environment_is_usage_error() {
    let output = clean_command(&voice_binary())
        .arg("voice.wav")
        .env("DEEPSCAN_SPECTRUM_BINS", "lots")
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
    let result = parse_result(&output);
    assert_eq!(result.status, AnalysisStatus::Error);
    assert!(result.factors[0].starts_with("Invalid configuration: "));
}

#[test]
fn test_unreadable_video_reports_no_frames() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.mp4");

    let output = run_with_args(&video_binary(), &[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        parse_result(&output),
        AnalysisResult::error("No frames could be extracted from the video")
    );
}

#[test]
fn test_missing_audio_reports_extraction_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.wav");

    let output = run_with_args(&voice_binary(), &[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        parse_result(&output),
        AnalysisResult::error("Failed to extract audio features")
    );
}

#[test]
fn test_hyphenated_path_is_analyzed() {
    let dir = TempDir::new().unwrap();
    let output = clean_command(&voice_binary())
        .current_dir(dir.path())
        .arg("-take1.wav")
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        parse_result(&output),
        AnalysisResult::error("Failed to extract audio features")
    );
}

#[test]
fn test_silent_wav_is_graceful_error() {
    // 10 seconds of 16-bit silence at 8 kHz
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("silence.wav");
    write_wav_i16(&path, 1, 8000, &vec![0i16; 80_000]);

    let output = run_with_args(&voice_binary(), &[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        parse_result(&output),
        AnalysisResult::error("Failed to extract audio features")
    );
}

#[test]
fn test_quiet_tone_is_real() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tone.wav");
    write_wav_i16(&path, 1, 8000, &quiet_tone_with_click(1));

    let output = run_with_args(&voice_binary(), &[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let result = parse_result(&output);
    assert_eq!(result.status, AnalysisStatus::Real);
    assert!(result.score >= 80, "score {}", result.score);
    assert!(result.factors.contains(&"Natural amplitude variations detected".to_string()));
    assert!(result.factors.contains(&"Consistent speech patterns observed".to_string()));
    assert!(result.factors.contains(&"Natural speech rhythm detected".to_string()));
    assert!(result.factors.contains(&"Balanced audio energy levels".to_string()));
}

#[test]
fn test_square_wave_is_fake() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("square.wav");
    write_wav_i16(&path, 1, 8000, &square_wave(8000));

    let output = run_with_args(&voice_binary(), &[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let result = parse_result(&output);
    assert_eq!(result.status, AnalysisStatus::Fake);
    assert!(result.score <= 40);
    assert!(result.factors.contains(&"Unnatural amplitude variations".to_string()));
    assert!(result.factors.contains(&"Inconsistent speech patterns".to_string()));
    assert!(result.factors.contains(&"Abnormal audio energy levels".to_string()));
}

#[test]
fn test_stereo_8_bit_wav_is_scored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stereo8.wav");
    let samples: Vec<i8> = (0..4000).map(|i| if i % 6 < 3 { 100 } else { -100 }).collect();
    write_wav_i8(&path, 2, 8000, &samples);

    let output = run_with_args(&voice_binary(), &[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let result = parse_result(&output);
    assert_ne!(result.status, AnalysisStatus::Error);
    assert_eq!(result.score % 20, 0);
    assert_eq!(result.status == AnalysisStatus::Real, result.score >= 60);
}
