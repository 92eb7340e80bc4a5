// src/bin/voice_detect.rs
use deepscan::cli::{run, MediaKind};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    run(MediaKind::Voice)
}
