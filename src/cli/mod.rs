// src/cli/mod.rs
//
// Command-line interface module, shared by the video and voice tools

mod args;
mod output;

pub use args::{parse_args, Args, UsageError, INVALID_ARGUMENT_COUNT};
pub use output::{print_json, write_json};

use log::debug;
use std::process::ExitCode;

use crate::core::{analyze_video, analyze_voice};
use crate::detection::AnalysisResult;

/// Which pipeline a tool runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Voice,
}

/// Route log output to stderr; stdout carries only the JSON result
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Run one tool over the process arguments.
///
/// Usage errors exit with 1; every analysis outcome, failures included,
/// exits with 0.
pub fn run(kind: MediaKind) -> anyhow::Result<ExitCode> {
    init_logging();

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            debug!("Rejected command line: {:?}", e);
            print_json(&AnalysisResult::error(e.message()))?;
            return Ok(ExitCode::from(1));
        }
    };

    let config = args.to_config();
    debug!("Analyzing {} as {:?} with {:?}", args.path.display(), kind, config);

    let result = match kind {
        MediaKind::Video => analyze_video(&args.path, &config),
        MediaKind::Voice => analyze_voice(&args.path, &config),
    };

    print_json(&result)?;
    Ok(ExitCode::SUCCESS)
}
