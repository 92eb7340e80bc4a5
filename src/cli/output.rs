//! Output formatting for CLI results

use std::io::Write;

use crate::detection::AnalysisResult;

/// Write the result as one line of compact JSON
pub fn write_json<W: Write>(out: &mut W, result: &AnalysisResult) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, result)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Print the result to stdout
pub fn print_json(result: &AnalysisResult) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, result)
}
