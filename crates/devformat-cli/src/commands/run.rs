//! Run a tool through an execution session

use std::io::{Read, Write};
use std::path::Path;

use devformat_core::{
    ExecuteOutcome, ExecutionSession, FailureKind, SkipReason, ToolOptions, ToolRegistry,
};

use crate::commands::search::resolve_tool;
use crate::config::Config;
use crate::error::{CliError, Result};

/// Where `run` takes its input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Literal text, or stdin when `-`
    Text(String),
    File(std::path::PathBuf),
    Sample,
    None,
}

impl InputSource {
    pub fn from_args(input: Option<String>, file: Option<&Path>, sample: bool) -> Self {
        match (input, file, sample) {
            (_, Some(path), _) => Self::File(path.to_path_buf()),
            (_, None, true) => Self::Sample,
            (Some(text), None, false) => Self::Text(text),
            (None, None, false) => Self::None,
        }
    }
}

/// Fill the session from `source`.
fn load_input(session: &ExecutionSession, source: &InputSource) -> Result<()> {
    match source {
        InputSource::Sample => session.load_sample()?,
        InputSource::File(path) => {
            let text = std::fs::read_to_string(path)?;
            session.set_input(text)?;
        }
        InputSource::Text(text) if text == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            session.set_input(buf)?;
        }
        InputSource::Text(text) => session.set_input(text.as_str())?,
        InputSource::None => {}
    }
    Ok(())
}

/// Execute the session and turn its outcome into output text.
pub fn execute(session: &ExecutionSession) -> Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let def = session.tool().definition();

    match runtime.block_on(session.execute()) {
        ExecuteOutcome::Completed(result) => match result.error() {
            None => Ok(result.output().to_string()),
            Some(message) => Err(CliError::ToolFailed {
                tool: def.id.clone(),
                message: message.to_string(),
                kind: result.failure_kind().unwrap_or(FailureKind::InvalidInput),
            }),
        },
        ExecuteOutcome::Skipped(SkipReason::EmptyInput) => Err(CliError::user(format!(
            "{} needs input. Pass INPUT, '-' for stdin, --file or --sample.",
            def.name
        ))),
        ExecuteOutcome::Skipped(SkipReason::Busy) => {
            Err(devformat_core::SessionError::Busy.into())
        }
    }
}

/// Write tool output to stdout with exactly one trailing newline.
pub fn print_output(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Run the run command
pub fn run_tool(
    registry: &ToolRegistry,
    config: &Config,
    id_or_route: &str,
    source: &InputSource,
    indent: Option<usize>,
) -> Result<()> {
    let tool = resolve_tool(registry, id_or_route)?;
    let options =
        ToolOptions::default().with_indent_size(indent.unwrap_or(config.tools.indent_size));
    let session = ExecutionSession::with_options(tool.clone(), options);

    load_input(&session, source)?;
    let output = execute(&session)?;
    print_output(&output)
}
