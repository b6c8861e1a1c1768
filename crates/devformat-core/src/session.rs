//! Execution session: the state machine behind every tool page.
//!
//! A session is bound to one tool and moves between two states:
//!
//! ```text
//!   Idle --execute()--> Running --tool resolves/faults/panics--> Idle
//! ```
//!
//! Every mutator is rejected while running, and a second `execute()` issued
//! while one is suspended is a no-op. State lives behind a mutex that is never
//! held across the tool's `.await`, so methods take `&self` and the guard is
//! enforced here rather than by the caller.

use crate::error::SessionError;
use crate::registry::ToolRegistry;
use crate::tool::{OptionKey, Tool, ToolOptions, ToolResult};
use futures::FutureExt;
use parking_lot::Mutex;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Message used when a fault carries no text.
pub const GENERIC_FAULT_MESSAGE: &str = "Unexpected error";

/// Session fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub input: String,
    pub output: String,
    pub last_result: Option<ToolResult>,
    pub processing: bool,
    pub options: ToolOptions,
}

/// Why an execute call did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Another execute call is in flight
    Busy,
    /// Transform tool with blank input
    EmptyInput,
}

/// Result of [`ExecutionSession::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteOutcome {
    Completed(ToolResult),
    Skipped(SkipReason),
}

impl ExecuteOutcome {
    pub fn result(&self) -> Option<&ToolResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Skipped(_) => None,
        }
    }
}

/// Per-page execution state for one tool.
pub struct ExecutionSession {
    tool: Arc<dyn Tool>,
    state: Mutex<SessionState>,
}

impl ExecutionSession {
    /// Open a fresh session for `tool`.
    pub fn new(tool: Arc<dyn Tool>) -> Self {
        Self::with_options(tool, ToolOptions::default())
    }

    pub fn with_options(tool: Arc<dyn Tool>, options: ToolOptions) -> Self {
        tracing::debug!(tool = %tool.id(), "session opened");
        Self {
            tool,
            state: Mutex::new(SessionState {
                options,
                ..SessionState::default()
            }),
        }
    }

    /// Open a session for the tool with `id`, if it exists.
    pub fn open(registry: &ToolRegistry, id: &str) -> Option<Self> {
        registry.get(id).cloned().map(Self::new)
    }

    pub fn tool(&self) -> &Arc<dyn Tool> {
        &self.tool
    }

    /// Copy of the current fields.
    pub fn snapshot(&self) -> SessionState {
        self.state.lock().clone()
    }

    pub fn input(&self) -> String {
        self.state.lock().input.clone()
    }

    pub fn output(&self) -> String {
        self.state.lock().output.clone()
    }

    pub fn last_result(&self) -> Option<ToolResult> {
        self.state.lock().last_result.clone()
    }

    pub fn options(&self) -> ToolOptions {
        self.state.lock().options
    }

    pub fn is_processing(&self) -> bool {
        self.state.lock().processing
    }

    /// Run `f` on the state if idle.
    fn when_idle(&self, f: impl FnOnce(&mut SessionState)) -> Result<(), SessionError> {
        let mut state = self.state.lock();
        if state.processing {
            tracing::debug!(tool = %self.tool.id(), "rejected session change while processing");
            return Err(SessionError::Busy);
        }
        f(&mut state);
        Ok(())
    }

    /// Replace the input. Output and last result are left alone.
    pub fn set_input(&self, text: impl Into<String>) -> Result<(), SessionError> {
        let text = text.into();
        self.when_idle(|state| state.input = text)
    }

    /// Seed the input from the tool's sample and clear the previous outcome.
    pub fn load_sample(&self) -> Result<(), SessionError> {
        let sample = self.tool.definition().sample_input.clone();
        self.when_idle(|state| {
            state.input = sample;
            state.output.clear();
            state.last_result = None;
        })
    }

    /// Reset input, output and last result. Options are kept.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.when_idle(|state| {
            state.input.clear();
            state.output.clear();
            state.last_result = None;
        })
    }

    pub fn set_option(&self, key: OptionKey, value: usize) -> Result<(), SessionError> {
        self.when_idle(|state| match key {
            OptionKey::IndentSize => state.options.indent_size = value,
        })
    }

    pub fn set_indent_size(&self, indent_size: usize) -> Result<(), SessionError> {
        self.set_option(OptionKey::IndentSize, indent_size)
    }

    /// Run the tool on the current input.
    ///
    /// Skips when already running or when a transform tool has blank input.
    /// Blank input to a generate tool is replaced by the sample. Faults and
    /// panics become [`ToolResult::internal`] failures. The session is idle
    /// again when this returns or when the future is dropped.
    pub async fn execute(&self) -> ExecuteOutcome {
        let def = self.tool.definition();
        let (input, options) = {
            let mut state = self.state.lock();
            if state.processing {
                tracing::warn!(tool = %def.id, "execute ignored: already processing");
                return ExecuteOutcome::Skipped(SkipReason::Busy);
            }
            let blank = state.input.trim().is_empty();
            if blank && !def.mode.allows_empty_input() {
                tracing::debug!(tool = %def.id, "execute skipped: empty input");
                return ExecuteOutcome::Skipped(SkipReason::EmptyInput);
            }
            state.processing = true;
            let input = if blank {
                def.sample_input.clone()
            } else {
                state.input.clone()
            };
            (input, state.options)
        };
        let _running = RunningGuard { state: &self.state };

        tracing::debug!(tool = %def.id, input_len = input.len(), "executing tool");
        let result = match AssertUnwindSafe(self.tool.execute(&input, &options))
            .catch_unwind()
            .await
        {
            Ok(Ok(result)) => result,
            Ok(Err(fault)) => {
                tracing::warn!(tool = %def.id, error = %fault, "tool fault");
                ToolResult::internal(non_empty_or_generic(fault.message))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(tool = %def.id, error = %message, "tool panicked");
                ToolResult::internal(message)
            }
        };

        {
            let mut state = self.state.lock();
            state.output = result.display_text().to_string();
            state.last_result = Some(result.clone());
        }
        tracing::debug!(tool = %def.id, success = result.is_success(), "execution finished");
        ExecuteOutcome::Completed(result)
    }
}

impl std::fmt::Debug for ExecutionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionSession")
            .field("tool", &self.tool.id())
            .field("state", &*self.state.lock())
            .finish()
    }
}

/// Clears `processing` however the execute future ends.
struct RunningGuard<'a> {
    state: &'a Mutex<SessionState>,
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().processing = false;
    }
}

fn non_empty_or_generic(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_FAULT_MESSAGE.to_string()
    } else {
        message
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        non_empty_or_generic((*s).to_string())
    } else if let Some(s) = payload.downcast_ref::<String>() {
        non_empty_or_generic(s.clone())
    } else {
        GENERIC_FAULT_MESSAGE.to_string()
    }
}
