//! Diagnostic output for failed SDK calls

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::common::ErrorCode;

/// Format the console diagnostic for a failed SDK call.
///
/// `Error = 0x{code}\n{function}() failed.\n`, with the code as eight uppercase hex digits.
pub fn failure_message(function: &str, code: ErrorCode) -> String {
    format!("Error = 0x{:08X}\n{}() failed.\n", code.bits(), function)
}

/// Destination of diagnostic text.
pub trait DiagnosticSink {
    /// Write `text` verbatim. Implementations must not fail the caller.
    fn emit(&self, text: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn emit(&self, text: &str) {
        (**self).emit(text)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn emit(&self, text: &str) {
        (**self).emit(text)
    }
}

/// Writes diagnostics to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout must not turn a swallowed SDK failure into a panic.
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::debug!(error = %e, "failed to write diagnostic to stdout");
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far.
    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => buffer.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contents().is_empty()
    }

    /// Return and clear the collected text.
    pub fn take(&self) -> String {
        match self.buffer.lock() {
            Ok(mut buffer) => std::mem::take(&mut *buffer),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, text: &str) {
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push_str(text),
            Err(poisoned) => poisoned.into_inner().push_str(text),
        }
    }
}
