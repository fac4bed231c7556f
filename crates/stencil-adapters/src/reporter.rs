//! Reporter adapters.
//!
//! The hook's operator-visible messages go through the injected `Reporter`
//! port; production routes them into tracing, tests capture them in memory.

use std::sync::{Arc, Mutex};

use tracing::info;

use stencil_core::application::ports::Reporter;

/// Production reporter: forwards to the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        info!("{message}");
    }
}

/// Capturing reporter for tests.
#[derive(Debug, Clone, Default)]
pub struct BufferReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Reporter for BufferReporter {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}
