//! Recording command runner for testing.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use stencil_core::{application::ports::CommandRunner, error::StencilResult};

/// Test runner that records invocations instead of spawning processes.
///
/// Exit codes are scripted up front; once the script is exhausted every
/// further invocation reports success.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingRunnerInner>>,
}

#[derive(Debug, Default)]
struct RecordingRunnerInner {
    invocations: Vec<(String, Vec<String>)>,
    scripted: VecDeque<Option<i32>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the exit codes of the next invocations, in order.
    pub fn script_exits(&self, codes: &[Option<i32>]) {
        let mut inner = self.inner.lock().unwrap();
        inner.scripted.extend(codes.iter().copied());
    }

    /// Every invocation recorded so far, as `(program, args)` pairs.
    pub fn invocations(&self) -> Vec<(String, Vec<String>)> {
        self.inner.lock().unwrap().invocations.clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> StencilResult<Option<i32>> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .invocations
            .push((program.to_string(), args.to_vec()));
        Ok(inner.scripted.pop_front().unwrap_or(Some(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_defaults_to_success() {
        let runner = RecordingRunner::new();
        runner.script_exits(&[Some(2)]);

        assert_eq!(runner.run("act", &["--list".into()]).unwrap(), Some(2));
        assert_eq!(runner.run("uv", &["sync".into()]).unwrap(), Some(0));

        let calls = runner.invocations();
        assert_eq!(calls[0].0, "act");
        assert_eq!(calls[1].0, "uv");
    }
}
