use crate::domain::model::Choice;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub iterations: usize,
    pub edit_requests: usize,
    pub build_requests: usize,
    pub invalid_choices: usize,
    pub exited: bool,
    pub elapsed_time: Duration,
}

/// Counts what happens during one menu session.
#[derive(Debug)]
pub struct SessionMonitor {
    start_time: Instant,
    summary: SessionSummary,
    enabled: bool,
}

impl SessionMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            summary: SessionSummary::default(),
            enabled,
        }
    }

    pub fn record(&mut self, choice: &Choice) {
        self.summary.iterations += 1;
        match choice {
            Choice::EditFile => self.summary.edit_requests += 1,
            Choice::BuildAndRun => self.summary.build_requests += 1,
            Choice::Exit => self.summary.exited = true,
            Choice::Invalid(_) => self.summary.invalid_choices += 1,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            elapsed_time: self.start_time.elapsed(),
            ..self.summary.clone()
        }
    }

    pub fn log_final_stats(&self) {
        if !self.enabled {
            return;
        }
        let stats = self.summary();
        tracing::info!(
            "📊 Session Stats - Iterations: {}, Edit: {}, Build: {}, Invalid: {}, Time: {:?}",
            stats.iterations,
            stats.edit_requests,
            stats.build_requests,
            stats.invalid_choices,
            stats.elapsed_time
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for SessionMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
