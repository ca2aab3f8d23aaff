use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use tracing::debug;

/// Measures the stages of a routing request.
pub struct Stopwatch {
    start: Instant,
    name: String,
    elapsed_duration: Duration,
}

impl Stopwatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            elapsed_duration: Duration::ZERO,
            name: name.into(),
        }
    }

    /// Creates a stopwatch that is already running.
    pub fn started(name: impl Into<String>) -> Self {
        let mut stopwatch = Stopwatch::new(name);
        stopwatch.start();
        stopwatch
    }

    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    pub fn stop(&mut self) {
        self.elapsed_duration += self.start.elapsed();
    }

    /// Time since the last start, whether or not the stopwatch was stopped.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stops the stopwatch and reports the accumulated duration.
    pub fn finish(mut self) -> Duration {
        self.stop();
        self.report();
        self.elapsed_duration
    }

    pub fn report(&self) {
        debug!("{}", self);
    }
}

impl Display for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {:?}", self.name, self.elapsed_duration)
    }
}
