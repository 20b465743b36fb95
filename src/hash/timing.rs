// Execution timing
// Runs a computation once and pairs its result with the elapsed wall time

use std::time::{Duration, Instant};

/// Result of a timed computation
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T, E> Timed<Result<T, E>> {
    /// Move the timing inside a fallible result
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Timed { value, elapsed })
    }
}

/// Run `f` and measure how long it took
pub fn measure<T, F: FnOnce() -> T>(f: F) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Throughput in MiB/s for `bytes` processed in `elapsed`
pub fn throughput_mib_per_sec(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    bytes as f64 / (1024.0 * 1024.0) / secs
}
