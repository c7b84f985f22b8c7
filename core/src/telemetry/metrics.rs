use std::sync::Mutex;

/// Counts flights handled by batch estimation runs.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    estimated: usize,
    skipped: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                estimated: 0,
                skipped: 0,
            }),
        }
    }

    pub fn record_estimated(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.estimated += 1;
        }
    }

    pub fn record_skipped(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.skipped += 1;
        }
    }

    /// Returns `(estimated, skipped)` totals.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.estimated, metrics.skipped)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_accumulates_counts() {
        let recorder = MetricsRecorder::new();
        recorder.record_estimated();
        recorder.record_estimated();
        recorder.record_skipped();
        assert_eq!(recorder.snapshot(), (2, 1));
    }
}
