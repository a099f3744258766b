use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Timing entry for a single stage of the analysis pipeline.
///
/// Stage labels used by the analyzer: `gradient`, `threshold`, `skeletonize`,
/// `scan_order`, `extract`, `aggregate`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one analyzed image.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Record the stage that started at `start` and return the instant the
    /// next stage begins from.
    pub fn record_since(&mut self, label: &str, start: Instant) -> Instant {
        let now = Instant::now();
        self.push(label, (now - start).as_secs_f64() * 1e3);
        now
    }

    /// Sum of recorded stage durations.
    pub fn stage_sum_ms(&self) -> f64 {
        self.stages.iter().map(|s| s.elapsed_ms).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_since_appends_in_order() {
        let mut timings = TimingBreakdown::default();
        let start = Instant::now();
        let mid = timings.record_since("gradient", start);
        timings.record_since("threshold", mid);
        let labels: Vec<&str> = timings.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["gradient", "threshold"]);
        assert!(timings.stages.iter().all(|s| s.elapsed_ms >= 0.0));
        assert!(timings.stage_sum_ms() >= 0.0);
    }
}
