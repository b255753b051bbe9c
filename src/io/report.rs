//! Aggregation and reporting of repeated trials.
//!
//! Repeated independent runs of one instance are summarized into the
//! cheapest tour found, error figures against the best-known optimum when
//! one is available, and wall-clock statistics. The summary renders as a
//! console block (via `Display`) and as a TSV row for result files.

use crate::models::Cost;
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

/// Outcome of one independent solver trial.
#[derive(Debug, Clone)]
pub struct Trial {
    /// Best cost of the trial.
    pub cost: Cost,
    /// Best tour of the trial.
    pub tour: Vec<usize>,
    /// Wall-clock time of the trial.
    pub elapsed: Duration,
}

/// Aggregate summary over repeated trials of one instance.
#[derive(Debug, Clone)]
pub struct Summary {
    instance: String,
    trials: Vec<Trial>,
    optimum: Option<Cost>,
    best: usize,
}

impl Summary {
    /// Builds a summary. Ties on cost keep the earliest trial.
    ///
    /// # Panics
    ///
    /// Panics if `trials` is empty.
    pub fn new(instance: impl Into<String>, trials: Vec<Trial>, optimum: Option<Cost>) -> Self {
        assert!(!trials.is_empty(), "summary needs at least one trial");
        let mut best = 0;
        for (i, trial) in trials.iter().enumerate().skip(1) {
            if trial.cost < trials[best].cost {
                best = i;
            }
        }
        Self {
            instance: instance.into(),
            trials,
            optimum,
            best,
        }
    }

    /// The cheapest trial.
    pub fn best(&self) -> &Trial {
        &self.trials[self.best]
    }

    /// All trials, in run order.
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Total wall-clock time across trials.
    pub fn total_time(&self) -> Duration {
        self.trials.iter().map(|t| t.elapsed).sum()
    }

    /// Mean wall-clock time per trial.
    pub fn mean_time(&self) -> Duration {
        self.total_time() / self.trials.len() as u32
    }

    /// Absolute error of the best cost versus the known optimum, when both
    /// are meaningful (optimum known, best cost finite).
    pub fn absolute_error(&self) -> Option<u64> {
        let optimum = self.optimum.filter(|o| o.value() > 0)?;
        let best = self.best().cost;
        (!best.is_unreachable()).then(|| best.value().abs_diff(optimum.value()))
    }

    /// Relative error in percent versus the known optimum.
    pub fn relative_error(&self) -> Option<f64> {
        let optimum = self.optimum.filter(|o| o.value() > 0)?;
        Some(100.0 * self.absolute_error()? as f64 / optimum.value() as f64)
    }

    /// Writes the TSV header and this summary's row.
    pub fn write_tsv<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(
            w,
            "instance\toptimum\tbest_cost\tabsolute_error\trelative_error_pct\ttotal_ms\tmean_ms\tbest_tour"
        )?;
        let optimum = match self.optimum {
            Some(o) => o.to_string(),
            None => "n/a".into(),
        };
        let absolute = self
            .absolute_error()
            .map_or_else(|| "n/a".into(), |e| e.to_string());
        let relative = self
            .relative_error()
            .map_or_else(|| "n/a".into(), |e| format!("{e:.4}"));
        let tour = self
            .best()
            .tour
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{:.4}\t{:.4}\t{}",
            self.instance,
            optimum,
            self.best().cost,
            absolute,
            relative,
            millis(self.total_time()),
            millis(self.mean_time()),
            tour
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------------------------")?;
        writeln!(f, "instance: {}", self.instance)?;
        writeln!(f, "trials: {}", self.trials.len())?;
        writeln!(f, "best cost: {}", self.best().cost)?;
        if let (Some(absolute), Some(relative)) = (self.absolute_error(), self.relative_error()) {
            writeln!(f, "absolute error: {absolute}")?;
            writeln!(f, "relative error: {relative:.4}%")?;
        }
        writeln!(f, "total time: {:.4} ms", millis(self.total_time()))?;
        writeln!(f, "mean time: {:.4} ms", millis(self.mean_time()))?;
        let tour = &self.best().tour;
        if !tour.is_empty() && tour.len() < 16 {
            let mut path = tour
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            path.push_str(&format!(" -> {}", tour[0]));
            writeln!(f, "best tour: {path}")?;
        }
        writeln!(f, "-------------------------------------")
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(cost: u64, ms: u64) -> Trial {
        Trial {
            cost: Cost::new(cost),
            tour: vec![0, 1, 2, 3],
            elapsed: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_best_is_cheapest() {
        let summary = Summary::new("t", vec![trial(95, 1), trial(80, 1), trial(90, 1)], None);
        assert_eq!(summary.best().cost, Cost::new(80));
    }

    #[test]
    fn test_ties_keep_earliest_trial() {
        let mut a = trial(80, 1);
        a.tour = vec![0, 1, 3, 2];
        let b = trial(80, 1);
        let summary = Summary::new("t", vec![a, b], None);
        assert_eq!(summary.best().tour, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_errors_against_known_optimum() {
        let summary = Summary::new("t", vec![trial(84, 1)], Some(Cost::new(80)));
        assert_eq!(summary.absolute_error(), Some(4));
        assert!((summary.relative_error().expect("known") - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_errors_unavailable_without_optimum() {
        let summary = Summary::new("t", vec![trial(84, 1)], None);
        assert_eq!(summary.absolute_error(), None);
        assert_eq!(summary.relative_error(), None);
    }

    #[test]
    fn test_errors_unavailable_for_unreachable_best() {
        let unreachable = Trial {
            cost: Cost::UNREACHABLE,
            tour: vec![0, 1],
            elapsed: Duration::from_millis(1),
        };
        let summary = Summary::new("t", vec![unreachable], Some(Cost::new(80)));
        assert_eq!(summary.absolute_error(), None);
    }

    #[test]
    fn test_time_aggregation() {
        let summary = Summary::new("t", vec![trial(80, 10), trial(85, 30)], None);
        assert_eq!(summary.trials().len(), 2);
        assert_eq!(summary.total_time(), Duration::from_millis(40));
        assert_eq!(summary.mean_time(), Duration::from_millis(20));
    }

    #[test]
    fn test_display_block() {
        let summary = Summary::new("ftv.txt", vec![trial(84, 2)], Some(Cost::new(80)));
        let text = summary.to_string();
        assert!(text.contains("instance: ftv.txt"));
        assert!(text.contains("best cost: 84"));
        assert!(text.contains("absolute error: 4"));
        assert!(text.contains("best tour: 0 -> 1 -> 2 -> 3 -> 0"));
    }

    #[test]
    fn test_display_omits_long_tours() {
        let long = Trial {
            cost: Cost::new(10),
            tour: (0..20).collect(),
            elapsed: Duration::from_millis(1),
        };
        let text = Summary::new("t", vec![long], None).to_string();
        assert!(!text.contains("best tour"));
    }

    #[test]
    fn test_tsv_row() {
        let summary = Summary::new("ftv.txt", vec![trial(84, 2)], Some(Cost::new(80)));
        let mut out = Vec::new();
        summary.write_tsv(&mut out).expect("in-memory write");
        let text = String::from_utf8(out).expect("utf8");
        let mut lines = text.lines();
        assert!(lines.next().expect("header").starts_with("instance\toptimum"));
        let row = lines.next().expect("row");
        assert!(row.starts_with("ftv.txt\t80\t84\t4\t5.0000\t"));
        assert!(row.ends_with("0 1 2 3"));
    }

    #[test]
    fn test_tsv_unknown_optimum() {
        let summary = Summary::new("t", vec![trial(84, 2)], None);
        let mut out = Vec::new();
        summary.write_tsv(&mut out).expect("in-memory write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.lines().nth(1).expect("row").contains("\tn/a\t"));
    }

    #[test]
    #[should_panic(expected = "at least one trial")]
    fn test_empty_trials_panic() {
        let _ = Summary::new("t", vec![], None);
    }
}
