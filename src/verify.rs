//! Checking run results against expectations and across engines.

use crate::runner::RunReport;

/// Expected outcome of a run, for configurations with a known-good oracle.
///
/// Absent fields are not checked: eval counts are only portable across
/// engines with the same recomputation policy, while sums must always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunExpectation {
    pub sum: Option<i64>,
    pub evals: Option<u64>,
}

impl RunExpectation {
    pub fn sum(sum: i64) -> Self {
        Self {
            sum: Some(sum),
            evals: None,
        }
    }

    pub fn with_evals(mut self, evals: u64) -> Self {
        self.evals = Some(evals);
        self
    }

    /// Compare a report against this expectation.
    pub fn check(&self, report: &RunReport) -> Vec<ExpectationFailure> {
        let mut failures = Vec::new();
        if let Some(expected) = self.sum {
            if report.sum != expected {
                failures.push(ExpectationFailure::Sum {
                    expected,
                    actual: report.sum,
                });
            }
        }
        if let Some(expected) = self.evals {
            if report.evals != expected {
                failures.push(ExpectationFailure::Evals {
                    expected,
                    actual: report.evals,
                });
            }
        }
        failures
    }

    pub fn is_met(&self, report: &RunReport) -> bool {
        self.check(report).is_empty()
    }
}

/// A single expectation mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectationFailure {
    Sum { expected: i64, actual: i64 },
    Evals { expected: u64, actual: u64 },
}

/// Differential check between two engines' reports on the same config.
///
/// Engines are free to recompute differently but must agree on values;
/// returns the diverging sums if they do not.
pub fn sum_divergence(a: &RunReport, b: &RunReport) -> Option<(i64, i64)> {
    (a.sum != b.sum).then_some((a.sum, b.sum))
}
