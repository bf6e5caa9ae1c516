//! Step-by-step outcome of one generation run.

use kiln_core::Error;

/// What happened to one of the six generation steps.
#[derive(Debug)]
pub enum Outcome {
    /// New file written
    Written,
    /// Snippet inserted above its marker
    Injected,
    /// Not attempted because an earlier emit failed
    Skipped,
    /// Injection failed; the run continues and the step needs manual follow-up
    Warned(Error),
    /// Emit-phase failure; aborts the remaining steps
    Failed(Error),
}

/// One generation step and its outcome.
#[derive(Debug)]
pub struct Step {
    pub label: String,
    pub outcome: Outcome,
}

/// Report enumerating every step of a run: four emits, two injections.
///
/// Files written before a failure are never rolled back, so a failed report
/// still describes real on-disk state.
#[derive(Debug, Default)]
pub struct GenerateReport {
    steps: Vec<Step>,
}

impl GenerateReport {
    pub(crate) fn record(&mut self, label: impl Into<String>, outcome: Outcome) {
        self.steps.push(Step {
            label: label.into(),
            outcome,
        });
    }

    /// All steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// True when no step failed. Warnings do not count as failure.
    pub fn succeeded(&self) -> bool {
        !self
            .steps
            .iter()
            .any(|s| matches!(s.outcome, Outcome::Failed(_)))
    }

    /// Number of steps that ended in a warning.
    pub fn warnings(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Warned(_)))
            .count()
    }
}
