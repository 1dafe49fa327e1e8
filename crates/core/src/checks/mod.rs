pub mod config;
pub mod dependencies;
pub mod dockerfile;
pub mod models;
pub mod structure;

use crate::model::{Assertion, AssertionStatus, CheckReport, RunReport};
use std::path::Path;
use tracing::debug;

/// Accumulates assertions and warnings across checklist sections
///
/// The assertion primitive never propagates an error: callers evaluate their
/// condition via a guarded attempt and hand over a plain boolean.
#[derive(Debug, Default)]
pub struct Recorder {
    checks: Vec<CheckReport>,
    total: usize,
    passed: usize,
    failed: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new checklist section; subsequent assertions land in it
    pub fn begin(&mut self, name: impl Into<String>) {
        self.checks.push(CheckReport {
            name: name.into(),
            assertions: vec![],
            warnings: vec![],
        });
    }

    /// Record one tallied assertion
    pub fn record(&mut self, condition: bool, label: impl Into<String>) {
        self.record_with_detail(condition, label, None);
    }

    /// Record one tallied assertion with optional failure context
    pub fn record_with_detail(
        &mut self,
        condition: bool,
        label: impl Into<String>,
        detail: Option<String>,
    ) {
        self.total += 1;
        let status = if condition {
            self.passed += 1;
            AssertionStatus::Pass
        } else {
            self.failed += 1;
            AssertionStatus::Fail
        };

        self.current().assertions.push(Assertion {
            label: label.into(),
            status,
            detail,
        });
    }

    /// Record an advisory message, excluded from the tally
    pub fn warn(&mut self, message: impl Into<String>) {
        self.current().warnings.push(message.into());
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn into_report(self) -> RunReport {
        RunReport {
            total: self.total,
            passed: self.passed,
            failed: self.failed,
            checks: self.checks,
        }
    }

    fn current(&mut self) -> &mut CheckReport {
        if self.checks.is_empty() {
            self.begin("Checklist");
        }
        let index = self.checks.len() - 1;
        &mut self.checks[index]
    }
}

/// Run the five checklist sections in fixed order against a project root
pub fn run_checklist(project_root: &Path) -> RunReport {
    debug!(project_root = %project_root.display(), "running preflight checklist");

    let mut recorder = Recorder::new();

    dependencies::check(project_root, &mut recorder);
    structure::check(project_root, &mut recorder);
    config::check(project_root, &mut recorder);
    models::check(project_root, &mut recorder);
    dockerfile::check(project_root, &mut recorder);

    let report = recorder.into_report();
    debug!(
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        "checklist complete"
    );
    report
}
