use serde::{Deserialize, Serialize};

/// Outcome of a single tallied assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssertionStatus {
    Pass,
    Fail,
}

/// One boolean check: one line of console output, one entry in the tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assertion {
    /// Human-readable label describing what was checked
    pub label: String,

    pub status: AssertionStatus,

    /// Extra failure context (e.g. the underlying read/parse error)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Assertion {
    pub fn passed(&self) -> bool {
        self.status == AssertionStatus::Pass
    }
}

/// Results of one named checklist section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Section name (e.g. "Dependencies")
    pub name: String,

    pub assertions: Vec<Assertion>,

    /// Advisory messages, printed but excluded from the tally
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Aggregate result of a full checklist run
///
/// Invariant: `total == passed + failed` after every recorded assertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub checks: Vec<CheckReport>,
}

impl RunReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code contract: 0 iff no tallied assertion failed
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_is_zero_only_when_nothing_failed() {
        let mut report = RunReport {
            total: 3,
            passed: 3,
            failed: 0,
            checks: vec![],
        };
        assert!(report.all_passed());
        assert_eq!(report.exit_code(), 0);

        report.passed = 2;
        report.failed = 1;
        assert!(!report.all_passed());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn report_serializes_without_empty_optionals() {
        let report = RunReport {
            total: 1,
            passed: 1,
            failed: 0,
            checks: vec![CheckReport {
                name: "Dependencies".to_string(),
                assertions: vec![Assertion {
                    label: "express is installed".to_string(),
                    status: AssertionStatus::Pass,
                    detail: None,
                }],
                warnings: vec![],
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"pass\""));
        assert!(!json.contains("detail"));
        assert!(!json.contains("warnings"));
    }
}
