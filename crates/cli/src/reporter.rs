use anyhow::Result;
use colored::Colorize;
use preflight_core::model::{AssertionStatus, RunReport};
use std::io::Write;

const RULE_WIDTH: usize = 50;

/// Output format for checklist reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
}

/// Report a checklist run in human-readable format
pub fn report_human(report: &RunReport, verbose: bool) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Backend Preflight Checks");
    println!("{}", "=".repeat(RULE_WIDTH));

    for check in &report.checks {
        println!();
        println!("{}", check.name);

        for assertion in &check.assertions {
            match assertion.status {
                AssertionStatus::Pass => {
                    println!("{} {}", "✓".green(), assertion.label);
                }
                AssertionStatus::Fail => {
                    println!("{} {}", "✗".red(), assertion.label);
                    if verbose {
                        if let Some(detail) = &assertion.detail {
                            println!("    {detail}");
                        }
                    }
                }
            }
        }

        for warning in &check.warnings {
            println!("{} {}", "⚠".yellow(), warning);
        }
    }

    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Summary");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Total:  {}", report.total);
    println!("{}", format!("Passed: {}", report.passed).green());
    println!("{}", format!("Failed: {}", report.failed).red());
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();

    if report.all_passed() {
        println!("{}", "✓ All checks passed!".green());
    } else {
        println!("{}", "✗ Some checks failed!".red());
    }
}

/// Report a checklist run as pretty-printed JSON
pub fn report_json(report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

/// Report a checklist run as JUnit XML, one testsuite per check
pub fn report_junit<W: Write>(report: &RunReport, writer: &mut W) -> Result<()> {
    writeln!(writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        writer,
        "<testsuites tests=\"{}\" failures=\"{}\">",
        report.total, report.failed
    )?;

    for check in &report.checks {
        let failures = check.assertions.iter().filter(|a| !a.passed()).count();
        writeln!(
            writer,
            "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\">",
            xml_escape(&check.name),
            check.assertions.len(),
            failures
        )?;

        for assertion in &check.assertions {
            match assertion.status {
                AssertionStatus::Pass => {
                    writeln!(
                        writer,
                        "    <testcase name=\"{}\"/>",
                        xml_escape(&assertion.label)
                    )?;
                }
                AssertionStatus::Fail => {
                    writeln!(
                        writer,
                        "    <testcase name=\"{}\">",
                        xml_escape(&assertion.label)
                    )?;
                    let message = assertion.detail.as_deref().unwrap_or("assertion failed");
                    writeln!(
                        writer,
                        "      <failure message=\"{}\" type=\"AssertionFailure\"/>",
                        xml_escape(message)
                    )?;
                    writeln!(writer, "    </testcase>")?;
                }
            }
        }

        writeln!(writer, "  </testsuite>")?;
    }

    writeln!(writer, "</testsuites>")?;

    Ok(())
}

/// Escape XML special characters
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
