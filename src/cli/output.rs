//! Output formatting for check results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexcheckArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::engine::Verdict;

/// Result structure for a full check run.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    /// One verdict per candidate, in candidate order.
    pub verdicts: Vec<Verdict>,
    /// Total number of candidates checked.
    pub total_words: usize,
    /// Wall-clock seconds since the run started, fractional.
    pub elapsed_seconds: f64,
}

impl CheckReport {
    /// Create a report from the merged verdicts and the elapsed run time.
    pub fn new(verdicts: Vec<Verdict>, elapsed: Duration) -> Self {
        let total_words = verdicts.len();
        CheckReport {
            verdicts,
            total_words,
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    /// The summary line printed after the separator.
    pub fn summary_line(&self) -> String {
        format!(
            "Completed {} words in {} seconds!",
            self.total_words, self.elapsed_seconds
        )
    }
}

/// Output a report in the format selected on the command line.
pub fn output_report(report: &CheckReport, args: &LexcheckArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(report),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output per-word verdict lines followed by a separator and the summary.
fn output_human(report: &CheckReport) -> Result<()> {
    for verdict in &report.verdicts {
        println!("{verdict}");
    }
    println!("-----");
    println!("{}", report.summary_line());
    Ok(())
}

/// Output the whole report as a JSON document.
fn output_json(report: &CheckReport, args: &LexcheckArgs) -> Result<()> {
    let text = if args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> CheckReport {
        CheckReport::new(
            vec![
                Verdict::Correct {
                    word: "door".to_string(),
                },
                Verdict::Suggestion {
                    word: "dooor".to_string(),
                    suggestion: "door".to_string(),
                },
                Verdict::Unknown {
                    word: "xyz".to_string(),
                },
            ],
            Duration::from_millis(250),
        )
    }

    #[test]
    fn test_report_totals() {
        let report = sample_report();
        assert_eq!(report.total_words, 3);
        assert!((report.elapsed_seconds - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_summary_line() {
        let report = sample_report();
        assert_eq!(report.summary_line(), "Completed 3 words in 0.25 seconds!");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"correct\""));
        assert!(json.contains("\"suggestion\":\"door\""));
        assert!(json.contains("\"total_words\":3"));
    }
}
