//! Reporting shared by the batch commands.

use crate::log;
use crate::manifest::BatchSummary;
use crate::utils::plural::plural_count;

/// Print the end-of-run summary.
///
/// `next_steps` are shown only when every job produced its file.
pub fn report_summary(module: &str, summary: &BatchSummary, next_steps: &[&str]) {
    println!();
    log!(module; "complete: {}", summary.summary_line());

    if summary.skipped > 0 {
        log!(module; "{} already existed and {} kept", plural_count(summary.skipped, "file"), were(summary.skipped));
    }

    if summary.all_succeeded() {
        log!("done"; "next steps:");
        for (i, step) in next_steps.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }
    } else if summary.failed > 0 {
        log!("error"; "{} failed, check the errors above", plural_count(summary.failed, "job"));
    }
}

const fn were(count: usize) -> &'static str {
    if count == 1 { "was" } else { "were" }
}
