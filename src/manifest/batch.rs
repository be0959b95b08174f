//! Sequential batch runner and outcome tally.

use super::AssetJob;
use crate::debug;
use crate::image::AssetError;
use crate::image::generate::Generated;
use crate::logger::{self, Status};

/// Outcome of one manifest entry.
#[derive(Debug)]
pub enum JobOutcome {
    Succeeded,
    /// Destination already existed and was left alone.
    Skipped,
    Failed(AssetError),
}

impl JobOutcome {
    /// Flatten into the success flag plus an optional failure reason.
    pub fn to_result(&self) -> ConversionResult {
        match self {
            Self::Succeeded | Self::Skipped => ConversionResult {
                succeeded: matches!(self, Self::Succeeded),
                reason: None,
            },
            Self::Failed(err) => ConversionResult {
                succeeded: false,
                reason: Some(err.to_string()),
            },
        }
    }
}

impl From<Result<(), AssetError>> for JobOutcome {
    fn from(result: Result<(), AssetError>) -> Self {
        match result {
            Ok(()) => Self::Succeeded,
            Err(err) => Self::Failed(err),
        }
    }
}

impl From<Result<Generated, AssetError>> for JobOutcome {
    fn from(result: Result<Generated, AssetError>) -> Self {
        match result {
            Ok(Generated::Created) => Self::Succeeded,
            Ok(Generated::AlreadyExists) => Self::Skipped,
            Err(err) => Self::Failed(err),
        }
    }
}

/// Per-job result as reported in the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub succeeded: bool,
    pub reason: Option<String>,
}

/// Aggregate counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
}

impl BatchSummary {
    /// Tally one job. A result that neither succeeded nor carries a
    /// failure reason was skipped.
    pub fn record(&mut self, result: &ConversionResult) {
        self.total += 1;
        match (result.succeeded, &result.reason) {
            (true, _) => self.succeeded += 1,
            (false, Some(_)) => self.failed += 1,
            (false, None) => self.skipped += 1,
        }
    }

    /// Every job produced its file in this run.
    pub const fn all_succeeded(&self) -> bool {
        self.total > 0 && self.succeeded == self.total
    }

    /// `"<succeeded>/<total> successful"`
    pub fn summary_line(&self) -> String {
        format!("{}/{} successful", self.succeeded, self.total)
    }
}

/// Run every job in order, printing each outcome as it happens.
///
/// A failed job never stops the batch.
pub fn run_batch<F>(module: &str, jobs: &[AssetJob], mut run: F) -> BatchSummary
where
    F: FnMut(&AssetJob) -> JobOutcome,
{
    let mut summary = BatchSummary::default();

    for job in jobs {
        debug!(module; "{} ({}) -> {}", job.description(), job.kind(), job.destination().display());

        let outcome = run(job);
        report(job, &outcome);
        summary.record(&outcome.to_result());
    }

    summary
}

fn report(job: &AssetJob, outcome: &JobOutcome) {
    let name = job.display_name();
    match outcome {
        JobOutcome::Succeeded => {
            let message = match job.dimensions_label() {
                Some(dims) => format!("created {name} ({dims})"),
                None => format!("created {name}"),
            };
            logger::status(Status::Success, &message, "");
        }
        JobOutcome::Skipped => logger::status(
            Status::Skipped,
            &format!("{name} already exists, skipping"),
            "",
        ),
        JobOutcome::Failed(err) => logger::status(
            Status::Failed,
            &format!("{name}: {}", err.kind()),
            &err.detail(),
        ),
    }
}
