//! `convert` command: rasterize the SVG sources.

use crate::config::AssetsConfig;
use crate::image::AssetError;
use crate::image::svg::{Rasterize, ResvgRasterizer, rasterize_file};
use crate::image::text::FontBook;
use crate::log;
use crate::manifest::{self, AssetJob, BatchSummary, CONVERSIONS, JobOutcome, run_batch};
use crate::utils::plural::plural_count;

use super::common::report_summary;

const NEXT_STEPS: &[&str] = &[
    "Deploy the site",
    "Test social media sharing",
    "Verify favicons in different browsers",
    "Submit the sitemap to Google Search Console",
];

/// Rasterize every SVG in the conversion manifest.
///
/// Per-job failures are reported and counted, never returned.
pub fn convert_assets(config: &AssetsConfig) -> BatchSummary {
    let static_dir = config.static_dir();
    let jobs = manifest::resolve(CONVERSIONS, &static_dir);

    if !static_dir.is_dir() {
        log!("warning"; "image directory `{}` does not exist", static_dir.display());
    }
    log!("convert"; "rasterizing {} in {}", plural_count(jobs.len(), "image"), static_dir.display());

    let fonts = FontBook::system(&config.fonts.dirs, &config.fonts.families);
    let backend = ResvgRasterizer::new(&fonts);

    let summary = convert_jobs(&backend, &jobs, config.jpeg_quality());
    report_summary("convert", &summary, NEXT_STEPS);
    summary
}

/// Run conversion jobs in order through `backend`.
///
/// Existing destinations are overwritten.
pub fn convert_jobs(backend: &dyn Rasterize, jobs: &[AssetJob], jpeg_quality: u8) -> BatchSummary {
    run_batch("convert", jobs, |job| {
        let Some(source) = job.source() else {
            return JobOutcome::Failed(AssetError::rasterization(
                job.destination(),
                "job has no source file",
            ));
        };

        rasterize_file(
            backend,
            source,
            job.destination(),
            job.width(),
            job.height(),
            jpeg_quality,
        )
        .into()
    })
}
