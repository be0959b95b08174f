//! `generate` command: draw placeholder assets that are still missing.

use anyhow::{Context, Result};

use crate::config::AssetsConfig;
use crate::image::AssetError;
use crate::image::generate::{
    IconStyle, SocialStyle, generate_icon_placeholder, generate_social_preview,
};
use crate::image::text::FontBook;
use crate::log;
use crate::manifest::{self, AssetJob, BatchSummary, GENERATIONS, JobOutcome, run_batch};
use crate::utils::plural::plural_count;

use super::common::report_summary;

const NEXT_STEPS: &[&str] = &[
    "Rebuild the static site",
    "Deploy the site",
    "Test social media sharing",
    "Submit the site to Google Search Console",
];

/// Create every missing icon and the social preview.
pub fn generate_assets(config: &AssetsConfig) -> Result<BatchSummary> {
    let static_dir = config.static_dir();
    std::fs::create_dir_all(&static_dir)
        .with_context(|| format!("Failed to create `{}`", static_dir.display()))?;

    let jobs = manifest::resolve(GENERATIONS, &static_dir);
    log!("generate"; "checking {} in {}", plural_count(jobs.len(), "image"), static_dir.display());

    let fonts = FontBook::system(&config.fonts.dirs, &config.fonts.families);
    let summary = generate_jobs(&fonts, &jobs, &config.icon_style(), &config.social_style());

    report_summary("generate", &summary, NEXT_STEPS);
    Ok(summary)
}

/// Run generation jobs in order. Existing destinations are skipped.
pub fn generate_jobs(
    fonts: &FontBook,
    jobs: &[AssetJob],
    icon: &IconStyle,
    social: &SocialStyle,
) -> BatchSummary {
    run_batch("generate", jobs, |job| {
        if !job.kind().is_icon() {
            return generate_social_preview(job.destination(), social, fonts).into();
        }

        match job.icon_size() {
            Some(size) => generate_icon_placeholder(size, job.destination(), icon, fonts).into(),
            None => JobOutcome::Failed(AssetError::encode(
                job.destination(),
                "icon job needs equal width and height",
            )),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::AssetKind;
    use image::GenericImageView;
    use std::fs;
    use tempfile::TempDir;

    fn run(dir: &std::path::Path) -> BatchSummary {
        let jobs = manifest::resolve(GENERATIONS, dir);
        generate_jobs(
            &FontBook::empty(),
            &jobs,
            &IconStyle::default(),
            &SocialStyle::default(),
        )
    }

    #[test]
    fn test_second_run_skips_everything() {
        let dir = TempDir::new().unwrap();
        let total = GENERATIONS.len();

        let first = run(dir.path());
        assert_eq!(first.succeeded, total);
        assert_eq!(first.skipped, 0);
        assert!(first.all_succeeded());

        let second = run(dir.path());
        assert_eq!(second.succeeded, 0);
        assert_eq!(second.skipped, total);
        assert_eq!(second.summary_line(), format!("0/{total} successful"));
        assert!(!second.all_succeeded());
    }

    #[test]
    fn test_generated_dimensions() {
        let dir = TempDir::new().unwrap();
        run(dir.path());

        for spec in GENERATIONS {
            let decoded = image::open(dir.path().join(spec.destination)).unwrap();
            let expected = match spec.kind {
                AssetKind::OgImage => (1200, 630),
                _ => (spec.width.unwrap(), spec.height.unwrap()),
            };
            assert_eq!(decoded.dimensions(), expected, "{}", spec.destination);
        }
    }

    #[test]
    fn test_existing_file_kept_others_created() {
        let dir = TempDir::new().unwrap();
        let curated = dir.path().join("favicon-32x32.png");
        fs::write(&curated, b"hand-made").unwrap();

        let summary = run(dir.path());

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.succeeded, GENERATIONS.len() - 1);
        assert_eq!(fs::read(&curated).unwrap(), b"hand-made");
    }

    #[test]
    fn test_non_square_icon_job_fails() {
        let dir = TempDir::new().unwrap();
        let job = AssetJob::new(
            AssetKind::Favicon,
            None,
            dir.path().join("odd.png"),
            Some(16),
            Some(32),
        );
        let summary = generate_jobs(
            &FontBook::empty(),
            &[job],
            &IconStyle::default(),
            &SocialStyle::default(),
        );
        assert_eq!(summary.failed, 1);
        assert!(!dir.path().join("odd.png").exists());
    }

    #[test]
    fn test_generate_assets_creates_static_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = AssetsConfig::default();
        config.root = dir.path().to_path_buf();

        let summary = generate_assets(&config).unwrap();

        assert_eq!(summary.total, GENERATIONS.len());
        assert!(dir.path().join("myapp/static/img/og-image.jpg").is_file());
    }
}
