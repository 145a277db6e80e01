use std::path::Path;
use rayon::prelude::*;
use log::{info, warn};
use crate::error::{Error, Result};
use crate::models::Config;
use crate::utils::read_text;
use super::processor::ConversionJob;

/// Parse a batch file into conversion jobs.
///
/// Each non-empty line not starting with `#` reads
/// `<fnt_path> [font_name] [image_file]`; missing settings are derived from
/// the .fnt file name.
pub fn parse_batch_file(content: &str) -> Vec<ConversionJob> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let mut job = ConversionJob::from_input(parts.next()?);
            if let Some(font_name) = parts.next() {
                job = job.with_font_name(font_name);
            }
            if let Some(image_file) = parts.next() {
                job = job.with_image_file(image_file);
            }
            Some(job)
        })
        .collect()
}

/// Run every job, in parallel, and fail if any of them failed
pub fn run_jobs(config: &Config, jobs: &[ConversionJob]) -> Result<()> {
    let failures: Vec<String> = jobs
        .par_iter()
        .filter_map(|job| match job.run(config) {
            Ok(_) => None,
            Err(e) => {
                warn!("{}: {}", job.input.display(), e);
                Some(job.input.display().to_string())
            }
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::Batch(format!(
            "{} of {} conversions failed: {}",
            failures.len(),
            jobs.len(),
            failures.join(", ")
        )))
    }
}

/// Process every .fnt file listed in a batch file
pub fn batch_process(config: &Config, batch_file: &Path) -> Result<()> {
    info!("Batch processing enabled. Reading jobs from {}", batch_file.display());

    let content = read_text(batch_file)?;
    let jobs = parse_batch_file(&content);

    info!("Found {} fonts to convert", jobs.len());
    run_jobs(config, &jobs)?;

    info!("Batch processing complete!");
    Ok(())
}
