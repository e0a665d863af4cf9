//! Normalize command pipeline: ingest, normalize, output.
//!
//! Each step runs in its own span so logs can be filtered per step.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{Level, info, info_span, trace};

use addr_ingest::{IngestOptions, RawRow, read_raw_rows};
use addr_model::ReferenceData;
use addr_normalization::{NormalizationOptions, NormalizationRun, Normalizer};
use addr_report::{OutputFormat, write_records};
use addr_standards::{load_default_reference_data, load_reference_data};

use crate::logging::redact_value;

/// Everything the normalize command needs for one run.
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    pub input: PathBuf,
    /// `None` resolves to the default reference directory.
    pub reference_dir: Option<PathBuf>,
    pub ingest: IngestOptions,
    pub options: NormalizationOptions,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub dry_run: bool,
}

impl NormalizeConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            reference_dir: None,
            ingest: IngestOptions::default(),
            options: NormalizationOptions::default(),
            output: None,
            format: OutputFormat::default(),
            dry_run: false,
        }
    }
}

/// Result of a normalize command.
#[derive(Debug)]
pub struct NormalizeOutcome {
    pub input: PathBuf,
    pub run: NormalizationRun,
    /// Path written, `None` for dry runs or when no output was requested.
    pub output: Option<PathBuf>,
}

/// Load reference data from `dir`, or from the default location.
pub fn load_reference(dir: Option<&Path>) -> Result<ReferenceData> {
    match dir {
        Some(dir) => load_reference_data(dir)
            .with_context(|| format!("load reference data from {}", dir.display())),
        None => load_default_reference_data().context("load default reference data"),
    }
}

pub fn ingest(path: &Path, options: &IngestOptions) -> Result<Vec<RawRow>> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    read_raw_rows(path, options).with_context(|| format!("read {}", path.display()))
}

/// Run the pipeline and trace each resulting record.
pub fn normalize_rows(
    rows: &[RawRow],
    reference: &ReferenceData,
    options: NormalizationOptions,
) -> Result<NormalizationRun> {
    let run = Normalizer::new(reference)
        .with_options(options)
        .run(rows)
        .context("normalize addresses")?;
    if tracing::enabled!(Level::TRACE) {
        for record in &run.records {
            trace!(
                id = %redact_value(&record.id),
                address = %redact_value(&record.address),
                components = record.components.len(),
                "normalized record"
            );
        }
    }
    Ok(run)
}

pub fn run_normalize(config: &NormalizeConfig) -> Result<NormalizeOutcome> {
    let start = Instant::now();
    let reference = load_reference(config.reference_dir.as_deref())?;
    let rows = ingest(&config.input, &config.ingest)?;
    let run = normalize_rows(&rows, &reference, config.options)?;

    let output = match (&config.output, config.dry_run) {
        (Some(path), false) => {
            let span = info_span!("output", path = %path.display(), format = %config.format);
            span.in_scope(|| write_records(path, &run.records, config.format))
                .with_context(|| format!("write {}", path.display()))?;
            Some(path.clone())
        }
        (Some(path), true) => {
            info!(path = %path.display(), "dry run, output not written");
            None
        }
        (None, _) => None,
    };

    info!(
        input = %config.input.display(),
        records = run.stats.records,
        duration_ms = start.elapsed().as_millis(),
        "normalize command complete"
    );
    Ok(NormalizeOutcome {
        input: config.input.clone(),
        run,
        output,
    })
}
