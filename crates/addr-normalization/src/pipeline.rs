//! Pipeline execution.
//!
//! Runs every [`Stage`] in order over a fresh working set. A stage finishes
//! across all records before the next one starts.

use std::time::Instant;

use addr_model::{AddressRecord, ReferenceData};
use tracing::{debug, debug_span, info, info_span};

use crate::error::Result;
use crate::options::NormalizationOptions;
use crate::stages::{
    build_records, lower_case, remove_accents, remove_city_names, remove_unwanted_characters,
    remove_zip_codes, replace_prefixes, set_components, strip_and_trim, upper_components,
};
use crate::types::{NormalizationRun, Stage};

/// Normalizes batches of raw rows against a fixed set of reference data.
///
/// A normalizer holds no per-run state, so it can be reused for any number
/// of runs.
#[derive(Debug, Clone)]
pub struct Normalizer<'a> {
    reference: &'a ReferenceData,
    options: NormalizationOptions,
}

impl<'a> Normalizer<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            reference,
            options: NormalizationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: NormalizationOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the full pipeline over `rows` (header row first).
    pub fn run<R, S>(&self, rows: &[R]) -> Result<NormalizationRun>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let span = info_span!("normalize", rows = rows.len());
        let _guard = span.enter();
        let start = Instant::now();

        let mut run = NormalizationRun::default();
        run.stats.data_rows = rows.len().saturating_sub(1);
        for stage in Stage::ALL {
            debug_span!("stage", stage = stage.as_str())
                .in_scope(|| self.apply_stage(stage, rows, &mut run))?;
        }
        run.stats.records = run.records.len();

        info!(
            records = run.stats.records,
            skipped_rows = run.stats.skipped_rows.len(),
            empty_addresses = run.stats.empty_addresses,
            truncated_addresses = run.stats.truncated_addresses,
            corrections = run.stats.total_corrections(),
            duration_ms = start.elapsed().as_millis(),
            "normalization complete"
        );
        Ok(run)
    }

    fn apply_stage<R, S>(&self, stage: Stage, rows: &[R], run: &mut NormalizationRun) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let records = &mut run.records;
        match stage {
            Stage::BuildRecords => {
                let (built, skipped) = build_records(rows, self.options.malformed_rows)?;
                *records = built;
                run.stats.skipped_rows = skipped;
            }
            Stage::RemoveZipCodes => remove_zip_codes(records, self.reference.zip_codes()),
            Stage::RemoveUnwantedCharacters => remove_unwanted_characters(records),
            Stage::LowerCase => lower_case(records),
            Stage::RemoveAccents => remove_accents(records),
            Stage::RemoveCityNames => remove_city_names(records, self.reference.city_names()),
            Stage::StripAndCollapse => strip_and_trim(records),
            Stage::Tokenize => {
                run.stats.truncated_addresses = set_components(records);
                run.stats.empty_addresses = records
                    .iter()
                    .filter(|record| record.components.is_empty())
                    .count();
            }
            Stage::ReplacePrefixes => {
                run.stats.corrections = replace_prefixes(records, self.reference.corrections());
            }
            Stage::UpperCase => upper_components(records),
        }
        debug!(records = run.records.len(), "stage complete");
        Ok(())
    }
}

/// Normalize `rows` (header row first) with default options.
pub fn normalize<R, S>(rows: &[R], reference: &ReferenceData) -> Result<Vec<AddressRecord>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    Normalizer::new(reference).run(rows).map(|run| run.records)
}
