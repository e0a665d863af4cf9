use std::collections::BTreeMap;

use addr_model::AddressRecord;

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    BuildRecords,
    RemoveZipCodes,
    RemoveUnwantedCharacters,
    LowerCase,
    RemoveAccents,
    RemoveCityNames,
    StripAndCollapse,
    Tokenize,
    ReplacePrefixes,
    UpperCase,
}

impl Stage {
    pub const ALL: [Stage; 10] = [
        Stage::BuildRecords,
        Stage::RemoveZipCodes,
        Stage::RemoveUnwantedCharacters,
        Stage::LowerCase,
        Stage::RemoveAccents,
        Stage::RemoveCityNames,
        Stage::StripAndCollapse,
        Stage::Tokenize,
        Stage::ReplacePrefixes,
        Stage::UpperCase,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::BuildRecords => "build_records",
            Stage::RemoveZipCodes => "remove_zip_codes",
            Stage::RemoveUnwantedCharacters => "remove_unwanted_characters",
            Stage::LowerCase => "lower_case",
            Stage::RemoveAccents => "remove_accents",
            Stage::RemoveCityNames => "remove_city_names",
            Stage::StripAndCollapse => "strip_and_collapse",
            Stage::Tokenize => "tokenize",
            Stage::ReplacePrefixes => "replace_prefixes",
            Stage::UpperCase => "upper_case",
        }
    }
}

/// A data row left out of the run under [`MalformedRowPolicy::Skip`].
///
/// [`MalformedRowPolicy::Skip`]: crate::MalformedRowPolicy::Skip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based source row number; the header is row 1.
    pub row: usize,
    pub field_count: usize,
}

/// Counters collected while the pipeline runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationStats {
    /// Rows after the header.
    pub data_rows: usize,
    pub records: usize,
    pub skipped_rows: Vec<SkippedRow>,
    /// Records left with no component after cleaning.
    pub empty_addresses: usize,
    /// Records that had more tokens than component slots.
    pub truncated_addresses: usize,
    /// Components rewritten to each canonical street type.
    pub corrections: BTreeMap<String, usize>,
}

impl NormalizationStats {
    pub fn total_corrections(&self) -> usize {
        self.corrections.values().sum()
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct NormalizationRun {
    pub records: Vec<AddressRecord>,
    pub stats: NormalizationStats,
}
