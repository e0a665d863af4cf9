//! Pipeline stages over the whole record set.
//!
//! Each function runs one stage across every record before returning, so the
//! caller can sequence them with a barrier between stages.

use std::collections::BTreeMap;

use addr_model::{AddressRecord, CorrectionIndex};
use tracing::warn;

use crate::error::{NormalizationError, Result};
use crate::options::MalformedRowPolicy;
use crate::text::{
    fold_case, remove_literals, replace_unwanted_characters, strip_accents, strip_and_collapse,
    tokenize,
};
use crate::types::SkippedRow;

const ID_FIELD: usize = 0;
const ADDRESS_FIELD: usize = 1;

/// Build one record per data row; row 0 is the header and is skipped.
pub fn build_records<R, S>(
    rows: &[R],
    policy: MalformedRowPolicy,
) -> Result<(Vec<AddressRecord>, Vec<SkippedRow>)>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut records = Vec::with_capacity(rows.len().saturating_sub(1));
    let mut skipped = Vec::new();
    for (idx, row) in rows.iter().enumerate().skip(1) {
        let fields = row.as_ref();
        let row_number = idx + 1;
        match (fields.get(ID_FIELD), fields.get(ADDRESS_FIELD)) {
            (Some(id), Some(address)) => {
                records.push(AddressRecord::new(id.as_ref(), address.as_ref()));
            }
            _ => {
                let field_count = fields.len();
                match policy {
                    MalformedRowPolicy::Abort => {
                        return Err(NormalizationError::MalformedRow {
                            row: row_number,
                            field_count,
                        });
                    }
                    MalformedRowPolicy::Skip => {
                        warn!(row = row_number, field_count, "skipping malformed row");
                        skipped.push(SkippedRow {
                            row: row_number,
                            field_count,
                        });
                    }
                }
            }
        }
    }
    Ok((records, skipped))
}

fn rewrite_addresses(records: &mut [AddressRecord], rewrite: impl Fn(&str) -> String) {
    for record in records.iter_mut() {
        record.address = rewrite(&record.address);
    }
}

pub fn remove_zip_codes(records: &mut [AddressRecord], zip_codes: &[String]) {
    rewrite_addresses(records, |address| remove_literals(address, zip_codes));
}

pub fn remove_unwanted_characters(records: &mut [AddressRecord]) {
    rewrite_addresses(records, replace_unwanted_characters);
}

pub fn lower_case(records: &mut [AddressRecord]) {
    rewrite_addresses(records, fold_case);
}

pub fn remove_accents(records: &mut [AddressRecord]) {
    rewrite_addresses(records, strip_accents);
}

pub fn remove_city_names(records: &mut [AddressRecord], city_names: &[String]) {
    rewrite_addresses(records, |address| remove_literals(address, city_names));
}

pub fn strip_and_trim(records: &mut [AddressRecord]) {
    rewrite_addresses(records, strip_and_collapse);
}

/// Tokenize each address into its components.
///
/// Returns how many records had tokens dropped past the last slot.
pub fn set_components(records: &mut [AddressRecord]) -> usize {
    let mut truncated = 0;
    for record in records.iter_mut() {
        let (components, dropped) = tokenize(&record.address);
        if dropped > 0 {
            truncated += 1;
        }
        record.components = components;
    }
    truncated
}

/// Rewrite components matching a street-type variant to the canonical form.
///
/// Returns the number of rewrites per canonical form.
pub fn replace_prefixes(
    records: &mut [AddressRecord],
    corrections: &CorrectionIndex,
) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records.iter_mut() {
        for component in record.components.iter_mut() {
            if let Some(canonical) = corrections.canonical_for(component) {
                *counts.entry(canonical.to_string()).or_insert(0) += 1;
                *component = canonical.to_string();
            }
        }
    }
    counts
}

pub fn upper_components(records: &mut [AddressRecord]) {
    for record in records.iter_mut() {
        for component in record.components.iter_mut() {
            *component = component.to_uppercase();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addr_model::{Components, CorrectionEntry};

    fn record_with(components: &[&str]) -> AddressRecord {
        let mut record = AddressRecord::new("1", components.join(" "));
        record.components = Components::from_tokens(components.iter().copied());
        record
    }

    #[test]
    fn build_records_skips_header() {
        let rows = vec![
            vec!["id", "adresse"],
            vec!["1", "12 rue Ledru-Rollin"],
            vec!["2", "65 rue des Bas Rogers"],
            vec!["46", "51 allée de la pépinière"],
            vec!["3", "28 rue victor hugo"],
        ];
        let (records, skipped) = build_records(&rows, MalformedRowPolicy::Abort).unwrap();
        assert!(skipped.is_empty());
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[2].address, "51 allée de la pépinière");
        assert!(records[2].components.is_empty());
    }

    #[test]
    fn build_records_ignores_extra_columns() {
        let rows = vec![vec!["id", "adresse", "ville"], vec!["9", "1 rue x", "paris"]];
        let (records, _) = build_records(&rows, MalformedRowPolicy::Abort).unwrap();
        assert_eq!(records[0].address, "1 rue x");
    }

    #[test]
    fn build_records_aborts_on_short_row() {
        let rows = vec![vec!["id", "adresse"], vec!["1", "x"], vec!["2"]];
        let error = build_records(&rows, MalformedRowPolicy::Abort).unwrap_err();
        assert_eq!(
            error,
            NormalizationError::MalformedRow {
                row: 3,
                field_count: 1
            }
        );
    }

    #[test]
    fn build_records_can_skip_short_rows() {
        let rows: Vec<Vec<&str>> = vec![vec!["id", "adresse"], vec![], vec!["2", "x"]];
        let (records, skipped) = build_records(&rows, MalformedRowPolicy::Skip).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            skipped,
            vec![SkippedRow {
                row: 2,
                field_count: 0
            }]
        );
    }

    #[test]
    fn replace_prefixes_uses_canonical_form() {
        let corrections = CorrectionIndex::build(vec![
            CorrectionEntry::new("allee", ["ALL", "All", "all"]),
            CorrectionEntry::new("avenue", ["AV", "Av", "av"]),
        ])
        .unwrap();
        let mut records = vec![record_with(&[
            "51",
            "av",
            "de",
            "la",
            "pépinière",
            "92500",
            "suresnes",
        ])];

        let counts = replace_prefixes(&mut records, &corrections);

        assert_eq!(records[0].component(1), Some("51"));
        assert_eq!(records[0].component(2), Some("avenue"));
        assert_eq!(records[0].component(3), Some("de"));
        assert_eq!(counts.get("avenue"), Some(&1));
        assert_eq!(counts.get("allee"), None);
    }

    #[test]
    fn upper_components_leaves_address_alone() {
        let mut records = vec![record_with(&["51", "avenue", "pépinière"])];
        upper_components(&mut records);
        assert_eq!(records[0].component(2), Some("AVENUE"));
        assert_eq!(records[0].component(3), Some("PÉPINIÈRE"));
        assert_eq!(records[0].address, "51 avenue pépinière");
    }

    #[test]
    fn set_components_counts_truncation() {
        let mut records = vec![
            AddressRecord::new("1", "1 2 3 4 5 6 7 8 9 10"),
            AddressRecord::new("2", ""),
        ];
        let truncated = set_components(&mut records);
        assert_eq!(truncated, 1);
        assert_eq!(records[0].components.len(), 8);
        assert!(records[1].components.is_empty());
    }
}
