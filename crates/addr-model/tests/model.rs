//! Tests for addr-model types.

use addr_model::{CorrectionEntry, ModelError, ReferenceData};

fn street_types() -> Vec<CorrectionEntry> {
    vec![
        CorrectionEntry::new("allee", ["ALL", "All", "all"]),
        CorrectionEntry::new("avenue", ["AV", "Av", "av"]),
    ]
}

#[test]
fn reference_data_drops_blank_and_repeated_entries() {
    let reference = ReferenceData::new(
        ["92500", "", "92500", "75001"],
        ["suresnes", "paris", "suresnes"],
        street_types(),
    )
    .expect("build reference data");

    assert_eq!(reference.zip_codes(), ["92500", "75001"]);
    assert_eq!(reference.city_names(), ["suresnes", "paris"]);
    assert_eq!(reference.corrections().entries().len(), 2);
}

#[test]
fn reference_data_resolves_variants() {
    let reference =
        ReferenceData::new(Vec::<String>::new(), Vec::<String>::new(), street_types()).unwrap();
    let corrections = reference.corrections();

    assert_eq!(corrections.canonical_for("av"), Some("avenue"));
    assert_eq!(corrections.canonical_for("all"), Some("allee"));
    assert_eq!(corrections.canonical_for("de"), None);
}

#[test]
fn reference_data_fails_fast_on_overlapping_tables() {
    let mut entries = street_types();
    entries.push(CorrectionEntry::new("avenue bis", ["av"]));

    let error = ReferenceData::new(["92500"], ["suresnes"], entries).unwrap_err();

    assert!(matches!(error, ModelError::DuplicateVariant { ref variant, .. } if variant == "av"));
    assert_eq!(
        error.to_string(),
        "variant 'av' is claimed by both 'avenue' and 'avenue bis'"
    );
}

#[test]
fn empty_canonical_is_rejected() {
    let error = ReferenceData::new(
        Vec::<String>::new(),
        Vec::<String>::new(),
        vec![CorrectionEntry::new(" ", ["x"])],
    )
    .unwrap_err();
    assert_eq!(error, ModelError::EmptyCanonical);
}
