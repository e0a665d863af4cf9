//! Street-type correction tables.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A canonical street-type word and the spellings that map onto it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    pub canonical_form: String,
    pub variants: BTreeSet<String>,
}

impl CorrectionEntry {
    pub fn new<I, S>(canonical_form: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            canonical_form: canonical_form.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }
}

/// Flattened variant -> canonical lookup built from correction entries.
///
/// Matching is exact: no trimming and no case folding happen here.
#[derive(Debug, Clone, Default)]
pub struct CorrectionIndex {
    entries: Vec<CorrectionEntry>,
    by_variant: HashMap<String, usize>,
}

impl CorrectionIndex {
    /// Build the index, rejecting variants claimed by two different entries.
    pub fn build(entries: Vec<CorrectionEntry>) -> Result<Self> {
        let mut by_variant: HashMap<String, usize> = HashMap::new();
        let mut canonicals = BTreeSet::new();
        for (idx, entry) in entries.iter().enumerate() {
            if entry.canonical_form.trim().is_empty() {
                return Err(ModelError::EmptyCanonical);
            }
            if !canonicals.insert(entry.canonical_form.as_str()) {
                return Err(ModelError::DuplicateCanonical {
                    canonical: entry.canonical_form.clone(),
                });
            }
            for variant in &entry.variants {
                if let Some(&existing) = by_variant.get(variant) {
                    return Err(ModelError::DuplicateVariant {
                        variant: variant.clone(),
                        first: entries[existing].canonical_form.clone(),
                        second: entry.canonical_form.clone(),
                    });
                }
                by_variant.insert(variant.clone(), idx);
            }
        }
        Ok(Self {
            entries,
            by_variant,
        })
    }

    /// Canonical form for an exact variant match.
    pub fn canonical_for(&self, token: &str) -> Option<&str> {
        self.by_variant
            .get(token)
            .map(|&idx| self.entries[idx].canonical_form.as_str())
    }

    pub fn entries(&self) -> &[CorrectionEntry] {
        &self.entries
    }

    pub fn variant_count(&self) -> usize {
        self.by_variant.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact() {
        let index =
            CorrectionIndex::build(vec![CorrectionEntry::new("avenue", ["av", "Av", "AV"])])
                .unwrap();
        assert_eq!(index.canonical_for("av"), Some("avenue"));
        assert_eq!(index.canonical_for("AV"), Some("avenue"));
        assert_eq!(index.canonical_for("aV"), None);
        assert_eq!(index.canonical_for(" av"), None);
        assert_eq!(index.variant_count(), 3);
    }

    #[test]
    fn rejects_shared_variant() {
        let result = CorrectionIndex::build(vec![
            CorrectionEntry::new("passage", ["pas", "pass"]),
            CorrectionEntry::new("place", ["pl", "pas"]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ModelError::DuplicateVariant {
                variant: "pas".to_string(),
                first: "passage".to_string(),
                second: "place".to_string(),
            }
        );
    }

    #[test]
    fn rejects_repeated_canonical() {
        let result = CorrectionIndex::build(vec![
            CorrectionEntry::new("rue", ["r"]),
            CorrectionEntry::new("rue", ["ru"]),
        ]);
        assert!(matches!(
            result,
            Err(ModelError::DuplicateCanonical { canonical }) if canonical == "rue"
        ));
    }
}
