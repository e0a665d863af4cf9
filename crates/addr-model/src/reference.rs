use std::collections::BTreeSet;

use crate::correction::{CorrectionEntry, CorrectionIndex};
use crate::error::Result;

/// Read-only reference data used by one or more pipeline runs.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    zip_codes: Vec<String>,
    city_names: Vec<String>,
    corrections: CorrectionIndex,
}

impl ReferenceData {
    /// Build reference data. Blank and repeated removal entries are dropped;
    /// removal order otherwise follows the input order.
    pub fn new<Z, C, S1, S2>(
        zip_codes: Z,
        city_names: C,
        corrections: Vec<CorrectionEntry>,
    ) -> Result<Self>
    where
        Z: IntoIterator<Item = S1>,
        C: IntoIterator<Item = S2>,
        S1: Into<String>,
        S2: Into<String>,
    {
        Ok(Self {
            zip_codes: removal_list(zip_codes),
            city_names: removal_list(city_names),
            corrections: CorrectionIndex::build(corrections)?,
        })
    }

    pub fn zip_codes(&self) -> &[String] {
        &self.zip_codes
    }

    pub fn city_names(&self) -> &[String] {
        &self.city_names
    }

    pub fn corrections(&self) -> &CorrectionIndex {
        &self.corrections
    }
}

fn removal_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = BTreeSet::new();
    values
        .into_iter()
        .map(Into::<String>::into)
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
