pub mod correction;
pub mod error;
pub mod record;
pub mod reference;

pub use correction::{CorrectionEntry, CorrectionIndex};
pub use error::{ModelError, Result};
pub use record::{AddressRecord, Components, MAX_COMPONENTS, component_name};
pub use reference::ReferenceData;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_components_as_list() {
        let mut record = AddressRecord::new("46", "51 allee de la pepiniere");
        record.components = Components::from_tokens(["51", "ALLEE"]);
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["id"], "46");
        assert_eq!(json["components"][1], "ALLEE");
    }
}
