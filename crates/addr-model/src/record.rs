//! Address records and their positional components.

use serde::Serialize;

/// Number of positional component slots kept per address.
pub const MAX_COMPONENTS: usize = 8;

/// Positional address components, capped at [`MAX_COMPONENTS`] slots.
///
/// Slots are numbered from 1 in the public API (`comp_1` .. `comp_8`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Components(Vec<String>);

impl Components {
    /// Build components from tokens in order, skipping empty tokens and
    /// dropping everything past the last slot.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = tokens
            .into_iter()
            .map(Into::<String>::into)
            .filter(|token| !token.is_empty())
            .take(MAX_COMPONENTS)
            .collect();
        Self(slots)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of a 1-based slot, `None` when the slot is absent.
    pub fn get(&self, slot: usize) -> Option<&str> {
        slot.checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, String> {
        self.0.iter_mut()
    }
}

/// Column name for a 1-based component slot.
pub fn component_name(slot: usize) -> String {
    format!("comp_{slot}")
}

/// One normalized address, mutated in place by each pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    /// Identifier copied verbatim from the source row.
    pub id: String,
    /// Working address string; fully cleaned once the pipeline has run.
    pub address: String,
    pub components: Components,
}

impl AddressRecord {
    pub fn new(id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            components: Components::default(),
        }
    }

    pub fn component(&self, slot: usize) -> Option<&str> {
        self.components.get(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tokens_caps_at_eight_slots() {
        let tokens = "a b c d e f g h i j".split(' ');
        let components = Components::from_tokens(tokens);
        assert_eq!(components.len(), MAX_COMPONENTS);
        assert_eq!(components.get(8), Some("h"));
        assert_eq!(components.get(9), None);
    }

    #[test]
    fn from_tokens_skips_empty_tokens() {
        let components = Components::from_tokens("".split(' '));
        assert!(components.is_empty());
        assert_eq!(components.get(1), None);
    }

    #[test]
    fn slots_are_one_based() {
        let components = Components::from_tokens(["51", "rue"]);
        assert_eq!(components.get(0), None);
        assert_eq!(components.get(1), Some("51"));
        assert_eq!(components.get(2), Some("rue"));
        assert_eq!(component_name(2), "comp_2");
    }
}
