//! Device-independent drag payload container.

use std::fmt::{Display, Formatter};

/// Media kind used for the project id payload.
pub const PROJECT_ID_MEDIA_TYPE: &str = "text/plain";

/// Operation a drag source allows at the drop site.
///
/// Only affects the pointer affordance; data semantics are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

impl Display for DropEffect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
        };
        f.write_str(value)
    }
}

/// Data carried by one drag gesture.
///
/// Media types keep their declaration order; setting an already declared
/// type replaces its data in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `media_type`.
    pub fn set_data(&mut self, media_type: &str, data: impl Into<String>) {
        let data = data.into();
        match self.entries.iter_mut().find(|(kind, _)| kind.as_str() == media_type) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((media_type.to_string(), data)),
        }
    }

    pub fn get_data(&self, media_type: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(kind, _)| kind.as_str() == media_type)
            .map(|(_, data)| data.as_str())
    }

    /// Declared media types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(kind, _)| kind.as_str())
    }

    pub fn first_type(&self) -> Option<&str> {
        self.types().next()
    }

    pub fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    pub fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{DataTransfer, DropEffect, PROJECT_ID_MEDIA_TYPE};

    #[test]
    fn keeps_declaration_order_and_replaces_data() {
        let mut transfer = DataTransfer::new();
        transfer.set_data(PROJECT_ID_MEDIA_TYPE, "a");
        transfer.set_data("text/uri-list", "https://example.invalid");
        transfer.set_data(PROJECT_ID_MEDIA_TYPE, "b");

        let types: Vec<_> = transfer.types().collect();
        assert_eq!(types, vec![PROJECT_ID_MEDIA_TYPE, "text/uri-list"]);
        assert_eq!(transfer.get_data(PROJECT_ID_MEDIA_TYPE), Some("b"));
    }

    #[test]
    fn empty_transfer_has_no_effect() {
        let transfer = DataTransfer::new();
        assert!(transfer.is_empty());
        assert_eq!(transfer.first_type(), None);
        assert_eq!(transfer.effect_allowed(), DropEffect::None);
    }
}
