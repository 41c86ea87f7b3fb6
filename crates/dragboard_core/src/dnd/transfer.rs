//! Drag data carrier and drag events.

use std::collections::BTreeMap;

/// Plain-text format key carried by drag sessions.
pub const TEXT_PLAIN: &str = "text/plain";

/// Operation a drag source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
}

/// Format-keyed string data attached to one drag session.
///
/// Mirrors the platform data transfer: formats keep insertion order in
/// `types()`, and re-setting a format keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    order: Vec<String>,
    data: BTreeMap<String, String>,
    effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, format: &str, value: impl Into<String>) {
        if !self.data.contains_key(format) {
            self.order.push(format.to_string());
        }
        self.data.insert(format.to_string(), value.into());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.data.get(format).map(String::as_str)
    }

    /// Formats in the order they were first set.
    pub fn types(&self) -> &[String] {
        &self.order
    }

    pub fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    pub fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.data.clear();
        self.effect_allowed = DropEffect::None;
    }
}

/// One drag event dispatched to a source or target.
///
/// Targets call `prevent_default` on drag-over to accept a drop.
#[derive(Debug)]
pub struct DragEvent<'a> {
    transfer: &'a mut DataTransfer,
    default_prevented: bool,
}

impl<'a> DragEvent<'a> {
    pub fn new(transfer: &'a mut DataTransfer) -> Self {
        Self {
            transfer,
            default_prevented: false,
        }
    }

    pub fn data_transfer(&self) -> &DataTransfer {
        &*self.transfer
    }

    pub fn data_transfer_mut(&mut self) -> &mut DataTransfer {
        &mut *self.transfer
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::{DataTransfer, DropEffect, TEXT_PLAIN};

    #[test]
    fn types_keep_first_insertion_order() {
        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, "a");
        transfer.set_data("text/uri-list", "b");
        transfer.set_data(TEXT_PLAIN, "c");

        assert_eq!(transfer.types(), ["text/plain", "text/uri-list"]);
        assert_eq!(transfer.get_data(TEXT_PLAIN), Some("c"));
    }

    #[test]
    fn clear_resets_data_and_effect() {
        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, "a");
        transfer.set_effect_allowed(DropEffect::Move);
        transfer.clear();

        assert!(transfer.types().is_empty());
        assert_eq!(transfer.effect_allowed(), DropEffect::None);
    }
}
