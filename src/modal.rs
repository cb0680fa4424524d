//! Add/Edit modal lifecycle.

use log::debug;

use crate::models::Product;

/// Which modal is open. At most one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    AddOpen,
    /// Holds a copy of the product taken when "Edit" was pressed; list
    /// refreshes never touch it.
    EditOpen(Product),
}

impl ModalState {
    /// Opens the Add modal. Replaces an open Edit modal (last action wins).
    pub fn open_add(&mut self) {
        if let ModalState::EditOpen(product) = self {
            debug!("Add requested while editing {}, closing edit", product.id);
        }
        *self = ModalState::AddOpen;
    }

    /// Opens the Edit modal with a snapshot of `product`. Replaces an open
    /// Add or Edit modal (last action wins).
    pub fn open_edit(&mut self, product: &Product) {
        if *self == ModalState::AddOpen {
            debug!("Edit requested while adding, closing add");
        }
        *self = ModalState::EditOpen(product.clone());
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Closes the Add modal after a confirmed create; any other state is left alone.
    pub fn complete_create(&mut self) {
        if *self == ModalState::AddOpen {
            self.close();
        }
    }

    /// Closes the Edit modal after a confirmed update of `id`; editing a
    /// different product (opened while the request was in flight) stays open.
    pub fn complete_update(&mut self, id: &str) {
        if matches!(self, ModalState::EditOpen(p) if p.id == id) {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        *self != ModalState::Closed
    }

    pub fn edit_target(&self) -> Option<&Product> {
        match self {
            ModalState::EditOpen(product) => Some(product),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "modal_tests.rs"]
mod tests;
