//! Explicit provisioning of the session store.
//!
//! The composition root builds and hydrates the store, then installs it in a
//! [`StoreHandle`]; any subtree holding a clone of the handle reaches the
//! store through [`StoreHandle::get`], which fails loudly when called before
//! provisioning instead of silently handing out defaults.

use crate::store::SessionStore;
use fitscan_core::{FitscanError, Result};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// A set-once slot for the session store.
///
/// Clones share the slot, so the composition root can hand the same handle
/// to every consumer before the store exists.
#[derive(Clone, Default)]
pub struct StoreHandle {
    cell: Arc<OnceCell<Arc<SessionStore>>>,
}

impl StoreHandle {
    /// Creates an empty, unprovisioned handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the store.
    ///
    /// # Errors
    ///
    /// Returns an error if a store was already installed; provisioning
    /// happens exactly once per handle.
    pub fn provide(&self, store: Arc<SessionStore>) -> Result<()> {
        self.cell
            .set(store)
            .map_err(|_| FitscanError::internal("Session store provisioned twice"))
    }

    /// Returns the provisioned store.
    ///
    /// Calling this before [`StoreHandle::provide`] is a programming error
    /// and fails loudly.
    pub fn get(&self) -> Result<Arc<SessionStore>> {
        self.cell
            .get()
            .cloned()
            .ok_or(FitscanError::StoreNotProvisioned)
    }

    /// Whether a store has been installed.
    pub fn is_provisioned(&self) -> bool {
        self.cell.get().is_some()
    }
}
