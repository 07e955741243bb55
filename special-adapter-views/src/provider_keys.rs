use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::CustomRow;

/// Recycling keys for custom row providers.
///
/// A provider gets its key the first time one of its rows is looked at, and keeps it for the
/// adapter's lifetime, across any number of registrations. The table holds a strong reference
/// to every provider it has keyed, so a key always resolves to the provider that owns it and an
/// address cannot be handed to another provider.
pub(crate) struct ProviderKeys<T, V> {
    providers: RefCell<Vec<CustomRow<T, V>>>,
}

impl<T, V> ProviderKeys<T, V> {
    pub(crate) fn new() -> Self {
        Self {
            providers: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn key_of(&self, provider: &CustomRow<T, V>) -> usize {
        let mut providers = self.providers.borrow_mut();
        if let Some(key) = providers.iter().position(|p| Arc::ptr_eq(p, provider)) {
            return key;
        }
        providers.push(Arc::clone(provider));
        ldebug!(key = providers.len() - 1, "new custom view type");
        providers.len() - 1
    }

    pub(crate) fn provider(&self, key: usize) -> Option<CustomRow<T, V>> {
        self.providers.borrow().get(key).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.providers.borrow().len()
    }
}
