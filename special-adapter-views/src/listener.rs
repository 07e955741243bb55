use alloc::boxed::Box;
use core::fmt;

use crate::Core;

/// A click handler. It receives the adapter so it can mutate the data re-entrantly.
pub type ClickListener<T, V, A> = Box<dyn FnMut(&mut Core<T, V>, A)>;

/// Context passed to custom row click listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomClick {
    pub position: usize,
    pub id: usize,
    pub anchor: usize,
}

/// Context passed to item click listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemClick {
    pub position: usize,
    pub logical: usize,
}

/// One optional listener per clickable row kind. Setting a listener replaces the previous one.
///
/// The refresh row has no click listener.
pub(crate) struct Listeners<T, V> {
    pub(crate) header: Option<ClickListener<T, V, usize>>,
    pub(crate) footer: Option<ClickListener<T, V, usize>>,
    pub(crate) empty: Option<ClickListener<T, V, usize>>,
    pub(crate) custom: Option<ClickListener<T, V, CustomClick>>,
    pub(crate) item: Option<ClickListener<T, V, ItemClick>>,
}

impl<T, V> Default for Listeners<T, V> {
    fn default() -> Self {
        Self {
            header: None,
            footer: None,
            empty: None,
            custom: None,
            item: None,
        }
    }
}

impl<T, V> fmt::Debug for Listeners<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("header", &self.header.is_some())
            .field("footer", &self.footer.is_some())
            .field("empty", &self.empty.is_some())
            .field("custom", &self.custom.is_some())
            .field("item", &self.item.is_some())
            .finish()
    }
}

/// Calls the listener in `slot`, if any.
///
/// The listener is taken out while it runs, so it may mutate `core` freely.
pub(crate) fn fire<T, V, A>(
    slot: &mut Option<ClickListener<T, V, A>>,
    core: &mut Core<T, V>,
    arg: A,
) -> bool {
    let Some(mut listener) = slot.take() else {
        return false;
    };
    listener(core, arg);
    *slot = Some(listener);
    true
}
