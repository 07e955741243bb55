use alloc::sync::Arc;

use crate::Capabilities;
use crate::Change;
use crate::adapter::SpecialAdapter;

/// A callback fired for every structural change, after the adapter state is fully updated.
///
/// The adapter is passed back so the callback can re-query `virtual_count`/`role_at` the way a
/// list view does while applying a notification.
pub type OnChangeCallback<T, P> = Arc<dyn Fn(&SpecialAdapter<T, P>, Change) + Send + Sync>;

/// Configuration for [`crate::SpecialAdapter`].
pub struct SpecialAdapterOptions<T, P> {
    pub capabilities: Capabilities,

    /// Optional change listener (typically the list view's notification entry point).
    pub on_change: Option<OnChangeCallback<T, P>>,
}

impl<T, P> Clone for SpecialAdapterOptions<T, P> {
    fn clone(&self) -> Self {
        Self {
            capabilities: self.capabilities,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T, P> Default for SpecialAdapterOptions<T, P> {
    fn default() -> Self {
        Self::new(Capabilities::none())
    }
}

impl<T, P> SpecialAdapterOptions<T, P> {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            on_change: None,
        }
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&SpecialAdapter<T, P>, Change) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T, P> core::fmt::Debug for SpecialAdapterOptions<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpecialAdapterOptions")
            .field("capabilities", &self.capabilities)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}
