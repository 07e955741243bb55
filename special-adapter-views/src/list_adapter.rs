use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use special_adapter::{Error, Result, Role, RowKind, SpecialAdapter, SpecialAdapterOptions};

use crate::listener::{CustomClick, ItemClick, Listeners, fire};
use crate::{
    Core, CustomRow, Delegates, FullSpan, Holder, RowDelegate, SpanLookup, ViewType,
};
use crate::provider_keys::ProviderKeys;

/// A view-layer adapter that wraps a [`SpecialAdapter`] and turns its roles into created and
/// bound row views.
///
/// This type holds no list view. A list view drives it by calling:
/// - [`view_type`](Self::view_type) to key its recycling pool
/// - [`create_holder`](Self::create_holder) when the pool has no holder for a view type
/// - [`bind_holder`](Self::bind_holder) for every position it shows
/// - [`perform_click`](Self::perform_click) when a row is clicked
///
/// Data and custom row mutations go through [`core_mut`](Self::core_mut); their change
/// notifications are delivered through the core adapter's `on_change`.
pub struct SpecialListAdapter<T, V> {
    core: Core<T, V>,
    delegates: Delegates<T, V>,
    listeners: Listeners<T, V>,
    keys: ProviderKeys<T, V>,
    span: SpanLookup,
}

impl<T, V> SpecialListAdapter<T, V> {
    /// Creates an adapter with no data. The capability set is derived from `delegates`.
    pub fn new(delegates: Delegates<T, V>) -> Self {
        Self::with_data(delegates, Vec::new())
    }

    pub fn with_data(delegates: Delegates<T, V>, data: Vec<T>) -> Self {
        let options = SpecialAdapterOptions::new(delegates.capabilities());
        ldebug!(
            len = data.len(),
            capabilities = ?options.capabilities,
            "SpecialListAdapter::new"
        );
        Self {
            core: SpecialAdapter::with_data(options, data),
            delegates,
            listeners: Listeners::default(),
            keys: ProviderKeys::new(),
            span: SpanLookup::default(),
        }
    }

    pub fn core(&self) -> &Core<T, V> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut Core<T, V> {
        &mut self.core
    }

    pub fn into_core(self) -> Core<T, V> {
        self.core
    }

    pub fn delegates(&self) -> &Delegates<T, V> {
        &self.delegates
    }

    pub fn virtual_count(&self) -> usize {
        self.core.virtual_count()
    }

    /// The recycling key of the row at `position`.
    ///
    /// Custom rows are keyed by their provider, not by their registration: registering the same
    /// provider again (or at several anchors) keeps its view type.
    pub fn view_type(&self, position: usize) -> Option<ViewType> {
        let role = self.core.role_at(position)?;
        self.view_type_of(role).ok()
    }

    fn view_type_of(&self, role: Role) -> Result<ViewType> {
        Ok(match role {
            Role::Refresh => ViewType::Refresh,
            Role::Header => ViewType::Header,
            Role::Footer => ViewType::Footer,
            Role::Empty => ViewType::Empty,
            Role::Custom { id, .. } => ViewType::Custom(self.keys.key_of(self.registered(id)?)),
            Role::Item { .. } => ViewType::Item,
        })
    }

    /// Number of distinct custom view types seen so far.
    pub fn custom_view_type_count(&self) -> usize {
        self.keys.len()
    }

    /// Creates the view for `view_type`.
    ///
    /// Fails with [`Error::MissingCapability`] if the adapter has no delegate for the row kind,
    /// and with [`Error::UnknownCustomViewType`] if no provider was ever keyed under the custom
    /// view type.
    pub fn create_holder(&self, view_type: ViewType) -> Result<Holder<V>> {
        ltrace!(?view_type, "SpecialListAdapter::create_holder");
        let view = match view_type {
            ViewType::Item => self.delegates.item().create(),
            ViewType::Custom(key) => match self.keys.provider(key) {
                Some(provider) => provider.create(),
                None => {
                    lwarn!(key, "create_holder: unknown custom view type");
                    return Err(Error::UnknownCustomViewType { key });
                }
            },
            other => self.row_delegate(other.kind())?.create(),
        };
        Ok(Holder::new(view_type, view))
    }

    /// Creates a holder for the row at `position` and binds it.
    pub fn create_and_bind(&self, position: usize) -> Result<Holder<V>> {
        let view_type = self.view_type(position).ok_or_else(|| self.out_of_range(position))?;
        let mut holder = self.create_holder(view_type)?;
        self.bind_holder(&mut holder, position)?;
        Ok(holder)
    }

    /// Binds `holder` to the row at `position`.
    ///
    /// The holder must have been created for the row's view type: same row kind, and for
    /// custom rows the same provider. Custom rows are bound by the provider registered for
    /// that row, with the data item at the row's anchor.
    pub fn bind_holder(&self, holder: &mut Holder<V>, position: usize) -> Result<()> {
        let role = self
            .core
            .role_at(position)
            .ok_or_else(|| self.out_of_range(position))?;
        let found = holder.view_type();
        if role.kind() != found.kind() {
            lwarn!(position, expected = ?role.kind(), ?found, "bind_holder: role mismatch");
            return Err(Error::RoleMismatch {
                expected: role.kind(),
                found: found.kind(),
            });
        }
        let expected = self.view_type_of(role)?;
        if let (ViewType::Custom(expected), ViewType::Custom(found)) = (expected, found) {
            if expected != found {
                lwarn!(position, expected, found, "bind_holder: custom view type mismatch");
                return Err(Error::CustomViewTypeMismatch { expected, found });
            }
        }

        match role {
            Role::Item { logical } => {
                let item = self
                    .core
                    .item(logical)
                    .ok_or_else(|| self.out_of_range(position))?;
                self.delegates.item().bind(holder.view_mut(), item, logical);
            }
            Role::Custom { id, anchor } => {
                self.registered(id)?
                    .bind(holder.view_mut(), self.core.item(anchor), anchor);
            }
            other => self.row_delegate(other.kind())?.bind(holder.view_mut()),
        }
        holder.bound_to(position);
        ltrace!(position, ?role, "SpecialListAdapter::bind_holder");
        Ok(())
    }

    fn row_delegate(&self, kind: RowKind) -> Result<&dyn RowDelegate<V>> {
        self.delegates.row(kind).ok_or_else(|| {
            lwarn!(?kind, "missing row delegate");
            Error::MissingCapability(kind)
        })
    }

    fn registered(&self, id: usize) -> Result<&CustomRow<T, V>> {
        self.core.custom_provider(id).ok_or_else(|| {
            lwarn!(id, "custom row provider not registered");
            Error::ProviderUnavailable { id }
        })
    }

    fn out_of_range(&self, position: usize) -> Error {
        Error::PositionOutOfRange {
            position,
            count: self.core.virtual_count(),
        }
    }

    // ---------------------------------------------------------------------------------------
    // Click dispatch
    // ---------------------------------------------------------------------------------------

    pub fn set_on_header_click(
        &mut self,
        listener: Option<impl FnMut(&mut Core<T, V>, usize) + 'static>,
    ) {
        self.listeners.header = listener.map(|f| Box::new(f) as _);
    }

    pub fn set_on_footer_click(
        &mut self,
        listener: Option<impl FnMut(&mut Core<T, V>, usize) + 'static>,
    ) {
        self.listeners.footer = listener.map(|f| Box::new(f) as _);
    }

    pub fn set_on_empty_click(
        &mut self,
        listener: Option<impl FnMut(&mut Core<T, V>, usize) + 'static>,
    ) {
        self.listeners.empty = listener.map(|f| Box::new(f) as _);
    }

    pub fn set_on_custom_click(
        &mut self,
        listener: Option<impl FnMut(&mut Core<T, V>, CustomClick) + 'static>,
    ) {
        self.listeners.custom = listener.map(|f| Box::new(f) as _);
    }

    pub fn set_on_item_click(
        &mut self,
        listener: Option<impl FnMut(&mut Core<T, V>, ItemClick) + 'static>,
    ) {
        self.listeners.item = listener.map(|f| Box::new(f) as _);
    }

    /// Dispatches a click on the row at `position` to the listener for its role.
    ///
    /// Returns `false` if the position is out of range, the row is a refresh row, or no
    /// listener is set for the role.
    pub fn perform_click(&mut self, position: usize) -> bool {
        let Some(role) = self.core.role_at(position) else {
            return false;
        };
        ltrace!(position, ?role, "SpecialListAdapter::perform_click");
        let core = &mut self.core;
        let listeners = &mut self.listeners;
        match role {
            Role::Refresh => false,
            Role::Header => fire(&mut listeners.header, core, position),
            Role::Footer => fire(&mut listeners.footer, core, position),
            Role::Empty => fire(&mut listeners.empty, core, position),
            Role::Custom { id, anchor } => fire(
                &mut listeners.custom,
                core,
                CustomClick {
                    position,
                    id,
                    anchor,
                },
            ),
            Role::Item { logical } => {
                fire(&mut listeners.item, core, ItemClick { position, logical })
            }
        }
    }

    /// Dispatches a click on the row `holder` was last bound to.
    pub fn perform_holder_click(&mut self, holder: &Holder<V>) -> bool {
        holder
            .position()
            .is_some_and(|position| self.perform_click(position))
    }

    // ---------------------------------------------------------------------------------------
    // Grid spans
    // ---------------------------------------------------------------------------------------

    pub fn span_lookup(&self) -> SpanLookup {
        self.span
    }

    pub fn set_span_count(&mut self, span_count: usize) {
        self.span.span_count = span_count.max(1);
    }

    pub fn set_full_span(&mut self, full_span: FullSpan) {
        self.span.full_span = full_span;
    }

    /// Spans taken by the row at `position`. Out-of-range positions take a single span.
    pub fn span_size(&self, position: usize) -> usize {
        self.span.span_size(self.core.role_at(position))
    }
}

impl<T: fmt::Debug, V> fmt::Debug for SpecialListAdapter<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecialListAdapter")
            .field("layout", &self.core.layout_state())
            .field("data", &self.core.data())
            .field("delegates", &self.delegates)
            .field("listeners", &self.listeners)
            .field("custom_view_types", &self.keys.len())
            .field("span", &self.span)
            .finish()
    }
}
