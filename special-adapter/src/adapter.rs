use alloc::sync::Arc;
use alloc::vec::Vec;
use core::mem;

use crate::changes::ChangeSet;
use crate::registry::{CustomEntry, CustomRegistry};
use crate::transform::PositionSpace;
use crate::{Capabilities, Change, Error, LayoutState, Role, SpecialAdapterOptions};

/// A list adapter that multiplexes refresh, header, footer, empty, custom and data rows onto a
/// single flat position space.
///
/// This type is UI-agnostic:
/// - It owns the data list and the custom row registry (`P` is the caller's provider type).
/// - Every mutation updates the state first, then reports [`Change`]s in virtual positions
///   through `on_change`.
/// - A list view resolves positions with [`role_at`](Self::role_at) and
///   [`virtual_to_logical`](Self::virtual_to_logical).
///
/// For holder creation, binding and click dispatch, see the `special-adapter-views` crate.
#[derive(Clone)]
pub struct SpecialAdapter<T, P = ()> {
    options: SpecialAdapterOptions<T, P>,
    data: Vec<T>,
    registry: CustomRegistry<P>,
    empty_state: bool,

    batch_depth: usize,
    pending: Vec<Change>,
}

impl<T, P> SpecialAdapter<T, P> {
    /// Creates an adapter with no data. The empty state is active from the start.
    pub fn new(options: SpecialAdapterOptions<T, P>) -> Self {
        Self::with_data(options, Vec::new())
    }

    /// Creates an adapter over an initial data list. No change is emitted.
    pub fn with_data(options: SpecialAdapterOptions<T, P>, data: Vec<T>) -> Self {
        sdebug!(
            len = data.len(),
            capabilities = ?options.capabilities,
            "SpecialAdapter::new"
        );
        Self {
            empty_state: data.is_empty(),
            data,
            registry: CustomRegistry::new(),
            options,
            batch_depth: 0,
            pending: Vec::new(),
        }
    }

    pub fn options(&self) -> &SpecialAdapterOptions<T, P> {
        &self.options
    }

    pub fn capabilities(&self) -> Capabilities {
        self.options.capabilities
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&SpecialAdapter<T, P>, Change) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn space(&self) -> PositionSpace<'_, P> {
        PositionSpace {
            capabilities: self.options.capabilities,
            len: self.data.len(),
            registry: &self.registry,
            collapsed: self.is_collapsed(),
        }
    }

    fn leading(&self) -> usize {
        self.options.capabilities.leading_rows()
    }

    fn is_collapsed(&self) -> bool {
        self.empty_state && self.options.capabilities.empty
    }

    // ---------------------------------------------------------------------------------------
    // Position transform queries
    // ---------------------------------------------------------------------------------------

    /// Total number of rows the list view renders.
    pub fn virtual_count(&self) -> usize {
        self.space().count()
    }

    /// Classifies a virtual position. Returns `None` past the end.
    pub fn role_at(&self, position: usize) -> Option<Role> {
        self.space().role_at(position)
    }

    /// Virtual position currently occupied by a data row.
    ///
    /// Returns `None` when `logical` is out of range or the empty row is shown instead.
    pub fn logical_to_virtual(&self, logical: usize) -> Option<usize> {
        self.space().logical_to_virtual(logical)
    }

    /// Logical position of the data row at `position`, or `None` for any other row.
    pub fn virtual_to_logical(&self, position: usize) -> Option<usize> {
        self.role_at(position).and_then(|role| role.logical())
    }

    /// Iterates every `(virtual position, role)` pair in order without allocations.
    pub fn for_each_row(&self, f: impl FnMut(usize, Role)) {
        self.space().for_each_row(f);
    }

    pub fn refresh_position(&self) -> Option<usize> {
        self.space().refresh()
    }

    pub fn header_position(&self) -> Option<usize> {
        self.space().header()
    }

    pub fn footer_position(&self) -> Option<usize> {
        self.space().footer()
    }

    pub fn empty_position(&self) -> Option<usize> {
        self.space().empty()
    }

    /// Virtual positions of all custom rows, ascending. Empty while the empty row is shown.
    pub fn custom_positions(&self) -> Vec<usize> {
        if self.is_collapsed() {
            return Vec::new();
        }
        self.registry.positions()
    }

    /// Number of data rows.
    pub fn item_count(&self) -> usize {
        self.data.len()
    }

    /// Whether the empty state is active. The empty row is only rendered when the adapter has the
    /// empty capability.
    pub fn is_empty_state(&self) -> bool {
        self.empty_state
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn item(&self, logical: usize) -> Option<&T> {
        self.data.get(logical)
    }

    /// Number of registered custom rows.
    pub fn custom_count(&self) -> usize {
        self.registry.len()
    }

    /// Provider of the custom row registered as `id` (see [`Role::Custom`]).
    pub fn custom_provider(&self, id: usize) -> Option<&P> {
        self.registry.entry(id).map(|e| &e.provider)
    }

    /// Logical insertion point of the custom row registered as `id`.
    pub fn custom_anchor(&self, id: usize) -> Option<usize> {
        self.registry.entry(id).map(|e| e.anchor)
    }

    /// Returns a snapshot of the current layout.
    pub fn layout_state(&self) -> LayoutState {
        let space = self.space();
        LayoutState {
            count: space.count(),
            item_count: self.data.len(),
            refresh: space.refresh(),
            header: space.header(),
            footer: space.footer(),
            empty: space.empty(),
            custom_positions: self.custom_positions(),
        }
    }

    // ---------------------------------------------------------------------------------------
    // Notifications
    // ---------------------------------------------------------------------------------------

    fn emit(&mut self, changes: ChangeSet) {
        let changes = changes.finish(self.virtual_count());
        if changes.is_empty() {
            return;
        }
        if self.batch_depth > 0 {
            self.pending.extend(changes);
            return;
        }
        self.deliver(changes);
    }

    fn deliver(&self, changes: Vec<Change>) {
        let Some(cb) = self.options.on_change.clone() else {
            return;
        };
        for change in changes {
            strace!(?change, "deliver");
            cb(self, change);
        }
    }

    /// Runs several mutations and delivers their changes once the outermost batch returns.
    ///
    /// Changes are delivered in order. If any mutation in the batch reset the list, a single
    /// [`Change::Reset`] is delivered instead.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.batch_depth = self.batch_depth.saturating_add(1);

        f(self);

        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);
        if self.batch_depth > 0 || self.pending.is_empty() {
            return;
        }

        let mut pending = mem::take(&mut self.pending);
        if pending.contains(&Change::Reset) {
            pending.clear();
            pending.push(Change::Reset);
        }
        self.deliver(pending);
    }

    // ---------------------------------------------------------------------------------------
    // Data mutations
    // ---------------------------------------------------------------------------------------

    /// Replaces the whole data list.
    pub fn init_data(&mut self, items: Vec<T>) {
        let old = self.virtual_count();
        let was_collapsed = self.is_collapsed();
        strace!(old_len = self.data.len(), new_len = items.len(), "init_data");

        self.data = items;
        self.empty_state = self.data.is_empty();
        self.registry.clamp_anchors(self.data.len(), self.leading());

        let new = self.virtual_count();
        let mut changes = ChangeSet::new(old);
        if was_collapsed != self.is_collapsed() {
            changes.reset();
        } else if new < old {
            changes.removed(new, old - new);
            changes.changed(0, new);
        } else {
            changes.changed(0, old);
            changes.inserted(old, new - old);
        }
        self.emit(changes);
    }

    /// Appends one item.
    ///
    /// The first item of an empty list resets the list view, since header, footer and custom
    /// rows may appear together with it.
    pub fn insert_data(&mut self, item: T) {
        let logical = self.data.len();
        self.insert_data_at(item, logical);
    }

    /// Inserts one item at `logical`. Positions past the end append.
    pub fn insert_data_at(&mut self, item: T, logical: usize) {
        let logical = logical.min(self.data.len());
        let old = self.virtual_count();
        let was_empty = self.data.is_empty() || self.is_collapsed();
        strace!(logical, "insert_data_at");

        self.data.insert(logical, item);
        self.empty_state = false;

        let mut changes = ChangeSet::new(old);
        if was_empty {
            changes.reset();
        } else {
            let position = self.space().virtual_of(logical);
            let new = self.virtual_count();
            changes.inserted(position, 1);
            changes.changed(position + 1, new - position - 1);
        }
        self.emit(changes);
    }

    /// Removes the item at `logical`. Out-of-range positions are a no-op returning `None`.
    pub fn remove_data(&mut self, logical: usize) -> Option<T> {
        if logical >= self.data.len() {
            swarn!(logical, len = self.data.len(), "remove_data: out of range");
            return None;
        }
        let old = self.virtual_count();
        let was_collapsed = self.is_collapsed();
        let position = self.space().virtual_of(logical);
        strace!(logical, position, "remove_data");

        let item = self.data.remove(logical);
        let len = self.data.len();
        let regrouped = self.registry.clamp_anchors(len, self.leading());
        if self.data.is_empty() {
            self.empty_state = true;
        }

        let mut changes = ChangeSet::new(old);
        let collapsed = self.is_collapsed();
        if was_collapsed != collapsed {
            changes.reset();
        } else if !collapsed {
            // Rows clamped onto the new end merge with the rows already anchored there, which
            // can reorder that whole group.
            let first = if regrouped {
                let group = self.leading() + len + self.registry.anchored_before(len);
                position.min(group)
            } else {
                position
            };
            let new = self.virtual_count();
            changes.removed(position, 1);
            changes.changed(first, new - first);
        }
        self.emit(changes);
        Some(item)
    }

    /// Clears the data list and enters the empty state.
    ///
    /// With `clear_custom`, the custom row registry is cleared too; otherwise custom rows stay
    /// registered with their anchors pulled back to `0`.
    pub fn remove_all(&mut self, clear_custom: bool) {
        let old = self.virtual_count();
        let was_collapsed = self.is_collapsed();
        let old_len = self.data.len();
        let old_custom = self.registry.len();
        strace!(old_len, old_custom, clear_custom, "remove_all");

        self.data.clear();
        if clear_custom {
            self.registry.clear();
        } else {
            self.registry.clamp_anchors(0, self.leading());
        }
        self.empty_state = true;

        let mut changes = ChangeSet::new(old);
        if self.is_collapsed() {
            if was_collapsed {
                changes.changed(0, 1);
            } else {
                changes.removed(0, old);
                changes.inserted(0, 1);
            }
        } else {
            let leading = self.leading();
            changes.removed(leading, old_len + old_custom);
            changes.inserted(leading, self.registry.len());
        }
        self.emit(changes);
    }

    /// Appends a batch of items.
    pub fn add_data(&mut self, items: impl IntoIterator<Item = T>) {
        let logical = self.data.len();
        self.add_data_at(items, logical);
    }

    /// Inserts a batch of items at `logical`. Positions past the end append.
    ///
    /// The batch is reported as one inserted range plus a change over the trailing rows.
    pub fn add_data_at(&mut self, items: impl IntoIterator<Item = T>, logical: usize) {
        let logical = logical.min(self.data.len());
        let old = self.virtual_count();
        let was_empty = self.data.is_empty() || self.is_collapsed();
        let before = self.data.len();

        self.data.splice(logical..logical, items);
        let added = self.data.len() - before;
        if added == 0 {
            return;
        }
        strace!(logical, added, "add_data_at");
        self.empty_state = false;

        let mut changes = ChangeSet::new(old);
        if was_empty {
            changes.reset();
        } else {
            let position = self.space().virtual_of(logical);
            let new = self.virtual_count();
            changes.inserted(position, added);
            changes.changed(position + added, new - position - added);
        }
        self.emit(changes);
    }

    /// Replaces the item at `logical`, returning the previous one.
    ///
    /// Out-of-range positions are a no-op returning `None`.
    pub fn update_data(&mut self, item: T, logical: usize) -> Option<T> {
        let Some(current) = self.data.get_mut(logical) else {
            swarn!(logical, "update_data: out of range");
            return None;
        };
        let prev = mem::replace(current, item);
        strace!(logical, "update_data");

        let mut changes = ChangeSet::new(self.virtual_count());
        if let Some(position) = self.logical_to_virtual(logical) {
            changes.changed(position, 1);
        }
        self.emit(changes);
        Some(prev)
    }

    /// Swaps the items at two logical positions.
    ///
    /// Returns `false` (and does nothing) when either position is out of range.
    pub fn move_data(&mut self, from: usize, to: usize) -> bool {
        let len = self.data.len();
        if from >= len || to >= len {
            swarn!(from, to, len, "move_data: out of range");
            return false;
        }
        if from == to {
            return true;
        }
        self.data.swap(from, to);
        strace!(from, to, "move_data");

        let mut changes = ChangeSet::new(self.virtual_count());
        if let (Some(a), Some(b)) = (self.logical_to_virtual(from), self.logical_to_virtual(to)) {
            changes.moved(a, b);
            let (lo, hi) = (a.min(b), a.max(b));
            changes.changed(lo, hi - lo + 1);
        }
        self.emit(changes);
        true
    }

    /// Shows the empty row regardless of the data list, until the next insertion.
    ///
    /// Has no visible effect when the adapter lacks the empty capability.
    pub fn show_empty(&mut self) {
        let old = self.virtual_count();
        let was_collapsed = self.is_collapsed();
        self.empty_state = true;

        let mut changes = ChangeSet::new(old);
        if was_collapsed != self.is_collapsed() {
            changes.reset();
        }
        self.emit(changes);
    }

    // ---------------------------------------------------------------------------------------
    // Custom rows
    // ---------------------------------------------------------------------------------------

    /// Replaces every custom row.
    ///
    /// `anchors[i]` is the logical insertion point of `providers[i]`; anchors past the end of the
    /// data are clamped to append. Fails without touching the registry when the lengths differ.
    pub fn set_custom_item_layout(
        &mut self,
        providers: Vec<P>,
        anchors: Vec<usize>,
    ) -> Result<(), Error> {
        if providers.len() != anchors.len() {
            swarn!(
                providers = providers.len(),
                positions = anchors.len(),
                "set_custom_item_layout: length mismatch"
            );
            return Err(Error::CustomLayoutMismatch {
                providers: providers.len(),
                positions: anchors.len(),
            });
        }

        let old = self.virtual_count();
        let old_positions = self.custom_positions();
        let len = self.data.len();
        let entries = providers
            .into_iter()
            .zip(anchors)
            .map(|(provider, anchor)| CustomEntry {
                anchor: anchor.min(len),
                provider,
            });
        self.registry.replace(entries, self.leading());
        let new_positions = self.custom_positions();
        strace!(
            old = old_positions.len(),
            new = new_positions.len(),
            "set_custom_item_layout"
        );

        let mut changes = ChangeSet::new(old);
        if !self.is_collapsed() {
            for &position in old_positions.iter().rev() {
                changes.removed(position, 1);
            }
            for &position in &new_positions {
                changes.inserted(position, 1);
            }
            let first = old_positions.first().into_iter().chain(new_positions.first()).min();
            if let Some(&first) = first {
                let new = self.virtual_count();
                changes.changed(first, new - first);
            }
        }
        self.emit(changes);
        Ok(())
    }

    /// Registers one more custom row before the data row at `anchor` (clamped to append).
    ///
    /// Returns the new row's virtual position, or `None` while the empty row is shown.
    pub fn add_custom_item_layout(&mut self, provider: P, anchor: usize) -> Option<usize> {
        let old = self.virtual_count();
        let anchor = anchor.min(self.data.len());
        let id = self.registry.push(provider, anchor, self.leading());
        strace!(id, anchor, "add_custom_item_layout");

        if self.is_collapsed() {
            return None;
        }
        let position = self.registry.position_of(id)?;
        let mut changes = ChangeSet::new(old);
        let new = self.virtual_count();
        changes.inserted(position, 1);
        changes.changed(position + 1, new - position - 1);
        self.emit(changes);
        Some(position)
    }

    /// Unregisters the custom row at virtual `position`, returning its provider.
    ///
    /// Returns `None` when `position` is not a custom row.
    pub fn remove_custom_item_layout(&mut self, position: usize) -> Option<P> {
        if self.is_collapsed() {
            return None;
        }
        let id = self.registry.id_at(position)?;
        let old = self.virtual_count();
        let provider = self.registry.remove(id, self.leading())?;
        strace!(id, position, "remove_custom_item_layout");

        let mut changes = ChangeSet::new(old);
        let new = self.virtual_count();
        changes.removed(position, 1);
        changes.changed(position, new - position);
        self.emit(changes);
        Some(provider)
    }
}

impl<T: core::fmt::Debug, P: core::fmt::Debug> core::fmt::Debug for SpecialAdapter<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpecialAdapter")
            .field("options", &self.options)
            .field("data", &self.data)
            .field("registry", &self.registry)
            .field("empty_state", &self.empty_state)
            .finish_non_exhaustive()
    }
}
