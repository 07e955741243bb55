use crate::registry::CustomRegistry;
use crate::{Capabilities, Role};

/// The virtual position space derived from the adapter state.
///
/// Nothing here is stored: every query is computed from the capability set, the data length,
/// the custom registry and the empty-state flag, so the two indices cannot drift apart.
///
/// Row order (when not collapsed):
/// 1. refresh row
/// 2. header row
/// 3. data rows interleaved with custom rows (a custom row anchored at `k` sits right before the
///    data row at logical `k`)
/// 4. footer row
///
/// When collapsed (empty state with an empty row) the whole space is a single empty row.
pub(crate) struct PositionSpace<'a, P> {
    pub(crate) capabilities: Capabilities,
    pub(crate) len: usize,
    pub(crate) registry: &'a CustomRegistry<P>,
    pub(crate) collapsed: bool,
}

impl<P> PositionSpace<'_, P> {
    pub(crate) fn leading(&self) -> usize {
        self.capabilities.leading_rows()
    }

    pub(crate) fn count(&self) -> usize {
        if self.collapsed {
            return 1;
        }
        self.leading() + self.len + self.registry.len() + self.capabilities.trailing_rows()
    }

    pub(crate) fn refresh(&self) -> Option<usize> {
        (self.capabilities.refresh && !self.collapsed).then_some(0)
    }

    pub(crate) fn header(&self) -> Option<usize> {
        (self.capabilities.header && !self.collapsed)
            .then(|| usize::from(self.capabilities.refresh))
    }

    pub(crate) fn footer(&self) -> Option<usize> {
        (self.capabilities.footer && !self.collapsed).then(|| self.count() - 1)
    }

    pub(crate) fn empty(&self) -> Option<usize> {
        self.collapsed.then_some(0)
    }

    /// Virtual position of logical `logical`, without range checks.
    ///
    /// `logical == len` yields the position an appended item would take.
    pub(crate) fn virtual_of(&self, logical: usize) -> usize {
        self.leading() + logical + self.registry.anchored_at_or_before(logical)
    }

    pub(crate) fn logical_to_virtual(&self, logical: usize) -> Option<usize> {
        if self.collapsed || logical >= self.len {
            return None;
        }
        Some(self.virtual_of(logical))
    }

    pub(crate) fn role_at(&self, position: usize) -> Option<Role> {
        let count = self.count();
        if position >= count {
            return None;
        }
        if self.collapsed {
            return Some(Role::Empty);
        }
        if self.refresh() == Some(position) {
            return Some(Role::Refresh);
        }
        if self.header() == Some(position) {
            return Some(Role::Header);
        }
        if self.footer() == Some(position) {
            return Some(Role::Footer);
        }
        if let Some(id) = self.registry.id_at(position) {
            let anchor = self.registry.entry(id).map_or(self.len, |e| e.anchor);
            return Some(Role::Custom { id, anchor });
        }
        let logical = position - self.leading() - self.registry.count_before(position);
        debug_assert!(
            logical < self.len,
            "PositionSpace: item row resolved past the data (position={position}, logical={logical}, len={})",
            self.len
        );
        Some(Role::Item { logical })
    }

    /// Walks every row in order without allocating.
    pub(crate) fn for_each_row(&self, mut f: impl FnMut(usize, Role)) {
        if self.collapsed {
            f(0, Role::Empty);
            return;
        }
        let mut position = 0usize;
        if self.capabilities.refresh {
            f(position, Role::Refresh);
            position += 1;
        }
        if self.capabilities.header {
            f(position, Role::Header);
            position += 1;
        }

        let mut logical = 0usize;
        for (custom_position, id) in self.registry.iter_positions() {
            while position < custom_position {
                f(position, Role::Item { logical });
                logical += 1;
                position += 1;
            }
            let anchor = self.registry.entry(id).map_or(self.len, |e| e.anchor);
            f(position, Role::Custom { id, anchor });
            position += 1;
        }
        while logical < self.len {
            f(position, Role::Item { logical });
            logical += 1;
            position += 1;
        }

        if self.capabilities.footer {
            f(position, Role::Footer);
        }
    }
}
