use alloc::collections::BTreeMap;
use alloc::vec::Vec;

#[derive(Clone, Debug)]
pub(crate) struct CustomEntry<P> {
    pub(crate) anchor: usize,
    pub(crate) provider: P,
}

/// Custom rows keyed by registration id, plus their virtual positions.
///
/// Ids increase monotonically, so id order is registration order and an id never changes while
/// its row stays registered. `positions` is never patched in place: every mutation ends with
/// `rebuild`, which recomputes all keys from the anchors.
#[derive(Clone, Debug)]
pub(crate) struct CustomRegistry<P> {
    entries: BTreeMap<usize, CustomEntry<P>>,
    positions: BTreeMap<usize, usize>, // virtual position -> id
    next_id: usize,
}

impl<P> CustomRegistry<P> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            positions: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn entry(&self, id: usize) -> Option<&CustomEntry<P>> {
        self.entries.get(&id)
    }

    pub(crate) fn id_at(&self, position: usize) -> Option<usize> {
        self.positions.get(&position).copied()
    }

    pub(crate) fn position_of(&self, id: usize) -> Option<usize> {
        self.positions
            .iter()
            .find(|&(_, &i)| i == id)
            .map(|(&position, _)| position)
    }

    /// Virtual positions in ascending order, paired with their id.
    pub(crate) fn iter_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions.iter().map(|(&p, &id)| (p, id))
    }

    pub(crate) fn positions(&self) -> Vec<usize> {
        self.positions.keys().copied().collect()
    }

    /// Number of custom rows rendered before the data row at `logical`.
    pub(crate) fn anchored_at_or_before(&self, logical: usize) -> usize {
        self.entries.values().filter(|e| e.anchor <= logical).count()
    }

    pub(crate) fn anchored_before(&self, logical: usize) -> usize {
        self.entries.values().filter(|e| e.anchor < logical).count()
    }

    /// Number of custom rows whose virtual position is below `position`.
    pub(crate) fn count_before(&self, position: usize) -> usize {
        self.positions.range(..position).count()
    }

    /// Drops every row and registers `entries` in order.
    pub(crate) fn replace(
        &mut self,
        entries: impl IntoIterator<Item = CustomEntry<P>>,
        leading: usize,
    ) {
        self.entries.clear();
        for entry in entries {
            self.entries.insert(self.next_id, entry);
            self.next_id += 1;
        }
        self.rebuild(leading);
    }

    pub(crate) fn push(&mut self, provider: P, anchor: usize, leading: usize) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, CustomEntry { anchor, provider });
        self.rebuild(leading);
        id
    }

    pub(crate) fn remove(&mut self, id: usize, leading: usize) -> Option<P> {
        let entry = self.entries.remove(&id)?;
        self.rebuild(leading);
        Some(entry.provider)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Pulls every anchor back inside `0..=len`. Returns `true` if any anchor moved.
    pub(crate) fn clamp_anchors(&mut self, len: usize, leading: usize) -> bool {
        let mut moved = false;
        for entry in self.entries.values_mut() {
            if entry.anchor > len {
                entry.anchor = len;
                moved = true;
            }
        }
        if moved {
            self.rebuild(leading);
        }
        moved
    }

    /// Recomputes every virtual position from scratch.
    ///
    /// Rows are ordered by anchor; rows sharing an anchor keep registration order. A row with
    /// rank `r` in that order and anchor `a` sits after `a` data rows and `r` custom rows.
    pub(crate) fn rebuild(&mut self, leading: usize) {
        // BTreeMap iteration is in id order, and the sort is stable.
        let mut order: Vec<(usize, usize)> =
            self.entries.iter().map(|(&id, e)| (e.anchor, id)).collect();
        order.sort_by_key(|&(anchor, _)| anchor);

        self.positions.clear();
        for (rank, (anchor, id)) in order.into_iter().enumerate() {
            self.positions.insert(leading + anchor + rank, id);
        }
        sdebug!(
            entries = self.entries.len(),
            leading,
            "CustomRegistry::rebuild"
        );
    }
}
