/// The view-type tag of a row.
///
/// List views use this to decide whether a recycled holder can be reused for a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowKind {
    Refresh,
    Header,
    Footer,
    Empty,
    Custom,
    Item,
}

/// The classification of a virtual position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Refresh,
    Header,
    Footer,
    Empty,
    /// A caller-inserted row.
    Custom {
        /// Registration id of the row (see `SpecialAdapter::custom_provider`).
        ///
        /// Stable while the row stays registered; ids increase in registration order.
        id: usize,
        /// Logical insertion point the row was registered at (clamped to the data length).
        anchor: usize,
    },
    /// A regular data row.
    Item { logical: usize },
}

impl Role {
    pub fn kind(&self) -> RowKind {
        match self {
            Self::Refresh => RowKind::Refresh,
            Self::Header => RowKind::Header,
            Self::Footer => RowKind::Footer,
            Self::Empty => RowKind::Empty,
            Self::Custom { .. } => RowKind::Custom,
            Self::Item { .. } => RowKind::Item,
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item { .. })
    }

    /// Resolved logical position for item rows.
    pub fn logical(&self) -> Option<usize> {
        match self {
            Self::Item { logical } => Some(*logical),
            _ => None,
        }
    }
}

/// A structural change notification, expressed in virtual positions.
///
/// Changes are emitted after the adapter state has been fully updated, in the order a list view
/// must apply them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Change {
    /// Everything may have changed; re-query the whole range.
    Reset,
    Inserted { start: usize, count: usize },
    Removed { start: usize, count: usize },
    Changed { start: usize, count: usize },
    Moved { from: usize, to: usize },
}

impl Change {
    /// Applies this change to a row count, returning the count a list view holds afterwards.
    ///
    /// `Reset` cannot be applied incrementally and returns `None`.
    pub fn apply_to_count(&self, count: usize) -> Option<usize> {
        match *self {
            Self::Reset => None,
            Self::Inserted { count: n, .. } => Some(count.saturating_add(n)),
            Self::Removed { count: n, .. } => Some(count.saturating_sub(n)),
            Self::Changed { .. } | Self::Moved { .. } => Some(count),
        }
    }
}
