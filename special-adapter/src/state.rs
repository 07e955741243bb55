use alloc::vec::Vec;

/// A serializable snapshot of the current virtual layout.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutState {
    /// Total number of virtual rows.
    pub count: usize,
    /// Number of data rows (the data list length, regardless of empty state).
    pub item_count: usize,
    pub refresh: Option<usize>,
    pub header: Option<usize>,
    pub footer: Option<usize>,
    pub empty: Option<usize>,
    pub custom_positions: Vec<usize>,
}
