use crate::RowKind;

/// The set of optional rows an adapter opts into.
///
/// Fixed for the adapter's lifetime: it is passed once at construction and there is no setter.
/// Custom rows are not part of the set because their providers are registered at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    pub refresh: bool,
    pub header: bool,
    pub footer: bool,
    pub empty: bool,
}

impl Capabilities {
    /// No optional rows: only data rows and custom rows are rendered.
    pub const fn none() -> Self {
        Self {
            refresh: false,
            header: false,
            footer: false,
            empty: false,
        }
    }

    pub const fn with_refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    pub const fn with_header(mut self) -> Self {
        self.header = true;
        self
    }

    pub const fn with_footer(mut self) -> Self {
        self.footer = true;
        self
    }

    pub const fn with_empty(mut self) -> Self {
        self.empty = true;
        self
    }

    /// Whether a row of `kind` can be produced by an adapter with this capability set.
    pub fn supports(&self, kind: RowKind) -> bool {
        match kind {
            RowKind::Refresh => self.refresh,
            RowKind::Header => self.header,
            RowKind::Footer => self.footer,
            RowKind::Empty => self.empty,
            RowKind::Custom | RowKind::Item => true,
        }
    }

    /// Number of rows rendered before the first data/custom row.
    pub fn leading_rows(&self) -> usize {
        usize::from(self.refresh) + usize::from(self.header)
    }

    pub fn trailing_rows(&self) -> usize {
        usize::from(self.footer)
    }
}
