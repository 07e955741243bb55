use special_adapter::{Role, RowKind};

/// Which rows fill the whole cross axis of a grid layout.
///
/// Every non-item row is full-span by default; item rows always take a single span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FullSpan {
    pub refresh: bool,
    pub header: bool,
    pub footer: bool,
    pub empty: bool,
    pub custom: bool,
}

impl Default for FullSpan {
    fn default() -> Self {
        Self {
            refresh: true,
            header: true,
            footer: true,
            empty: true,
            custom: true,
        }
    }
}

impl FullSpan {
    pub fn is_full(&self, kind: RowKind) -> bool {
        match kind {
            RowKind::Refresh => self.refresh,
            RowKind::Header => self.header,
            RowKind::Footer => self.footer,
            RowKind::Empty => self.empty,
            RowKind::Custom => self.custom,
            RowKind::Item => false,
        }
    }
}

/// Span size lookup for grid layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanLookup {
    pub span_count: usize,
    pub full_span: FullSpan,
}

impl Default for SpanLookup {
    fn default() -> Self {
        Self {
            span_count: 1,
            full_span: FullSpan::default(),
        }
    }
}

impl SpanLookup {
    pub fn new(span_count: usize) -> Self {
        Self {
            span_count: span_count.max(1),
            ..Self::default()
        }
    }

    /// Spans taken by a row with `role`. Positions without a role take a single span.
    pub fn span_size(&self, role: Option<Role>) -> usize {
        match role {
            Some(role) if self.full_span.is_full(role.kind()) => self.span_count.max(1),
            _ => 1,
        }
    }
}
