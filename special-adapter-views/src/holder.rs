use special_adapter::RowKind;

/// The view type a list view keys its recycling pool on.
///
/// Custom rows carry a key per provider, so holders are only reused for rows of the same
/// provider, including across custom layout reloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewType {
    Refresh,
    Header,
    Footer,
    Empty,
    Custom(usize),
    Item,
}

impl ViewType {
    pub fn kind(&self) -> RowKind {
        match self {
            Self::Refresh => RowKind::Refresh,
            Self::Header => RowKind::Header,
            Self::Footer => RowKind::Footer,
            Self::Empty => RowKind::Empty,
            Self::Custom(_) => RowKind::Custom,
            Self::Item => RowKind::Item,
        }
    }
}

/// A created row view together with its view type and the position it was last bound to.
#[derive(Clone, Debug)]
pub struct Holder<V> {
    view_type: ViewType,
    view: V,
    position: Option<usize>,
}

impl<V> Holder<V> {
    pub(crate) fn new(view_type: ViewType, view: V) -> Self {
        Self {
            view_type,
            view,
            position: None,
        }
    }

    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Virtual position of the last successful bind. `None` until the holder is bound.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub(crate) fn bound_to(&mut self, position: usize) {
        self.position = Some(position);
    }
}
