use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;
use core::marker::PhantomData;

use special_adapter::{Capabilities, RowKind};

/// Creates and binds the content view of a row that has no data of its own (refresh, header,
/// footer, empty).
pub trait RowDelegate<V> {
    fn create(&self) -> V;
    fn bind(&self, view: &mut V);
}

/// Creates and binds regular data rows.
pub trait ItemDelegate<T, V> {
    fn create(&self) -> V;
    fn bind(&self, view: &mut V, item: &T, logical: usize);
}

/// A caller-inserted row.
///
/// `bind` receives the data item at the row's anchor (if the anchor is not past the end) and
/// the anchor itself.
pub trait CustomRowProvider<T, V> {
    fn create(&self) -> V;
    fn bind(&self, view: &mut V, item: Option<&T>, anchor: usize);
}

/// Shared handle to a custom row provider, as stored in the adapter's registry.
pub type CustomRow<T, V> = Arc<dyn CustomRowProvider<T, V>>;

/// A [`RowDelegate`] built from two closures.
pub struct FnRow<V, C, B> {
    create: C,
    bind: B,
    _view: PhantomData<fn() -> V>,
}

impl<V, C, B> RowDelegate<V> for FnRow<V, C, B>
where
    C: Fn() -> V,
    B: Fn(&mut V),
{
    fn create(&self) -> V {
        (self.create)()
    }

    fn bind(&self, view: &mut V) {
        (self.bind)(view);
    }
}

pub fn row_delegate<V, C, B>(create: C, bind: B) -> FnRow<V, C, B>
where
    C: Fn() -> V,
    B: Fn(&mut V),
{
    FnRow {
        create,
        bind,
        _view: PhantomData,
    }
}

/// An [`ItemDelegate`] built from two closures.
pub struct FnItem<T, V, C, B> {
    create: C,
    bind: B,
    _types: PhantomData<fn(&T) -> V>,
}

impl<T, V, C, B> ItemDelegate<T, V> for FnItem<T, V, C, B>
where
    C: Fn() -> V,
    B: Fn(&mut V, &T, usize),
{
    fn create(&self) -> V {
        (self.create)()
    }

    fn bind(&self, view: &mut V, item: &T, logical: usize) {
        (self.bind)(view, item, logical);
    }
}

pub fn item_delegate<T, V, C, B>(create: C, bind: B) -> FnItem<T, V, C, B>
where
    C: Fn() -> V,
    B: Fn(&mut V, &T, usize),
{
    FnItem {
        create,
        bind,
        _types: PhantomData,
    }
}

/// A [`CustomRowProvider`] built from two closures.
pub struct FnCustom<T, V, C, B> {
    create: C,
    bind: B,
    _types: PhantomData<fn(&T) -> V>,
}

impl<T, V, C, B> CustomRowProvider<T, V> for FnCustom<T, V, C, B>
where
    C: Fn() -> V,
    B: Fn(&mut V, Option<&T>, usize),
{
    fn create(&self) -> V {
        (self.create)()
    }

    fn bind(&self, view: &mut V, item: Option<&T>, anchor: usize) {
        (self.bind)(view, item, anchor);
    }
}

/// Builds a shareable custom row provider from two closures.
pub fn custom_row<T, V, C, B>(create: C, bind: B) -> CustomRow<T, V>
where
    T: 'static,
    V: 'static,
    C: Fn() -> V + 'static,
    B: Fn(&mut V, Option<&T>, usize) + 'static,
{
    Arc::new(FnCustom {
        create,
        bind,
        _types: PhantomData,
    })
}

/// The statically-typed capability descriptor of an adapter.
///
/// The item delegate is mandatory; every optional delegate that is present adds the matching
/// row to the adapter. The capability set is derived once, when the adapter is built.
pub struct Delegates<T, V> {
    item: Box<dyn ItemDelegate<T, V>>,
    refresh: Option<Box<dyn RowDelegate<V>>>,
    header: Option<Box<dyn RowDelegate<V>>>,
    footer: Option<Box<dyn RowDelegate<V>>>,
    empty: Option<Box<dyn RowDelegate<V>>>,
}

impl<T, V> Delegates<T, V> {
    pub fn new(item: impl ItemDelegate<T, V> + 'static) -> Self {
        Self {
            item: Box::new(item),
            refresh: None,
            header: None,
            footer: None,
            empty: None,
        }
    }

    pub fn with_refresh(mut self, delegate: impl RowDelegate<V> + 'static) -> Self {
        self.refresh = Some(Box::new(delegate));
        self
    }

    pub fn with_header(mut self, delegate: impl RowDelegate<V> + 'static) -> Self {
        self.header = Some(Box::new(delegate));
        self
    }

    pub fn with_footer(mut self, delegate: impl RowDelegate<V> + 'static) -> Self {
        self.footer = Some(Box::new(delegate));
        self
    }

    pub fn with_empty(mut self, delegate: impl RowDelegate<V> + 'static) -> Self {
        self.empty = Some(Box::new(delegate));
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            refresh: self.refresh.is_some(),
            header: self.header.is_some(),
            footer: self.footer.is_some(),
            empty: self.empty.is_some(),
        }
    }

    pub fn item(&self) -> &dyn ItemDelegate<T, V> {
        self.item.as_ref()
    }

    /// Delegate for a data-less row kind. `None` for custom and item rows, and for kinds the
    /// adapter does not implement.
    pub fn row(&self, kind: RowKind) -> Option<&dyn RowDelegate<V>> {
        let delegate = match kind {
            RowKind::Refresh => &self.refresh,
            RowKind::Header => &self.header,
            RowKind::Footer => &self.footer,
            RowKind::Empty => &self.empty,
            RowKind::Custom | RowKind::Item => return None,
        };
        delegate.as_deref()
    }
}

impl<T, V> fmt::Debug for Delegates<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegates")
            .field("capabilities", &self.capabilities())
            .finish_non_exhaustive()
    }
}
