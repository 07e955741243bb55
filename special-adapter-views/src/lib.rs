//! View-layer plumbing for [`special_adapter`].
//!
//! The core crate decides what each virtual position is. This crate turns those roles into row
//! views: a list view asks for a [`ViewType`] per position, creates holders through the
//! [`Delegates`] the adapter was built with, binds them, and forwards clicks and grid span
//! queries.
//!
//! It is still UI-agnostic: `V` is whatever the caller's toolkit uses as a row view.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod delegate;
mod holder;
mod list_adapter;
mod listener;
mod provider_keys;
mod span;


pub use delegate::{
    CustomRow, CustomRowProvider, Delegates, FnCustom, FnItem, FnRow, ItemDelegate, RowDelegate,
    custom_row, item_delegate, row_delegate,
};
pub use holder::{Holder, ViewType};
pub use list_adapter::SpecialListAdapter;
pub use listener::{ClickListener, CustomClick, ItemClick};
pub use span::{FullSpan, SpanLookup};

pub use special_adapter;
pub use special_adapter::{Change, Error, Result, Role, RowKind};

/// The core adapter type behind a [`SpecialListAdapter`].
pub type Core<T, V> = special_adapter::SpecialAdapter<T, CustomRow<T, V>>;
