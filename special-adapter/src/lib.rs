//! A position-transform engine for list adapters with optional rows.
//!
//! For holder creation, binding and click dispatch, see the `special-adapter-views` crate.
//!
//! A virtualized list view addresses rows by a single flat index. This crate multiplexes several
//! logically distinct rows onto that index space:
//! - a refresh row and a header row before the data,
//! - data rows interleaved with caller-inserted custom rows,
//! - a footer row after the data,
//! - an empty row that replaces everything while the data list is empty.
//!
//! It is UI-agnostic. The adapter owns the data list and reports every mutation as a sequence of
//! [`Change`]s in virtual positions, after its state is fully updated, so a list view can apply
//! them and re-query [`SpecialAdapter::virtual_count`] and [`SpecialAdapter::role_at`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod capability;
mod changes;
mod error;
mod options;
mod registry;
mod state;
mod transform;
mod types;

#[cfg(test)]
mod tests;

pub use adapter::SpecialAdapter;
pub use capability::Capabilities;
pub use error::{Error, Result};
pub use options::{OnChangeCallback, SpecialAdapterOptions};
pub use state::LayoutState;
pub use types::{Change, Role, RowKind};
