use crate::RowKind;

/// Configuration and provider-resolution failures.
///
/// Out-of-range data positions are not errors: those operations return `None`/`false`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("custom item layout needs one position per provider (providers={providers}, positions={positions})")]
    CustomLayoutMismatch { providers: usize, positions: usize },

    #[error("{0:?} row requested but the adapter does not implement that capability")]
    MissingCapability(RowKind),

    #[error("no custom row provider registered with id {id}")]
    ProviderUnavailable { id: usize },

    #[error("no custom row provider is known under view type key {key}")]
    UnknownCustomViewType { key: usize },

    #[error("holder created by custom view type {found} cannot bind a row of custom view type {expected}")]
    CustomViewTypeMismatch { expected: usize, found: usize },

    #[error("holder for {found:?} rows cannot bind a {expected:?} row")]
    RoleMismatch { expected: RowKind, found: RowKind },

    #[error("position {position} is out of range (count={count})")]
    PositionOutOfRange { position: usize, count: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
