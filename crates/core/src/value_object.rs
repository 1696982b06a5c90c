//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value (see `FilterState::with_field`). Snapshots handed to the
/// filter and aggregate operations are value objects so that concurrent readers
/// never observe a partially updated state.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
