//! Read-only, indexable views over sequences.
//!
//! This crate provides lightweight descriptors that expose a count and
//! positional access over a backing store without copying it, and that
//! compose into new descriptors without materializing intermediate storage:
//!
//! - **Delegate-backed lists**: count and access logic injected as closures,
//!   so any indexable source can be exposed as a list
//! - **Sub-range views**: contiguous windows that flatten nested slicing
//!   onto the original backing, keeping the indirection depth at one
//! - **Composition operations**: clamped and exact skip/take windows,
//!   projections, zips, reversal, and integer ranges
//! - **Live reads**: views over shared mutable collections observe
//!   insertions and removals at read time, not at construction time
//!
//! # Key Types
//!
//! - [`IndexableList`] - the capability trait: `count`, `get`, and an
//!   optional direct traversal fast path
//! - [`ListView`] - a cheaply cloneable shared handle carrying the
//!   composition operations
//! - [`DelegateList`] - an `IndexableList` built from owned closures
//! - [`AsListView`] - conversion from ordinary collections into the view
//!   abstraction, copying only when no indexable backing exists

pub mod adapt;
pub mod delegate;
pub mod iter;
pub mod list;
pub mod ops;
pub mod slice;

pub use adapt::AsListView;
pub use delegate::{BoxIter, DelegateList};
pub use iter::Iter;
pub use list::{IndexableList, ListView};
pub use slice::ListSlice;
