//! Common error and result definitions, relied upon by all seqview-* crates.

pub mod error;
pub mod result;

pub use result::Result;
