//! Intermediate Representation (IR) for extracted types
//!
//! This module provides the descriptors produced by extraction and consumed
//! by the declaration writers.

pub mod descriptor;
pub mod types;

pub use descriptor::*;
pub use types::*;
