//! Code model input for extraction
//!
//! This module provides the symbol graph a source provider hands to the
//! extractor, and the lookup seam used to follow type references.

pub mod model;
pub mod provider;

pub use model::*;
pub use provider::*;
