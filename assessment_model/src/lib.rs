//! # Assessment Model
//!
//! The schema crate - named competencies, their facets, the observables that
//! evidence them, and the fixed-capacity buffers holding observable values.
//! This crate holds data and its invariants only; it performs no inference.

pub mod collections;
pub mod competencies;
pub mod error;
pub mod model_root;
pub mod observables;

pub use collections::*;
pub use competencies::*;
pub use error::*;
pub use model_root::*;
pub use observables::*;
