//! # Evidence Core
//!
//! Turns an assessment model into the evidence model table handed to a
//! statistical submodel builder: one row of observable names per competency,
//! in competency order.
//!
//! ## Core Components
//!
//! - **evidence_model**: flattening, row labels, and the assembled evidence model
//! - **error**: errors raised while configuring or rendering evidence models
//!
//! Flattening is pure. Running it twice on an unchanged model yields the same table.

pub mod error;
pub mod evidence_model;

pub use error::*;
pub use evidence_model::*;
