//! Observable value buffers collected during a session.
//!
//! Values are kept as strings. Whether the downstream engine expects numeric
//! values is unresolved, so no conversion happens here.

use crate::collections::{NamedArray, NamedCollection};

/// One observable's value buffer, named after the observable.
pub type ObservableBuffer = NamedArray<String>;

/// The collection of observable buffers for a session.
pub type Observables = NamedCollection<ObservableBuffer>;

/// Allocate one empty buffer of `capacity` slots per observable name.
///
/// Buffers follow the order of `names`; repeated names get separate buffers.
pub fn allocate_observables<I, S>(names: I, capacity: usize) -> Observables
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(|name| ObservableBuffer::new(name, capacity))
        .collect()
}
