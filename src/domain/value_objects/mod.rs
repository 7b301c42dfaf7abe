//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod fingerprint;
mod selection;

pub use fingerprint::{Fingerprint, FingerprintBuilder};
pub use selection::{SelectionEvent, SelectionState};
