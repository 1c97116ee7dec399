//! Cause library
//!
//! Static reference data: for each of the ten candidate root causes, a display
//! title, a short description, optional per-package score multipliers and the
//! confirmation tests that prove or rule it out. The identifier space is closed,
//! so lookups cannot fail.

mod catalog;
mod cause;

pub use catalog::{CauseDescriptor, TestCard};
pub use cause::CauseId;

use catalog::CAUSES;

/// Read-only accessor over the static cause catalog.
pub struct CauseLibrary;

impl CauseLibrary {
    /// Descriptor for the given cause.
    pub fn get(id: CauseId) -> &'static CauseDescriptor {
        &CAUSES[id.index()]
    }

    /// All descriptors in library order.
    pub fn iter() -> impl Iterator<Item = &'static CauseDescriptor> {
        CAUSES.iter()
    }

    /// Number of causes in the library.
    pub fn len() -> usize {
        CAUSES.len()
    }
}
