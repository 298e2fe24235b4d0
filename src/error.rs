use std::alloc::{Layout, handle_alloc_error};

use thiserror::Error;

/// Error returned by the fallible operations when backing storage for a
/// chunk cannot be acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReserveError {
    /// The element layout for a chunk of the requested capacity would
    /// exceed `isize::MAX` bytes.
    #[error("capacity overflow computing the layout of a {0}-element chunk")]
    CapacityOverflow(usize),
    /// The allocator refused to provide storage for a chunk.
    #[error("allocator failed to provide storage for layout {0:?}")]
    OutOfMemory(Layout),
}

/// Escalates a [`ReserveError`] for the panicking API wrappers.
pub(crate) fn raise(err: ReserveError) -> ! {
    match err {
        ReserveError::CapacityOverflow(_) => panic!("{err}"),
        ReserveError::OutOfMemory(layout) => handle_alloc_error(layout),
    }
}
