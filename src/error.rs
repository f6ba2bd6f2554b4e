use thiserror::Error;

use crate::ids::{BlockId, PortId};

/// Bookkeeping inconsistencies in the graph. Everything else the editor does is
/// total: misses, incompatible drops and out-of-range carets are not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("can't find block {0}")]
    BlockNotFound(BlockId),
    #[error("can't find port {0}")]
    PortNotFound(PortId),
}
