use thiserror::Error;

use crate::BarIndex;

/// Errors surfaced by [`VolumeLevels`](crate::VolumeLevels) pull operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The bar source has no bar at an index the engine had to read.
    #[error("bar {index} is not available from the bar source")]
    MissingBar { index: BarIndex },
}
