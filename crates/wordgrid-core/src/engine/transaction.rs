use super::error::EngineError;
use crate::core::models::grid::Grid;
use std::sync::Mutex;

/// A grid shared by the placement workers of one pass.
///
/// All reads and writes go through [`SharedGrid::transaction`], which holds an
/// exclusive lease for the duration of one closure. A candidate's validation
/// and its writes must happen inside the same transaction.
pub(crate) struct SharedGrid {
    size: usize,
    inner: Mutex<Grid>,
}

impl SharedGrid {
    pub fn new(grid: Grid) -> Self {
        Self {
            size: grid.size(),
            inner: Mutex::new(grid),
        }
    }

    /// Side length; fixed for the lifetime of the pass, so no lease is needed.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn transaction<F, R>(&self, action: F) -> Result<R, EngineError>
    where
        F: FnOnce(&mut Grid) -> R,
    {
        let mut lease = self.inner.lock().map_err(|_| poisoned())?;
        Ok(action(&mut lease))
    }

    pub fn into_inner(self) -> Result<Grid, EngineError> {
        self.inner.into_inner().map_err(|_| poisoned())
    }
}

fn poisoned() -> EngineError {
    EngineError::Internal("Grid lease was poisoned by a panicked worker".to_string())
}
