//! Free-space search over the workspace grid.
//!
//! The lock mask is a fixed-dimension matrix supplied by configuration where a
//! nonzero cell means the slot is protected and must remain empty for staging.

use crate::config::Profile;
use crate::item::GridPosition;

/// Boolean-valued lock matrix over the workspace grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockMask {
    rows: Vec<Vec<u8>>,
}

impl LockMask {
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    /// Mask with every slot free, at the configured grid dimensions.
    pub fn unlocked() -> Self {
        Self {
            rows: vec![vec![0; Profile::GRID_COLS]; Profile::GRID_ROWS],
        }
    }

    /// Whether the cell at `position` is inside the protected region.
    ///
    /// Positions outside the mask are treated as protected: a slot the mask
    /// cannot vouch for is never handed to the mover.
    pub fn is_protected(&self, position: GridPosition) -> bool {
        match self
            .rows
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
        {
            Some(cell) => *cell != 0,
            None => true,
        }
    }

    /// Whether a contiguous block of `required_cols` free columns exists in at
    /// least one full row.
    ///
    /// Sliding-window scan over every horizontal starting offset; returns on
    /// the first hit. A mask with fewer rows than the configured row count is
    /// treated as "grid not ready" and reports no space at all.
    pub fn has_free_block(&self, required_cols: usize) -> bool {
        if self.rows.len() < Profile::GRID_ROWS {
            return false;
        }

        for start_col in 0..=(Profile::GRID_COLS.saturating_sub(required_cols)) {
            for row in self.rows.iter().take(Profile::GRID_ROWS) {
                let free = (start_col..start_col + required_cols)
                    .all(|col| matches!(row.get(col), Some(0)));
                if free {
                    return true;
                }
            }
        }

        false
    }
}
