// ABOUTME: Grid specification value object.
// ABOUTME: Validates per-column row counts at construction time.

/// Target pane arrangement: one entry per column, giving that column's
/// row count. A constructed value always has at least one column and no
/// zero entries, so consumers never need to re-validate.
///
/// Upper bounds (how many columns or rows are sensible for a terminal)
/// are the caller's concern, not this type's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    columns: Vec<usize>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("grid specification needs at least one column")]
    Empty,

    #[error("column {0} has a row count of zero")]
    ZeroRows(usize),
}

impl GridSpec {
    pub fn new(columns: Vec<usize>) -> Result<Self, SpecError> {
        if columns.is_empty() {
            return Err(SpecError::Empty);
        }
        if let Some(idx) = columns.iter().position(|&rows| rows == 0) {
            return Err(SpecError::ZeroRows(idx));
        }
        Ok(Self { columns })
    }

    /// Per-column row counts, left to right.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of panes in the arrangement.
    pub fn pane_count(&self) -> usize {
        self.columns.iter().sum()
    }

    /// Row count of the tallest column.
    pub fn max_rows(&self) -> usize {
        // Non-empty by construction
        self.columns.iter().copied().max().unwrap_or(1)
    }
}
