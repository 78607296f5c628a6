//! Iteration cursor states.

/// Position of an iteration over a period.
///
/// `Uninitialized` moves to `Positioned` on reset; `Exhausted` is terminal.
#[derive(Clone, Debug, PartialEq)]
pub enum Cursor<P> {
    /// Not reset since the period was configured.
    Uninitialized,

    /// Sitting on a yielded point.
    Positioned {
        point: P,
        /// Externally reported key, starting at 0 on the first yielded point.
        index: usize,
        /// Position in the raw sequence, the start point being 0.
        ordinal: usize,
    },

    /// No more points.
    Exhausted,
}

impl<P> Cursor<P> {
    /// Get the point under the cursor.
    pub fn point(&self) -> Option<&P> {
        match self {
            Self::Positioned { point, .. } => Some(point),
            _ => None,
        }
    }

    /// Get the reported key of the current point.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Positioned { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Get the raw position of the current point.
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            Self::Positioned { ordinal, .. } => Some(*ordinal),
            _ => None,
        }
    }

    /// Check if the cursor sits on a point.
    pub fn is_positioned(&self) -> bool {
        matches!(self, Self::Positioned { .. })
    }

    /// Check if iteration has ended (terminal).
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
