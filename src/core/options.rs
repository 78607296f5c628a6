//! Boundary exclusion options.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Bit set of boundary exclusion flags.
///
/// The two flags are independent. `Options::default()` has neither set, so
/// both the start and an explicit end are included.
///
/// # Example
///
/// ```rust
/// use recur::core::Options;
///
/// let options = Options::EXCLUDE_START | Options::EXCLUDE_END;
/// assert!(options.contains(Options::EXCLUDE_START));
/// assert_eq!(options.bits(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(u8);

impl Options {
    /// No boundary is excluded.
    pub const NONE: Self = Self(0);

    /// The start point is not yielded.
    pub const EXCLUDE_START: Self = Self(1);

    /// A point equal to the end is not yielded.
    pub const EXCLUDE_END: Self = Self(2);

    const ALL: u8 = Self::EXCLUDE_START.0 | Self::EXCLUDE_END.0;

    /// Build options from raw bits, dropping unknown ones.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL)
    }

    /// Get the raw flag bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if every flag of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set or clear `flag` depending on `enabled`.
    pub fn set(&mut self, flag: Self, enabled: bool) {
        if enabled {
            self.0 |= flag.0;
        } else {
            self.0 &= !flag.0;
        }
    }
}

impl BitOr for Options {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Options {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
