//! Core collaborator types.
//!
//! This module contains the values a period is configured with:
//! - `Point` and `Step`, the seam to calendar arithmetic
//! - `Interval`, the chrono calendar step
//! - `Options`, the boundary exclusion flags
//!
//! Nothing in here knows about filters or cursors.

mod interval;
mod options;
mod point;

pub use interval::Interval;
pub use options::Options;
pub use point::{Point, Step};
