//! Serializable period configuration.
//!
//! A [`PeriodConfig`] captures everything about a period that is plain data:
//! start, end, interval, recurrence limit and exclusion options. It can be
//! stored as JSON or as a compact binary blob and rebuilt later.

use crate::builder::{BuildError, PeriodBuilder};
use crate::core::{Options, Point};
use crate::period::Period;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Plain-data description of a period.
/// Does NOT include custom filters (closures are not serializable).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "P: Serialize, P::Step: Serialize",
    deserialize = "P: Deserialize<'de>, P::Step: Deserialize<'de>"
))]
pub struct PeriodConfig<P: Point> {
    /// Snapshot format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// First point of the raw sequence
    pub start: P,

    /// Optional end boundary
    #[serde(default)]
    pub end: Option<P>,

    /// Step between points
    #[serde(default)]
    pub interval: P::Step,

    /// Recurrence limit
    #[serde(default)]
    pub recurrences: Option<usize>,

    /// Boundary exclusion flags
    #[serde(default)]
    pub options: Options,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl<P: Point> PeriodConfig<P> {
    /// Describe a period starting at `start` with the default step.
    pub fn new(start: P) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            start,
            end: None,
            interval: P::Step::default(),
            recurrences: None,
            options: Options::NONE,
        }
    }

    /// Rebuild the period described by this configuration.
    pub fn build(self) -> Result<Period<P>, BuildError> {
        let mut builder = PeriodBuilder::new()
            .start(self.start)
            .interval(self.interval)
            .options(self.options);
        if let Some(end) = self.end {
            builder = builder.end(end);
        }
        if let Some(limit) = self.recurrences {
            builder = builder.recurrences(limit);
        }
        builder.build()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

impl<P> PeriodConfig<P>
where
    P: Point + Serialize + for<'de> Deserialize<'de>,
    P::Step: Serialize + for<'de> Deserialize<'de>,
{
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, checking the snapshot version.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        config.check_version()
    }

    /// Encode in the compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from the compact binary form, checking the snapshot version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let config: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        config.check_version()
    }
}

impl<P: Point> Period<P> {
    /// Capture the plain-data part of this period.
    ///
    /// Custom filters are dropped; the recurrence filter is kept as
    /// `recurrences`.
    pub fn to_config(&self) -> PeriodConfig<P> {
        let skipped = self.filters().custom_count();
        if skipped > 0 {
            debug!(skipped, "custom filters are not part of a period config");
        }
        PeriodConfig {
            version: SNAPSHOT_VERSION,
            start: self.start().clone(),
            end: self.end().cloned(),
            interval: self.interval().clone(),
            recurrences: self.recurrences(),
            options: self.options(),
        }
    }

    /// Rebuild a period from its JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError>
    where
        P: Serialize + for<'de> Deserialize<'de>,
        P::Step: Serialize + for<'de> Deserialize<'de>,
    {
        Ok(PeriodConfig::<P>::from_json(json)?.build()?)
    }
}
