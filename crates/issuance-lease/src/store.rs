//! Writer and reader operations over the single durable lease record.

use storage_kv::{KvStore, StoreError};
use thiserror::Error;

use crate::config::{LeaseConfig, LEASE_CONFIG_KEY};
use crate::duration::{parse_duration, DurationError};

/// Failures of the write operation.
///
/// The first four variants are client faults: caller-correctable, reported
/// without mutating stored state. The rest are internal failures.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("missing lease")]
    MissingLease,
    #[error("missing lease_max")]
    MissingLeaseMax,
    #[error("invalid 'lease': {0}")]
    InvalidLease(DurationError),
    #[error("invalid 'lease_max': {0}")]
    InvalidLeaseMax(DurationError),
    #[error("could not encode lease configuration: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("could not persist lease configuration: {0}")]
    Storage(#[from] StoreError),
}

impl WriteError {
    /// Whether the caller can correct this failure by fixing its input.
    #[must_use]
    pub const fn is_client_fault(&self) -> bool {
        matches!(
            self,
            Self::MissingLease
                | Self::MissingLeaseMax
                | Self::InvalidLease(_)
                | Self::InvalidLeaseMax(_)
        )
    }
}

/// Failures of the read operation. An absent record is not one of them.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("could not read lease configuration: {0}")]
    Storage(#[from] StoreError),
    #[error("could not decode lease configuration: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Lease configuration store bound to a durable backend.
///
/// Stateless between calls; all state lives in the backend under
/// [`LEASE_CONFIG_KEY`]. Cloning shares the backend.
#[derive(Debug, Clone)]
pub struct LeaseStore<S> {
    backend: S,
}

impl<S: KvStore> LeaseStore<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Validate the raw `lease` and `lease_max` inputs and persist the
    /// resulting record, fully replacing any prior one.
    ///
    /// Validation short-circuits on the first failure, in a fixed order:
    /// presence of `lease`, presence of `lease_max`, parse of `lease`, parse
    /// of `lease_max`. Nothing is written unless both values are accepted.
    pub fn write(&self, lease: &str, lease_max: &str) -> Result<(), WriteError> {
        if lease.is_empty() {
            return Err(WriteError::MissingLease);
        }
        if lease_max.is_empty() {
            return Err(WriteError::MissingLeaseMax);
        }
        let lease = parse_duration(lease).map_err(WriteError::InvalidLease)?;
        let lease_max = parse_duration(lease_max).map_err(WriteError::InvalidLeaseMax)?;

        let record = LeaseConfig { lease, lease_max };
        let bytes = serde_json::to_vec(&record).map_err(WriteError::Encode)?;
        self.backend.put(LEASE_CONFIG_KEY, &bytes)?;

        tracing::debug!(
            lease = ?record.lease,
            lease_max = ?record.lease_max,
            "lease configuration replaced"
        );
        Ok(())
    }

    /// Retrieve the configured bounds.
    ///
    /// `Ok(None)` means no record has ever been written; callers apply their
    /// own defaults. A record that exists but fails to decode is an error.
    pub fn read(&self) -> Result<Option<LeaseConfig>, ReadError> {
        let Some(bytes) = self.backend.get(LEASE_CONFIG_KEY)? else {
            return Ok(None);
        };
        let record = serde_json::from_slice(&bytes).map_err(ReadError::Decode)?;
        Ok(Some(record))
    }
}
