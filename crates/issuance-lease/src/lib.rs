//! Lease configuration store consulted by the credential issuance engine.
//!
//! Records the default (`lease`) and maximum (`lease_max`) validity durations
//! applied to dynamically issued SSH key material. A single durable record
//! lives at a fixed key in an opaque key-value backend; absence of the record
//! is the first-class "unconfigured" state, distinct from any failure.

pub mod config;
pub mod duration;
pub mod endpoint;
pub mod store;

pub use config::{LeaseConfig, LEASE_CONFIG_KEY};
pub use duration::{format_duration, parse_duration, DurationError};
pub use endpoint::{
    EndpointError, EndpointResponse, FieldSchema, LeaseEndpoint, PathDescriptor, RequestContext,
    SharedWriteHandler, WriteHandler, LEASE_PATH_PATTERN,
};
pub use store::{LeaseStore, ReadError, WriteError};
