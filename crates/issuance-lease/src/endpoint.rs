//! Write-surface registration artifacts and the dispatch handler.
//!
//! The host dispatch layer owns routing; this module supplies what it needs
//! to register the store: a [`PathDescriptor`] (pattern, typed field schema,
//! help text) and the async [`WriteHandler`] implementation. The read
//! accessor is deliberately not routed — the issuance engine calls
//! [`LeaseStore::read`](crate::store::LeaseStore::read) directly.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

use storage_kv::KvStore;

use crate::store::{LeaseStore, WriteError};

/// Route pattern the host registers for the write surface.
pub const LEASE_PATH_PATTERN: &str = "config/lease";

/// Schema of one request field, surfaced to operators by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Registration descriptor: pattern, field schema, and help text.
#[derive(Debug, Clone, Copy)]
pub struct PathDescriptor {
    pub pattern: &'static str,
    pub fields: &'static [FieldSchema],
    pub synopsis: &'static str,
    pub description: &'static str,
}

const LEASE_FIELDS: &[FieldSchema] = &[
    FieldSchema {
        name: "lease",
        required: true,
        description: "Default validity period for issued credentials.",
    },
    FieldSchema {
        name: "lease_max",
        required: true,
        description: "Upper bound on the validity period of issued credentials.",
    },
];

const LEASE_SYNOPSIS: &str =
    "Configure the default validity bounds for dynamically issued credentials.";

const LEASE_DESCRIPTION: &str = "\
Sets the default lease applied to credentials minted by the issuance engine, \
and the maximum lease any request may ask for. Durations use an integer or \
decimal magnitude followed by a unit, e.g. \"90m\" or \"1h30m\"; the largest \
accepted unit is hours.";

/// Correlation context forwarded by the host dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Identifier that lets telemetry sinks correlate handler and dispatch spans.
    pub trace_id: Uuid,
    /// Optional peer identity as reported by the transport layer.
    pub principal: Option<String>,
}

impl RequestContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            trace_id: Uuid::new_v4(),
            principal: None,
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Response emitted by the write handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    /// Status code aligned with transport-level status semantics.
    pub status_code: u16,
    /// Payload returned to the client.
    pub payload: Value,
}

impl EndpointResponse {
    /// Empty success response; the write surface confirms completion only.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            status_code: 204,
            payload: Value::Null,
        }
    }

    /// Structured client-error response carrying a human-readable message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            status_code: 400,
            payload: json!({ "error": message.into() }),
        }
    }
}

/// Internal failures surfaced to the host. Never caller-correctable; client
/// faults are converted to 400 responses before reaching this type.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("lease configuration write failed: {0}")]
    Write(#[source] WriteError),
}

impl EndpointError {
    /// Map the error into an HTTP-like status code for the host.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Write(_) => 500,
        }
    }
}

/// Write-operation contract the host dispatch layer invokes.
#[async_trait]
pub trait WriteHandler: Send + Sync {
    /// Handle one write request against the payload's `lease` and
    /// `lease_max` fields.
    async fn handle_write(
        &self,
        ctx: RequestContext,
        payload: Value,
    ) -> Result<EndpointResponse, EndpointError>;
}

/// Shared pointer helper for hosts.
pub type SharedWriteHandler = Arc<dyn WriteHandler>;

/// Lease configuration endpoint bound to a durable backend.
#[derive(Debug, Clone)]
pub struct LeaseEndpoint<S> {
    store: LeaseStore<S>,
}

impl<S: KvStore> LeaseEndpoint<S> {
    pub const fn new(store: LeaseStore<S>) -> Self {
        Self { store }
    }

    /// Registration descriptor handed to the host dispatch layer.
    #[must_use]
    pub const fn descriptor() -> PathDescriptor {
        PathDescriptor {
            pattern: LEASE_PATH_PATTERN,
            fields: LEASE_FIELDS,
            synopsis: LEASE_SYNOPSIS,
            description: LEASE_DESCRIPTION,
        }
    }
}

#[async_trait]
impl<S: KvStore> WriteHandler for LeaseEndpoint<S> {
    async fn handle_write(
        &self,
        ctx: RequestContext,
        payload: Value,
    ) -> Result<EndpointResponse, EndpointError> {
        let lease = payload.get("lease").and_then(Value::as_str).unwrap_or("");
        let lease_max = payload
            .get("lease_max")
            .and_then(Value::as_str)
            .unwrap_or("");

        match self.store.write(lease, lease_max) {
            Ok(()) => Ok(EndpointResponse::empty()),
            Err(err) if err.is_client_fault() => {
                tracing::debug!(
                    trace_id = %ctx.trace_id,
                    error = %err,
                    "rejected lease configuration write"
                );
                Ok(EndpointResponse::invalid(err.to_string()))
            }
            Err(err) => {
                tracing::warn!(
                    trace_id = %ctx.trace_id,
                    error = %err,
                    "lease configuration write failed"
                );
                Err(EndpointError::Write(err))
            }
        }
    }
}
