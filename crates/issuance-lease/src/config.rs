use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Storage key of the single lease configuration record.
pub const LEASE_CONFIG_KEY: &str = "config/lease";

/// Validity bounds applied to dynamically issued credentials.
///
/// `lease` is the default validity period granted when a request does not ask
/// for one; `lease_max` is the upper bound no issued credential may exceed.
/// The issuance engine enforces the bound; this record only persists it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LeaseConfig {
    pub lease: Duration,
    pub lease_max: Duration,
}
