use std::sync::Arc;
use std::time::Duration;

use issuance_lease::{
    EndpointResponse, LeaseEndpoint, LeaseStore, RequestContext, SharedWriteHandler,
};
use serde_json::json;
use storage_kv::FsStore;

fn fixture(root: &std::path::Path) -> (SharedWriteHandler, LeaseStore<FsStore>) {
    let store = LeaseStore::new(FsStore::new(root));
    let handler = Arc::new(LeaseEndpoint::new(store.clone())) as SharedWriteHandler;
    (handler, store)
}

#[tokio::test]
async fn write_through_the_handler_is_visible_to_the_read_accessor() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, store) = fixture(dir.path());

    let response = handler
        .handle_write(
            RequestContext::new(),
            json!({ "lease": "1h", "lease_max": "24h" }),
        )
        .await
        .expect("dispatch ok");
    assert_eq!(response, EndpointResponse::empty());

    let config = store.read().expect("read ok").expect("configured");
    assert_eq!(config.lease, Duration::from_secs(3600));
    assert_eq!(config.lease_max, Duration::from_secs(86_400));
}

#[tokio::test]
async fn second_write_replaces_the_first_entirely() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, store) = fixture(dir.path());

    for (lease, lease_max) in [("1h", "24h"), ("15m", "2h")] {
        handler
            .handle_write(
                RequestContext::new(),
                json!({ "lease": lease, "lease_max": lease_max }),
            )
            .await
            .expect("dispatch ok");
    }

    let config = store.read().expect("read ok").expect("configured");
    assert_eq!(config.lease, Duration::from_secs(900));
    assert_eq!(config.lease_max, Duration::from_secs(7200));
}

#[tokio::test]
async fn rejected_write_returns_400_and_mutates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (handler, store) = fixture(dir.path());

    handler
        .handle_write(
            RequestContext::new(),
            json!({ "lease": "1h", "lease_max": "24h" }),
        )
        .await
        .expect("dispatch ok");

    let response = handler
        .handle_write(
            RequestContext::new(),
            json!({ "lease": "", "lease_max": "12h" }),
        )
        .await
        .expect("client faults come back as responses");
    assert_eq!(response.status_code, 400);
    assert_eq!(response.payload["error"], json!("missing lease"));

    let config = store.read().expect("read ok").expect("still configured");
    assert_eq!(config.lease, Duration::from_secs(3600));
    assert_eq!(config.lease_max, Duration::from_secs(86_400));
}

#[tokio::test]
async fn unconfigured_store_reads_as_none_never_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (_, store) = fixture(dir.path());

    let got = store.read().expect("read ok");
    assert!(got.is_none());
}
