//! Tests for the fake cron engine.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use cron_fake::{CronClient, CronEngine, CronError, CronResult, FakeCron, Shutdown};

struct NamedClient(&'static str);

impl CronClient for NamedClient {
    fn name(&self) -> &str {
        self.0
    }
}

#[tokio::test]
async fn test_default_run_waits_for_shutdown() {
    let engine = Arc::new(FakeCron::new());
    let shutdown = Shutdown::new();

    let task = {
        let engine = Arc::clone(&engine);
        let signal = shutdown.signal();
        tokio::spawn(async move { engine.run(signal).await })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!task.is_finished());

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("run should stop after shutdown")
        .unwrap();
    assert_eq!(result, Err(CronError::Cancelled));
}

#[tokio::test]
async fn test_default_client_is_none() {
    let engine = FakeCron::default();
    assert!(engine.client().await.unwrap().is_none());
}

#[tokio::test]
async fn test_with_run_replaces_behavior() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = {
        let calls = Arc::clone(&calls);
        FakeCron::new().with_run(move |_shutdown| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { CronResult::Err(CronError::engine("etcd unreachable")) }
        })
    };
    let shutdown = Shutdown::new();

    let result = engine.run(shutdown.signal()).await;

    assert_eq!(result, Err(CronError::engine("etcd unreachable")));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!shutdown.is_triggered());
}

#[tokio::test]
async fn test_with_run_can_return_cleanly_on_shutdown() {
    let engine = FakeCron::new().with_run(|shutdown| async move {
        shutdown.recv().await;
        CronResult::Ok(())
    });
    let shutdown = Shutdown::new();
    shutdown.trigger();

    assert_eq!(engine.run(shutdown.signal()).await, Ok(()));
}

#[tokio::test]
async fn test_with_client_replaces_behavior() {
    let engine = FakeCron::new().with_client(|| async {
        let client: Arc<dyn CronClient> = Arc::new(NamedClient("partition-0"));
        CronResult::Ok(Some(client))
    });

    let client = engine.client().await.unwrap().expect("client configured");
    assert_eq!(client.name(), "partition-0");
}

#[tokio::test]
async fn test_with_client_can_fail() {
    let engine = FakeCron::new().with_client(|| async {
        let result: CronResult<Option<Arc<dyn CronClient>>> =
            Err(CronError::client_unavailable("not leader"));
        result
    });

    let err = engine.client().await.err().expect("client should fail");
    assert_eq!(err, CronError::client_unavailable("not leader"));
}

#[tokio::test]
async fn test_usable_as_trait_object() {
    let engine: Arc<dyn CronEngine> = Arc::new(FakeCron::new());
    let shutdown = Shutdown::new();
    let signal = shutdown.signal();
    drop(shutdown);

    assert!(engine.run(signal).await.unwrap_err().is_cancelled());
    assert!(engine.client().await.unwrap().is_none());
}
