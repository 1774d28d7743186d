use std::sync::Arc;

use tokio::sync::Notify;

use super::*;

#[tokio::test]
async fn mounted_scope_passes_output_through() {
    let scope = MountScope::new();
    assert_eq!(scope.run(async { 7 }).await, Some(7));
}

#[tokio::test]
async fn late_result_after_unmount_is_dropped() {
    let scope = MountScope::new();
    let gate = Arc::new(Notify::new());

    let task_scope = scope.clone();
    let task_gate = gate.clone();
    let pending = tokio::spawn(async move {
        task_scope
            .run(async move {
                task_gate.notified().await;
                "late"
            })
            .await
    });

    tokio::task::yield_now().await;
    scope.unmount();
    gate.notify_one();

    assert_eq!(pending.await.unwrap(), None);
}

#[test]
fn clones_share_the_flag() {
    let scope = MountScope::default();
    let other = scope.clone();
    assert!(other.is_mounted());
    scope.unmount();
    assert!(!other.is_mounted());
    scope.unmount();
    assert!(!scope.is_mounted());
}
