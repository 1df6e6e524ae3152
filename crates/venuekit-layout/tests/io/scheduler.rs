use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use venuekit_layout::{
    BackgroundImage, BackgroundTransform, CoalescingScheduler, EditorSession, MemoryStore,
    SeatCapacity,
};
use venuekit_settings::EditorSettings;

async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_runs_last_job_once() {
    let mut scheduler = CoalescingScheduler::from_millis(800);
    let runs = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(Mutex::new(None));

    for value in 1..=5 {
        let runs = runs.clone();
        let last = last.clone();
        scheduler
            .schedule(move || async move {
                runs.fetch_add(1, Ordering::SeqCst);
                *last.lock() = Some(value);
            })
            .unwrap();
        settle(100).await;
    }
    assert!(scheduler.is_pending());
    assert_eq!(runs.load(Ordering::SeqCst), 0);

    settle(1000).await;
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(*last.lock(), Some(5));
    assert!(!scheduler.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_cancel() {
    let mut scheduler = CoalescingScheduler::from_millis(800);
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    scheduler
        .schedule(move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    scheduler.cancel();
    settle(2000).await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_background_transform_saves_are_coalesced() {
    let store = Arc::new(MemoryStore::new());
    let mut session =
        EditorSession::new("arena", EditorSettings::default()).with_store(store.clone());
    session
        .set_background(Some(BackgroundImage::new("plan.png")))
        .unwrap();

    for step in 1..=10 {
        let transform = BackgroundTransform {
            translate_x: f64::from(step) * 10.0,
            opacity: 0.5,
            ..Default::default()
        };
        session.set_background_transform(transform).unwrap();
        settle(50).await;
    }
    assert!(session.save_pending());
    assert_eq!(store.save_count(), 0);

    settle(500).await;
    assert_eq!(store.save_count(), 0);

    settle(500).await;
    assert_eq!(store.save_count(), 1);
    assert!(!session.save_pending());

    let saved = store.get("arena").unwrap();
    let background = saved.background.unwrap();
    assert_eq!(background.transform.translate_x, 100.0);
    assert_eq!(background.transform.opacity, 0.5);
}

#[tokio::test(start_paused = true)]
async fn test_debounced_save_skipped_for_invalid_document() {
    let store = Arc::new(MemoryStore::new());
    let mut session =
        EditorSession::new("arena", EditorSettings::default()).with_store(store.clone());
    session.add_section("Unplaced", SeatCapacity::total(10));

    assert!(!session.request_save().unwrap());
    assert!(!session.save_pending());
    settle(2000).await;
    assert_eq!(store.save_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_failed_debounced_save_is_not_retried() {
    let store = Arc::new(MemoryStore::new());
    store.set_rejecting(true);
    let mut session =
        EditorSession::new("arena", EditorSettings::default()).with_store(store.clone());

    assert!(session.request_save().unwrap());
    settle(2000).await;
    store.set_rejecting(false);
    settle(2000).await;

    assert_eq!(store.save_count(), 0);
    assert!(session.document().sections.is_empty());
}

#[tokio::test]
async fn test_request_save_without_store() {
    let mut session = EditorSession::new("arena", EditorSettings::default());
    assert!(!session.request_save().unwrap());
}

#[test]
fn test_background_transform_without_image_fails() {
    let mut session = EditorSession::new("arena", EditorSettings::default());
    assert!(session
        .set_background_transform(BackgroundTransform::default())
        .is_err());
}
