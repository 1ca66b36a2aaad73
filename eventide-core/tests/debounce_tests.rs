// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::{Collection, CollectionError, RateLimit};
use eventide_test_utils::Recorder;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn debounce_delivers_only_the_last_value_of_a_burst() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::new().debounce(Duration::from_millis(100));
    let recorder = Recorder::attach(&collection);

    // Act
    collection.accept_event_success(1);
    sleep(Duration::from_millis(50)).await;
    collection.accept_event_success(2);
    sleep(Duration::from_millis(50)).await;
    collection.accept_event_success(3);

    // Assert
    sleep(Duration::from_millis(99)).await;
    assert!(recorder.is_empty());
    sleep(Duration::from_millis(2)).await;
    assert_eq!(recorder.successes(), vec![3]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn debounce_delivers_each_quiet_burst() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::new().debounce(Duration::from_millis(100));
    let recorder = Recorder::attach(&collection);

    // Act
    collection.accept_event_success("a");
    sleep(Duration::from_millis(150)).await;
    collection.accept_event_success("b");
    sleep(Duration::from_millis(150)).await;

    // Assert
    assert_eq!(recorder.successes(), vec!["a", "b"]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn debounce_gates_entry_into_throttle() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::with_rate_limit(RateLimit {
        throttle: Some(Duration::from_millis(200)),
        debounce: Some(Duration::from_millis(50)),
    });
    let recorder = Recorder::attach(&collection);

    // Act
    collection.accept_event_success(1);
    sleep(Duration::from_millis(60)).await;
    collection.accept_event_success(2);
    sleep(Duration::from_millis(240)).await;
    collection.accept_event_success(3);
    sleep(Duration::from_millis(60)).await;

    // Assert
    assert_eq!(recorder.successes(), vec![1, 3]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn errors_bypass_debounce() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::<i32>::new().debounce(Duration::from_millis(100));
    let recorder = Recorder::attach(&collection);

    // Act
    collection.accept_event_error(CollectionError::stream_error("now"));

    // Assert
    assert_eq!(recorder.errors().len(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn disabling_debounce_drops_the_pending_value() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::new().debounce(Duration::from_millis(100));
    let recorder = Recorder::attach(&collection);
    collection.accept_event_success(1);

    // Act
    collection.debounce(Duration::ZERO);
    sleep(Duration::from_millis(200)).await;
    collection.accept_event_success(2);

    // Assert
    assert_eq!(recorder.successes(), vec![2]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn completion_cancels_pending_debounce() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::new().debounce(Duration::from_millis(100));
    let recorder = Recorder::attach(&collection);
    collection.accept_event_success(1);

    // Act
    collection.accept_event_complete(Vec::new());
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert!(recorder.successes().is_empty());
    assert_eq!(recorder.completions().len(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn dropped_collection_cancels_pending_debounce() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::new().debounce(Duration::from_millis(100));
    let recorder = Recorder::attach(&collection);
    collection.accept_event_success(1);

    // Act
    drop(collection);
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert!(recorder.is_empty());

    Ok(())
}

#[test]
fn debounce_without_runtime_delivers_immediately() {
    // Arrange
    let collection = Collection::new().debounce(Duration::from_millis(100));
    let recorder = Recorder::attach(&collection);

    // Act
    collection.accept_event_success(1);

    // Assert
    assert_eq!(recorder.successes(), vec![1]);
}

#[test]
fn rate_limit_normalizes_zero_intervals() {
    // Arrange
    let policy = RateLimit {
        throttle: Some(Duration::ZERO),
        debounce: Some(Duration::from_millis(50)),
    };

    // Act
    let collection = Collection::<i32>::with_rate_limit(policy);

    // Assert
    assert_eq!(
        collection.rate_limit(),
        RateLimit::debounced(Duration::from_millis(50))
    );
}
