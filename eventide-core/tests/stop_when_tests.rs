// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::{Collection, CollectionError, Event};
use eventide_test_utils::Recorder;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[test]
fn first_stop_success_completes_with_empty_payload() {
    // Arrange
    let stop = Collection::<()>::new();
    let values = Collection::<i32>::new().stop_when(&stop);
    let recorder = Recorder::attach(&values);

    // Act
    values.accept_event_success(1);
    stop.accept_event_success(());
    values.accept_event_success(2);

    // Assert
    assert_eq!(
        recorder.events(),
        vec![Event::Success(1), Event::Complete(Vec::new())]
    );
}

#[test]
fn repeated_stop_signals_complete_once() {
    // Arrange
    let stop = Collection::<u8>::new();
    let values = Collection::<i32>::new().stop_when(&stop);
    let recorder = Recorder::attach(&values);
    let teardowns = Arc::new(AtomicUsize::new(0));
    let counter = teardowns.clone();
    values.set_deconstructor(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Act
    stop.accept_event_success(1);
    stop.accept_event_success(2);

    // Assert
    assert_eq!(recorder.completions().len(), 1);
    assert_eq!(teardowns.load(Ordering::SeqCst), 1);
}

#[test]
fn stop_errors_and_completion_do_not_stop() {
    // Arrange
    let stop = Collection::<u8>::new();
    let values = Collection::<i32>::new().stop_when(&stop);

    // Act
    stop.accept_event_error(CollectionError::stream_error("noise"));
    stop.accept_event_complete(Vec::new());

    // Assert
    assert!(!values.is_completed());
}

#[test]
fn stop_signal_does_not_keep_node_alive() {
    // Arrange
    let stop = Collection::<u8>::new();
    let values = Collection::<i32>::new();
    let _ = values.stop_when(&stop);
    let recorder = Recorder::attach(&values);

    // Act
    drop(values);
    stop.accept_event_success(1);

    // Assert
    assert!(recorder.is_empty());
}

#[tokio::test(start_paused = true)]
async fn stop_wins_over_pending_debounce() -> anyhow::Result<()> {
    // Arrange
    let stop = Collection::<()>::new();
    let values = Collection::<i32>::new()
        .debounce(Duration::from_millis(100))
        .stop_when(&stop);
    let recorder = Recorder::attach(&values);
    values.accept_event_success(1);

    // Act
    stop.accept_event_success(());
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert_eq!(recorder.events(), vec![Event::Complete(Vec::new())]);

    Ok(())
}
