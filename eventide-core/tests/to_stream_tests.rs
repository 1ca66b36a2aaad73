// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_core::{Collection, CollectionError, Event};
use eventide_test_utils::{assert_no_event, next_event};
use futures::StreamExt;
use std::time::Duration;

#[tokio::test]
async fn stream_yields_every_channel_in_order() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::<i32>::new();
    let mut stream = collection.to_stream();

    // Act
    collection.accept_event_success(1);
    collection.accept_event_error(CollectionError::stream_error("boom"));
    collection.accept_event_success(2);
    collection.accept_event_complete(vec![3]);

    // Assert
    assert_eq!(stream.next().await, Some(Event::Success(1)));
    assert!(matches!(stream.next().await, Some(Event::Error(_))));
    assert_eq!(stream.next().await, Some(Event::Success(2)));
    assert_eq!(stream.next().await, Some(Event::Complete(vec![3])));
    assert_eq!(stream.next().await, None);

    Ok(())
}

#[tokio::test]
async fn stream_on_completed_collection_is_ended() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::<i32>::new();
    collection.accept_event_complete(Vec::new());

    // Act
    let mut stream = collection.to_stream();

    // Assert
    assert_eq!(stream.next().await, None);

    Ok(())
}

#[tokio::test]
async fn stream_only_sees_events_after_creation() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::<i32>::new();
    collection.accept_event_success(1);

    // Act
    let mut stream = collection.to_stream();
    collection.accept_event_success(2);

    // Assert
    assert_eq!(next_event(&mut stream, 100).await, Some(Event::Success(2)));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn stream_observes_debounced_delivery() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::<i32>::new().debounce(Duration::from_millis(100));
    let mut stream = collection.to_stream();

    // Act
    collection.accept_event_success(1);
    collection.accept_event_success(2);

    // Assert
    assert_no_event(&mut stream, 50).await;
    assert_eq!(next_event(&mut stream, 100).await, Some(Event::Success(2)));

    Ok(())
}

#[tokio::test]
async fn dropped_stream_does_not_disturb_the_collection() -> anyhow::Result<()> {
    // Arrange
    let collection = Collection::<i32>::new();
    let stream = collection.to_stream();
    let mut survivor = collection.to_stream();

    // Act
    drop(stream);
    collection.accept_event_success(1);

    // Assert
    assert_eq!(survivor.next().await, Some(Event::Success(1)));

    Ok(())
}
