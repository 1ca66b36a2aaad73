// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_source::EventTarget;
use eventide_test_utils::{click_at, ClickEvent, FakeElement};
use parking_lot::Mutex;
use std::sync::Arc;

fn recording_listener(seen: &Arc<Mutex<Vec<ClickEvent>>>) -> Arc<dyn Fn(ClickEvent) + Send + Sync> {
    let seen = seen.clone();
    Arc::new(move |event: ClickEvent| seen.lock().push(event))
}

#[test]
fn trigger_reaches_direct_listener_for_any_origin() {
    // Arrange
    let element = FakeElement::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    element.on("click", None, recording_listener(&seen));

    // Act
    element.trigger("click", None, click_at(1, 1));
    element.trigger("click", Some(".item"), click_at(2, 2));

    // Assert
    assert_eq!(*seen.lock(), vec![click_at(1, 1), click_at(2, 2)]);
}

#[test]
fn delegated_listener_only_sees_matching_origin() {
    // Arrange
    let element = FakeElement::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    element.on("click", Some(".item"), recording_listener(&seen));

    // Act
    let untargeted = element.trigger("click", None, click_at(1, 1));
    let other = element.trigger("click", Some(".other"), click_at(2, 2));
    let matching = element.trigger("click", Some(".item"), click_at(3, 3));

    // Assert
    assert_eq!((untargeted, other, matching), (0, 0, 1));
    assert_eq!(*seen.lock(), vec![click_at(3, 3)]);
}

#[test]
fn trigger_ignores_other_event_names() {
    // Arrange
    let element = FakeElement::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    element.on("click", None, recording_listener(&seen));

    // Act
    let ran = element.trigger("mousemove", None, click_at(1, 1));

    // Assert
    assert_eq!(ran, 0);
    assert!(seen.lock().is_empty());
}

#[test]
fn off_detaches_only_that_registration() {
    // Arrange
    let element = FakeElement::new();
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    let registration = element.on("click", None, recording_listener(&first));
    element.on("click", None, recording_listener(&second));

    // Act
    element.off(registration);
    element.trigger("click", None, click_at(5, 5));

    // Assert
    assert_eq!(element.listener_count(), 1);
    assert!(first.lock().is_empty());
    assert_eq!(*second.lock(), vec![click_at(5, 5)]);
}

#[test]
fn listener_may_detach_itself_while_dispatching() {
    // Arrange
    let element = FakeElement::<ClickEvent>::new();
    let slot = Arc::new(Mutex::new(None));
    let target = element.clone();
    let own = slot.clone();
    let registration = element.on(
        "click",
        None,
        Arc::new(move |_: ClickEvent| {
            if let Some(registration) = own.lock().take() {
                target.off(registration);
            }
        }),
    );
    *slot.lock() = Some(registration);

    // Act
    let first = element.trigger("click", None, click_at(0, 0));
    let second = element.trigger("click", None, click_at(0, 0));

    // Assert
    assert_eq!((first, second), (1, 0));
    assert_eq!(element.listener_count(), 0);
}
