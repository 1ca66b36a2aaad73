// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use eventide_source::from_dom_event;
use eventide_test_utils::{click_at, ClickEvent, FakeElement, Recorder};

#[test]
fn every_occurrence_is_accepted_as_success() {
    // Arrange
    let element = FakeElement::<ClickEvent>::new();
    let clicks = from_dom_event(&element, "click", None);
    let recorder = Recorder::attach(&clicks);

    // Act
    element.trigger("click", None, click_at(1, 2));
    element.trigger("click", None, click_at(3, 4));

    // Assert
    assert_eq!(recorder.successes(), vec![click_at(1, 2), click_at(3, 4)]);
    assert!(recorder.errors().is_empty());
    assert!(recorder.completions().is_empty());
}

#[test]
fn selector_restricts_to_delegated_origin() {
    // Arrange
    let list = FakeElement::<ClickEvent>::new();
    let items = from_dom_event(&list, "click", Some("li"));
    let recorder = Recorder::attach(&items);

    // Act
    list.trigger("click", Some("li"), click_at(10, 10));
    list.trigger("click", Some("span"), click_at(20, 20));
    list.trigger("click", None, click_at(30, 30));

    // Assert
    assert_eq!(recorder.successes(), vec![click_at(10, 10)]);
}

#[test]
fn dissolve_detaches_the_listener() {
    // Arrange
    let element = FakeElement::<ClickEvent>::new();
    let clicks = from_dom_event(&element, "click", None);
    let recorder = Recorder::attach(&clicks);
    assert_eq!(element.listener_count(), 1);

    // Act
    clicks.dissolve();
    element.trigger("click", None, click_at(1, 1));

    // Assert
    assert_eq!(element.listener_count(), 0);
    assert!(recorder.is_empty());
}

#[test]
fn dissolve_only_detaches_its_own_registration() {
    // Arrange
    let element = FakeElement::<ClickEvent>::new();
    let first = from_dom_event(&element, "click", None);
    let second = from_dom_event(&element, "click", None);
    let recorder = Recorder::attach(&second);

    // Act
    first.dissolve();
    element.trigger("click", None, click_at(7, 7));

    // Assert
    assert_eq!(element.listener_count(), 1);
    assert_eq!(recorder.successes(), vec![click_at(7, 7)]);
}

#[test]
fn completion_detaches_the_listener() {
    // Arrange
    let element = FakeElement::<ClickEvent>::new();
    let clicks = from_dom_event(&element, "click", None);
    let recorder = Recorder::attach(&clicks);

    // Act
    clicks.accept_event_complete(Vec::new());
    element.trigger("click", None, click_at(1, 1));

    // Assert
    assert_eq!(element.listener_count(), 0);
    assert_eq!(recorder.completions(), vec![Vec::<ClickEvent>::new()]);
    assert!(recorder.successes().is_empty());
}

#[test]
fn completion_from_inside_a_listener_detaches_cleanly() {
    // Arrange
    let element = FakeElement::<ClickEvent>::new();
    let clicks = from_dom_event(&element, "click", None);
    let stop_after_first = clicks.map(
        |click| click.point(),
        None::<eventide_core::NoErrorMap>,
        None::<eventide_core::NoCompleteMap<ClickEvent, eventide_test_utils::Point>>,
    );
    let recorder = Recorder::attach(&stop_after_first);
    let node = clicks.clone();
    stop_after_first.for_each(
        move |_| node.accept_event_complete(Vec::new()),
        None::<eventide_core::NoErrorHandler>,
        None::<eventide_core::NoCompleteHandler<eventide_test_utils::Point>>,
    );

    // Act
    element.trigger("click", None, click_at(600, 1));
    element.trigger("click", None, click_at(700, 1));

    // Assert
    assert_eq!(recorder.successes().len(), 1);
    assert_eq!(element.listener_count(), 0);
}
