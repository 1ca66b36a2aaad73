// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the eventide workspace.
//!
//! This crate provides stand-ins for the external event sources, a recorder
//! for a collection's three channels, and small fixture types. It is designed
//! for use in development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `FakeElement<E>`
//!
//! An in-memory [`EventTarget`](eventide_source::EventTarget) with event
//! delegation:
//!
//! ```rust
//! use eventide_source::from_dom_event;
//! use eventide_test_utils::{click_at, ClickEvent, FakeElement, Recorder};
//!
//! let page = FakeElement::<ClickEvent>::new();
//! let buttons = from_dom_event(&page, "click", Some("button"));
//! let recorder = Recorder::attach(&buttons);
//!
//! page.trigger("click", Some("button"), click_at(600, 10));
//! page.trigger("click", Some("div"), click_at(20, 10));
//!
//! assert_eq!(recorder.successes(), vec![click_at(600, 10)]);
//! ```
//!
//! ## `FakePromise<T>`
//!
//! A [`Promise`](eventide_source::Promise) settled by hand:
//!
//! ```rust
//! use eventide_source::from_promise;
//! use eventide_test_utils::{FakePromise, Recorder};
//!
//! let request = FakePromise::new();
//! let response = from_promise(&request);
//! let recorder = Recorder::attach(&response);
//!
//! request.resolve("ok");
//!
//! assert_eq!(recorder.successes(), vec!["ok"]);
//! assert_eq!(recorder.completions(), vec![vec!["ok"]]);
//! ```
//!
//! # Module Organization
//!
//! - `fake_element` - `FakeElement<E>` event target
//! - `fake_promise` - `FakePromise<T>` promise
//! - `recorder` - `Recorder<T>` channel capture
//! - `click` - `ClickEvent` and `Point` fixtures
//! - `test_error` - `TestError` fixture error
//! - `helpers` - Assertion helpers for collection streams

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod click;
pub mod fake_element;
pub mod fake_promise;
pub mod helpers;
pub mod recorder;
pub mod test_error;

// Re-export commonly used test utilities
pub use click::{click_at, ClickEvent, Point};
pub use fake_element::{FakeElement, ListenerId};
pub use fake_promise::FakePromise;
pub use helpers::{assert_no_event, next_event};
pub use recorder::Recorder;
pub use test_error::TestError;
