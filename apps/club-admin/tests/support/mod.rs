#![allow(dead_code)]

pub mod app_builder;
pub mod fake_api;

pub use app_builder::create_test_app;
pub use fake_api::{FakeApi, RecordedCall};
