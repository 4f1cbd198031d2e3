#![allow(dead_code)]

pub mod app;
pub mod factory;
pub mod flaky;

pub use app::{test_config, LiveServer, TestApp};
pub use factory::{Factory, TestAuth};
pub use flaky::FlakyBackend;
