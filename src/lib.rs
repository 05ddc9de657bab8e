//! Load-state pipeline: turns asynchronous data streams into observable
//! `Resource` values, retrying once on an expired session and classifying
//! failures into a small UI-facing taxonomy.

pub mod app;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod platform;
pub mod presentation;
pub mod prelude;
pub mod sink;
pub mod streaming;
