pub mod observer;

pub use observer::{ResourceView, observe, render};
