#![doc = include_str!("../README.md")]

mod observer;
mod tracking;

pub use observer::{MissObserver, TracingObserver};
pub use tracking::TrackingBundle;
