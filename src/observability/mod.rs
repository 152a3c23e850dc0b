//! Observability for the search pipeline.
//!
//! Counters are kept in atomics and every tracked event is also emitted as a
//! structured `tracing` event.

pub mod search_metrics;

pub use search_metrics::{SearchMetrics, Timer};
