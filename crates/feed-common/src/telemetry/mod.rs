//! Telemetry and tracing setup

mod recorder;
mod tracing_setup;

pub use recorder::{EventRecorder, MemoryRecorder, TracingRecorder, EVENT_TARGET};
pub use tracing_setup::{
    init_tracing_with_config, try_init_tracing_with_config, TracingConfig, TracingError,
};
