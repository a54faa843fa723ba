//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`event`]: Source of "market ready for resolution" events

pub mod event;
