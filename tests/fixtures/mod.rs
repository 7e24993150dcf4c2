//! Test fixtures for safepath.
//!
//! Provides real places around Chennai and Kanchipuram, and a builder for
//! ad-hoc hazards.

pub mod tamil_nadu_locations;

pub use tamil_nadu_locations::*;
