//! ppm2txt library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod ascii;
pub mod pipeline;
pub mod ppm;
pub mod txt;
