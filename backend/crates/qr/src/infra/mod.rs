//! Infrastructure Layer
//!
//! Renderer implementations backed by external libraries.

pub mod png;
