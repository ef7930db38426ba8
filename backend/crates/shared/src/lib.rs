//! Shared Kernel - Service-crossing minimal core
//!
//! This crate contains the "smallest core" of shared vocabulary:
//! - Common error types and result aliases
//! - The JSON response envelope every endpoint speaks
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all services.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod response;
