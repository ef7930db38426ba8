//! Domain Layer - QR encoding and rasterization
//!
//! This layer contains:
//! - Domain value objects (ModuleGrid, RenderOptions, ErrorCorrection)
//! - Domain services (encode / rasterize / PNG serialization)
//! - Renderer trait (interface to the encode-and-render capability)

pub mod renderer;
pub mod services;
pub mod value_objects;
