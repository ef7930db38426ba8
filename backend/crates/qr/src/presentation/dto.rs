//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Request for POST /qr
#[derive(Debug, Clone, Deserialize)]
pub struct QrRequest {
    /// Text to encode; any UTF-8, including the empty string
    pub data: String,
}

/// `data` payload of a successful POST /qr
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrData {
    /// Standard base64 of the PNG bytes
    pub qr_base64: String,
}

/// Response for GET / and GET /health
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatusResponse {
    pub name: &'static str,
    pub status: &'static str,
}

impl ServiceStatusResponse {
    pub const fn online() -> Self {
        Self {
            name: "qr-service",
            status: "online",
        }
    }
}
