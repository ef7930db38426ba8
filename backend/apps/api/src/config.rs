//! Server Configuration
//!
//! Every setting is optional; unset variables fall back to defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use anyhow::Context;
use qr::{ErrorCorrection, QrConfig};

/// Port the gateway expects the QR service on
pub const DEFAULT_PORT: u16 = 8000;

/// Process-level configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// `None` allows any origin
    pub cors_origins: Option<Vec<String>>,
    pub qr: QrConfig,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = QrConfig::default();

        let qr = QrConfig {
            box_size: parse_or(&lookup, "QR_BOX_SIZE", defaults.box_size)?,
            border: parse_or(&lookup, "QR_BORDER", defaults.border)?,
            error_correction: parse_or::<_, ErrorCorrection>(
                &lookup,
                "QR_ERROR_CORRECTION",
                defaults.error_correction,
            )?,
            ..defaults
        };
        qr.validate().context("Invalid QR settings")?;

        let cors_origins = lookup("CORS_ORIGINS").map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect()
        });

        Ok(Self {
            host: parse_or(&lookup, "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            cors_origins,
            qr,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key}={raw:?} is invalid: {e}")),
        _ => Ok(default),
    }
}
