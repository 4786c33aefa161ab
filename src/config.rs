// ==============================================================================
// config.rs - Gateway Configuration
// ==============================================================================
// Description: Environment-driven server configuration with defaults
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-03-02
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};

const DEFAULT_SERVER_PORT: u16 = 8099;

/// Transport-level request body cap. Sits above the 5 MiB validation limit
/// plus multipart framing so a just-oversized file still reaches the
/// orchestrator and receives the documented verdict, while grossly
/// oversized bodies are cut off before buffering.
pub const TRANSPORT_BODY_LIMIT: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub body_limit: usize,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let server_port = match std::env::var("SERVER_PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid SERVER_PORT value: {}", value))?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            server_port,
            body_limit: TRANSPORT_BODY_LIMIT,
        })
    }
}
