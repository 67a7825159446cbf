//! Server configuration from command-line flags and environment.
//!
//! With nothing set, the server reads `accident_lga.geojson` and
//! `accident_severity.json` from the working directory and listens on
//! `127.0.0.1:8050`.

use std::path::PathBuf;

use clap::Parser;

/// Accident map dashboard server.
#[derive(Debug, Clone, Parser)]
#[command(name = "accident_map_server", about = "Accident map dashboard server")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1")]
    pub bind_addr: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8050)]
    pub port: u16,

    /// LGA boundary `GeoJSON` with an `ACCIDENT_NO` property per feature
    #[arg(long, env = "ACCIDENT_LGA_PATH", default_value = "accident_lga.geojson")]
    pub lga_geojson: PathBuf,

    /// Severity table (`.json` or `.csv`) with `LGA_NAME`, `SEVERITY` and `ACCIDENT_NO`
    #[arg(
        long,
        env = "ACCIDENT_SEVERITY_PATH",
        default_value = "accident_severity.json"
    )]
    pub severity_data: PathBuf,

    /// Verbose logging (ignored when `RUST_LOG` is set)
    #[arg(long, env = "ACCIDENT_MAP_DEBUG")]
    pub debug: bool,
}
