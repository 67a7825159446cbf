#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web dashboard server for the accident map.

use accident_map_server::ServerConfig;
use clap::Parser as _;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    accident_map_server::run_server(ServerConfig::parse()).await
}
