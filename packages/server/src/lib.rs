#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web dashboard server for the accident map.
//!
//! Loads the LGA boundaries and severity table once, renders the
//! choropleth and the dashboard page at startup, and answers bar-chart
//! refreshes from the page's LGA dropdown. All state is read-only after
//! startup and shared across workers.

pub mod config;
mod handlers;
pub mod page;

use accident_map_data::{AccidentData, queries};
use accident_map_figure::create_map;
use accident_map_figure_models::Figure;
use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

pub use config::ServerConfig;

use crate::page::{DEFAULT_LGA, PageContext, compose_page};

/// Shared application state.
pub struct AppState {
    /// Loaded datasets.
    pub data: AccidentData,
    /// Choropleth, rendered once.
    pub map: Figure,
    /// Dashboard HTML, rendered once.
    pub page: web::Bytes,
}

impl AppState {
    /// Renders the map and page for `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the map figure fails to serialize.
    pub fn new(data: AccidentData) -> Result<Self, serde_json::Error> {
        let map = create_map(&data);
        let lga_names = queries::lga_names(&data);
        let page = compose_page(&PageContext {
            lga_names: &lga_names,
            default_lga: DEFAULT_LGA,
            map: &map,
        })?;

        Ok(Self {
            data,
            map,
            page: web::Bytes::from(page),
        })
    }
}

/// Registers the page and API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index)).service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/map", web::get().to(handlers::map))
            .route("/lgas", web::get().to(handlers::lgas))
            .route("/bar-chart", web::get().to(handlers::bar_chart)),
    );
}

/// Initialises `pretty_env_logger`.
///
/// `RUST_LOG` wins when set; otherwise logs at `info`, or `debug` when
/// `debug` is true.
pub fn init_logger(debug: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else if debug {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// Starts the accident map server.
///
/// Loads both datasets, renders the map and page, and runs the Actix-Web
/// HTTP server until it is stopped. The caller provides the async runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if either dataset fails to load, or
/// if the HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    init_logger(config.debug);

    log::info!("Loading accident data...");
    let data = AccidentData::load(&config.lga_geojson, &config.severity_data).map_err(|e| {
        log::error!("Failed to load accident data: {e}");
        std::io::Error::other(e)
    })?;

    log::info!("Rendering map and page...");
    let state = web::Data::new(AppState::new(data).map_err(|e| {
        log::error!("Failed to render dashboard page: {e}");
        std::io::Error::other(e)
    })?);

    let ServerConfig {
        bind_addr, port, ..
    } = config;

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
