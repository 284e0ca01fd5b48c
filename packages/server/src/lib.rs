#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the patrol vulnerable-area guide.
//!
//! Serves the REST API for district/location selection and the embedded
//! single-page frontend. The location table is loaded once at startup
//! into an immutable structure and shared by reference; geocoding goes
//! through a process-lifetime cache; the AI briefing is requested fresh
//! on every selection.

mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use patrol_map_ai::providers::{self, LlmProvider};
use patrol_map_geocoder::resolver::CoordinateResolver;
use patrol_map_geocoder::service;
use patrol_map_locations::LocationTable;
use std::path::Path;

/// Default path of the patrol locations CSV, relative to the working
/// directory; override with `PATROL_LOCATIONS_CSV`.
pub const DEFAULT_LOCATIONS_CSV: &str = "data/patrol_locations.csv";

/// Shared application state.
pub struct AppState {
    /// The immutable district → location → record table.
    pub table: LocationTable,
    /// Cache-first coordinate resolver.
    pub resolver: CoordinateResolver,
    /// Text-generation provider for patrol briefings.
    pub provider: Box<dyn LlmProvider>,
}

/// Starts the patrol map server.
///
/// Loads the location table from `PATROL_LOCATIONS_CSV` (default
/// [`DEFAULT_LOCATIONS_CSV`]), configures the text-generation provider
/// from the environment, builds the geocoding resolver with an empty
/// cache, and starts the Actix-Web HTTP server. This is a regular async
/// function; the caller is responsible for providing the async runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if the location table cannot be loaded (missing file or
/// missing required columns), if `OPENAI_API_KEY` is not set, or if the
/// geocoding client cannot be built. All three are fatal startup
/// conditions: the server must not come up without its table and its
/// briefing provider.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let csv_path = std::env::var("PATROL_LOCATIONS_CSV")
        .unwrap_or_else(|_| DEFAULT_LOCATIONS_CSV.to_string());
    log::info!("Loading patrol locations from {csv_path}...");
    let table = LocationTable::from_csv_path(Path::new(&csv_path))
        .expect("Failed to load patrol locations table");

    log::info!("Configuring text-generation provider...");
    let provider = providers::create_provider_from_env()
        .expect("Failed to configure text-generation provider");

    let resolver =
        CoordinateResolver::new(service::nominatim()).expect("Failed to build geocoding client");

    let state = web::Data::new(AppState {
        table,
        resolver,
        provider,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/districts", web::get().to(handlers::districts))
                    .route("/locations", web::get().to(handlers::locations))
                    .route("/selection", web::get().to(handlers::selection)),
            )
            // Serve the embedded single-page frontend
            .route("/", web::get().to(handlers::index))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
