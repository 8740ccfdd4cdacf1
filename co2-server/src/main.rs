use std::process::ExitCode;

use tracing::{error, info};

use co2_server::calculator::EmissionCalculator;
use co2_server::catalog::brazil_routes;
use co2_server::config::ServerConfig;
use co2_server::logging::{LoggingConfig, init_logging};
use co2_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging(&LoggingConfig::from_env());

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid server configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let emission_config = match config.load_emission_config() {
        Ok(emission_config) => emission_config,
        Err(e) => {
            error!("invalid emission configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Build the route catalog and calculator
    let catalog = brazil_routes();
    info!(
        routes = catalog.len(),
        cities = catalog.cities().len(),
        "loaded route catalog"
    );
    let calculator = EmissionCalculator::new(emission_config);

    // Build app state and router
    let state = AppState::new(catalog, calculator);
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let addr = config.bind_addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("CO₂ Calculator listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  GET  /about           - About page");
    println!("  GET  /api/cities      - Known cities");
    println!("  GET  /api/modes       - Transport modes and factors");
    println!("  GET  /api/distance    - Route distance lookup");
    println!("  POST /calculate       - Calculate trip emissions");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
