use iss_tracker::{api::create_router, TrackerConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrackerConfig::default();
    let observer = config.observer;
    let app = create_router(config);

    let listener = match tokio::net::TcpListener::bind("0.0.0.0:3000").await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind port 3000: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("ISS tracker API listening on http://0.0.0.0:3000, observer {}", observer);
    println!("Endpoints:");
    println!("  GET  /api/distance?from_lat=<lat>&from_lon=<lon>&to_lat=<lat>&to_lon=<lon>");
    println!("  GET  /api/bearing?lat=<lat>&lon=<lon>[&origin_lat=<lat>&origin_lon=<lon>][&rose=8|16]");
    println!("  GET  /api/iss");
    println!("  POST /api/upload (multipart/form-data: csv file)");

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
