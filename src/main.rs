use reservas::{logging, Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration, falling back to defaults when no file exists.
    // Environment overrides apply either way.
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging (file + stdout); fall back to console-only
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Failed to initialize file logging: {e}");
        logging::init_console_only(&config.logging.level);
    }

    tracing::info!("Starting reservation service");

    let db = match Database::connect(&config.database.url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database {}: {}", config.database.url, e);
            std::process::exit(1);
        }
    };

    let server = match WebServer::new(&config, db) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to configure web server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
