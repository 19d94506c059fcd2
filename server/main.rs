mod config;
mod error;
mod handlers;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use road_graph::models::RoadNetwork;
use road_graph::seed;
use std::io;
use config::ServerConfig;
use handlers::AppState;

fn load_network(config: &ServerConfig) -> io::Result<RoadNetwork> {
    let Some(path) = &config.seed_file else {
        return Ok(seed::default_network());
    };

    let road_map = seed::load_road_map(path).map_err(|e| {
        log::error!("Could not load seed file: {e}");
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;
    Ok(RoadNetwork::from_snapshot(&road_map))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let network = load_network(&config)?;
    log::info!("Loaded {} road segments", network.segment_count());

    let state = web::Data::new(AppState::new(network, config.route_timeout));
    let static_dir = config.static_dir.clone();

    log::info!("Starting server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure);

        match &static_dir {
            Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
            None => app,
        }
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
