use actix_web::{App, HttpServer, middleware::Logger, web};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use jobhub_backend::config::config::Config;
use jobhub_backend::config::routes::routes;
use jobhub_backend::state::AppState;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = web::Data::new(AppState::from_config(&config)?);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes)
    })
    .bind(format!("{}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
