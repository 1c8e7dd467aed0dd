use std::error::Error;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use bmiadvisor_api::{model_loader, routes, settings::Settings, state::AppState};
use bmiadvisor_db::{calculation::CalculationRepositoryImpl, connection::Connection};
use log::{error, info, warn};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env()?;
    log4rs::init_file(&settings.log_config, Default::default())?;

    let mut state = AppState::new();

    if let Some(path) = &settings.model_path {
        info!("Loading diet model");
        match model_loader::load_forest(path) {
            Ok(forest) => state = state.with_model(Box::new(forest)),
            Err(e) => error!("Failed to load diet model, continuing without it: {}", e),
        }
    }

    match &settings.database_url {
        Some(database_url) => {
            info!("Connecting to database");
            match Connection::establish(database_url).await {
                Ok(conn) => {
                    let repository = CalculationRepositoryImpl::new(conn);
                    state = state.with_repository(Box::new(repository));
                }
                Err(e) => warn!(
                    "Failed to connect to database, calculations will not be stored. {}",
                    e
                ),
            }
        }
        None => info!("DATABASE_URL not set, calculations will not be stored"),
    }

    let state = web::Data::new(state);

    info!("Listening on {}:{}", settings.host, settings.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(bmiadvisor_api::error::handlers())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}
