use std::env;

use actix_web::web::{self, Data, FormConfig, JsonConfig, PathConfig, QueryConfig};
use actix_web::{App, HttpServer, ResponseError};
use mongodb::Client;
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::fmt::format::FmtSpan;

mod bookmark;
mod brand;
mod campaign;
mod database;
mod error;
mod ipkit;
mod listing;
mod seed;
mod submission;
mod typedid;
mod user;
mod utils;

use error::Error;

use crate::database::{Database, MongoDatabase};

#[actix_web::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    let uri = env::var("FANFORGE_MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let addr = env::var("FANFORGE_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    info!("connecting to db: {}", uri);
    let db = Client::with_uri_str(&uri).await?.database("fanforge");
    let db = MongoDatabase::new(db);

    seed::seed(&db).await?;

    info!("listening on {}", addr);
    HttpServer::new(move || {
        App::new()
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(FormConfig::default().error_handler(|err, _req| {
                // format form errors with custom format
                Error::InvalidForm(err).into()
            }))
            .app_data(QueryConfig::default().error_handler(|err, _req| {
                // format query errors with custom format
                Error::InvalidQuery(err).into()
            }))
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .wrap(TracingLogger::default())
            .service(campaign::endpoints::create_campaign)
            .service(campaign::endpoints::get_campaigns)
            .service(campaign::endpoints::get_campaign_by_id)
            .service(campaign::endpoints::update_campaign)
            .service(submission::endpoints::create_submission)
            .service(submission::endpoints::get_submissions)
            .service(submission::endpoints::approve_submission)
            .service(submission::endpoints::reject_submission)
            .service(submission::endpoints::reconsider_submission)
            .service(submission::endpoints::withdraw_submission)
            .service(ipkit::endpoints::create_ip_kit)
            .service(ipkit::endpoints::get_ip_kits)
            .service(ipkit::endpoints::get_ip_kit_by_id)
            .service(bookmark::endpoints::get_bookmarks)
            .service(bookmark::endpoints::add_bookmark)
            .service(bookmark::endpoints::remove_bookmark)
            .default_service(web::to(|| async { Error::PathNotFound.error_response() }))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}
