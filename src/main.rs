use actix_cors::Cors;
use actix_web::{middleware::Logger, rt, web, App, HttpServer};
use env_logger::Env;

use space_tourism_api::routes;
use space_tourism_api::services::catalog_service::Catalog;
use space_tourism_api::services::exoplanet_service::ExoplanetService;
use space_tourism_api::state::AppState;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let catalog = Catalog::load().expect("embedded catalog data must parse");
    let state = web::Data::new(AppState::new(catalog));

    // Fire-and-forget: if the archive answers before the user reaches
    // destination selection the catalog grows, otherwise the fallback list is
    // merged instead. The booking flow never waits on this.
    spawn_exoplanet_fetch(state.clone());

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(state.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route(
                        "/destinations",
                        web::get().to(routes::catalog::get_destinations),
                    )
                    .route(
                        "/destinations/{id}",
                        web::get().to(routes::catalog::get_destination_by_id),
                    )
                    .route("/spaceships", web::get().to(routes::catalog::get_spaceships))
                    .route(
                        "/spaceships/{id}",
                        web::get().to(routes::catalog::get_spaceship_by_id),
                    )
                    .service(
                        web::scope("/booking")
                            .route("", web::get().to(routes::booking::get_booking))
                            .route("", web::put().to(routes::booking::update_booking))
                            .route(
                                "/destination/{id}",
                                web::put().to(routes::booking::set_destination),
                            )
                            .route(
                                "/spaceship/{id}",
                                web::put().to(routes::booking::set_spaceship),
                            )
                            .route(
                                "/activities",
                                web::post().to(routes::booking::add_activity),
                            )
                            .route(
                                "/activities/{name}",
                                web::delete().to(routes::booking::remove_activity),
                            )
                            .route(
                                "/validate/{step}",
                                web::get().to(routes::booking::validate_step),
                            )
                            .route("/confirm", web::post().to(routes::booking::confirm_booking))
                            .route("/reset", web::post().to(routes::booking::reset_booking)),
                    )
                    .service(
                        web::scope("/bookings")
                            .route("", web::get().to(routes::booking::get_all_bookings))
                            .route("/{id}", web::get().to(routes::booking::get_booking_by_id))
                            .route(
                                "/{id}/cancel",
                                web::put().to(routes::booking::cancel_booking),
                            ),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}

fn spawn_exoplanet_fetch(state: web::Data<AppState>) {
    rt::spawn(async move {
        let service = match ExoplanetService::new() {
            Ok(service) => service,
            Err(err) => {
                log::error!("Could not build exoplanet HTTP client: {}", err);
                return;
            }
        };

        let fetched = service.fetch_destinations().await;
        let count = fetched.len();
        match state.catalog.write() {
            Ok(mut catalog) => {
                catalog.extend_destinations(fetched);
                log::info!("Catalog extended with {} exoplanet destinations", count);
            }
            Err(err) => log::error!("Catalog lock poisoned, skipping exoplanet merge: {}", err),
        }
    });
}
