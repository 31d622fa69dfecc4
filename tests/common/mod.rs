use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use space_tourism_api::routes;
use space_tourism_api::services::catalog_service::Catalog;
use space_tourism_api::state::AppState;

/// In-memory application wired exactly like the production route tree. No
/// network calls happen here: the exoplanet fetch is not spawned, so tests
/// see only the embedded catalog.
pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    pub fn new() -> Self {
        let catalog = Catalog::load().expect("embedded catalog data must parse");
        Self {
            state: web::Data::new(AppState::new(catalog)),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(self.state.clone())
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
    }
}

/// Departure and return dates that pass the strictly-future checks whenever
/// the tests run.
pub fn valid_trip_dates() -> (String, String) {
    let today = chrono::Utc::now().date_naive();
    let departure = today + chrono::Duration::days(30);
    let ret = today + chrono::Duration::days(60);
    (departure.to_string(), ret.to_string())
}
