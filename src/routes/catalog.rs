use actix_web::{web, HttpResponse, Responder};

use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct DestinationQuery {
    tag: Option<String>,
    search: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct SpaceshipQuery {
    feature: Option<String>,
}

pub async fn get_destinations(
    data: web::Data<AppState>,
    params: web::Query<DestinationQuery>,
) -> impl Responder {
    let Ok(catalog) = data.catalog.read() else {
        log::error!("Catalog lock poisoned");
        return HttpResponse::InternalServerError().body("Failed to read catalog.");
    };

    let destinations = match (&params.tag, &params.search) {
        (Some(tag), _) => catalog.destinations_with_tag(tag),
        (None, Some(term)) if !term.is_empty() => catalog.search_destinations(term),
        _ => catalog.destinations().iter().collect(),
    };

    HttpResponse::Ok().json(destinations)
}

pub async fn get_destination_by_id(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let Ok(catalog) = data.catalog.read() else {
        log::error!("Catalog lock poisoned");
        return HttpResponse::InternalServerError().body("Failed to read catalog.");
    };

    match catalog.destination(&id) {
        Some(destination) => HttpResponse::Ok().json(destination),
        None => HttpResponse::NotFound().body("Destination not found"),
    }
}

pub async fn get_spaceships(
    data: web::Data<AppState>,
    params: web::Query<SpaceshipQuery>,
) -> impl Responder {
    let Ok(catalog) = data.catalog.read() else {
        log::error!("Catalog lock poisoned");
        return HttpResponse::InternalServerError().body("Failed to read catalog.");
    };

    let spaceships = match &params.feature {
        Some(feature) => catalog.spaceships_with_feature(feature),
        None => catalog.spaceships().iter().collect(),
    };

    HttpResponse::Ok().json(spaceships)
}

pub async fn get_spaceship_by_id(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let Ok(catalog) = data.catalog.read() else {
        log::error!("Catalog lock poisoned");
        return HttpResponse::InternalServerError().body("Failed to read catalog.");
    };

    match catalog.spaceship(&id) {
        Some(spaceship) => HttpResponse::Ok().json(spaceship),
        None => HttpResponse::NotFound().body("Spaceship not found"),
    }
}
