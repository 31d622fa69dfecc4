use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;

use crate::models::booking::DraftUpdate;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct ActivityInput {
    pub name: String,
}

/// The live draft plus its derived packing list.
pub async fn get_booking(data: web::Data<AppState>) -> impl Responder {
    let Ok(session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    HttpResponse::Ok().json(serde_json::json!({
        "draft": session.draft(),
        "packing_list": session.packing_list(),
    }))
}

pub async fn update_booking(
    data: web::Data<AppState>,
    input: web::Json<DraftUpdate>,
) -> impl Responder {
    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    session.update_details(input.into_inner());
    HttpResponse::Ok().json(session.draft())
}

pub async fn set_destination(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    let destination = {
        let Ok(catalog) = data.catalog.read() else {
            log::error!("Catalog lock poisoned");
            return HttpResponse::InternalServerError().body("Failed to read catalog.");
        };
        catalog.destination(&id).cloned()
    };

    let Some(destination) = destination else {
        return HttpResponse::NotFound().body("Destination not found");
    };

    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    session.set_destination(destination);
    HttpResponse::Ok().json(serde_json::json!({
        "draft": session.draft(),
        "packing_list": session.packing_list(),
    }))
}

pub async fn set_spaceship(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    let spaceship = {
        let Ok(catalog) = data.catalog.read() else {
            log::error!("Catalog lock poisoned");
            return HttpResponse::InternalServerError().body("Failed to read catalog.");
        };
        catalog.spaceship(&id).cloned()
    };

    let Some(spaceship) = spaceship else {
        return HttpResponse::NotFound().body("Spaceship not found");
    };

    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    session.set_spaceship(spaceship);
    HttpResponse::Ok().json(session.draft())
}

pub async fn add_activity(
    data: web::Data<AppState>,
    input: web::Json<ActivityInput>,
) -> impl Responder {
    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    session.add_activity(&input.name);
    HttpResponse::Ok().json(session.draft())
}

pub async fn remove_activity(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let name = path.into_inner();
    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    session.remove_activity(&name);
    HttpResponse::Ok().json(session.draft())
}

/// Run the gate for one wizard step against the current draft.
pub async fn validate_step(data: web::Data<AppState>, path: web::Path<u8>) -> impl Responder {
    let step = path.into_inner();
    let Ok(session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    let errors =
        crate::services::validation_service::StepValidator::validate_step(
            step,
            session.draft(),
            Utc::now(),
        );

    HttpResponse::Ok().json(serde_json::json!({
        "valid": errors.is_empty(),
        "errors": errors,
    }))
}

/// Confirm the draft. Validation failures come back as a 422 with the field
/// map so the wizard can render them inline.
pub async fn confirm_booking(data: web::Data<AppState>) -> impl Responder {
    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    match session.confirm(Utc::now()) {
        Ok(confirmed) => HttpResponse::Ok().json(confirmed),
        Err(err) => HttpResponse::UnprocessableEntity().json(err),
    }
}

pub async fn reset_booking(data: web::Data<AppState>) -> impl Responder {
    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    session.reset();
    HttpResponse::Ok().json(session.draft())
}

pub async fn get_all_bookings(data: web::Data<AppState>) -> impl Responder {
    let Ok(session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    HttpResponse::Ok().json(session.history())
}

pub async fn get_booking_by_id(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let booking_id = match Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("Invalid booking id format {:?}: {}", id, err);
            return HttpResponse::BadRequest().body("Invalid booking ID format");
        }
    };

    let Ok(session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    match session.booking(booking_id) {
        Some(booking) => HttpResponse::Ok().json(booking),
        None => HttpResponse::NotFound().body("Booking not found"),
    }
}

pub async fn cancel_booking(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let booking_id = match Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("Invalid booking id format {:?}: {}", id, err);
            return HttpResponse::BadRequest().body("Invalid booking ID format");
        }
    };

    let Ok(mut session) = data.session.lock() else {
        return HttpResponse::InternalServerError().body("Booking session unavailable.");
    };

    match session.cancel(booking_id) {
        Ok(cancelled) => HttpResponse::Ok().json(cancelled),
        Err(err) => {
            log::warn!("{}", err);
            HttpResponse::NotFound().json(err)
        }
    }
}
