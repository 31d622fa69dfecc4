use std::sync::{Mutex, RwLock};

use crate::services::booking_service::BookingSession;
use crate::services::catalog_service::Catalog;

/// Everything the HTTP layer injects into handlers via `web::Data`.
///
/// The booking core itself is single-actor: one user drives one draft with
/// synchronous mutations. The locks exist only because actix workers share
/// this object; they add no concurrency semantics, and no handler takes both
/// at once.
pub struct AppState {
    pub catalog: RwLock<Catalog>,
    pub session: Mutex<BookingSession>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            session: Mutex::new(BookingSession::new()),
        }
    }
}
