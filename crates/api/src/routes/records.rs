//! Route definitions for the records CRUD surface.
//!
//! ```text
//! GET    /records          -> list_records (search/filter via query params)
//! POST   /records          -> create_record
//! GET    /records/{id}     -> get_record
//! PUT    /records/{id}     -> update_record
//! DELETE /records/{id}     -> delete_record
//! ```
//!
//! Unsupported methods on either path get a 405 with an `Allow` header
//! from axum's method router.

use axum::routing::get;
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/records",
            get(records::list_records).post(records::create_record),
        )
        .route(
            "/records/{id}",
            get(records::get_record)
                .put(records::update_record)
                .delete(records::delete_record),
        )
}
