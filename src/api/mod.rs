//! API Module
//!
//! HTTP handlers and routing for the catalog's JSON surface.
//!
//! # Endpoints
//! - `GET /` - Landing page
//! - `GET /countries` - Filtered listing
//! - `GET /countries/:code` - Country detail
//! - `POST /countries/refresh` - Bulk re-fetch
//! - `GET /regions`, `GET /status`, `GET /health`
//! - `GET|PUT /theme`, `POST /theme/toggle`

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
