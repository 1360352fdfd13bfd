//! HTTP adapter for the signed-in patient's own record.

mod handlers;
mod routes;

pub use handlers::MeHandlers;
pub use routes::me_routes;
