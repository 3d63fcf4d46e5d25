mod handlers;
mod resources;
mod routes;

pub mod models;

pub use routes::routes;
