pub mod cookies;
pub mod gate;
pub mod routes;
