pub mod auth;
pub mod conf;
pub mod error;
pub mod sheets;
pub mod startup;
pub mod theme_hub;

mod routes;
