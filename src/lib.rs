pub mod api_client;
pub mod configuration;
pub mod confirmation;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
