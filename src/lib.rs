pub mod app_state;
pub mod batch;
pub mod config;
pub mod extractor;
pub mod health;
pub mod pages;
pub mod repositories;
pub mod routes;
pub mod telemetry;
