// Savior-api lib.rs
//
// HTTP surface of the SAVIOR health dashboard: classification, alert board,
// device status and OpenAPI documentation on top of savior_domain.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
