// SAVIOR Domain
// This crate contains the vital-sign classification and alerting rules for the
// SAVIOR health dashboard. Everything here is synchronous and free of I/O.

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
