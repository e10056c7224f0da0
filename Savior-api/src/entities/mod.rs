// Public entities for the SAVIOR API
// This module contains data structures that are shared across the application boundary

// Alert board payloads
pub mod alerts;

// Common entities for error handling
pub mod common;

// Device status payloads
pub mod device;

// Simulated chart history
pub mod history;

// Vital sign requests and classification responses
pub mod vitals;
