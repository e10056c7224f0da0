//! Domain layer health check functionality
//! This module provides health check services for the application

use async_trait::async_trait;
use std::collections::HashMap;

use crate::services::{classify_blood_pressure, classify_stress_by_value, classify_temperature, heart_rate_zone};
use crate::entities::zone::HeartRateZone;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Derive the overall status from the worst component
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        Self { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the classification engine
    /// Returns Ok(true) when every canary reading lands in its documented band
    async fn check_engine_status(&self) -> Result<bool, String>;
}

/// Run canary readings through the classifiers
///
/// Returns:
/// - Ok(true) if every canary lands in its documented band
/// - Err naming the first canary that did not
pub async fn check_engine_status() -> Result<bool, String> {
    let canaries: [(&str, &str, &str); 3] = [
        ("blood pressure 165/70", classify_blood_pressure(165, 70).id, "stage2"),
        ("stress 70", classify_stress_by_value(70.0).id, "stress"),
        ("temperature 37.2", classify_temperature(37.2).id, "fever"),
    ];

    for (name, actual, expected) in canaries {
        if actual != expected {
            return Err(format!("Canary {} classified as {} instead of {}", name, actual, expected));
        }
    }

    if heart_rate_zone(30, 114).zone != HeartRateZone::Zone2 {
        return Err("Canary zone 30y/114bpm did not resolve to zone 2".to_string());
    }

    Ok(true)
}

/// Get overall system health
pub async fn get_system_health() -> SystemHealth {
    let engine = match check_engine_status().await {
        Ok(_) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    };

    SystemHealth::from_components(vec![("engine".to_string(), engine)].into_iter().collect())
}
