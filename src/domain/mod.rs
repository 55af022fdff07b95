//! Domain layer containing business entities and logic.
//!
//! This module defines entities, outbound gateway interfaces, and pure
//! aggregation logic independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (geocoding keys/results, project rows)
//! - [`gateways`] - Third-party API trait definitions
//! - [`progress`] - Phase derivation and dashboard aggregates
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod gateways;
pub mod progress;
