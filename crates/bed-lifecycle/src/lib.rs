//! Bed Lifecycle
//!
//! Layered like the dashboard needs it:
//! - domain: Bed entity, enums and lifecycle transitions
//! - registry: client-side cache of beds
//! - service: remote bed service contract and its HTTP client
//! - gateway: transition intents sent through a service

pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod registry;
pub mod service;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::ApiConfig;
pub use domain::{ApiErrorResponse, AssignPatientRequest, Bed, BedState, Transition, UrgencyLevel};
pub use error::{AssignValidation, FetchError, ServiceError, TransitionError, FALLBACK_MESSAGE};
pub use gateway::BedGateway;
pub use registry::{BedRegistry, StateFilter, StateSummary};
pub use service::{BedService, HttpBedService};
