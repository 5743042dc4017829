//! Remote Bed Service
//!
//! Abstract contract of the external service that owns bed state,
//! plus the reqwest-backed implementation.

mod http;

use async_trait::async_trait;

use crate::domain::{AssignPatientRequest, Bed};
use crate::error::ServiceError;

pub use http::HttpBedService;

/// The bed service as seen by the client.
///
/// Futures are not `Send`: in the browser they run on the single event loop.
#[async_trait(?Send)]
pub trait BedService {
    /// `GET /beds`
    async fn list_beds(&self) -> Result<Vec<Bed>, ServiceError>;

    /// `POST /beds/:id/assign`
    async fn assign(&self, bed_id: u32, request: &AssignPatientRequest) -> Result<Bed, ServiceError>;

    /// `POST /beds/:id/discharge`
    async fn discharge(&self, bed_id: u32) -> Result<Bed, ServiceError>;

    /// `POST /beds/:id/clean`
    async fn clean(&self, bed_id: u32) -> Result<Bed, ServiceError>;

    /// Location of the CSV export (`GET /beds/export`)
    fn export_url(&self) -> String;
}
